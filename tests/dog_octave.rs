extern crate nalgebra as na;

mod common;

use na::DMatrix;
use rand::{Rng, SeedableRng, rngs::StdRng};

use band_dog::Float;
use band_dog::error::OctaveError;
use band_dog::image::{Image, image_encoding::ImageEncoding};
use band_dog::pyramid::{
    dog_octave::{build_dog_octave, difference_of_gaussians},
    gaussian_pyramid::GaussianPyramid,
    pyramid_options::GaussianPyramidOptions
};
use common::{constant_image, octave_of};

fn random_image(rng: &mut StdRng, width: usize, height: usize) -> Image {
    Image::from_matrix(DMatrix::<Float>::from_fn(height, width, |_,_| rng.gen_range(-1.0..1.0)), ImageEncoding::F64)
}

#[test]
fn dog_has_one_level_less_than_its_gaussian_octave() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let level_count = rng.gen_range(2..9);
        let width = rng.gen_range(1..24);
        let height = rng.gen_range(1..24);
        let levels = (0..level_count).map(|_| random_image(&mut rng, width, height)).collect::<Vec<Image>>();

        let dog = difference_of_gaussians(&levels).expect("levels share one size");

        assert_eq!(dog.len(), level_count - 1);
        assert!(dog.iter().all(|level| level.shape() == (height, width)));
    }
}

#[test]
fn dog_level_is_upper_minus_lower_gaussian_level() {
    let levels = vec!(constant_image(4, 3, 1.0), constant_image(4, 3, 3.5), constant_image(4, 3, 2.0));

    let dog = difference_of_gaussians(&levels).expect("levels share one size");

    assert!(dog[0].buffer.iter().all(|&v| v == 2.5));
    assert!(dog[1].buffer.iter().all(|&v| v == -1.5));
    assert_eq!(dog[0].original_encoding, ImageEncoding::F64);
}

#[test]
fn fewer_than_two_levels_is_an_empty_octave() {
    match difference_of_gaussians(&[]) {
        Err(OctaveError::EmptyOctave{levels}) => assert_eq!(levels, 0),
        other => panic!("expected EmptyOctave, got {:?}", other)
    }

    match difference_of_gaussians(&[constant_image(5, 5, 0.0)]) {
        Err(OctaveError::EmptyOctave{levels}) => assert_eq!(levels, 1),
        other => panic!("expected EmptyOctave, got {:?}", other)
    }
}

#[test]
fn levels_of_different_size_are_a_dimension_mismatch() {
    let levels = vec!(constant_image(6, 4, 0.0), constant_image(6, 4, 1.0), constant_image(5, 4, 2.0));

    match difference_of_gaussians(&levels) {
        Err(OctaveError::DimensionMismatch{expected, found}) => {
            assert_eq!(expected, (4, 6));
            assert_eq!(found, (4, 5));
        },
        other => panic!("expected DimensionMismatch, got {:?}", other)
    }
}

#[test]
fn dog_octave_keeps_scale_metadata() {
    let gaussian_octave = octave_of(vec!(constant_image(8, 8, 0.0), constant_image(8, 8, 1.0), constant_image(8, 8, 3.0), constant_image(8, 8, 6.0)));
    let mut options = GaussianPyramidOptions::default();
    options.scales = 1;
    let pyramid = GaussianPyramid::<Image>::new(options.clone());

    let dog_octave = build_dog_octave(&pyramid, 4.0, &gaussian_octave).expect("valid octave");

    assert_eq!(dog_octave.level_count(), 3);
    assert_eq!(dog_octave.octave_size, 4.0);
    assert_eq!(dog_octave.options, options);
    assert_eq!(dog_octave.sigmas, gaussian_octave.sigmas[0..3].to_vec());
    assert!(dog_octave.images[2].buffer.iter().all(|&v| v == 3.0));
}
