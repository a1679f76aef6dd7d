use log::debug;

use crate::error::OctaveError;
use crate::image::{Image, image_encoding::ImageEncoding};
use crate::pyramid::{gaussian_octave::GaussianOctave, gaussian_pyramid::GaussianPyramid};
use crate::Float;

/// Difference-of-Gaussian octave. Level i is gaussian level i+1 minus
/// gaussian level i and keeps the sigma of level i.
pub type DogOctave = GaussianOctave<Image>;

/// Differences adjacent levels of a single band octave. Options are taken
/// from `pyramid`, the octave size is set to `octave_size`.
pub fn build_dog_octave(pyramid: &GaussianPyramid<Image>, octave_size: Float, gaussian_octave: &GaussianOctave<Image>) -> Result<DogOctave, OctaveError> {
    let images = difference_of_gaussians(&gaussian_octave.images)?;
    let sigmas = gaussian_octave.sigmas.iter().take(images.len()).cloned().collect::<Vec<Float>>();

    debug!("differenced {} gaussian levels into {} dog levels", gaussian_octave.images.len(), images.len());

    Ok(GaussianOctave {
        images,
        sigmas,
        options: pyramid.options.clone(),
        octave_size
    })
}

pub fn difference_of_gaussians(levels: &[Image]) -> Result<Vec<Image>, OctaveError> {
    if levels.len() < 2 {
        return Err(OctaveError::EmptyOctave{levels: levels.len()});
    }

    let expected = levels[0].shape();
    if let Some(level) = levels.iter().find(|level| level.shape() != expected) {
        return Err(OctaveError::DimensionMismatch{expected, found: level.shape()});
    }

    Ok(levels.windows(2).map(|pair| Image::from_matrix(&pair[1].buffer - &pair[0].buffer, ImageEncoding::F64)).collect())
}
