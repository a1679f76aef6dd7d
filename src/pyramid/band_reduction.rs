use crate::error::OctaveError;
use crate::image::Image;
use crate::pyramid::{gaussian_octave::GaussianOctave, pyramid_image::PyramidImage};

pub const FIRST_BAND: usize = 0;

/// Projects `band` out of every level. Sigmas, options and octave size are
/// carried over, so the result has the same level count and level sizes.
pub fn reduce_to_band<T: PyramidImage>(octave: &GaussianOctave<T>, band: usize) -> Result<GaussianOctave<Image>, OctaveError> {
    let images = octave.images.iter().map(|level| level.band(band)).collect::<Result<Vec<Image>, OctaveError>>()?;

    Ok(GaussianOctave {
        images,
        sigmas: octave.sigmas.clone(),
        options: octave.options.clone(),
        octave_size: octave.octave_size
    })
}
