use log::debug;

use crate::Float;
use crate::error::OctaveError;
use crate::filter::gauss_kernel::GaussKernel1D;
use crate::pyramid::{pyramid_image::PyramidImage, pyramid_options::GaussianPyramidOptions};

/// One resolution tier of a Gaussian pyramid.
///
/// `sigmas[i]` is the absolute blur of `images[i]` measured in pixels of this
/// octave. `octave_size` maps octave pixels back to the input image:
/// 1.0 for the first octave, 2.0 for the second and so on (0.5 when the input
/// was doubled).
#[derive(Debug,Clone,PartialEq)]
pub struct GaussianOctave<T> {
    pub images: Vec<T>,
    pub sigmas: Vec<Float>,
    pub options: GaussianPyramidOptions,
    pub octave_size: Float
}

impl<T: PyramidImage> GaussianOctave<T> {

    pub fn build(base_image: &T, base_sigma: Float, octave_size: Float, options: &GaussianPyramidOptions) -> Result<GaussianOctave<T>, OctaveError> {
        options.validate()?;

        let sigmas: Vec<Float> = (0..options.level_count()).map(|level| options.sigma(level)).collect();
        let mut images: Vec<T> = Vec::with_capacity(sigmas.len());
        let mut previous_sigma = base_sigma;

        for (level, &sigma) in sigmas.iter().enumerate() {
            let source = match level {
                0 => base_image,
                _ => &images[level-1]
            };
            let image = GaussianOctave::blur_to(source, previous_sigma, sigma, options.blur_half_factor)?;
            images.push(image);
            previous_sigma = sigma;
        }

        debug!("built octave of size {} with {} levels of {}x{}", octave_size, images.len(), base_image.width(), base_image.height());

        Ok(GaussianOctave{images, sigmas, options: options.clone(), octave_size})
    }

    /// Wraps levels that were blurred elsewhere.
    pub fn from_levels(images: Vec<T>, sigmas: Vec<Float>, octave_size: Float, options: &GaussianPyramidOptions) -> Result<GaussianOctave<T>, OctaveError> {
        if images.len() != sigmas.len() {
            return Err(OctaveError::InvalidParameters(format!("{} levels but {} sigmas", images.len(), sigmas.len())));
        }

        if let Some(first) = images.first() {
            let expected = (first.height(), first.width());
            if let Some(level) = images.iter().find(|level| (level.height(), level.width()) != expected) {
                return Err(OctaveError::DimensionMismatch{expected, found: (level.height(), level.width())});
            }
        }

        Ok(GaussianOctave{images, sigmas, options: options.clone(), octave_size})
    }

    pub fn level_count(&self) -> usize {
        self.images.len()
    }

    /// Level with twice the initial sigma, the base of the next octave once downsampled.
    pub fn next_octave_base(&self) -> Option<&T> {
        self.images.get(self.options.scales)
    }

    fn blur_to(image: &T, from_sigma: Float, to_sigma: Float, blur_half_factor: Float) -> Result<T, OctaveError> {
        match to_sigma > from_sigma {
            true => {
                let sigma = (to_sigma.powi(2) - from_sigma.powi(2)).sqrt();
                let kernel = GaussKernel1D::new(sigma, GaussKernel1D::blur_radius(blur_half_factor, sigma))?;
                Ok(image.blur(&kernel))
            },
            false => Ok(image.clone())
        }
    }
}
