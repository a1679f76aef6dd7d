use log::{debug, warn};

use crate::error::OctaveError;
use crate::features::octave_interest_point::{OctaveInterestPointFinder, OctaveInterestPointListener};
use crate::pyramid::{gaussian_octave::GaussianOctave, pyramid_image::PyramidImage, pyramid_options::GaussianPyramidOptions};

#[derive(Debug,Clone,PartialEq)]
pub struct GaussianPyramid<T> {
    pub options: GaussianPyramidOptions,
    pub octaves: Vec<GaussianOctave<T>>
}

impl<T: PyramidImage> GaussianPyramid<T> {

    pub fn new(options: GaussianPyramidOptions) -> GaussianPyramid<T> {
        GaussianPyramid{options, octaves: Vec::new()}
    }

    /// Rebuilds all octaves from `image`.
    pub fn process(&mut self, image: &T) -> Result<(), OctaveError> {
        self.process_octaves(image, |_| Ok(()))
    }

    /// Rebuilds all octaves and hands each one to `finder` as soon as it is built.
    /// Stops at the first error.
    pub fn process_with(&mut self, image: &T, finder: &mut dyn OctaveInterestPointFinder<GaussianOctave<T>>, listener: &mut dyn OctaveInterestPointListener<GaussianOctave<T>>) -> Result<(), OctaveError> {
        self.process_octaves(image, |octave| finder.find(octave, &mut *listener))
    }

    fn process_octaves<P>(&mut self, image: &T, mut octave_processor: P) -> Result<(), OctaveError>
        where P: FnMut(&GaussianOctave<T>) -> Result<(), OctaveError> {
        self.options.validate()?;
        self.octaves.clear();

        let (mut octave_image, mut octave_size, mut base_sigma) = match self.options.double_initial_image {
            true => (image.upsample_double(), 0.5, 2.0*self.options.input_sigma),
            false => (image.clone(), 1.0, self.options.input_sigma)
        };
        let (min_rows, min_cols) = self.options.min_image_dimensions;

        loop {
            if let Some(octave_count) = self.options.octave_count {
                if self.octaves.len() >= octave_count {
                    break;
                }
            }

            if octave_image.height() < min_rows || octave_image.width() < min_cols {
                if let Some(octave_count) = self.options.octave_count {
                    warn!("stopped after {} of {} octaves: {}x{} is below the minimum size", self.octaves.len(), octave_count, octave_image.width(), octave_image.height());
                }
                break;
            }

            let octave = GaussianOctave::build(&octave_image, base_sigma, octave_size, &self.options)?;
            octave_processor(&octave)?;

            let next_image = octave.next_octave_base().map(|base| base.downsample_half());
            self.octaves.push(octave);

            octave_image = match next_image {
                Some(image) => image,
                None => break
            };
            octave_size *= 2.0;
            base_sigma = self.options.initial_sigma;
        }

        debug!("pyramid holds {} octaves", self.octaves.len());
        Ok(())
    }
}
