#![allow(dead_code)]
extern crate nalgebra as na;

use na::DMatrix;

use band_dog::Float;
use band_dog::error::OctaveError;
use band_dog::image::{Image, image_encoding::ImageEncoding, multi_band_image::MultiBandImage};
use band_dog::pyramid::{gaussian_octave::GaussianOctave, pyramid_options::GaussianPyramidOptions, dog_octave::DogOctave};
use band_dog::features::octave_interest_point::{InterestPointOrigin, OctaveInterestPointFinder, OctaveInterestPointListener};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn constant_image(width: usize, height: usize, value: Float) -> Image {
    Image::from_matrix(DMatrix::<Float>::from_element(height, width, value), ImageEncoding::F64)
}

pub fn multi_band(bands: Vec<Image>) -> MultiBandImage {
    MultiBandImage::new(bands).expect("bands of equal size")
}

pub fn octave_of<T: band_dog::pyramid::pyramid_image::PyramidImage>(levels: Vec<T>) -> GaussianOctave<T> {
    let options = GaussianPyramidOptions::default();
    let sigmas = (0..levels.len()).map(|level| options.sigma(level)).collect();
    GaussianOctave::from_levels(levels, sigmas, 1.0, &options).expect("levels of equal size")
}

/// Reports a fixed list of points for every octave it is given,
/// then fails with `failure` if one is set.
pub struct ScriptedFinder {
    pub points: Vec<(Float, Float, Float)>,
    pub scale_index: usize,
    pub octave: Option<DogOctave>,
    pub processed: usize,
    pub failure: Option<String>
}

impl ScriptedFinder {
    pub fn new(points: Vec<(Float, Float, Float)>, scale_index: usize) -> ScriptedFinder {
        ScriptedFinder{points, scale_index, octave: None, processed: 0, failure: None}
    }

    pub fn failing_after(points: Vec<(Float, Float, Float)>, failure: &str) -> ScriptedFinder {
        ScriptedFinder{failure: Some(failure.to_string()), ..ScriptedFinder::new(points, 0)}
    }
}

impl InterestPointOrigin<DogOctave> for ScriptedFinder {
    fn octave(&self) -> Option<&DogOctave> {
        self.octave.as_ref()
    }

    fn current_scale_index(&self) -> usize {
        self.scale_index
    }
}

impl OctaveInterestPointFinder<DogOctave> for ScriptedFinder {
    fn find(&mut self, octave: &DogOctave, listener: &mut dyn OctaveInterestPointListener<DogOctave>) -> Result<(), OctaveError> {
        self.octave = Some(octave.clone());
        self.processed += 1;
        for i in 0..self.points.len() {
            let (x, y, scale) = self.points[i];
            listener.found_interest_point(&*self, x, y, scale);
        }
        match &self.failure {
            Some(failure) => Err(OctaveError::InvalidParameters(failure.clone())),
            None => Ok(())
        }
    }
}

/// Reports every dog sample above the threshold, scale = index of the dog level.
pub struct ThresholdFinder {
    pub threshold: Float,
    pub scale_index: usize,
    pub octave: Option<DogOctave>
}

impl ThresholdFinder {
    pub fn new(threshold: Float) -> ThresholdFinder {
        ThresholdFinder{threshold, scale_index: 0, octave: None}
    }
}

impl InterestPointOrigin<DogOctave> for ThresholdFinder {
    fn octave(&self) -> Option<&DogOctave> {
        self.octave.as_ref()
    }

    fn current_scale_index(&self) -> usize {
        self.scale_index
    }
}

impl OctaveInterestPointFinder<DogOctave> for ThresholdFinder {
    fn find(&mut self, octave: &DogOctave, listener: &mut dyn OctaveInterestPointListener<DogOctave>) -> Result<(), OctaveError> {
        self.octave = Some(octave.clone());
        for (scale_index, level) in octave.images.iter().enumerate() {
            self.scale_index = scale_index;
            for x in 0..level.width() {
                for y in 0..level.height() {
                    if level.buffer[(y,x)] > self.threshold {
                        listener.found_interest_point(&*self, x as Float, y as Float, scale_index as Float);
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug,Clone,PartialEq)]
pub struct RecordedPoint<O> {
    pub x: Float,
    pub y: Float,
    pub scale: Float,
    pub scale_index: usize,
    pub origin_octave: Option<O>
}

/// Records every callback together with what the origin exposed at that time.
pub struct RecordingListener<O> {
    pub points: Vec<RecordedPoint<O>>
}

impl<O> RecordingListener<O> {
    pub fn new() -> RecordingListener<O> {
        RecordingListener{points: Vec::new()}
    }
}

impl<O: Clone> OctaveInterestPointListener<O> for RecordingListener<O> {
    fn found_interest_point(&mut self, finder: &dyn InterestPointOrigin<O>, x: Float, y: Float, octave_scale: Float) {
        self.points.push(RecordedPoint {
            x,
            y,
            scale: octave_scale,
            scale_index: finder.current_scale_index(),
            origin_octave: finder.octave().cloned()
        });
    }
}
