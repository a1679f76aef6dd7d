use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::Float;
use crate::error::OctaveError;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct GaussianPyramidOptions {
    /// Absolute sigma of the first level of every octave.
    pub initial_sigma: Float,
    /// Number of intervals per octave. An octave holds scales + 3 levels.
    pub scales: usize,
    /// Kernel half width as a multiple of sigma.
    pub blur_half_factor: Float,
    /// Blur assumed to be present in the input image.
    pub input_sigma: Float,
    /// Stop after this many octaves. None builds until min_image_dimensions.
    pub octave_count: Option<usize>,
    /// (rows, cols)
    pub min_image_dimensions: (usize,usize),
    pub double_initial_image: bool
}

impl Default for GaussianPyramidOptions {
    fn default() -> GaussianPyramidOptions {
        GaussianPyramidOptions {
            initial_sigma: 1.6,
            scales: 3,
            blur_half_factor: 4.0,
            input_sigma: 0.5,
            octave_count: None,
            min_image_dimensions: (8,8),
            double_initial_image: false
        }
    }
}

impl GaussianPyramidOptions {

    pub fn load<P: AsRef<Path>>(path: P) -> Result<GaussianPyramidOptions, OctaveError> {
        let yaml = fs::read_to_string(path)?;
        GaussianPyramidOptions::from_yaml_str(&yaml)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<GaussianPyramidOptions, OctaveError> {
        let options: GaussianPyramidOptions = serde_yaml::from_str(yaml)?;
        options.validate()?;
        Ok(options)
    }

    pub fn to_yaml_string(&self) -> Result<String, OctaveError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), OctaveError> {
        let invalid = |reason: &str| -> Result<(), OctaveError> { Err(OctaveError::InvalidParameters(reason.to_string())) };
        match self {
            o if o.scales == 0 => invalid("scales must be at least 1"),
            o if !(o.initial_sigma > 0.0 && o.initial_sigma.is_finite()) => invalid("initial_sigma must be positive and finite"),
            o if !(o.input_sigma >= 0.0 && o.input_sigma.is_finite()) => invalid("input_sigma must be finite and not negative"),
            o if !(o.blur_half_factor > 0.0 && o.blur_half_factor.is_finite()) => invalid("blur_half_factor must be positive and finite"),
            o if o.octave_count == Some(0) => invalid("octave_count must be at least 1"),
            o if o.min_image_dimensions.0 == 0 || o.min_image_dimensions.1 == 0 => invalid("min_image_dimensions must be at least 1x1"),
            _ => Ok(())
        }
    }

    /// Number of Gaussian levels in one octave.
    pub fn level_count(&self) -> usize {
        self.scales + 3
    }

    /// Absolute sigma of level `level` within an octave.
    pub fn sigma(&self, level: usize) -> Float {
        self.initial_sigma*(level as Float/self.scales as Float).exp2()
    }
}
