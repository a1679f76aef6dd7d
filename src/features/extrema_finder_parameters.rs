use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::Float;
use crate::error::OctaveError;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ExtremaFinderParameters {
    /// Minimum absolute dog value of a reported extremum
    pub magnitude_threshold: Float,
    /// Maximum ratio of principal curvatures before a point counts as an edge
    pub edge_r: Float,
    /// Pixels skipped along every image border
    pub border: usize
}

impl Default for ExtremaFinderParameters {
    fn default() -> ExtremaFinderParameters {
        ExtremaFinderParameters {
            magnitude_threshold: 0.04,
            edge_r: 10.0,
            border: 5
        }
    }
}

impl ExtremaFinderParameters {

    pub fn load<P: AsRef<Path>>(path: P) -> Result<ExtremaFinderParameters, OctaveError> {
        let yaml = fs::read_to_string(path)?;
        let parameters: ExtremaFinderParameters = serde_yaml::from_str(&yaml)?;
        parameters.validate()?;
        Ok(parameters)
    }

    pub fn validate(&self) -> Result<(), OctaveError> {
        match self {
            p if !(p.magnitude_threshold >= 0.0) => Err(OctaveError::InvalidParameters("magnitude_threshold must not be negative".to_string())),
            p if !(p.edge_r > 0.0) => Err(OctaveError::InvalidParameters("edge_r must be positive".to_string())),
            _ => Ok(())
        }
    }
}
