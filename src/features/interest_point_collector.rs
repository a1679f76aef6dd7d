use serde::{Serialize, Deserialize};

use crate::Float;
use crate::features::octave_interest_point::{InterestPointOrigin, OctaveInterestPointListener};
use crate::pyramid::gaussian_octave::GaussianOctave;

/// Interest point in input image coordinates.
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct InterestPoint {
    pub x: Float,
    pub y: Float,
    pub scale: Float,
    /// Scale relative to the octave the point was found in
    pub octave_scale: Float,
    pub scale_index: usize
}

/// Listener that keeps every reported point, mapped back through the
/// origin's octave size.
#[derive(Debug,Clone,Default)]
pub struct InterestPointCollector {
    pub points: Vec<InterestPoint>
}

impl InterestPointCollector {
    pub fn new() -> InterestPointCollector {
        InterestPointCollector{points: Vec::new()}
    }

    pub fn to_yaml_string(&self) -> serde_yaml::Result<String> {
        serde_yaml::to_string(&self.points)
    }
}

impl<T> OctaveInterestPointListener<GaussianOctave<T>> for InterestPointCollector {
    fn found_interest_point(&mut self, finder: &dyn InterestPointOrigin<GaussianOctave<T>>, x: Float, y: Float, octave_scale: Float) {
        let octave_size = finder.octave().map_or(1.0, |octave| octave.octave_size);
        self.points.push(InterestPoint {
            x: x*octave_size,
            y: y*octave_size,
            scale: octave_scale*octave_size,
            octave_scale,
            scale_index: finder.current_scale_index()
        });
    }
}
