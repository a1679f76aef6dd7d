extern crate nalgebra as na;

use log::debug;
use na::{DMatrix, Matrix2};

use crate::Float;
use crate::error::OctaveError;
use crate::features::extrema_finder_parameters::ExtremaFinderParameters;
use crate::features::octave_interest_point::{InterestPointOrigin, OctaveInterestPointFinder, OctaveInterestPointListener};
use crate::pyramid::dog_octave::DogOctave;

/// Scale-space extrema finder for DoG octaves.
///
/// A sample on an interior dog level is reported when it is strictly larger or
/// strictly smaller than all 26 neighbours of its 3x3x3 cube, its magnitude
/// exceeds the threshold and it is not an edge. Points are reported at pixel
/// resolution as (x = col, y = row, sigma of the dog level).
#[derive(Debug,Clone)]
pub struct DogExtremaFinder {
    parameters: ExtremaFinderParameters,
    octave: Option<DogOctave>,
    current_scale_index: usize
}

impl DogExtremaFinder {

    pub fn new(parameters: ExtremaFinderParameters) -> DogExtremaFinder {
        DogExtremaFinder{parameters, octave: None, current_scale_index: 0}
    }

    pub fn parameters(&self) -> &ExtremaFinderParameters {
        &self.parameters
    }
}

impl Default for DogExtremaFinder {
    fn default() -> DogExtremaFinder {
        DogExtremaFinder::new(ExtremaFinderParameters::default())
    }
}

impl InterestPointOrigin<DogOctave> for DogExtremaFinder {
    fn octave(&self) -> Option<&DogOctave> {
        self.octave.as_ref()
    }

    fn current_scale_index(&self) -> usize {
        self.current_scale_index
    }
}

impl OctaveInterestPointFinder<DogOctave> for DogExtremaFinder {
    fn find(&mut self, octave: &DogOctave, listener: &mut dyn OctaveInterestPointListener<DogOctave>) -> Result<(), OctaveError> {
        self.parameters.validate()?;
        self.octave = Some(octave.clone());
        self.current_scale_index = 0;

        let levels = &octave.images;
        if levels.len() < 3 {
            debug!("{} dog level(s), no interior level to search", levels.len());
            return Ok(());
        }

        let expected = levels[0].shape();
        if let Some(level) = levels.iter().find(|level| level.shape() != expected) {
            return Err(OctaveError::DimensionMismatch{expected, found: level.shape()});
        }

        let (rows, cols) = expected;
        let border = std::cmp::max(self.parameters.border, 1);
        let mut found = 0;

        for scale_index in 1..levels.len()-1 {
            self.current_scale_index = scale_index;

            let prev_buffer = &levels[scale_index-1].buffer;
            let image_buffer = &levels[scale_index].buffer;
            let next_buffer = &levels[scale_index+1].buffer;
            let octave_scale = octave.sigmas.get(scale_index).copied().unwrap_or(scale_index as Float);

            for y in border..rows.saturating_sub(border) {
                for x in border..cols.saturating_sub(border) {
                    let sample_value = image_buffer[(y,x)];

                    if sample_value.abs() <= self.parameters.magnitude_threshold {
                        continue;
                    }

                    let is_extremum = is_extremum_in_neighbourhood(sample_value, x, y, &[(prev_buffer,false),(image_buffer,true),(next_buffer,false)]);
                    if is_extremum && !is_edge(image_buffer, x, y, self.parameters.edge_r) {
                        listener.found_interest_point(&*self, x as Float, y as Float, octave_scale);
                        found += 1;
                    }
                }
            }
        }

        debug!("found {} extrema in {} dog levels", found, levels.len());
        Ok(())
    }
}

fn is_extremum_in_neighbourhood(sample: Float, x_sample: usize, y_sample: usize, neighbourhood: &[(&DMatrix<Float>, bool)]) -> bool {

    let mut is_smallest = true;
    let mut is_largest = true;

    for &(buffer, skip_center) in neighbourhood {
        for x in x_sample-1..x_sample+2 {
            for y in y_sample-1..y_sample+2 {

                if x == x_sample && y == y_sample && skip_center {
                    continue;
                }

                let value = buffer[(y,x)];
                is_smallest &= sample < value;
                is_largest &= sample > value;

                if !(is_smallest || is_largest) {
                    return false;
                }
            }
        }
    }

    is_smallest || is_largest
}

// Principal curvature test on the 2x2 spatial hessian
fn is_edge(buffer: &DMatrix<Float>, x: usize, y: usize, r: Float) -> bool {
    let center = buffer[(y,x)];
    let dxx = buffer[(y,x+1)] + buffer[(y,x-1)] - 2.0*center;
    let dyy = buffer[(y+1,x)] + buffer[(y-1,x)] - 2.0*center;
    let dxy = (buffer[(y+1,x+1)] - buffer[(y+1,x-1)] - buffer[(y-1,x+1)] + buffer[(y-1,x-1)])/4.0;

    let hessian = Matrix2::new(dxx,dxy,
                               dxy,dyy);
    let trace = hessian.trace();
    let determinant = hessian.determinant();
    let r_factor = (r+1.0).powi(2)/r;

    !(determinant > 0.0 && trace.powi(2)/determinant < r_factor)
}
