use crate::{Float,float};
use float::consts::PI;
use crate::error::OctaveError;
use super::kernel::Kernel;

/// Largest half width a kernel may have.
pub const MAX_RADIUS: usize = 1 << 16;

pub struct GaussKernel1D {
    kernel: Vec<Float>,
    sum: Float
}

impl GaussKernel1D {
    fn sample(std: Float, x: Float) -> Float {
        let exponent = (-0.5*(x/std).powi(2)).exp();
        let factor = 1.0/(std*(2.0*PI).sqrt());
        factor*exponent
    }

    pub fn new(std: Float, radius: Float) -> Result<GaussKernel1D, OctaveError> {
        if !(std > 0.0 && std.is_finite()) {
            return Err(OctaveError::InvalidParameters(format!("gaussian std {} must be positive and finite", std)));
        }
        if !(radius >= 0.0 && radius <= MAX_RADIUS as Float) {
            return Err(OctaveError::InvalidParameters(format!("kernel radius {} outside 0..={}", radius, MAX_RADIUS)));
        }

        let radius_isize = radius.trunc() as isize;
        let kernel: Vec<Float> = (-radius_isize..radius_isize+1).map(|x| GaussKernel1D::sample(std,x as Float)).collect();
        let sum = kernel.iter().sum();
        Ok(GaussKernel1D { kernel, sum })
    }

    pub fn blur_radius(blur_half_factor: Float, std: Float) -> Float {
        (blur_half_factor*std).ceil()
    }
}

impl Kernel for GaussKernel1D {
    fn kernel(&self) -> &Vec<Float> {
        &self.kernel
    }

    // Sampled taps do not integrate to 1 for small sigmas
    fn normalizing_constant(&self) -> Float {
        self.sum
    }
}
