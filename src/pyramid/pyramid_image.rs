use crate::error::OctaveError;
use crate::filter::gauss_kernel::GaussKernel1D;
use crate::image::Image;

/// Level type of a Gaussian octave.
pub trait PyramidImage: Clone {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn band_count(&self) -> usize;
    // Copy of a single band
    fn band(&self, band: usize) -> Result<Image, OctaveError>;
    fn blur(&self, kernel: &GaussKernel1D) -> Self;
    fn downsample_half(&self) -> Self;
    fn upsample_double(&self) -> Self;
}
