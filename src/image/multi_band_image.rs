extern crate image as image_rs;

use image_rs::{GrayImage, RgbImage};

use crate::error::OctaveError;
use crate::filter::gauss_kernel::GaussKernel1D;
use crate::pyramid::pyramid_image::PyramidImage;
use super::{Image, image_encoding::ImageEncoding};

/// An image made of one or more bands of identical size, e.g. the R,G,B
/// components of a colour image.
#[derive(Debug,Clone,PartialEq)]
pub struct MultiBandImage {
    bands: Vec<Image>
}

impl MultiBandImage {

    pub fn new(bands: Vec<Image>) -> Result<MultiBandImage, OctaveError> {
        let expected = match bands.first() {
            Some(band) => band.shape(),
            None => return Err(OctaveError::InvalidParameters("a multi band image needs at least one band".to_string()))
        };

        match bands.iter().find(|band| band.shape() != expected) {
            Some(band) => Err(OctaveError::DimensionMismatch{expected, found: band.shape()}),
            None => Ok(MultiBandImage{bands})
        }
    }

    pub fn from_rgb_image(image: &RgbImage, normalize: bool) -> MultiBandImage {
        let bands = (0..3).map(|channel| Image::from_matrix(Image::channel_to_matrix(image, channel, normalize), ImageEncoding::U8)).collect();
        MultiBandImage{bands}
    }

    pub fn from_gray_image(image: &GrayImage, normalize: bool) -> MultiBandImage {
        MultiBandImage{bands: vec!(Image::from_gray_image(image, normalize))}
    }

    pub fn bands(&self) -> &[Image] {
        &self.bands
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    pub fn band(&self, band: usize) -> Result<&Image, OctaveError> {
        self.bands.get(band).ok_or(OctaveError::BandIndexOutOfRange{band, bands: self.bands.len()})
    }

    pub fn width(&self) -> usize {
        self.bands[0].width()
    }

    pub fn height(&self) -> usize {
        self.bands[0].height()
    }

    fn map_bands<F: Fn(&Image) -> Image>(&self, op: F) -> MultiBandImage {
        MultiBandImage{bands: self.bands.iter().map(op).collect()}
    }
}

impl PyramidImage for MultiBandImage {
    fn width(&self) -> usize {
        MultiBandImage::width(self)
    }

    fn height(&self) -> usize {
        MultiBandImage::height(self)
    }

    fn band_count(&self) -> usize {
        MultiBandImage::band_count(self)
    }

    fn band(&self, band: usize) -> Result<Image, OctaveError> {
        MultiBandImage::band(self, band).map(|image| image.clone())
    }

    fn blur(&self, kernel: &GaussKernel1D) -> MultiBandImage {
        self.map_bands(|band| band.blur(kernel))
    }

    fn downsample_half(&self) -> MultiBandImage {
        self.map_bands(|band| band.downsample_half())
    }

    fn upsample_double(&self) -> MultiBandImage {
        self.map_bands(|band| band.upsample_double())
    }
}
