extern crate image as image_rs;
extern crate nalgebra as na;

use image_rs::{GrayImage, ImageBuffer, Pixel, Luma};
use image_rs::flat::NormalForm;
use na::DMatrix;

use crate::Float;
use crate::error::OctaveError;
use crate::filter::{gauss_kernel::GaussKernel1D, gaussian_2_d_convolution};
use crate::pyramid::pyramid_image::PyramidImage;
use self::image_encoding::ImageEncoding;

pub mod image_encoding;
pub mod multi_band_image;

/// Single band image. The buffer is indexed (row, col), i.e. (y, x).
#[derive(Debug,Clone,PartialEq)]
pub struct Image {
    pub buffer: DMatrix<Float>,
    pub original_encoding: ImageEncoding
}

impl Image {

    pub fn width(&self) -> usize {
        self.buffer.ncols()
    }

    pub fn height(&self) -> usize {
        self.buffer.nrows()
    }

    pub fn shape(&self) -> (usize,usize) {
        self.buffer.shape()
    }

    pub fn zeros(width: usize, height: usize, image_encoding: ImageEncoding) -> Image {
        let buffer = DMatrix::<Float>::zeros(height,width);
        Image{ buffer, original_encoding: image_encoding}
    }

    pub fn from_matrix(matrix: DMatrix<Float>, original_encoding: ImageEncoding) -> Image {
        Image{ buffer: matrix, original_encoding}
    }

    pub fn from_gray_image(image: &GrayImage, normalize: bool) -> Image {
        let buffer = Image::channel_to_matrix(image, 0, normalize);
        Image{ buffer, original_encoding: ImageEncoding::U8}
    }

    pub fn to_image(&self) -> GrayImage {
        let (rows, cols) = self.buffer.shape();
        let mut gray_image = GrayImage::new(cols as u32, rows as u32);
        if self.buffer.is_empty() {
            return gray_image;
        }

        let max = self.buffer.max();
        let min = self.buffer.min();
        for c in 0..cols {
            for r in 0..rows {
                let val = self.buffer[(r, c)];
                let pixel_value = self.original_encoding.normalize_to_gray(max,min,val);
                gray_image.put_pixel(c as u32, r as u32, Luma([pixel_value]));
            }
        }
        gray_image
    }

    pub fn downsample_half(&self) -> Image {
        let new_width = self.width()/2;
        let new_height = self.height()/2;

        let buffer = DMatrix::<Float>::from_fn(new_height,new_width, |r,c| self.buffer[(2*r,2*c)]);
        Image{ buffer, original_encoding: self.original_encoding }
    }

    // Bilinear, samples past the last row/col are clamped.
    pub fn upsample_double(&self) -> Image {
        let width = self.width();
        let height = self.height();
        if width == 0 || height == 0 {
            return Image::zeros(2*width, 2*height, self.original_encoding);
        }

        let old_buffer = &self.buffer;
        let buffer = DMatrix::<Float>::from_fn(2*height, 2*width, |y,x| {
            let x_prime = x as Float / 2.0;
            let y_prime = y as Float / 2.0;
            let x_0 = x_prime.trunc() as usize;
            let y_0 = y_prime.trunc() as usize;
            let x_1 = std::cmp::min(x_0 + 1, width - 1);
            let y_1 = std::cmp::min(y_0 + 1, height - 1);
            let dx = x_prime - x_0 as Float;
            let dy = y_prime - y_0 as Float;

            (1.0 - dx)*(1.0 - dy)*old_buffer[(y_0,x_0)] +
            dx*(1.0 - dy)*old_buffer[(y_0,x_1)] +
            (1.0 - dx)*dy*old_buffer[(y_1,x_0)] +
            dx*dy*old_buffer[(y_1,x_1)]
        });

        Image{ buffer, original_encoding: self.original_encoding }
    }

    pub(crate) fn channel_to_matrix<P: Pixel<Subpixel = u8>>(image: &ImageBuffer<P, Vec<u8>>, channel: usize, normalize: bool) -> DMatrix<Float> {
        debug_assert!(image.sample_layout().is_normal(NormalForm::RowMajorPacked));

        let (width, height) = image.dimensions();
        let size = (width * height) as usize;
        let scale = match normalize {
            true => 255.0,
            false => 1.0
        };
        let mut vec_column_major: Vec<Float> = Vec::with_capacity(size);
        for x in 0..width {
            for y in 0..height {
                let pixel_value = image.get_pixel(x, y).channels()[channel];
                vec_column_major.push(pixel_value as Float / scale);
            }
        }
        DMatrix::<Float>::from_vec(height as usize, width as usize, vec_column_major)
    }
}

impl PyramidImage for Image {
    fn width(&self) -> usize {
        Image::width(self)
    }

    fn height(&self) -> usize {
        Image::height(self)
    }

    fn band_count(&self) -> usize {
        1
    }

    fn band(&self, band: usize) -> Result<Image, OctaveError> {
        match band {
            0 => Ok(self.clone()),
            _ => Err(OctaveError::BandIndexOutOfRange{band, bands: 1})
        }
    }

    fn blur(&self, kernel: &GaussKernel1D) -> Image {
        gaussian_2_d_convolution(self, kernel)
    }

    fn downsample_half(&self) -> Image {
        Image::downsample_half(self)
    }

    fn upsample_double(&self) -> Image {
        Image::upsample_double(self)
    }
}
