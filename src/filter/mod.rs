use crate::image::Image;
use self::{kernel::Kernel,gauss_kernel::GaussKernel1D};

pub mod gauss_kernel;
pub mod kernel;

#[repr(u8)]
#[derive(Debug,Copy,Clone)]
pub enum FilterDirection {
    HORIZONTAL,
    VERTICAL
}

/// Convolves along one axis. Samples outside the image are clamped to the border.
pub fn filter_1d_convolution(source: &Image, filter_direction: FilterDirection, filter_kernel: &dyn Kernel) -> Image {
    let kernel = filter_kernel.kernel();
    let kernel_radius_signed = filter_kernel.radius() as isize;
    let normalizing_constant = filter_kernel.normalizing_constant();

    let buffer = &source.buffer;
    let width = buffer.ncols();
    let height = buffer.nrows();
    let mut target = Image::zeros(width, height, source.original_encoding);

    for x in 0..width {
        for y in 0..height {
            let mut acc = 0.0;
            for kernel_idx in -kernel_radius_signed..kernel_radius_signed+1 {

                let sample_value = match filter_direction {
                    FilterDirection::HORIZONTAL => {
                        let sample_idx = clamp(x as isize + kernel_idx, width);
                        buffer[(y,sample_idx)]
                    },
                    FilterDirection::VERTICAL => {
                        let sample_idx = clamp(y as isize + kernel_idx, height);
                        buffer[(sample_idx,x)]
                    }
                };

                let kernel_value = kernel[(kernel_idx + kernel_radius_signed) as usize];
                acc += sample_value*kernel_value;
            }

            target.buffer[(y,x)] = acc/normalizing_constant;
        }
    }

    target
}

pub fn gaussian_2_d_convolution(image: &Image, filter_kernel: &GaussKernel1D) -> Image {
    let blur_hor = filter_1d_convolution(image, FilterDirection::HORIZONTAL, filter_kernel);
    filter_1d_convolution(&blur_hor, FilterDirection::VERTICAL, filter_kernel)
}

fn clamp(sample_idx: isize, len: usize) -> usize {
    match sample_idx {
        idx if idx < 0 => 0,
        idx if idx >= len as isize => len - 1,
        idx => idx as usize
    }
}
