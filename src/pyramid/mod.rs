pub mod pyramid_image;
pub mod pyramid_options;
pub mod gaussian_octave;
pub mod gaussian_pyramid;
pub mod band_reduction;
pub mod dog_octave;
