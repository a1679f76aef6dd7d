pub mod octave_interest_point;
pub mod first_band_dog_finder;
pub mod extrema_finder_parameters;
pub mod dog_extrema_finder;
pub mod interest_point_collector;
