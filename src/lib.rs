pub mod error;
pub mod image;
pub mod filter;
pub mod pyramid;
pub mod features;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);
