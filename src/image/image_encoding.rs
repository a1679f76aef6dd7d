use crate::Float;

#[repr(u8)]
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum ImageEncoding {
    U8,
    F64
}

impl ImageEncoding {
    // Min/max stretch to the 8 bit range. Flat images map to 0.
    pub fn normalize_to_gray(&self, max: Float, min : Float, value: Float) -> u8 {
        let range = max - min;
        match range {
            r if r > 0.0 => ((value - min) * (255.0 / r)).round() as u8,
            _ => 0
        }
    }
}
