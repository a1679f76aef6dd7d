use crate::Float;
use crate::error::OctaveError;

/// Read-only view of a finder, handed to listeners as the origin of a point.
pub trait InterestPointOrigin<O> {
    /// Octave currently (or last) processed
    fn octave(&self) -> Option<&O>;
    /// Scale level the finder is currently scanning
    fn current_scale_index(&self) -> usize;
}

/// Detects interest points in an octave of type `O`.
///
/// `find` is synchronous: it returns only once the whole octave has been
/// scanned, and every point is reported to `listener` during the call in
/// the order it was found.
pub trait OctaveInterestPointFinder<O>: InterestPointOrigin<O> {
    fn find(&mut self, octave: &O, listener: &mut dyn OctaveInterestPointListener<O>) -> Result<(), OctaveError>;
}

pub trait OctaveInterestPointListener<O> {
    fn found_interest_point(&mut self, finder: &dyn InterestPointOrigin<O>, x: Float, y: Float, octave_scale: Float);
}

/// Lets a caller lend a listener it keeps ownership of.
impl<'a, O, L: OctaveInterestPointListener<O> + ?Sized> OctaveInterestPointListener<O> for &'a mut L {
    fn found_interest_point(&mut self, finder: &dyn InterestPointOrigin<O>, x: Float, y: Float, octave_scale: Float) {
        (**self).found_interest_point(finder, x, y, octave_scale)
    }
}

/// Drops every point.
#[derive(Debug,Clone,Copy,Default)]
pub struct SilentListener;

impl<O> OctaveInterestPointListener<O> for SilentListener {
    fn found_interest_point(&mut self, _finder: &dyn InterestPointOrigin<O>, _x: Float, _y: Float, _octave_scale: Float) {}
}
