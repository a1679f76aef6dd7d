use std::rc::Rc;

use log::{debug, trace};

use crate::Float;
use crate::error::OctaveError;
use crate::image::Image;
use crate::features::octave_interest_point::{InterestPointOrigin, OctaveInterestPointFinder, OctaveInterestPointListener, SilentListener};
use crate::pyramid::{
    band_reduction::{reduce_to_band, FIRST_BAND},
    dog_octave::{build_dog_octave, DogOctave},
    gaussian_octave::GaussianOctave,
    gaussian_pyramid::GaussianPyramid,
    pyramid_image::PyramidImage
};

/// Runs a single band DoG finder on Gaussian octaves of multi band images.
///
/// Every call to `process` projects one band (the first unless changed with
/// `with_band`) out of the octave, differences adjacent levels and hands the
/// resulting DoG octave to the inner finder. Points reported by the inner
/// finder are forwarded unchanged to the listener with this finder as their
/// origin, so adapters can be nested without the listener on top ever seeing
/// an inner finder. Without a listener points are dropped.
///
/// Errors from band reduction or differencing are returned as is. Points
/// already forwarded before an error are not retracted.
///
/// The current octave is held as an `Rc`. `process_shared` caches the
/// caller's handle, `process` and `find` copy the octave once.
pub struct FirstBandDogFinder<T, F, L> {
    inner_finder: F,
    listener: Option<L>,
    band: usize,
    octave: Option<Rc<GaussianOctave<T>>>,
    dog_octave: Option<DogOctave>
}

impl<T, F, L> FirstBandDogFinder<T, F, L>
    where T: PyramidImage, F: OctaveInterestPointFinder<DogOctave> {

    pub fn new(inner_finder: F) -> FirstBandDogFinder<T, F, L> {
        FirstBandDogFinder {
            inner_finder,
            listener: None,
            band: FIRST_BAND,
            octave: None,
            dog_octave: None
        }
    }

    pub fn with_listener(inner_finder: F, listener: L) -> FirstBandDogFinder<T, F, L> {
        let mut finder = FirstBandDogFinder::new(inner_finder);
        finder.listener = Some(listener);
        finder
    }

    pub fn with_band(mut self, band: usize) -> FirstBandDogFinder<T, F, L> {
        self.band = band;
        self
    }

    pub fn band(&self) -> usize {
        self.band
    }

    pub fn set_listener(&mut self, listener: L) {
        self.listener = Some(listener);
    }

    pub fn listener(&self) -> Option<&L> {
        self.listener.as_ref()
    }

    pub fn listener_mut(&mut self) -> Option<&mut L> {
        self.listener.as_mut()
    }

    pub fn take_listener(&mut self) -> Option<L> {
        self.listener.take()
    }

    pub fn inner_finder(&self) -> &F {
        &self.inner_finder
    }

    /// DoG octave built by the last call to `process`
    pub fn dog_octave(&self) -> Option<&DogOctave> {
        self.dog_octave.as_ref()
    }

    pub fn process(&mut self, octave: &GaussianOctave<T>) -> Result<(), OctaveError>
        where L: OctaveInterestPointListener<GaussianOctave<T>> {
        self.process_shared(Rc::new(octave.clone()))
    }

    /// Same as `process`, keeping `octave` as the current octave without copying it.
    pub fn process_shared(&mut self, octave: Rc<GaussianOctave<T>>) -> Result<(), OctaveError>
        where L: OctaveInterestPointListener<GaussianOctave<T>> {
        let FirstBandDogFinder{inner_finder, listener, band, octave: current_octave, dog_octave} = self;
        match listener.as_mut() {
            Some(listener) => process_octave(inner_finder, *band, current_octave, dog_octave, octave, listener),
            None => process_octave(inner_finder, *band, current_octave, dog_octave, octave, &mut SilentListener)
        }
    }
}

impl<T, F, L> InterestPointOrigin<GaussianOctave<T>> for FirstBandDogFinder<T, F, L>
    where F: OctaveInterestPointFinder<DogOctave> {

    fn octave(&self) -> Option<&GaussianOctave<T>> {
        self.octave.as_deref()
    }

    fn current_scale_index(&self) -> usize {
        self.inner_finder.current_scale_index()
    }
}

/// Reports to `listener` instead of the stored one, which lets another
/// adapter or a pyramid driver use this finder as its inner finder.
impl<T, F, L> OctaveInterestPointFinder<GaussianOctave<T>> for FirstBandDogFinder<T, F, L>
    where T: PyramidImage, F: OctaveInterestPointFinder<DogOctave> {

    fn find(&mut self, octave: &GaussianOctave<T>, listener: &mut dyn OctaveInterestPointListener<GaussianOctave<T>>) -> Result<(), OctaveError> {
        process_octave(&mut self.inner_finder, self.band, &mut self.octave, &mut self.dog_octave, Rc::new(octave.clone()), listener)
    }
}

fn process_octave<T, F>(inner_finder: &mut F,
                        band: usize,
                        current_octave: &mut Option<Rc<GaussianOctave<T>>>,
                        dog_octave: &mut Option<DogOctave>,
                        octave: Rc<GaussianOctave<T>>,
                        listener: &mut dyn OctaveInterestPointListener<GaussianOctave<T>>) -> Result<(), OctaveError>
    where T: PyramidImage, F: OctaveInterestPointFinder<DogOctave> {

    *dog_octave = None;
    let current_octave: &GaussianOctave<T> = current_octave.insert(octave);

    // Same blur schedule and level count, single band levels
    let pyramid = GaussianPyramid::<Image>::new(current_octave.options.clone());
    let single_band_octave = reduce_to_band(current_octave, band)?;
    let dog_octave: &DogOctave = dog_octave.insert(build_dog_octave(&pyramid, current_octave.octave_size, &single_band_octave)?);

    let band_count = current_octave.images.first().map_or(0, |level| level.band_count());
    debug!("searching {} dog levels of band {}/{} at octave size {}", dog_octave.level_count(), band, band_count, dog_octave.octave_size);

    let mut relay = OriginRelay{octave: current_octave, listener};
    inner_finder.find(dog_octave, &mut relay)
}

struct OriginRelay<'a, T> {
    octave: &'a GaussianOctave<T>,
    listener: &'a mut dyn OctaveInterestPointListener<GaussianOctave<T>>
}

impl<'a, T> OctaveInterestPointListener<DogOctave> for OriginRelay<'a, T> {
    fn found_interest_point(&mut self, finder: &dyn InterestPointOrigin<DogOctave>, x: Float, y: Float, octave_scale: Float) {
        trace!("point at ({}, {}) scale {}", x, y, octave_scale);
        let origin = FirstBandOrigin{octave: self.octave, inner_finder: finder};
        self.listener.found_interest_point(&origin, x, y, octave_scale);
    }
}

// What listeners see of the adapter while the inner finder is running.
struct FirstBandOrigin<'a, T> {
    octave: &'a GaussianOctave<T>,
    inner_finder: &'a dyn InterestPointOrigin<DogOctave>
}

impl<'a, T> InterestPointOrigin<GaussianOctave<T>> for FirstBandOrigin<'a, T> {
    fn octave(&self) -> Option<&GaussianOctave<T>> {
        Some(self.octave)
    }

    fn current_scale_index(&self) -> usize {
        self.inner_finder.current_scale_index()
    }
}
