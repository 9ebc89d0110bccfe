//! Core traits.
use ndarray::ArrayD;
use std::fmt::Debug;

/// A set of observations of an environment.
///
/// The first axis of an observation is the batch axis. Observations produced by
/// the frame-stacking pipeline always carry a batch of one.
pub trait Obs: Clone + Debug {
    /// Returns the number of observations in the object.
    fn len(&self) -> usize;
}

/// A set of actions of the environment.
pub trait Act: Clone + Debug {
    /// Returns the number of actions in the object.
    fn len(&self) -> usize;
}

impl Obs for ArrayD<f32> {
    fn len(&self) -> usize {
        match self.shape().first() {
            Some(n) => *n,
            None => 1,
        }
    }
}
