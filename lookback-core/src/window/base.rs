//! Fixed-length sliding window of observations.
use super::SlidingWindowConfig;
use crate::{error::LookbackError, tensor::TensorOps};
use anyhow::Result;
use log::{debug, trace};
use std::{convert::TryFrom, iter};

/// A rolling window of the last `N` observation tensors.
///
/// Each call of [`SlidingWindow::push`] returns the window stacked along axis 1.
/// An observation of shape `[batch, ...]` thus yields a tensor of shape
/// `[batch, N, ...]`, ordered from the oldest to the newest observation.
///
/// The first push after construction or [`SlidingWindow::reset`] fills every slot
/// with the pushed observation, so the first stacked observation of an episode is
/// `N` repetitions of the real one. After that, each push evicts the oldest
/// observation.
///
/// Slots are stored in a ring buffer of exactly `N` elements; `head` points to the
/// oldest one.
#[derive(Debug, Clone)]
pub struct SlidingWindow<T: TensorOps> {
    slots: Vec<T>,
    head: usize,
    window_size: usize,
}

impl<T: TensorOps> SlidingWindow<T> {
    /// Constructs an empty window holding `window_size` observations.
    ///
    /// Fails with [`LookbackError::InvalidConfiguration`] if `window_size <= 0` or if
    /// the slots cannot be allocated.
    pub fn new(window_size: i64) -> Result<Self, LookbackError> {
        let n = usize::try_from(window_size)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| {
                LookbackError::InvalidConfiguration(format!(
                    "window size must be positive, got {}",
                    window_size
                ))
            })?;
        let mut slots = Vec::new();
        slots.try_reserve_exact(n).map_err(|e| {
            LookbackError::InvalidConfiguration(format!(
                "cannot allocate {} slots: {}",
                window_size, e
            ))
        })?;
        debug!("Create sliding window with {} slots", n);

        Ok(Self {
            slots,
            head: 0,
            window_size: n,
        })
    }

    /// Constructs an empty window from a configuration.
    pub fn build(config: &SlidingWindowConfig) -> Result<Self> {
        Ok(Self::new(config.window_size)?)
    }

    /// Pushes the newest observation and returns the stacked window.
    ///
    /// Shapes are not checked here. Pushing an observation with a shape different
    /// from the others makes the stacking fail and the error is returned. The
    /// window is left unchanged in that case.
    pub fn push(&mut self, obs: T) -> Result<T> {
        let ordered: Vec<T> = if self.slots.is_empty() {
            iter::repeat(&obs).take(self.window_size).cloned().collect()
        } else {
            self.iter()
                .skip(1)
                .cloned()
                .chain(iter::once(obs.clone()))
                .collect()
        };
        let stacked = T::stack(&ordered, 1)?;

        if self.slots.is_empty() {
            trace!("Fill {} slots with the first observation", self.window_size);
            self.fill(obs);
        } else {
            trace!("Evict slot {}", self.head);
            self.slots[self.head] = obs;
            self.head = (self.head + 1) % self.window_size;
        }
        Ok(stacked)
    }

    /// Empties the window. The next push fills every slot again.
    pub fn reset(&mut self) {
        debug!("Reset sliding window");
        self.slots.clear();
        self.head = 0;
    }

    /// Fills every slot with `obs` and returns the stacked window.
    ///
    /// Equivalent to [`SlidingWindow::reset`] followed by [`SlidingWindow::push`].
    pub fn reset_with(&mut self, obs: T) -> Result<T> {
        self.reset();
        self.push(obs)
    }

    /// Returns the stacked window without modifying it, or `None` if it is empty.
    pub fn stacked(&self) -> Result<Option<T>> {
        if self.slots.is_empty() {
            Ok(None)
        } else {
            Ok(Some(self.stack()?))
        }
    }

    /// Returns the number of slots of the window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Returns the number of observations in the window, either `0` or the window size.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if nothing has been pushed since construction or the last reset.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over the observations from the oldest to the newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Returns the newest observation.
    pub fn latest(&self) -> Option<&T> {
        if self.slots.is_empty() {
            None
        } else {
            let ix = (self.head + self.window_size - 1) % self.window_size;
            Some(&self.slots[ix])
        }
    }

    // Reuses the capacity reserved in `new`
    fn fill(&mut self, obs: T) {
        self.slots.clear();
        self.slots.resize(self.window_size, obs);
        self.head = 0;
    }

    fn stack(&self) -> Result<T> {
        let ordered: Vec<T> = self.iter().cloned().collect();
        T::stack(&ordered, 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::{arr2, ArrayD, IxDyn};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn obs(v: f32) -> ArrayD<f32> {
        arr2(&[[v]]).into_dyn()
    }

    fn values(w: &SlidingWindow<ArrayD<f32>>) -> Vec<f32> {
        w.iter().map(|a| a[IxDyn(&[0, 0])]).collect()
    }

    #[test]
    fn test_invalid_window_size() {
        init();

        for n in [0, -1, i64::MIN, i64::MAX].iter() {
            let err = SlidingWindow::<ArrayD<f32>>::new(*n).unwrap_err();
            assert!(matches!(err, LookbackError::InvalidConfiguration(_)));
        }
    }

    #[test]
    fn test_build_from_config() -> Result<()> {
        let config = SlidingWindowConfig::default().window_size(2);
        let w = SlidingWindow::<ArrayD<f32>>::build(&config)?;
        assert_eq!(w.window_size(), 2);
        assert!(w.is_empty());

        let config = SlidingWindowConfig::default().window_size(0);
        assert!(SlidingWindow::<ArrayD<f32>>::build(&config).is_err());
        Ok(())
    }

    #[test]
    fn test_ring_buffer_order() -> Result<()> {
        init();

        let mut w = SlidingWindow::new(3)?;
        assert_eq!(w.latest(), None);

        w.push(obs(1.0))?;
        assert_eq!(values(&w), vec![1.0, 1.0, 1.0]);
        w.push(obs(2.0))?;
        assert_eq!(values(&w), vec![1.0, 1.0, 2.0]);
        w.push(obs(3.0))?;
        assert_eq!(values(&w), vec![1.0, 2.0, 3.0]);
        w.push(obs(4.0))?;
        assert_eq!(values(&w), vec![2.0, 3.0, 4.0]);
        assert_eq!(w.latest(), Some(&obs(4.0)));
        assert_eq!(w.len(), 3);
        Ok(())
    }

    #[test]
    fn test_reset() -> Result<()> {
        init();

        let mut w = SlidingWindow::new(2)?;
        w.push(obs(1.0))?;
        w.push(obs(2.0))?;
        w.reset();
        assert!(w.is_empty());
        assert_eq!(w.stacked()?, None);

        w.push(obs(5.0))?;
        assert_eq!(values(&w), vec![5.0, 5.0]);

        w.push(obs(6.0))?;
        let s = w.reset_with(obs(7.0))?;
        assert_eq!(values(&w), vec![7.0, 7.0]);
        assert_eq!(s.shape(), &[1, 2, 1]);
        Ok(())
    }

    #[test]
    fn test_window_size_one() -> Result<()> {
        let mut w = SlidingWindow::new(1)?;
        w.push(obs(1.0))?;
        let s = w.push(obs(2.0))?;
        assert_eq!(values(&w), vec![2.0]);
        assert_eq!(s.shape(), &[1, 1, 1]);
        Ok(())
    }

    #[test]
    fn test_shape_mismatch_propagates() -> Result<()> {
        let mut w = SlidingWindow::new(2)?;
        w.push(obs(1.0))?;
        let other = arr2(&[[1f32, 2.0]]).into_dyn();
        assert!(w.push(other).is_err());
        Ok(())
    }

    #[test]
    fn test_rejected_push_keeps_window() -> Result<()> {
        init();

        let mut w = SlidingWindow::new(3)?;
        w.push(obs(1.0))?;
        w.push(obs(2.0))?;
        let other = arr2(&[[1f32, 2.0]]).into_dyn();
        assert!(w.push(other).is_err());
        assert_eq!(values(&w), vec![1.0, 1.0, 2.0]);

        let s = w.push(obs(3.0))?;
        assert_eq!(values(&w), vec![1.0, 2.0, 3.0]);
        assert_eq!(s.shape(), &[1, 3, 1]);
        w.push(obs(4.0))?;
        assert_eq!(values(&w), vec![2.0, 3.0, 4.0]);

        // A rejected first push leaves the window empty
        let mut w = SlidingWindow::<ArrayD<f32>>::new(2)?;
        let scalar = ndarray::arr0(1f32).into_dyn();
        assert!(w.push(scalar).is_err());
        assert!(w.is_empty());
        Ok(())
    }
}
