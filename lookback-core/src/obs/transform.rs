//! Delegation of observation transforms.
use crate::Obs;
use anyhow::Result;
use log::trace;
use ndarray::ArrayD;

/// Transforms raw per-channel data of an environment into an observation.
pub trait TransformPipeline {
    /// Observation produced by the pipeline.
    type Output: Obs;

    /// Transforms the channels observed at `step` of the current episode.
    ///
    /// `step` starts from 0 at every episode. `is_final` is `true` for the last
    /// observation of an episode.
    fn transform(
        &mut self,
        channels: &[ArrayD<f32>],
        step: usize,
        is_final: bool,
    ) -> Result<Self::Output>;
}

/// Forwards raw observations to a [`TransformPipeline`].
///
/// The output of the pipeline is returned as is.
#[derive(Debug)]
pub struct ObsTransformer<P> {
    pipeline: P,
    n_transforms: usize,
}

impl<P: TransformPipeline> ObsTransformer<P> {
    /// Wraps a pipeline.
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            n_transforms: 0,
        }
    }

    /// Transforms an observation with the wrapped pipeline.
    pub fn transform(
        &mut self,
        channels: &[ArrayD<f32>],
        step: usize,
        is_final: bool,
    ) -> Result<P::Output> {
        trace!(
            "Transform {} channels at step {} (is_final = {})",
            channels.len(),
            step,
            is_final
        );
        self.n_transforms += 1;
        self.pipeline.transform(channels, step, is_final)
    }

    /// The number of transforms requested so far.
    pub fn n_transforms(&self) -> usize {
        self.n_transforms
    }

    /// Returns a reference to the pipeline.
    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Returns a mutable reference to the pipeline.
    pub fn pipeline_mut(&mut self) -> &mut P {
        &mut self.pipeline
    }

    /// Unwraps the pipeline.
    pub fn into_inner(self) -> P {
        self.pipeline
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::arr1;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(usize, usize, bool)>,
    }

    impl TransformPipeline for Recorder {
        type Output = ArrayD<f32>;

        fn transform(
            &mut self,
            channels: &[ArrayD<f32>],
            step: usize,
            is_final: bool,
        ) -> Result<Self::Output> {
            self.calls.push((channels.len(), step, is_final));
            Ok(channels[0].clone() * 2.0)
        }
    }

    #[test]
    fn test_forwarding() -> Result<()> {
        let mut t = ObsTransformer::new(Recorder::default());
        let ch = vec![arr1(&[1f32, 2.0]).into_dyn()];

        let o = t.transform(&ch, 0, false)?;
        assert_eq!(o, arr1(&[2f32, 4.0]).into_dyn());
        t.transform(&ch, 1, true)?;

        assert_eq!(t.n_transforms(), 2);
        assert_eq!(t.into_inner().calls, vec![(1, 0, false), (1, 1, true)]);
        Ok(())
    }
}
