//! A pipeline stacking recent observations (frames).
use super::{Assembler, TransformPipeline};
use crate::{
    error::LookbackError,
    tensor::TensorOps,
    window::{SlidingWindow, SlidingWindowConfig},
    Obs,
};
use anyhow::Result;
use log::{debug, trace};
use ndarray::ArrayD;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`FrameStackPipeline`].
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct FrameStackPipelineConfig {
    /// Configuration of the sliding window.
    pub window: SlidingWindowConfig,

    /// Empties the window after the final observation of an episode.
    pub reset_on_final: bool,
}

impl Default for FrameStackPipelineConfig {
    fn default() -> Self {
        Self {
            window: SlidingWindowConfig::default(),
            reset_on_final: true,
        }
    }
}

impl FrameStackPipelineConfig {
    /// Sets the number of stacked observations.
    pub fn n_stack(mut self, v: i64) -> Self {
        self.window = self.window.window_size(v);
        self
    }

    /// Sets whether the window is emptied after the final observation.
    pub fn reset_on_final(mut self, v: bool) -> Self {
        self.reset_on_final = v;
        self
    }

    /// Constructs [`FrameStackPipelineConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`FrameStackPipelineConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

/// Assembles the channels of each observation and stacks the last `n_stack` of them.
///
/// Channels of shape `[...]` are combined by the assembler `A` into one tensor, a
/// batch axis of size one is inserted, then the result is pushed into a
/// [`SlidingWindow`]. With [`StackAssembler`](super::StackAssembler) on axis 0 and
/// channels of shape `[h, w]`, observations have shape `[1, n_stack, n_channels, h, w]`.
///
/// The window is emptied at step 0, so the first observation of an episode fills
/// every slot. It is also emptied after the final observation if
/// [`FrameStackPipelineConfig::reset_on_final`] is set.
#[derive(Debug)]
pub struct FrameStackPipeline<T: TensorOps, A: Assembler<T>> {
    window: SlidingWindow<T>,
    assembler: A,
    reset_on_final: bool,
}

impl<T: TensorOps, A: Assembler<T>> FrameStackPipeline<T, A> {
    /// Constructs the pipeline.
    pub fn build(config: &FrameStackPipelineConfig, assembler: A) -> Result<Self> {
        Ok(Self {
            window: SlidingWindow::build(&config.window)?,
            assembler,
            reset_on_final: config.reset_on_final,
        })
    }

    /// Returns the sliding window.
    pub fn window(&self) -> &SlidingWindow<T> {
        &self.window
    }
}

impl<T, A> TransformPipeline for FrameStackPipeline<T, A>
where
    T: TensorOps + Obs,
    A: Assembler<T>,
{
    type Output = T;

    fn transform(&mut self, channels: &[ArrayD<f32>], step: usize, is_final: bool) -> Result<T> {
        if channels.is_empty() {
            return Err(LookbackError::EmptyInput("FrameStackPipeline").into());
        }

        if step == 0 && !self.window.is_empty() {
            debug!("Episode started, reset the window");
            self.window.reset();
        }

        let parts = channels
            .iter()
            .map(|c| T::from_array(c.clone()))
            .collect::<Result<Vec<_>>>()?;
        let obs = self.assembler.assemble(&parts)?.unsqueeze(0)?;
        trace!("Assembled observation: {:?}", obs.dims());
        let stacked = self.window.push(obs)?;

        if is_final && self.reset_on_final {
            debug!("Episode finished at step {}, reset the window", step);
            self.window.reset();
        }

        Ok(stacked)
    }
}
