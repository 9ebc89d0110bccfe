#![warn(missing_docs)]
//! Candle backend for lookback.
//!
//! [`TensorOps`](lookback_core::TensorOps) is implemented for [`Tensor`] by
//! `lookback-core` with its `candle` feature, so windows and pipelines work with
//! candle tensors directly:
//!
//! ```no_run
//! use candle_core::{Device, Tensor};
//! use lookback_candle::TensorWindow;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut window = TensorWindow::new(4)?;
//! let obs = Tensor::zeros(&[1, 84, 84], candle_core::DType::F32, &Device::Cpu)?;
//! let stacked = window.push(obs)?; // [1, 4, 84, 84]
//! # Ok(())
//! # }
//! ```
mod act;
pub mod util;
pub use act::{action_to_tensor, decode_action};
use candle_core::Tensor;
use lookback_core::{obs::FrameStackPipeline, window::SlidingWindow};

/// Sliding window of candle tensors.
pub type TensorWindow = SlidingWindow<Tensor>;

/// Frame-stacking pipeline producing candle tensors.
pub type TensorFrameStack<A> = FrameStackPipeline<Tensor, A>;
