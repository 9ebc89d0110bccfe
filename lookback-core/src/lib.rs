#![warn(missing_docs)]
//! Building blocks for observations and actions of reinforcement learning agents.
//!
//! * [`window::SlidingWindow`] stacks the last `N` observation tensors.
//! * [`act::Action`] is a discrete or continuous action.
//! * [`obs::ObsTransformer`] delegates raw observations to a [`obs::TransformPipeline`].
//!
//! Tensors are accessed through [`TensorOps`], implemented for [`ndarray::ArrayD`]
//! in this crate.
pub mod act;
pub mod error;
pub mod obs;
pub mod window;

mod base;
pub use base::{Act, Obs};

mod tensor;
pub use tensor::TensorOps;
