//! Tensor operations required from a tensor runtime.
use crate::error::LookbackError;
use anyhow::Result;
use ndarray::{ArrayD, ArrayViewD, Axis};

#[cfg(feature = "candle")]
mod candle;

/// Capabilities of a tensor runtime used by windows, assemblers and pipelines.
///
/// Implemented for [`ArrayD<f32>`], and for `candle_core::Tensor` with the `candle`
/// feature.
pub trait TensorOps: Clone + Sized {
    /// Converts an f32 array into a tensor of this backend.
    fn from_array(array: ArrayD<f32>) -> Result<Self>;

    /// Stacks tensors along a new axis inserted at `axis`.
    fn stack(tensors: &[Self], axis: usize) -> Result<Self>;

    /// Concatenates tensors along an existing axis.
    fn concat(tensors: &[Self], axis: usize) -> Result<Self>;

    /// Elementwise `self - other`. Shapes must match.
    fn sub(&self, other: &Self) -> Result<Self>;

    /// Inserts an axis of length one at `axis`.
    fn unsqueeze(&self, axis: usize) -> Result<Self>;

    /// Returns the shape of the tensor.
    fn dims(&self) -> Vec<usize>;
}

impl TensorOps for ArrayD<f32> {
    fn from_array(array: ArrayD<f32>) -> Result<Self> {
        Ok(array)
    }

    fn stack(tensors: &[Self], axis: usize) -> Result<Self> {
        if tensors.is_empty() {
            return Err(LookbackError::EmptyInput("stack").into());
        }
        let views: Vec<ArrayViewD<f32>> = tensors.iter().map(|t| t.view()).collect();
        Ok(ndarray::stack(Axis(axis), &views)?)
    }

    fn concat(tensors: &[Self], axis: usize) -> Result<Self> {
        if tensors.is_empty() {
            return Err(LookbackError::EmptyInput("concat").into());
        }
        let views: Vec<ArrayViewD<f32>> = tensors.iter().map(|t| t.view()).collect();
        Ok(ndarray::concatenate(Axis(axis), &views)?)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        // Arithmetic on arrays panics on incompatible shapes
        if self.shape() != other.shape() {
            return Err(
                LookbackError::ShapeMismatch(self.shape().to_vec(), other.shape().to_vec()).into(),
            );
        }
        Ok(self - other)
    }

    fn unsqueeze(&self, axis: usize) -> Result<Self> {
        if axis > self.ndim() {
            return Err(LookbackError::ShapeMismatch(self.shape().to_vec(), vec![axis]).into());
        }
        Ok(self.clone().insert_axis(Axis(axis)))
    }

    fn dims(&self) -> Vec<usize> {
        self.shape().to_vec()
    }
}
