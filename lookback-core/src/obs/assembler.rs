//! Strategies for combining tensors into one.
use crate::{error::LookbackError, tensor::TensorOps};
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Combines multiple tensors into one.
pub trait Assembler<T> {
    /// Combines `parts` into a single tensor.
    fn assemble(&self, parts: &[T]) -> Result<T>;
}

/// Stacks tensors along a new axis.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StackAssembler {
    /// Position of the inserted axis.
    pub axis: usize,
}

impl StackAssembler {
    /// Constructs an assembler stacking along `axis`.
    pub fn new(axis: usize) -> Self {
        Self { axis }
    }
}

impl<T: TensorOps> Assembler<T> for StackAssembler {
    fn assemble(&self, parts: &[T]) -> Result<T> {
        T::stack(parts, self.axis)
    }
}

/// Concatenates tensors along an existing axis.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ConcatAssembler {
    /// Axis along which tensors are concatenated.
    pub axis: usize,
}

impl ConcatAssembler {
    /// Constructs an assembler concatenating along `axis`.
    pub fn new(axis: usize) -> Self {
        Self { axis }
    }
}

impl<T: TensorOps> Assembler<T> for ConcatAssembler {
    fn assemble(&self, parts: &[T]) -> Result<T> {
        T::concat(parts, self.axis)
    }
}

/// Subtracts the first tensor from the last one.
///
/// Useful for motion features computed from consecutive frames. A single part
/// yields zeros.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DiffAssembler;

impl<T: TensorOps> Assembler<T> for DiffAssembler {
    fn assemble(&self, parts: &[T]) -> Result<T> {
        match (parts.first(), parts.last()) {
            (Some(first), Some(last)) => last.sub(first),
            _ => Err(LookbackError::EmptyInput("DiffAssembler").into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::{arr1, arr2, ArrayD};

    fn parts() -> Vec<ArrayD<f32>> {
        vec![
            arr1(&[1f32, 2.0]).into_dyn(),
            arr1(&[3f32, 4.0]).into_dyn(),
            arr1(&[6f32, 9.0]).into_dyn(),
        ]
    }

    #[test]
    fn test_stack_assembler() -> Result<()> {
        let a = StackAssembler::new(0).assemble(&parts())?;
        assert_eq!(a, arr2(&[[1f32, 2.0], [3.0, 4.0], [6.0, 9.0]]).into_dyn());
        Ok(())
    }

    #[test]
    fn test_concat_assembler() -> Result<()> {
        let a = ConcatAssembler::new(0).assemble(&parts())?;
        assert_eq!(a, arr1(&[1f32, 2.0, 3.0, 4.0, 6.0, 9.0]).into_dyn());
        Ok(())
    }

    #[test]
    fn test_diff_assembler() -> Result<()> {
        let a = DiffAssembler.assemble(&parts())?;
        assert_eq!(a, arr1(&[5f32, 7.0]).into_dyn());

        let empty: Vec<ArrayD<f32>> = vec![];
        assert!(DiffAssembler.assemble(&empty).is_err());
        Ok(())
    }
}
