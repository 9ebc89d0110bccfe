//! [`TensorOps`] for candle tensors.
use super::TensorOps;
use crate::{error::LookbackError, Obs};
use anyhow::Result;
use candle_core::{Device, Tensor};
use ndarray::ArrayD;

impl TensorOps for Tensor {
    /// The tensor is placed on CPU.
    fn from_array(array: ArrayD<f32>) -> Result<Self> {
        let shape = array.shape().to_vec();
        let v = array.iter().copied().collect::<Vec<_>>();
        Ok(Tensor::from_vec(v, shape, &Device::Cpu)?)
    }

    fn stack(tensors: &[Self], axis: usize) -> Result<Self> {
        if tensors.is_empty() {
            return Err(LookbackError::EmptyInput("stack").into());
        }
        Ok(Tensor::stack(tensors, axis)?)
    }

    fn concat(tensors: &[Self], axis: usize) -> Result<Self> {
        if tensors.is_empty() {
            return Err(LookbackError::EmptyInput("concat").into());
        }
        Ok(Tensor::cat(tensors, axis)?)
    }

    fn sub(&self, other: &Self) -> Result<Self> {
        Ok(Tensor::sub(self, other)?)
    }

    fn unsqueeze(&self, axis: usize) -> Result<Self> {
        Ok(Tensor::unsqueeze(self, axis)?)
    }

    fn dims(&self) -> Vec<usize> {
        Tensor::dims(self).to_vec()
    }
}

impl Obs for Tensor {
    fn len(&self) -> usize {
        Tensor::dims(self).first().copied().unwrap_or(1)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_from_array() -> Result<()> {
        let t = <Tensor as TensorOps>::from_array(arr2(&[[1f32, 2.0], [3.0, 4.0]]).into_dyn())?;
        assert_eq!(t.dims(), &[2, 2]);
        assert_eq!(t.to_vec2::<f32>()?, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        Ok(())
    }

    #[test]
    fn test_stack_and_sub() -> Result<()> {
        let a = Tensor::new(&[[1f32, 2.0]], &Device::Cpu)?;
        let b = Tensor::new(&[[4f32, 6.0]], &Device::Cpu)?;
        let s = <Tensor as TensorOps>::stack(&[a.clone(), b.clone()], 1)?;
        assert_eq!(s.dims(), &[1, 2, 2]);
        let d = TensorOps::sub(&b, &a)?;
        assert_eq!(d.to_vec2::<f32>()?, vec![vec![3.0, 4.0]]);
        assert!(<Tensor as TensorOps>::stack(&[], 0).is_err());
        Ok(())
    }
}
