//! Conversion between ndarray arrays and candle tensors.
use anyhow::Result;
use candle_core::{Device, Tensor, WithDType};
use ndarray::ArrayD;
use num_traits::AsPrimitive;

/// Converts an array into a tensor on `device`, optionally adding a batch axis.
pub fn arrayd_to_tensor<T1, T2>(
    a: &ArrayD<T1>,
    add_batch_dim: bool,
    device: &Device,
) -> Result<Tensor>
where
    T1: AsPrimitive<T2>,
    T2: WithDType,
{
    let shape = a.shape().to_vec();
    let v = a.iter().map(|e| e.as_()).collect::<Vec<T2>>();
    let t = Tensor::from_vec(v, shape, device)?;

    match add_batch_dim {
        true => Ok(t.unsqueeze(0)?),
        false => Ok(t),
    }
}

/// Converts a tensor into an array, optionally removing the leading batch axis.
pub fn tensor_to_arrayd<T>(t: &Tensor, delete_batch_dim: bool) -> Result<ArrayD<T>>
where
    T: WithDType,
{
    let shape = match delete_batch_dim {
        false => t.dims().to_vec(),
        true => t.dims().iter().skip(1).copied().collect::<Vec<_>>(),
    };
    let v: Vec<T> = t.flatten_all()?.to_vec1()?;

    Ok(ArrayD::from_shape_vec(shape, v)?)
}
