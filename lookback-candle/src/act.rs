//! Actions from and to candle tensors.
use anyhow::Result;
use candle_core::{DType, Device, Tensor};
use lookback_core::{
    act::{Action, ActionKind},
    error::LookbackError,
};
use log::trace;

/// Decodes an action from the arg-max index of a score tensor.
///
/// The tensor is flattened before taking the arg-max, so it should hold the scores
/// of a single decision. See [`Action::from_scores`] for the decoding rule.
pub fn decode_action(kind: ActionKind, scores: &Tensor) -> Result<Action> {
    let scores = scores.flatten_all()?.to_dtype(DType::F32)?;
    if scores.elem_count() == 0 {
        return Err(LookbackError::EmptyScores.into());
    }
    let scores: Vec<f32> = scores.to_vec1()?;
    let act = Action::from_scores(kind, &scores)?;
    trace!("Decoded {:?} from {} scores", act, scores.len());
    Ok(act)
}

/// Converts an action into a tensor.
///
/// A discrete action becomes an `I64` tensor of shape `[1]`, a continuous action an
/// `F32` tensor of shape `[1, 1]`.
pub fn action_to_tensor(act: &Action, device: &Device) -> Result<Tensor> {
    let t = match act {
        Action::Discrete(a) => Tensor::new(&[*a], device)?,
        Action::Continuous(a) => Tensor::new(&[[*a as f32]], device)?,
    };
    Ok(t)
}
