//! Discrete and continuous actions.
use crate::{error::LookbackError, Act};
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// The variant of [`Action`] to be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum ActionKind {
    /// Builds [`Action::Discrete`].
    Discrete,

    /// Builds [`Action::Continuous`].
    Continuous,
}

/// An action selected by an agent.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub enum Action {
    /// Index of a discrete action.
    Discrete(i64),

    /// Scalar continuous action.
    Continuous(f64),
}

impl Action {
    /// Constructs an action from an integer index.
    pub fn from_index(kind: ActionKind, index: i64) -> Self {
        match kind {
            ActionKind::Discrete => Action::Discrete(index),
            ActionKind::Continuous => Action::Continuous(index as f64),
        }
    }

    /// Constructs an action from the arg-max index of a score vector.
    ///
    /// A continuous action takes the arg-max index itself as its value.
    /// The first maximal score wins ties. NaN scores are never selected unless
    /// all scores are NaN, in which case index 0 is taken.
    pub fn from_scores<F: Float>(kind: ActionKind, scores: &[F]) -> Result<Self, LookbackError> {
        let index = argmax(scores).ok_or(LookbackError::EmptyScores)?;
        Ok(Self::from_index(kind, index as i64))
    }

    /// Returns the variant of the action.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Discrete(_) => ActionKind::Discrete,
            Action::Continuous(_) => ActionKind::Continuous,
        }
    }

    /// Returns the index of a discrete action.
    pub fn as_discrete(&self) -> Option<i64> {
        match self {
            Action::Discrete(a) => Some(*a),
            Action::Continuous(_) => None,
        }
    }

    /// Returns the value of a continuous action.
    pub fn as_continuous(&self) -> Option<f64> {
        match self {
            Action::Discrete(_) => None,
            Action::Continuous(a) => Some(*a),
        }
    }
}

impl Act for Action {
    fn len(&self) -> usize {
        1
    }
}

impl From<i64> for Action {
    fn from(index: i64) -> Self {
        Action::Discrete(index)
    }
}

fn argmax<F: Float>(scores: &[F]) -> Option<usize> {
    let mut best: Option<(usize, F)> = None;
    for (i, &s) in scores.iter().enumerate() {
        let replace = match best {
            None => true,
            Some((_, b)) => !s.is_nan() && (b.is_nan() || s > b),
        };
        if replace {
            best = Some((i, s));
        }
    }
    best.map(|(i, _)| i)
}
