use crate::error::HogError;
use serde::{Deserialize, Serialize};

/// Binary class of an image: the subject is present or it is not.
///
/// Encoded as `1` / `-1` at every integer boundary; any other value is
/// rejected with [`HogError::InvalidLabel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub const POSITIVE_VALUE: i32 = 1;
    pub const NEGATIVE_VALUE: i32 = -1;

    #[inline]
    pub fn value(self) -> i32 {
        match self {
            Label::Positive => Self::POSITIVE_VALUE,
            Label::Negative => Self::NEGATIVE_VALUE,
        }
    }

    /// Map a raw decision value to a label (`> 0` is positive).
    #[inline]
    pub fn from_decision(value: f64) -> Self {
        if value > 0.0 {
            Label::Positive
        } else {
            Label::Negative
        }
    }

    /// Validate a whole label list, failing on the first unknown value.
    pub fn parse_all(values: &[i32]) -> Result<Vec<Label>, HogError> {
        values.iter().map(|&v| Label::try_from(v)).collect()
    }
}

impl TryFrom<i32> for Label {
    type Error = HogError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            Self::POSITIVE_VALUE => Ok(Label::Positive),
            Self::NEGATIVE_VALUE => Ok(Label::Negative),
            other => Err(HogError::InvalidLabel(other)),
        }
    }
}

impl From<Label> for i32 {
    fn from(label: Label) -> Self {
        label.value()
    }
}
