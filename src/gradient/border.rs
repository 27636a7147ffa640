//! Border extrapolation for the 3-tap derivative filters.
use serde::{Deserialize, Serialize};

/// How samples outside the image are synthesized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Mirror without repeating the edge sample: `… 2 1 | 0 1 2 …`.
    /// Edge pixels get a zero derivative across the border.
    #[default]
    Reflect101,
    /// Clamp to the nearest edge sample: `… 0 0 | 0 1 2 …`.
    Replicate,
}

impl BorderMode {
    /// Indices of the left/centre/right taps around `i` on an axis of length `n`.
    #[inline]
    pub fn taps(self, i: usize, n: usize) -> [usize; 3] {
        debug_assert!(i < n);
        match self {
            BorderMode::Replicate => [i.saturating_sub(1), i, (i + 1).min(n - 1)],
            BorderMode::Reflect101 => {
                if n == 1 {
                    return [0, 0, 0];
                }
                let prev = if i == 0 { 1 } else { i - 1 };
                let next = if i + 1 == n { n - 2 } else { i + 1 };
                [prev, i, next]
            }
        }
    }
}
