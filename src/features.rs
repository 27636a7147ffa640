//! Sparse feature vectors handed to the SVM backend.
//!
//! A [`SparseFeatureVector`] lists the non-zero entries of a dense descriptor
//! as `(index, value)` pairs in ascending index order. The same encoding is
//! used for training examples and for prediction queries.
//!
//! The length is tracked by the `Vec`; the libsvm-style terminator
//! (`index = -1`) only appears when exporting with
//! [`SparseFeatureVector::to_svm_nodes`].
use crate::error::HogError;
use crate::hog::Descriptor;
use serde::{Deserialize, Serialize};

/// One non-zero descriptor entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureNode {
    pub index: usize,
    pub value: f32,
}

/// libsvm-compatible node; a node with `index == -1` terminates a vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvmNode {
    pub index: i32,
    pub value: f64,
}

impl SvmNode {
    pub const SENTINEL: SvmNode = SvmNode {
        index: -1,
        value: -1.0,
    };

    #[inline]
    pub fn is_sentinel(&self) -> bool {
        self.index == -1
    }
}

/// Non-zero entries of a dense descriptor, ascending and unique by index.
///
/// Deserialization goes through [`SparseFeatureVector::from_nodes`], so a
/// decoded vector always satisfies the index invariants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSparseFeatureVector")]
pub struct SparseFeatureVector {
    nodes: Vec<FeatureNode>,
    /// Length of the dense vector this was built from.
    dense_len: usize,
}

impl SparseFeatureVector {
    /// Keep every entry that is exactly non-zero.
    ///
    /// Bins that received no contribution are exactly 0.0 after block
    /// normalization, so no tolerance is applied.
    pub fn from_dense(values: &[f32]) -> Self {
        let nodes = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != 0.0)
            .map(|(index, &value)| FeatureNode { index, value })
            .collect();
        Self {
            nodes,
            dense_len: values.len(),
        }
    }

    /// Build from explicit entries, checking that indices are strictly
    /// ascending and below `dense_len`.
    pub fn from_nodes(nodes: Vec<FeatureNode>, dense_len: usize) -> Result<Self, HogError> {
        if let Some(pair) = nodes.windows(2).find(|pair| pair[0].index >= pair[1].index) {
            return Err(HogError::InvalidFeatureVector(format!(
                "index {} follows {}, indices must be strictly ascending",
                pair[1].index, pair[0].index
            )));
        }
        if let Some(last) = nodes.last().filter(|n| n.index >= dense_len) {
            return Err(HogError::InvalidFeatureVector(format!(
                "index {} out of range for dense length {dense_len}",
                last.index
            )));
        }
        Ok(Self { nodes, dense_len })
    }

    pub fn from_descriptor(descriptor: &Descriptor) -> Self {
        Self::from_dense(descriptor.as_slice())
    }

    #[inline]
    pub fn nodes(&self) -> &[FeatureNode] {
        &self.nodes
    }

    /// Number of non-zero entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn dense_len(&self) -> usize {
        self.dense_len
    }

    /// Rebuild the dense vector, zero-filling unlisted indices.
    pub fn to_dense(&self) -> Vec<f32> {
        let mut dense = vec![0.0f32; self.dense_len];
        for node in &self.nodes {
            dense[node.index] = node.value;
        }
        dense
    }

    /// Export as libsvm nodes followed by the `(-1, -1)` terminator.
    pub fn to_svm_nodes(&self) -> Vec<SvmNode> {
        self.nodes
            .iter()
            .map(|n| SvmNode {
                index: n.index as i32,
                value: f64::from(n.value),
            })
            .chain(std::iter::once(SvmNode::SENTINEL))
            .collect()
    }

    /// Inverse of [`to_svm_nodes`](Self::to_svm_nodes): reads nodes up to the
    /// first terminator. `dense_len` is taken as one past the largest index.
    ///
    /// Negative, unsorted or repeated indices are rejected.
    pub fn from_svm_nodes(nodes: &[SvmNode]) -> Result<Self, HogError> {
        let nodes = nodes
            .iter()
            .take_while(|n| !n.is_sentinel())
            .map(|n| {
                let index = usize::try_from(n.index).map_err(|_| {
                    HogError::InvalidFeatureVector(format!("negative index {}", n.index))
                })?;
                Ok(FeatureNode {
                    index,
                    value: n.value as f32,
                })
            })
            .collect::<Result<Vec<_>, HogError>>()?;
        let dense_len = nodes.iter().map(|n| n.index + 1).max().unwrap_or(0);
        Self::from_nodes(nodes, dense_len)
    }
}

/// Unchecked wire form; converted through [`SparseFeatureVector::from_nodes`].
#[derive(Deserialize)]
struct RawSparseFeatureVector {
    nodes: Vec<FeatureNode>,
    dense_len: usize,
}

impl TryFrom<RawSparseFeatureVector> for SparseFeatureVector {
    type Error = HogError;

    fn try_from(raw: RawSparseFeatureVector) -> Result<Self, Self::Error> {
        Self::from_nodes(raw.nodes, raw.dense_len)
    }
}

impl From<&Descriptor> for SparseFeatureVector {
    fn from(descriptor: &Descriptor) -> Self {
        Self::from_descriptor(descriptor)
    }
}
