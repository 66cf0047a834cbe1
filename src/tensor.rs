use ndarray::{Array1, Array2, ArrayD, ArrayView1, ArrayView2, Ix1, Ix2, IxDyn};
use serde::{Deserialize, Serialize};

use crate::error::{CnnError, Result};

/// Dense `f32` array with explicit shape metadata, row-major element order.
///
/// Immutable after construction: every operation returns a new tensor. The
/// element count always equals the product of the declared dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tensor {
    data: ArrayD<f32>,
}

impl Tensor {
    /// All-zero tensor of the given shape.
    pub fn zeros(shape: &[usize]) -> Self {
        Tensor {
            data: ArrayD::<f32>::zeros(IxDyn(shape)),
        }
    }

    /// Builds a tensor from a flat row-major buffer, validating that the
    /// element count matches the declared shape.
    pub fn from_vec(shape: &[usize], values: Vec<f32>) -> Result<Self> {
        let expected: usize = shape.iter().product();
        if values.len() != expected {
            return Err(CnnError::ShapeMismatch {
                expected: format!("{expected} elements for shape {shape:?}"),
                actual: format!("{} elements", values.len()),
            });
        }
        let data =
            ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|e| CnnError::ShapeMismatch {
                expected: format!("shape {shape:?}"),
                actual: e.to_string(),
            })?;
        Ok(Tensor { data })
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bounds-checked element access.
    pub fn get(&self, index: &[usize]) -> Result<f32> {
        self.data
            .get(IxDyn(index))
            .copied()
            .ok_or_else(|| CnnError::IndexOutOfRange {
                index: index.to_vec(),
                shape: self.shape().to_vec(),
            })
    }

    /// Elementwise addition.
    pub fn add(&self, other: &Tensor) -> Result<Tensor> {
        self.check_same_shape(other)?;
        Ok(Tensor {
            data: &self.data + &other.data,
        })
    }

    /// Elementwise multiplication.
    pub fn mul(&self, other: &Tensor) -> Result<Tensor> {
        self.check_same_shape(other)?;
        Ok(Tensor {
            data: &self.data * &other.data,
        })
    }

    /// Maximum element. Fails on a zero-element tensor.
    pub fn max(&self) -> Result<f32> {
        if self.is_empty() {
            return Err(CnnError::EmptyInput("max"));
        }
        Ok(self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max))
    }

    /// Sum of all elements (0.0 for a zero-element tensor).
    pub fn sum(&self) -> f32 {
        self.data.sum()
    }

    /// Elements in row-major order.
    pub fn to_vec(&self) -> Vec<f32> {
        self.data.iter().copied().collect()
    }

    fn check_same_shape(&self, other: &Tensor) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(CnnError::ShapeMismatch {
                expected: format!("{:?}", self.shape()),
                actual: format!("{:?}", other.shape()),
            });
        }
        Ok(())
    }

    /// Rank-2 view; fails with `ShapeMismatch` on any other rank.
    pub(crate) fn view_2d(&self) -> Result<ArrayView2<'_, f32>> {
        self.data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| CnnError::ShapeMismatch {
                expected: "a 2-D tensor".to_string(),
                actual: format!("{:?}", self.shape()),
            })
    }

    /// Rank-1 view; fails with `ShapeMismatch` on any other rank.
    pub(crate) fn view_1d(&self) -> Result<ArrayView1<'_, f32>> {
        self.data
            .view()
            .into_dimensionality::<Ix1>()
            .map_err(|_| CnnError::ShapeMismatch {
                expected: "a 1-D tensor".to_string(),
                actual: format!("{:?}", self.shape()),
            })
    }

    pub(crate) fn map(&self, f: impl Fn(f32) -> f32) -> Tensor {
        Tensor {
            data: self.data.mapv(f),
        }
    }
}

impl From<Array1<f32>> for Tensor {
    fn from(array: Array1<f32>) -> Self {
        Tensor {
            data: array.into_dyn(),
        }
    }
}

impl From<Array2<f32>> for Tensor {
    fn from(array: Array2<f32>) -> Self {
        Tensor {
            data: array.into_dyn(),
        }
    }
}

impl From<ArrayD<f32>> for Tensor {
    fn from(data: ArrayD<f32>) -> Self {
        Tensor { data }
    }
}
