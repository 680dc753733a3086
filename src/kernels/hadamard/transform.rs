// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Fixed-size Hadamard transform over the last axis.

use candle_core::{DType, Device, Tensor};
use candle_nn::Module;

use super::matrix::normalized_hadamard;
use crate::error::{AhtError, Result};

/// Right-multiplies the last axis of a tensor by the cached `H_n / sqrt(n)`.
///
/// The matrix is built once at construction and never mutated, so a single
/// transform can be shared across threads.
#[derive(Debug, Clone)]
pub struct HadamardTransform {
    /// Transform size `n`
    size: usize,
    /// Normalized Hadamard matrix [n, n]
    matrix: Tensor,
}

impl HadamardTransform {
    /// Create a new fixed-size transform.
    ///
    /// # Arguments
    /// * `size` - Transform size (power of 2)
    /// * `dtype` - Dtype of the cached matrix
    /// * `device` - Device for the cached matrix
    ///
    /// # Errors
    /// Returns [`AhtError::InvalidConfiguration`] if `size` is not a positive
    /// power of 2 or `dtype` is not a floating type.
    pub fn new(size: usize, dtype: DType, device: &Device) -> Result<Self> {
        if !dtype.is_float() {
            return Err(AhtError::InvalidConfiguration(format!(
                "dtype {dtype:?} must be a floating point type"
            )));
        }
        let matrix = normalized_hadamard(size, dtype, device)?;
        Ok(Self { size, matrix })
    }

    /// Transform size `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reference to the normalized matrix [n, n].
    #[must_use]
    pub fn matrix(&self) -> &Tensor {
        &self.matrix
    }

    /// Forward pass.
    ///
    /// # Arguments
    /// * `x` - Input tensor [..., n]
    ///
    /// # Returns
    /// Rotated tensor with same shape
    ///
    /// # Errors
    /// Returns [`AhtError::ShapeMismatch`] if the last dimension is not `n`.
    pub fn forward(&self, x: &Tensor) -> Result<Tensor> {
        let dims = x.dims();
        if dims.last() != Some(&self.size) {
            let mut expected = dims.to_vec();
            match expected.last_mut() {
                Some(last) => *last = self.size,
                None => expected.push(self.size),
            }
            return Err(AhtError::ShapeMismatch {
                expected,
                actual: dims.to_vec(),
            });
        }

        if x.device().is_cuda() {
            self.forward_cuda(x)
        } else {
            self.forward_cpu(x)
        }
    }

    fn forward_cpu(&self, x: &Tensor) -> Result<Tensor> {
        let matrix = self.matrix_for(x.dtype())?;

        // Fold every leading axis into rows: [rows, n] @ [n, n]
        let rows = x.elem_count() / self.size;
        let output = x.reshape((rows, self.size))?.matmul(&matrix)?;

        Ok(output.reshape(x.shape())?)
    }

    /// CUDA implementation.
    ///
    /// Candle's CUDA matmul handles the dense product, so the algorithm is the
    /// same as the CPU implementation.
    fn forward_cuda(&self, x: &Tensor) -> Result<Tensor> {
        tracing::debug!("Using CUDA Hadamard path for input shape {:?}", x.shape());
        self.forward_cpu(x)
    }

    /// Cached matrix in the requested dtype.
    fn matrix_for(&self, dtype: DType) -> Result<Tensor> {
        if dtype == self.matrix.dtype() {
            return Ok(self.matrix.clone());
        }
        tracing::debug!(
            "Casting {}x{} Hadamard matrix from {:?} to {:?}",
            self.size,
            self.size,
            self.matrix.dtype(),
            dtype
        );
        Ok(self.matrix.to_dtype(dtype)?)
    }
}

/// Implement Candle's Module trait for compatibility.
impl Module for HadamardTransform {
    fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        Self::forward(self, xs).map_err(|e| candle_core::Error::Msg(e.to_string()))
    }
}
