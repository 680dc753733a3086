// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Configuration for the Accelerated Hadamard Transform.

use candle_core::DType;

use crate::error::{AhtError, Result};

/// Configuration for [`Aht`](super::Aht).
///
/// # Example
///
/// ```rust
/// use aht_rs::kernels::AhtConfig;
/// use candle_core::DType;
///
/// // 128-wide blocks, f32 matrix
/// let config = AhtConfig::default();
/// assert!(config.validate().is_ok());
///
/// // 64-wide blocks with a bf16 matrix
/// let config = AhtConfig::new(64).with_dtype(DType::BF16);
/// assert_eq!(config.num_blocks(768).unwrap(), 12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AhtConfig {
    /// Width of each Hadamard block (must be a power of 2).
    pub hadamard_size: usize,

    /// Dtype of the cached normalized matrix.
    pub dtype: DType,
}

impl Default for AhtConfig {
    fn default() -> Self {
        Self {
            hadamard_size: 128,
            dtype: DType::F32,
        }
    }
}

impl AhtConfig {
    /// Configuration with the given block size and an f32 matrix.
    #[must_use]
    pub fn new(hadamard_size: usize) -> Self {
        Self {
            hadamard_size,
            ..Self::default()
        }
    }

    /// Set the matrix dtype.
    #[must_use]
    pub fn with_dtype(mut self, dtype: DType) -> Self {
        self.dtype = dtype;
        self
    }

    /// Validate configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AhtError::InvalidConfiguration`] if:
    /// - `hadamard_size` is zero or not a power of 2
    /// - `dtype` is not a floating point type
    pub fn validate(&self) -> Result<()> {
        if !self.hadamard_size.is_power_of_two() {
            return Err(AhtError::InvalidConfiguration(format!(
                "hadamard_size {} must be a positive power of 2",
                self.hadamard_size
            )));
        }
        if !self.dtype.is_float() {
            return Err(AhtError::InvalidConfiguration(format!(
                "dtype {:?} must be a floating point type",
                self.dtype
            )));
        }
        Ok(())
    }

    /// Number of Hadamard blocks in an embedding of the given width.
    ///
    /// # Errors
    ///
    /// Returns [`AhtError::InvalidShape`] if `embedding` is zero or not a
    /// multiple of `hadamard_size`.
    pub fn num_blocks(&self, embedding: usize) -> Result<usize> {
        if embedding == 0 || self.hadamard_size == 0 || embedding % self.hadamard_size != 0 {
            return Err(AhtError::InvalidShape {
                dims: vec![embedding],
                hadamard_size: self.hadamard_size,
            });
        }
        Ok(embedding / self.hadamard_size)
    }
}
