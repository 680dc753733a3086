// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Blockwise Hadamard rotation ("Flexible Hadamard").
//!
//! Generalizes the fixed-size transform to any embedding width that is a
//! multiple of the block size. The last axis is split into contiguous blocks,
//! every block is rotated by the same shared matrix, and the blocks are put
//! back in their original positions.

use candle_core::{Device, Tensor};
use candle_nn::Module;

use super::config::AhtConfig;
use super::transform::HadamardTransform;
use crate::error::{AhtError, Result};
use crate::memory::{estimate_forward_memory, matrix_bytes};

/// Accelerated Hadamard Transform layer.
///
/// Owns exactly one [`HadamardTransform`] of width `hadamard_size`.
///
/// # Example
///
/// ```rust
/// use aht_rs::kernels::{Aht, AhtConfig};
/// use candle_core::{Device, Tensor};
///
/// let device = Device::Cpu;
/// let aht = Aht::new(AhtConfig::new(4), &device).unwrap();
///
/// let x = Tensor::randn(0.0f32, 1.0, (2, 3, 12), &device).unwrap();
/// let y = aht.forward(&x).unwrap();
/// assert_eq!(y.dims(), &[2, 3, 12]);
///
/// // Width 10 is not a multiple of 4
/// let bad = Tensor::zeros((2, 3, 10), candle_core::DType::F32, &device).unwrap();
/// assert!(aht.forward(&bad).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Aht {
    /// Configuration
    config: AhtConfig,
    /// Shared fixed-size transform
    transform: HadamardTransform,
}

impl Aht {
    /// Create a new AHT layer.
    ///
    /// # Arguments
    /// * `config` - Block size and matrix dtype
    /// * `device` - Device for the cached matrix
    ///
    /// # Errors
    /// Returns [`AhtError::InvalidConfiguration`] if the configuration is
    /// invalid, before any matrix is built.
    pub fn new(config: AhtConfig, device: &Device) -> Result<Self> {
        config.validate()?;
        let transform = HadamardTransform::new(config.hadamard_size, config.dtype, device)?;

        tracing::debug!(
            "Created AHT layer with hadamard_size={} dtype={:?}",
            config.hadamard_size,
            config.dtype
        );

        Ok(Self { config, transform })
    }

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &AhtConfig {
        &self.config
    }

    /// Block width.
    #[must_use]
    pub fn hadamard_size(&self) -> usize {
        self.config.hadamard_size
    }

    /// The shared fixed-size transform.
    #[must_use]
    pub fn transform(&self) -> &HadamardTransform {
        &self.transform
    }

    /// Forward pass.
    ///
    /// # Arguments
    /// * `hidden_states` - Input tensor [..., embedding], typically
    ///   [batch, seq_len, embedding]
    ///
    /// # Returns
    /// Tensor with same shape, each block of `hadamard_size` elements along
    /// the last axis rotated independently
    ///
    /// # Errors
    /// Returns [`AhtError::InvalidShape`] if the input is a scalar or its last
    /// dimension is not a non-zero multiple of `hadamard_size`.
    pub fn forward(&self, hidden_states: &Tensor) -> Result<Tensor> {
        self.flexible_hadamard(hidden_states)
    }

    /// Undo [`forward`](Self::forward).
    ///
    /// The normalized Sylvester matrix is symmetric and orthonormal, so the
    /// rotation is its own inverse.
    ///
    /// # Errors
    /// Same as [`forward`](Self::forward).
    pub fn inverse(&self, hidden_states: &Tensor) -> Result<Tensor> {
        self.flexible_hadamard(hidden_states)
    }

    /// [..., e] -> [..., e / n, n] -> rotate -> [..., e]
    fn flexible_hadamard(&self, hidden_states: &Tensor) -> Result<Tensor> {
        let dims = hidden_states.dims();
        let hs = self.config.hadamard_size;

        let num_blocks = match dims.split_last() {
            Some((&embedding, _)) => self.config.num_blocks(embedding).map_err(|_| {
                AhtError::InvalidShape {
                    dims: dims.to_vec(),
                    hadamard_size: hs,
                }
            })?,
            None => {
                return Err(AhtError::InvalidShape {
                    dims: Vec::new(),
                    hadamard_size: hs,
                })
            }
        };

        let mut blocked = dims[..dims.len() - 1].to_vec();
        blocked.extend([num_blocks, hs]);

        let rotated = self.transform.forward(&hidden_states.reshape(blocked)?)?;
        Ok(rotated.reshape(hidden_states.shape())?)
    }

    /// Estimate VRAM usage in bytes for one forward pass.
    ///
    /// Counts the cached matrix plus input and output activations.
    #[must_use]
    pub fn vram_estimate(&self, batch_size: usize, seq_len: usize, hidden_size: usize) -> usize {
        matrix_bytes(self.config.hadamard_size, self.config.dtype)
            + estimate_forward_memory(batch_size, seq_len, hidden_size, self.config.dtype)
    }
}

/// Implement Candle's Module trait for compatibility.
impl Module for Aht {
    fn forward(&self, xs: &Tensor) -> candle_core::Result<Tensor> {
        Self::forward(self, xs).map_err(|e| candle_core::Error::Msg(e.to_string()))
    }
}
