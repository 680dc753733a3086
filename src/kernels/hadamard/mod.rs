// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Accelerated Hadamard Transform (AHT) for BitNet v2.
//!
//! Rotating activations with an orthonormal Hadamard matrix before
//! quantization spreads outliers across the block, which keeps 4-bit and
//! 1-bit activation schemes from being dominated by a few large channels.
//!
//! ## Mathematical Foundation
//!
//! Sylvester construction, starting from `H_1 = [1]`:
//!
//! ```text
//! H_2n = [ H_n   H_n ]
//!        [ H_n  -H_n ]
//! ```
//!
//! The operator used in the forward pass is `M = H_n / sqrt(n)`, which is
//! symmetric and orthonormal, so `M · M = I`:
//!
//! ```text
//! y = x @ M          (per block of n elements along the last axis)
//! x = y @ M          (the transform is its own inverse)
//! ‖y‖₂ = ‖x‖₂        (norm preserving)
//! ```
//!
//! ## Flexible Hadamard
//!
//! An embedding of width `e = k · n` is viewed as `k` contiguous blocks of
//! width `n`, each rotated by the same shared `M`:
//!
//! ```text
//! [batch, seq, e] -> [batch, seq, k, n] -> @ M -> [batch, seq, e]
//! ```
//!
//! Blocks never mix with each other.
//!
//! ## Module Structure
//!
//! - [`config`] - Block size and matrix dtype
//! - [`matrix`] - Sylvester matrix generation and normalization
//! - [`transform`] - Fixed-size transform over the last axis
//! - [`blockwise`] - The blockwise `Aht` layer

pub mod blockwise;
pub mod config;
pub mod matrix;
pub mod transform;

pub use blockwise::Aht;
pub use config::AhtConfig;
pub use matrix::{normalized_hadamard, sylvester_hadamard};
pub use transform::HadamardTransform;
