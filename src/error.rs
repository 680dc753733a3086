// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Error types for aht-rs.

use thiserror::Error;

/// Result type alias for aht-rs operations.
pub type Result<T> = std::result::Result<T, AhtError>;

/// Errors that can occur in aht-rs operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AhtError {
    /// Invalid configuration, raised at construction time.
    ///
    /// The Hadamard size must be a positive power of two and the matrix
    /// dtype must be a floating type.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Input whose last dimension is not a non-zero multiple of the Hadamard size.
    #[error(
        "invalid shape {dims:?}: last dimension must be a non-zero multiple of hadamard size {hadamard_size}"
    )]
    InvalidShape {
        /// Dimensions of the rejected input
        dims: Vec<usize>,
        /// Configured Hadamard block size
        hadamard_size: usize,
    },

    /// Block width does not match the fixed transform size.
    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        actual: Vec<usize>,
    },

    /// Candle error.
    #[error("candle error: {0}")]
    Candle(#[from] candle_core::Error),
}
