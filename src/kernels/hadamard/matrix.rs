// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Hadamard matrix generation by Sylvester construction.
//!
//! Matrices are produced as row-major `±1` entries and normalized once by
//! `1 / sqrt(n)` into the orthonormal operator used by the transform.

use candle_core::{DType, Device, Tensor};

use crate::error::{AhtError, Result};

/// Check that `n` is a valid Hadamard size.
///
/// # Errors
///
/// Returns [`AhtError::InvalidConfiguration`] if `n` is zero or not a power of 2.
pub fn validate_hadamard_size(n: usize) -> Result<()> {
    if n.is_power_of_two() {
        Ok(())
    } else {
        Err(AhtError::InvalidConfiguration(format!(
            "hadamard size {n} must be a positive power of 2"
        )))
    }
}

/// Build the `n × n` Sylvester Hadamard matrix with entries in `{+1, -1}`.
///
/// The result is row-major: entry `(i, j)` is at index `i * n + j`.
///
/// # Errors
///
/// Returns [`AhtError::InvalidConfiguration`] if `n` is zero or not a power of 2.
pub fn sylvester_hadamard(n: usize) -> Result<Vec<i8>> {
    validate_hadamard_size(n)?;
    Ok(build_sylvester(n))
}

/// Recursive doubling. `n` must already be a power of 2.
fn build_sylvester(n: usize) -> Vec<i8> {
    if n == 1 {
        return vec![1];
    }

    let half = n / 2;
    let h = build_sylvester(half);
    let mut out = Vec::with_capacity(n * n);

    // [ H  H ]
    for row in h.chunks_exact(half) {
        out.extend_from_slice(row);
        out.extend_from_slice(row);
    }
    // [ H -H ]
    for row in h.chunks_exact(half) {
        out.extend_from_slice(row);
        out.extend(row.iter().map(|&v| -v));
    }

    out
}

/// Build the normalized Hadamard operator `H_n / sqrt(n)` as an `[n, n]` tensor.
///
/// Entries are scaled in f64 and then cast to `dtype`.
///
/// # Arguments
/// * `n` - Matrix size (power of 2)
/// * `dtype` - Floating dtype of the returned tensor
/// * `device` - Device for the tensor
///
/// # Errors
/// Returns [`AhtError::InvalidConfiguration`] for an invalid size, or a
/// candle error if tensor creation fails.
pub fn normalized_hadamard(n: usize, dtype: DType, device: &Device) -> Result<Tensor> {
    let h = sylvester_hadamard(n)?;
    #[allow(clippy::cast_precision_loss)]
    let scale = 1.0 / (n as f64).sqrt();

    let data: Vec<f64> = h.into_iter().map(|v| f64::from(v) * scale).collect();
    let matrix = Tensor::from_vec(data, (n, n), device)?.to_dtype(dtype)?;

    tracing::debug!(
        "Built {}x{} normalized Hadamard matrix ({:?}) on {:?}",
        n,
        n,
        dtype,
        device
    );

    Ok(matrix)
}
