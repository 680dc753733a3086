// SPDX-License-Identifier: MIT
// Copyright 2026 Tyler Zervas

//! Memory estimation utilities.

use candle_core::DType;

/// Bytes held by a cached `n × n` Hadamard matrix.
#[must_use]
pub fn matrix_bytes(hadamard_size: usize, dtype: DType) -> usize {
    hadamard_size * hadamard_size * dtype.size_in_bytes()
}

/// Calculate activation memory for one forward pass.
///
/// The rotation is not in place: input and output are both live.
#[must_use]
pub fn estimate_forward_memory(
    batch_size: usize,
    seq_len: usize,
    hidden_size: usize,
    dtype: DType,
) -> usize {
    let activation = batch_size * seq_len * hidden_size * dtype.size_in_bytes();
    2 * activation
}

/// Format a byte count for display.
#[must_use]
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.2} {}", UNITS[unit])
    }
}
