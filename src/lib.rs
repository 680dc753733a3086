//! # aht-rs
//!
//! Accelerated Hadamard Transform (AHT) for BitNet v2 style models, built on
//! [Candle](https://github.com/huggingface/candle).
//!
//! A Hadamard rotation spreads the dynamic range of activations across a block
//! before aggressive (4-bit or 1-bit) quantization. This crate provides:
//!
//! - Sylvester construction of `n × n` Hadamard matrices
//! - A fixed-size transform that right-multiplies the last axis by `H_n / sqrt(n)`
//! - [`Aht`](kernels::Aht), which applies the fixed-size transform blockwise to
//!   any embedding width that is a multiple of the block size
//! - Memory estimation utilities
//!
//! The transform is a dense matmul against a cached matrix, so it runs on any
//! Candle device and gradients flow through it.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use aht_rs::kernels::{Aht, AhtConfig};
//! use candle_core::{Device, Tensor};
//!
//! let device = Device::Cpu;
//! let aht = Aht::new(AhtConfig::new(64), &device)?;
//!
//! let hidden_states = Tensor::randn(0.0f32, 1.0, (2, 16, 768), &device)?;
//! let rotated = aht.forward(&hidden_states)?;
//! let restored = aht.inverse(&rotated)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod kernels;
pub mod memory;

pub use error::{AhtError, Result};
pub use kernels::{Aht, AhtConfig, HadamardTransform};
