//! Hadamard rotation kernels.

pub mod hadamard;

pub use hadamard::{normalized_hadamard, sylvester_hadamard, Aht, AhtConfig, HadamardTransform};
