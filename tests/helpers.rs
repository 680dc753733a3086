//! Test utilities and fixtures for Hadamard transform integration tests.
//!
//! This module provides deterministic hidden-state generation and numeric
//! comparison helpers.

use anyhow::Result;
use candle_core::{Device, Tensor};

/// Value patterns for generated hidden states.
#[derive(Debug, Clone)]
pub enum ValueDistribution {
    /// Uniform distribution in [-max, max].
    Uniform { max: f32 },
    /// Normal distribution with mean=0, std=sigma.
    Normal { std: f32 },
    /// A few very large channels on top of small noise, like LLM activations.
    Outliers { magnitude: f32, every: usize },
}

/// Test fixtures for common activation patterns.
pub struct TestFixtures;

impl TestFixtures {
    /// Generate hidden states of the given shape.
    pub fn hidden_states(
        dims: &[usize],
        distribution: &ValueDistribution,
        seed: u64,
    ) -> Result<Tensor> {
        let count: usize = dims.iter().product();
        let values = match distribution {
            ValueDistribution::Uniform { max } => Self::generate_uniform_values(count, *max, seed),
            ValueDistribution::Normal { std } => Self::generate_normal_values(count, *std, seed),
            ValueDistribution::Outliers { magnitude, every } => {
                let mut values = Self::generate_normal_values(count, 0.1, seed);
                for v in values.iter_mut().step_by((*every).max(1)) {
                    *v = *magnitude;
                }
                values
            }
        };
        Ok(Tensor::from_vec(values, dims.to_vec(), &Device::Cpu)?)
    }

    /// `n × n` identity matrix.
    pub fn identity(n: usize) -> Result<Tensor> {
        let values: Vec<f32> = (0..n * n)
            .map(|i| if i / n == i % n { 1.0 } else { 0.0 })
            .collect();
        Ok(Tensor::from_vec(values, (n, n), &Device::Cpu)?)
    }

    /// Shapes covering the common (batch, seq, hidden) cases.
    pub fn standard_shapes() -> Vec<(&'static str, Vec<usize>, usize)> {
        vec![
            ("single_block", vec![1, 1, 16], 16),
            ("small", vec![2, 4, 64], 16),
            ("gpt2_hidden", vec![2, 8, 768], 64),
            ("wide_blocks", vec![1, 3, 1024], 256),
            ("trivial_blocks", vec![3, 2, 8], 1),
        ]
    }

    fn generate_uniform_values(count: usize, max: f32, seed: u64) -> Vec<f32> {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        (0..count)
            .map(|i| {
                let mut hasher = DefaultHasher::new();
                (seed + i as u64).hash(&mut hasher);
                let normalized = (hasher.finish() as f64) / (u64::MAX as f64); // [0,1)
                ((normalized * 2.0 - 1.0) * f64::from(max)) as f32
            })
            .collect()
    }

    fn generate_normal_values(count: usize, std: f32, seed: u64) -> Vec<f32> {
        // Box-Muller
        let uniform = Self::generate_uniform_values(count * 2, 1.0, seed);
        uniform
            .chunks_exact(2)
            .take(count)
            .map(|pair| {
                let u1 = pair[0].abs().max(1e-8);
                let u2 = pair[1];
                (-2.0 * u1.ln()).sqrt() * (2.0 * std::f32::consts::PI * u2).cos() * std
            })
            .collect()
    }
}

/// Utility functions for numeric validation.
pub struct ValidationUtils;

impl ValidationUtils {
    /// Maximum absolute elementwise difference.
    pub fn max_abs_diff(a: &Tensor, b: &Tensor) -> Result<f32> {
        let a = a.flatten_all()?.to_vec1::<f32>()?;
        let b = b.flatten_all()?.to_vec1::<f32>()?;
        assert_eq!(a.len(), b.len(), "Tensor dimensions must match");

        Ok(a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0.0, f32::max))
    }

    /// Euclidean norm of every contiguous chunk of `width` elements.
    pub fn chunk_norms(t: &Tensor, width: usize) -> Result<Vec<f32>> {
        let values = t.flatten_all()?.to_vec1::<f32>()?;
        Ok(values
            .chunks_exact(width)
            .map(|chunk| chunk.iter().map(|v| v * v).sum::<f32>().sqrt())
            .collect())
    }

    /// Largest absolute value.
    pub fn abs_max(t: &Tensor) -> Result<f32> {
        let values = t.flatten_all()?.to_vec1::<f32>()?;
        Ok(values.iter().fold(0.0, |m, v| m.max(v.abs())))
    }
}

/// Performance timing utilities.
pub struct TimingUtils;

impl TimingUtils {
    /// Time a function execution and return (result, duration_ms).
    pub fn time_execution<F, R>(f: F) -> (R, f64)
    where
        F: FnOnce() -> R,
    {
        let start = std::time::Instant::now();
        let result = f();
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
        (result, duration_ms)
    }
}
