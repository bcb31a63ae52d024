// microdiff-core/src/optim/mod.rs

//! Gradient utilities and parameter updates.
//!
//! This module provides per-node gradient clipping, gradient-health
//! diagnostics and a plain gradient-descent optimizer.

pub mod grad_clipping;
pub mod grad_health;
pub mod sgd;

pub use grad_clipping::clip_gradients;
pub use grad_health::{check_gradient_health, GradientHealth};
pub use sgd::Sgd;
