//! Time-series utilities for the alignment and repair pipeline.
//!
//! Modules include:
//! - `infer`: estimate a series' sampling cadence from its timestamps
//! - `align`: map two independently-sampled series onto a shared time axis
//! - `repair`: detect and rewrite corrupted region prices against the server
//!   series
/// Sampling-cadence estimation helpers.
pub mod infer;
/// Series alignment onto a shared reference axis.
pub mod align;
/// Outlier detection and in-place region-price repair.
pub mod repair;
