//! Core components of the `fundnav-rs` crate.
//!
//! This module contains the foundational building blocks, including:
//! - The [`FundClient`] and its builder.
//! - The primary [`NavError`] type.
//! - Shared data models like [`NavRecord`] and [`RawTable`].
//! - The [`TrendService`] seam between the pipeline and its data source.

/// The HTTP client (`FundClient`), builder, and configuration.
pub mod client;
/// The primary error type (`NavError`) for the crate.
pub mod error;
/// Shared data models (`NavRecord`, `RawTable`, `Cell`, `Indicator`).
pub mod models;
/// Service trait abstracting where trend tables come from.
pub mod services;

#[cfg(feature = "test-mode")]
/// Records provider bodies to disk when `FUNDNAV_RECORD=1`.
pub mod fixtures;

// convenient re-exports so most code can just `use crate::core::FundClient`
pub use client::{FundClient, FundClientBuilder};
pub use error::NavError;
pub use models::{Cell, Indicator, NavRecord, RawTable};
pub use services::TrendService;
