//! # Frontier Analytics
//!
//! This crate holds the numeric core of the mean-variance analysis: percentage
//! returns, their moments, the risk/return/Sharpe evaluation of a weighted
//! two-asset portfolio and the Capital Allocation Line.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of files,
//!   configuration sources or the weight grid. It depends only on `core-types`.
//! - **Stateless Calculation:** The `AnalyticsEngine` holds nothing but the
//!   risk-free rate. Every calculation takes immutable input and returns a new
//!   value, so results are deterministic and easy to test.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: The entry point bundling the calculations below.
//! - `FrontierReport`: The serializable result of a full analysis.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod cal;
pub mod engine;
pub mod error;
pub mod moments;
pub mod portfolio;
pub mod report;
pub mod returns;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::FrontierReport;
