//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide utility functions for planning
//! fixed-horizon A/B experiments: the sample size each arm needs to detect a
//! given minimum detectable effect (MDE) at a chosen significance level and
//! power, and how many days of traffic that takes. Proportion (binary) and
//! mean (continuous) metrics are supported.

/// This module houses the public API for computing critical values, sample
/// sizes and experiment plans
pub mod compute;
/// Request files describing one planning run
pub mod config;
/// This module contains error types
pub mod error;
/// Writing result tables out as delimited text or aligned text
pub mod export;
mod calculator;
mod estimate;
mod normal;
mod observations;
mod planning;
