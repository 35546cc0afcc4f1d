//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Type tests (ToolId, View, Destination parsing)
//! - Registry tests (order, uniqueness, contents)
//! - Clock formatting tests
//! - Ticker lifecycle tests (driven by a manual scheduler)
//! - Dispatcher tests

#![allow(clippy::unwrap_used)]

mod support;

#[cfg(test)]
mod dispatcher_tests;
#[cfg(test)]
mod registry_tests;
#[cfg(test)]
mod ticker_tests;
