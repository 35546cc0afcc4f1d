//! UI module tests
//!
//! GTK-free tests for the MVC Controller; widgets need a display and are
//! not covered here.

#![allow(clippy::unwrap_used)]
