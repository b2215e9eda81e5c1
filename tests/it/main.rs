//! Single test binary entry point.
//!
//! All integration tests link into one binary.
//!
//! Structure:
//! - helpers: Canvas builders and recording collaborators
//! - integration: Full drag sessions through the gesture driver
//! - unit: Single-component tests against the public API

mod integration;
