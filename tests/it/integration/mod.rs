//! Integration tests for Gridshift.
//!
//! These tests run complete drag sessions through the gesture driver and
//! check the data sources and notifications they leave behind.

mod delete_zone_tests;
mod long_press_flow_tests;
