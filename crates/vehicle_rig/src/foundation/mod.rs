//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the rig:
//! - Math types and smoothing operations
//! - Logging utilities

pub mod logging;
pub mod math;
