//! Foundation module - Core utilities and types
//!
//! This module provides the utilities shared by the rest of the crate:
//! - Math types and camera matrix helpers
//! - Logging setup

pub mod math;
pub mod logging;
