//! Storage infrastructure: configuration file persistence.
//!
//! This module provides a thin adapter between the application and the
//! file system.  The `config` sub-module handles:
//!
//! - Reading a TOML grid description from any path, or from the
//!   platform-appropriate default location.
//! - Writing a description back to disk.
//! - Providing sensible defaults when the file does not exist yet.
//!
//! The grid model itself is never persisted; only the description used to
//! build it is.

pub mod config;
