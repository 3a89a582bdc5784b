//! Visual surface adapters.
//!
//! The [`gridlayout_core::VisualSurface`] trait is the only way the grid model
//! talks to a renderer.  This module provides the adapters shipped with the
//! host:
//!
//! - **`recording`** – An in-memory surface that remembers every call, can be
//!   told to refuse specific items, and renders what it holds as CSS grid
//!   properties.  Used by the `gridlayout` binary and by integration tests.

pub mod recording;

pub use recording::{RecordingSurface, SurfaceEvent};
