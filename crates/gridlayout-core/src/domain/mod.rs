//! Domain entities for the grid layout engine.
//!
//! This module contains pure placement logic with no rendering dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! Clean Architecture organises code into concentric layers.  The innermost
//! layer is called the **domain** (or "entities" layer).  Domain code:
//!
//! - Contains the core rules of the application.
//! - Has **no** imports from UI toolkits, file systems or network libraries.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Here the domain is the grid itself: which rectangular areas are taken, by
//! whom, in what order, and where the next item without coordinates goes.
//! Rendering is pushed out behind the [`surface::VisualSurface`] trait so the
//! model can be tested with a mock.

use uuid::Uuid;

pub mod alignment;
pub mod area;
pub mod columns;
pub mod cursor;
pub mod error;
pub mod grid;
pub mod surface;

/// Opaque identity of an item placed in the grid.
///
/// The grid never looks inside an item; it only needs a stable identity to
/// compare and hash.
pub type ItemId = Uuid;
