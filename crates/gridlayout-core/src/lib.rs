//! # gridlayout-core
//!
//! The placement engine of a rectangular grid layout: components are placed
//! over rectangular cell ranges of an M-column by N-row grid, either at explicit
//! coordinates or at an auto-advancing cursor.
//!
//! This crate has zero dependencies on rendering toolkits, file systems or
//! network sockets.  Everything a renderer needs to know is pushed through the
//! [`VisualSurface`] trait.
//!
//! # Architecture overview (for beginners)
//!
//! Think of a spreadsheet where each component may cover a block of cells.
//! The engine answers three questions:
//!
//! - **Is this block free?**  No two components may share a cell, and every
//!   block must lie inside the grid.  [`GridModel::place`] refuses anything
//!   else with a typed [`GridError`].
//!
//! - **Where does the next component go?**  A [`Cursor`] walks the grid left
//!   to right, top to bottom.  [`GridModel::auto_place`] skips cells that are
//!   taken and grows the grid when it runs off the edge.
//!
//! - **How wide is each column?**  Every column carries a width string
//!   (`"auto"`, `"10em"`, `"25%"`).  Expand ratios are converted into
//!   percentages so the renderer only ever sees width strings.
//!
//! Items are kept in reading order (top-down, left-right) so a renderer that
//! iterates them gets a stable visual order.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `gridlayout_core::GridModel` instead of `gridlayout_core::domain::grid::GridModel`.
pub use domain::alignment::{Alignment, MarginInfo, ParseAlignmentError};
pub use domain::area::{Area, GridLines};
pub use domain::columns::{ColumnWidths, Unit, AUTO};
pub use domain::cursor::Cursor;
pub use domain::error::GridError;
pub use domain::grid::{GridModel, Placement, MAX_DIMENSION};
pub use domain::surface::{NullSurface, SurfaceError, VisualSurface};
pub use domain::ItemId;
