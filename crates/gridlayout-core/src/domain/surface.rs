//! The visual surface port.
//!
//! The grid model never renders anything itself.  Whenever its state changes
//! in a way a renderer cares about, it calls into a [`VisualSurface`]: attach
//! this item at these grid lines, detach that one, here is the new column
//! template, and so on.
//!
//! # Testability
//!
//! Unit tests in this crate use the `mockall`-generated `MockVisualSurface` to
//! assert on the exact calls made.  Code that does not care about rendering
//! can use [`NullSurface`], which accepts everything.

use thiserror::Error;

use super::alignment::MarginInfo;
use super::area::GridLines;
use super::ItemId;

/// Error returned by a surface that refuses an item.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The item is already attached to this surface.
    #[error("item {0} is already attached")]
    AlreadyAttached(ItemId),

    /// The surface declined the item for an implementation-specific reason.
    #[error("{0}")]
    Rejected(String),
}

/// Rendering collaborator driven by the grid model.
#[cfg_attr(test, mockall::automock)]
pub trait VisualSurface {
    /// Renders `item` over the given grid lines.
    ///
    /// A failure makes the model roll back the placement that triggered it.
    fn attach(&mut self, item: ItemId, lines: GridLines) -> Result<(), SurfaceError>;

    /// Removes `item` from the surface.  Best effort.
    fn detach(&mut self, item: ItemId);

    /// Removes every item from the surface.  Best effort.
    fn detach_all(&mut self);

    /// Applies one width specification per column.
    fn apply_column_template(&mut self, widths: &[String]);

    /// Applies one height specification per row.
    fn apply_row_template(&mut self, heights: &[String]);

    /// Applies the outer margin flags.
    fn apply_margin(&mut self, margin: MarginInfo);

    /// Toggles spacing between cells.
    fn apply_spacing(&mut self, enabled: bool);
}

/// A surface that accepts every call and renders nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl VisualSurface for NullSurface {
    fn attach(&mut self, _item: ItemId, _lines: GridLines) -> Result<(), SurfaceError> {
        Ok(())
    }

    fn detach(&mut self, _item: ItemId) {}

    fn detach_all(&mut self) {}

    fn apply_column_template(&mut self, _widths: &[String]) {}

    fn apply_row_template(&mut self, _heights: &[String]) {}

    fn apply_margin(&mut self, _margin: MarginInfo) {}

    fn apply_spacing(&mut self, _enabled: bool) {}
}
