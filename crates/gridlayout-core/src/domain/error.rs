//! Error type shared by every grid model operation.

use thiserror::Error;

use super::area::Area;
use super::surface::SurfaceError;
use super::ItemId;

/// Errors that can occur when configuring or filling the grid.
///
/// Every failing operation leaves the model exactly as it was before the call.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// Malformed input: a non-positive dimension, inverted corners, an item
    /// that is already placed, or an item that is not part of the grid.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested area (or a shrink) would fall outside the grid bounds.
    #[error("area {area} lies outside the {columns}x{rows} grid")]
    OutOfBounds { area: Area, columns: u32, rows: u32 },

    /// The requested area intersects an existing placement.
    #[error("area {area} overlaps item {item} placed at {existing}")]
    Overlaps {
        /// The area that was requested.
        area: Area,
        /// The area already occupying some of the requested cells.
        existing: Area,
        /// The item that owns `existing`.
        item: ItemId,
    },

    /// The visual surface refused the item; the placement was rolled back.
    #[error("visual surface rejected item {item}: {source}")]
    Surface {
        item: ItemId,
        #[source]
        source: SurfaceError,
    },
}
