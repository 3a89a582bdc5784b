//! Rectangular grid areas.
//!
//! An [`Area`] is an axis-aligned block of grid cells described by its
//! upper-left corner `(column1, row1)` and lower-right corner
//! `(column2, row2)`.  Both corners are **inclusive** and **zero-based**, so a
//! single cell is an area whose two corners are equal.
//!
//! # Inclusive vs. exclusive bounds (for beginners)
//!
//! Many geometry types (the `Range` type in the standard library, for example)
//! use a half-open `[start, end)` convention.  Grid areas deliberately do not:
//! `Area::new(1, 1, 3, 1)` covers columns 1, 2 **and** 3.  The overlap test and
//! the bounds test below are written for inclusive corners; the conversion to
//! the 1-based, end-exclusive line numbers a renderer wants is done once, in
//! [`Area::grid_lines`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// Axis-aligned rectangle of grid cells with inclusive, zero-based corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Area {
    /// Column of the upper-left corner.
    pub column1: u32,
    /// Row of the upper-left corner.
    pub row1: u32,
    /// Column of the lower-right corner.
    pub column2: u32,
    /// Row of the lower-right corner.
    pub row2: u32,
}

/// Line numbers handed to the visual surface for one placed item.
///
/// Lines are 1-based and the end line is exclusive, so an item covering
/// columns 0..=1 starts at line 1 and ends at line 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridLines {
    pub column_start: u32,
    pub column_end: u32,
    pub row_start: u32,
    pub row_end: u32,
}

impl Area {
    /// Creates an area from its two corners.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidArgument`] if the corners are inverted
    /// (`column2 < column1` or `row2 < row1`).
    pub fn new(column1: u32, row1: u32, column2: u32, row2: u32) -> Result<Self, GridError> {
        let area = Self {
            column1,
            row1,
            column2,
            row2,
        };
        area.validate()?;
        Ok(area)
    }

    /// Creates a 1×1 area covering the cell at `(column, row)`.
    pub fn cell(column: u32, row: u32) -> Self {
        Self {
            column1: column,
            row1: row,
            column2: column,
            row2: row,
        }
    }

    /// Checks that the corners are not inverted.
    ///
    /// The fields are public, so an area built with a struct literal may be
    /// malformed; the grid model calls this before trusting one.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.column2 < self.column1 || self.row2 < self.row1 {
            return Err(GridError::InvalidArgument(format!(
                "illegal coordinates for the component: {self}"
            )));
        }
        Ok(())
    }

    /// Returns `true` if the cell `(column, row)` lies inside this area.
    pub fn contains(&self, column: u32, row: u32) -> bool {
        column >= self.column1 && column <= self.column2 && row >= self.row1 && row <= self.row2
    }

    /// Returns `true` if the two areas share at least one cell.
    pub fn overlaps(&self, other: &Area) -> bool {
        self.column1 <= other.column2
            && self.column2 >= other.column1
            && self.row1 <= other.row2
            && self.row2 >= other.row1
    }

    /// Returns `true` if the whole area lies inside a `columns` × `rows` grid.
    pub fn fits_within(&self, columns: u32, rows: u32) -> bool {
        self.column2 < columns && self.row2 < rows
    }

    /// Returns `true` if this area comes strictly after `other` in
    /// top-down, left-right order: it starts on a later row, or on the same
    /// row in a later column.
    pub fn starts_after(&self, other: &Area) -> bool {
        self.row1 > other.row1 || (self.row1 == other.row1 && self.column1 > other.column1)
    }

    /// Converts the inclusive zero-based corners into surface line numbers.
    pub fn grid_lines(&self) -> GridLines {
        GridLines {
            column_start: self.column1 + 1,
            column_end: self.column2 + 2,
            row_start: self.row1 + 1,
            row_end: self.row2 + 2,
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.column1, self.row1, self.column2, self.row2
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn area(c1: u32, r1: u32, c2: u32, r2: u32) -> Area {
        Area::new(c1, r1, c2, r2).expect("valid area")
    }

    #[test]
    fn test_area_new_rejects_inverted_columns() {
        assert!(matches!(
            Area::new(3, 0, 1, 0),
            Err(GridError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_area_new_rejects_inverted_rows() {
        assert!(matches!(
            Area::new(0, 2, 0, 1),
            Err(GridError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_area_cell_spans_one_by_one() {
        let cell = Area::cell(2, 5);
        assert_eq!(cell, Area::new(2, 5, 2, 5).unwrap());
        assert!(cell.contains(2, 5));
        assert!(!cell.contains(3, 5));
    }

    #[test]
    fn test_area_overlaps_when_sharing_a_single_corner_cell() {
        let a = area(0, 0, 1, 1);
        let b = area(1, 1, 2, 2);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_area_does_not_overlap_when_adjacent_horizontally() {
        let a = area(0, 0, 1, 1);
        let b = area(2, 0, 3, 1);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_area_does_not_overlap_when_adjacent_vertically() {
        let a = area(0, 0, 3, 0);
        let b = area(0, 1, 3, 1);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_area_overlaps_when_one_contains_the_other() {
        let outer = area(0, 0, 3, 3);
        let inner = area(1, 1, 2, 2);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_area_overlaps_when_crossing_without_sharing_corners() {
        let horizontal = area(0, 1, 3, 1);
        let vertical = area(2, 0, 2, 3);
        assert!(horizontal.overlaps(&vertical));
    }

    #[test]
    fn test_area_fits_within_uses_inclusive_far_corner() {
        let a = area(1, 1, 3, 1);
        assert!(a.fits_within(4, 2));
        assert!(!a.fits_within(3, 2));
        assert!(!a.fits_within(4, 1));
    }

    #[test]
    fn test_area_starts_after_prefers_row_over_column() {
        let early_row_far_right = area(3, 0, 3, 0);
        let later_row_left = area(0, 1, 0, 1);
        assert!(later_row_left.starts_after(&early_row_far_right));
        assert!(!early_row_far_right.starts_after(&later_row_left));
    }

    #[test]
    fn test_area_starts_after_is_false_for_same_start() {
        let a = area(1, 1, 1, 1);
        let b = area(1, 1, 2, 2);
        assert!(!a.starts_after(&b));
        assert!(!b.starts_after(&a));
    }

    #[test]
    fn test_area_grid_lines_are_one_based_and_end_exclusive() {
        let lines = area(1, 2, 3, 2).grid_lines();
        assert_eq!(
            lines,
            GridLines {
                column_start: 2,
                column_end: 5,
                row_start: 3,
                row_end: 4,
            }
        );
    }

    #[test]
    fn test_area_display_shows_both_corners() {
        assert_eq!(area(0, 1, 2, 3).to_string(), "(0, 1)-(2, 3)");
    }
}
