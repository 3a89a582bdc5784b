//! Auto-placement cursor.
//!
//! The cursor is the grid's notion of "where the next component without
//! explicit coordinates goes".  It is *not* guaranteed to point at a free cell:
//! an explicit placement may have covered it, or it may point one row past the
//! bottom of the grid.  Auto-placement therefore probes from the cursor
//! forward until it finds a free cell (see `GridModel::auto_place`).
//!
//! # Repositioning after a placement
//!
//! When a placement covers the cursor cell, the cursor jumps to the first
//! position after the placed area even if that position is occupied:
//!
//! ```text
//!  x = column2 + 1
//!  if x >= columns:
//!      x = 0
//!      y = (column1 == 0 ? row2 : row1) + 1
//!  else:
//!      y = row1
//! ```
//!
//! The asymmetry in the wrap case is intentional.  An area that starts at the
//! left edge is skipped entirely (resume below its bottom row); an area that
//! starts further right resumes on the row below its *top* row, so the cells to
//! its left on the following rows are still visited.

use super::area::Area;

/// Next auto-placement position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub x: u32,
    pub y: u32,
}

impl Cursor {
    /// The cursor at the upper-left cell.
    pub fn origin() -> Self {
        Self::default()
    }

    /// Moves one cell to the right, wrapping to the start of the next row at
    /// the column boundary.
    pub fn advance(&mut self, columns: u32) {
        self.x += 1;
        if self.x >= columns {
            self.x = 0;
            self.y += 1;
        }
    }

    /// Repositions the cursor after `area` was placed.
    ///
    /// Does nothing unless the area covers the current cursor cell.  Returns
    /// `true` if the cursor moved.
    pub fn reposition_after(&mut self, area: &Area, columns: u32) -> bool {
        if !area.contains(self.x, self.y) {
            return false;
        }
        self.x = area.column2 + 1;
        if self.x >= columns {
            self.x = 0;
            self.y = if area.column1 == 0 { area.row2 } else { area.row1 } + 1;
        } else {
            self.y = area.row1;
        }
        true
    }

    /// Moves the cursor back to the origin.
    pub fn reset(&mut self) {
        *self = Self::origin();
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_advance_moves_right_within_row() {
        let mut cursor = Cursor::origin();
        cursor.advance(4);
        assert_eq!(cursor, Cursor { x: 1, y: 0 });
    }

    #[test]
    fn test_cursor_advance_wraps_at_column_boundary() {
        let mut cursor = Cursor { x: 3, y: 2 };
        cursor.advance(4);
        assert_eq!(cursor, Cursor { x: 0, y: 3 });
    }

    #[test]
    fn test_cursor_advance_on_single_column_grid_moves_down() {
        let mut cursor = Cursor::origin();
        cursor.advance(1);
        assert_eq!(cursor, Cursor { x: 0, y: 1 });
    }

    #[test]
    fn test_reposition_ignores_area_not_containing_cursor() {
        let mut cursor = Cursor::origin();
        let moved = cursor.reposition_after(&Area::new(1, 1, 3, 1).unwrap(), 4);
        assert!(!moved);
        assert_eq!(cursor, Cursor::origin());
    }

    #[test]
    fn test_reposition_moves_right_of_area_on_its_top_row() {
        let mut cursor = Cursor { x: 1, y: 1 };
        cursor.reposition_after(&Area::new(0, 0, 1, 2).unwrap(), 4);
        assert_eq!(cursor, Cursor { x: 2, y: 0 });
    }

    #[test]
    fn test_reposition_left_aligned_area_resumes_below_bottom_row() {
        let mut cursor = Cursor::origin();
        cursor.reposition_after(&Area::new(0, 0, 3, 2).unwrap(), 4);
        assert_eq!(cursor, Cursor { x: 0, y: 3 });
    }

    #[test]
    fn test_reposition_indented_area_resumes_below_top_row() {
        // The area starts in column 2, so the cells at (0, 1) and (1, 1) must
        // still be reachable: the cursor wraps to row1 + 1, not row2 + 1.
        let mut cursor = Cursor { x: 2, y: 0 };
        cursor.reposition_after(&Area::new(2, 0, 3, 2).unwrap(), 4);
        assert_eq!(cursor, Cursor { x: 0, y: 1 });
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut cursor = Cursor { x: 3, y: 7 };
        cursor.reset();
        assert_eq!(cursor, Cursor::origin());
    }
}
