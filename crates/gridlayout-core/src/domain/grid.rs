//! The grid model: dimensions, placements, cursor and column widths.
//!
//! [`GridModel`] is the aggregate root of this crate.  It keeps an ordered
//! list of placed items, each bound to a non-overlapping [`Area`], and drives
//! a [`VisualSurface`] so a renderer can mirror its state.
//!
//! # Invariants
//!
//! After every operation, successful or not:
//!
//! - no two placements overlap;
//! - every placement lies inside the current `columns × rows` bounds;
//! - the column width list has exactly `columns` entries;
//! - `items` is in top-down, left-right order of the areas' upper-left corners.
//!
//! All validation happens before the first mutation.  The only multi-step
//! mutation, attaching an item to the surface, is rolled back if the surface
//! refuses it.
//!
//! # Auto-placement
//!
//! Items placed without coordinates go to the cursor.  The cursor may point at
//! an occupied cell, so [`GridModel::auto_place`] probes forward with
//! [`GridModel::is_free`] until it finds a free cell, growing the grid when
//! that cell lies past the right or bottom edge:
//!
//! ```text
//!  2×2 grid, A covers everything      after auto_place(B)
//!  ┌───┬───┐                          ┌───┬───┐
//!  │ A │ A │                          │ A │ A │
//!  ├───┼───┤                          ├───┼───┤
//!  │ A │ A │   cursor → (0, 2)        │ A │ A │
//!  └───┴───┘                          ├───┼───┤
//!                                     │ B │   │   rows grown to 3
//!                                     └───┴───┘
//! ```

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use super::alignment::{Alignment, MarginInfo};
use super::area::Area;
use super::columns::{ColumnWidths, Unit, AUTO};
use super::cursor::Cursor;
use super::error::GridError;
use super::surface::{NullSurface, VisualSurface};
use super::ItemId;

/// Largest accepted column or row count.
///
/// Every row and column owns a template entry on the surface, so counts read
/// from untrusted config are capped well before they could exhaust memory.
pub const MAX_DIMENSION: u32 = 10_000;

/// Where an item sits and how it is aligned inside its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub area: Area,
    pub alignment: Alignment,
}

/// An M-column by N-row grid of placed items.
#[derive(Debug)]
pub struct GridModel<S = NullSurface> {
    columns: u32,
    rows: u32,
    cursor: Cursor,
    /// Placed items in top-down, left-right order.
    items: Vec<ItemId>,
    placements: HashMap<ItemId, Placement>,
    column_widths: ColumnWidths,
    margin: MarginInfo,
    spacing: bool,
    default_alignment: Alignment,
    surface: S,
}

impl GridModel {
    /// Creates a grid that is not attached to any renderer.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidArgument`] if either dimension is zero or
    /// above [`MAX_DIMENSION`].
    pub fn new(columns: u32, rows: u32) -> Result<Self, GridError> {
        Self::with_surface(columns, rows, NullSurface)
    }
}

impl<S: VisualSurface> GridModel<S> {
    /// Creates a grid that mirrors its state onto `surface`.
    ///
    /// The initial column and row templates are applied immediately.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidArgument`] if either dimension is zero or
    /// above [`MAX_DIMENSION`].
    pub fn with_surface(columns: u32, rows: u32, surface: S) -> Result<Self, GridError> {
        check_dimension(columns, "columns")?;
        check_dimension(rows, "rows")?;

        let mut model = Self {
            columns,
            rows,
            cursor: Cursor::origin(),
            items: Vec::new(),
            placements: HashMap::new(),
            column_widths: ColumnWidths::new(columns),
            margin: MarginInfo::default(),
            spacing: false,
            default_alignment: Alignment::TOP_LEFT,
            surface,
        };
        model.apply_column_template();
        model.apply_row_template();
        debug!(columns, rows, "created grid");
        Ok(model)
    }

    // ── Dimensions ────────────────────────────────────────────────────────────

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Changes the number of columns.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidArgument`] if `columns` is zero or above
    ///   [`MAX_DIMENSION`].
    /// - [`GridError::OutOfBounds`] if shrinking would cut through an existing
    ///   placement; nothing changes in that case.
    pub fn set_columns(&mut self, columns: u32) -> Result<(), GridError> {
        check_dimension(columns, "columns")?;
        if columns == self.columns {
            return Ok(());
        }
        if let Some(area) = self.first_area_where(|a| a.column2 >= columns) {
            return Err(GridError::OutOfBounds {
                area,
                columns,
                rows: self.rows,
            });
        }

        debug!(from = self.columns, to = columns, "resizing grid columns");
        self.columns = columns;
        self.column_widths.resize(columns);
        self.apply_column_template();
        Ok(())
    }

    /// Changes the number of rows.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidArgument`] if `rows` is zero or above
    ///   [`MAX_DIMENSION`].
    /// - [`GridError::OutOfBounds`] if shrinking would cut through an existing
    ///   placement; nothing changes in that case.
    pub fn set_rows(&mut self, rows: u32) -> Result<(), GridError> {
        check_dimension(rows, "rows")?;
        if rows == self.rows {
            return Ok(());
        }
        if let Some(area) = self.first_area_where(|a| a.row2 >= rows) {
            return Err(GridError::OutOfBounds {
                area,
                columns: self.columns,
                rows,
            });
        }

        debug!(from = self.rows, to = rows, "resizing grid rows");
        self.rows = rows;
        self.apply_row_template();
        Ok(())
    }

    // ── Placement ─────────────────────────────────────────────────────────────

    /// Places `item` over `area`.
    ///
    /// The item is inserted into the ordering before the first item whose area
    /// starts on a later row, or on the same row in a later column.  If the
    /// area covers the cursor, the cursor moves past it.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidArgument`] if the item is already placed or the
    ///   area's corners are inverted.
    /// - [`GridError::OutOfBounds`] if the area exceeds the grid.
    /// - [`GridError::Overlaps`] if the area intersects an existing placement.
    /// - [`GridError::Surface`] if the surface refused the item.
    pub fn place(&mut self, item: ItemId, area: Area) -> Result<(), GridError> {
        self.place_with_alignment(item, area, self.default_alignment)
    }

    /// Places `item` on the single cell `(column, row)`.
    pub fn place_at(&mut self, item: ItemId, column: u32, row: u32) -> Result<(), GridError> {
        self.place(item, Area::cell(column, row))
    }

    /// Places `item` on the first free cell at or after the cursor, growing
    /// the grid when that cell lies outside it.  Returns the cell used.
    ///
    /// Occupied cells are skipped silently; [`GridError::Overlaps`] is never
    /// returned from here.  If the final placement fails, the grid dimensions
    /// and the cursor are restored.
    ///
    /// # Errors
    ///
    /// - [`GridError::InvalidArgument`] if the item is already placed or the
    ///   grid would have to grow past [`MAX_DIMENSION`].
    /// - [`GridError::Surface`] if the surface refused the item.
    pub fn auto_place(&mut self, item: ItemId) -> Result<Area, GridError> {
        self.ensure_not_placed(item)?;

        let mut probe = self.cursor;
        while !self.is_free(&Area::cell(probe.x, probe.y)) {
            trace!(x = probe.x, y = probe.y, "cursor cell occupied; advancing");
            probe.advance(self.columns);
        }
        let cell = Area::cell(probe.x, probe.y);

        let (columns, rows, cursor) = (self.columns, self.rows, self.cursor);
        let grown = self.grow_to_include(cell);
        if let Err(e) = grown {
            self.restore_dimensions(columns, rows);
            return Err(e);
        }
        self.cursor = probe;

        if let Err(e) = self.place(item, cell) {
            self.cursor = cursor;
            self.restore_dimensions(columns, rows);
            return Err(e);
        }
        Ok(cell)
    }

    /// Removes `item` from the grid.  Returns `false` if it was not placed.
    ///
    /// The cursor does not move.
    pub fn remove(&mut self, item: ItemId) -> bool {
        if self.placements.remove(&item).is_none() {
            return false;
        }
        self.items.retain(|placed| *placed != item);
        self.surface.detach(item);
        debug!(%item, "removed item");
        true
    }

    /// Removes every item and moves the cursor back to the origin.
    pub fn remove_all(&mut self) {
        self.items.clear();
        self.placements.clear();
        self.surface.detach_all();
        self.cursor.reset();
        debug!("removed all items");
    }

    /// Replaces `old` with `new` without changing position.
    ///
    /// - `old` not placed: `new` is auto-placed.
    /// - `new` not placed: `old` is removed and `new` takes its area and
    ///   alignment.  If placing `new` fails, `old` is put back.
    /// - both placed: the two items swap areas; each keeps its alignment.
    pub fn replace(&mut self, old: ItemId, new: ItemId) -> Result<(), GridError> {
        let old_placement = self.placements.get(&old).copied();
        let new_placement = self.placements.get(&new).copied();

        match (old_placement, new_placement) {
            (None, _) => self.auto_place(new).map(|_| ()),
            (Some(old_placement), None) => self.take_over(old, new, old_placement),
            (Some(old_placement), Some(new_placement)) => {
                self.swap(old, old_placement, new, new_placement)
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// Returns `true` if no existing placement intersects `area`.
    ///
    /// Cells outside the grid bounds are free as long as nothing covers them.
    pub fn is_free(&self, area: &Area) -> bool {
        self.find_overlap(area).is_none()
    }

    /// The item covering cell `(column, row)`, if any.
    pub fn lookup(&self, column: u32, row: u32) -> Option<ItemId> {
        self.items.iter().copied().find(|item| {
            self.placements
                .get(item)
                .is_some_and(|p| p.area.contains(column, row))
        })
    }

    /// Number of placed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.placements.contains_key(&item)
    }

    /// The area `item` occupies, if it is placed.
    pub fn area(&self, item: ItemId) -> Option<Area> {
        self.placements.get(&item).map(|p| p.area)
    }

    pub fn placement(&self, item: ItemId) -> Option<Placement> {
        self.placements.get(&item).copied()
    }

    /// Placed items in top-down, left-right order.
    pub fn items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().copied()
    }

    /// Placed items with their areas, in top-down, left-right order.
    pub fn placements(&self) -> impl Iterator<Item = (ItemId, Area)> + '_ {
        self.items
            .iter()
            .filter_map(|item| self.placements.get(item).map(|p| (*item, p.area)))
    }

    /// The next auto-placement position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    // ── Column widths ─────────────────────────────────────────────────────────

    /// Width specification of every column, left to right.
    pub fn column_widths(&self) -> &[String] {
        self.column_widths.widths()
    }

    /// Expand ratios, if any has been set.
    pub fn column_expand_ratios(&self) -> Option<&[Option<f64>]> {
        self.column_widths.ratios()
    }

    /// Height specification of every row; rows are always sized `"auto"`.
    pub fn row_template(&self) -> Vec<String> {
        vec![AUTO.to_string(); self.rows as usize]
    }

    /// Sets the width of the column at 1-based `index` to a literal
    /// specification such as `"10%"` or `"40px"`.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if `index` is outside `1..=columns` or
    /// `width` is blank.
    pub fn set_column_width(&mut self, index: u32, width: &str) -> Result<(), GridError> {
        self.column_widths.set_width(index, width)?;
        self.apply_column_template();
        Ok(())
    }

    /// Sets the width of the column at 1-based `index` to `value` in `unit`.
    pub fn set_column_width_with_unit(
        &mut self,
        index: u32,
        value: f32,
        unit: Unit,
    ) -> Result<(), GridError> {
        self.column_widths.set_width_with_unit(index, value, unit)?;
        self.apply_column_template();
        Ok(())
    }

    /// Sets the expand ratio of the column at 1-based `index`.
    ///
    /// Every column with a ratio gets the percentage width
    /// `ratio / sum_of_ratios × 100`; other columns are left alone.
    pub fn set_column_expand_ratio(&mut self, index: u32, ratio: f64) -> Result<(), GridError> {
        self.column_widths.set_expand_ratio(index, ratio)?;
        self.apply_column_template();
        Ok(())
    }

    // ── Alignment, margin, spacing ────────────────────────────────────────────

    /// Alignment given to items when they are placed.
    pub fn default_component_alignment(&self) -> Alignment {
        self.default_alignment
    }

    pub fn set_default_component_alignment(&mut self, alignment: Alignment) {
        self.default_alignment = alignment;
    }

    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if `item` is not placed.
    pub fn component_alignment(&self, item: ItemId) -> Result<Alignment, GridError> {
        self.placements
            .get(&item)
            .map(|p| p.alignment)
            .ok_or_else(|| {
                GridError::InvalidArgument(format!("item {item} is not a child of this grid"))
            })
    }

    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if `item` is not placed.
    pub fn set_component_alignment(
        &mut self,
        item: ItemId,
        alignment: Alignment,
    ) -> Result<(), GridError> {
        let placement = self.placements.get_mut(&item).ok_or_else(|| {
            GridError::InvalidArgument(format!(
                "item {item} must be placed before its alignment can be set"
            ))
        })?;
        placement.alignment = alignment;
        Ok(())
    }

    pub fn margin(&self) -> MarginInfo {
        self.margin
    }

    pub fn set_margin(&mut self, margin: MarginInfo) {
        self.margin = margin;
        self.surface.apply_margin(margin);
    }

    /// Enables or disables the margin on all four edges.
    pub fn set_margin_enabled(&mut self, enabled: bool) {
        self.set_margin(MarginInfo::all(enabled));
    }

    pub fn is_spacing(&self) -> bool {
        self.spacing
    }

    pub fn set_spacing(&mut self, enabled: bool) {
        self.spacing = enabled;
        self.surface.apply_spacing(enabled);
    }

    // ── Surface access ────────────────────────────────────────────────────────

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn place_with_alignment(
        &mut self,
        item: ItemId,
        area: Area,
        alignment: Alignment,
    ) -> Result<(), GridError> {
        self.ensure_not_placed(item)?;
        area.validate()?;
        if !area.fits_within(self.columns, self.rows) {
            return Err(GridError::OutOfBounds {
                area,
                columns: self.columns,
                rows: self.rows,
            });
        }
        if let Some((owner, existing)) = self.find_overlap(&area) {
            return Err(GridError::Overlaps {
                area,
                existing,
                item: owner,
            });
        }

        let index = self
            .items
            .iter()
            .position(|other| {
                self.placements
                    .get(other)
                    .is_some_and(|p| p.area.starts_after(&area))
            })
            .unwrap_or(self.items.len());
        self.items.insert(index, item);
        self.placements.insert(item, Placement { area, alignment });

        if let Err(source) = self.surface.attach(item, area.grid_lines()) {
            warn!(%item, %area, error = %source, "surface rejected item; rolling back");
            self.items.remove(index);
            self.placements.remove(&item);
            return Err(GridError::Surface { item, source });
        }

        if self.cursor.reposition_after(&area, self.columns) {
            trace!(x = self.cursor.x, y = self.cursor.y, "cursor moved past placed area");
        }
        debug!(%item, %area, "placed item");
        Ok(())
    }

    /// `new` takes over the area and alignment of `old`, which is removed.
    fn take_over(&mut self, old: ItemId, new: ItemId, placement: Placement) -> Result<(), GridError> {
        let cursor = self.cursor;
        self.remove(old);
        if let Err(e) = self.place_with_alignment(new, placement.area, placement.alignment) {
            if let Err(restore) = self.place_with_alignment(old, placement.area, placement.alignment) {
                warn!(item = %old, error = %restore, "failed to reinstate replaced item");
            }
            self.cursor = cursor;
            return Err(e);
        }
        Ok(())
    }

    /// Exchanges the areas of two placed items.
    fn swap(
        &mut self,
        a: ItemId,
        a_placement: Placement,
        b: ItemId,
        b_placement: Placement,
    ) -> Result<(), GridError> {
        if a == b {
            return Ok(());
        }
        self.exchange_areas(a, b_placement.area, b, a_placement.area);
        self.surface.detach(a);
        self.surface.detach(b);

        let attached = self
            .surface
            .attach(a, b_placement.area.grid_lines())
            .map_err(|source| (a, source))
            .and_then(|()| {
                self.surface
                    .attach(b, a_placement.area.grid_lines())
                    .map_err(|source| (b, source))
            });

        if let Err((item, source)) = attached {
            warn!(%item, error = %source, "surface rejected swapped item; rolling back");
            self.exchange_areas(a, a_placement.area, b, b_placement.area);
            self.surface.detach(a);
            self.surface.detach(b);
            for (restored, area) in [(a, a_placement.area), (b, b_placement.area)] {
                if let Err(e) = self.surface.attach(restored, area.grid_lines()) {
                    warn!(item = %restored, error = %e, "failed to re-attach item after rollback");
                }
            }
            return Err(GridError::Surface { item, source });
        }

        debug!(%a, %b, "swapped item areas");
        Ok(())
    }

    /// Writes new areas for two placed items and swaps their order positions.
    ///
    /// Areas never overlap, so their upper-left corners are distinct and
    /// swapping the two positions keeps `items` sorted.
    fn exchange_areas(&mut self, a: ItemId, a_area: Area, b: ItemId, b_area: Area) {
        if let Some(p) = self.placements.get_mut(&a) {
            p.area = a_area;
        }
        if let Some(p) = self.placements.get_mut(&b) {
            p.area = b_area;
        }
        let a_index = self.items.iter().position(|item| *item == a);
        let b_index = self.items.iter().position(|item| *item == b);
        if let (Some(i), Some(j)) = (a_index, b_index) {
            self.items.swap(i, j);
        }
    }

    fn ensure_not_placed(&self, item: ItemId) -> Result<(), GridError> {
        if self.placements.contains_key(&item) {
            return Err(GridError::InvalidArgument(format!(
                "item {item} is already in the grid"
            )));
        }
        Ok(())
    }

    /// First placed item, in order, whose area intersects `area`.
    fn find_overlap(&self, area: &Area) -> Option<(ItemId, Area)> {
        self.items.iter().find_map(|item| {
            let placement = self.placements.get(item)?;
            placement
                .area
                .overlaps(area)
                .then_some((*item, placement.area))
        })
    }

    fn first_area_where(&self, predicate: impl Fn(&Area) -> bool) -> Option<Area> {
        self.placements()
            .map(|(_, area)| area)
            .find(|area| predicate(area))
    }

    fn grow_to_include(&mut self, cell: Area) -> Result<(), GridError> {
        if cell.column2 >= self.columns {
            self.set_columns(cell.column2 + 1)?;
        }
        if cell.row2 >= self.rows {
            self.set_rows(cell.row2 + 1)?;
        }
        Ok(())
    }

    fn restore_dimensions(&mut self, columns: u32, rows: u32) {
        for result in [self.set_columns(columns), self.set_rows(rows)] {
            if let Err(e) = result {
                warn!(error = %e, "failed to restore grid dimensions");
            }
        }
    }

    fn apply_column_template(&mut self) {
        self.surface.apply_column_template(self.column_widths.widths());
    }

    fn apply_row_template(&mut self) {
        let template = self.row_template();
        self.surface.apply_row_template(&template);
    }
}

fn check_dimension(value: u32, name: &str) -> Result<(), GridError> {
    if value < 1 {
        return Err(GridError::InvalidArgument(format!(
            "the number of {name} in the grid must be at least 1"
        )));
    }
    if value > MAX_DIMENSION {
        return Err(GridError::InvalidArgument(format!(
            "the number of {name} in the grid must be at most {MAX_DIMENSION}, got {value}"
        )));
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
