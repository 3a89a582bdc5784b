//! In-memory visual surface that records what the grid model asked of it.
//!
//! [`RecordingSurface`] keeps the current state a real renderer would hold
//! (which item is attached where, the column and row templates, margin and
//! spacing) plus an ordered log of every call as [`SurfaceEvent`]s.
//!
//! It behaves like a strict renderer in two ways:
//!
//! - attaching an item that is already attached fails with
//!   [`SurfaceError::AlreadyAttached`];
//! - items registered with [`RecordingSurface::reject`] fail with
//!   [`SurfaceError::Rejected`], which lets tests exercise the model's
//!   rollback paths.
//!
//! # CSS output (for beginners)
//!
//! Browsers lay out CSS grids from two kinds of declarations: the container
//! lists its track sizes (`grid-template-columns: auto 25% 75%`) and every
//! child names the lines it spans (`grid-column: 2 / 4`).  Line numbers start
//! at 1 and the end line is exclusive, which is exactly what
//! [`GridLines`] carries.

use std::collections::{HashMap, HashSet};

use gridlayout_core::{GridLines, ItemId, MarginInfo, SurfaceError, VisualSurface};
use tracing::trace;

/// One call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Attached(ItemId, GridLines),
    Detached(ItemId),
    DetachedAll,
    ColumnTemplate(Vec<String>),
    RowTemplate(Vec<String>),
    Margin(MarginInfo),
    Spacing(bool),
}

/// A [`VisualSurface`] that stores state and logs calls instead of rendering.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    attached: HashMap<ItemId, GridLines>,
    column_template: Vec<String>,
    row_template: Vec<String>,
    margin: MarginInfo,
    spacing: bool,
    rejected: HashSet<ItemId>,
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    /// Creates an empty surface that accepts every item.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every future `attach` of `item` fail.
    pub fn reject(&mut self, item: ItemId) {
        self.rejected.insert(item);
    }

    /// Grid lines of `item`, if it is attached.
    pub fn lines(&self, item: ItemId) -> Option<GridLines> {
        self.attached.get(&item).copied()
    }

    pub fn is_attached(&self, item: ItemId) -> bool {
        self.attached.contains_key(&item)
    }

    /// Number of attached items.
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    pub fn column_template(&self) -> &[String] {
        &self.column_template
    }

    pub fn row_template(&self) -> &[String] {
        &self.row_template
    }

    pub fn margin(&self) -> MarginInfo {
        self.margin
    }

    pub fn spacing(&self) -> bool {
        self.spacing
    }

    /// Every call received so far, oldest first.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Forgets the event log; the current state is kept.
    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    /// CSS placement of `item`, e.g. `grid-column: 2 / 4; grid-row: 1 / 2;`.
    pub fn style_properties(&self, item: ItemId) -> Option<String> {
        self.lines(item).map(|lines| {
            format!(
                "grid-column: {} / {}; grid-row: {} / {};",
                lines.column_start, lines.column_end, lines.row_start, lines.row_end
            )
        })
    }

    /// CSS declarations of the container: track templates, margin and gap.
    pub fn container_css(&self) -> String {
        let mut css = format!(
            "grid-template-columns: {}; grid-template-rows: {};",
            self.column_template.join(" "),
            self.row_template.join(" ")
        );
        if self.margin.any() {
            let edge = |enabled: bool| if enabled { "var(--grid-margin)" } else { "0" };
            css.push_str(&format!(
                " padding: {} {} {} {};",
                edge(self.margin.top),
                edge(self.margin.right),
                edge(self.margin.bottom),
                edge(self.margin.left)
            ));
        }
        if self.spacing {
            css.push_str(" gap: var(--grid-spacing);");
        }
        css
    }
}

impl VisualSurface for RecordingSurface {
    fn attach(&mut self, item: ItemId, lines: GridLines) -> Result<(), SurfaceError> {
        if self.rejected.contains(&item) {
            return Err(SurfaceError::Rejected(format!(
                "item {item} is not accepted by this surface"
            )));
        }
        if self.attached.contains_key(&item) {
            return Err(SurfaceError::AlreadyAttached(item));
        }
        trace!(%item, ?lines, "attach");
        self.attached.insert(item, lines);
        self.events.push(SurfaceEvent::Attached(item, lines));
        Ok(())
    }

    fn detach(&mut self, item: ItemId) {
        self.attached.remove(&item);
        self.events.push(SurfaceEvent::Detached(item));
    }

    fn detach_all(&mut self) {
        self.attached.clear();
        self.events.push(SurfaceEvent::DetachedAll);
    }

    fn apply_column_template(&mut self, widths: &[String]) {
        self.column_template = widths.to_vec();
        self.events.push(SurfaceEvent::ColumnTemplate(widths.to_vec()));
    }

    fn apply_row_template(&mut self, heights: &[String]) {
        self.row_template = heights.to_vec();
        self.events.push(SurfaceEvent::RowTemplate(heights.to_vec()));
    }

    fn apply_margin(&mut self, margin: MarginInfo) {
        self.margin = margin;
        self.events.push(SurfaceEvent::Margin(margin));
    }

    fn apply_spacing(&mut self, enabled: bool) {
        self.spacing = enabled;
        self.events.push(SurfaceEvent::Spacing(enabled));
    }
}
