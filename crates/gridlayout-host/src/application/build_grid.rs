//! BuildGridUseCase: turns a [`GridConfig`] into a populated [`GridModel`].
//!
//! The main entry point is [`build_grid`].  It applies the configuration in a
//! fixed order so later steps see the effect of earlier ones:
//!
//! 1. dimensions, margin, spacing and default alignment;
//! 2. column widths and expand ratios, in file order;
//! 3. items, in file order, each at its explicit area or at the cursor.
//!
//! # Why file order matters (for beginners)
//!
//! Auto-placed items go wherever the cursor is *at that moment*, and explicit
//! placements move the cursor when they cover it.  Reordering the `[[items]]`
//! entries in the file can therefore change where auto-placed items land.
//! The first item that cannot be placed aborts the build.

use std::collections::HashMap;

use gridlayout_core::{GridError, GridModel, ItemId, VisualSurface};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use crate::infrastructure::storage::config::{ColumnEntry, GridConfig, ItemEntry};

/// Error type for grid construction.
#[derive(Debug, Error, PartialEq)]
pub enum BuildGridError {
    /// The `[grid]` section describes an impossible grid.
    #[error("invalid grid settings: {0}")]
    Settings(#[source] GridError),

    /// A `[[columns]]` entry was rejected.
    #[error("invalid width for column {index}: {source}")]
    Column {
        index: u32,
        #[source]
        source: GridError,
    },

    /// An `[[items]]` entry could not be placed.
    #[error("could not place item `{name}`: {source}")]
    Item {
        name: String,
        #[source]
        source: GridError,
    },
}

/// A grid built from configuration plus the display name of every item.
#[derive(Debug)]
pub struct BuiltGrid<S> {
    pub grid: GridModel<S>,
    pub names: HashMap<ItemId, String>,
}

impl<S: VisualSurface> BuiltGrid<S> {
    /// Display name of `item`, if it came from the configuration.
    pub fn name(&self, item: ItemId) -> Option<&str> {
        self.names.get(&item).map(String::as_str)
    }

    /// Renders the grid as text, one line per row, each cell showing the name
    /// of the item covering it or `.` when free.
    ///
    /// ```text
    /// header  header  header
    /// nav     .       main
    /// ```
    pub fn occupancy_map(&self) -> String {
        let width = self
            .names
            .values()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(1)
            .clamp(1, MAX_CELL_WIDTH);

        let mut map = String::new();
        for row in 0..self.grid.rows() {
            let cells: Vec<String> = (0..self.grid.columns())
                .map(|column| {
                    let label = self
                        .grid
                        .lookup(column, row)
                        .map(|item| self.name(item).unwrap_or("?"))
                        .unwrap_or(".");
                    let label: String = label.chars().take(width).collect();
                    format!("{label:<width$}")
                })
                .collect();
            map.push_str(cells.join("  ").trim_end());
            map.push('\n');
        }
        map
    }
}

/// Cell labels in the occupancy map are cut to this many characters.
const MAX_CELL_WIDTH: usize = 12;

/// Builds a grid on `surface` from `config`.
///
/// # Errors
///
/// Returns the first [`BuildGridError`] encountered; nothing after the failing
/// entry is applied.
pub fn build_grid<S: VisualSurface>(
    config: &GridConfig,
    surface: S,
) -> Result<BuiltGrid<S>, BuildGridError> {
    let settings = &config.grid;
    let mut grid = GridModel::with_surface(settings.columns, settings.rows, surface)
        .map_err(BuildGridError::Settings)?;

    grid.set_margin(settings.margin);
    grid.set_spacing(settings.spacing);
    grid.set_default_component_alignment(settings.default_alignment);

    for column in &config.columns {
        apply_column(&mut grid, column)?;
    }

    let mut names = HashMap::with_capacity(config.items.len());
    for entry in &config.items {
        let item = place_item(&mut grid, entry)?;
        names.insert(item, entry.name.clone());
    }

    info!(
        "built {}x{} grid with {} items",
        grid.columns(),
        grid.rows(),
        grid.len()
    );
    Ok(BuiltGrid { grid, names })
}

fn apply_column<S: VisualSurface>(
    grid: &mut GridModel<S>,
    column: &ColumnEntry,
) -> Result<(), BuildGridError> {
    let result = match (&column.width, column.expand_ratio) {
        (Some(width), _) => grid.set_column_width(column.index, width),
        (None, Some(ratio)) => grid.set_column_expand_ratio(column.index, ratio),
        (None, None) => Ok(()),
    };
    result.map_err(|source| BuildGridError::Column {
        index: column.index,
        source,
    })
}

fn place_item<S: VisualSurface>(
    grid: &mut GridModel<S>,
    entry: &ItemEntry,
) -> Result<ItemId, BuildGridError> {
    let item = entry.id.unwrap_or_else(Uuid::new_v4);
    let to_build_error = |source: GridError| BuildGridError::Item {
        name: entry.name.clone(),
        source,
    };

    let area = match entry.area {
        Some(area) => grid.place(item, area).map(|()| area),
        None => grid.auto_place(item),
    }
    .map_err(to_build_error)?;

    if let Some(alignment) = entry.alignment {
        grid.set_component_alignment(item, alignment)
            .map_err(to_build_error)?;
    }
    debug!("placed `{}` at {area}", entry.name);
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlayout_core::{Alignment, Area, MarginInfo, NullSurface};

    fn item(name: &str, area: Option<Area>) -> ItemEntry {
        ItemEntry {
            id: None,
            name: name.to_string(),
            area,
            alignment: None,
        }
    }

    fn area(c1: u32, r1: u32, c2: u32, r2: u32) -> Area {
        Area::new(c1, r1, c2, r2).unwrap()
    }

    #[test]
    fn test_build_grid_default_config_produces_empty_four_by_four() {
        let built = build_grid(&GridConfig::default(), NullSurface).unwrap();
        assert_eq!((built.grid.columns(), built.grid.rows()), (4, 4));
        assert!(built.grid.is_empty());
        assert!(built.names.is_empty());
    }

    #[test]
    fn test_build_grid_applies_presentation_settings() {
        let mut cfg = GridConfig::default();
        cfg.grid.spacing = true;
        cfg.grid.margin = MarginInfo::all(true);
        cfg.grid.default_alignment = Alignment::MIDDLE_CENTER;
        cfg.items.push(item("a", None));

        let built = build_grid(&cfg, NullSurface).unwrap();

        assert!(built.grid.is_spacing());
        assert_eq!(built.grid.margin(), MarginInfo::all(true));
        let a = built.grid.items().next().unwrap();
        assert_eq!(built.grid.component_alignment(a), Ok(Alignment::MIDDLE_CENTER));
    }

    #[test]
    fn test_build_grid_places_explicit_and_auto_items_in_file_order() {
        let mut cfg = GridConfig::default();
        cfg.grid.columns = 3;
        cfg.grid.rows = 2;
        cfg.items.push(item("header", Some(area(0, 0, 2, 0))));
        cfg.items.push(item("left", None));
        cfg.items.push(item("right", None));

        let built = build_grid(&cfg, NullSurface).unwrap();
        let name_at = |c, r| built.grid.lookup(c, r).and_then(|i| built.name(i));

        assert_eq!(name_at(2, 0), Some("header"));
        assert_eq!(name_at(0, 1), Some("left"));
        assert_eq!(name_at(1, 1), Some("right"));
    }

    #[test]
    fn test_build_grid_keeps_configured_item_id() {
        let id = Uuid::new_v4();
        let mut cfg = GridConfig::default();
        cfg.items.push(ItemEntry {
            id: Some(id),
            ..item("fixed", None)
        });

        let built = build_grid(&cfg, NullSurface).unwrap();

        assert!(built.grid.contains(id));
        assert_eq!(built.name(id), Some("fixed"));
    }

    #[test]
    fn test_build_grid_applies_column_widths_and_ratios() {
        let mut cfg = GridConfig::default();
        cfg.grid.columns = 3;
        cfg.columns = vec![
            ColumnEntry {
                index: 1,
                width: Some("10em".to_string()),
                expand_ratio: None,
            },
            ColumnEntry {
                index: 2,
                width: None,
                expand_ratio: Some(1.0),
            },
            ColumnEntry {
                index: 3,
                width: None,
                expand_ratio: Some(3.0),
            },
        ];

        let built = build_grid(&cfg, NullSurface).unwrap();

        assert_eq!(built.grid.column_widths(), ["10em", "25%", "75%"]);
    }

    #[test]
    fn test_build_grid_rejects_zero_columns() {
        let mut cfg = GridConfig::default();
        cfg.grid.columns = 0;
        assert!(matches!(
            build_grid(&cfg, NullSurface),
            Err(BuildGridError::Settings(GridError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_build_grid_rejects_rows_above_limit() {
        let mut cfg = GridConfig::default();
        cfg.grid.rows = gridlayout_core::MAX_DIMENSION + 1;
        assert!(matches!(
            build_grid(&cfg, NullSurface),
            Err(BuildGridError::Settings(GridError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_build_grid_reports_bad_column_index() {
        let mut cfg = GridConfig::default();
        cfg.columns.push(ColumnEntry {
            index: 9,
            width: Some("1px".to_string()),
            expand_ratio: None,
        });
        assert!(matches!(
            build_grid(&cfg, NullSurface),
            Err(BuildGridError::Column { index: 9, .. })
        ));
    }

    #[test]
    fn test_build_grid_names_the_overlapping_item() {
        let mut cfg = GridConfig::default();
        cfg.items.push(item("first", Some(area(0, 0, 1, 1))));
        cfg.items.push(item("second", Some(area(1, 1, 2, 2))));

        let err = build_grid(&cfg, NullSurface).unwrap_err();

        assert!(matches!(
            err,
            BuildGridError::Item { ref name, source: GridError::Overlaps { .. } } if name == "second"
        ));
    }

    #[test]
    fn test_occupancy_map_shows_names_and_free_cells() {
        let mut cfg = GridConfig::default();
        cfg.grid.columns = 3;
        cfg.grid.rows = 2;
        cfg.items.push(item("hd", Some(area(0, 0, 2, 0))));
        cfg.items.push(item("x", Some(Area::cell(2, 1))));

        let built = build_grid(&cfg, NullSurface).unwrap();

        assert_eq!(built.occupancy_map(), "hd  hd  hd\n.   .   x\n");
    }
}
