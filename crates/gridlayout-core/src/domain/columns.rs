//! Column width specifications.
//!
//! Each column carries a width specification string that is passed through to
//! the visual surface untouched: `"auto"`, an absolute length such as
//! `"10em"`, or a percentage such as `"25%"`.
//!
//! # Expand ratios (for beginners)
//!
//! Expand ratios are the older way of sizing columns: instead of a width you
//! give each column a weight, and every weighted column receives the share
//! `ratio / sum_of_ratios` of the total width.  Ratios are never handed to the
//! surface directly; they are converted into percentage width strings each
//! time one of them changes:
//!
//! ```text
//! ratios:  1     3     (unset)
//! widths:  25%   75%   auto
//! ```

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// Width specification of a column that was never given an explicit width.
pub const AUTO: &str = "auto";

/// Length units accepted by [`ColumnWidths::set_width_with_unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Px,
    Percentage,
    Em,
    Rem,
    Ex,
    Ch,
    Vw,
    Vh,
    Cm,
    Mm,
    In,
    Pt,
    Pc,
}

impl Unit {
    /// The suffix written after the numeric value.
    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Percentage => "%",
            Unit::Em => "em",
            Unit::Rem => "rem",
            Unit::Ex => "ex",
            Unit::Ch => "ch",
            Unit::Vw => "vw",
            Unit::Vh => "vh",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::In => "in",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
        }
    }
}

/// Per-column width specifications plus the optional expand ratios they may
/// be derived from.
///
/// Invariant: `widths.len()` equals the column count, and so does
/// `ratios.len()` once any ratio has been set.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnWidths {
    widths: Vec<String>,
    ratios: Option<Vec<Option<f64>>>,
}

impl ColumnWidths {
    /// `count` columns, all `"auto"`, no ratios.
    pub fn new(count: u32) -> Self {
        Self {
            widths: vec![AUTO.to_string(); count as usize],
            ratios: None,
        }
    }

    /// Current width specification of every column, left to right.
    pub fn widths(&self) -> &[String] {
        &self.widths
    }

    /// Expand ratios, if any has ever been set.
    pub fn ratios(&self) -> Option<&[Option<f64>]> {
        self.ratios.as_deref()
    }

    /// Changes the column count.
    ///
    /// Columns below `min(old, new)` keep their width and ratio; added columns
    /// start as `"auto"` without a ratio.  Percentages are re-derived when
    /// ratios are in use, since dropping a column changes their sum.
    pub fn resize(&mut self, count: u32) {
        let count = count as usize;
        self.widths.resize(count, AUTO.to_string());
        if let Some(ratios) = self.ratios.as_mut() {
            ratios.resize(count, None);
            self.recompute_from_ratios();
        }
    }

    /// Overwrites the width of the column at 1-based `index`.
    ///
    /// Any expand ratio on that column is cleared so the explicit width is not
    /// overwritten by the next ratio recomputation.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if `index` is outside the column range
    /// or `spec` is blank.  Non-blank specifications are stored verbatim.
    pub fn set_width(&mut self, index: u32, spec: &str) -> Result<(), GridError> {
        let slot = self.slot(index)?;
        if spec.trim().is_empty() {
            return Err(GridError::InvalidArgument(format!(
                "width of column {index} must not be empty"
            )));
        }
        self.widths[slot] = spec.to_string();
        if let Some(ratios) = self.ratios.as_mut() {
            if ratios[slot].take().is_some() {
                self.recompute_from_ratios();
            }
        }
        Ok(())
    }

    /// Sets the width of the column at 1-based `index` to `value` in `unit`.
    pub fn set_width_with_unit(&mut self, index: u32, value: f32, unit: Unit) -> Result<(), GridError> {
        if !value.is_finite() || value < 0.0 {
            return Err(GridError::InvalidArgument(format!(
                "width of column {index} must be a non-negative number, got {value}"
            )));
        }
        self.set_width(index, &format!("{value}{}", unit.symbol()))
    }

    /// Sets the expand ratio of the column at 1-based `index` and re-derives
    /// the percentage width of every column that has a ratio.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidArgument`] if `index` is outside the column range or the
    /// ratio is negative or not finite.
    pub fn set_expand_ratio(&mut self, index: u32, ratio: f64) -> Result<(), GridError> {
        let slot = self.slot(index)?;
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(GridError::InvalidArgument(format!(
                "expand ratio of column {index} must be a non-negative number, got {ratio}"
            )));
        }
        let len = self.widths.len();
        let ratios = self.ratios.get_or_insert_with(|| vec![None; len]);
        ratios[slot] = Some(ratio);
        self.recompute_from_ratios();
        Ok(())
    }

    fn recompute_from_ratios(&mut self) {
        let Some(ratios) = self.ratios.as_ref() else {
            return;
        };
        let total: f64 = ratios.iter().flatten().sum();
        for (width, ratio) in self.widths.iter_mut().zip(ratios) {
            if let Some(ratio) = ratio {
                *width = if total > 0.0 {
                    format_percent(ratio / total * 100.0)
                } else {
                    AUTO.to_string()
                };
            }
        }
    }

    fn slot(&self, index: u32) -> Result<usize, GridError> {
        if index < 1 || index as usize > self.widths.len() {
            return Err(GridError::InvalidArgument(format!(
                "column index {index} is outside 1..={}",
                self.widths.len()
            )));
        }
        Ok(index as usize - 1)
    }
}

/// Formats a percentage rounded to four decimal places without trailing zeros.
fn format_percent(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    format!("{rounded}%")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(columns: &ColumnWidths) -> Vec<&str> {
        columns.widths().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_new_defaults_every_column_to_auto() {
        let columns = ColumnWidths::new(3);
        assert_eq!(widths(&columns), ["auto", "auto", "auto"]);
        assert!(columns.ratios().is_none());
    }

    #[test]
    fn test_set_width_overwrites_single_column_literally() {
        let mut columns = ColumnWidths::new(4);
        columns.set_width(1, "10%").unwrap();
        columns.set_width(4, "40px").unwrap();
        assert_eq!(widths(&columns), ["10%", "auto", "auto", "40px"]);
    }

    #[test]
    fn test_set_width_rejects_index_zero() {
        let mut columns = ColumnWidths::new(2);
        assert!(matches!(
            columns.set_width(0, "10px"),
            Err(GridError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_set_width_rejects_index_past_last_column() {
        let mut columns = ColumnWidths::new(2);
        assert!(matches!(
            columns.set_width(3, "10px"),
            Err(GridError::InvalidArgument(_))
        ));
        assert_eq!(widths(&columns), ["auto", "auto"]);
    }

    #[test]
    fn test_set_width_stores_spec_without_trimming() {
        let mut columns = ColumnWidths::new(2);
        columns.set_width(2, " 10% ").unwrap();
        assert_eq!(widths(&columns), ["auto", " 10% "]);
    }

    #[test]
    fn test_set_width_rejects_blank_spec() {
        let mut columns = ColumnWidths::new(2);
        assert!(matches!(
            columns.set_width(1, "  "),
            Err(GridError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_set_width_with_unit_formats_value_and_symbol() {
        let mut columns = ColumnWidths::new(3);
        columns.set_width_with_unit(1, 10.0, Unit::Em).unwrap();
        columns.set_width_with_unit(3, 12.5, Unit::Percentage).unwrap();
        assert_eq!(widths(&columns), ["10em", "auto", "12.5%"]);
    }

    #[test]
    fn test_set_width_with_unit_rejects_negative_value() {
        let mut columns = ColumnWidths::new(1);
        assert!(columns.set_width_with_unit(1, -1.0, Unit::Px).is_err());
    }

    #[test]
    fn test_expand_ratios_one_and_three_give_quarter_and_three_quarters() {
        let mut columns = ColumnWidths::new(2);
        columns.set_expand_ratio(1, 1.0).unwrap();
        columns.set_expand_ratio(2, 3.0).unwrap();
        assert_eq!(widths(&columns), ["25%", "75%"]);
    }

    #[test]
    fn test_expand_ratio_leaves_unset_columns_auto() {
        let mut columns = ColumnWidths::new(3);
        columns.set_expand_ratio(2, 2.0).unwrap();
        assert_eq!(widths(&columns), ["auto", "100%", "auto"]);
        assert_eq!(columns.ratios(), Some(&[None, Some(2.0), None][..]));
    }

    #[test]
    fn test_expand_ratios_round_to_four_decimals() {
        let mut columns = ColumnWidths::new(3);
        for index in 1..=3 {
            columns.set_expand_ratio(index, 1.0).unwrap();
        }
        assert_eq!(widths(&columns), ["33.3333%", "33.3333%", "33.3333%"]);
    }

    #[test]
    fn test_expand_ratios_are_idempotent() {
        let mut columns = ColumnWidths::new(4);
        for (index, ratio) in [(1, 1.0), (2, 1.0), (3, 2.0), (4, 4.0)] {
            columns.set_expand_ratio(index, ratio).unwrap();
        }
        let first = columns.widths().to_vec();
        for (index, ratio) in [(1, 1.0), (2, 1.0), (3, 2.0), (4, 4.0)] {
            columns.set_expand_ratio(index, ratio).unwrap();
        }
        assert_eq!(columns.widths(), first.as_slice());
        assert_eq!(widths(&columns), ["12.5%", "12.5%", "25%", "50%"]);
    }

    #[test]
    fn test_expand_ratios_summing_to_zero_fall_back_to_auto() {
        let mut columns = ColumnWidths::new(2);
        columns.set_expand_ratio(1, 0.0).unwrap();
        assert_eq!(widths(&columns), ["auto", "auto"]);
    }

    #[test]
    fn test_expand_ratio_rejects_negative_and_nan() {
        let mut columns = ColumnWidths::new(2);
        assert!(columns.set_expand_ratio(1, -1.0).is_err());
        assert!(columns.set_expand_ratio(1, f64::NAN).is_err());
        assert!(columns.ratios().is_none());
    }

    #[test]
    fn test_explicit_width_clears_ratio_and_rebalances_remaining_columns() {
        let mut columns = ColumnWidths::new(3);
        columns.set_expand_ratio(1, 1.0).unwrap();
        columns.set_expand_ratio(2, 1.0).unwrap();
        columns.set_width(1, "100px").unwrap();
        assert_eq!(widths(&columns), ["100px", "100%", "auto"]);
    }

    #[test]
    fn test_resize_keeps_surviving_widths_and_pads_with_auto() {
        let mut columns = ColumnWidths::new(2);
        columns.set_width(1, "10em").unwrap();
        columns.resize(4);
        assert_eq!(widths(&columns), ["10em", "auto", "auto", "auto"]);
        columns.resize(1);
        assert_eq!(widths(&columns), ["10em"]);
    }

    #[test]
    fn test_resize_rederives_percentages_from_surviving_ratios() {
        let mut columns = ColumnWidths::new(2);
        columns.set_expand_ratio(1, 1.0).unwrap();
        columns.set_expand_ratio(2, 3.0).unwrap();
        columns.resize(1);
        assert_eq!(widths(&columns), ["100%"]);
        assert_eq!(columns.ratios().map(<[_]>::len), Some(1));
    }
}
