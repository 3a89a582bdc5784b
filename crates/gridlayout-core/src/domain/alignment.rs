//! Presentation metadata: per-item alignment and outer margins.
//!
//! Neither value takes part in the placement algorithm.  The model stores
//! them, validates the item they refer to and forwards margins to the surface.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Bit values of the alignment mask.
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const TOP: u8 = 4;
const BOTTOM: u8 = 8;
const HORIZONTAL_CENTER: u8 = 16;
const VERTICAL_CENTER: u8 = 32;

/// Position of a component inside the area it was placed in.
///
/// Internally a bitmask with exactly one vertical bit (top, middle, bottom)
/// and one horizontal bit (left, center, right).  Only the nine named
/// constants can be constructed, either directly or by parsing their names
/// (`"top-left"`, `"middle-center"`, `"bottom-right"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alignment {
    bits: u8,
}

/// Error returned when an alignment name is not one of the nine known names.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown alignment `{0}`")]
pub struct ParseAlignmentError(pub String);

impl Alignment {
    pub const TOP_LEFT: Alignment = Alignment { bits: TOP | LEFT };
    pub const TOP_CENTER: Alignment = Alignment { bits: TOP | HORIZONTAL_CENTER };
    pub const TOP_RIGHT: Alignment = Alignment { bits: TOP | RIGHT };
    pub const MIDDLE_LEFT: Alignment = Alignment { bits: VERTICAL_CENTER | LEFT };
    pub const MIDDLE_CENTER: Alignment = Alignment { bits: VERTICAL_CENTER | HORIZONTAL_CENTER };
    pub const MIDDLE_RIGHT: Alignment = Alignment { bits: VERTICAL_CENTER | RIGHT };
    pub const BOTTOM_LEFT: Alignment = Alignment { bits: BOTTOM | LEFT };
    pub const BOTTOM_CENTER: Alignment = Alignment { bits: BOTTOM | HORIZONTAL_CENTER };
    pub const BOTTOM_RIGHT: Alignment = Alignment { bits: BOTTOM | RIGHT };

    const ALL: [Alignment; 9] = [
        Self::TOP_LEFT,
        Self::TOP_CENTER,
        Self::TOP_RIGHT,
        Self::MIDDLE_LEFT,
        Self::MIDDLE_CENTER,
        Self::MIDDLE_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_CENTER,
        Self::BOTTOM_RIGHT,
    ];

    /// The raw bitmask.
    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn is_top(&self) -> bool {
        self.bits & TOP != 0
    }

    pub fn is_middle(&self) -> bool {
        self.bits & VERTICAL_CENTER != 0
    }

    pub fn is_bottom(&self) -> bool {
        self.bits & BOTTOM != 0
    }

    pub fn is_left(&self) -> bool {
        self.bits & LEFT != 0
    }

    pub fn is_center(&self) -> bool {
        self.bits & HORIZONTAL_CENTER != 0
    }

    pub fn is_right(&self) -> bool {
        self.bits & RIGHT != 0
    }

    /// `"top"`, `"middle"` or `"bottom"`.
    pub fn vertical_name(&self) -> &'static str {
        if self.is_bottom() {
            "bottom"
        } else if self.is_middle() {
            "middle"
        } else {
            "top"
        }
    }

    /// `"left"`, `"center"` or `"right"`.
    pub fn horizontal_name(&self) -> &'static str {
        if self.is_right() {
            "right"
        } else if self.is_center() {
            "center"
        } else {
            "left"
        }
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.vertical_name(), self.horizontal_name())
    }
}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.to_string() == wanted)
            .ok_or_else(|| ParseAlignmentError(s.to_string()))
    }
}

impl TryFrom<String> for Alignment {
    type Error = ParseAlignmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Alignment> for String {
    fn from(value: Alignment) -> Self {
        value.to_string()
    }
}

/// Which outer edges of the grid get a margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarginInfo {
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub bottom: bool,
    #[serde(default)]
    pub left: bool,
}

impl MarginInfo {
    pub fn new(top: bool, right: bool, bottom: bool, left: bool) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// All four edges enabled or all disabled.
    pub fn all(enabled: bool) -> Self {
        Self::new(enabled, enabled, enabled, enabled)
    }

    /// Returns `true` if at least one edge has a margin.
    pub fn any(&self) -> bool {
        self.top || self.right || self.bottom || self.left
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_default_is_top_left() {
        let a = Alignment::default();
        assert_eq!(a, Alignment::TOP_LEFT);
        assert!(a.is_top());
        assert!(a.is_left());
        assert_eq!(a.bits(), 5);
    }

    #[test]
    fn test_alignment_middle_center_predicates() {
        let a = Alignment::MIDDLE_CENTER;
        assert!(a.is_middle() && a.is_center());
        assert!(!a.is_top() && !a.is_bottom() && !a.is_left() && !a.is_right());
    }

    #[test]
    fn test_alignment_display_and_parse_agree_for_all_constants() {
        for a in Alignment::ALL {
            let parsed: Alignment = a.to_string().parse().expect("parse own name");
            assert_eq!(parsed, a);
        }
    }

    #[test]
    fn test_alignment_parse_is_case_insensitive() {
        assert_eq!(
            " Bottom-Right ".parse::<Alignment>(),
            Ok(Alignment::BOTTOM_RIGHT)
        );
    }

    #[test]
    fn test_alignment_parse_rejects_unknown_name() {
        assert_eq!(
            "centre".parse::<Alignment>(),
            Err(ParseAlignmentError("centre".to_string()))
        );
    }

    #[test]
    fn test_margin_all_sets_every_edge() {
        assert_eq!(MarginInfo::all(true), MarginInfo::new(true, true, true, true));
        assert!(!MarginInfo::all(false).any());
    }

    #[test]
    fn test_margin_any_detects_single_edge() {
        let margin = MarginInfo {
            left: true,
            ..MarginInfo::default()
        };
        assert!(margin.any());
    }
}
