//! Symbolic icon names and their glyph data
//!
//! Icons are referenced by name and resolved to drawing data only when a
//! renderer asks for them, as SVG path data on a 24x24 stroke grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of the grid the path data is drawn on
pub const ICON_VIEWBOX: u32 = 24;

/// Reference to a glyph resource, selectable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconName {
    Shield,
    Users,
    Eye,
}

impl IconName {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconName::Shield => "shield",
            IconName::Users => "users",
            IconName::Eye => "eye",
        }
    }

    /// SVG path data, one entry per `<path>` element
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            IconName::Shield => &[
                "M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z",
            ],
            IconName::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            IconName::Eye => &[
                "M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0",
                "M9 12a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
        }
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
