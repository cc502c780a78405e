//! The two gas families carried by the wet/humid gas model.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which vaporized component a gas table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GasFamily {
    /// Gas carrying vaporized oil (`Rv`), PVTG tables.
    Wet,
    /// Gas carrying vaporized water (`Rvw`), PVTGW tables.
    Humid,
}

impl GasFamily {
    pub const ALL: [GasFamily; 2] = [GasFamily::Wet, GasFamily::Humid];

    /// Deck keyword of the raw table.
    pub fn keyword(self) -> &'static str {
        match self {
            GasFamily::Wet => "PVTG",
            GasFamily::Humid => "PVTGW",
        }
    }

    /// Column name of the inner (vaporization ratio) axis.
    pub fn ratio_column(self) -> &'static str {
        match self {
            GasFamily::Wet => "RV",
            GasFamily::Humid => "RW",
        }
    }
}

impl fmt::Display for GasFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords() {
        assert_eq!(GasFamily::Wet.to_string(), "PVTG");
        assert_eq!(GasFamily::Humid.keyword(), "PVTGW");
        assert_eq!(GasFamily::Humid.ratio_column(), "RW");
    }
}
