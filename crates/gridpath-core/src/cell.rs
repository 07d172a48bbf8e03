//! The [`Cell`] type: traversability and terrain weight of one grid square.

use std::fmt;
use std::str::FromStr;

/// Default traversal weight of an open cell.
pub const DEFAULT_WEIGHT: u32 = 1;

/// One grid square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub blocked: bool,
    /// Cost of stepping *into* this cell. Always > 0.
    pub weight: u32,
}

impl Cell {
    /// An open cell of weight 1.
    pub const OPEN: Self = Self {
        blocked: false,
        weight: DEFAULT_WEIGHT,
    };

    /// A blocked cell.
    pub const WALL: Self = Self {
        blocked: true,
        weight: DEFAULT_WEIGHT,
    };

    /// An open cell with the given weight.
    #[inline]
    pub const fn weighted(weight: u32) -> Self {
        Self {
            blocked: false,
            weight,
        }
    }

    /// Set the blocked flag (builder).
    #[inline]
    pub const fn with_blocked(mut self, blocked: bool) -> Self {
        self.blocked = blocked;
        self
    }

    /// Set the weight (builder).
    #[inline]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Whether a search may step into this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !self.blocked
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}

impl From<Terrain> for Cell {
    fn from(t: Terrain) -> Self {
        Self::weighted(t.weight())
    }
}

// ---------------------------------------------------------------------------
// Terrain
// ---------------------------------------------------------------------------

/// Named terrain kinds with their traversal weights.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Terrain {
    #[default]
    Normal,
    Grass,
    Water,
    Mountain,
}

impl Terrain {
    /// All terrain kinds, cheapest first.
    pub const ALL: [Terrain; 4] = [
        Terrain::Normal,
        Terrain::Grass,
        Terrain::Water,
        Terrain::Mountain,
    ];

    /// Traversal weight.
    pub const fn weight(self) -> u32 {
        match self {
            Terrain::Normal => 1,
            Terrain::Grass => 2,
            Terrain::Water => 5,
            Terrain::Mountain => 10,
        }
    }

    /// The terrain whose weight is exactly `weight`, if any.
    pub fn from_weight(weight: u32) -> Option<Terrain> {
        Self::ALL.into_iter().find(|t| t.weight() == weight)
    }

    /// Lower-case name, as used in snapshots and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Terrain::Normal => "normal",
            Terrain::Grass => "grass",
            Terrain::Water => "water",
            Terrain::Mountain => "mountain",
        }
    }
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown terrain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTerrain(pub String);

impl fmt::Display for UnknownTerrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown terrain \u{201c}{}\u{201d} (expected normal, grass, water or mountain)",
            self.0
        )
    }
}

impl std::error::Error for UnknownTerrain {}

impl FromStr for Terrain {
    type Err = UnknownTerrain;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTerrain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_open_unit_weight() {
        let c = Cell::default();
        assert!(c.is_passable());
        assert_eq!(c.weight, 1);
    }

    #[test]
    fn builders() {
        let c = Cell::OPEN.with_weight(7).with_blocked(true);
        assert!(c.blocked);
        assert_eq!(c.weight, 7);
        assert!(!c.is_passable());
    }

    #[test]
    fn terrain_weights() {
        assert_eq!(Terrain::Normal.weight(), 1);
        assert_eq!(Terrain::Grass.weight(), 2);
        assert_eq!(Terrain::Water.weight(), 5);
        assert_eq!(Terrain::Mountain.weight(), 10);
        assert_eq!(Cell::from(Terrain::Water), Cell::weighted(5));
        assert_eq!(Terrain::from_weight(10), Some(Terrain::Mountain));
        assert_eq!(Terrain::from_weight(3), None);
    }

    #[test]
    fn terrain_parse() {
        assert_eq!("Grass".parse::<Terrain>(), Ok(Terrain::Grass));
        assert_eq!(" water ".parse::<Terrain>(), Ok(Terrain::Water));
        assert!("lava".parse::<Terrain>().is_err());
    }
}
