//=========================================================================
// Tile Types
//=========================================================================
//
// Closed set of tile kinds making up level geometry, plus the symbol
// table used at the level-loading boundary.
//
// Symbol table:
//   '.' → Empty
//   '#' → Solid(Background)
//   'G' → Solid(Ground)
//   'C' → Collectible
//   *   → Unknown
//
//=========================================================================

//=== SolidKind ===========================================================

/// Visual sub-kind of a solid tile. Physics treats all of them alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidKind {
    /// Brick-like background wall (`#`).
    Background,

    /// Grass-topped ground (`G`).
    Ground,
}

//=== Tile ================================================================

/// A single cell of the level grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    /// Open space. Out-of-range reads also produce this.
    #[default]
    Empty,

    /// Blocks movement.
    Solid(SolidKind),

    /// A coin, consumed on contact.
    Collectible,

    /// Any symbol outside the table. Never collected, rendered as nothing.
    Unknown,
}

impl Tile {
    //--- Symbol Mapping ---------------------------------------------------

    /// Maps a layout symbol to its tile.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            '.' => Self::Empty,
            '#' => Self::Solid(SolidKind::Background),
            'G' => Self::Solid(SolidKind::Ground),
            'C' => Self::Collectible,
            _ => Self::Unknown,
        }
    }

    /// Returns the layout symbol for this tile.
    ///
    /// `Unknown` has no source symbol left, so it is written back as `?`.
    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Solid(SolidKind::Background) => '#',
            Self::Solid(SolidKind::Ground) => 'G',
            Self::Collectible => 'C',
            Self::Unknown => '?',
        }
    }

    //--- Queries ----------------------------------------------------------

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Collision rule: every non-empty tile stops the player, including
    /// coins the pickup corners did not reach and unknown symbols.
    #[inline]
    pub fn blocks_movement(self) -> bool {
        !self.is_empty()
    }

    #[inline]
    pub fn is_collectible(self) -> bool {
        matches!(self, Self::Collectible)
    }

    /// Whether the renderer has anything to draw for this tile.
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Solid(_) | Self::Collectible)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
