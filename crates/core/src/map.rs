//! Map module - parses ASCII levels into a validated grid
//!
//! The grid is stored as a flat row-major `Vec<CellKind>`.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height (top to bottom).
//! The player start marker is removed from the grid during parsing and reported separately.

use thiserror::Error;

use crate::types::{CellKind, Pos, PLAYER_CODE};

/// The built-in level.
///
/// Rows 2 and 3 are padded on the right with walls so that every row has the
/// same width.
pub const DEFAULT_MAP: [&str; 5] = [
    "111110001111111",
    "100000X00000001",
    "100011111100011",
    "1P0000E0000C0X1",
    "111111111111111",
];

/// Reasons a level can be rejected at load time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell code {ch:?} at {x},{y}")]
    UnknownCell { x: usize, y: usize, ch: char },
    #[error("map has no player start")]
    MissingPlayer,
    #[error("map has more than one player start ({first} and {second})")]
    MultiplePlayers { first: Pos, second: Pos },
}

/// Result of parsing a level.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedMap {
    pub grid: Grid,
    pub player: Pos,
    pub hazards: Vec<Pos>,
    pub total_collectibles: u32,
}

/// Mutable cell grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Parse and validate a level.
    ///
    /// Rows must be non-empty and of equal length, contain only known codes and
    /// exactly one player start.
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<ParsedMap, MapError> {
        let width = rows
            .first()
            .map(|r| r.as_ref().chars().count())
            .unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        let mut player: Option<Pos> = None;
        let mut hazards = Vec::new();
        let mut total_collectibles = 0u32;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }

            for (x, ch) in row.chars().enumerate() {
                let pos = Pos::new(x as i32, y as i32);
                if ch == PLAYER_CODE {
                    if let Some(first) = player {
                        return Err(MapError::MultiplePlayers { first, second: pos });
                    }
                    player = Some(pos);
                    cells.push(CellKind::Empty);
                    continue;
                }

                let kind = CellKind::from_code(ch).ok_or(MapError::UnknownCell { x, y, ch })?;
                match kind {
                    CellKind::Collectible => total_collectibles += 1,
                    CellKind::Hazard => hazards.push(pos),
                    _ => {}
                }
                cells.push(kind);
            }
        }

        let player = player.ok_or(MapError::MissingPlayer)?;

        Ok(ParsedMap {
            grid: Grid {
                width,
                height,
                cells,
            },
            player,
            hazards,
            total_collectibles,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<CellKind> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn get_pos(&self, pos: Pos) -> Option<CellKind> {
        self.get(pos.x, pos.y)
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, kind: CellKind) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width)
    }

    /// Re-encode the grid as map rows. The player is not part of the grid, so
    /// its cell encodes as empty floor.
    pub fn to_rows(&self) -> Vec<String> {
        self.rows()
            .map(|row| row.iter().map(CellKind::code).collect())
            .collect()
    }
}
