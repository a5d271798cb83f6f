use crate::map::Grid;
use crate::types::{Outcome, Pos};

/// Read-only view of a game for rendering.
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub grid: &'a Grid,
    pub player: Pos,
    pub moves: u32,
    pub collected: u32,
    pub total_collectibles: u32,
    pub outcome: Outcome,
    pub animation_frame: u32,
}

impl GameSnapshot<'_> {
    pub fn all_collected(&self) -> bool {
        self.collected >= self.total_collectibles
    }
}
