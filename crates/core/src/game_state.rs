//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the player, the hazards and the counters.
//! It handles movement, collection, the exit gate and the win/loss outcome.

use log::{debug, info};

use crate::map::{Grid, MapError, DEFAULT_MAP};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// What happens when the player reaches the exit before collecting everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// The player steps onto the exit anyway; only the win is withheld.
    #[default]
    PassThrough,
    /// The player stays where it was.
    Block,
}

impl ExitPolicy {
    /// Parse policy from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "passthrough" | "pass-through" | "pass_through" => Some(ExitPolicy::PassThrough),
            "block" => Some(ExitPolicy::Block),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExitPolicy::PassThrough => "passthrough",
            ExitPolicy::Block => "block",
        }
    }
}

/// Tunable game rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameRules {
    pub exit_policy: ExitPolicy,
}

/// Result of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// The game is already over.
    Ignored,
    /// Wall, off-grid or (with [`ExitPolicy::Block`]) a locked exit. Nothing changed.
    Rejected,
    /// The move was accepted.
    Moved {
        collected_item: bool,
        /// `Some((collected, total))` when the player stood on a locked exit.
        exit_blocked: Option<(u32, u32)>,
    },
    /// The exit was locked and the move was refused ([`ExitPolicy::Block`] only).
    ExitBlocked { collected: u32, total: u32 },
    Won,
    Lost,
}

impl MoveResult {
    pub fn accepted(&self) -> bool {
        matches!(self, MoveResult::Moved { .. })
    }

    /// Progress to report when the player reached a locked exit.
    pub fn exit_blocked(&self) -> Option<(u32, u32)> {
        match *self {
            MoveResult::Moved { exit_blocked, .. } => exit_blocked,
            MoveResult::ExitBlocked { collected, total } => Some((collected, total)),
            _ => None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    player: Pos,
    hazards: Vec<Pos>,
    moves: u32,
    collected: u32,
    total_collectibles: u32,
    outcome: Outcome,
    /// Cosmetic frame counter, advanced by the loop driver.
    animation_frame: u32,
    rules: GameRules,
}

impl GameState {
    /// Create a game from map rows with default rules.
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        Self::with_rules(rows, GameRules::default())
    }

    pub fn with_rules<S: AsRef<str>>(rows: &[S], rules: GameRules) -> Result<Self, MapError> {
        let parsed = Grid::parse(rows)?;
        info!(
            "map loaded: {}x{}, player at {}, {} hazards, {} collectibles",
            parsed.grid.width(),
            parsed.grid.height(),
            parsed.player,
            parsed.hazards.len(),
            parsed.total_collectibles
        );

        let state = Self {
            grid: parsed.grid,
            player: parsed.player,
            hazards: parsed.hazards,
            moves: 0,
            collected: 0,
            total_collectibles: parsed.total_collectibles,
            outcome: Outcome::InProgress,
            animation_frame: 0,
            rules,
        };
        state.log_moves();
        Ok(state)
    }

    /// Create a game on the built-in level.
    pub fn from_default_map(rules: GameRules) -> Result<Self, MapError> {
        Self::with_rules(&DEFAULT_MAP, rules)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn hazards(&self) -> &[Pos] {
        &self.hazards
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn collected(&self) -> u32 {
        self.collected
    }

    pub fn total_collectibles(&self) -> u32 {
        self.total_collectibles
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn animation_frame(&self) -> u32 {
        self.animation_frame
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// Advance the animation frame counter. Frozen once the game is over.
    pub fn advance_frame(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.animation_frame = self.animation_frame.wrapping_add(1);
        true
    }

    /// Try to move by a raw delta. Only unit steps along one axis are accepted.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> MoveResult {
        if self.is_over() {
            return MoveResult::Ignored;
        }
        match Direction::from_delta(dx, dy) {
            Some(dir) => self.move_player(dir),
            None => MoveResult::Rejected,
        }
    }

    /// Move the player one cell.
    pub fn move_player(&mut self, dir: Direction) -> MoveResult {
        if self.is_over() {
            return MoveResult::Ignored;
        }

        let target = self.player.step(dir);
        let cell = match self.grid.get_pos(target) {
            Some(cell) if cell.is_walkable() => cell,
            _ => {
                debug!("move {} from {} rejected", dir.as_str(), self.player);
                return MoveResult::Rejected;
            }
        };

        match cell {
            CellKind::Hazard => {
                self.outcome = Outcome::Lost;
                info!("hit a patrol at {}: game over after {} moves", target, self.moves);
                MoveResult::Lost
            }
            CellKind::Exit if self.collected >= self.total_collectibles => {
                self.outcome = Outcome::Won;
                info!(
                    "reached the exit with {}/{} items in {} moves",
                    self.collected, self.total_collectibles, self.moves
                );
                MoveResult::Won
            }
            CellKind::Exit => {
                let progress = (self.collected, self.total_collectibles);
                info!("exit locked ({}/{})", progress.0, progress.1);
                match self.rules.exit_policy {
                    ExitPolicy::PassThrough => self.commit(target, false, Some(progress)),
                    ExitPolicy::Block => MoveResult::ExitBlocked {
                        collected: progress.0,
                        total: progress.1,
                    },
                }
            }
            CellKind::Collectible => {
                self.collected += 1;
                self.grid.set(target.x, target.y, CellKind::Empty);
                info!(
                    "collected item at {} ({}/{})",
                    target, self.collected, self.total_collectibles
                );
                self.commit(target, true, None)
            }
            CellKind::Empty => self.commit(target, false, None),
            CellKind::Wall => MoveResult::Rejected,
        }
    }

    fn commit(
        &mut self,
        target: Pos,
        collected_item: bool,
        exit_blocked: Option<(u32, u32)>,
    ) -> MoveResult {
        self.player = target;
        self.moves += 1;
        self.log_moves();
        MoveResult::Moved {
            collected_item,
            exit_blocked,
        }
    }

    fn log_moves(&self) {
        info!("MOVES: {}", self.moves);
    }

    /// Borrowed view of everything the renderer needs.
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            grid: &self.grid,
            player: self.player,
            moves: self.moves,
            collected: self.collected,
            total_collectibles: self.total_collectibles,
            outcome: self.outcome,
            animation_frame: self.animation_frame,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static LOGGED: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    /// Records messages per test thread.
    struct Recorder;

    impl log::Log for Recorder {
        fn enabled(&self, _: &log::Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &log::Record<'_>) {
            LOGGED.with(|l| l.borrow_mut().push(record.args().to_string()));
        }

        fn flush(&self) {}
    }

    static RECORDER: Recorder = Recorder;

    fn take_logged() -> Vec<String> {
        LOGGED.with(|l| std::mem::take(&mut *l.borrow_mut()))
    }

    #[test]
    fn move_counter_is_logged_on_load_and_each_move() {
        let _ = log::set_logger(&RECORDER);
        log::set_max_level(log::LevelFilter::Info);
        take_logged();

        let mut gs = GameState::new(&["P01"]).unwrap();
        let moves: Vec<String> = take_logged()
            .into_iter()
            .filter(|l| l.starts_with("MOVES:"))
            .collect();
        assert_eq!(moves, vec!["MOVES: 0".to_string()]);

        gs.move_player(Direction::Right);
        gs.move_player(Direction::Right);
        let moves: Vec<String> = take_logged()
            .into_iter()
            .filter(|l| l.starts_with("MOVES:"))
            .collect();
        assert_eq!(moves, vec!["MOVES: 1".to_string()]);
    }

    #[test]
    fn new_game_starts_in_progress() {
        let gs = GameState::from_default_map(GameRules::default()).unwrap();
        assert_eq!(gs.outcome(), Outcome::InProgress);
        assert_eq!(gs.player(), Pos::new(1, 3));
        assert_eq!(gs.moves(), 0);
        assert_eq!(gs.collected(), 0);
        assert_eq!(gs.total_collectibles(), 1);
        assert_eq!(gs.hazards().len(), 2);
    }

    #[test]
    fn try_move_rejects_diagonals() {
        let mut gs = GameState::new(&["000", "0P0", "000"]).unwrap();
        assert_eq!(gs.try_move(1, 1), MoveResult::Rejected);
        assert_eq!(gs.try_move(2, 0), MoveResult::Rejected);
        assert_eq!(gs.player(), Pos::new(1, 1));
        assert!(gs.try_move(1, 0).accepted());
        assert_eq!(gs.player(), Pos::new(2, 1));
    }

    #[test]
    fn block_policy_keeps_player_off_locked_exit() {
        let rules = GameRules {
            exit_policy: ExitPolicy::Block,
        };
        let mut gs = GameState::with_rules(&["PEC"], rules).unwrap();
        let res = gs.move_player(Direction::Right);
        assert_eq!(
            res,
            MoveResult::ExitBlocked {
                collected: 0,
                total: 1
            }
        );
        assert_eq!(res.exit_blocked(), Some((0, 1)));
        assert_eq!(gs.player(), Pos::new(0, 0));
        assert_eq!(gs.moves(), 0);
    }

    #[test]
    fn pass_through_policy_reports_progress() {
        let mut gs = GameState::new(&["PEC"]).unwrap();
        let res = gs.move_player(Direction::Right);
        assert_eq!(
            res,
            MoveResult::Moved {
                collected_item: false,
                exit_blocked: Some((0, 1))
            }
        );
        assert_eq!(gs.player(), Pos::new(1, 0));
    }

    #[test]
    fn terminal_moves_do_not_commit_position() {
        let mut gs = GameState::new(&["PX"]).unwrap();
        assert_eq!(gs.move_player(Direction::Right), MoveResult::Lost);
        assert_eq!(gs.player(), Pos::new(0, 0));
        assert_eq!(gs.moves(), 0);

        let mut gs = GameState::new(&["PE"]).unwrap();
        assert_eq!(gs.move_player(Direction::Right), MoveResult::Won);
        assert_eq!(gs.player(), Pos::new(0, 0));
        assert_eq!(gs.moves(), 0);
    }

    #[test]
    fn frame_counter_freezes_after_game_over() {
        let mut gs = GameState::new(&["PX"]).unwrap();
        assert!(gs.advance_frame());
        assert_eq!(gs.animation_frame(), 1);
        gs.move_player(Direction::Right);
        assert!(!gs.advance_frame());
        assert_eq!(gs.animation_frame(), 1);
    }

    #[test]
    fn exit_policy_parses() {
        assert_eq!(ExitPolicy::from_str("Block"), Some(ExitPolicy::Block));
        assert_eq!(
            ExitPolicy::from_str(" passthrough "),
            Some(ExitPolicy::PassThrough)
        );
        assert_eq!(ExitPolicy::from_str("maybe"), None);
    }
}
