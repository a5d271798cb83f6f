//! Modal notices shown over the board.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    GameOver,
    Victory,
    ExitBlocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn game_over() -> Self {
        Self {
            kind: NoticeKind::GameOver,
            title: "Game Over".to_string(),
            message: "You touched a patrol! Game over.".to_string(),
        }
    }

    pub fn victory() -> Self {
        Self {
            kind: NoticeKind::Victory,
            title: "Victory!".to_string(),
            message: "You collected every item and reached the exit!".to_string(),
        }
    }

    pub fn exit_blocked(collected: u32, total: u32) -> Self {
        Self {
            kind: NoticeKind::ExitBlocked,
            title: "Exit Blocked".to_string(),
            message: format!("Collect all items! ({}/{})", collected, total),
        }
    }

    /// Dismissing a terminal notice ends the game loop.
    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, NoticeKind::GameOver | NoticeKind::Victory)
    }
}
