use super::{Board, LegalActions, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

impl From<super::board::MoveError> for MoveError {
    fn from(err: super::board::MoveError) -> Self {
        match err {
            super::board::MoveError::ColumnFull => MoveError::ColumnFull,
            super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        Self::with_first_player(Player::Red) // Red starts
    }

    /// Create initial game state with a chosen first player
    pub fn with_first_player(player: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: player,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }

        self.board.valid_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current_player.to_cell())?;

        // Check for win
        if self.board.check_win(row, column) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Cell;
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_with_first_player() {
        let state = GameState::with_first_player(Player::Yellow);
        assert_eq!(state.current_player(), Player::Yellow);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        // The original state is untouched
        assert_eq!(state.board().get(5, 3), Cell::Empty);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
    }

    #[test]
    fn test_move_after_game_over() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state = state.apply_move(col).unwrap();
            if col < 3 {
                state = state.apply_move(col).unwrap();
            }
        }
        assert!(state.is_terminal());
        assert_eq!(state.apply_move(6), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_and_invalid_column() {
        let mut state = GameState::initial();
        for _ in 0..3 {
            state = state.apply_move(0).unwrap(); // Red
            state = state.apply_move(0).unwrap(); // Yellow
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull));
        assert_eq!(state.apply_move(7), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        // Columns are filled in pairs, three pieces each way, so every
        // column ends up split 3/3 and no line of four ever forms; column
        // 6 is filled last, alternating. 42 moves, all legal, no win.
        let pattern = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, // columns 0 and 1
            2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, // columns 2 and 3
            4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, // columns 4 and 5
            6, 6, 6, 6, 6, 6, // column 6
        ];

        for &col in &pattern {
            assert!(!state.is_terminal());
            state = state.apply_move(col).unwrap();
        }

        assert!(state.is_terminal());
        assert!(state.board().is_full());
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }
}
