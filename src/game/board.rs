use std::fmt;

use arrayvec::ArrayVec;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Columns currently accepting a move, in ascending order.
pub type LegalActions = ArrayVec<usize, COLS>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// Single-character glyph used by the text rendering.
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Clear every cell back to `Empty`
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// `Err(ColumnFull)` is the expected, recoverable outcome for a full
    /// column; `Err(InvalidColumn)` rejects out-of-range indices. Neither
    /// mutates the board.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns whose top cell is still empty, in ascending order
    pub fn valid_columns(&self) -> LegalActions {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// 1-based label of the open columns for prompts: "1-7" while every
    /// column is open, otherwise a comma list like "1,3,4,7"
    pub fn column_range_label(&self) -> String {
        let open = self.valid_columns();
        if open.len() == COLS {
            format!("1-{COLS}")
        } else {
            let labels: Vec<String> = open.iter().map(|col| (col + 1).to_string()).collect();
            labels.join(",")
        }
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }
        self.is_win_if_placed(row, col, cell)
    }

    /// Would a `cell` piece at (row, col) complete a line of at least
    /// `WIN_LENGTH`?
    ///
    /// Pure speculative query: the cell at (row, col) itself is never read,
    /// so the placement may be hypothetical. Runs are counted walking
    /// outward from the origin along each axis, the origin added back as
    /// the `+1`. The vertical check only walks downward; a piece can never
    /// have empty cells below it, so an upward run cannot exist.
    pub fn is_win_if_placed(&self, row: usize, col: usize, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        let left = self.count_run(row, col, cell, 0, -1);
        let right = self.count_run(row, col, cell, 0, 1);
        let down = self.count_run(row, col, cell, 1, 0);
        let down_left = self.count_run(row, col, cell, 1, -1);
        let up_right = self.count_run(row, col, cell, -1, 1);
        let down_right = self.count_run(row, col, cell, 1, 1);
        let up_left = self.count_run(row, col, cell, -1, -1);

        left + 1 + right >= WIN_LENGTH
            || down + 1 >= WIN_LENGTH
            || down_left + 1 + up_right >= WIN_LENGTH
            || down_right + 1 + up_left >= WIN_LENGTH
    }

    /// Count matching cells walking from (row, col) in one direction,
    /// excluding the origin, stopping at the first off-grid or
    /// non-matching cell
    fn count_run(
        &self,
        row: usize,
        col: usize,
        cell: Cell,
        delta_row: i32,
        delta_col: i32,
    ) -> usize {
        let mut count = 0;
        let mut r = row as i32 + delta_row;
        let mut c = col as i32 + delta_col;
        while r >= 0
            && r < ROWS as i32
            && c >= 0
            && c < COLS as i32
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += delta_row;
            c += delta_col;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// One row per line, each cell bordered: `|R|Y| | | | | |`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                write!(f, "|{}", self.cells[row][col].glyph())?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}
