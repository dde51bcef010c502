use super::player::Player;

pub const BOARD_SIZE: usize = 14;

/// The four axes through a stone: horizontal, vertical, both diagonals.
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

impl Cell {
    /// The player owning this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get the cell at a specific position. Both indices must be in range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Whether (row, col) lies on the board
    pub fn in_bounds(row: usize, col: usize) -> bool {
        row < BOARD_SIZE && col < BOARD_SIZE
    }

    /// Place a stone at (row, col). Caller must have validated bounds and
    /// occupancy; stones are never overwritten or cleared individually.
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert!(Self::in_bounds(row, col));
        debug_assert_eq!(self.cells[row][col], Cell::Empty);
        self.cells[row][col] = cell;
    }

    /// Check if the stone just placed at (row, col) completed five or more
    /// in a row on any axis through it. Only the four axes through the
    /// placed stone are examined, so this is correct only when called
    /// immediately after a single placement.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let run = 1
                + self.count_run(row, col, dr, dc, cell)
                + self.count_run(row, col, -dr, -dc, cell);
            run >= 5
        })
    }

    /// Count consecutive same-color stones from (row, col) exclusive,
    /// stepping by (dr, dc), up to 4 steps.
    fn count_run(&self, row: usize, col: usize, dr: i32, dc: i32, cell: Cell) -> usize {
        let mut count = 0;
        for step in 1..=4 {
            let r = row as i32 + dr * step;
            let c = col as i32 + dc * step;
            if r < 0 || r >= BOARD_SIZE as i32 || c < 0 || c >= BOARD_SIZE as i32 {
                break;
            }
            if self.cells[r as usize][c as usize] != cell {
                break;
            }
            count += 1;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        board.place(5, 5, Cell::Black);
        assert_eq!(board.get(5, 5), Cell::Black);
        assert_eq!(board.get(5, 6), Cell::Empty);
    }

    #[test]
    fn test_in_bounds() {
        assert!(Board::in_bounds(0, 0));
        assert!(Board::in_bounds(13, 13));
        assert!(!Board::in_bounds(14, 0));
        assert!(!Board::in_bounds(0, 14));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..5 {
            board.place(7, col, Cell::Black);
        }
        // Any stone of the line sees the full run
        assert!(board.check_win(7, 0));
        assert!(board.check_win(7, 2));
        assert!(board.check_win(7, 4));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for row in 3..8 {
            board.place(row, 10, Cell::White);
        }
        assert!(board.check_win(5, 10));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(2 + i, 2 + i, Cell::Black);
        }
        assert!(board.check_win(4, 4));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place(8 - i, 2 + i, Cell::White);
        }
        assert!(board.check_win(6, 4));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place(0, col, Cell::Black);
        }
        assert!(!board.check_win(0, 3));
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::new();
        board.place(0, 0, Cell::Black);
        board.place(0, 1, Cell::Black);
        board.place(0, 2, Cell::White);
        board.place(0, 3, Cell::Black);
        board.place(0, 4, Cell::Black);
        board.place(0, 5, Cell::Black);
        assert!(!board.check_win(0, 4));
    }

    #[test]
    fn test_overline_counts_as_win() {
        let mut board = Board::new();
        for col in 0..6 {
            board.place(9, col, Cell::White);
        }
        assert!(board.check_win(9, 3));
    }

    #[test]
    fn test_win_clipped_at_board_edge() {
        let mut board = Board::new();
        // Run ending in the corner, counted entirely in the negative direction
        for i in 0..5 {
            board.place(13 - i, 13 - i, Cell::Black);
        }
        assert!(board.check_win(13, 13));
    }

    #[test]
    fn test_empty_cell_is_never_a_win() {
        let board = Board::new();
        assert!(!board.check_win(7, 7));
    }
}
