use super::types::{GameOutcome, MoveError, Symbol, CELL_COUNT};
use super::win_detector::check_win_with_line;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Option<Symbol>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Option<Symbol>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Symbol>; CELL_COUNT] {
        &self.cells
    }

    /// Occupant of `index`; `None` for empty or out-of-range cells.
    pub fn cell(&self, index: usize) -> Option<Symbol> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn apply_move(&mut self, index: usize, symbol: Symbol) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if self.cells[index].is_some() {
            return Err(MoveError::Occupied(index));
        }
        if self.evaluate().is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.cells[index] = Some(symbol);
        Ok(())
    }

    pub fn evaluate(&self) -> GameOutcome {
        if let Some((symbol, line)) = check_win_with_line(&self.cells) {
            return GameOutcome::Win { symbol, line };
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::Ongoing
        }
    }

    pub fn reset(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    pub fn available_moves(&self) -> Vec<usize> {
        get_available_moves(&self.cells)
    }
}

pub fn get_available_moves(cells: &[Option<Symbol>; CELL_COUNT]) -> Vec<usize> {
    cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_none())
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::types::{WinLine, WIN_LINES};

    const X: Option<Symbol> = Some(Symbol::X);
    const O: Option<Symbol> = Some(Symbol::O);
    const E: Option<Symbol> = None;

    #[test]
    fn test_new_board_is_empty_and_ongoing() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert_eq!(board.evaluate(), GameOutcome::Ongoing);
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            let mut cells = [None; CELL_COUNT];
            for index in line.cells() {
                cells[index] = Some(Symbol::Heart);
            }
            let board = Board::from_cells(cells);
            assert_eq!(
                board.evaluate(),
                GameOutcome::Win {
                    symbol: Symbol::Heart,
                    line
                }
            );
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(board.evaluate(), GameOutcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert_eq!(
            board.evaluate(),
            GameOutcome::Win {
                symbol: Symbol::X,
                line: WinLine([0, 1, 2])
            }
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = Board::from_cells([X, E, O, E, X, E, O, E, E]);
        let first = board.evaluate();
        for _ in 0..5 {
            assert_eq!(board.evaluate(), first);
        }
    }

    #[test]
    fn test_apply_move_writes_symbol() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(4, Symbol::Sun), Ok(()));
        assert_eq!(board.cell(4), Some(Symbol::Sun));
        assert_eq!(board.available_moves().len(), CELL_COUNT - 1);
    }

    #[test]
    fn test_apply_move_on_occupied_cell_is_rejected() {
        let mut board = Board::from_cells([X, E, E, E, E, E, E, E, E]);
        let before = board;
        assert_eq!(board.apply_move(0, Symbol::O), Err(MoveError::Occupied(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_out_of_range_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(9, Symbol::X), Err(MoveError::OutOfRange(9)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_move_after_win_is_rejected() {
        let mut board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let before = board;
        assert_eq!(board.apply_move(5, Symbol::O), Err(MoveError::GameOver));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::from_cells([X, O, X, O, X, O, E, E, E]);
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.evaluate(), GameOutcome::Ongoing);
    }

    #[test]
    fn test_cell_out_of_range_is_none() {
        let board = Board::from_cells([X; CELL_COUNT]);
        assert_eq!(board.cell(12), None);
    }
}
