use common::games::tictactoe::{Board, GameOutcome, GameSession, Side, BOARD_SIZE, CELL_COUNT};

/// Empty cells show the 1-based number a player types to claim them.
pub fn render_board(board: &Board) -> String {
    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let index = row * BOARD_SIZE + col;
                    match board.cell(index) {
                        Some(symbol) => format!(" {} ", symbol),
                        None => format!(" {} ", index + 1),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn side_name(session: &GameSession, side: Side) -> &'static str {
    match (session.computer_side(), side) {
        (Some(computer), side) if computer == side => "Computer",
        (Some(_), _) => "You",
        (None, Side::First) => "Player 1",
        (None, Side::Second) => "Player 2",
    }
}

pub fn render_status(session: &GameSession) -> String {
    match session.outcome() {
        GameOutcome::Ongoing => {
            let turn = session.turn();
            format!(
                "{} to move with '{}'",
                side_name(session, turn),
                session.symbol_for(turn)
            )
        }
        GameOutcome::Win { symbol, line } => {
            let cells: Vec<String> = line.cells().iter().map(|i| (i + 1).to_string()).collect();
            let winner = session
                .winner()
                .map(|side| side_name(session, side))
                .unwrap_or("Nobody");
            format!("'{}' wins! {} completed {}", symbol, winner, cells.join("-"))
        }
        GameOutcome::Draw => "It's a draw".to_string(),
    }
}

pub fn cell_count_hint() -> String {
    format!("cells 1-{}", CELL_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::tictactoe::{GameMode, Symbol, TicTacToeSessionSettings};

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_marks_replace_numbers() {
        let mut board = Board::new();
        board.apply_move(0, Symbol::X).unwrap();
        board.apply_move(8, Symbol::Skull).unwrap();
        let rendered = render_board(&board);
        assert!(rendered.starts_with(" X | 2 | 3 "));
        assert!(rendered.ends_with(" 7 | 8 | 💀 "));
    }

    #[test]
    fn test_status_names_the_winner() {
        let settings = TicTacToeSessionSettings {
            mode: GameMode::TwoPlayer,
            ..TicTacToeSessionSettings::default()
        };
        let mut session = GameSession::new(settings, SessionRng::new(1));
        assert_eq!(render_status(&session), "Player 1 to move with 'X'");
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        assert_eq!(render_status(&session), "'X' wins! Player 1 completed 1-2-3");
    }

    #[test]
    fn test_vs_computer_names_sides() {
        let session = GameSession::new(TicTacToeSessionSettings::default(), SessionRng::new(1));
        assert_eq!(side_name(&session, Side::First), "You");
        assert_eq!(side_name(&session, Side::Second), "Computer");
    }
}
