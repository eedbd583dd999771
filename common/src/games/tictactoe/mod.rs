mod board;
mod bot_controller;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves};
pub use bot_controller::{BotInput, best_move, calculate_minimax_move, self_play};
pub use session::{GameSession, MoveReport};
pub use settings::TicTacToeSessionSettings;
pub use types::{
    BOARD_SIZE, CELL_COUNT, FirstPlayer, GameMode, GameOutcome, MoveError, Side, Symbol,
    SymbolSet, WIN_LINES, WinLine,
};
pub use win_detector::{check_win, check_win_with_line};
