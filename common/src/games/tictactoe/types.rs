use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
    Star,
    Heart,
    Skull,
    Sun,
}

impl Symbol {
    /// Every symbol chaos mode can hand out, in draw order.
    pub const PALETTE: [Symbol; 6] = [
        Symbol::X,
        Symbol::O,
        Symbol::Star,
        Symbol::Heart,
        Symbol::Skull,
        Symbol::Sun,
    ];

    /// Classic counterpart. Only X and O have one.
    pub fn opponent(&self) -> Option<Symbol> {
        match self {
            Symbol::X => Some(Symbol::O),
            Symbol::O => Some(Symbol::X),
            _ => None,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
            Symbol::Star => "★",
            Symbol::Heart => "❤️",
            Symbol::Skull => "💀",
            Symbol::Sun => "☀️",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Logical side of the game. The glyph a side places may change between moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(&self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }
}

/// Rows, then columns, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win { symbol: Symbol, line: WinLine },
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    TwoPlayer,
    Chaos,
    VsComputer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirstPlayer {
    Human,
    Computer,
    Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolSet {
    Classic,
    Shuffled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange(usize),
    Occupied(usize),
    GameOver,
    NotYourTurn,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange(index) => {
                write!(f, "Cell {} is out of range (0-{})", index, CELL_COUNT - 1)
            }
            MoveError::Occupied(index) => write!(f, "Cell {} is already marked", index),
            MoveError::GameOver => f.write_str("Game is already over"),
            MoveError::NotYourTurn => f.write_str("Not your turn"),
        }
    }
}

impl std::error::Error for MoveError {}
