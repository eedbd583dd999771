use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::{calculate_minimax_move, BotInput};
use super::settings::TicTacToeSessionSettings;
use super::types::{FirstPlayer, GameMode, GameOutcome, MoveError, Side, Symbol, SymbolSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub index: usize,
    pub symbol: Symbol,
    pub side: Side,
    pub outcome: GameOutcome,
}

/// One game at a time: owns the board, the turn and the symbols each side
/// currently places.
pub struct GameSession {
    board: Board,
    settings: TicTacToeSessionSettings,
    turn: Side,
    first_symbol: Symbol,
    second_symbol: Symbol,
    computer_side: Option<Side>,
    last_mover: Option<Side>,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        let mut session = Self {
            board: Board::new(),
            settings,
            turn: Side::First,
            first_symbol: Symbol::X,
            second_symbol: Symbol::O,
            computer_side: None,
            last_mover: None,
            rng,
        };
        session.restart();
        session
    }

    pub fn restart(&mut self) {
        let (first_symbol, second_symbol) = match self.settings.symbol_set {
            SymbolSet::Classic => (Symbol::X, Symbol::O),
            SymbolSet::Shuffled => self
                .rng
                .pick_distinct_pair(&Symbol::PALETTE)
                .unwrap_or((Symbol::X, Symbol::O)),
        };

        let computer_side = match self.settings.mode {
            GameMode::VsComputer => Some(match self.settings.first_player {
                FirstPlayer::Human => Side::Second,
                FirstPlayer::Computer => Side::First,
                FirstPlayer::Random => {
                    if self.rng.random_bool() {
                        Side::First
                    } else {
                        Side::Second
                    }
                }
            }),
            GameMode::TwoPlayer | GameMode::Chaos => None,
        };

        self.board.reset();
        self.turn = Side::First;
        self.first_symbol = first_symbol;
        self.second_symbol = second_symbol;
        self.computer_side = computer_side;
        self.last_mover = None;

        log!(
            "New {:?} game: {} vs {}, computer side {:?}",
            self.settings.mode,
            first_symbol,
            second_symbol,
            computer_side
        );
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        self.restart();
    }

    pub fn play(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        if self.is_computer_turn() {
            return Err(MoveError::NotYourTurn);
        }
        self.place(index)
    }

    /// `Ok(None)` when the game is already decided.
    pub fn play_computer(&mut self) -> Result<Option<MoveReport>, MoveError> {
        if !self.is_computer_turn() {
            return Err(MoveError::NotYourTurn);
        }
        if self.board.evaluate().is_terminal() {
            return Ok(None);
        }

        let input = BotInput {
            board: self.board,
            bot_symbol: self.current_symbol(),
            opponent_symbol: self.symbol_for(self.turn.other()),
        };
        let Some(index) = calculate_minimax_move(&input) else {
            return Ok(None);
        };

        log!("Computer plays {} on cell {}", input.bot_symbol, index);
        self.place(index).map(Some)
    }

    fn place(&mut self, index: usize) -> Result<MoveReport, MoveError> {
        let side = self.turn;
        let symbol = self.current_symbol();
        self.board.apply_move(index, symbol)?;

        self.last_mover = Some(side);
        self.turn = side.other();

        // Redrawn even when this move ended the game.
        if self.settings.mode == GameMode::Chaos {
            self.redraw_symbols();
        }

        let outcome = self.board.evaluate();
        match outcome {
            GameOutcome::Win { symbol, line } => {
                log!("{:?} wins with {} on {:?}", side, symbol, line.cells())
            }
            GameOutcome::Draw => log!("Game ended in a draw"),
            GameOutcome::Ongoing => {}
        }

        Ok(MoveReport {
            index,
            symbol,
            side,
            outcome,
        })
    }

    fn redraw_symbols(&mut self) {
        if let Some((first, second)) = self.rng.pick_distinct_pair(&Symbol::PALETTE) {
            self.first_symbol = first;
            self.second_symbol = second;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.board.evaluate()
    }

    /// The side whose move completed the winning line.
    pub fn winner(&self) -> Option<Side> {
        match self.outcome() {
            GameOutcome::Win { .. } => self.last_mover,
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn symbol_for(&self, side: Side) -> Symbol {
        match side {
            Side::First => self.first_symbol,
            Side::Second => self.second_symbol,
        }
    }

    pub fn current_symbol(&self) -> Symbol {
        self.symbol_for(self.turn)
    }

    pub fn computer_side(&self) -> Option<Side> {
        self.computer_side
    }

    pub fn is_computer_turn(&self) -> bool {
        self.computer_side == Some(self.turn)
    }

    pub fn mode(&self) -> GameMode {
        self.settings.mode
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
