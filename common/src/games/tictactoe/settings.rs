use serde::{Deserialize, Serialize};

use super::types::{FirstPlayer, GameMode, SymbolSet};

/// `first_player` is only consulted in `GameMode::VsComputer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub first_player: FirstPlayer,
    pub symbol_set: SymbolSet,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            first_player: FirstPlayer::Human,
            symbol_set: SymbolSet::Classic,
        }
    }
}
