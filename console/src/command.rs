use common::games::tictactoe::{GameMode, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Restart,
    Mode(GameMode),
    Help,
    Quit,
}

/// Cells are typed 1-9 and returned as 0-based indices.
pub fn parse_command(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty input, type 'h' for help".to_string());
    };

    match head.to_ascii_lowercase().as_str() {
        "q" | "quit" => Ok(Command::Quit),
        "r" | "restart" => Ok(Command::Restart),
        "h" | "help" | "?" => Ok(Command::Help),
        "m" | "mode" => {
            let mode = parts
                .next()
                .ok_or_else(|| "Usage: mode <two-player|chaos|vs-computer>".to_string())?;
            parse_mode(mode).map(Command::Mode)
        }
        other => {
            let cell: usize = other
                .parse()
                .map_err(|_| format!("Unknown command '{}', type 'h' for help", other))?;
            if cell == 0 || cell > CELL_COUNT {
                return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
            }
            Ok(Command::Play(cell - 1))
        }
    }
}

pub fn parse_mode(input: &str) -> Result<GameMode, String> {
    match input.to_ascii_lowercase().replace('_', "-").as_str() {
        "two-player" | "pvp" => Ok(GameMode::TwoPlayer),
        "chaos" => Ok(GameMode::Chaos),
        "vs-computer" | "pvc" | "ai" => Ok(GameMode::VsComputer),
        other => Err(format!("Unknown mode '{}'", other)),
    }
}
