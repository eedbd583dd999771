use std::time::Duration;

use common::games::tictactoe::GameSession;
use common::log;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::command::{parse_command, Command};
use crate::render::{cell_count_hint, render_board, render_status};

const HELP: &str = "Commands: <cell number>, r = restart, mode <two-player|chaos|vs-computer>, h = help, q = quit";

pub async fn run_game(
    mut session: GameSession,
    computer_delay: Duration,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);
    loop {
        println!();
        println!("{}", render_board(session.board()));
        println!("{}", render_status(&session));

        if !session.outcome().is_terminal() && session.is_computer_turn() {
            tokio::time::sleep(computer_delay).await;
            if let Err(e) = session.play_computer() {
                log!("Computer move rejected: {}", e);
            }
            continue;
        }

        if session.outcome().is_terminal() {
            println!("Type r to play again, or q to quit");
        } else {
            println!("Your move ({})", cell_count_hint());
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_command(&line) {
            Ok(Command::Play(index)) => {
                if let Err(e) = session.play(index) {
                    println!("{}", e);
                }
            }
            Ok(Command::Restart) => session.restart(),
            Ok(Command::Mode(mode)) => {
                log!("Switching to {:?}", mode);
                session.set_mode(mode);
            }
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(message) => println!("{}", message),
        }
    }

    println!("Bye! (seed {})", session.seed());
    Ok(())
}
