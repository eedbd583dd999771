use super::board::{get_available_moves, Board};
use super::types::{GameOutcome, Symbol, CELL_COUNT};
use super::win_detector::check_win;

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub bot_symbol: Symbol,
    pub opponent_symbol: Symbol,
}

/// Optimal cell for `symbol` assuming `opponent` also plays perfectly.
/// Ties go to the lowest index. `None` only when no cell is empty.
pub fn best_move(board: &Board, symbol: Symbol, opponent: Symbol) -> Option<usize> {
    calculate_minimax_move(&BotInput {
        board: *board,
        bot_symbol: symbol,
        opponent_symbol: opponent,
    })
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut cells = *input.board.cells();
    let available_moves = get_available_moves(&cells);

    if available_moves.is_empty() {
        return None;
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        cells[index] = Some(input.bot_symbol);

        // Full window per root child keeps the score exact, so pruning below
        // never changes which move wins the tie-break.
        let score = minimax(
            &mut cells,
            0,
            false,
            input.bot_symbol,
            input.opponent_symbol,
            i32::MIN,
            i32::MAX,
        );

        cells[index] = None;

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

/// Depth is carried along but never discounts the score: any forced win is
/// worth the same as the fastest one.
fn minimax(
    cells: &mut [Option<Symbol>; CELL_COUNT],
    depth: usize,
    is_maximizing: bool,
    bot_symbol: Symbol,
    opponent_symbol: Symbol,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    debug_assert!(depth < CELL_COUNT);

    if let Some(score) = terminal_score(cells, bot_symbol) {
        return score;
    }

    let moves = get_available_moves(cells);

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            cells[index] = Some(bot_symbol);
            let eval = minimax(
                cells,
                depth + 1,
                false,
                bot_symbol,
                opponent_symbol,
                alpha,
                beta,
            );
            cells[index] = None;

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            cells[index] = Some(opponent_symbol);
            let eval = minimax(
                cells,
                depth + 1,
                true,
                bot_symbol,
                opponent_symbol,
                alpha,
                beta,
            );
            cells[index] = None;

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

fn terminal_score(cells: &[Option<Symbol>; CELL_COUNT], bot_symbol: Symbol) -> Option<i32> {
    match check_win(cells) {
        Some(winner) if winner == bot_symbol => Some(WIN_SCORE),
        Some(_) => Some(LOSS_SCORE),
        None if cells.iter().all(|cell| cell.is_some()) => Some(DRAW_SCORE),
        None => None,
    }
}

/// Plays the game out with both sides asking the search for their move.
pub fn self_play(mut board: Board, first: Symbol, second: Symbol) -> (Board, GameOutcome) {
    let mut current = (first, second);
    while !board.evaluate().is_terminal() {
        let Some(index) = best_move(&board, current.0, current.1) else {
            break;
        };
        if board.apply_move(index, current.0).is_err() {
            break;
        }
        current = (current.1, current.0);
    }
    let outcome = board.evaluate();
    (board, outcome)
}
