use super::types::{Symbol, WIN_LINES, WinLine, CELL_COUNT};

pub fn check_win(cells: &[Option<Symbol>; CELL_COUNT]) -> Option<Symbol> {
    check_win_with_line(cells).map(|(symbol, _)| symbol)
}

/// First line in `WIN_LINES` order whose three cells hold the same symbol.
pub fn check_win_with_line(cells: &[Option<Symbol>; CELL_COUNT]) -> Option<(Symbol, WinLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line.cells();
        if let Some(symbol) = cells[a]
            && cells[b] == Some(symbol)
            && cells[c] == Some(symbol)
        {
            return Some((symbol, line));
        }
    }
    None
}
