use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::game_state::checkers_types::Position;

/// Parses `"row,col"` (spaces around the comma allowed) into a position.
pub fn parse_square(text: &str) -> CheckersResult<Position> {
    let invalid = || CheckersError::InvalidNotation(text.to_owned());

    let (row, col) = text.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse::<i8>().map_err(|_| invalid())?;
    let col = col.trim().parse::<i8>().map_err(|_| invalid())?;
    Position::try_new(row, col)
}
