use gridsweep_core::Coord2;

/// Parses player input like `A2` or `c10` into board coordinates.
///
/// The leading letter selects the column, the trailing digits the row.
/// Malformed or out-of-bounds input yields `None`; the caller re-prompts
/// instead of forwarding bad coordinates to the board.
pub fn parse_coords(input: &str, bounds: Coord2) -> Option<Coord2> {
    let mut chars = input.trim().chars();

    let column = chars.next()?;
    if !column.is_ascii_alphabetic() {
        return None;
    }
    let x = column.to_ascii_uppercase() as u8 - b'A';

    let row = chars.as_str();
    if row.is_empty() || !row.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let y: u8 = row.parse().ok()?;

    (x < bounds.0 && y < bounds.1).then_some((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Coord2 = (10, 5);

    #[test]
    fn parses_letter_digit_pairs() {
        assert_eq!(parse_coords("A0", BOUNDS), Some((0, 0)));
        assert_eq!(parse_coords("J4", BOUNDS), Some((9, 4)));
        assert_eq!(parse_coords("c2", BOUNDS), Some((2, 2)));
        assert_eq!(parse_coords("  B1 ", BOUNDS), Some((1, 1)));
    }

    #[test]
    fn parses_multi_digit_rows() {
        assert_eq!(parse_coords("A12", (5, 20)), Some((0, 12)));
    }

    #[test]
    fn rejects_out_of_bounds_coords() {
        assert_eq!(parse_coords("K0", BOUNDS), None);
        assert_eq!(parse_coords("A5", BOUNDS), None);
        assert_eq!(parse_coords("Z9", BOUNDS), None);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_coords("", BOUNDS), None);
        assert_eq!(parse_coords("12", BOUNDS), None);
        assert_eq!(parse_coords("A", BOUNDS), None);
        assert_eq!(parse_coords("AB", BOUNDS), None);
        assert_eq!(parse_coords("A-1", BOUNDS), None);
        assert_eq!(parse_coords("A 1", BOUNDS), None);
        assert_eq!(parse_coords("A999", BOUNDS), None);
    }
}
