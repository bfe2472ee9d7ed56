use seabattle::{parse_coordinates, Coordinate, GameError};

#[test]
fn test_parse_joined_and_split_tokens() {
    assert_eq!(parse_coordinates("34", 6), Ok(Coordinate::new(2, 3)));
    assert_eq!(parse_coordinates("3 4\n", 6), Ok(Coordinate::new(2, 3)));
    assert_eq!(parse_coordinates("  1   6 ", 6), Ok(Coordinate::new(0, 5)));
    assert_eq!(parse_coordinates("10 3", 12), Ok(Coordinate::new(9, 2)));
}

#[test]
fn test_parse_rejects_malformed_input() {
    for input in ["", "   ", "3", "a4", "3b", "3 4 5", "-1 2", "3,4", "+3 4"] {
        assert_eq!(
            parse_coordinates(input, 6),
            Err(GameError::InvalidCoordinates),
            "input {:?}",
            input
        );
    }
}

#[test]
fn test_parse_rejects_out_of_range() {
    for input in ["07", "70", "0 1", "1 0", "7 1", "99999999999999999999999 1"] {
        assert_eq!(
            parse_coordinates(input, 6),
            Err(GameError::InvalidCoordinates),
            "input {:?}",
            input
        );
    }
}
