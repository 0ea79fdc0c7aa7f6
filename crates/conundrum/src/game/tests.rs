use crate::cube::CubeSet;
use crate::env::Size;
use crate::input::{ErrorKind, IStr};

use super::Game;

fn kind_of(line: &str) -> ErrorKind {
    match line.parse::<Game>() {
        Ok(game) => panic!("expected {line:?} to fail, but got {game:?}"),
        Err(e) => e.kind().clone(),
    }
}

#[test]
fn test_parse_game() {
    let game: Game = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green"
        .parse()
        .unwrap();

    assert_eq!(game.id, 1);
    assert_eq!(
        game.subsets,
        [
            CubeSet::new(4, 0, 3),
            CubeSet::new(1, 2, 6),
            CubeSet::new(0, 2, 0)
        ]
    );
    assert_eq!(game.minimum_bag(), CubeSet::new(4, 2, 6));
    assert_eq!(game.minimum_bag().power(), 48);
}

#[test]
fn test_parse_is_deterministic() {
    let line = "Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red";
    let a: Game = line.parse().unwrap();
    let b: Game = line.parse().unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_last_color_wins() {
    let game: Game = "Game 7: 1 red, 2 blue, 5 red".parse().unwrap();
    assert_eq!(game.subsets, [CubeSet::new(5, 0, 2)]);
}

#[test]
fn test_unknown_colors_are_ignored() {
    let game: Game = "Game 2: 3 purple, 1 blue; 4 Red".parse().unwrap();
    assert_eq!(game.subsets, [CubeSet::new(0, 0, 1), CubeSet::ZERO]);
    assert_eq!(game.minimum_bag().power(), 0);
}

#[test]
fn test_surrounding_whitespace() {
    let game: Game = "  Game 12:  2 red, 1 green \r".parse().unwrap();
    assert_eq!(game.id, 12);
    assert_eq!(game.subsets, [CubeSet::new(2, 1, 0)]);
}

#[test]
fn test_malformed_header() {
    assert_eq!(
        kind_of("Gam 1: 3 blue"),
        ErrorKind::ExpectedWord("Game", "Gam".into())
    );
    assert_eq!(kind_of("Game x: 3 blue"), ErrorKind::NotInteger("x".into()));
    assert_eq!(kind_of("Game: 3 blue"), ErrorKind::ExpectedHeader);
    assert_eq!(kind_of(": 3 blue"), ErrorKind::ExpectedHeader);
    assert_eq!(
        kind_of("Game 1 2: 3 blue"),
        ErrorKind::TrailingInput("2".into())
    );
    assert_eq!(kind_of("Game -1: 3 blue"), ErrorKind::NotInteger("-1".into()));
}

#[test]
fn test_missing_colon() {
    assert_eq!(kind_of("Game 1 3 blue"), ErrorKind::MissingDelimiter(":"));
}

#[test]
fn test_malformed_pulls() {
    assert_eq!(kind_of("Game 1: x blue"), ErrorKind::NotInteger("x".into()));
    assert_eq!(kind_of("Game 1: 3"), ErrorKind::ExpectedPull);
    assert_eq!(kind_of("Game 1:"), ErrorKind::ExpectedPull);
    assert_eq!(kind_of("Game 1: 3 blue; ; 2 red"), ErrorKind::ExpectedPull);
    assert_eq!(kind_of("Game 1: 3 blue, , 2 red"), ErrorKind::ExpectedPull);
}

#[test]
fn test_blank_line() {
    assert_eq!(kind_of(""), ErrorKind::ExpectedLine);
    assert_eq!(kind_of(" \t "), ErrorKind::ExpectedLine);
}

#[test]
fn test_error_span() {
    let data = b"Game 1: 3 blue, 4x red";
    let error = IStr::new(data).next::<Game>().unwrap_err();
    assert_eq!(*error.kind(), ErrorKind::NotInteger("4x".into()));
    assert_eq!(error.span(), Size::new(16)..Size::new(18));
}

#[test]
fn test_display_parses_back() {
    let line = "Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green; 0 blue";
    let game: Game = line.parse().unwrap();

    let printed = game.to_string();
    assert_eq!(printed, "Game 5: 6 red, 3 green, 1 blue; 1 red, 2 green, 2 blue; 0 red");
    assert_eq!(printed.parse::<Game>().unwrap(), game);
}

#[test]
fn test_possible() {
    let budget = CubeSet::BUDGET;

    let game: Game = "Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red"
        .parse()
        .unwrap();

    assert!(!game.is_possible(&budget));
    assert!(game.is_possible(&game.minimum_bag()));

    let game: Game = "Game 1: 12 red, 13 green, 14 blue".parse().unwrap();
    assert!(game.is_possible(&budget));
}

#[test]
fn test_empty_game_is_possible() {
    let game = Game {
        id: 9,
        subsets: Vec::new(),
    };

    assert!(game.is_possible(&CubeSet::ZERO));
    assert_eq!(game.minimum_bag(), CubeSet::ZERO);
}

#[test]
fn test_possible_is_monotonic() {
    let game: Game = "Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue"
        .parse()
        .unwrap();

    let budgets = [
        CubeSet::new(1, 3, 4),
        CubeSet::new(2, 3, 4),
        CubeSet::new(1, 9, 4),
        CubeSet::new(5, 5, 5),
        CubeSet::BUDGET,
    ];

    for budget in budgets {
        assert!(game.is_possible(&budget), "{budget}");
    }
}

#[test]
fn test_minimum_bag_is_tightest() {
    let game: Game = "Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red"
        .parse()
        .unwrap();

    let bag = game.minimum_bag();
    assert_eq!(bag, CubeSet::new(20, 13, 6));
    assert!(game.is_possible(&bag));

    assert!(!game.is_possible(&CubeSet::new(19, 13, 6)));
    assert!(!game.is_possible(&CubeSet::new(20, 12, 6)));
    assert!(!game.is_possible(&CubeSet::new(20, 13, 5)));
}
