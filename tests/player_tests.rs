use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    AiPlayer, Board, Cell, CliPlayer, Combatant, Coordinate, GameError, InputSource, Orientation,
    Ship, ShotOutcome, Strategy,
};

fn single_ship_board() -> Board {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(2, Coordinate::new(0, 0), Orientation::Horizontal))
        .unwrap();
    board.finish_placement();
    board
}

/// Input source that records every reported rejection.
struct Recorder {
    lines: VecDeque<String>,
    reports: Rc<RefCell<Vec<GameError>>>,
}

impl InputSource for Recorder {
    fn next_line(&mut self) -> Option<String> {
        self.lines.pop_front()
    }

    fn report(&mut self, err: &GameError) {
        self.reports.borrow_mut().push(*err);
    }
}

#[test]
fn test_ai_only_targets_unfired_cells() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = single_ship_board();
    let mut ai = AiPlayer::new();
    for c in board.coordinates().collect::<Vec<_>>() {
        if c != Coordinate::new(5, 5) && c != Coordinate::new(1, 0) {
            let _ = board.shoot(c);
        }
    }
    for _ in 0..20 {
        let target = ai.select_target(&mut rng, &board).unwrap();
        assert!(matches!(board.cell(target), Some(Cell::Empty | Cell::Ship)));
    }
}

#[test]
fn test_ai_fails_when_nothing_left() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new(2);
    for c in board.coordinates().collect::<Vec<_>>() {
        board.shoot(c).unwrap();
    }
    assert_eq!(
        AiPlayer::new().select_target(&mut rng, &board),
        Err(GameError::NoTargetsLeft)
    );
}

#[test]
fn test_take_turn_retries_recoverable_errors() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut opponent = single_ship_board();
    opponent.shoot(Coordinate::new(4, 4)).unwrap();

    let reports = Rc::new(RefCell::new(Vec::new()));
    let lines = ["abc", "7 1", "5 5", "1 1"].iter().map(|s| s.to_string()).collect();
    let source = Recorder {
        lines,
        reports: Rc::clone(&reports),
    };
    let mut human = Combatant::new("Player", Board::new(6), Box::new(CliPlayer::new(source)));

    let shot = human.take_turn(&mut rng, &mut opponent).unwrap();
    assert_eq!(shot.target, Coordinate::new(0, 0));
    assert_eq!(shot.outcome, ShotOutcome::Hit);
    assert_eq!(
        *reports.borrow(),
        vec![
            GameError::InvalidCoordinates,
            GameError::InvalidCoordinates,
            GameError::CellAlreadyShot,
        ]
    );
}

#[test]
fn test_take_turn_stops_on_closed_input() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut opponent = single_ship_board();
    let lines: VecDeque<String> = ["x"].iter().map(|s| s.to_string()).collect();
    let mut human = Combatant::new("Player", Board::new(6), Box::new(CliPlayer::new(lines)));
    assert_eq!(
        human.take_turn(&mut rng, &mut opponent),
        Err(GameError::InputClosed)
    );
    assert_eq!(opponent, single_ship_board());
}

#[test]
fn test_ai_turn_lands_on_board() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut opponent = single_ship_board();
    let mut ai = Combatant::new("Computer", Board::new(6), Box::new(AiPlayer::new()));
    let shot = ai.take_turn(&mut rng, &mut opponent).unwrap();
    assert!(opponent.is_inside(shot.target));
    assert!(matches!(opponent.cell(shot.target), Some(Cell::Hit | Cell::Miss)));
}
