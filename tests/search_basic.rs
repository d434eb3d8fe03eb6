use pegsolver::board::topology;
use pegsolver::{Occupancy, Position, Searcher, Setup};

fn pos(n: u8) -> Position { Position::new(n).unwrap() }

fn solve_len(holes: &[u8]) -> usize {
    let setup = Setup::from_holes(holes).unwrap();
    Searcher::default().search(setup.occupancy()).sequence.len()
}

#[test]
fn apex_hole_clears_to_one_peg() {
    let setup = Setup::default();
    let mut s = Searcher::default();
    let res = s.search(setup.occupancy());
    assert_eq!(res.sequence.len(), 13);
    assert_eq!(res.pegs_removed, 13);
    assert_eq!(res.pegs_remaining, 1);
    assert_eq!(15 - setup.hole_count() - res.sequence.len(), 1);
}

#[test]
fn returned_sequence_replays_legally() {
    let start = Setup::default().occupancy();
    let res = Searcher::default().search(start);
    let mut occ = start;
    for &mv in &res.sequence { occ = occ.apply_move(mv).expect("sequence move must be legal"); }
    assert_eq!(occ.peg_count(), 1);
    assert!(topology::standard().legal_moves(occ).is_empty());
}

#[test]
fn two_holes_keep_the_remaining_formula() {
    let setup = Setup::from_holes(&[1, 2]).unwrap();
    let res = Searcher::default().search(setup.occupancy());
    assert!(res.sequence.len() <= 13, "too long: {}", res.sequence.len());
    assert_eq!(res.pegs_remaining, 15 - 2 - res.sequence.len());
}

#[test]
fn opposite_corners_terminate_without_error() {
    let setup = Setup::from_holes(&[1, 15]).unwrap();
    let res = Searcher::default().search(setup.occupancy());
    assert!(res.sequence.len() <= 12);
    assert_eq!(res.pegs_remaining, 15 - 2 - res.sequence.len());
}

#[test]
fn terminal_occupancies_yield_empty_sequences() {
    let mut s = Searcher::default();
    for occ in [
        Occupancy::EMPTY,
        Occupancy::with_pegs([pos(5)]),
        Occupancy::with_pegs([pos(1), pos(11), pos(15)]),
        Occupancy::full(),
    ] {
        let res = s.search(occ);
        assert!(res.sequence.is_empty(), "expected no moves from {occ:#06x}");
        assert_eq!(res.pegs_remaining, occ.peg_count() as usize);
    }
}

#[test]
fn corners_are_equivalent_starts() {
    // rotations of the triangle map corner onto corner
    assert_eq!(solve_len(&[11]), 13);
    assert_eq!(solve_len(&[15]), 13);
}

#[test]
fn mirrored_starts_remove_the_same_number_of_pegs() {
    assert_eq!(solve_len(&[2]), solve_len(&[3]));
    assert_eq!(solve_len(&[4]), solve_len(&[6]));
    assert_eq!(solve_len(&[7]), solve_len(&[10]));
}

#[test]
fn single_jump_position() {
    let occ = Occupancy::with_pegs([pos(1), pos(2)]);
    let res = Searcher::default().search(occ);
    assert_eq!(res.sequence.len(), 1);
    assert_eq!(res.sequence[0].to, pos(4));
}

fn line(holes: &[u8]) -> String {
    let start = Setup::from_holes(holes).unwrap().occupancy();
    let res = Searcher::default().search(start);
    res.sequence.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

#[test]
fn ties_go_to_the_first_line_in_move_order() {
    pretty_assertions::assert_eq!(
        line(&[1]),
        "4-2-1 6-5-4 1-3-6 7-4-2 10-6-3 12-8-5 13-9-6 2-5-9 3-6-10 15-10-6 6-9-13 14-13-12 11-12-13"
    );
    pretty_assertions::assert_eq!(
        line(&[2]),
        "7-4-2 1-2-4 9-8-7 3-5-8 7-4-2 10-6-3 12-8-5 2-5-9 14-13-12 11-12-13 13-9-6 3-6-10 15-10-6"
    );
    pretty_assertions::assert_eq!(
        line(&[1, 2]),
        "6-3-1 4-5-6 10-6-3 1-3-6 13-8-4 7-4-2 15-14-13 12-13-14 14-9-5 6-5-4 2-4-7 11-7-4"
    );
}
