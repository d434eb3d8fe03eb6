use pegsolver::board::topology;
use pegsolver::{Move, Occupancy, PegError, Position};

fn pos(n: u8) -> Position { Position::new(n).unwrap() }

#[test]
fn legal_moves_apply_cleanly_on_every_occupancy() {
    let t = topology::standard();
    for bits in 0..(1u16 << 15) {
        let occ = Occupancy::with_pegs(Position::all().filter(|p| bits >> (p.get() - 1) & 1 == 1));
        assert_eq!(occ.bits(), bits);
        let moves = t.legal_moves(occ);
        assert_eq!(moves.len(), t.iter().filter(|&&m| occ.is_legal(m)).count());
        for mv in moves {
            let next = occ.apply_move(mv).expect("generated move must be legal");
            assert!(!next.has_peg(mv.from) && !next.has_peg(mv.over) && next.has_peg(mv.to));
            assert_eq!(next.peg_count() + 1, occ.peg_count());
        }
    }
}

#[test]
fn opening_moves_from_apex_hole_in_order() {
    let occ = Occupancy::with_empty([pos(1)]);
    let moves = topology::standard().legal_moves(occ);
    assert_eq!(moves, vec![Move::new(pos(4), pos(2), pos(1)), Move::new(pos(6), pos(3), pos(1))]);
}

#[test]
fn applying_illegal_move_is_an_invariant_violation() {
    let occ = Occupancy::full();
    let mv = Move::new(pos(4), pos(2), pos(1));
    match occ.apply_move(mv) {
        Err(PegError::InvariantViolation { mv: bad, occupancy }) => {
            assert_eq!(bad, mv);
            assert_eq!(occupancy, occ);
        }
        other => panic!("expected invariant violation, got {other:?}"),
    }
    let lone = Occupancy::with_pegs([pos(4)]);
    assert!(lone.apply_move(mv).is_err(), "jumping over an empty cell must fail");
}

#[test]
fn occupancy_equality_is_by_value() {
    let a = Occupancy::with_empty([pos(3), pos(7)]);
    let b = Occupancy::full().without(pos(7)).without(pos(3));
    assert_eq!(a, b);
    assert_eq!(a.bits(), b.bits());
    assert_eq!(a.peg_count(), 13);
    assert!(!a.has_peg(pos(3)) && !a.has_peg(pos(7)) && a.has_peg(pos(1)));
}

#[test]
fn occupancy_draws_a_triangle() {
    let occ = Occupancy::with_empty([pos(1)]);
    let drawn = occ.to_string();
    let lines: Vec<&str> = drawn.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0].trim(), ".");
    assert_eq!(lines[4], "x   x   x   x   x");
}
