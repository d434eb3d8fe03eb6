use pegsolver::{Occupancy, PegError, Position, Setup};

#[test]
fn no_holes_means_apex() {
    let s = Setup::from_holes(&[]).unwrap();
    assert_eq!(s, Setup::default());
    assert_eq!(s.empty_positions().map(Position::get).collect::<Vec<_>>(), vec![1]);
    assert_eq!(s.occupancy().peg_count(), 14);
}

#[test]
fn duplicate_holes_collapse_and_sort() {
    let s = Setup::from_holes(&[9, 2, 9, 2]).unwrap();
    assert_eq!(s.hole_count(), 2);
    assert_eq!(s.empty_positions().map(Position::get).collect::<Vec<_>>(), vec![2, 9]);
    assert_eq!(s.occupancy(), Occupancy::full().without(Position::new(2).unwrap()).without(Position::new(9).unwrap()));
}

#[test]
fn out_of_range_holes_are_rejected() {
    for bad in [0u8, 16, 255] {
        assert!(matches!(Setup::from_holes(&[1, bad]), Err(PegError::InvalidConfiguration(_))), "{bad} accepted");
    }
}
