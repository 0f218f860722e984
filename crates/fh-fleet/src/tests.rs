//! Unit tests for fh-fleet.

use fh_core::{GridPoint, RobotId, Step};

use crate::{Axis, FleetState, TrajectoryStore};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn p(x: i32, y: i32) -> GridPoint {
    GridPoint::new(x, y)
}

// ── FleetState ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fleet_state {
    use super::*;

    #[test]
    fn positions_by_id() {
        let fleet = FleetState::new(vec![p(0, 0), p(10, 0)]);
        assert_eq!(fleet.len(), 2);
        assert!(!fleet.is_empty());
        assert_eq!(fleet.position(RobotId(1)), p(10, 0));
    }

    #[test]
    fn set_position_overwrites_one_entry() {
        let mut fleet = FleetState::new(vec![p(0, 0), p(10, 0)]);
        fleet.set_position(RobotId(0), p(1, 0));
        assert_eq!(fleet.positions(), &[p(1, 0), p(10, 0)]);
    }

    #[test]
    fn others_skips_only_self() {
        let fleet = FleetState::new(vec![p(0, 0), p(5, 5), p(0, 0)]);
        let others: Vec<_> = fleet.others(RobotId(0)).collect();
        assert_eq!(others, vec![p(5, 5), p(0, 0)]);
    }

    #[test]
    fn iter_yields_ids_in_order() {
        let fleet = FleetState::new(vec![p(1, 1), p(2, 2)]);
        let ids: Vec<_> = fleet.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![RobotId(0), RobotId(1)]);
    }
}

// ── TrajectoryStore ───────────────────────────────────────────────────────────

#[cfg(test)]
mod trajectory_store {
    use super::*;

    #[test]
    fn shape() {
        let store = TrajectoryStore::new(100, 3);
        assert_eq!(store.steps(), 100);
        assert_eq!(store.robots(), 3);
    }

    #[test]
    fn get_set_by_axis() {
        let mut store = TrajectoryStore::new(4, 2);
        store.set(Step(2), RobotId(1), Axis::X, 7);
        store.set(Step(2), RobotId(1), Axis::Y, -3);
        assert_eq!(store.get(Step(2), RobotId(1), Axis::X), 7);
        assert_eq!(store.get(Step(2), RobotId(1), Axis::Y), -3);
        assert_eq!(store.position(Step(2), RobotId(1)), p(7, -3));
        // Neighbouring cells untouched.
        assert_eq!(store.position(Step(2), RobotId(0)), p(0, 0));
        assert_eq!(store.position(Step(3), RobotId(1)), p(0, 0));
    }

    #[test]
    fn initial_positions_written_at_step_zero() {
        let store = TrajectoryStore::from_initial_positions(5, &[p(0, 0), p(10, 0)]);
        assert_eq!(store.robots(), 2);
        assert_eq!(store.initial_positions(), vec![p(0, 0), p(10, 0)]);
    }

    #[test]
    fn seed_rejects_wrong_count() {
        let mut store = TrajectoryStore::new(5, 3);
        assert!(store.seed_initial_positions(&[p(0, 0)]).is_err());
        store.seed_initial_positions(&[p(1, 1), p(2, 2), p(3, 3)]).unwrap();
        assert_eq!(store.snapshot(Step::ZERO), vec![p(1, 1), p(2, 2), p(3, 3)]);
    }

    #[test]
    fn path_lists_every_step() {
        let mut store = TrajectoryStore::from_initial_positions(3, &[p(0, 0)]);
        store.set_position(Step(1), RobotId(0), p(1, 0));
        store.set_position(Step(2), RobotId(0), p(2, 0));
        assert_eq!(store.path(RobotId(0)), vec![p(0, 0), p(1, 0), p(2, 0)]);
    }

    #[test]
    fn zero_steps_has_no_initial_positions() {
        let store = TrajectoryStore::from_initial_positions(0, &[p(4, 4)]);
        assert!(store.initial_positions().is_empty());
    }

    #[test]
    #[should_panic]
    fn out_of_range_step_panics() {
        let store = TrajectoryStore::new(2, 1);
        store.get(Step(2), RobotId(0), Axis::X);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{FleetError, load_positions_file, load_positions_reader};

    use super::*;

    #[test]
    fn loads_pairs() {
        let positions = load_positions_reader(Cursor::new("2\n0 0\n10 0\n")).unwrap();
        assert_eq!(positions, vec![p(0, 0), p(10, 0)]);
    }

    #[test]
    fn line_breaks_are_irrelevant() {
        let positions = load_positions_reader(Cursor::new("3 1 2 3\n4\n-5 6")).unwrap();
        assert_eq!(positions, vec![p(1, 2), p(3, 4), p(-5, 6)]);
    }

    #[test]
    fn trailing_tokens_ignored() {
        let positions = load_positions_reader(Cursor::new("1 5 5 9 9")).unwrap();
        assert_eq!(positions, vec![p(5, 5)]);
    }

    #[test]
    fn truncated_input_reports_failure() {
        let err = load_positions_reader(Cursor::new("3\n0 0\n1 1\n")).unwrap_err();
        match err {
            FleetError::Truncated { expected, read } => {
                assert_eq!(expected, 3);
                assert_eq!(read, 2);
            }
            other => panic!("wrong error: {other}"),
        }
    }

    #[test]
    fn half_pair_counts_as_truncated() {
        let err = load_positions_reader(Cursor::new("2 0 0 7")).unwrap_err();
        assert!(matches!(err, FleetError::Truncated { expected: 2, read: 1 }));
    }

    #[test]
    fn bad_header_and_bad_coordinate() {
        assert!(matches!(
            load_positions_reader(Cursor::new("")).unwrap_err(),
            FleetError::Parse(_)
        ));
        assert!(matches!(
            load_positions_reader(Cursor::new("two 0 0")).unwrap_err(),
            FleetError::Parse(_)
        ));
        assert!(matches!(
            load_positions_reader(Cursor::new("1 0 y")).unwrap_err(),
            FleetError::Parse(_)
        ));
    }

    #[test]
    fn zero_robots_is_valid() {
        assert!(load_positions_reader(Cursor::new("0")).unwrap().is_empty());
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("robots.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "2\n0 0\n10 0").unwrap();
        drop(f);
        assert_eq!(load_positions_file(&path).unwrap(), vec![p(0, 0), p(10, 0)]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_positions_file(std::path::Path::new("/nonexistent/robots.txt")).unwrap_err();
        assert!(matches!(err, FleetError::Io(_)));
    }
}
