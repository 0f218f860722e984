//! Integration tests for fh-output.

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{PositionRow, StepSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn pos_row(robot: u32, step: u64) -> PositionRow {
        PositionRow { step, robot, x: robot as i32 * 10, y: -(step as i32) }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trajectories.csv").exists());
        assert!(dir.path().join("step_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trajectories.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["step", "robot", "x", "y"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["step", "traveled", "visited_cells", "estimated_area"]);
    }

    #[test]
    fn csv_positions_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_positions(&[pos_row(0, 5), pos_row(1, 5), pos_row(2, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trajectories.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][0], "5");  // step
        assert_eq!(&rows[1][1], "1");  // robot
        assert_eq!(&rows[2][2], "20"); // x
        assert_eq!(&rows[2][3], "-5"); // y
    }

    #[test]
    fn csv_step_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&StepSummaryRow {
            step:           3,
            traveled:       7,
            visited_cells:  6,
            estimated_area: 1.5,
        })
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "7");
        assert_eq!(&rows[0][2], "6");
        assert_eq!(&rows[0][3], "1.500000");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_positions_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_positions(&[]).unwrap();
    }

    #[test]
    fn missing_dir_errors() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("nope")).is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use fh_core::{GridPoint, MissionConfig};
    use fh_sim::MissionBuilder;

    use crate::csv::CsvWriter;
    use crate::observer::MissionOutputObserver;
    use crate::row::{PositionRow, StepSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn config(interval: u64) -> MissionConfig {
        MissionConfig {
            goal:                  GridPoint::new(0, 0),
            max_distance:          200.0,
            seed:                  Some(1),
            output_interval_steps: interval,
        }
    }

    /// Fails every position write; counts calls.
    #[derive(Default)]
    struct FailingWriter {
        position_calls: usize,
        finished:       bool,
    }

    impl OutputWriter for FailingWriter {
        fn write_positions(&mut self, _rows: &[PositionRow]) -> OutputResult<()> {
            self.position_calls += 1;
            Err(OutputError::Io(std::io::Error::other(format!("write {}", self.position_calls))))
        }

        fn write_step_summary(&mut self, _row: &StepSummaryRow) -> OutputResult<()> {
            Ok(())
        }

        fn finish(&mut self) -> OutputResult<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn integration_csv() {
        let starts = [GridPoint::new(0, 0), GridPoint::new(4, 0), GridPoint::new(-3, 2)];
        let mut mission = MissionBuilder::from_initial_positions(6, &starts, config(2))
            .build()
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = MissionOutputObserver::new(writer);
        mission.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // interval 2 over steps 0..6 → snapshots at 0, 2, 4 (3 steps × 3 robots)
        let mut rdr = csv::Reader::from_path(dir.path().join("trajectories.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 9);

        // Step 0 rows are the initial positions in robot order.
        assert_eq!(&rows[2][0], "0");
        assert_eq!(&rows[2][1], "2");
        assert_eq!(&rows[2][2], "-3");
        assert_eq!(&rows[2][3], "2");

        let mut rdr2 = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 3);
        assert_eq!(&summaries[0][1], "0"); // nothing traveled at step 0
        assert_eq!(&summaries[0][2], "3");
    }

    #[test]
    fn first_error_is_kept() {
        let mut mission = MissionBuilder::from_initial_positions(4, &[GridPoint::new(0, 0)], config(1))
            .build()
            .unwrap();
        let mut obs = MissionOutputObserver::new(FailingWriter::default());
        mission.run(&mut obs).unwrap();

        let err = obs.take_error().expect("stored error");
        assert_eq!(err.to_string(), "I/O error: write 1");
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.position_calls, 4);
        assert!(writer.finished);
    }
}

// ── Text listing ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_tests {
    use fh_core::{GridPoint, RobotId, Step};
    use fh_fleet::TrajectoryStore;

    use crate::format_trajectories;

    #[test]
    fn one_line_per_robot() {
        let mut store = TrajectoryStore::from_initial_positions(3, &[GridPoint::new(0, 0), GridPoint::new(5, 5)]);
        store.set_position(Step(1), RobotId(0), GridPoint::new(1, 0));
        store.set_position(Step(2), RobotId(0), GridPoint::new(1, 1));
        store.set_position(Step(1), RobotId(1), GridPoint::new(5, 4));
        store.set_position(Step(2), RobotId(1), GridPoint::new(5, 4));

        assert_eq!(
            format_trajectories(&store),
            "(0, 0) (1, 0) (1, 1)\n(5, 5) (5, 4) (5, 4)\n"
        );
    }

    #[test]
    fn empty_fleet_renders_nothing() {
        assert_eq!(format_trajectories(&TrajectoryStore::new(4, 0)), "");
    }
}
