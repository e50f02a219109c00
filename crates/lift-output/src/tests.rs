//! Integration tests for lift-output.

#[cfg(test)]
mod stats_tests {
    use crate::TripStats;

    #[test]
    fn empty_stats_are_zero() {
        let stats = TripStats::new();
        assert_eq!(stats.delivered(), 0);
        assert_eq!(stats.max_ticks(), 0);
        assert_eq!(stats.mean_ticks(), 0.0);
    }

    #[test]
    fn record_accumulates() {
        let mut stats = TripStats::new();
        stats.record(4);
        stats.record(1);
        stats.record(7);
        assert_eq!(stats.delivered(), 3);
        assert_eq!(stats.total_ticks(), 12);
        assert_eq!(stats.max_ticks(), 7);
        assert_eq!(stats.mean_ticks(), 4.0);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{FleetSnapshotRow, TickSummaryRow, TripRecordRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn trip_row(request_id: u32) -> TripRecordRow {
        TripRecordRow {
            request_id,
            origin_floor: 0,
            destination_floor: 4,
            arrival_tick: 0,
            completed_tick: 4,
            elapsed_ticks: 4,
        }
    }

    fn snapshot_row(car_id: u32, tick: u64) -> FleetSnapshotRow {
        FleetSnapshotRow {
            car_id,
            tick,
            floor: car_id,
            heading: 0,
            door_open: false,
            onboard: 0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trip_records.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
        assert!(dir.path().join("fleet_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trip_records.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "request_id",
                "origin_floor",
                "destination_floor",
                "arrival_tick",
                "completed_tick",
                "elapsed_ticks"
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["tick", "delivered", "delivered_total"]);
    }

    #[test]
    fn csv_trip_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trip(&trip_row(0)).unwrap();
        w.write_trip(&trip_row(1)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("trip_records.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0"); // request_id
        assert_eq!(&rows[0][5], "4"); // elapsed_ticks
        assert_eq!(&rows[1][0], "1");
    }

    #[test]
    fn csv_snapshot_batch_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snapshot_row(0, 5), snapshot_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("fleet_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[1][0], "1");
    }

    #[test]
    fn csv_tick_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 3, delivered: 2, delivered_total: 5 })
            .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][1], "2");
        assert_eq!(&rows[0][2], "5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_snapshot_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use lift_core::{BuildingConfig, SimConfig, Tick};
        use lift_dispatch::ScanPolicy;
        use lift_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let building = BuildingConfig { floor_count: 5, car_count: 1, car_capacity: 2 };
        let config = SimConfig { total_ticks: 6, seed: 1, output_interval_ticks: 2 };
        let mut sim = SimBuilder::new(building, config, ScanPolicy).build().unwrap();
        sim.push_request(0, 4, Tick(0)).unwrap();
        sim.push_request(0, 1, Tick(0)).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let stats = obs.stats();
        assert_eq!(stats.delivered(), 2);
        assert_eq!(stats.max_ticks(), 4);

        // Two trips, six tick summaries, snapshots at ticks 0, 2, 4.
        let mut trips = csv::Reader::from_path(dir.path().join("trip_records.csv")).unwrap();
        assert_eq!(trips.records().count(), 2);
        let mut summaries = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(summaries.records().count(), 6);
        let mut snaps = csv::Reader::from_path(dir.path().join("fleet_snapshots.csv")).unwrap();
        assert_eq!(snaps.records().count(), 3);
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{TickSummaryRow, TripRecordRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_schema_created() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_rows_written() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_trip(&TripRecordRow {
            request_id: 0,
            origin_floor: 0,
            destination_floor: 4,
            arrival_tick: 0,
            completed_tick: 4,
            elapsed_ticks: 4,
        })
        .unwrap();
        w.write_tick_summary(&TickSummaryRow { tick: 0, delivered: 1, delivered_total: 1 })
            .unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let trips: i64 = conn
            .query_row("SELECT COUNT(*) FROM trip_records", [], |r| r.get(0))
            .unwrap();
        assert_eq!(trips, 1);
        let elapsed: i64 = conn
            .query_row("SELECT elapsed_ticks FROM trip_records WHERE request_id = 0", [], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(elapsed, 4);
    }
}
