use kartenn::model::{Coordinates, WorkoutKind};
use kartenn::store::WorkoutStore;
use tempfile::tempdir;

#[test]
fn snapshot_round_trips_into_a_fresh_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workouts.json");

    let (run_id, ride_id) = {
        let mut store = WorkoutStore::open(&path);
        let run_id = store
            .add_running(Coordinates(10.0, 10.0), 5.0, 25.0, 180.0)
            .unwrap()
            .id;
        let ride_id = store
            .add_cycling(Coordinates(20.0, 20.0), 10.0, 40.0, 150.0)
            .unwrap()
            .id;
        (run_id, ride_id)
    };

    let reloaded = WorkoutStore::open(&path);
    assert_eq!(reloaded.len(), 2);

    let run = &reloaded.workouts()[0];
    assert_eq!(run.id, run_id);
    assert_eq!(run.coordinates, Coordinates(10.0, 10.0));
    match run.kind {
        WorkoutKind::Running {
            cadence_spm,
            pace_min_per_km,
        } => {
            assert!((pace_min_per_km - 5.0).abs() < 1e-9);
            assert!((cadence_spm - 180.0).abs() < 1e-9);
        }
        WorkoutKind::Cycling { .. } => panic!("first record should be the run"),
    }

    let ride = &reloaded.workouts()[1];
    assert_eq!(ride.id, ride_id);
    assert_eq!(ride.coordinates, Coordinates(20.0, 20.0));
    match ride.kind {
        WorkoutKind::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => {
            assert!((speed_km_per_h - 15.0).abs() < 1e-9);
            assert!((elevation_gain_m - 150.0).abs() < 1e-9);
        }
        WorkoutKind::Running { .. } => panic!("second record should be the ride"),
    }
}

#[test]
fn loaded_records_keep_their_descriptions_and_counters() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workouts.json");

    let description = {
        let mut store = WorkoutStore::open(&path);
        store
            .add_running(Coordinates(1.0, 2.0), 8.0, 40.0, 172.0)
            .unwrap()
            .description
            .clone()
    };

    let reloaded = WorkoutStore::open(&path);
    let workout = &reloaded.workouts()[0];
    assert_eq!(workout.description, description);
    assert!(workout.description.starts_with("Running on "));
    assert_eq!(workout.interaction_count, 0);
}

#[test]
fn find_by_id_after_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workouts.json");

    let id = {
        let mut store = WorkoutStore::open(&path);
        store
            .add_cycling(Coordinates(47.2, -1.55), 42.0, 95.0, 310.0)
            .unwrap()
            .id
            .to_string()
    };

    let reloaded = WorkoutStore::open(&path);
    let hit = reloaded.find_by_id(&id).unwrap();
    assert_eq!(hit.id.to_string(), id);
    assert!(matches!(hit.kind, WorkoutKind::Cycling { .. }));

    assert!(reloaded.find_by_id("c2a7e5c0-0000-0000-0000-000000000000").is_err());
}

#[test]
fn reset_then_load_yields_an_empty_collection() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workouts.json");

    let mut store = WorkoutStore::open(&path);
    store
        .add_running(Coordinates(10.0, 10.0), 5.0, 25.0, 180.0)
        .unwrap();
    store.reset().unwrap();

    let reloaded = WorkoutStore::open(&path);
    assert!(reloaded.is_empty());
}

#[test]
fn failed_validation_never_reaches_the_snapshot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workouts.json");

    let mut store = WorkoutStore::open(&path);
    store
        .add_running(Coordinates(10.0, 10.0), 5.0, 25.0, 180.0)
        .unwrap();
    assert!(store
        .add_cycling(Coordinates(10.0, 10.0), 10.0, 0.0, 50.0)
        .is_err());

    let reloaded = WorkoutStore::open(&path);
    assert_eq!(reloaded.len(), 1, "rejected record must not be persisted");
}
