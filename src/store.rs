use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use uuid::Uuid;

use crate::dlog;
use crate::errors::{Error, Result};
use crate::model::{Coordinates, Workout};

/// Ordered workout collection backed by one JSON snapshot file.
///
/// Insertion order is creation order. Every successful creation rewrites the
/// whole snapshot; there is no partial update.
#[derive(Debug)]
pub struct WorkoutStore {
    path: PathBuf,
    workouts: Vec<Workout>,
}

impl WorkoutStore {
    /// Open the store at `path`, loading the snapshot if one is there.
    ///
    /// A missing or unreadable snapshot is not an error: the collection just
    /// starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            path: path.into(),
            workouts: Vec::new(),
        };
        store.load();
        store
    }

    /// Re-read the snapshot. Absent or unparseable snapshots leave the
    /// collection as it was.
    pub fn load(&mut self) {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) => {
                dlog!("snapshot_missing path={} err={e}", self.path.display());
                return;
            }
        };

        match serde_json::from_slice::<Vec<Workout>>(&bytes) {
            Ok(workouts) => {
                dlog!(
                    "snapshot_loaded count={} path={}",
                    workouts.len(),
                    self.path.display()
                );
                self.workouts = workouts;
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    err = %e,
                    "snapshot unreadable, starting empty"
                );
            }
        }
    }

    /// Validate, append, persist, and hand back the new record.
    ///
    /// On validation failure nothing is appended and nothing is written.
    pub fn add_running(
        &mut self,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<&Workout> {
        let workout = Workout::running(coordinates, distance_km, duration_min, cadence_spm)?;
        self.append(workout)
    }

    pub fn add_cycling(
        &mut self,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<&Workout> {
        let workout = Workout::cycling(coordinates, distance_km, duration_min, elevation_gain_m)?;
        self.append(workout)
    }

    fn append(&mut self, workout: Workout) -> Result<&Workout> {
        self.workouts.push(workout);
        self.save()?;
        // Just pushed, so the collection cannot be empty.
        Ok(self.workouts.last().unwrap())
    }

    /// First record with a matching id; ids that are not UUIDs are ordinary
    /// misses.
    pub fn find_by_id(&self, id: &str) -> Result<&Workout> {
        let parsed = Uuid::parse_str(id.trim()).map_err(|_| Error::NotFound(id.to_owned()))?;
        self.workouts
            .iter()
            .find(|w| w.id == parsed)
            .ok_or_else(|| Error::NotFound(id.to_owned()))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Result<&mut Workout> {
        let parsed = Uuid::parse_str(id.trim()).map_err(|_| Error::NotFound(id.to_owned()))?;
        self.workouts
            .iter_mut()
            .find(|w| w.id == parsed)
            .ok_or_else(|| Error::NotFound(id.to_owned()))
    }

    /// Serialize the whole collection, in order, replacing any prior snapshot.
    ///
    /// The snapshot is written next to its destination and renamed into place,
    /// so a crash mid-write never leaves a truncated file behind.
    pub fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_vec_pretty(&self.workouts)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        dlog!(
            "snapshot_saved count={} path={}",
            self.workouts.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Drop everything: in-memory collection and the snapshot file. Idempotent.
    pub fn reset(&mut self) -> Result<()> {
        self.workouts.clear();
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        tracing::info!(path = %self.path.display(), "store reset");
        Ok(())
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn snapshot_path(dir: &tempfile::TempDir) -> PathBuf {
        dir.path().join("workouts.json")
    }

    #[test]
    fn invalid_input_leaves_collection_and_disk_untouched() {
        let dir = tempdir().unwrap();
        let mut store = WorkoutStore::open(snapshot_path(&dir));

        assert!(store
            .add_running(Coordinates(10.0, 10.0), 0.0, 25.0, 180.0)
            .is_err());
        assert!(store
            .add_running(Coordinates(10.0, 10.0), 5.0, 25.0, f64::NAN)
            .is_err());

        assert!(store.is_empty());
        assert!(!snapshot_path(&dir).exists(), "nothing should be persisted");
    }

    #[test]
    fn add_persists_immediately() {
        let dir = tempdir().unwrap();
        let mut store = WorkoutStore::open(snapshot_path(&dir));

        store
            .add_cycling(Coordinates(20.0, 20.0), 10.0, 40.0, 150.0)
            .unwrap();

        assert_eq!(store.len(), 1);
        assert!(snapshot_path(&dir).exists());
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        let dir = tempdir().unwrap();
        let mut store = WorkoutStore::open(snapshot_path(&dir));
        let id = store
            .add_running(Coordinates(1.0, 2.0), 5.0, 25.0, 180.0)
            .unwrap()
            .id
            .to_string();

        assert_eq!(store.find_by_id(&id).unwrap().id.to_string(), id);

        let miss = store.find_by_id(&Uuid::new_v4().to_string()).unwrap_err();
        assert!(matches!(miss, Error::NotFound(_)), "{miss}");

        let garbage = store.find_by_id("not-a-uuid").unwrap_err();
        assert!(matches!(garbage, Error::NotFound(_)), "{garbage}");
    }

    #[test]
    fn unparseable_snapshot_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = snapshot_path(&dir);
        fs::write(&path, b"{ this is not json ").unwrap();

        let store = WorkoutStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn reset_is_idempotent_and_clears_disk() {
        let dir = tempdir().unwrap();
        let path = snapshot_path(&dir);
        let mut store = WorkoutStore::open(&path);

        store
            .add_running(Coordinates(1.0, 2.0), 5.0, 25.0, 180.0)
            .unwrap();
        assert!(path.exists());

        store.reset().unwrap();
        assert!(store.is_empty());
        assert!(!path.exists());

        // A second reset with no snapshot on disk is fine.
        store.reset().unwrap();

        store.load();
        assert!(store.is_empty());
    }
}
