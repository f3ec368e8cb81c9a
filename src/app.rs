use crate::dlog;
use crate::errors::{Error, Result};
use crate::form::{self, FormInput, FormKind};
use crate::map::{DEFAULT_ZOOM, MapView, Marker, PositionProvider};
use crate::model::{Coordinates, Workout};
use crate::store::WorkoutStore;

/// Everything one session mutates, held in one place and passed to handlers
/// explicitly. Handlers run to completion, one user action at a time.
pub struct App<M> {
    store: WorkoutStore,
    map: Option<M>,
    pending_click: Option<Coordinates>,
    zoom: u8,
}

impl<M: MapView> App<M> {
    /// Boot a session: ask the provider where we are and, if it answers,
    /// bring the map up centered there with one marker per persisted workout.
    ///
    /// Provider failure is non-fatal; it only disables map output.
    pub fn start(store: WorkoutStore, provider: &dyn PositionProvider, mut map: M) -> Self {
        let map = match provider.current_position() {
            Ok(position) => {
                map.recenter(position, DEFAULT_ZOOM);
                for workout in store.workouts() {
                    map.place_marker(Marker::for_workout(workout));
                }
                Some(map)
            }
            Err(e) => {
                tracing::warn!(err = %e, "map features disabled");
                None
            }
        };

        Self {
            store,
            map,
            pending_click: None,
            zoom: DEFAULT_ZOOM,
        }
    }

    /// A click on the map opens the form; remember where it landed.
    pub fn map_click(&mut self, coordinates: Coordinates) {
        dlog!(
            "map_click lat={} lng={}",
            coordinates.lat(),
            coordinates.lng()
        );
        self.pending_click = Some(coordinates);
    }

    /// Form submission: validate the raw fields, create the record at the
    /// pending click position, render its marker, persist.
    ///
    /// On `InvalidInput` nothing mutates; the pending click stays so the user
    /// can resubmit the corrected form.
    pub fn submit_form(&mut self, input: &FormInput) -> Result<Workout> {
        let Some(coordinates) = self.pending_click else {
            return Err(Error::InvalidInput(
                "no map location selected yet".to_owned(),
            ));
        };

        let parsed = form::parse(input)?;
        let workout = match parsed.kind {
            FormKind::Running => self.store.add_running(
                coordinates,
                parsed.distance_km,
                parsed.duration_min,
                parsed.extra,
            )?,
            FormKind::Cycling => self.store.add_cycling(
                coordinates,
                parsed.distance_km,
                parsed.duration_min,
                parsed.extra,
            )?,
        }
        .clone();

        self.pending_click = None;
        if let Some(map) = self.map.as_mut() {
            map.place_marker(Marker::for_workout(&workout));
        }
        dlog!("workout_created kind={} id={}", workout.kind.name(), workout.id);
        Ok(workout)
    }

    /// Selection from the rendered list: re-center the map on the workout and
    /// count the interaction. Unknown ids are a no-op.
    pub fn select_workout(&mut self, id: &str) -> Option<Workout> {
        let workout = match self.store.find_by_id_mut(id) {
            Ok(workout) => workout,
            Err(e) => {
                dlog!("select_miss id={id} err={e}");
                return None;
            }
        };

        workout.select();
        let snapshot = workout.clone();
        if let Some(map) = self.map.as_mut() {
            map.recenter(snapshot.coordinates, self.zoom);
        }
        Some(snapshot)
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }
}
