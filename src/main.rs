#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::Result;
use clap::Parser;
use kartenn::model::{Coordinates, Workout, WorkoutKind};
use kartenn::{
    app::App,
    cli,
    form::FormInput,
    map::{FixedPosition, LogMap},
    store::WorkoutStore,
    utils,
};

#[macro_use]
extern crate kartenn;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    utils::init_logging(cli.verbose, cli.quiet);

    let data_path = cli.data.clone().unwrap_or_else(utils::default_data_path);
    let provider = FixedPosition(position(&cli));

    match cli.cmd {
        Some(cli::Cmd::Add {
            kind,
            distance,
            duration,
            extra,
        }) => {
            dlog!("mode=add kind={kind} data={}", data_path.display());

            let store = WorkoutStore::open(&data_path);
            let mut app = App::start(store, &provider, LogMap);
            if let Some(click) = provider.0 {
                app.map_click(click);
            }

            let workout = app.submit_form(&FormInput {
                kind,
                distance,
                duration,
                extra,
            })?;
            println!("{}", card(&workout));
            println!("  id {}", workout.id);
            Ok(())
        }
        Some(cli::Cmd::Show { id }) => {
            dlog!("mode=show id={id} data={}", data_path.display());

            let store = WorkoutStore::open(&data_path);
            let mut app = App::start(store, &provider, LogMap);
            match app.select_workout(&id) {
                Some(workout) => {
                    println!("{}", card(&workout));
                    println!(
                        "  id {} at ({}, {}), created {}",
                        workout.id,
                        workout.coordinates.lat(),
                        workout.coordinates.lng(),
                        workout.created_at.to_rfc3339()
                    );
                }
                None => println!("No workout with id {id}."),
            }
            Ok(())
        }
        Some(cli::Cmd::Reset) => {
            let mut store = WorkoutStore::open(&data_path);
            store.reset()?;
            println!("Cleared all workouts.");
            Ok(())
        }
        None => {
            let store = WorkoutStore::open(&data_path);
            dlog!("mode=list stored={} data={}", store.len(), data_path.display());

            if store.is_empty() {
                anyhow::bail!("No workouts stored yet. Record one with `kartenn add`.");
            }

            for (i, workout) in store.workouts().iter().take(cli.count).enumerate() {
                if cli.details {
                    println!(
                        "{}\t{}\t{}\t({}, {})\t{}",
                        i + 1,
                        workout.created_at.to_rfc3339(),
                        workout.id,
                        workout.coordinates.lat(),
                        workout.coordinates.lng(),
                        card(workout)
                    );
                } else {
                    println!("{}", card(workout));
                }
            }
            Ok(())
        }
    }
}

/// One listing line per workout, with the kind's icon and derived metric.
fn card(workout: &Workout) -> String {
    match workout.kind {
        WorkoutKind::Running {
            cadence_spm,
            pace_min_per_km,
        } => format!(
            "{} {}: {} km, {} min, {pace_min_per_km:.1} min/km, {cadence_spm} spm",
            workout.kind.emoji(),
            workout.description,
            workout.distance_km,
            workout.duration_min
        ),
        WorkoutKind::Cycling {
            elevation_gain_m,
            speed_km_per_h,
        } => format!(
            "{} {}: {} km, {} min, {speed_km_per_h:.1} km/h, {elevation_gain_m} m gain",
            workout.kind.emoji(),
            workout.description,
            workout.distance_km,
            workout.duration_min
        ),
    }
}

fn position(cli: &cli::Cli) -> Option<Coordinates> {
    match (cli.lat, cli.lng) {
        (Some(lat), Some(lng)) => Some(Coordinates(lat, lng)),
        (None, None) => None,
        _ => {
            tracing::warn!("both --lat and --lng are needed for map features");
            None
        }
    }
}
