use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_LIST_COUNT: usize = 100;

#[derive(Parser, Debug)]
#[command(
    name = "kartenn",
    about = "Track map-pinned running and cycling workouts from the command line"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,

    /// Latitude reported by the position provider.
    ///
    /// Together with --lng this enables map output (markers, re-centering);
    /// without both, map features are silently skipped.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude reported by the position provider.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Snapshot file holding the persisted workouts.
    ///
    /// Default: $XDG_DATA_HOME/kartenn/workouts.json
    #[arg(long, value_name = "FILE", global = true)]
    pub data: Option<PathBuf>,

    /// Also print id, coordinates and creation time for each workout.
    #[arg(long)]
    pub details: bool,

    /// Print at most this many workouts.
    #[arg(long, default_value_t = DEFAULT_LIST_COUNT)]
    pub count: usize,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Record a workout at the position given by --lat/--lng.
    ///
    /// Numeric operands stay raw strings here; validation belongs to the form
    /// layer and the model.
    Add {
        /// Workout type: "running" or "cycling".
        #[arg(value_name = "TYPE")]
        kind: String,

        #[arg(value_name = "DISTANCE_KM")]
        distance: String,

        #[arg(value_name = "DURATION_MIN")]
        duration: String,

        /// Cadence in steps/min (running) or elevation gain in m (cycling).
        #[arg(value_name = "EXTRA", allow_hyphen_values = true)]
        extra: String,
    },

    /// Select one workout: re-center the map on it and print its details.
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Delete every workout and the snapshot file.
    Reset,
}
