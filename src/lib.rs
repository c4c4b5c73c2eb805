//! Fitness Tracker - workout summary engine
//!
//! Turns raw tracker packages into workout reports through a deterministic
//! pipeline: package dispatch → variant metrics (distance, mean speed, calories)
//! → report formatting.
//!
//! ## Workouts
//!
//! - **Running** (`RUN`): `[action, duration, weight]`
//! - **SportsWalking** (`WLK`): `[action, duration, weight, height]`
//! - **Swimming** (`SWM`): `[action, duration, weight, length_pool, count_pool]`

pub mod dispatcher;
pub mod encoder;
pub mod error;
pub mod package;
pub mod pipeline;
pub mod training;
pub mod types;
pub mod workouts;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use dispatcher::read_package;
pub use error::TrackerError;
pub use package::{default_packages, Package, PackageReader};
pub use pipeline::{report_message, training_info, BatchPolicy, BatchProcessor, BatchReport};
pub use training::{Training, Workout};
pub use types::{InfoMessage, WorkoutKind};
pub use workouts::{Running, SportsWalking, Swimming};

/// Tracker version embedded in JSON reports
pub const TRACKER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for JSON reports
pub const PRODUCER_NAME: &str = "fitness-tracker";
