pub mod coerce;
pub mod profile;
pub mod program;
pub mod workout;

pub use profile::{Gender, Identity, Profile};
pub use program::{CreateProgram, Program, ProgramExercise};
pub use workout::{Workout, WorkoutExercise, WorkoutSet};

/// Records stored in a collection and upserted by id.
pub trait Identified {
    fn id(&self) -> &str;
}
