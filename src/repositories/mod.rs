pub mod collection;
pub mod exercise_repo;
pub mod profile_repo;
pub mod program_repo;
pub mod seed;
pub mod workout_repo;

pub use exercise_repo::ExerciseRepository;
pub use profile_repo::ProfileRepository;
pub use program_repo::ProgramRepository;
pub use workout_repo::WorkoutRepository;
