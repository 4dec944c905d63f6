mod result;

pub use result::{ERROR_PREFIX, GenerationStatus, WorkoutResult, failure_display};
