//! Domain types of the workout planner: what a user asks for
//! ([`request`]), the prompt sent on their behalf ([`fragments`]) and what
//! comes back ([`outputs`]).
pub mod fragments;
pub mod outputs;
pub mod request;

pub use fragments::WorkoutPlanPrompt;
pub use outputs::{GenerationStatus, WorkoutResult};
pub use request::{Equipment, FitnessLevel, Goal, WorkoutRequest};
