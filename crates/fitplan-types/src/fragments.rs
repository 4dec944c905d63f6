mod workout_plan;

pub use workout_plan::{WORKOUT_PLAN_TEMPLATE, WorkoutPlanPrompt};
