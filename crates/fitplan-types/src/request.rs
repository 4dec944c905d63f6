//! The four parameters of a workout request.
//!
//! Each selector type knows a fixed set of labels (the ones the form offers)
//! but also keeps any other text verbatim, because the script surface passes
//! literals straight through, e.g. `"Weight gain"`:
//!
//! ```rust
//! use fitplan_types::request::Goal;
//!
//! assert_eq!(Goal::from("Muscle Gain"), Goal::MuscleGain);
//! assert_eq!(Goal::from("Weight gain").to_string(), "Weight gain");
//! assert!(!Goal::from("Weight gain").is_known());
//! ```

use std::{convert::Infallible, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! labelled_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// Text outside the known set, kept verbatim.
            Custom(String),
        }

        impl $name {
            /// Labels of the known variants, in form order.
            pub const LABELS: &'static [&'static str] = &[$($label),+];

            pub fn known() -> Vec<Self> {
                vec![$($name::$variant),+]
            }

            pub fn label(&self) -> &str {
                match self {
                    $($name::$variant => $label,)+
                    $name::Custom(text) => text,
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Custom(_))
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($label => $name::$variant,)+
                    other => $name::Custom(other.to_owned()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.label().to_owned()
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum!(
    /// Skill tier of the person training.
    FitnessLevel {
        Beginner => "Beginner",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
);

labelled_enum!(
    /// Training objective.
    Goal {
        WeightLoss => "Weight Loss",
        MuscleGain => "Muscle Gain",
        Endurance => "Endurance",
        GeneralFitness => "General Fitness",
    }
);

labelled_enum!(
    /// Equipment category available for the session.
    Equipment {
        Bodyweight => "Bodyweight",
        Dumbbells => "Dumbbells",
        GymEquipment => "Gym Equipment",
        ResistanceBands => "Resistance Bands",
    }
);

/// Bounds the interactive form puts on the session duration.
pub const DURATION_MIN: u32 = 30;
pub const DURATION_MAX: u32 = 120;
pub const DURATION_STEP: u32 = 5;
pub const DURATION_DEFAULT: u32 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("unknown {field} `{value}`")]
    UnknownLabel { field: &'static str, value: String },

    #[error("duration must be between 30 and 120 minutes in steps of 5, got {0}")]
    DurationOutOfRange(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRequest {
    pub fitness_level: FitnessLevel,
    pub goal: Goal,
    /// Session length in minutes.
    pub duration: u32,
    pub equipment: Equipment,
}

impl WorkoutRequest {
    pub fn new(
        fitness_level: impl Into<FitnessLevel>,
        goal: impl Into<Goal>,
        duration: u32,
        equipment: impl Into<Equipment>,
    ) -> Self {
        Self {
            fitness_level: fitness_level.into(),
            goal: goal.into(),
            duration,
            equipment: equipment.into(),
        }
    }

    /// Enforce what the interactive form offers: known labels only and a
    /// duration on the 30..=120 / 5 grid. The prompt layer never calls this.
    pub fn check_form_bounds(&self) -> Result<(), RequestError> {
        if !self.fitness_level.is_known() {
            return Err(RequestError::UnknownLabel {
                field: "fitness level",
                value: self.fitness_level.to_string(),
            });
        }
        if !self.goal.is_known() {
            return Err(RequestError::UnknownLabel {
                field: "goal",
                value: self.goal.to_string(),
            });
        }
        if !self.equipment.is_known() {
            return Err(RequestError::UnknownLabel {
                field: "equipment",
                value: self.equipment.to_string(),
            });
        }
        if !(DURATION_MIN..=DURATION_MAX).contains(&self.duration)
            || (self.duration - DURATION_MIN) % DURATION_STEP != 0
        {
            return Err(RequestError::DurationOutOfRange(self.duration));
        }
        Ok(())
    }

    /// The labelled metadata lines shown next to a plan.
    pub fn metadata_lines(&self) -> [(&'static str, String); 4] {
        [
            ("Fitness Level", self.fitness_level.to_string()),
            ("Goal", self.goal.to_string()),
            ("Duration", format!("{} minutes", self.duration)),
            ("Equipment", self.equipment.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_round_trip_through_display() {
        for level in FitnessLevel::known() {
            assert_eq!(FitnessLevel::from(level.label()), level);
        }
        for goal in Goal::known() {
            assert_eq!(Goal::from(goal.to_string()), goal);
        }
        assert_eq!(Equipment::LABELS.len(), Equipment::known().len());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            FitnessLevel::from("beginner"),
            FitnessLevel::Custom("beginner".into())
        );
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&Equipment::GymEquipment).unwrap();
        assert_eq!(json, "\"Gym Equipment\"");

        let parsed: Equipment = serde_json::from_str("\"Kettlebell\"").unwrap();
        assert_eq!(parsed, Equipment::Custom("Kettlebell".into()));
    }

    #[test]
    fn form_bounds() {
        let ok = WorkoutRequest::new("Advanced", "Endurance", 45, "Dumbbells");
        assert_eq!(ok.check_form_bounds(), Ok(()));

        let script = WorkoutRequest::new("Beginner", "Weight gain", 23, "Bodyweight");
        assert!(matches!(
            script.check_form_bounds(),
            Err(RequestError::UnknownLabel { field: "goal", .. })
        ));

        for duration in [0, 25, 33, 125] {
            let req = WorkoutRequest::new("Beginner", "Endurance", duration, "Bodyweight");
            assert_eq!(
                req.check_form_bounds(),
                Err(RequestError::DurationOutOfRange(duration))
            );
        }
        for duration in [30, 120] {
            let req = WorkoutRequest::new("Beginner", "Endurance", duration, "Bodyweight");
            assert!(req.check_form_bounds().is_ok());
        }
    }

    #[test]
    fn metadata_lines_are_labelled() {
        let req = WorkoutRequest::new("Intermediate", "Muscle Gain", 60, "Resistance Bands");
        assert_eq!(
            req.metadata_lines(),
            [
                ("Fitness Level", "Intermediate".to_string()),
                ("Goal", "Muscle Gain".to_string()),
                ("Duration", "60 minutes".to_string()),
                ("Equipment", "Resistance Bands".to_string()),
            ]
        );
    }
}
