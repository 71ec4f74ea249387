// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model for storage and API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Label returned for keys that do not name a known category or intensity.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Workout category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Category {
    Cardio,
    Strength,
    Flexibility,
    Endurance,
    Other,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Cardio,
        Category::Strength,
        Category::Flexibility,
        Category::Endurance,
        Category::Other,
    ];

    /// Stable machine key, as stored in the `type` field.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Cardio => "cardio",
            Category::Strength => "strength",
            Category::Flexibility => "flexibility",
            Category::Endurance => "endurance",
            Category::Other => "other",
        }
    }

    /// Human display label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Cardio => "Cardio",
            Category::Strength => "Strength",
            Category::Flexibility => "Flexibility",
            Category::Endurance => "Endurance",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("Unknown workout type: {}", s))
    }
}

/// Perceived workout intensity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];

    pub fn key(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Low => "Low",
            Intensity::Medium => "Medium",
            Intensity::High => "High",
        }
    }
}

impl FromStr for Intensity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::ALL
            .into_iter()
            .find(|i| i.key() == s)
            .ok_or_else(|| format!("Unknown intensity: {}", s))
    }
}

/// Stored workout record.
///
/// Field names on the wire match the persisted slot layout:
/// `{ id, type, typeName, date, duration, calories, intensity, notes }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutRecord {
    /// Store-assigned unique identifier
    pub id: String,
    /// Workout category
    #[serde(rename = "type")]
    pub category: Category,
    /// Display label of `category`, denormalized at creation time
    #[serde(rename = "typeName")]
    pub type_name: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Duration in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Calories burned
    #[serde(rename = "calories")]
    pub calories_burned: u32,
    #[serde(default)]
    pub intensity: Intensity,
    #[serde(default)]
    pub notes: String,
}

/// A complete workout as submitted by the user, before an id is assigned.
///
/// The validation rules live here; the store accepts any `NewWorkout` as-is.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct NewWorkout {
    #[serde(rename = "type")]
    pub category: Category,
    pub date: NaiveDate,
    #[serde(rename = "duration")]
    #[validate(range(
        min = 1,
        max = 300,
        message = "Duration must be between 1 and 300 minutes"
    ))]
    pub duration_minutes: u32,
    #[serde(rename = "calories")]
    #[validate(range(
        min = 1,
        max = 2000,
        message = "Calories must be between 1 and 2000"
    ))]
    pub calories_burned: u32,
    #[serde(default)]
    pub intensity: Intensity,
    #[serde(default)]
    pub notes: String,
}

impl NewWorkout {
    /// Attach an id, producing the record as it will be stored.
    pub fn into_record(self, id: String) -> WorkoutRecord {
        WorkoutRecord {
            id,
            category: self.category,
            type_name: self.category.label().to_string(),
            date: self.date,
            duration_minutes: self.duration_minutes,
            calories_burned: self.calories_burned,
            intensity: self.intensity,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_new_workout(duration: u32, calories: u32) -> NewWorkout {
        NewWorkout {
            category: Category::Cardio,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            duration_minutes: duration,
            calories_burned: calories,
            intensity: Intensity::High,
            notes: "morning run".to_string(),
        }
    }

    #[test]
    fn test_category_key_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.key().parse::<Category>().unwrap(), category);
        }
        assert!("yoga".parse::<Category>().is_err());
    }

    #[test]
    fn test_record_wire_format() {
        let record = make_new_workout(30, 300).into_record("abc".to_string());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], "abc");
        assert_eq!(json["type"], "cardio");
        assert_eq!(json["typeName"], "Cardio");
        assert_eq!(json["date"], "2024-01-15");
        assert_eq!(json["duration"], 30);
        assert_eq!(json["calories"], 300);
        assert_eq!(json["intensity"], "high");
        assert_eq!(json["notes"], "morning run");
    }

    #[test]
    fn test_new_workout_defaults() {
        let workout: NewWorkout = serde_json::from_str(
            r#"{"type":"strength","date":"2024-02-01","duration":45,"calories":250}"#,
        )
        .unwrap();

        assert_eq!(workout.intensity, Intensity::Medium);
        assert_eq!(workout.notes, "");
    }

    #[test]
    fn test_unknown_category_rejected_at_parse() {
        let result: Result<NewWorkout, _> = serde_json::from_str(
            r#"{"type":"yoga","date":"2024-02-01","duration":45,"calories":250}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_bounds() {
        assert!(make_new_workout(1, 1).validate().is_ok());
        assert!(make_new_workout(300, 2000).validate().is_ok());
        assert!(make_new_workout(0, 100).validate().is_err());
        assert!(make_new_workout(301, 100).validate().is_err());
        assert!(make_new_workout(30, 0).validate().is_err());
        assert!(make_new_workout(30, 2001).validate().is_err());
    }
}
