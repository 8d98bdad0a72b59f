//! Entity and DTO types for the training-plan store
//!
//! Every wire-visible type serializes as camelCase so the webview sees the
//! same field names the frontend types declare.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainPlanError};

/// A single set within an exercise. `raw_input` keeps whatever shorthand the
/// coach typed (e.g. "8x60"); `weight`/`reps` are the numeric source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Set {
    pub id: i64,
    pub exercise_id: i64,
    pub weight: f64,
    pub reps: i64,
    pub raw_input: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: i64,
    pub workout_id: i64,
    pub name: String,
    pub comment: Option<String>,
    pub sets: Vec<Set>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: i64,
    pub week_id: i64,
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    pub id: i64,
    pub plan_id: i64,
    pub week_number: i64,
    pub workouts: Vec<Workout>,
}

/// Top-level training program for one client. Read operations always return
/// the complete nested tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub client_name: String,
    pub duration_weeks: i64,
    pub workouts_per_week: i64,
    pub created_at: DateTime<Utc>,
    pub weeks: Vec<Week>,
}

// Request DTOs

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlanRequest {
    pub name: String,
    pub client_name: String,
    pub duration_weeks: i64,
    pub workouts_per_week: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWeekRequest {
    pub plan_id: i64,
    pub week_number: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    pub week_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseFields {
    pub name: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExerciseRequest {
    pub workout_id: i64,
    pub fields: ExerciseFields,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFields {
    pub weight: f64,
    pub reps: i64,
    pub raw_input: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSetRequest {
    pub exercise_id: i64,
    pub fields: SetFields,
}

// Typed patches
//
// The frontend edits entities field by field; these replace ad-hoc partial
// objects with named optional fields that are validated before an update is
// issued.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPatch {
    pub name: Option<String>,
    pub client_name: Option<String>,
    pub duration_weeks: Option<i64>,
    pub workouts_per_week: Option<i64>,
}

impl PlanPatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(TrainPlanError::validation("plan name cannot be empty"));
            }
        }
        if let Some(client_name) = &self.client_name {
            if client_name.trim().is_empty() {
                return Err(TrainPlanError::validation("client name cannot be empty"));
            }
        }
        if matches!(self.duration_weeks, Some(w) if w < 1) {
            return Err(TrainPlanError::validation(
                "duration must be at least one week",
            ));
        }
        if matches!(self.workouts_per_week, Some(w) if w < 1) {
            return Err(TrainPlanError::validation(
                "workouts per week must be at least one",
            ));
        }
        Ok(())
    }

    pub fn apply(self, plan: &mut Plan) {
        if let Some(name) = self.name {
            plan.name = name;
        }
        if let Some(client_name) = self.client_name {
            plan.client_name = client_name;
        }
        if let Some(duration_weeks) = self.duration_weeks {
            plan.duration_weeks = duration_weeks;
        }
        if let Some(workouts_per_week) = self.workouts_per_week {
            plan.workouts_per_week = workouts_per_week;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPatch {
    pub week_number: Option<i64>,
}

impl WeekPatch {
    pub fn validate(&self) -> Result<()> {
        if matches!(self.week_number, Some(n) if n < 1) {
            return Err(TrainPlanError::validation("week number must be positive"));
        }
        Ok(())
    }

    pub fn apply(self, week: &mut Week) {
        if let Some(week_number) = self.week_number {
            week.week_number = week_number;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPatch {
    pub week_id: Option<i64>,
}

impl WorkoutPatch {
    pub fn validate(&self) -> Result<()> {
        Ok(())
    }

    pub fn apply(self, workout: &mut Workout) {
        if let Some(week_id) = self.week_id {
            workout.week_id = week_id;
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisePatch {
    pub name: Option<String>,
    pub comment: Option<String>,
}

impl ExercisePatch {
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(TrainPlanError::validation("exercise name cannot be empty"));
            }
        }
        Ok(())
    }

    pub fn apply(self, exercise: &mut Exercise) {
        if let Some(name) = self.name {
            exercise.name = name;
        }
        if let Some(comment) = self.comment {
            exercise.comment = Some(comment);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPatch {
    pub weight: Option<f64>,
    pub reps: Option<i64>,
    pub raw_input: Option<String>,
}

impl SetPatch {
    pub fn validate(&self) -> Result<()> {
        if matches!(self.weight, Some(w) if w < 0.0) {
            return Err(TrainPlanError::validation("weight cannot be negative"));
        }
        if matches!(self.reps, Some(r) if r < 0) {
            return Err(TrainPlanError::validation("reps cannot be negative"));
        }
        Ok(())
    }

    pub fn apply(self, set: &mut Set) {
        if let Some(weight) = self.weight {
            set.weight = weight;
        }
        if let Some(reps) = self.reps {
            set.reps = reps;
        }
        if let Some(raw_input) = self.raw_input {
            set.raw_input = Some(raw_input);
        }
    }
}
