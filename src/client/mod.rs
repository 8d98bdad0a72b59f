//! Typed client stub for the data-access channels
//!
//! The renderer side never touches channel names or raw payloads; it goes
//! through [`DbClient`], whose namespaced proxies build a [`DbRequest`],
//! push it through the [`Invoke`] seam and unwrap the typed response. The
//! seam is the only messaging primitive, and it is not exposed beyond these
//! methods for data operations.

use crate::bridge::{dispatch, DbRequest, DbResponse};
use crate::db::models::{
    CreateExerciseRequest, CreatePlanRequest, CreateSetRequest, CreateWeekRequest,
    CreateWorkoutRequest, Exercise, Plan, Set, Week, Workout,
};
use crate::db::Database;
use crate::error::{Result, TrainPlanError};

/// Carries one request across the process boundary and brings back the
/// response.
pub trait Invoke {
    fn invoke(&self, request: DbRequest) -> Result<DbResponse>;
}

/// In-process bridge used by tests and headless tooling.
///
/// Round-trips both request and response through JSON so anything that
/// would not survive the real boundary's plain-data marshalling fails here
/// too.
pub struct LocalBridge {
    db: Database,
}

impl LocalBridge {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl Invoke for LocalBridge {
    fn invoke(&self, request: DbRequest) -> Result<DbResponse> {
        let raw = serde_json::to_value(&request)
            .map_err(|e| TrainPlanError::transport(e.to_string()))?;
        let request: DbRequest =
            serde_json::from_value(raw).map_err(|e| TrainPlanError::transport(e.to_string()))?;

        let response = dispatch(&self.db, request)?;

        let raw = serde_json::to_value(&response)
            .map_err(|e| TrainPlanError::transport(e.to_string()))?;
        serde_json::from_value(raw).map_err(|e| TrainPlanError::transport(e.to_string()))
    }
}

/// Entry point for the renderer-facing API, namespaced by entity.
pub struct DbClient<I: Invoke> {
    invoker: I,
}

impl<I: Invoke> DbClient<I> {
    pub fn new(invoker: I) -> Self {
        Self { invoker }
    }

    pub fn plans(&self) -> Plans<'_, I> {
        Plans { invoker: &self.invoker }
    }

    pub fn weeks(&self) -> Weeks<'_, I> {
        Weeks { invoker: &self.invoker }
    }

    pub fn workouts(&self) -> Workouts<'_, I> {
        Workouts { invoker: &self.invoker }
    }

    pub fn exercises(&self) -> Exercises<'_, I> {
        Exercises { invoker: &self.invoker }
    }

    pub fn sets(&self) -> Sets<'_, I> {
        Sets { invoker: &self.invoker }
    }
}

pub struct Plans<'a, I: Invoke> {
    invoker: &'a I,
}

impl<I: Invoke> Plans<'_, I> {
    pub fn create(&self, request: CreatePlanRequest) -> Result<i64> {
        self.invoker.invoke(DbRequest::PlanCreate(request))?.into_id()
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Plan>> {
        self.invoker.invoke(DbRequest::PlanGetById { id })?.into_plan()
    }

    pub fn get_all(&self) -> Result<Vec<Plan>> {
        self.invoker.invoke(DbRequest::PlanGetAll)?.into_plans()
    }

    pub fn update(&self, plan: Plan) -> Result<()> {
        self.invoker.invoke(DbRequest::PlanUpdate(plan))?.into_unit()
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.invoker.invoke(DbRequest::PlanDelete { id })?.into_unit()
    }
}

pub struct Weeks<'a, I: Invoke> {
    invoker: &'a I,
}

impl<I: Invoke> Weeks<'_, I> {
    pub fn create(&self, request: CreateWeekRequest) -> Result<i64> {
        self.invoker.invoke(DbRequest::WeekCreate(request))?.into_id()
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Week>> {
        self.invoker.invoke(DbRequest::WeekGetById { id })?.into_week()
    }

    pub fn get_by_plan_id(&self, plan_id: i64) -> Result<Vec<Week>> {
        self.invoker
            .invoke(DbRequest::WeekGetByPlanId { plan_id })?
            .into_weeks()
    }

    pub fn update(&self, week: Week) -> Result<()> {
        self.invoker.invoke(DbRequest::WeekUpdate(week))?.into_unit()
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.invoker.invoke(DbRequest::WeekDelete { id })?.into_unit()
    }
}

pub struct Workouts<'a, I: Invoke> {
    invoker: &'a I,
}

impl<I: Invoke> Workouts<'_, I> {
    pub fn create(&self, request: CreateWorkoutRequest) -> Result<i64> {
        self.invoker.invoke(DbRequest::WorkoutCreate(request))?.into_id()
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Workout>> {
        self.invoker
            .invoke(DbRequest::WorkoutGetById { id })?
            .into_workout()
    }

    pub fn get_by_week_id(&self, week_id: i64) -> Result<Vec<Workout>> {
        self.invoker
            .invoke(DbRequest::WorkoutGetByWeekId { week_id })?
            .into_workouts()
    }

    pub fn update(&self, workout: Workout) -> Result<()> {
        self.invoker
            .invoke(DbRequest::WorkoutUpdate(workout))?
            .into_unit()
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.invoker.invoke(DbRequest::WorkoutDelete { id })?.into_unit()
    }
}

pub struct Exercises<'a, I: Invoke> {
    invoker: &'a I,
}

impl<I: Invoke> Exercises<'_, I> {
    pub fn create(&self, request: CreateExerciseRequest) -> Result<i64> {
        self.invoker
            .invoke(DbRequest::ExerciseCreate(request))?
            .into_id()
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Exercise>> {
        self.invoker
            .invoke(DbRequest::ExerciseGetById { id })?
            .into_exercise()
    }

    pub fn get_by_workout_id(&self, workout_id: i64) -> Result<Vec<Exercise>> {
        self.invoker
            .invoke(DbRequest::ExerciseGetByWorkoutId { workout_id })?
            .into_exercises()
    }

    pub fn update(&self, exercise: Exercise) -> Result<()> {
        self.invoker
            .invoke(DbRequest::ExerciseUpdate(exercise))?
            .into_unit()
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.invoker
            .invoke(DbRequest::ExerciseDelete { id })?
            .into_unit()
    }
}

pub struct Sets<'a, I: Invoke> {
    invoker: &'a I,
}

impl<I: Invoke> Sets<'_, I> {
    pub fn create(&self, request: CreateSetRequest) -> Result<i64> {
        self.invoker.invoke(DbRequest::SetCreate(request))?.into_id()
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Set>> {
        self.invoker.invoke(DbRequest::SetGetById { id })?.into_set()
    }

    pub fn get_by_exercise_id(&self, exercise_id: i64) -> Result<Vec<Set>> {
        self.invoker
            .invoke(DbRequest::SetGetByExerciseId { exercise_id })?
            .into_sets()
    }

    pub fn update(&self, set: Set) -> Result<()> {
        self.invoker.invoke(DbRequest::SetUpdate(set))?.into_unit()
    }

    pub fn delete(&self, id: i64) -> Result<()> {
        self.invoker.invoke(DbRequest::SetDelete { id })?.into_unit()
    }
}
