//! Typed request/response bridge between the webview and the store
//!
//! Every data operation the frontend can invoke is one variant of
//! [`DbRequest`]; [`dispatch`] matches exhaustively, so adding an operation
//! without wiring it up is a compile error rather than an unknown channel
//! name at runtime. Variants serialize under the original channel names
//! (`db:plans:create`, ...) so the wire vocabulary stays stable.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::models::{
    CreateExerciseRequest, CreatePlanRequest, CreateSetRequest, CreateWeekRequest,
    CreateWorkoutRequest, Exercise, Plan, Set, Week, Workout,
};
use crate::db::repository::{exercise_repo, plan_repo, set_repo, week_repo, workout_repo};
use crate::db::Database;
use crate::error::{Result, TrainPlanError};

/// The closed set of data-access channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "channel", content = "payload")]
pub enum DbRequest {
    // Plans
    #[serde(rename = "db:plans:create")]
    PlanCreate(CreatePlanRequest),
    #[serde(rename = "db:plans:getById")]
    PlanGetById { id: i64 },
    #[serde(rename = "db:plans:getAll")]
    PlanGetAll,
    #[serde(rename = "db:plans:update")]
    PlanUpdate(Plan),
    #[serde(rename = "db:plans:delete")]
    PlanDelete { id: i64 },

    // Weeks
    #[serde(rename = "db:weeks:create")]
    WeekCreate(CreateWeekRequest),
    #[serde(rename = "db:weeks:getById")]
    WeekGetById { id: i64 },
    #[serde(rename = "db:weeks:getByPlanId")]
    WeekGetByPlanId { plan_id: i64 },
    #[serde(rename = "db:weeks:update")]
    WeekUpdate(Week),
    #[serde(rename = "db:weeks:delete")]
    WeekDelete { id: i64 },

    // Workouts
    #[serde(rename = "db:workouts:create")]
    WorkoutCreate(CreateWorkoutRequest),
    #[serde(rename = "db:workouts:getById")]
    WorkoutGetById { id: i64 },
    #[serde(rename = "db:workouts:getByWeekId")]
    WorkoutGetByWeekId { week_id: i64 },
    #[serde(rename = "db:workouts:update")]
    WorkoutUpdate(Workout),
    #[serde(rename = "db:workouts:delete")]
    WorkoutDelete { id: i64 },

    // Exercises
    #[serde(rename = "db:exercises:create")]
    ExerciseCreate(CreateExerciseRequest),
    #[serde(rename = "db:exercises:getById")]
    ExerciseGetById { id: i64 },
    #[serde(rename = "db:exercises:getByWorkoutId")]
    ExerciseGetByWorkoutId { workout_id: i64 },
    #[serde(rename = "db:exercises:update")]
    ExerciseUpdate(Exercise),
    #[serde(rename = "db:exercises:delete")]
    ExerciseDelete { id: i64 },

    // Sets
    #[serde(rename = "db:sets:create")]
    SetCreate(CreateSetRequest),
    #[serde(rename = "db:sets:getById")]
    SetGetById { id: i64 },
    #[serde(rename = "db:sets:getByExerciseId")]
    SetGetByExerciseId { exercise_id: i64 },
    #[serde(rename = "db:sets:update")]
    SetUpdate(Set),
    #[serde(rename = "db:sets:delete")]
    SetDelete { id: i64 },
}

/// Everything a channel can answer with. Absence is an explicit `None`, not
/// an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DbResponse {
    Id(i64),
    Unit,
    Plan(Option<Plan>),
    Plans(Vec<Plan>),
    Week(Option<Week>),
    Weeks(Vec<Week>),
    Workout(Option<Workout>),
    Workouts(Vec<Workout>),
    Exercise(Option<Exercise>),
    Exercises(Vec<Exercise>),
    Set(Option<Set>),
    Sets(Vec<Set>),
}

macro_rules! response_accessor {
    ($name:ident, $variant:ident, $ty:ty) => {
        pub fn $name(self) -> Result<$ty> {
            match self {
                Self::$variant(value) => Ok(value),
                other => Err(TrainPlanError::transport(format!(
                    "unexpected response shape: {other:?}"
                ))),
            }
        }
    };
}

impl DbResponse {
    pub fn into_unit(self) -> Result<()> {
        match self {
            Self::Unit => Ok(()),
            other => Err(TrainPlanError::transport(format!(
                "unexpected response shape: {other:?}"
            ))),
        }
    }

    response_accessor!(into_id, Id, i64);
    response_accessor!(into_plan, Plan, Option<Plan>);
    response_accessor!(into_plans, Plans, Vec<Plan>);
    response_accessor!(into_week, Week, Option<Week>);
    response_accessor!(into_weeks, Weeks, Vec<Week>);
    response_accessor!(into_workout, Workout, Option<Workout>);
    response_accessor!(into_workouts, Workouts, Vec<Workout>);
    response_accessor!(into_exercise, Exercise, Option<Exercise>);
    response_accessor!(into_exercises, Exercises, Vec<Exercise>);
    response_accessor!(into_set, Set, Option<Set>);
    response_accessor!(into_sets, Sets, Vec<Set>);
}

/// Route one request to its repository operation.
///
/// Writes run inside a scoped transaction, reads on a scoped connection.
/// Nothing here does cross-entity orchestration; each arm is exactly one
/// repository call.
#[instrument(skip(db, request), fields(channel = request.channel_name()), level = "debug")]
pub fn dispatch(db: &Database, request: DbRequest) -> Result<DbResponse> {
    match request {
        // Plans
        DbRequest::PlanCreate(req) => db
            .with_transaction(|tx| plan_repo::insert_plan(tx, &req))
            .map(DbResponse::Id),
        DbRequest::PlanGetById { id } => db
            .with_connection(|conn| plan_repo::find_plan_by_id(conn, id))
            .map(DbResponse::Plan),
        DbRequest::PlanGetAll => db
            .with_connection(plan_repo::get_all_plans)
            .map(DbResponse::Plans),
        DbRequest::PlanUpdate(plan) => db
            .with_transaction(|tx| plan_repo::update_plan(tx, &plan))
            .map(|_| DbResponse::Unit),
        DbRequest::PlanDelete { id } => db
            .with_transaction(|tx| plan_repo::delete_plan(tx, id))
            .map(|_| DbResponse::Unit),

        // Weeks
        DbRequest::WeekCreate(req) => db
            .with_transaction(|tx| week_repo::insert_week(tx, &req))
            .map(DbResponse::Id),
        DbRequest::WeekGetById { id } => db
            .with_connection(|conn| week_repo::find_week_by_id(conn, id))
            .map(DbResponse::Week),
        DbRequest::WeekGetByPlanId { plan_id } => db
            .with_connection(|conn| week_repo::get_weeks_by_plan_id(conn, plan_id))
            .map(DbResponse::Weeks),
        DbRequest::WeekUpdate(week) => db
            .with_transaction(|tx| week_repo::update_week(tx, &week))
            .map(|_| DbResponse::Unit),
        DbRequest::WeekDelete { id } => db
            .with_transaction(|tx| week_repo::delete_week(tx, id))
            .map(|_| DbResponse::Unit),

        // Workouts
        DbRequest::WorkoutCreate(req) => db
            .with_transaction(|tx| workout_repo::insert_workout(tx, &req))
            .map(DbResponse::Id),
        DbRequest::WorkoutGetById { id } => db
            .with_connection(|conn| workout_repo::find_workout_by_id(conn, id))
            .map(DbResponse::Workout),
        DbRequest::WorkoutGetByWeekId { week_id } => db
            .with_connection(|conn| workout_repo::get_workouts_by_week_id(conn, week_id))
            .map(DbResponse::Workouts),
        DbRequest::WorkoutUpdate(workout) => db
            .with_transaction(|tx| workout_repo::update_workout(tx, &workout))
            .map(|_| DbResponse::Unit),
        DbRequest::WorkoutDelete { id } => db
            .with_transaction(|tx| workout_repo::delete_workout(tx, id))
            .map(|_| DbResponse::Unit),

        // Exercises
        DbRequest::ExerciseCreate(req) => db
            .with_transaction(|tx| exercise_repo::insert_exercise(tx, &req))
            .map(DbResponse::Id),
        DbRequest::ExerciseGetById { id } => db
            .with_connection(|conn| exercise_repo::find_exercise_by_id(conn, id))
            .map(DbResponse::Exercise),
        DbRequest::ExerciseGetByWorkoutId { workout_id } => db
            .with_connection(|conn| exercise_repo::get_exercises_by_workout_id(conn, workout_id))
            .map(DbResponse::Exercises),
        DbRequest::ExerciseUpdate(exercise) => db
            .with_transaction(|tx| exercise_repo::update_exercise(tx, &exercise))
            .map(|_| DbResponse::Unit),
        DbRequest::ExerciseDelete { id } => db
            .with_transaction(|tx| exercise_repo::delete_exercise(tx, id))
            .map(|_| DbResponse::Unit),

        // Sets
        DbRequest::SetCreate(req) => db
            .with_transaction(|tx| set_repo::insert_set(tx, &req))
            .map(DbResponse::Id),
        DbRequest::SetGetById { id } => db
            .with_connection(|conn| set_repo::find_set_by_id(conn, id))
            .map(DbResponse::Set),
        DbRequest::SetGetByExerciseId { exercise_id } => db
            .with_connection(|conn| set_repo::get_sets_by_exercise_id(conn, exercise_id))
            .map(DbResponse::Sets),
        DbRequest::SetUpdate(set) => db
            .with_transaction(|tx| set_repo::update_set(tx, &set))
            .map(|_| DbResponse::Unit),
        DbRequest::SetDelete { id } => db
            .with_transaction(|tx| set_repo::delete_set(tx, id))
            .map(|_| DbResponse::Unit),
    }
}

impl DbRequest {
    /// Wire name of the channel this request travels on.
    pub fn channel_name(&self) -> &'static str {
        match self {
            Self::PlanCreate(_) => "db:plans:create",
            Self::PlanGetById { .. } => "db:plans:getById",
            Self::PlanGetAll => "db:plans:getAll",
            Self::PlanUpdate(_) => "db:plans:update",
            Self::PlanDelete { .. } => "db:plans:delete",
            Self::WeekCreate(_) => "db:weeks:create",
            Self::WeekGetById { .. } => "db:weeks:getById",
            Self::WeekGetByPlanId { .. } => "db:weeks:getByPlanId",
            Self::WeekUpdate(_) => "db:weeks:update",
            Self::WeekDelete { .. } => "db:weeks:delete",
            Self::WorkoutCreate(_) => "db:workouts:create",
            Self::WorkoutGetById { .. } => "db:workouts:getById",
            Self::WorkoutGetByWeekId { .. } => "db:workouts:getByWeekId",
            Self::WorkoutUpdate(_) => "db:workouts:update",
            Self::WorkoutDelete { .. } => "db:workouts:delete",
            Self::ExerciseCreate(_) => "db:exercises:create",
            Self::ExerciseGetById { .. } => "db:exercises:getById",
            Self::ExerciseGetByWorkoutId { .. } => "db:exercises:getByWorkoutId",
            Self::ExerciseUpdate(_) => "db:exercises:update",
            Self::ExerciseDelete { .. } => "db:exercises:delete",
            Self::SetCreate(_) => "db:sets:create",
            Self::SetGetById { .. } => "db:sets:getById",
            Self::SetGetByExerciseId { .. } => "db:sets:getByExerciseId",
            Self::SetUpdate(_) => "db:sets:update",
            Self::SetDelete { .. } => "db:sets:delete",
        }
    }
}
