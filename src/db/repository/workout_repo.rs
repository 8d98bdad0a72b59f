//! Repository for workout rows

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::models::{CreateWorkoutRequest, Workout};
use crate::db::repository::exercise_repo;
use crate::error::Result;

pub fn insert_workout(conn: &Connection, request: &CreateWorkoutRequest) -> Result<i64> {
    conn.execute(
        "INSERT INTO workouts (week_id) VALUES (?1)",
        [request.week_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_workout_by_id(conn: &Connection, id: i64) -> Result<Option<Workout>> {
    let row = conn
        .query_row(
            "SELECT id, week_id FROM workouts WHERE id = ?1",
            [id],
            |row| {
                Ok(Workout {
                    id: row.get(0)?,
                    week_id: row.get(1)?,
                    exercises: Vec::new(),
                })
            },
        )
        .optional()?;

    match row {
        Some(mut workout) => {
            workout.exercises = exercise_repo::get_exercises_by_workout_id(conn, workout.id)?;
            Ok(Some(workout))
        }
        None => Ok(None),
    }
}

pub fn get_workouts_by_week_id(conn: &Connection, week_id: i64) -> Result<Vec<Workout>> {
    let mut stmt =
        conn.prepare("SELECT id, week_id FROM workouts WHERE week_id = ?1 ORDER BY id ASC")?;

    let mut workouts = stmt
        .query_map([week_id], |row| {
            Ok(Workout {
                id: row.get(0)?,
                week_id: row.get(1)?,
                exercises: Vec::new(),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for workout in &mut workouts {
        workout.exercises = exercise_repo::get_exercises_by_workout_id(conn, workout.id)?;
    }

    Ok(workouts)
}

/// Moves the workout to another week if week_id changed. Zero rows affected
/// is not an error.
pub fn update_workout(conn: &Connection, workout: &Workout) -> Result<()> {
    conn.execute(
        "UPDATE workouts SET week_id = ?1 WHERE id = ?2",
        params![workout.week_id, workout.id],
    )?;
    Ok(())
}

pub fn delete_workout(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM workouts WHERE id = ?1", [id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{seed_week, setup_test_conn};

    #[test]
    fn test_round_trip() {
        let conn = setup_test_conn();
        let week_id = seed_week(&conn);

        let id = insert_workout(&conn, &CreateWorkoutRequest { week_id }).unwrap();

        let workout = find_workout_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(workout.week_id, week_id);
        assert!(workout.exercises.is_empty());

        let by_week = get_workouts_by_week_id(&conn, week_id).unwrap();
        assert_eq!(by_week.len(), 1);
        assert_eq!(by_week[0].id, id);
    }

    #[test]
    fn test_insert_rejects_missing_parent() {
        let conn = setup_test_conn();
        let err = insert_workout(&conn, &CreateWorkoutRequest { week_id: 999 }).unwrap_err();
        assert!(err.is_constraint());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let conn = setup_test_conn();
        assert!(find_workout_by_id(&conn, 123).unwrap().is_none());
    }
}
