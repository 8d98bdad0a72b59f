//! Repository for exercise rows

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::models::{CreateExerciseRequest, Exercise};
use crate::db::repository::set_repo;
use crate::error::Result;

pub fn insert_exercise(conn: &Connection, request: &CreateExerciseRequest) -> Result<i64> {
    conn.execute(
        "INSERT INTO exercises (workout_id, name, comment) VALUES (?1, ?2, ?3)",
        params![request.workout_id, request.fields.name, request.fields.comment],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_exercise_by_id(conn: &Connection, id: i64) -> Result<Option<Exercise>> {
    let row = conn
        .query_row(
            "SELECT id, workout_id, name, comment FROM exercises WHERE id = ?1",
            [id],
            |row| {
                Ok(Exercise {
                    id: row.get(0)?,
                    workout_id: row.get(1)?,
                    name: row.get(2)?,
                    comment: row.get(3)?,
                    sets: Vec::new(),
                })
            },
        )
        .optional()?;

    match row {
        Some(mut exercise) => {
            exercise.sets = set_repo::get_sets_by_exercise_id(conn, exercise.id)?;
            Ok(Some(exercise))
        }
        None => Ok(None),
    }
}

pub fn get_exercises_by_workout_id(conn: &Connection, workout_id: i64) -> Result<Vec<Exercise>> {
    let mut stmt = conn.prepare(
        "SELECT id, workout_id, name, comment
         FROM exercises WHERE workout_id = ?1 ORDER BY id ASC",
    )?;

    let mut exercises = stmt
        .query_map([workout_id], |row| {
            Ok(Exercise {
                id: row.get(0)?,
                workout_id: row.get(1)?,
                name: row.get(2)?,
                comment: row.get(3)?,
                sets: Vec::new(),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for exercise in &mut exercises {
        exercise.sets = set_repo::get_sets_by_exercise_id(conn, exercise.id)?;
    }

    Ok(exercises)
}

/// Overwrites name and comment by id. Zero rows affected is not an error.
pub fn update_exercise(conn: &Connection, exercise: &Exercise) -> Result<()> {
    conn.execute(
        "UPDATE exercises SET name = ?1, comment = ?2 WHERE id = ?3",
        params![exercise.name, exercise.comment, exercise.id],
    )?;
    Ok(())
}

/// Deletes the exercise; its sets go with it via cascade.
pub fn delete_exercise(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM exercises WHERE id = ?1", [id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{CreateSetRequest, ExerciseFields, SetFields};
    use crate::db::repository::test_support::{seed_workout, setup_test_conn};

    fn exercise_request(workout_id: i64, name: &str, comment: Option<&str>) -> CreateExerciseRequest {
        CreateExerciseRequest {
            workout_id,
            fields: ExerciseFields {
                name: name.into(),
                comment: comment.map(Into::into),
            },
        }
    }

    #[test]
    fn test_round_trip_with_sets() {
        let conn = setup_test_conn();
        let workout_id = seed_workout(&conn);

        let id = insert_exercise(&conn, &exercise_request(workout_id, "Bench Press", Some("form")))
            .unwrap();
        set_repo::insert_set(
            &conn,
            &CreateSetRequest {
                exercise_id: id,
                fields: SetFields {
                    weight: 60.0,
                    reps: 8,
                    raw_input: Some("8x60".into()),
                },
            },
        )
        .unwrap();

        let exercise = find_exercise_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(exercise.name, "Bench Press");
        assert_eq!(exercise.comment.as_deref(), Some("form"));
        assert_eq!(exercise.sets.len(), 1);
        assert_eq!(exercise.sets[0].raw_input.as_deref(), Some("8x60"));
    }

    #[test]
    fn test_insert_rejects_missing_parent() {
        let conn = setup_test_conn();
        let err = insert_exercise(&conn, &exercise_request(999, "Squat", None)).unwrap_err();
        assert!(err.is_constraint());
    }

    #[test]
    fn test_delete_cascades_to_sets() {
        let conn = setup_test_conn();
        let workout_id = seed_workout(&conn);
        let id = insert_exercise(&conn, &exercise_request(workout_id, "Row", None)).unwrap();
        let set_id = set_repo::insert_set(
            &conn,
            &CreateSetRequest {
                exercise_id: id,
                fields: SetFields {
                    weight: 40.0,
                    reps: 12,
                    raw_input: None,
                },
            },
        )
        .unwrap();

        delete_exercise(&conn, id).unwrap();

        assert!(find_exercise_by_id(&conn, id).unwrap().is_none());
        assert!(set_repo::find_set_by_id(&conn, set_id).unwrap().is_none());
        let remaining = get_exercises_by_workout_id(&conn, workout_id).unwrap();
        assert!(remaining.is_empty());
    }

    #[test]
    fn test_double_update_is_idempotent() {
        let conn = setup_test_conn();
        let workout_id = seed_workout(&conn);
        let id = insert_exercise(&conn, &exercise_request(workout_id, "Deadlift", None)).unwrap();

        let mut exercise = find_exercise_by_id(&conn, id).unwrap().unwrap();
        exercise.comment = Some("belt on".into());
        update_exercise(&conn, &exercise).unwrap();
        update_exercise(&conn, &exercise).unwrap();

        let stored = find_exercise_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(stored.comment.as_deref(), Some("belt on"));
    }
}
