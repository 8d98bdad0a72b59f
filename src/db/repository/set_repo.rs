//! Repository for set rows, the leaf level of the plan tree

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::models::{CreateSetRequest, Set};
use crate::error::Result;

pub fn insert_set(conn: &Connection, request: &CreateSetRequest) -> Result<i64> {
    conn.execute(
        "INSERT INTO sets (exercise_id, weight, reps, raw_input) VALUES (?1, ?2, ?3, ?4)",
        params![
            request.exercise_id,
            request.fields.weight,
            request.fields.reps,
            request.fields.raw_input,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_set_by_id(conn: &Connection, id: i64) -> Result<Option<Set>> {
    conn.query_row(
        "SELECT id, exercise_id, weight, reps, raw_input FROM sets WHERE id = ?1",
        [id],
        |row| {
            Ok(Set {
                id: row.get(0)?,
                exercise_id: row.get(1)?,
                weight: row.get(2)?,
                reps: row.get(3)?,
                raw_input: row.get(4)?,
            })
        },
    )
    .optional()
    .map_err(Into::into)
}

pub fn get_sets_by_exercise_id(conn: &Connection, exercise_id: i64) -> Result<Vec<Set>> {
    let mut stmt = conn.prepare(
        "SELECT id, exercise_id, weight, reps, raw_input
         FROM sets WHERE exercise_id = ?1 ORDER BY id ASC",
    )?;

    let sets = stmt
        .query_map([exercise_id], |row| {
            Ok(Set {
                id: row.get(0)?,
                exercise_id: row.get(1)?,
                weight: row.get(2)?,
                reps: row.get(3)?,
                raw_input: row.get(4)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(sets)
}

/// Overwrites the mutable fields by id. Zero rows affected is not an error.
pub fn update_set(conn: &Connection, set: &Set) -> Result<()> {
    conn.execute(
        "UPDATE sets SET weight = ?1, reps = ?2, raw_input = ?3 WHERE id = ?4",
        params![set.weight, set.reps, set.raw_input, set.id],
    )?;
    Ok(())
}

pub fn delete_set(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM sets WHERE id = ?1", [id])?;
    Ok(())
}
