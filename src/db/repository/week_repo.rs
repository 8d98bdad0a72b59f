//! Repository for week rows

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::models::{CreateWeekRequest, Week};
use crate::db::repository::workout_repo;
use crate::error::Result;

pub fn insert_week(conn: &Connection, request: &CreateWeekRequest) -> Result<i64> {
    conn.execute(
        "INSERT INTO weeks (plan_id, week_number) VALUES (?1, ?2)",
        params![request.plan_id, request.week_number],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_week_by_id(conn: &Connection, id: i64) -> Result<Option<Week>> {
    let row = conn
        .query_row(
            "SELECT id, plan_id, week_number FROM weeks WHERE id = ?1",
            [id],
            |row| {
                Ok(Week {
                    id: row.get(0)?,
                    plan_id: row.get(1)?,
                    week_number: row.get(2)?,
                    workouts: Vec::new(),
                })
            },
        )
        .optional()?;

    match row {
        Some(mut week) => {
            week.workouts = workout_repo::get_workouts_by_week_id(conn, week.id)?;
            Ok(Some(week))
        }
        None => Ok(None),
    }
}

/// Weeks come back sorted by week number, not insertion order; the rest of
/// the tree hangs off each one.
pub fn get_weeks_by_plan_id(conn: &Connection, plan_id: i64) -> Result<Vec<Week>> {
    let mut stmt = conn.prepare(
        "SELECT id, plan_id, week_number
         FROM weeks WHERE plan_id = ?1 ORDER BY week_number ASC",
    )?;

    let mut weeks = stmt
        .query_map([plan_id], |row| {
            Ok(Week {
                id: row.get(0)?,
                plan_id: row.get(1)?,
                week_number: row.get(2)?,
                workouts: Vec::new(),
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for week in &mut weeks {
        week.workouts = workout_repo::get_workouts_by_week_id(conn, week.id)?;
    }

    Ok(weeks)
}

/// Overwrites the week number by id. Zero rows affected is not an error.
pub fn update_week(conn: &Connection, week: &Week) -> Result<()> {
    conn.execute(
        "UPDATE weeks SET week_number = ?1 WHERE id = ?2",
        params![week.week_number, week.id],
    )?;
    Ok(())
}

pub fn delete_week(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM weeks WHERE id = ?1", [id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::{seed_plan, setup_test_conn};

    #[test]
    fn test_round_trip() {
        let conn = setup_test_conn();
        let plan_id = seed_plan(&conn);

        let id = insert_week(
            &conn,
            &CreateWeekRequest {
                plan_id,
                week_number: 1,
            },
        )
        .unwrap();

        let week = find_week_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(week.plan_id, plan_id);
        assert_eq!(week.week_number, 1);
    }

    #[test]
    fn test_weeks_ordered_by_week_number_not_insertion() {
        let conn = setup_test_conn();
        let plan_id = seed_plan(&conn);

        for week_number in [3, 1, 2] {
            insert_week(
                &conn,
                &CreateWeekRequest {
                    plan_id,
                    week_number,
                },
            )
            .unwrap();
        }

        let weeks = get_weeks_by_plan_id(&conn, plan_id).unwrap();
        let numbers: Vec<i64> = weeks.iter().map(|w| w.week_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_rejects_missing_parent() {
        let conn = setup_test_conn();
        let err = insert_week(
            &conn,
            &CreateWeekRequest {
                plan_id: 999,
                week_number: 1,
            },
        )
        .unwrap_err();
        assert!(err.is_constraint());
    }
}
