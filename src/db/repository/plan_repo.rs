//! Repository for plan rows and full-tree assembly
//!
//! A plan read fans out through the week, workout, exercise and set
//! repositories, one query per level per parent. That is O(depth) round
//! trips per branch, which is fine at a single coach's data scale.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::db::models::{CreatePlanRequest, Plan};
use crate::db::repository::week_repo;
use crate::error::Result;

pub fn insert_plan(conn: &Connection, request: &CreatePlanRequest) -> Result<i64> {
    conn.execute(
        "INSERT INTO plans (name, client_name, duration_weeks, workouts_per_week)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            request.name,
            request.client_name,
            request.duration_weeks,
            request.workouts_per_week,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_plan_by_id(conn: &Connection, id: i64) -> Result<Option<Plan>> {
    let row = conn
        .query_row(
            "SELECT id, name, client_name, duration_weeks, workouts_per_week, created_at
             FROM plans WHERE id = ?1",
            [id],
            map_plan_row,
        )
        .optional()?;

    match row {
        Some(mut plan) => {
            plan.weeks = week_repo::get_weeks_by_plan_id(conn, plan.id)?;
            Ok(Some(plan))
        }
        None => Ok(None),
    }
}

/// All plans, newest first, each with its full subtree attached.
pub fn get_all_plans(conn: &Connection) -> Result<Vec<Plan>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, client_name, duration_weeks, workouts_per_week, created_at
         FROM plans ORDER BY created_at DESC",
    )?;

    let mut plans = stmt
        .query_map([], map_plan_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    for plan in &mut plans {
        plan.weeks = week_repo::get_weeks_by_plan_id(conn, plan.id)?;
    }

    Ok(plans)
}

/// Overwrites the mutable fields by id; created_at and the subtree are left
/// alone. Zero rows affected is not an error.
pub fn update_plan(conn: &Connection, plan: &Plan) -> Result<()> {
    conn.execute(
        "UPDATE plans SET name = ?1, client_name = ?2, duration_weeks = ?3,
         workouts_per_week = ?4 WHERE id = ?5",
        params![
            plan.name,
            plan.client_name,
            plan.duration_weeks,
            plan.workouts_per_week,
            plan.id,
        ],
    )?;
    Ok(())
}

/// Deletes the plan; weeks, workouts, exercises and sets all go with it via
/// cascade.
pub fn delete_plan(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM plans WHERE id = ?1", [id])?;
    Ok(())
}

fn map_plan_row(row: &rusqlite::Row) -> rusqlite::Result<Plan> {
    Ok(Plan {
        id: row.get(0)?,
        name: row.get(1)?,
        client_name: row.get(2)?,
        duration_weeks: row.get(3)?,
        workouts_per_week: row.get(4)?,
        created_at: parse_timestamp(&row.get::<_, String>(5)?),
        weeks: Vec::new(),
    })
}

/// SQLite's datetime('now') default writes "YYYY-MM-DD HH:MM:SS"; accept
/// RFC 3339 too for rows written by other tools.
fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .or_else(|_| raw.parse::<DateTime<Utc>>())
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::test_support::setup_test_conn;

    fn plan_request(name: &str) -> CreatePlanRequest {
        CreatePlanRequest {
            name: name.into(),
            client_name: "John Doe".into(),
            duration_weeks: 8,
            workouts_per_week: 4,
        }
    }

    #[test]
    fn test_round_trip() {
        let conn = setup_test_conn();
        let id = insert_plan(&conn, &plan_request("Mass Gain")).unwrap();
        assert_eq!(id, 1);

        let plan = find_plan_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(plan.name, "Mass Gain");
        assert_eq!(plan.client_name, "John Doe");
        assert_eq!(plan.duration_weeks, 8);
        assert_eq!(plan.workouts_per_week, 4);
        assert!(plan.weeks.is_empty());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let conn = setup_test_conn();
        assert!(find_plan_by_id(&conn, 7).unwrap().is_none());
    }

    #[test]
    fn test_get_all_plans() {
        let conn = setup_test_conn();
        insert_plan(&conn, &plan_request("Mass Gain")).unwrap();
        insert_plan(&conn, &plan_request("Cut")).unwrap();

        let plans = get_all_plans(&conn).unwrap();
        assert_eq!(plans.len(), 2);
    }

    #[test]
    fn test_double_update_is_idempotent() {
        let conn = setup_test_conn();
        let id = insert_plan(&conn, &plan_request("Mass Gain")).unwrap();

        let mut plan = find_plan_by_id(&conn, id).unwrap().unwrap();
        plan.duration_weeks = 12;
        update_plan(&conn, &plan).unwrap();
        update_plan(&conn, &plan).unwrap();

        let stored = find_plan_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(stored.duration_weeks, 12);
        assert_eq!(stored.created_at, plan.created_at);
    }

    #[test]
    fn test_update_missing_is_silent_noop() {
        let conn = setup_test_conn();
        let ghost = Plan {
            id: 99,
            name: "Ghost".into(),
            client_name: "Nobody".into(),
            duration_weeks: 1,
            workouts_per_week: 1,
            created_at: Utc::now(),
            weeks: Vec::new(),
        };
        update_plan(&conn, &ghost).unwrap();
        assert!(find_plan_by_id(&conn, 99).unwrap().is_none());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let sqlite = parse_timestamp("2026-08-29 10:30:00");
        assert_eq!(sqlite.to_rfc3339(), "2026-08-29T10:30:00+00:00");

        let rfc = parse_timestamp("2026-08-29T10:30:00Z");
        assert_eq!(rfc, sqlite);
    }
}
