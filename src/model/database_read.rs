use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{
    AsyncDatabaseExecutor, ConfigAndPool, CustomDbRow, MiddlewarePoolConnection, RowValues,
};

use crate::model::types::{HoleRow, MatchRecord, MatchStrokeTotals};

fn row_int(row: &CustomDbRow, field_name: &str) -> i64 {
    row.get(field_name)
        .and_then(|v| v.as_int())
        .copied()
        .unwrap_or_default()
}

fn row_text(row: &CustomDbRow, field_name: &str) -> String {
    row.get(field_name)
        .and_then(|v| v.as_text())
        .unwrap_or_default()
        .to_string()
}

/// All committed matches, oldest first. Winner columns come back as the
/// label text they were stored with.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn list_matches(
    config_and_pool: &ConfigAndPool,
) -> Result<Vec<MatchRecord>, SqlMiddlewareDbError> {
    let mut conn = config_and_pool.get_connection().await?;
    let query = match &conn {
        MiddlewarePoolConnection::Postgres { .. } => {
            "SELECT match_id, date, front9_winner, back9_winner, overall_winner, rod_net, jim_net FROM matches ORDER BY date ASC, match_id ASC;"
        }
        MiddlewarePoolConnection::Sqlite { .. } => {
            include_str!("../sql/functions/sqlite/01_sp_get_matches.sql")
        }
    };

    let res = conn.execute_select(query, &[]).await?;

    Ok(res
        .results
        .iter()
        .map(|row| MatchRecord {
            match_id: row_int(row, "match_id"),
            date: row_text(row, "date"),
            front9_winner: row_text(row, "front9_winner"),
            back9_winner: row_text(row, "back9_winner"),
            overall_winner: row_text(row, "overall_winner"),
            rod_net: row_int(row, "rod_net"),
            jim_net: row_int(row, "jim_net"),
        })
        .collect())
}

/// The 18 stored hole rows for one match, in hole order.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_holes(
    config_and_pool: &ConfigAndPool,
    match_id: i64,
) -> Result<Vec<HoleRow>, SqlMiddlewareDbError> {
    let mut conn = config_and_pool.get_connection().await?;
    let query = match &conn {
        MiddlewarePoolConnection::Postgres { .. } => {
            "SELECT hole_number, score_a, score_b, hole_winner, match_status, cumulative_wins_a, cumulative_wins_b FROM holes WHERE match_id = $1 ORDER BY hole_number ASC;"
        }
        MiddlewarePoolConnection::Sqlite { .. } => {
            include_str!("../sql/functions/sqlite/02_sp_get_holes.sql")
        }
    };

    let res = conn
        .execute_select(query, &[RowValues::Int(match_id)])
        .await?;

    Ok(res
        .results
        .iter()
        .map(|row| HoleRow {
            hole_number: row_int(row, "hole_number"),
            score_a: row_int(row, "score_a"),
            score_b: row_int(row, "score_b"),
            hole_winner: row_text(row, "hole_winner"),
            match_status: row_text(row, "match_status"),
            cumulative_wins_a: row_int(row, "cumulative_wins_a"),
            cumulative_wins_b: row_int(row, "cumulative_wins_b"),
        })
        .collect())
}

/// Per-match stroke sums, aggregated in SQL so the page only averages.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn match_stroke_totals(
    config_and_pool: &ConfigAndPool,
) -> Result<Vec<MatchStrokeTotals>, SqlMiddlewareDbError> {
    let mut conn = config_and_pool.get_connection().await?;
    let query = match &conn {
        MiddlewarePoolConnection::Postgres { .. } => {
            "SELECT h.match_id, m.date, \
             SUM(CASE WHEN h.hole_number <= 9 THEN h.score_a ELSE 0 END) AS front_total_a, \
             SUM(CASE WHEN h.hole_number > 9 THEN h.score_a ELSE 0 END) AS back_total_a, \
             SUM(h.score_a) AS total_a, \
             SUM(CASE WHEN h.hole_number <= 9 THEN h.score_b ELSE 0 END) AS front_total_b, \
             SUM(CASE WHEN h.hole_number > 9 THEN h.score_b ELSE 0 END) AS back_total_b, \
             SUM(h.score_b) AS total_b \
             FROM holes h JOIN matches m ON m.match_id = h.match_id \
             GROUP BY h.match_id, m.date ORDER BY m.date ASC, h.match_id ASC;"
        }
        MiddlewarePoolConnection::Sqlite { .. } => {
            include_str!("../sql/functions/sqlite/03_sp_get_stroke_totals.sql")
        }
    };

    let res = conn.execute_select(query, &[]).await?;

    Ok(res
        .results
        .iter()
        .map(|row| MatchStrokeTotals {
            match_id: row_int(row, "match_id"),
            date: row_text(row, "date"),
            front_total_a: row_int(row, "front_total_a"),
            back_total_a: row_int(row, "back_total_a"),
            total_a: row_int(row, "total_a"),
            front_total_b: row_int(row, "front_total_b"),
            back_total_b: row_int(row, "back_total_b"),
            total_b: row_int(row, "total_b"),
        })
        .collect())
}

/// Whether any match is already stored under this date string. Used by
/// db prefill to keep reruns idempotent.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn match_on_date_exists(
    config_and_pool: &ConfigAndPool,
    date: &str,
) -> Result<bool, SqlMiddlewareDbError> {
    let mut conn = config_and_pool.get_connection().await?;
    let query = match &conn {
        MiddlewarePoolConnection::Postgres { .. } => {
            "SELECT count(*) as cnt FROM matches WHERE date = $1;"
        }
        MiddlewarePoolConnection::Sqlite { .. } => {
            "SELECT count(*) as cnt FROM matches WHERE date = ?1;"
        }
    };

    let res = conn
        .execute_select(query, &[RowValues::Text(date.to_string())])
        .await?;

    Ok(res
        .results
        .first()
        .map(|row| row_int(row, "cnt") > 0)
        .unwrap_or_default())
}
