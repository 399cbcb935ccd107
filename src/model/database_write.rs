use sql_middleware::middleware::{
    AsyncDatabaseExecutor, ConfigAndPool, ConversionMode, MiddlewarePoolConnection, RowValues,
};
use sql_middleware::{PostgresParams, SqlMiddlewareDbError, SqliteParamsExecute, convert_sql_params};

use crate::model::match_play::{MatchScorecard, PlayerNames, Segment};

/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn execute_batch_sql(
    config_and_pool: &ConfigAndPool,
    query: &str,
) -> Result<(), SqlMiddlewareDbError> {
    let mut conn = config_and_pool.get_connection().await?;

    conn.execute_batch(query).await
}

/// Commit one scored match: the summary row plus its 18 hole rows land in
/// a single transaction, so a failure partway through stores nothing.
/// Returns the new `match_id`.
///
/// # Errors
///
/// Will return `Err` if the database insert fails
pub async fn append_match(
    config_and_pool: &ConfigAndPool,
    date: &str,
    scorecard: &MatchScorecard,
    names: &PlayerNames,
) -> Result<i64, SqlMiddlewareDbError> {
    let match_params = build_match_params(date, scorecard, names);
    let hole_rows = build_hole_params(scorecard, names);

    let conn = config_and_pool.get_connection().await?;

    match conn {
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            sqlite_conn
                .with_connection(move |conn| {
                    let tx = conn.transaction()?;
                    let match_id = {
                        let insert_match =
                            include_str!("../sql/functions/sqlite/04_sp_insert_match.sql");
                        let mut stmt = tx.prepare(insert_match)?;
                        let converted = convert_sql_params::<SqliteParamsExecute>(
                            &match_params,
                            ConversionMode::Execute,
                        )?;
                        stmt.execute(converted.0)?;
                        tx.last_insert_rowid()
                    };
                    {
                        let insert_hole =
                            include_str!("../sql/functions/sqlite/05_sp_insert_hole.sql");
                        let mut stmt = tx.prepare(insert_hole)?;
                        for hole in hole_rows {
                            let mut params = vec![RowValues::Int(match_id)];
                            params.extend(hole);
                            let converted = convert_sql_params::<SqliteParamsExecute>(
                                &params,
                                ConversionMode::Execute,
                            )?;
                            stmt.execute(converted.0)?;
                        }
                    }
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(match_id)
                })
                .await
        }
        MiddlewarePoolConnection::Postgres(mut pg_conn) => {
            let tx = pg_conn.transaction().await?;
            let converted = PostgresParams::convert(&match_params)?;
            let row = tx
                .query_one(
                    "INSERT INTO matches (date, front9_winner, back9_winner, overall_winner, rod_net, jim_net) \
                     VALUES ($1, $2, $3, $4, $5, $6) RETURNING match_id;",
                    &converted.as_refs(),
                )
                .await?;
            let match_id: i64 = row.get(0);
            for hole in hole_rows {
                let mut params = vec![RowValues::Int(match_id)];
                params.extend(hole);
                let converted = PostgresParams::convert(&params)?;
                tx.execute(
                    "INSERT INTO holes (match_id, hole_number, score_a, score_b, hole_winner, match_status, cumulative_wins_a, cumulative_wins_b) \
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8);",
                    &converted.as_refs(),
                )
                .await?;
            }
            tx.commit().await?;
            Ok(match_id)
        }
    }
}

fn build_match_params(date: &str, scorecard: &MatchScorecard, names: &PlayerNames) -> Vec<RowValues> {
    vec![
        RowValues::Text(date.to_string()),
        RowValues::Text(scorecard.front9.label(Segment::Front9, names)),
        RowValues::Text(scorecard.back9.label(Segment::Back9, names)),
        RowValues::Text(scorecard.overall.label(Segment::Overall, names)),
        RowValues::Int(scorecard.net_points_a),
        RowValues::Int(scorecard.net_points_b()),
    ]
}

// match_id is prepended per backend once the summary row has been assigned one
fn build_hole_params(scorecard: &MatchScorecard, names: &PlayerNames) -> Vec<Vec<RowValues>> {
    scorecard
        .holes
        .iter()
        .map(|hole| {
            vec![
                RowValues::Int(i64::from(hole.hole_number)),
                RowValues::Int(hole.score_a),
                RowValues::Int(hole.score_b),
                RowValues::Text(hole.winner.label(names).to_string()),
                RowValues::Text(hole.status.clone()),
                RowValues::Int(hole.wins_a),
                RowValues::Int(hole.wins_b),
            ]
        })
        .collect()
}
