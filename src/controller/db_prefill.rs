use serde_json::Value;
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::ConfigAndPool;

use crate::model::{PlayerNames, append_match, match_on_date_exists, score_match};

/// Load past matches from json on startup.
/// format we have is this:
/// [{ "date": "Feb 14 26", "holes": [[4, 5], [3, 3], ... 18 pairs total ...] }, ...]
///
/// Dates already stored are skipped, so reruns are idempotent.
///
/// # Errors
///
/// Will return `Err` if scoring or the database insert fails
///
/// # Panics
///
/// Will panic if the json is not in the format enforced by arg validation
pub async fn db_prefill(
    json: &Value,
    config_and_pool: &ConfigAndPool,
    names: &PlayerNames,
) -> Result<(), SqlMiddlewareDbError> {
    for entry in json.as_array().unwrap() {
        let date = entry["date"].as_str().unwrap();
        if match_on_date_exists(config_and_pool, date).await? {
            log::info!("Match dated {date} already exists in the db. Skipping db prefill.");
            continue;
        }

        let strokes: Vec<(i64, i64)> = entry["holes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| {
                (
                    pair[0].as_i64().unwrap_or_default(),
                    pair[1].as_i64().unwrap_or_default(),
                )
            })
            .collect();

        let scorecard =
            score_match(&strokes, names).map_err(|e| SqlMiddlewareDbError::Other(e.to_string()))?;
        let match_id = append_match(config_and_pool, date, &scorecard, names).await?;
        log::info!("Prefilled match {match_id} dated {date}.");
    }
    Ok(())
}
