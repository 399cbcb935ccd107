use serde::{Deserialize, Serialize};
use sql_middleware::middleware::ConfigAndPool;

use crate::model::{
    HoleRow, LifetimeSummary, MatchRecord, PlayerNames, StrokeAverages, get_holes,
    lifetime_summary, list_matches, match_stroke_totals, stroke_averages,
};

/// One stored match with its hole-by-hole detail, for the rounds section.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchRound {
    pub record: MatchRecord,
    pub holes: Vec<HoleRow>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct MatchesPageData {
    pub matches: Vec<MatchRecord>,
    pub rounds: Vec<MatchRound>,
    pub lifetime: LifetimeSummary,
    pub averages: Option<StrokeAverages>,
}

/// # Errors
///
/// Will return `Err` if the database queries fail
pub async fn get_data_for_matches_page(
    config_and_pool: &ConfigAndPool,
    names: &PlayerNames,
) -> Result<MatchesPageData, Box<dyn std::error::Error>> {
    let matches = list_matches(config_and_pool).await?;

    // newest first, the order the rounds section shows them in
    let mut rounds = Vec::with_capacity(matches.len());
    for record in matches.iter().rev() {
        let holes = get_holes(config_and_pool, record.match_id).await?;
        rounds.push(MatchRound {
            record: record.clone(),
            holes,
        });
    }

    let lifetime = lifetime_summary(&matches, names);
    if !lifetime.segments_agree_with_grand_total() {
        log::warn!(
            "lifetime tallies disagree: per-segment sum {} vs grand total {}",
            lifetime.segment_sum_a(),
            lifetime.grand_total_a
        );
    }

    let totals = match_stroke_totals(config_and_pool).await?;
    let averages = stroke_averages(&totals);

    Ok(MatchesPageData {
        matches,
        rounds,
        lifetime,
        averages,
    })
}
