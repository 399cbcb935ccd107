use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use sql_middleware::middleware::ConfigAndPool;
use std::collections::HashMap;

use super::data_service::get_data_for_matches_page;
use crate::args::CleanArgs;
use crate::model::{
    HOLES_PER_MATCH, MatchDate, PlayerNames, ScoreError, append_match, score_match,
};
use crate::view::matches::{
    render_entry_section, render_match_preview, render_match_saved, render_matches_template,
};

pub async fn matches(
    query: web::Query<HashMap<String, String>>,
    abc: Data<ConfigAndPool>,
    args: Data<CleanArgs>,
) -> impl Responder {
    let config_and_pool = abc.get_ref().clone();
    let names = player_names(&args);

    let json = match get_param_str(&query, "json") {
        "1" => true,
        "0" => false,
        other => other.parse().unwrap_or(false), // Default to false
    };

    match get_data_for_matches_page(&config_and_pool, &names).await {
        Ok(data) => {
            if json {
                HttpResponse::Ok().json(data)
            } else {
                let markup = render_matches_template(&data, &names);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": e.to_string()})),
    }
}

/// Score the submitted grid and show the scorecard without saving it.
pub async fn preview_match(
    form: web::Form<HashMap<String, String>>,
    args: Data<CleanArgs>,
) -> impl Responder {
    let names = player_names(&args);

    let Some(date) = form.get("date").and_then(|d| MatchDate::new(d)) else {
        return HttpResponse::BadRequest()
            .json(json!({"error": "date parameter is required (e.g., Feb 14 26)"}));
    };

    match parse_match_form(&form).and_then(|strokes| score_match(&strokes, &names)) {
        Ok(scorecard) => {
            let markup = render_match_preview(date.value(), &scorecard, &names);
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        }
        Err(e) => HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    }
}

/// Score the submitted grid and commit it, match row plus 18 hole rows.
pub async fn save_match(
    form: web::Form<HashMap<String, String>>,
    abc: Data<ConfigAndPool>,
    args: Data<CleanArgs>,
) -> impl Responder {
    let config_and_pool = abc.get_ref().clone();
    let names = player_names(&args);

    let Some(date) = form.get("date").and_then(|d| MatchDate::new(d)) else {
        return HttpResponse::BadRequest()
            .json(json!({"error": "date parameter is required (e.g., Feb 14 26)"}));
    };

    let scorecard = match parse_match_form(&form).and_then(|strokes| score_match(&strokes, &names))
    {
        Ok(scorecard) => scorecard,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match append_match(&config_and_pool, date.value(), &scorecard, &names).await {
        Ok(match_id) => {
            let markup = render_match_saved(match_id, date.value(), &scorecard, &names);
            HttpResponse::Ok()
                .content_type("text/html")
                .body(markup.into_string())
        }
        Err(e) => {
            let commit = ScoreError::Commit(e.to_string());
            HttpResponse::InternalServerError().json(json!({"error": commit.to_string()}))
        }
    }
}

/// Blank entry grid. `cleared=1` adds a notice that the previous form was
/// discarded; the flag travels in the request instead of server state.
pub async fn entry_form(
    query: web::Query<HashMap<String, String>>,
    args: Data<CleanArgs>,
) -> impl Responder {
    let names = player_names(&args);
    let cleared = get_param_str(&query, "cleared") == "1";

    let markup = render_entry_section(&names, cleared);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

// Helper function to get a query parameter with a default value
fn get_param_str<'a>(query: &'a HashMap<String, String>, key: &str) -> &'a str {
    query.get(key).map(|s| s.as_str()).unwrap_or("")
}

fn player_names(args: &CleanArgs) -> PlayerNames {
    PlayerNames::new(args.player_a.clone(), args.player_b.clone())
}

fn parse_match_form(form: &HashMap<String, String>) -> Result<Vec<(i64, i64)>, ScoreError> {
    let mut strokes = Vec::with_capacity(HOLES_PER_MATCH);
    for hole in 1..=HOLES_PER_MATCH {
        match (
            form.get(&format!("hole_{hole}_a")),
            form.get(&format!("hole_{hole}_b")),
        ) {
            (Some(a), Some(b)) => {
                strokes.push((parse_stroke(hole, a)?, parse_stroke(hole, b)?));
            }
            _ => {
                return Err(ScoreError::InputShape {
                    expected: HOLES_PER_MATCH,
                    got: hole - 1,
                });
            }
        }
    }
    // reject a grid that grew a 19th row
    if form.contains_key(&format!("hole_{}_a", HOLES_PER_MATCH + 1)) {
        return Err(ScoreError::InputShape {
            expected: HOLES_PER_MATCH,
            got: HOLES_PER_MATCH + 1,
        });
    }
    Ok(strokes)
}

fn parse_stroke(hole: usize, raw: &str) -> Result<i64, ScoreError> {
    raw.trim().parse::<i64>().map_err(|_| ScoreError::InvalidScore {
        hole,
        value: raw.trim().to_string(),
    })
}
