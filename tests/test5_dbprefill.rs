mod common;

use common::setup_test_context;
use rusty_matchplay::controller::db_prefill::db_prefill;
use rusty_matchplay::model::{PlayerNames, get_holes, list_matches};
use sql_middleware::middleware::AsyncDatabaseExecutor;

#[tokio::test]
async fn test_dbprefill() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = setup_test_context("").await?;
    let names = PlayerNames::default();

    // first verify that nothing is in these tables
    assert_eq!(list_matches(&ctx.config_and_pool).await?.len(), 0);

    let json = serde_json::from_str(include_str!("test5_dbprefill.json"))?;
    db_prefill(&json, &ctx.config_and_pool, &names).await?;

    // now verify that the tables have been populated
    let matches = list_matches(&ctx.config_and_pool).await?;
    assert_eq!(matches.len(), 2);

    let first = matches
        .iter()
        .find(|m| m.date == "Feb 14 26")
        .expect("prefilled match missing");
    assert_eq!(first.front9_winner, "Rod wins Front 9 by 1");
    assert_eq!(first.back9_winner, "Jim wins Back 9 by 1");
    assert_eq!(first.overall_winner, "All Square");
    assert_eq!(first.rod_net, 0);
    assert_eq!(first.jim_net, 0);

    let second = matches
        .iter()
        .find(|m| m.date == "Feb 21 26")
        .expect("prefilled match missing");
    assert_eq!(second.overall_winner, "Jim wins match by 18");
    assert_eq!(second.rod_net, -3);
    assert_eq!(second.jim_net, 3);

    for record in &matches {
        let holes = get_holes(&ctx.config_and_pool, record.match_id).await?;
        assert_eq!(holes.len(), 18);
    }

    let mut conn = ctx.config_and_pool.get_connection().await?;
    let res = conn
        .execute_select("select count(*) as cnt from holes;", &[])
        .await?;
    assert_eq!(
        *res.results[0].get("cnt").unwrap().as_int().unwrap(),
        36_i64
    );

    // a second run skips both dates, nothing doubles up
    db_prefill(&json, &ctx.config_and_pool, &names).await?;
    assert_eq!(list_matches(&ctx.config_and_pool).await?.len(), 2);
    let res = conn
        .execute_select("select count(*) as cnt from holes;", &[])
        .await?;
    assert_eq!(
        *res.results[0].get("cnt").unwrap().as_int().unwrap(),
        36_i64
    );

    Ok(())
}
