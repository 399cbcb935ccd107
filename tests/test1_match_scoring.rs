use rusty_matchplay::model::{
    HoleWinner, MatchDate, PlayerNames, PlayerSide, ScoreError, Segment, SegmentOutcome,
    format_net_money, hole_winner, score_match,
};

fn all_ties() -> Vec<(i64, i64)> {
    vec![(4, 4); 18]
}

/// Player A takes every hole by one stroke.
fn sweep_a() -> Vec<(i64, i64)> {
    vec![(3, 4); 18]
}

#[test]
fn hole_winner_goes_to_lower_strokes() {
    assert_eq!(hole_winner(3, 5), HoleWinner::A);
    assert_eq!(hole_winner(6, 4), HoleWinner::B);
    assert_eq!(hole_winner(4, 4), HoleWinner::Tie);
    assert_eq!(hole_winner(0, 0), HoleWinner::Tie);
}

#[test]
fn counters_account_for_every_hole() {
    // mixed card: some wins each way, some halves
    let mut strokes = all_ties();
    strokes[0] = (3, 5);
    strokes[4] = (6, 4);
    strokes[9] = (4, 7);
    strokes[16] = (5, 3);

    let card = score_match(&strokes, &PlayerNames::default()).unwrap();
    assert_eq!(card.holes.len(), 18);

    let last = card.holes.last().unwrap();
    let ties = card
        .holes
        .iter()
        .filter(|h| h.winner == HoleWinner::Tie)
        .count() as i64;
    assert_eq!(last.wins_a + last.wins_b + ties, 18);

    // counters never decrease hole to hole
    for pair in card.holes.windows(2) {
        assert!(pair[1].wins_a >= pair[0].wins_a);
        assert!(pair[1].wins_b >= pair[0].wins_b);
    }
}

#[test]
fn sweep_takes_all_three_segments() {
    let card = score_match(&sweep_a(), &PlayerNames::default()).unwrap();

    assert_eq!(card.front9, SegmentOutcome::Wins(PlayerSide::A, 9));
    assert_eq!(card.back9, SegmentOutcome::Wins(PlayerSide::A, 9));
    assert_eq!(card.overall, SegmentOutcome::Wins(PlayerSide::A, 18));
    assert_eq!(card.net_points_a, 3);
    assert_eq!(card.net_points_b(), -3);

    assert_eq!(card.holes[0].status, "1 Up (Rod)");
    assert_eq!(card.holes[16].status, "17 Up (Rod)");
    assert_eq!(card.holes[17].status, "18 Up (Rod wins the match)");
}

#[test]
fn halved_match_is_all_square_everywhere() {
    let card = score_match(&all_ties(), &PlayerNames::default()).unwrap();

    assert_eq!(card.front9, SegmentOutcome::AllSquare);
    assert_eq!(card.back9, SegmentOutcome::AllSquare);
    assert_eq!(card.overall, SegmentOutcome::AllSquare);
    assert_eq!(card.net_points_a, 0);
    assert_eq!(card.net_points_b(), 0);

    // hole 18 stays plain, no "wins the match" suffix on a level card
    for hole in &card.holes {
        assert_eq!(hole.status, "All Square");
    }
}

#[test]
fn early_lead_held_through_halved_holes() {
    let mut strokes = all_ties();
    for hole in strokes.iter_mut().take(5) {
        *hole = (3, 4);
    }

    let card = score_match(&strokes, &PlayerNames::default()).unwrap();
    assert_eq!(card.holes[4].status, "5 Up (Rod)");
    assert_eq!(card.holes[10].status, "5 Up (Rod)");
    assert_eq!(card.holes[17].status, "5 Up (Rod wins the match)");

    assert_eq!(card.front9, SegmentOutcome::Wins(PlayerSide::A, 5));
    assert_eq!(card.back9, SegmentOutcome::AllSquare);
    assert_eq!(card.overall, SegmentOutcome::Wins(PlayerSide::A, 5));
    assert_eq!(card.net_points_a, 2);
}

#[test]
fn back_nine_settled_on_hole_differential() {
    // front: A up 2 with one loss; back: 3-1 to A, so margin 2 not 3
    let mut strokes = all_ties();
    strokes[0] = (3, 4);
    strokes[1] = (3, 4);
    strokes[2] = (5, 4);
    strokes[3] = (3, 4);
    strokes[9] = (3, 4);
    strokes[10] = (3, 4);
    strokes[11] = (5, 4);
    strokes[12] = (3, 4);

    let card = score_match(&strokes, &PlayerNames::default()).unwrap();
    assert_eq!(card.front9, SegmentOutcome::Wins(PlayerSide::A, 2));
    assert_eq!(card.back9, SegmentOutcome::Wins(PlayerSide::A, 2));
    assert_eq!(card.overall, SegmentOutcome::Wins(PlayerSide::A, 4));
    assert_eq!(card.net_points_a, 3);
}

#[test]
fn split_segments_net_against_each_other() {
    // A edges the front, B runs away with the back and the match
    let mut strokes = all_ties();
    strokes[0] = (3, 4);
    strokes[1] = (3, 4);
    for hole in strokes.iter_mut().skip(9).take(5) {
        *hole = (6, 4);
    }

    let card = score_match(&strokes, &PlayerNames::default()).unwrap();
    assert_eq!(card.front9, SegmentOutcome::Wins(PlayerSide::A, 2));
    assert_eq!(card.back9, SegmentOutcome::Wins(PlayerSide::B, 5));
    assert_eq!(card.overall, SegmentOutcome::Wins(PlayerSide::B, 3));
    assert_eq!(card.net_points_a, -1);
    assert_eq!(card.net_points_b(), 1);
    assert_eq!(card.holes[17].status, "3 Up (Jim wins the match)");
}

#[test]
fn net_points_stay_in_range() {
    let cards = [
        score_match(&sweep_a(), &PlayerNames::default()).unwrap(),
        score_match(&all_ties(), &PlayerNames::default()).unwrap(),
        score_match(&vec![(5, 3); 18], &PlayerNames::default()).unwrap(),
    ];
    for card in &cards {
        assert!((-3..=3).contains(&card.net_points_a));
        assert_eq!(card.net_points_a + card.net_points_b(), 0);
    }
}

#[test]
fn wrong_row_count_is_rejected() {
    let names = PlayerNames::default();

    let short = vec![(4, 4); 17];
    let err = score_match(&short, &names).unwrap_err();
    assert!(matches!(
        err,
        ScoreError::InputShape {
            expected: 18,
            got: 17
        }
    ));
    assert_eq!(err.to_string(), "expected 18 hole rows, got 17");

    let long = vec![(4, 4); 19];
    let err = score_match(&long, &names).unwrap_err();
    assert_eq!(err.to_string(), "expected 18 hole rows, got 19");
}

#[test]
fn negative_strokes_are_rejected() {
    let mut strokes = all_ties();
    strokes[3] = (-1, 4);

    let err = score_match(&strokes, &PlayerNames::default()).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidScore { hole: 4, .. }));
    assert_eq!(err.to_string(), "invalid stroke count on hole 4: -1");
}

#[test]
fn zero_strokes_are_accepted() {
    let mut strokes = all_ties();
    strokes[0] = (0, 0);
    assert!(score_match(&strokes, &PlayerNames::default()).is_ok());
}

#[test]
fn scoring_is_deterministic() {
    let mut strokes = all_ties();
    strokes[2] = (3, 5);
    strokes[12] = (6, 4);

    let names = PlayerNames::default();
    let first = serde_json::to_value(score_match(&strokes, &names).unwrap()).unwrap();
    let second = serde_json::to_value(score_match(&strokes, &names).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn segment_labels_read_as_stored_text() {
    let names = PlayerNames::default();

    let won = SegmentOutcome::Wins(PlayerSide::A, 2);
    assert_eq!(won.label(Segment::Front9, &names), "Rod wins Front 9 by 2");
    assert_eq!(won.label(Segment::Back9, &names), "Rod wins Back 9 by 2");
    assert_eq!(won.label(Segment::Overall, &names), "Rod wins match by 2");

    let lost = SegmentOutcome::Wins(PlayerSide::B, 3);
    assert_eq!(lost.label(Segment::Overall, &names), "Jim wins match by 3");

    assert_eq!(
        SegmentOutcome::AllSquare.label(Segment::Front9, &names),
        "All Square (Halved)"
    );
    assert_eq!(
        SegmentOutcome::AllSquare.label(Segment::Back9, &names),
        "All Square (Halved)"
    );
    assert_eq!(
        SegmentOutcome::AllSquare.label(Segment::Overall, &names),
        "All Square"
    );
}

#[test]
fn labels_follow_configured_names() {
    let names = PlayerNames::new("Alice", "Bob");
    let card = score_match(&sweep_a(), &names).unwrap();

    assert_eq!(card.holes[0].status, "1 Up (Alice)");
    assert_eq!(card.holes[0].winner.label(&names), "Alice");
    assert_eq!(
        card.overall.label(Segment::Overall, &names),
        "Alice wins match by 18"
    );
}

#[test]
fn money_formatting_signs() {
    assert_eq!(format_net_money(3), "+$3");
    assert_eq!(format_net_money(-2), "-$2");
    assert_eq!(format_net_money(0), "$0");
}

#[test]
fn match_date_accepts_freeform_text() {
    assert_eq!(MatchDate::new("Feb 14 26").unwrap().value(), "Feb 14 26");
    assert_eq!(MatchDate::new("  Jul 4, 2025 ").unwrap().value(), "Jul 4, 2025");
    assert_eq!(MatchDate::new("2026-02-14").unwrap().value(), "2026-02-14");
}

#[test]
fn match_date_rejects_unsafe_or_oversized_input() {
    assert!(MatchDate::new("").is_none());
    assert!(MatchDate::new("   ").is_none());
    assert!(MatchDate::new("<script>").is_none());
    assert!(MatchDate::new(&"x".repeat(40)).is_none());
}
