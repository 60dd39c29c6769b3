use super::*;

#[test]
fn roster_starts_with_four_players() {
    let r = Roster::new();
    let names: Vec<&str> = r.players().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["You", "Player 2", "Player 3", "Player 4"]);
    assert_eq!(r.score(YOU), Some(1200));
    assert_eq!(r.score("Player 2"), Some(700));
    assert_eq!(r.score("Player 4"), Some(500));
}

#[test]
fn award_adds_points_to_known_players_only() {
    let mut r = Roster::new();
    assert_eq!(r.award("Player 3", 100), Some(700));
    assert_eq!(r.award("Nobody", 100), None);
    assert_eq!(r.players().len(), 4);
}

#[test]
fn award_saturates() {
    let mut r = Roster::new();
    r.award(YOU, u32::MAX);
    assert_eq!(r.score(YOU), Some(u32::MAX));
}

#[test]
fn win_scores_guesser_and_drawer() {
    let mut r = Roster::new();
    r.record_win("Player 4");
    assert_eq!(r.score("Player 4"), Some(500 + GUESSER_POINTS));
    assert_eq!(r.score(YOU), Some(1200 + DRAWER_POINTS));
    assert_eq!(r.score("Player 2"), Some(700));
}

#[test]
fn ranked_orders_by_score_and_keeps_ties_stable() {
    let mut r = Roster::new();
    r.award("Player 4", 100);
    let ranked = r.ranked();
    let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["You", "Player 2", "Player 3", "Player 4"]);

    r.award("Player 4", 200);
    assert_eq!(r.ranked()[1].name, "Player 4");
}

#[test]
fn scores_serialize_as_name_and_score() {
    let json = serde_json::to_value(&Roster::new().ranked()[0]).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "You", "score": 1200 }));
}
