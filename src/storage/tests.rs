//! Unit tests for storage functionality

use super::fixtures::{test_db, TEAM};
use super::*;
use crate::cli::types::{GameId, GameResult, GameType, PlayerId, Season};

fn create_test_db_with_season() -> StatsDatabase {
    let db = test_db();
    db.seed_game("2009pre1", 2009, "2009-08-14", "preseason", Some(17), Some(10));
    db.seed_game("2009reg1", 2009, "2009-09-13", "regular", Some(45), Some(27));
    db.seed_game("2009reg2", 2009, "2009-09-20", "regular", Some(48), Some(22));
    db.seed_game("2009reg3", 2009, "2009-12-19", "regular", Some(17), Some(24));
    db.seed_game("2009post1", 2009, "2010-02-07", "playoff", Some(31), Some(17));
    db
}

#[test]
fn test_database_creation() {
    let _db = test_db();
    // Should not panic - database creation successful
}

#[test]
fn test_get_game_existing_and_missing() {
    let db = create_test_db_with_season();

    let game = db.get_game(&GameId::new("2009post1")).unwrap().unwrap();
    assert_eq!(game.season, Season::new(2009));
    assert_eq!(game.game_type, GameType::Playoff);
    assert_eq!(game.result, Some(GameResult::Win));
    assert!(game.is_consistent());

    assert!(db.get_game(&GameId::new("nope")).unwrap().is_none());
}

#[test]
fn test_season_games_partition_by_game_type() {
    let db = create_test_db_with_season();
    let season = Season::new(2009);

    let all = db.season_games(season, None).unwrap();
    let partitioned: usize = GameType::ALL
        .iter()
        .map(|gt| db.season_games(season, Some(*gt)).unwrap().len())
        .sum();

    assert_eq!(all.len(), 5);
    assert_eq!(partitioned, all.len());

    // Ordered by date
    let dates: Vec<_> = all.iter().map(|g| g.game_date.clone()).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[test]
fn test_empty_game_type_is_valid_empty() {
    let db = test_db();
    db.seed_game("1990reg1", 1990, "1990-09-09", "regular", Some(28), Some(7));

    assert!(db.season_exists(Season::new(1990)).unwrap());
    assert!(db
        .season_games(Season::new(1990), Some(GameType::Playoff))
        .unwrap()
        .is_empty());
    assert!(!db.season_exists(Season::new(1991)).unwrap());
}

#[test]
fn test_season_records() {
    let db = create_test_db_with_season();
    db.seed_game("2010reg1", 2010, "2010-09-09", "regular", Some(14), Some(9));

    let record = db
        .season_record(Season::new(2009), GameType::Regular)
        .unwrap()
        .unwrap();
    assert_eq!(record.games, 3);
    assert_eq!(record.wins, 2);
    assert_eq!(record.losses, 1);
    assert_eq!(record.ties, 0);
    assert_eq!(record.points_for, 45 + 48 + 17);
    assert_eq!(record.points_against, 27 + 22 + 24);

    let seasons = db.list_seasons(GameType::Regular).unwrap();
    assert_eq!(seasons.len(), 2);
    assert_eq!(seasons[0].season, Season::new(2010));

    assert!(db
        .season_record(Season::new(2010), GameType::Playoff)
        .unwrap()
        .is_none());
}

#[test]
fn test_unfinished_game_has_no_result() {
    let db = test_db();
    db.seed_game("2026reg1", 2026, "2026-09-13", "regular", None, None);

    let game = db.get_game(&GameId::new("2026reg1")).unwrap().unwrap();
    assert_eq!(game.result, None);
    assert_eq!(game.score_result(), None);
    assert!(game.is_consistent());
}

#[test]
fn test_get_player_requires_recognized_identity() {
    let db = test_db();
    db.seed_player("BreeDr00", "Drew Brees", true);
    db.seed_player("BreeDr99", "Drew Brees", false);

    let player = db.get_player(&PlayerId::new("BreeDr00")).unwrap().unwrap();
    assert_eq!(player.player_name, "Drew Brees");
    assert!(player.pfa_url.is_some());

    assert!(db.get_player(&PlayerId::new("BreeDr99")).unwrap().is_none());
}

#[test]
fn test_team_stats_and_season_totals() {
    let db = create_test_db_with_season();
    db.seed_team_stats("2009reg1", TEAM, 150, 300, 45);
    db.seed_team_stats("2009reg1", "Detroit Lions", 80, 200, 27);
    db.seed_team_stats("2009reg2", "NO", 120, 350, 48);
    db.seed_team_stats("2009reg2", "Philadelphia Eagles", 90, 250, 22);
    db.seed_team_stats("2009post1", TEAM, 100, 280, 31);

    let game_stats = db.team_game_stats(&GameId::new("2009reg1")).unwrap();
    assert_eq!(game_stats.len(), 2);
    assert!(game_stats.iter().any(|t| is_franchise_team(&t.team)));

    let totals = db
        .season_team_totals(Season::new(2009), GameType::Regular)
        .unwrap();
    assert_eq!(totals.len(), 2);

    let franchise = totals
        .iter()
        .find(|t| t.side == TeamSide::Franchise)
        .unwrap();
    assert_eq!(franchise.games, 2);
    assert_eq!(franchise.rush_yds, 270);
    assert_eq!(franchise.pass_yds, 650);
    assert_eq!(franchise.total_points, 93);
    assert!((franchise.sacks - 5.0).abs() < f64::EPSILON);

    let opponents = totals
        .iter()
        .find(|t| t.side == TeamSide::Opponents)
        .unwrap();
    assert_eq!(opponents.total_points, 49);
}

#[test]
fn test_scoring_plays_ordered() {
    let db = create_test_db_with_season();
    db.seed_scoring_play("2009reg1", 3, "Brees 12 yd pass to Colston");
    db.seed_scoring_play("2009reg1", 1, "Bush 5 yd run");

    let plays = db.scoring_plays(&GameId::new("2009reg1")).unwrap();
    assert_eq!(plays.len(), 2);
    assert_eq!(plays[0].quarter, Some(1));
    assert_eq!(plays[1].quarter, Some(3));
}

#[test]
fn test_draft_linkage_by_id_and_name() {
    let db = test_db();
    db.seed_player("BreeDr00", "Drew Brees", true);
    db.seed_player("JohnMa00", "Mark Johnson", true);
    db.seed_player("SmitJo99", "Joe Smith", false);
    db.seed_draft_pick(2006, 1, 2, "Reggie Bush", None);
    db.seed_draft_pick(2006, 2, 40, "MARK JOHNSON", None);
    db.seed_draft_pick(2006, 7, 252, "Joe Smith", None);
    db.seed_draft_pick(2006, 1, 1, "Drew Brees", Some("BreeDr00"));

    let picks = db.draft_class(Season::new(2006)).unwrap();
    assert_eq!(picks.len(), 4);
    assert_eq!((picks[0].round, picks[0].pick), (1, 1));
    assert_eq!(picks[0].linked_player_id, Some(PlayerId::new("BreeDr00")));
    assert_eq!(picks[1].linked_player_id, None);
    assert_eq!(picks[2].linked_player_id, Some(PlayerId::new("JohnMa00")));
    // Unrecognized identities are never linked by name
    assert_eq!(picks[3].linked_player_id, None);

    let johnson = db.player_draft_picks(&PlayerId::new("JohnMa00")).unwrap();
    assert_eq!(johnson.len(), 1);
    assert_eq!(johnson[0].player_name, "MARK JOHNSON");

    assert!(db.draft_year_exists(Season::new(2006)).unwrap());
    assert!(!db.draft_year_exists(Season::new(2007)).unwrap());
}

#[test]
fn test_box_score_folds_defense_tables() {
    let db = create_test_db_with_season();
    db.seed_player("VilmJo00", "Jonathan Vilma", true);
    db.seed_player("SharDa00", "Darren Sharper", true);
    db.seed_passing("2009reg1", "BreeDr00", 34, 26, 358, 6, 1);
    db.seed_rushing("2009reg1", "BushRe00", 10, 55, 0, 15);
    db.seed_receiving("2009reg1", "ColsMa00", Some(8), 6, 101, 2);
    db.seed_defense("2009reg1", "VilmJo00", 9, 1);
    db.seed_sacks("2009reg1", "VilmJo00", 1.5);
    db.seed_interceptions("2009reg1", "SharDa00", 2, 97);

    let box_score = db.box_score(&GameId::new("2009reg1")).unwrap();
    assert_eq!(box_score.passing.len(), 1);
    // Unknown identities fall back to their id
    assert_eq!(box_score.passing[0].player_name, "BreeDr00");
    assert_eq!(box_score.rushing[0].yds, 55);
    assert_eq!(box_score.receiving[0].tar, 8);

    assert_eq!(box_score.defense.len(), 2);
    let vilma = box_score
        .defense
        .iter()
        .find(|d| d.player_id == PlayerId::new("VilmJo00"))
        .unwrap();
    assert_eq!(vilma.tkl, 9);
    assert!((vilma.sacks - 1.5).abs() < f64::EPSILON);
    assert_eq!(vilma.int_count, 0);

    let sharper = box_score
        .defense
        .iter()
        .find(|d| d.player_id == PlayerId::new("SharDa00"))
        .unwrap();
    assert_eq!(sharper.tkl, 0);
    assert_eq!(sharper.int_count, 2);
    assert_eq!(sharper.int_yds, 97);
}
