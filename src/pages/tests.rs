use super::*;
use crate::storage::fixtures::TEAM;
use tempfile::TempDir;

/// Build a small on-disk season and return a composer over it.
fn seeded_composer() -> (TempDir, PageComposer) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saints.db");
    {
        let db = StatsDatabase::create(&path).unwrap();
        db.seed_game("2009reg1", 2009, "2009-09-13", "regular", Some(45), Some(27));
        db.seed_game("2009reg2", 2009, "2009-09-20", "regular", Some(17), Some(24));
        db.seed_game("2009post1", 2009, "2010-01-16", "playoff", Some(45), Some(14));
        db.seed_player("BreeDr00", "Drew Brees", true);
        db.seed_player("VilmJo00", "Jonathan Vilma", true);
        db.seed_passing("2009reg1", "BreeDr00", 34, 26, 358, 6, 1);
        db.seed_passing("2009reg2", "BreeDr00", 30, 20, 250, 1, 1);
        db.seed_passing("2009post1", "BreeDr00", 32, 23, 247, 3, 0);
        db.seed_defense("2009reg1", "VilmJo00", 9, 1);
        db.seed_sacks("2009reg2", "VilmJo00", 1.5);
        db.seed_team_stats("2009reg1", TEAM, 150, 358, 45);
        db.seed_team_stats("2009reg1", "Detroit Lions", 80, 200, 27);
        db.seed_scoring_play("2009reg1", 1, "Brees 39 yd pass to Meachem");
        db.seed_draft_pick(2001, 2, 59, "Drew Brees", None);
    }
    (dir, PageComposer::new(path))
}

#[tokio::test]
async fn test_player_page() {
    let (_dir, pages) = seeded_composer();
    let page = pages.player(&PlayerId::new("BreeDr00")).await.unwrap();

    assert_eq!(page.player.player_name, "Drew Brees");
    let passing = page.career_passing.unwrap();
    assert_eq!(passing.stats.yds, 608);
    assert_eq!(passing.stats.games, 2);
    assert!(page.career_rushing.is_none());
    assert!(page.career_defense.is_none());
    assert_eq!(page.game_log.len(), 3);
    assert_eq!(page.draft_picks.len(), 1);
}

#[tokio::test]
async fn test_player_page_defense_only() {
    let (_dir, pages) = seeded_composer();
    let page = pages.player(&PlayerId::new("VilmJo00")).await.unwrap();

    let defense = page.career_defense.unwrap();
    assert_eq!(defense.stats.tkl, 9);
    assert_eq!(defense.stats.sacks, 1.5);
    assert!(page.game_log.is_empty());
}

#[tokio::test]
async fn test_missing_player_is_not_found() {
    let (_dir, pages) = seeded_composer();
    let err = pages.player(&PlayerId::new("Nobody00")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_season_page() {
    let (_dir, pages) = seeded_composer();
    let page = pages.season(Season::new(2009)).await.unwrap();

    assert_eq!(page.games.len(), 3);
    let record = page.record.unwrap();
    assert_eq!((record.wins, record.losses), (1, 1));
    assert_eq!(page.playoff_record.unwrap().wins, 1);
    assert_eq!(page.regular_totals.len(), 2);
    assert!(page.playoff_totals.is_empty());

    match &page.leaders.passing {
        Leaderboard::SeasonPassing(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].stats.yds, 608);
        }
        other => panic!("unexpected leaderboard {other:?}"),
    }
    assert!(page.leaders.rushing.is_empty());
    assert_eq!(page.leaders.defense.len(), 1);

    let err = pages.season(Season::new(1966)).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_game_page() {
    let (_dir, pages) = seeded_composer();
    let page = pages.game(&GameId::new("2009reg1")).await.unwrap();

    assert_eq!(page.game.saints_score, Some(45));
    assert_eq!(page.team_stats.len(), 2);
    assert_eq!(page.scoring_plays.len(), 1);
    assert_eq!(page.box_score.passing.len(), 1);
    assert_eq!(page.box_score.passing[0].player_name, "Drew Brees");
    assert_eq!(page.box_score.defense.len(), 1);

    let err = pages.game(&GameId::new("1800reg1")).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_missing_database_aborts_composition() {
    let dir = TempDir::new().unwrap();
    let pages = PageComposer::new(dir.path().join("absent.db"));

    match pages.game(&GameId::new("2009reg1")).await {
        Err(StatsError::MissingDatabase { .. }) => {}
        other => panic!("expected MissingDatabase, got {other:?}"),
    }
}
