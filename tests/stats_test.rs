//! Aggregation tests against an on-disk database opened read-only

use rusqlite::{params, Connection};
use saints_stats::{
    storage::StatsDatabase, Category, DefenseStat, GameType, Leaderboard, LeaderboardKind,
    LeaderboardQuery, PlayerId, Scope, Season, StatsError,
};
use tempfile::TempDir;

const TEAM: &str = "New Orleans Saints";

fn insert_game(conn: &Connection, game_id: &str, season: u16, date: &str, game_type: &str) {
    conn.execute(
        "INSERT INTO games (game_id, season, game_date, game_type, opponent, home_away,
                            saints_score, opponent_score, result)
         VALUES (?, ?, ?, ?, 'Carolina Panthers', 'away', 24, 17, 'W')",
        params![game_id, season, date, game_type],
    )
    .unwrap();
}

fn insert_player(conn: &Connection, player_id: &str, name: &str) {
    conn.execute(
        "INSERT INTO players (player_id, player_name, pfa_url, position) VALUES (?, ?, ?, 'LB')",
        params![player_id, name, format!("https://pfa.example/{player_id}")],
    )
    .unwrap();
}

/// Create the schema, seed it through a plain connection, then hand back a
/// read-only handle.
fn seeded(seed: impl FnOnce(&Connection)) -> (TempDir, StatsDatabase) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saints.db");
    drop(StatsDatabase::create(&path).unwrap());
    {
        let conn = Connection::open(&path).unwrap();
        seed(&conn);
    }
    let db = StatsDatabase::open(&path).unwrap();
    (dir, db)
}

fn query(scope: Scope, category: Category) -> LeaderboardQuery {
    LeaderboardQuery::new(LeaderboardKind::new(scope, category, None).unwrap())
}

#[test]
fn test_open_missing_database() {
    let dir = TempDir::new().unwrap();
    match StatsDatabase::open(dir.path().join("nope.db")) {
        Err(StatsError::MissingDatabase { path }) => assert!(path.ends_with("nope.db")),
        other => panic!("expected MissingDatabase, got {other:?}"),
    }
}

#[test]
fn test_career_passing_sums_games() {
    let (_dir, db) = seeded(|conn| {
        insert_game(conn, "2008reg1", 2008, "2008-09-07", "regular");
        insert_game(conn, "2008reg2", 2008, "2008-09-14", "regular");
        insert_player(conn, "BreeDr00", "Drew Brees");
        for (game, yds) in [("2008reg1", 300), ("2008reg2", 250)] {
            conn.execute(
                "INSERT INTO player_passing (game_id, player_id, team, att, com, int_thrown, yds, lg, td)
                 VALUES (?, 'BreeDr00', ?, 30, 20, 0, ?, 30, 2)",
                params![game, TEAM, yds],
            )
            .unwrap();
        }
    });

    match db.leaderboard(&query(Scope::Career, Category::Passing)).unwrap() {
        Leaderboard::CareerPassing(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].stats.yds, 550);
            assert_eq!(rows[0].stats.games, 2);
            assert_eq!(rows[0].first_season, Season::new(2008));
        }
        other => panic!("unexpected leaderboard {other:?}"),
    }
}

#[test]
fn test_defense_union_across_tables() {
    let (_dir, db) = seeded(|conn| {
        insert_game(conn, "1999reg1", 1999, "1999-09-12", "regular");
        insert_game(conn, "2001reg1", 2001, "2001-09-09", "regular");
        insert_player(conn, "SmitP.00", "P. Smith");
        conn.execute(
            "INSERT INTO player_defense (game_id, player_id, team, tkl, tfl, qh, pd, ff, bl)
             VALUES ('2001reg1', 'SmitP.00', ?, 5, 0, 0, 0, 0, 0)",
            params![TEAM],
        )
        .unwrap();
        conn.execute(
            "INSERT INTO player_interceptions (game_id, player_id, team, int_count, yds, td)
             VALUES ('1999reg1', 'SmitP.00', ?, 1, 12, 0)",
            params![TEAM],
        )
        .unwrap();
    });

    let kind = LeaderboardKind::new(Scope::Career, Category::Defense, Some("tkl")).unwrap();
    assert_eq!(kind, LeaderboardKind::CareerDefense(DefenseStat::Tkl));
    match db.leaderboard(&LeaderboardQuery::new(kind)).unwrap() {
        Leaderboard::CareerDefense(rows) => {
            assert_eq!(rows.len(), 1);
            let row = &rows[0];
            assert_eq!(row.player_id, PlayerId::new("SmitP.00"));
            assert_eq!(row.stats.tkl, 5);
            assert_eq!(row.stats.sacks, 0.0);
            assert_eq!(row.stats.int_count, 1);
            assert_eq!(row.first_season, Season::new(1999));
            assert_eq!(row.last_season, Season::new(2001));
        }
        other => panic!("unexpected leaderboard {other:?}"),
    }
}

#[test]
fn test_game_type_partition() {
    let (_dir, db) = seeded(|conn| {
        insert_game(conn, "2009pre1", 2009, "2009-08-14", "preseason");
        insert_game(conn, "2009reg1", 2009, "2009-09-13", "regular");
        insert_game(conn, "2009reg2", 2009, "2009-09-20", "regular");
        insert_game(conn, "2009post1", 2009, "2010-01-16", "playoff");
    });

    let season = Season::new(2009);
    let total = db.season_games(season, None).unwrap().len();
    let split: usize = GameType::ALL
        .iter()
        .map(|t| db.season_games(season, Some(*t)).unwrap().len())
        .sum();
    assert_eq!(total, 4);
    assert_eq!(split, total);
}

#[test]
fn test_search_and_game_log() {
    let (_dir, db) = seeded(|conn| {
        insert_game(conn, "2009pre1", 2009, "2009-08-14", "preseason");
        insert_game(conn, "2009reg1", 2009, "2009-09-13", "regular");
        insert_player(conn, "ThomPi00", "Pierre Thomas");
        for game in ["2009pre1", "2009reg1"] {
            conn.execute(
                "INSERT INTO player_rushing (game_id, player_id, team, att, yds, lg, td)
                 VALUES (?, 'ThomPi00', ?, 12, 54, 14, 1)",
                params![game, TEAM],
            )
            .unwrap();
        }
    });

    let found = db.search_players("pierre", None).unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].first_season, Some(Season::new(2009)));

    let log = db
        .player_game_log(&PlayerId::new("ThomPi00"), None)
        .unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].game.game_id.as_str(), "2009reg1");
    assert!(log[0].passing.is_none());
    assert_eq!(log[0].rushing.as_ref().unwrap().yds, 54);

    let err = db
        .player_game_log(&PlayerId::new("Nobody00"), None)
        .unwrap_err();
    assert!(err.is_not_found());
}
