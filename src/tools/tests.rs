use super::*;
use crate::cli::types::{PassingStat, RushingStat};
use crate::storage::StatsDatabase;
use tempfile::TempDir;

fn seeded_pages() -> (TempDir, PageComposer) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saints.db");
    {
        let db = StatsDatabase::create(&path).unwrap();
        db.seed_game("2006reg1", 2006, "2006-09-10", "regular", Some(19), Some(14));
        db.seed_player("BreeDr00", "Drew Brees", true);
        db.seed_player("BushRe00", "Reggie Bush", true);
        db.seed_passing("2006reg1", "BreeDr00", 39, 26, 229, 0, 0);
        db.seed_rushing("2006reg1", "BushRe00", 14, 61, 0, 11);
        db.seed_draft_pick(2006, 1, 2, "Reggie Bush", None);
    }
    (dir, PageComposer::new(path))
}

#[test]
fn test_definitions_cover_every_tool() {
    let defs = tool_definitions();
    let names: Vec<_> = defs
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(
        names,
        vec![
            "search_players",
            "get_leaderboard",
            "get_player_game_log",
            "get_player_profile",
            "get_season",
            "get_game",
            "get_draft_class",
        ]
    );
    for def in defs.as_array().unwrap() {
        assert_eq!(def["input_schema"]["type"], "object");
    }
}

#[test]
fn test_parse_tool_call() {
    let call = ToolCall::from_json(
        r#"{"name": "get_leaderboard", "arguments": {"scope": "season", "category": "rushing", "season": 2006}}"#,
    )
    .unwrap();
    assert_eq!(call.name(), "get_leaderboard");

    match call {
        ToolCall::GetLeaderboard(args) => {
            let query = args.to_query().unwrap();
            assert_eq!(query.kind, LeaderboardKind::SeasonRushing(RushingStat::Yds));
            assert_eq!(query.season, Some(Season::new(2006)));
            assert_eq!(query.limit, Some(10));
            assert_eq!(query.game_type, GameType::Regular);
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[test]
fn test_malformed_calls_are_invalid_parameters() {
    for raw in [
        r#"{"name": "drop_tables", "arguments": {}}"#,
        r#"{"name": "get_season", "arguments": {}}"#,
        r#"{"name": "get_season", "arguments": {"season": "two thousand"}}"#,
        "not json",
    ] {
        let err = ToolCall::from_json(raw).unwrap_err();
        assert!(err.is_invalid_parameter(), "{raw} gave {err:?}");
    }
}

#[test]
fn test_leaderboard_args_validation() {
    let args = LeaderboardArgs {
        scope: "career".to_string(),
        category: "passing".to_string(),
        game_type: Some("postseason".to_string()),
        sort_by: Some("td".to_string()),
        limit: Some(5000),
        player_id: None,
        season: None,
    };
    let query = args.to_query().unwrap();
    assert_eq!(query.kind, LeaderboardKind::CareerPassing(PassingStat::Td));
    assert_eq!(query.game_type, GameType::Playoff);
    assert_eq!(query.limit, Some(MAX_TOOL_ROWS));

    let with_season = LeaderboardArgs {
        season: Some(2009),
        ..args.clone()
    };
    assert!(with_season.to_query().unwrap_err().is_invalid_parameter());

    let bad_scope = LeaderboardArgs {
        scope: "decade".to_string(),
        ..args
    };
    assert!(matches!(
        bad_scope.to_query(),
        Err(StatsError::InvalidScope { .. })
    ));
}

#[tokio::test]
async fn test_execute_leaderboard_and_search() {
    let (_dir, pages) = seeded_pages();

    let board = execute_json(
        &pages,
        r#"{"name": "get_leaderboard", "arguments": {"scope": "career", "category": "passing"}}"#,
    )
    .await
    .unwrap();
    assert_eq!(board["kind"], "career_passing");
    assert_eq!(board["rows"][0]["player_name"], "Drew Brees");
    assert_eq!(board["rows"][0]["yds"], 229);

    let found = execute(
        &pages,
        ToolCall::SearchPlayers(SearchPlayersArgs {
            query: "bush".to_string(),
            limit: None,
        }),
    )
    .await
    .unwrap();
    assert_eq!(found["players"][0]["player_id"], "BushRe00");
}

#[tokio::test]
async fn test_execute_reports_absent_and_invalid_in_payload() {
    let (_dir, pages) = seeded_pages();

    let missing = execute(
        &pages,
        ToolCall::GetPlayerProfile(PlayerArgs {
            player_id: "Nobody00".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(missing["error"]["kind"], "not_found");

    let invalid = execute(&pages, ToolCall::GetSeason(SeasonArgs { season: 1850 }))
        .await
        .unwrap();
    assert_eq!(invalid["error"]["kind"], "invalid_parameter");

    let no_draft = execute(&pages, ToolCall::GetDraftClass(SeasonArgs { season: 1990 }))
        .await
        .unwrap();
    assert_eq!(no_draft["error"]["kind"], "not_found");

    let unknown = execute_json(&pages, r#"{"name": "delete_everything"}"#)
        .await
        .unwrap();
    assert_eq!(unknown["error"]["kind"], "invalid_parameter");
}

#[tokio::test]
async fn test_execute_draft_class() {
    let (_dir, pages) = seeded_pages();
    let draft = execute(&pages, ToolCall::GetDraftClass(SeasonArgs { season: 2006 }))
        .await
        .unwrap();

    assert_eq!(draft["season"], 2006);
    assert_eq!(draft["picks"][0]["linked_player_id"], "BushRe00");
}

#[tokio::test]
async fn test_data_store_failures_propagate() {
    let dir = TempDir::new().unwrap();
    let pages = PageComposer::new(dir.path().join("missing.db"));

    let result = execute(&pages, ToolCall::GetSeason(SeasonArgs { season: 2009 })).await;
    assert!(matches!(result, Err(StatsError::MissingDatabase { .. })));
}
