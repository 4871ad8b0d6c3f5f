//! Unit tests for error handling

use super::*;
use std::io;

#[test]
fn test_rusqlite_error_conversion() {
    let err = StatsError::from(rusqlite::Error::QueryReturnedNoRows);

    match err {
        StatsError::Database(_) => (),
        _ => panic!("Expected Database error variant"),
    }
    assert_eq!(err.kind(), "data_store");
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let err = StatsError::from(json_error);

    match err {
        StatsError::Json(_) => (),
        _ => panic!("Expected Json error variant"),
    }
}

#[test]
fn test_io_error_conversion() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
    let err = StatsError::from(io_error);

    match err {
        StatsError::Io(_) => (),
        _ => panic!("Expected Io error variant"),
    }
}

#[test]
fn test_not_found_is_distinguished() {
    let err = StatsError::not_found("Player", "BreeDr00");
    assert!(err.is_not_found());
    assert!(!err.is_invalid_parameter());
    assert_eq!(err.kind(), "not_found");
    assert_eq!(err.to_string(), "Player not found: BreeDr00");
}

#[test]
fn test_invalid_parameter_family() {
    let errors = vec![
        StatsError::InvalidSeason {
            value: "19xx".to_string(),
        },
        StatsError::InvalidScope {
            value: "decade".to_string(),
        },
        StatsError::InvalidCategory {
            value: "kicking".to_string(),
        },
        StatsError::InvalidGameType {
            value: "exhibition".to_string(),
        },
        StatsError::InvalidSortStat {
            category: "passing",
            value: "tkl".to_string(),
        },
        StatsError::InvalidParameter {
            name: "season",
            reason: "not applicable".to_string(),
        },
    ];

    for err in errors {
        assert!(err.is_invalid_parameter(), "{err} should be invalid-parameter");
        assert_eq!(err.kind(), "invalid_parameter");
    }
}

#[test]
fn test_error_messages() {
    let err = StatsError::InvalidScope {
        value: "decade".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid scope: decade (expected career, season or game)"
    );

    let err = StatsError::MissingDatabase {
        path: std::path::PathBuf::from("/tmp/none.db"),
    };
    assert_eq!(err.to_string(), "Database not found at /tmp/none.db");
    assert_eq!(err.kind(), "data_store");

    let err = StatsError::Task("cancelled".to_string());
    assert_eq!(err.kind(), "internal");
}

#[test]
fn test_error_debug_format() {
    let err = StatsError::InvalidSeason {
        value: "abc".to_string(),
    };
    let debug_str = format!("{:?}", err);
    assert!(debug_str.contains("InvalidSeason"));
    assert!(debug_str.contains("abc"));
}
