//! Database location resolution

use crate::DB_PATH_ENV_VAR;
use std::path::PathBuf;

/// File name of the franchise database.
pub const DATABASE_FILE: &str = "saints_encyclopedia.db";

/// Path: <data dir>/saints-stats/saints_encyclopedia.db
pub fn default_database_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("saints-stats").join(DATABASE_FILE)
}

/// Resolve the database path from the `--db` option, then the environment
/// variable, then the platform data directory.
pub fn resolve_database_path(db: Option<PathBuf>) -> PathBuf {
    db.or_else(|| {
        std::env::var_os(DB_PATH_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
    .unwrap_or_else(default_database_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_option() {
        let path = resolve_database_path(Some(PathBuf::from("/tmp/saints.db")));
        assert_eq!(path, PathBuf::from("/tmp/saints.db"));
    }

    #[test]
    fn test_resolve_from_env_then_default() {
        std::env::set_var(DB_PATH_ENV_VAR, "/data/franchise.db");
        assert_eq!(resolve_database_path(None), PathBuf::from("/data/franchise.db"));

        // An empty variable counts as unset
        std::env::set_var(DB_PATH_ENV_VAR, "");
        assert_eq!(resolve_database_path(None), default_database_path());

        std::env::remove_var(DB_PATH_ENV_VAR);
    }

    #[test]
    fn test_default_path_layout() {
        let path = default_database_path();
        assert!(path.ends_with("saints-stats/saints_encyclopedia.db"));
    }
}
