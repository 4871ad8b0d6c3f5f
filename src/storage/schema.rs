//! Database schema and connection management

use crate::error::{Result, StatsError};
use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;
use tracing::debug;

/// Table definitions of the franchise dataset.
///
/// The browsing layer never writes rows; the schema is only created when
/// bootstrapping an empty store (and in tests).
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS games (
    game_id         TEXT PRIMARY KEY,
    season          INTEGER NOT NULL,
    game_date       TEXT NOT NULL,
    day_of_week     TEXT,
    game_type       TEXT NOT NULL,
    opponent        TEXT NOT NULL,
    opponent_abbr   TEXT,
    home_away       TEXT NOT NULL,
    saints_score    INTEGER,
    opponent_score  INTEGER,
    result          TEXT,
    location        TEXT,
    venue           TEXT,
    attendance      INTEGER,
    boxscore_url    TEXT
);

CREATE TABLE IF NOT EXISTS players (
    player_id       TEXT PRIMARY KEY,
    player_name     TEXT NOT NULL,
    pfa_url         TEXT,
    position        TEXT,
    college         TEXT,
    height          TEXT,
    weight          INTEGER,
    birth_date      TEXT,
    fdb_id          TEXT,
    fdb_url         TEXT,
    seasons_text    TEXT
);

CREATE TABLE IF NOT EXISTS player_passing (
    game_id TEXT, player_id TEXT, team TEXT,
    att INT, com INT, pct REAL, int_thrown INT,
    yds INT, avg REAL, lg INT, td INT,
    sacked INT, sacked_yds INT, rtg REAL,
    PRIMARY KEY (game_id, player_id, team)
);

CREATE TABLE IF NOT EXISTS player_rushing (
    game_id TEXT, player_id TEXT, team TEXT,
    att INT, yds INT, avg REAL, lg INT, td INT,
    PRIMARY KEY (game_id, player_id, team)
);

CREATE TABLE IF NOT EXISTS player_receiving (
    game_id TEXT, player_id TEXT, team TEXT,
    tar INT, rec INT, yds INT, avg REAL, lg INT, td INT,
    PRIMARY KEY (game_id, player_id, team)
);

CREATE TABLE IF NOT EXISTS player_defense (
    game_id TEXT, player_id TEXT, team TEXT,
    tkl INT, tfl INT, qh INT, pd INT, ff INT, bl INT,
    PRIMARY KEY (game_id, player_id, team)
);

CREATE TABLE IF NOT EXISTS player_sacks (
    game_id TEXT, player_id TEXT, team TEXT,
    sacks REAL, yds INT,
    PRIMARY KEY (game_id, player_id, team)
);

CREATE TABLE IF NOT EXISTS player_interceptions (
    game_id TEXT, player_id TEXT, team TEXT,
    int_count INT, yds INT, avg REAL, lg INT, td INT,
    PRIMARY KEY (game_id, player_id, team)
);

CREATE TABLE IF NOT EXISTS team_game_stats (
    game_id TEXT, team TEXT,
    rush_att INT, rush_yds INT, rush_td INT,
    pass_att INT, pass_com INT, pass_yds INT, pass_td INT, pass_int INT,
    times_sacked INT, sack_yds_lost INT,
    sacks REAL, interceptions INT,
    punt_count INT, punt_yds INT,
    total_points INT,
    PRIMARY KEY (game_id, team)
);

CREATE TABLE IF NOT EXISTS scoring_plays (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    game_id TEXT, quarter INT, team TEXT,
    description TEXT, saints_score INT, opp_score INT
);

CREATE TABLE IF NOT EXISTS draft_picks (
    season      INTEGER NOT NULL,
    round       INTEGER NOT NULL,
    pick        INTEGER NOT NULL,
    player_name TEXT NOT NULL,
    player_id   TEXT,
    position    TEXT,
    college     TEXT,
    PRIMARY KEY (season, round, pick)
);

CREATE INDEX IF NOT EXISTS idx_games_season ON games(season);
CREATE INDEX IF NOT EXISTS idx_games_date ON games(game_date);
CREATE INDEX IF NOT EXISTS idx_scoring_game ON scoring_plays(game_id);
CREATE INDEX IF NOT EXISTS idx_draft_season ON draft_picks(season);
";

/// SQL function folding a name to lowercase with full Unicode rules.
///
/// SQLite's own `LOWER` only folds ASCII, so `É` would never match `é`.
const FOLD_CASE_FN: &str = "fold_case";

fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        FOLD_CASE_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}

/// Read access to the franchise statistics store.
///
/// One `StatsDatabase` wraps one SQLite connection. Connections are not shared
/// between threads; concurrent page composition opens one per query.
#[derive(Debug)]
pub struct StatsDatabase {
    pub(crate) conn: Connection,
}

impl StatsDatabase {
    /// Open an existing store read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StatsError::MissingDatabase {
                path: path.to_path_buf(),
            });
        }

        debug!(path = %path.display(), "opening statistics database read-only");
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        register_functions(&conn)?;
        Ok(Self { conn })
    }

    /// Open (creating if needed) a writable store and make sure every table exists.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Ensure the parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        register_functions(&conn)?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Create an empty in-memory store with the full schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        register_functions(&conn)?;
        let db = Self { conn };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }
}
