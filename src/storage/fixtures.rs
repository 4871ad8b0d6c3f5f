//! Seeding helpers for unit tests. The browsing layer itself never writes.

#![allow(clippy::too_many_arguments)]

use super::schema::StatsDatabase;
use rusqlite::params;

pub(crate) const TEAM: &str = "New Orleans Saints";

pub(crate) fn test_db() -> StatsDatabase {
    StatsDatabase::open_in_memory().unwrap()
}

impl StatsDatabase {
    pub(crate) fn seed_game(
        &self,
        game_id: &str,
        season: u16,
        date: &str,
        game_type: &str,
        saints_score: Option<i64>,
        opponent_score: Option<i64>,
    ) {
        let result = match (saints_score, opponent_score) {
            (Some(a), Some(b)) if a > b => Some("W"),
            (Some(a), Some(b)) if a < b => Some("L"),
            (Some(_), Some(_)) => Some("T"),
            _ => None,
        };
        self.conn
            .execute(
                "INSERT INTO games (game_id, season, game_date, game_type, opponent, home_away,
                                    saints_score, opponent_score, result)
                 VALUES (?, ?, ?, ?, 'Atlanta Falcons', 'home', ?, ?, ?)",
                params![game_id, season, date, game_type, saints_score, opponent_score, result],
            )
            .unwrap();
    }

    pub(crate) fn seed_player(&self, player_id: &str, name: &str, recognized: bool) {
        let url = recognized.then(|| format!("https://pfa.example/{player_id}"));
        self.conn
            .execute(
                "INSERT INTO players (player_id, player_name, pfa_url, position) VALUES (?, ?, ?, 'QB')",
                params![player_id, name, url],
            )
            .unwrap();
    }

    pub(crate) fn seed_passing(&self, game_id: &str, player_id: &str, att: i64, com: i64, yds: i64, td: i64, int_thrown: i64) {
        self.conn
            .execute(
                "INSERT INTO player_passing (game_id, player_id, team, att, com, int_thrown, yds, lg, td, sacked, sacked_yds)
                 VALUES (?, ?, ?, ?, ?, ?, ?, 40, ?, 1, 7)",
                params![game_id, player_id, TEAM, att, com, int_thrown, yds, td],
            )
            .unwrap();
    }

    pub(crate) fn seed_rushing(&self, game_id: &str, player_id: &str, att: i64, yds: i64, td: i64, lg: i64) {
        self.conn
            .execute(
                "INSERT INTO player_rushing (game_id, player_id, team, att, yds, lg, td)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
                params![game_id, player_id, TEAM, att, yds, lg, td],
            )
            .unwrap();
    }

    pub(crate) fn seed_receiving(&self, game_id: &str, player_id: &str, tar: Option<i64>, rec: i64, yds: i64, td: i64) {
        self.conn
            .execute(
                "INSERT INTO player_receiving (game_id, player_id, team, tar, rec, yds, lg, td)
                 VALUES (?, ?, ?, ?, ?, ?, 25, ?)",
                params![game_id, player_id, TEAM, tar, rec, yds, td],
            )
            .unwrap();
    }

    pub(crate) fn seed_defense(&self, game_id: &str, player_id: &str, tkl: i64, tfl: i64) {
        self.conn
            .execute(
                "INSERT INTO player_defense (game_id, player_id, team, tkl, tfl, qh, pd, ff, bl)
                 VALUES (?, ?, ?, ?, ?, 1, 1, 0, 0)",
                params![game_id, player_id, TEAM, tkl, tfl],
            )
            .unwrap();
    }

    pub(crate) fn seed_sacks(&self, game_id: &str, player_id: &str, sacks: f64) {
        self.conn
            .execute(
                "INSERT INTO player_sacks (game_id, player_id, team, sacks, yds) VALUES (?, ?, ?, ?, 8)",
                params![game_id, player_id, TEAM, sacks],
            )
            .unwrap();
    }

    pub(crate) fn seed_interceptions(&self, game_id: &str, player_id: &str, int_count: i64, yds: i64) {
        self.conn
            .execute(
                "INSERT INTO player_interceptions (game_id, player_id, team, int_count, yds, td)
                 VALUES (?, ?, ?, ?, ?, 0)",
                params![game_id, player_id, TEAM, int_count, yds],
            )
            .unwrap();
    }

    pub(crate) fn seed_team_stats(&self, game_id: &str, team: &str, rush_yds: i64, pass_yds: i64, points: i64) {
        self.conn
            .execute(
                "INSERT INTO team_game_stats (game_id, team, rush_att, rush_yds, pass_att, pass_yds, sacks, total_points)
                 VALUES (?, ?, 25, ?, 30, ?, 2.5, ?)",
                params![game_id, team, rush_yds, pass_yds, points],
            )
            .unwrap();
    }

    pub(crate) fn seed_scoring_play(&self, game_id: &str, quarter: i64, description: &str) {
        self.conn
            .execute(
                "INSERT INTO scoring_plays (game_id, quarter, team, description, saints_score, opp_score)
                 VALUES (?, ?, ?, ?, 7, 0)",
                params![game_id, quarter, TEAM, description],
            )
            .unwrap();
    }

    pub(crate) fn seed_draft_pick(&self, season: u16, round: i64, pick: i64, name: &str, player_id: Option<&str>) {
        self.conn
            .execute(
                "INSERT INTO draft_picks (season, round, pick, player_name, player_id, position, college)
                 VALUES (?, ?, ?, ?, ?, 'QB', 'Purdue')",
                params![season, round, pick, name, player_id],
            )
            .unwrap();
    }
}
