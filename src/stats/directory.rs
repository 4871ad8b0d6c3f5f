//! Player directory search

use crate::error::Result;
use crate::storage::{PlayerSummary, StatsDatabase};
use rusqlite::ToSql;
use tracing::debug;

/// Case-folded LIKE pattern; wildcards in the fragment match literally.
fn like_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.trim().to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl StatsDatabase {
    /// Recognized players whose name contains `fragment`, case-insensitively.
    ///
    /// The season span only looks at passing, rushing and receiving
    /// appearances (any game type); players with defensive rows only get no
    /// span.
    pub fn search_players(&self, fragment: &str, limit: Option<u32>) -> Result<Vec<PlayerSummary>> {
        debug!(fragment, ?limit, "search_players");
        let mut query = String::from(
            "SELECT p.player_id, p.player_name, p.position, MIN(g.season), MAX(g.season)
             FROM players p
             LEFT JOIN (
                 SELECT player_id, game_id FROM player_passing
                 UNION SELECT player_id, game_id FROM player_rushing
                 UNION SELECT player_id, game_id FROM player_receiving
             ) a ON a.player_id = p.player_id
             LEFT JOIN games g ON g.game_id = a.game_id
             WHERE p.pfa_url IS NOT NULL
               AND fold_case(p.player_name) LIKE ? ESCAPE '\\'
             GROUP BY p.player_id
             ORDER BY p.player_name, p.player_id",
        );
        let mut params: Vec<Box<dyn ToSql>> = vec![Box::new(like_pattern(fragment))];

        if let Some(limit) = limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(limit));
        }

        self.query_rows(&query, &params, |row| {
            Ok(PlayerSummary {
                player_id: row.get(0)?,
                player_name: row.get(1)?,
                position: row.get(2)?,
                first_season: row.get(3)?,
                last_season: row.get(4)?,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern(" Brees "), "%brees%");
        assert_eq!(like_pattern("50%_"), "%50\\%\\_%");
    }
}
