use crate::split::GoldSplit;

pub const TITLE: &str = "=== LOOT SPLIT RESULTS ===";

/// Plain-text summary meant to be pasted into the game chat.
pub fn plain(split: &GoldSplit) -> String {
    let mut lines = vec![TITLE.to_string(), String::new()];
    lines.extend(
        split
            .direct_transfers
            .iter()
            .map(|t| format!("{} to pay {} {} gp", t.from, t.to, t.amount)),
    );
    lines.push(String::new());
    lines.push(format!("total profit: {} gp", split.total_balance));
    lines.push(format!("total for each player: {} gp", split.equal_share));
    if split.remainder != 0 {
        lines.push(format!("undistributed remainder: {} gp", split.remainder));
    }
    lines.push(String::new());
    lines.join("\n")
}

pub fn json(split: &GoldSplit) -> serde_json::Result<String> {
    serde_json::to_string_pretty(split)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Player;
    use crate::roster::PlayerId;
    use crate::split::calculate;

    fn split(balances: &[(&str, i64)]) -> GoldSplit {
        let players: Vec<Player> = balances
            .iter()
            .enumerate()
            .map(|(i, &(name, balance))| Player {
                id: PlayerId(i),
                name: name.to_string(),
                balance,
                ..Player::default()
            })
            .collect();
        calculate(&players).unwrap()
    }

    #[test]
    fn plain_report_lists_transfers_and_totals() {
        let text = plain(&split(&[("Alice", 500), ("Bob", 300)]));
        assert_eq!(
            text,
            "=== LOOT SPLIT RESULTS ===\n\n\
             Alice to pay Bob 100 gp\n\n\
             total profit: 800 gp\n\
             total for each player: 400 gp\n"
        );
    }

    #[test]
    fn remainder_line_only_when_nonzero() {
        let text = plain(&split(&[("A", 10), ("B", 0), ("C", 0)]));
        assert!(text.ends_with("undistributed remainder: 1 gp\n"));
    }

    #[test]
    fn json_has_top_level_fields() {
        let text = json(&split(&[("A", 1)])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        for key in [
            "total_balance",
            "equal_share",
            "remainder",
            "player_transfers",
            "direct_transfers",
            "summary",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
