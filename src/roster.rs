use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::analyzer::Player;

/// Position of a player in the analyzer text. Stable across removals, so two
/// players sharing a display name stay distinguishable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PlayerId(pub usize);

/// Drops every player whose name is listed, preserving the order of the rest.
pub fn without_names<S: AsRef<str>>(players: &[Player], names: &[S]) -> Vec<Player> {
    let names: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
    let remaining: Vec<Player> = players
        .iter()
        .filter(|p| !names.contains(p.name.as_str()))
        .cloned()
        .collect();
    debug!(removed = players.len() - remaining.len(), "filtered players by name");
    remaining
}

/// Drops the players with the given ids, preserving the order of the rest.
pub fn without_ids(players: &[Player], ids: &HashSet<PlayerId>) -> Vec<Player> {
    players
        .iter()
        .filter(|p| !ids.contains(&p.id))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: usize, name: &str) -> Player {
        Player {
            id: PlayerId(id),
            name: name.to_string(),
            ..Player::default()
        }
    }

    #[test]
    fn removes_by_name_in_order() {
        let players = vec![player(0, "Ann"), player(1, "Ben"), player(2, "Cid")];
        let left = without_names(&players, &["Ben"]);
        let names: Vec<_> = left.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Cid"]);
    }

    #[test]
    fn unknown_names_are_ignored() {
        let players = vec![player(0, "Ann")];
        assert_eq!(without_names(&players, &["Zed"]), players);
        assert_eq!(without_names::<&str>(&players, &[]), players);
    }

    #[test]
    fn ids_separate_duplicate_names() {
        let players = vec![player(0, "Ann"), player(1, "Ann"), player(2, "Ben")];
        let left = without_ids(&players, &HashSet::from([PlayerId(1)]));
        assert_eq!(left.iter().map(|p| p.id).collect::<Vec<_>>(), [PlayerId(0), PlayerId(2)]);

        // By name both copies go.
        assert_eq!(without_names(&players, &["Ann"]).len(), 1);
    }
}
