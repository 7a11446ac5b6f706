use serde::Serialize;
use tracing::{debug, info};

use crate::error::{Result, SplitError};
use crate::field::extract;
use crate::number::{find_number, is_numeric_token, parse_number};
use crate::roster::PlayerId;

pub const LEADER_MARKER: &str = "(Leader)";
const BALANCE_LABEL: &str = "Balance:";
const LOOT_LABEL: &str = "Loot:";
const STAT_WORDS: [&str; 5] = ["Loot", "Supplies", "Balance", "Damage", "Healing"];

/// Session header as reported by the hunt analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Party {
    pub session_data: String,
    pub session: String,
    pub loot_type: String,
    pub loot: i64,
    pub supplies: i64,
    pub balance: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub leader: bool,
    pub loot: i64,
    pub supplies: i64,
    pub balance: i64,
    pub damage: i64,
    pub healing: i64,
}

impl Player {
    pub fn display_name(&self) -> String {
        if self.leader {
            format!("{} {}", self.name, LEADER_MARKER)
        } else {
            self.name.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token<'a> {
    text: &'a str,
    offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Label,
    Number,
    Grouped,
    Reserved,
    Leader,
    Word,
}

impl Token<'_> {
    fn kind(&self) -> TokenKind {
        if self.text.contains(':') {
            TokenKind::Label
        } else if is_numeric_token(self.text) {
            TokenKind::Number
        } else if self.text.contains(',') {
            TokenKind::Grouped
        } else if self.text == LEADER_MARKER {
            TokenKind::Leader
        } else if STAT_WORDS.contains(&self.text) {
            TokenKind::Reserved
        } else {
            TokenKind::Word
        }
    }
}

/// Splits `text` on whitespace, keeping each token's byte offset shifted by `base`.
fn tokenize(text: &str, base: usize) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|word| Token {
            text: word,
            offset: base + (word.as_ptr() as usize - text.as_ptr() as usize),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Header,
    ScanningName,
    InStats,
}

/// A player name as it appears in the text, `(Leader)` suffix included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedName {
    pub display: String,
    pub offset: usize,
}

/// Finds player names after the header's `Balance:` field, in order of
/// appearance. A run of words counts as a name only when a `Loot:` label
/// follows it somewhere later in the text.
pub fn scan_player_names(input: &str) -> Vec<ScannedName> {
    let Some(start) = input.find(BALANCE_LABEL) else {
        return Vec::new();
    };
    let tokens = tokenize(&input[start..], start);
    // Index one past the last token carrying a `Loot:` label.
    let loot_bound = tokens
        .iter()
        .rposition(|t| t.text.contains(LOOT_LABEL))
        .map_or(0, |i| i + 1);

    let mut names = Vec::new();
    let mut state = ScanState::Header;
    let mut i = 0;
    while i < tokens.len() {
        let kind = tokens[i].kind();
        match state {
            ScanState::Header => {
                // The first token is always the header's `Balance:` label.
                state = ScanState::ScanningName;
                i += 1;
            }
            ScanState::ScanningName | ScanState::InStats => {
                if kind != TokenKind::Word {
                    i += 1;
                    continue;
                }
                let end = candidate_end(&tokens, i);
                if end < loot_bound {
                    let display = tokens[i..end]
                        .iter()
                        .map(|t| t.text)
                        .collect::<Vec<_>>()
                        .join(" ");
                    names.push(ScannedName {
                        display,
                        offset: tokens[i].offset,
                    });
                    state = ScanState::InStats;
                    i = end;
                } else {
                    debug!(token = tokens[i].text, "discarding name candidate without stats");
                    state = ScanState::ScanningName;
                    i += 1;
                }
            }
        }
    }
    names
}

/// Exclusive end of the name starting at `start`: following words are
/// appended until a label or number, and a `(Leader)` marker closes it.
fn candidate_end(tokens: &[Token<'_>], start: usize) -> usize {
    let mut end = start + 1;
    while let Some(token) = tokens.get(end) {
        match token.kind() {
            TokenKind::Label | TokenKind::Number => break,
            TokenKind::Leader => return end + 1,
            _ => end += 1,
        }
    }
    end
}

fn stat(section: &str, label: &str) -> i64 {
    section
        .find(label)
        .and_then(|idx| find_number(&section[idx + label.len()..]))
        .map_or(0, parse_number)
}

fn parse_player(id: PlayerId, display: &str, section: &str) -> Player {
    let (name, leader) = match display.strip_suffix(LEADER_MARKER) {
        Some(rest) => (rest.trim_end(), true),
        None => (display, false),
    };
    Player {
        id,
        name: name.to_string(),
        leader,
        loot: stat(section, "Loot:"),
        supplies: stat(section, "Supplies:"),
        balance: stat(section, "Balance:"),
        damage: stat(section, "Damage:"),
        healing: stat(section, "Healing:"),
    }
}

/// Parses a party hunt analyzer report into its header and players.
///
/// Missing or malformed fields default to empty strings and zeros; the only
/// failure is a report in which no player block can be recognized.
pub fn parse(input: &str) -> Result<(Party, Vec<Player>)> {
    let names = scan_player_names(input);
    let Some(first) = names.first() else {
        return Err(SplitError::NoPlayersFound);
    };

    let header = &input[..first.offset];
    let party = Party {
        session_data: extract(header, "Session data:", "Session:").to_string(),
        session: extract(header, "Session:", "Loot Type:").to_string(),
        loot_type: extract(header, "Loot Type:", "Loot:").to_string(),
        loot: parse_number(extract(header, "Loot:", "Supplies:")),
        supplies: parse_number(extract(header, "Supplies:", "Balance:")),
        balance: parse_number(extract(header, BALANCE_LABEL, &first.display)),
    };

    let players: Vec<Player> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let end = names.get(i + 1).map_or(input.len(), |next| next.offset);
            parse_player(PlayerId(i), &name.display, &input[name.offset..end])
        })
        .collect();

    info!(
        players = players.len(),
        loot = party.loot,
        supplies = party.supplies,
        balance = party.balance,
        "parsed party analyzer"
    );
    Ok((party, players))
}
