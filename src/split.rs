use serde::Serialize;
use tracing::info;

use crate::analyzer::Player;
use crate::error::{Result, SplitError};
use crate::settle::settle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Owes,
    Receives,
    Balanced,
}

impl Status {
    fn of(transfer_amount: i64) -> Self {
        match transfer_amount {
            n if n > 0 => Status::Owes,
            n if n < 0 => Status::Receives,
            _ => Status::Balanced,
        }
    }
}

/// A player together with what they must hand over (positive) or collect
/// (negative) to end up at the equal share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTransfer {
    #[serde(flatten)]
    pub player: Player,
    pub transfer_amount: i64,
    pub final_balance: i64,
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectTransfer {
    pub from: String,
    pub to: String,
    pub amount: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransferSummary {
    pub total_owed: i64,
    pub total_received: i64,
    pub players_owing: usize,
    pub players_receiving: usize,
    pub transfer_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoldSplit {
    pub total_balance: i64,
    pub equal_share: i64,
    /// Part of the total that integer division leaves with nobody.
    pub remainder: i64,
    pub player_transfers: Vec<PlayerTransfer>,
    pub direct_transfers: Vec<DirectTransfer>,
    pub summary: TransferSummary,
}

/// Splits the combined balance of `players` evenly and works out who pays whom.
///
/// The share is truncated; the leftover stays undistributed and is reported as
/// [`GoldSplit::remainder`].
pub fn calculate(players: &[Player]) -> Result<GoldSplit> {
    if players.is_empty() {
        return Err(SplitError::EmptyPlayerSet);
    }

    let total_balance = players
        .iter()
        .try_fold(0i64, |acc, p| acc.checked_add(p.balance))
        .ok_or(SplitError::BalanceOverflow)?;
    let count = players.len() as i64;
    let equal_share = total_balance / count;
    let remainder = total_balance - equal_share * count;

    let mut summary = TransferSummary::default();
    let mut player_transfers = Vec::with_capacity(players.len());
    for player in players {
        let transfer_amount = player
            .balance
            .checked_sub(equal_share)
            .ok_or(SplitError::BalanceOverflow)?;
        let status = Status::of(transfer_amount);
        match status {
            Status::Owes => {
                summary.total_owed = summary
                    .total_owed
                    .checked_add(transfer_amount)
                    .ok_or(SplitError::BalanceOverflow)?;
                summary.players_owing += 1;
            }
            Status::Receives => {
                summary.total_received = transfer_amount
                    .checked_neg()
                    .and_then(|claim| summary.total_received.checked_add(claim))
                    .ok_or(SplitError::BalanceOverflow)?;
                summary.players_receiving += 1;
            }
            Status::Balanced => {}
        }
        player_transfers.push(PlayerTransfer {
            player: player.clone(),
            transfer_amount,
            final_balance: equal_share,
            status,
        });
    }

    let direct_transfers = settle(&player_transfers);
    summary.transfer_count = direct_transfers.len();

    info!(
        players = players.len(),
        total_balance,
        equal_share,
        remainder,
        transfers = summary.transfer_count,
        "calculated gold split"
    );

    Ok(GoldSplit {
        total_balance,
        equal_share,
        remainder,
        player_transfers,
        direct_transfers,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::PlayerId;

    fn players(balances: &[i64]) -> Vec<Player> {
        balances
            .iter()
            .enumerate()
            .map(|(i, &balance)| Player {
                id: PlayerId(i),
                name: format!("P{i}"),
                balance,
                ..Player::default()
            })
            .collect()
    }

    #[test]
    fn empty_player_set_is_an_error() {
        assert_eq!(calculate(&[]), Err(SplitError::EmptyPlayerSet));
    }

    #[test]
    fn totals_beyond_i64_are_an_error() {
        let big = 9_000_000_000_000_000_000;
        assert_eq!(calculate(&players(&[big, big])), Err(SplitError::BalanceOverflow));
        assert_eq!(
            calculate(&players(&[i64::MAX, i64::MIN, i64::MIN])),
            Err(SplitError::BalanceOverflow)
        );
    }

    #[test]
    fn large_balances_within_range_still_split() {
        let split = calculate(&players(&[i64::MAX - 1, 1])).unwrap();
        assert_eq!(split.total_balance, i64::MAX);
        assert_eq!(split.equal_share, i64::MAX / 2);
        assert_eq!(split.remainder, 1);
        assert_eq!(split.direct_transfers.len(), 1);
    }

    #[test]
    fn equal_share_and_transfer_amounts() {
        let split = calculate(&players(&[500, 300, 100])).unwrap();
        assert_eq!(split.total_balance, 900);
        assert_eq!(split.equal_share, 300);
        assert_eq!(split.remainder, 0);

        let amounts: Vec<_> = split.player_transfers.iter().map(|t| t.transfer_amount).collect();
        assert_eq!(amounts, [200, 0, -200]);
        let statuses: Vec<_> = split.player_transfers.iter().map(|t| t.status).collect();
        assert_eq!(statuses, [Status::Owes, Status::Balanced, Status::Receives]);
        assert!(split.player_transfers.iter().all(|t| t.final_balance == 300));

        assert_eq!(split.summary.total_owed, 200);
        assert_eq!(split.summary.total_received, 200);
        assert_eq!(split.summary.players_owing, 1);
        assert_eq!(split.summary.players_receiving, 1);
        assert_eq!(split.summary.transfer_count, 1);
    }

    #[test]
    fn remainder_is_reported_not_distributed() {
        let split = calculate(&players(&[10, 0, 0])).unwrap();
        assert_eq!(split.equal_share, 3);
        assert_eq!(split.remainder, 1);

        let sum: i64 = split.player_transfers.iter().map(|t| t.transfer_amount).sum();
        assert_eq!(sum, split.remainder);
        let paid: i64 = split.direct_transfers.iter().map(|t| t.amount).sum();
        assert_eq!(paid, 6);
    }

    #[test]
    fn negative_total_truncates_toward_zero() {
        let split = calculate(&players(&[-10, 0, 0])).unwrap();
        assert_eq!(split.equal_share, -3);
        assert_eq!(split.remainder, -1);
    }

    #[test]
    fn single_player_is_balanced() {
        let split = calculate(&players(&[1234])).unwrap();
        assert_eq!(split.equal_share, 1234);
        assert_eq!(split.player_transfers[0].status, Status::Balanced);
        assert!(split.direct_transfers.is_empty());
    }

    #[test]
    fn serializes_with_snake_case_fields() {
        let split = calculate(&players(&[300, 100])).unwrap();
        let value = serde_json::to_value(&split).unwrap();
        assert_eq!(value["total_balance"], 400);
        assert_eq!(value["equal_share"], 200);
        assert_eq!(value["player_transfers"][0]["name"], "P0");
        assert_eq!(value["player_transfers"][0]["status"], "owes");
        assert_eq!(value["player_transfers"][1]["transfer_amount"], -100);
        assert_eq!(value["direct_transfers"][0]["from"], "P0");
        assert_eq!(value["direct_transfers"][0]["to"], "P1");
        assert_eq!(value["summary"]["transfer_count"], 1);
    }
}
