use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::roster::PlayerId;
use crate::split::{DirectTransfer, PlayerTransfer};

/// What one side of the settlement still has to pay or collect.
#[derive(Debug, PartialEq, Eq)]
struct Outstanding<'a> {
    amount: i64,
    name: &'a str,
    id: PlayerId,
}

// Largest amount first; ties go to the alphabetically first name, then the
// earlier player.
impl Ord for Outstanding<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.amount
            .cmp(&other.amount)
            .then_with(|| other.name.cmp(self.name))
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Outstanding<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nets debtors against creditors, always pairing the largest remaining debt
/// with the largest remaining claim.
pub fn settle(transfers: &[PlayerTransfer]) -> Vec<DirectTransfer> {
    let mut debtors = BinaryHeap::new();
    let mut creditors = BinaryHeap::new();
    for t in transfers {
        let outstanding = |amount| Outstanding {
            amount,
            name: t.player.name.as_str(),
            id: t.player.id,
        };
        match t.transfer_amount.cmp(&0) {
            Ordering::Greater => debtors.push(outstanding(t.transfer_amount)),
            Ordering::Less => creditors.push(outstanding(t.transfer_amount.saturating_neg())),
            Ordering::Equal => {}
        }
    }

    let mut direct = Vec::with_capacity(debtors.len() + creditors.len());
    while let (Some(mut debtor), Some(mut creditor)) = (debtors.pop(), creditors.pop()) {
        let amount = debtor.amount.min(creditor.amount);
        debug!(from = debtor.name, to = creditor.name, amount, "matched transfer");
        direct.push(DirectTransfer {
            from: debtor.name.to_string(),
            to: creditor.name.to_string(),
            amount,
        });

        debtor.amount -= amount;
        creditor.amount -= amount;
        if debtor.amount > 0 {
            debtors.push(debtor);
        }
        if creditor.amount > 0 {
            creditors.push(creditor);
        }
    }
    direct
}
