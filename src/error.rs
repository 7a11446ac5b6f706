use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// The analyzer text had no block the name scanner could accept.
    #[error("no players found on party analyzer")]
    NoPlayersFound,

    /// Every player was removed before the split.
    #[error("cannot split loot between zero players")]
    EmptyPlayerSet,

    /// A total or per-player difference does not fit in 64 bits.
    #[error("gold amounts exceed the supported range")]
    BalanceOverflow,
}

pub type Result<T> = std::result::Result<T, SplitError>;
