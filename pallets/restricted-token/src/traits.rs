//! Ledger interface offered to other pallets.

use frame_support::dispatch::DispatchResult;

/// Balance access for pallets that hold and move tokens on their own behalf.
pub trait TokenLedger<AccountId> {
    fn balance_of(who: &AccountId) -> u128;

    /// Move `amount` from `from` to `to`.
    ///
    /// Goes through the same restriction check as a user initiated transfer; no allowance is
    /// consumed.
    fn transfer(from: &AccountId, to: &AccountId, amount: u128) -> DispatchResult;
}
