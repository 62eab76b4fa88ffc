//! Transfer restriction policy.
//!
//! The decision is computed over a [`PermissionView`]. The pallet implements the view on top of
//! its storage; the algorithm itself never touches storage, so it can be exercised against plain
//! in-memory state.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Identifier of a whitelist cohort.
pub type WhitelistGroup = u8;

/// Group id meaning "not on any whitelist". Never assignable.
pub const NO_WHITELIST: WhitelistGroup = 0;

pub const SUCCESS_CODE: u8 = 0;
pub const FAILURE_NON_WHITELIST: u8 = 1;

pub const SUCCESS_MESSAGE: &str = "SUCCESS";
pub const FAILURE_NON_WHITELIST_MESSAGE: &str =
    "The transfer was restricted due to white list configuration.";
pub const UNKNOWN_ERROR: &str = "Unknown Error Code";

/// Global restriction switch.
///
/// `Disabled` is terminal: there is no transition back to `Enabled`.
#[derive(Clone, Copy, PartialEq, Eq, Default, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum RestrictionState {
    #[default]
    Enabled,
    Disabled,
}

impl RestrictionState {
    pub fn is_enabled(self) -> bool {
        self == RestrictionState::Enabled
    }
}

/// Outcome of a transfer restriction check.
///
/// Callers inspect the code before any balance mutation.
#[derive(Clone, Copy, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub enum RestrictionCode {
    Success,
    NonWhitelist,
}

impl RestrictionCode {
    /// Numeric code exposed to clients.
    pub const fn code(self) -> u8 {
        match self {
            RestrictionCode::Success => SUCCESS_CODE,
            RestrictionCode::NonWhitelist => FAILURE_NON_WHITELIST,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, RestrictionCode::Success)
    }

    pub const fn message(self) -> &'static str {
        message_for_code(self.code())
    }
}

impl From<RestrictionCode> for u8 {
    fn from(code: RestrictionCode) -> u8 {
        code.code()
    }
}

/// Human readable text for any restriction code. Total over `u8`.
pub const fn message_for_code(code: u8) -> &'static str {
    match code {
        SUCCESS_CODE => SUCCESS_MESSAGE,
        FAILURE_NON_WHITELIST => FAILURE_NON_WHITELIST_MESSAGE,
        _ => UNKNOWN_ERROR,
    }
}

/// Read access to the authorization state consulted by the restriction policy.
pub trait PermissionView<AccountId> {
    fn restriction_state(&self) -> RestrictionState;

    fn is_owner(&self, who: &AccountId) -> bool;

    /// Group of `who`, [`NO_WHITELIST`] when unassigned.
    fn group_of(&self, who: &AccountId) -> WhitelistGroup;

    fn is_outbound_allowed(&self, source: WhitelistGroup, destination: WhitelistGroup) -> bool;
}

/// Both parties grouped and the directed `(sender group, recipient group)` pair enabled.
///
/// Independent of the restriction switch and of ownership.
pub fn check_whitelist_allowed<AccountId, V>(view: &V, from: &AccountId, to: &AccountId) -> bool
where
    V: PermissionView<AccountId> + ?Sized,
{
    let source = view.group_of(from);
    if source == NO_WHITELIST {
        return false;
    }
    let destination = view.group_of(to);
    destination != NO_WHITELIST && view.is_outbound_allowed(source, destination)
}

/// Decide whether a transfer from `from` to `to` may proceed.
///
/// Order matters: a disabled switch wins over everything, then the owner is exempt as a sender,
/// then the whitelist matrix decides.
pub fn detect_transfer_restriction<AccountId, V>(
    view: &V,
    from: &AccountId,
    to: &AccountId,
) -> RestrictionCode
where
    V: PermissionView<AccountId> + ?Sized,
{
    if !view.restriction_state().is_enabled() {
        return RestrictionCode::Success;
    }
    if view.is_owner(from) {
        return RestrictionCode::Success;
    }
    if check_whitelist_allowed(view, from, to) {
        RestrictionCode::Success
    } else {
        RestrictionCode::NonWhitelist
    }
}
