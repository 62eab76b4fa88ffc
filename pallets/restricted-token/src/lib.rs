//! # Restricted Token Pallet
//!
//! A fungible token whose transfers are gated by whitelist groups.
//!
//! - A single **owner** holds root privilege: it appoints administrators, transfers ownership,
//!   and may irreversibly disable all transfer restrictions. The owner is exempt from whitelist
//!   gating when sending.
//! - **Administrators** (and the owner) assign accounts to whitelist groups and maintain the
//!   directed outbound permission matrix between groups.
//! - Every transfer asks [`Pallet::detect_transfer_restriction`] for a decision before balances
//!   are touched; anything other than [`RestrictionCode::Success`] aborts the transfer.
//!
//! The decision logic lives in [`restriction`] and is evaluated over a [`PermissionView`]
//! backed by this pallet's storage.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::TrailingZeroInput;
use sp_std::{marker::PhantomData, prelude::*};

pub use pallet::*;
pub use restriction::{
    message_for_code, PermissionView, RestrictionCode, RestrictionState, WhitelistGroup,
    NO_WHITELIST,
};
pub use traits::TokenLedger;
pub use weights::WeightInfo;

pub mod restriction;
pub mod traits;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::restricted-token";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Sovereign Bond Token")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply, fixed at genesis.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Spending allowances, keyed by (holder, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// The owner. Set at genesis and only ever replaced, never cleared.
    #[pallet::storage]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    pub type Administrators<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

    /// Whitelist group of each account. Absent means [`NO_WHITELIST`].
    #[pallet::storage]
    pub type Whitelists<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, WhitelistGroup, ValueQuery>;

    /// Directed permission matrix keyed by (source group, destination group).
    ///
    /// Only enabled pairs are stored.
    #[pallet::storage]
    pub type OutboundWhitelists<T: Config> =
        StorageMap<_, Twox64Concat, (WhitelistGroup, WhitelistGroup), bool, ValueQuery>;

    #[pallet::storage]
    pub type Restrictions<T: Config> = StorageValue<_, RestrictionState, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        OwnershipTransferred { previous_owner: T::AccountId, new_owner: T::AccountId },
        AdminAdded { admin: T::AccountId, added_by: T::AccountId },
        AdminRemoved { admin: T::AccountId, removed_by: T::AccountId },
        AddressAddedToWhitelist { account: T::AccountId, group: WhitelistGroup, added_by: T::AccountId },
        /// `group` is the group the account held before removal, 0 if none.
        AddressRemovedFromWhitelist {
            account: T::AccountId,
            group: WhitelistGroup,
            removed_by: T::AccountId,
        },
        OutboundWhitelistUpdated {
            updated_by: T::AccountId,
            source: WhitelistGroup,
            destination: WhitelistGroup,
            from: bool,
            to: bool,
        },
        /// Restrictions were switched off for good.
        RestrictionsDisabled { owner: T::AccountId },
        Transfer { from: T::AccountId, to: T::AccountId, amount: u128 },
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller lacks the required role.
        Unauthorized,
        /// Account is already an administrator.
        AlreadyAdmin,
        /// Account is not an administrator.
        NotAdmin,
        /// Invalid whitelist ID supplied.
        InvalidGroup,
        /// Restrictions are already disabled.
        AlreadyDisabled,
        /// New owner is the null account.
        InvalidOwner,
        /// The transfer was restricted due to white list configuration.
        TransferRestricted,
        InsufficientBalance,
        InsufficientAllowance,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Hand root privilege to `new_owner`. Transferring to self is allowed.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(!Self::is_null_account(&new_owner), Error::<T>::InvalidOwner);

            Owner::<T>::put(&new_owner);
            log::debug!(target: LOG_TARGET, "ownership moved from {:?} to {:?}", who, new_owner);
            Self::deposit_event(Event::OwnershipTransferred { previous_owner: who, new_owner });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::add_admin())]
        pub fn add_admin(origin: OriginFor<T>, admin: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(!Administrators::<T>::contains_key(&admin), Error::<T>::AlreadyAdmin);

            Administrators::<T>::insert(&admin, ());
            Self::deposit_event(Event::AdminAdded { admin, added_by: who });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::remove_admin())]
        pub fn remove_admin(origin: OriginFor<T>, admin: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(Administrators::<T>::contains_key(&admin), Error::<T>::NotAdmin);

            Administrators::<T>::remove(&admin);
            Self::deposit_event(Event::AdminRemoved { admin, removed_by: who });
            Ok(())
        }

        /// Place `account` in `group`, replacing any previous assignment.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist())]
        pub fn add_to_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
            group: WhitelistGroup,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner_or_admin(&who)?;
            ensure!(group != NO_WHITELIST, Error::<T>::InvalidGroup);

            let previous = Whitelists::<T>::get(&account);
            Whitelists::<T>::insert(&account, group);

            if previous != NO_WHITELIST {
                Self::deposit_event(Event::AddressRemovedFromWhitelist {
                    account: account.clone(),
                    group: previous,
                    removed_by: who.clone(),
                });
            }
            Self::deposit_event(Event::AddressAddedToWhitelist { account, group, added_by: who });
            Ok(())
        }

        /// Clear the group of `account`. Succeeds even if it had none.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist())]
        pub fn remove_from_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner_or_admin(&who)?;

            let previous = Whitelists::<T>::take(&account);
            Self::deposit_event(Event::AddressRemovedFromWhitelist {
                account,
                group: previous,
                removed_by: who,
            });
            Ok(())
        }

        /// Set whether members of `source` may send to members of `destination`.
        ///
        /// The reverse direction is untouched. Any group id is accepted, including 0.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_outbound_allowed())]
        pub fn set_outbound_allowed(
            origin: OriginFor<T>,
            source: WhitelistGroup,
            destination: WhitelistGroup,
            enabled: bool,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner_or_admin(&who)?;

            let key = (source, destination);
            let previous = OutboundWhitelists::<T>::get(key);
            if enabled {
                OutboundWhitelists::<T>::insert(key, true);
            } else {
                OutboundWhitelists::<T>::remove(key);
            }

            Self::deposit_event(Event::OutboundWhitelistUpdated {
                updated_by: who,
                source,
                destination,
                from: previous,
                to: enabled,
            });
            Ok(())
        }

        /// Turn off every transfer restriction. Cannot be undone.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::disable_restrictions())]
        pub fn disable_restrictions(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;
            ensure!(Restrictions::<T>::get().is_enabled(), Error::<T>::AlreadyDisabled);

            Restrictions::<T>::put(RestrictionState::Disabled);
            log::info!(target: LOG_TARGET, "transfer restrictions disabled by {:?}", who);
            Self::deposit_event(Event::RestrictionsDisabled { owner: who });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            Self::do_transfer(&sender, &to, amount)
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        /// Spend `amount` of `from`'s tokens under the caller's allowance.
        ///
        /// The restriction check is applied to `from` and `to`; the spender's own whitelist
        /// status is irrelevant.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::ensure_transfer_allowed(&from, &to, amount)?;

            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;

            Self::move_balance(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Owner account; receives the whole initial supply.
        pub owner: Option<T::AccountId>,
        pub token_name: Vec<u8>,
        pub token_symbol: Vec<u8>,
        pub decimals: u8,
        pub initial_supply: u128,
        pub administrators: Vec<T::AccountId>,
        /// Accounts placed on a whitelist group at genesis.
        pub whitelisted_accounts: Vec<(T::AccountId, WhitelistGroup)>,
        /// Enabled (source, destination) pairs.
        pub outbound_permissions: Vec<(WhitelistGroup, WhitelistGroup)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let owner = self.owner.clone().expect("Restricted token requires an owner at genesis");
            Owner::<T>::put(&owner);

            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            Balances::<T>::insert(&owner, self.initial_supply);
            TotalSupply::<T>::put(self.initial_supply);

            for admin in &self.administrators {
                Administrators::<T>::insert(admin, ());
            }

            for (account, group) in &self.whitelisted_accounts {
                assert!(*group != NO_WHITELIST, "Whitelist group 0 cannot be assigned");
                Whitelists::<T>::insert(account, group);
            }

            for pair in &self.outbound_permissions {
                OutboundWhitelists::<T>::insert(pair, true);
            }
        }
    }
}

/// [`PermissionView`] over this pallet's storage.
pub struct StoragePermissions<T>(PhantomData<T>);

impl<T: Config> PermissionView<T::AccountId> for StoragePermissions<T> {
    fn restriction_state(&self) -> RestrictionState {
        Restrictions::<T>::get()
    }

    fn is_owner(&self, who: &T::AccountId) -> bool {
        Owner::<T>::get().as_ref() == Some(who)
    }

    fn group_of(&self, who: &T::AccountId) -> WhitelistGroup {
        Whitelists::<T>::get(who)
    }

    fn is_outbound_allowed(&self, source: WhitelistGroup, destination: WhitelistGroup) -> bool {
        OutboundWhitelists::<T>::get((source, destination))
    }
}

impl<T: Config> Pallet<T> {
    pub fn current_owner() -> Option<T::AccountId> {
        Owner::<T>::get()
    }

    pub fn is_administrator(who: &T::AccountId) -> bool {
        Administrators::<T>::contains_key(who)
    }

    pub fn group_of(who: &T::AccountId) -> WhitelistGroup {
        Whitelists::<T>::get(who)
    }

    pub fn is_outbound_allowed(source: WhitelistGroup, destination: WhitelistGroup) -> bool {
        OutboundWhitelists::<T>::get((source, destination))
    }

    pub fn is_restriction_enabled() -> bool {
        Restrictions::<T>::get().is_enabled()
    }

    pub fn check_whitelist_allowed(from: &T::AccountId, to: &T::AccountId) -> bool {
        restriction::check_whitelist_allowed(&Self::permissions(), from, to)
    }

    /// Restriction decision for a prospective transfer. `amount` does not affect the outcome.
    pub fn detect_transfer_restriction(
        from: &T::AccountId,
        to: &T::AccountId,
        _amount: u128,
    ) -> RestrictionCode {
        restriction::detect_transfer_restriction(&Self::permissions(), from, to)
    }

    pub fn message_for_transfer_restriction(code: u8) -> &'static str {
        message_for_code(code)
    }

    fn permissions() -> StoragePermissions<T> {
        StoragePermissions(PhantomData)
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        ensure!(Owner::<T>::get().as_ref() == Some(who), Error::<T>::Unauthorized);
        Ok(())
    }

    fn ensure_owner_or_admin(who: &T::AccountId) -> DispatchResult {
        ensure!(
            Owner::<T>::get().as_ref() == Some(who) || Administrators::<T>::contains_key(who),
            Error::<T>::Unauthorized
        );
        Ok(())
    }

    fn is_null_account(who: &T::AccountId) -> bool {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes()).map_or(false, |zero| *who == zero)
    }

    pub(crate) fn ensure_transfer_allowed(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        let code = Self::detect_transfer_restriction(from, to, amount);
        if !code.is_success() {
            log::warn!(
                target: LOG_TARGET,
                "transfer {:?} -> {:?} rejected: {}",
                from,
                to,
                code.message()
            );
            return Err(Error::<T>::TransferRestricted.into());
        }
        Ok(())
    }

    pub(crate) fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::ensure_transfer_allowed(from, to, amount)?;
        Self::move_balance(from, to, amount)
    }

    fn move_balance(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        let from_balance = Balances::<T>::get(from);
        let new_from = from_balance.checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let new_to = Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, new_from);
            Balances::<T>::insert(to, new_to);
        }

        Self::deposit_event(Event::Transfer { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        ensure!(Owner::<T>::exists(), "Owner must always be set");

        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("Sum of balances overflows")?;
        ensure!(sum == TotalSupply::<T>::get(), "Total supply differs from the sum of balances");
        Ok(())
    }
}

impl<T: Config> TokenLedger<T::AccountId> for Pallet<T> {
    fn balance_of(who: &T::AccountId) -> u128 {
        Balances::<T>::get(who)
    }

    fn transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        Self::do_transfer(from, to, amount)
    }
}
