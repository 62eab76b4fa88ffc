//! # Vesting Wallet Pallet
//!
//! Releases a fixed token allocation to a single beneficiary on a cliff-then-linear schedule.
//!
//! The tokens are held by an account derived from [`Config::PalletId`] and are moved through
//! [`Config::Token`], so the vault account must be allowed to send to the beneficiary under the
//! token's transfer restrictions. Who may trigger a release is decided by
//! [`Config::ReleaseOrigin`].
//!
//! The schedule is set once at genesis and cannot be revoked or changed; only the released
//! amount moves, and only forward.

#![cfg_attr(not(feature = "std"), no_std)]
#![allow(deprecated)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{EnsureOrigin, UnixTime},
    PalletId,
};
use frame_system::pallet_prelude::*;
use pallet_restricted_token::TokenLedger;
use sp_runtime::traits::AccountIdConversion;

pub use pallet::*;
pub use schedule::{ScheduleError, VestingSchedule};
pub use weights::WeightInfo;

pub mod schedule;
pub mod weights;

#[cfg(test)]
mod mock;


const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub const LOG_TARGET: &str = "runtime::vesting-wallet";

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Ledger holding the vested token.
        type Token: TokenLedger<Self::AccountId>;

        /// Wall-clock time source.
        type UnixTime: UnixTime;

        /// Identifier of the vault account that holds the allocation.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Who may call [`Pallet::release`].
        type ReleaseOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    #[pallet::getter(fn schedule)]
    pub type Schedule<T: Config> = StorageValue<_, VestingSchedule<T::AccountId>, OptionQuery>;

    /// Amount released so far. Never decreases and never exceeds the schedule total.
    #[pallet::storage]
    #[pallet::getter(fn released)]
    pub type Released<T> = StorageValue<_, u128, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        TokensReleased { beneficiary: T::AccountId, amount: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// No vesting schedule is configured.
        NoSchedule,
        /// Nothing has vested beyond what was already released.
        NothingToRelease,
        /// The vault holds less than the releasable amount.
        InsufficientFunded,
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
        /// Send everything vested so far and not yet released to the beneficiary.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::release())]
        pub fn release(origin: OriginFor<T>) -> DispatchResult {
            T::ReleaseOrigin::ensure_origin(origin)?;
            let schedule = Schedule::<T>::get().ok_or(Error::<T>::NoSchedule)?;

            let now = Self::now();
            let released = Released::<T>::get();
            let amount = schedule.releasable(released, now);
            ensure!(amount > 0, Error::<T>::NothingToRelease);

            let vault = Self::account_id();
            ensure!(T::Token::balance_of(&vault) >= amount, Error::<T>::InsufficientFunded);

            T::Token::transfer(&vault, &schedule.beneficiary, amount)?;
            Released::<T>::put(released.saturating_add(amount));

            log::debug!(
                target: LOG_TARGET,
                "released {} to {:?} at {}, {} of {} released",
                amount,
                schedule.beneficiary,
                now,
                released.saturating_add(amount),
                schedule.total
            );
            Self::deposit_event(Event::TokensReleased { beneficiary: schedule.beneficiary, amount });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// (beneficiary, total, begin, cliff, end)
        pub schedule: Option<(T::AccountId, u128, u64, u64, u64)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some((beneficiary, total, begin, cliff, end)) = self.schedule.clone() {
                let schedule = VestingSchedule::new(beneficiary, total, begin, cliff, end)
                    .expect("Vesting schedule must satisfy begin <= cliff <= end");
                Schedule::<T>::put(schedule);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account holding the allocation.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn vested_amount(now: u64) -> u128 {
        Schedule::<T>::get().map_or(0, |schedule| schedule.vested_amount(now))
    }

    pub fn releasable(now: u64) -> u128 {
        Schedule::<T>::get().map_or(0, |schedule| schedule.releasable(Released::<T>::get(), now))
    }

    fn now() -> u64 {
        T::UnixTime::now().as_secs()
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let released = Released::<T>::get();
        match Schedule::<T>::get() {
            Some(schedule) => {
                ensure!(released <= schedule.total, "Released more than the schedule total")
            },
            None => ensure!(released == 0, "Released without a schedule"),
        }
        Ok(())
    }
}
