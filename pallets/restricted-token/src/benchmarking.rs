//! Benchmarking setup for pallet-restricted-token

use super::*;

#[allow(unused)]
use crate::Pallet as RestrictedToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Install `who` as owner, bypassing genesis.
fn set_owner<T: Config>(who: &T::AccountId) {
    Owner::<T>::put(who);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer_ownership() {
        let caller: T::AccountId = whitelisted_caller();
        let new_owner: T::AccountId = account("new_owner", 0, 1);
        set_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner));
    }

    #[benchmark]
    fn add_admin() {
        let caller: T::AccountId = whitelisted_caller();
        let admin: T::AccountId = account("admin", 0, 1);
        set_owner::<T>(&caller);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), admin.clone());

        assert!(Administrators::<T>::contains_key(&admin));
    }

    #[benchmark]
    fn remove_admin() {
        let caller: T::AccountId = whitelisted_caller();
        let admin: T::AccountId = account("admin", 0, 1);
        set_owner::<T>(&caller);
        Administrators::<T>::insert(&admin, ());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), admin.clone());

        assert!(!Administrators::<T>::contains_key(&admin));
    }

    #[benchmark]
    fn add_to_whitelist() {
        // Worst case: caller is an administrator and the account is moved between groups.
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 1);
        Administrators::<T>::insert(&caller, ());
        Whitelists::<T>::insert(&target, 1);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone(), 2);

        assert_eq!(Whitelists::<T>::get(&target), 2);
    }

    #[benchmark]
    fn remove_from_whitelist() {
        let caller: T::AccountId = whitelisted_caller();
        let target: T::AccountId = account("target", 0, 1);
        Administrators::<T>::insert(&caller, ());
        Whitelists::<T>::insert(&target, 1);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), target.clone());

        assert_eq!(Whitelists::<T>::get(&target), NO_WHITELIST);
    }

    #[benchmark]
    fn set_outbound_allowed() {
        let caller: T::AccountId = whitelisted_caller();
        Administrators::<T>::insert(&caller, ());

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), 20, 30, true);

        assert!(OutboundWhitelists::<T>::get((20u8, 30u8)));
    }

    #[benchmark]
    fn disable_restrictions() {
        let caller: T::AccountId = whitelisted_caller();
        set_owner::<T>(&caller);
        Restrictions::<T>::kill();

        #[extrinsic_call]
        _(RawOrigin::Signed(caller));

        assert_eq!(Restrictions::<T>::get(), RestrictionState::Disabled);
    }

    #[benchmark]
    fn transfer() {
        // Worst case: restrictions enabled, sender is not the owner, full whitelist lookup.
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 1);
        let amount: u128 = 1_000_000;
        Restrictions::<T>::kill();
        Whitelists::<T>::insert(&caller, 1);
        Whitelists::<T>::insert(&recipient, 1);
        OutboundWhitelists::<T>::insert((1u8, 1u8), true);
        Balances::<T>::insert(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 1);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn transfer_from() {
        let caller: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 1);
        let recipient: T::AccountId = account("recipient", 0, 2);
        let amount: u128 = 1_000_000;
        Restrictions::<T>::kill();
        Whitelists::<T>::insert(&holder, 1);
        Whitelists::<T>::insert(&recipient, 1);
        OutboundWhitelists::<T>::insert((1u8, 1u8), true);
        Balances::<T>::insert(&holder, 10_000_000);
        Allowances::<T>::insert(&holder, &caller, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), holder.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&holder, &caller), 0);
    }

    impl_benchmark_test_suite!(RestrictedToken, crate::mock::new_test_ext(), crate::mock::Test);
}
