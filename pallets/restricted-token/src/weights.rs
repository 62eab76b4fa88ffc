//! Weights for pallet-restricted-token.
//!
//! Placeholder values sized from the storage accesses of each call until the `runtime-benchmarks`
//! output is wired in.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn transfer_ownership() -> Weight;
    fn add_admin() -> Weight;
    fn remove_admin() -> Weight;
    fn add_to_whitelist() -> Weight;
    fn remove_from_whitelist() -> Weight;
    fn set_outbound_allowed() -> Weight;
    fn disable_restrictions() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Owner. Writes: Owner.
    fn transfer_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_517).saturating_add(T::DbWeight::get().reads_writes(1, 1))
    }
    // Reads: Owner, Administrators. Writes: Administrators.
    fn add_admin() -> Weight {
        Weight::from_parts(11_000_000, 3_505).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    fn remove_admin() -> Weight {
        Weight::from_parts(11_000_000, 3_505).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    // Reads: Owner, Administrators, Whitelists. Writes: Whitelists.
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(13_000_000, 3_506).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(13_000_000, 3_506).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    // Reads: Owner, Administrators, OutboundWhitelists. Writes: OutboundWhitelists.
    fn set_outbound_allowed() -> Weight {
        Weight::from_parts(12_000_000, 3_498).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    // Reads: Owner, Restrictions. Writes: Restrictions.
    fn disable_restrictions() -> Weight {
        Weight::from_parts(8_000_000, 1_517).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    // Reads: Restrictions, Owner, Whitelists x2, OutboundWhitelists, Balances x2.
    // Writes: Balances x2.
    fn transfer() -> Weight {
        Weight::from_parts(24_000_000, 6_196).saturating_add(T::DbWeight::get().reads_writes(7, 2))
    }
    // Writes: Allowances.
    fn approve() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().writes(1))
    }
    // transfer plus Allowances read and write.
    fn transfer_from() -> Weight {
        Weight::from_parts(29_000_000, 6_196).saturating_add(T::DbWeight::get().reads_writes(8, 3))
    }
}

impl WeightInfo for () {
    fn transfer_ownership() -> Weight {
        Weight::from_parts(9_000_000, 1_517).saturating_add(RocksDbWeight::get().reads_writes(1, 1))
    }
    fn add_admin() -> Weight {
        Weight::from_parts(11_000_000, 3_505).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn remove_admin() -> Weight {
        Weight::from_parts(11_000_000, 3_505).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(13_000_000, 3_506).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(13_000_000, 3_506).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn set_outbound_allowed() -> Weight {
        Weight::from_parts(12_000_000, 3_498).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn disable_restrictions() -> Weight {
        Weight::from_parts(8_000_000, 1_517).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn transfer() -> Weight {
        Weight::from_parts(24_000_000, 6_196).saturating_add(RocksDbWeight::get().reads_writes(7, 2))
    }
    fn approve() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().writes(1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(29_000_000, 6_196).saturating_add(RocksDbWeight::get().reads_writes(8, 3))
    }
}
