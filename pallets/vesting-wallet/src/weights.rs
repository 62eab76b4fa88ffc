//! Weights for pallet-vesting-wallet.

#![allow(unused_parens)]
#![allow(unused_imports)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};
use sp_std::marker::PhantomData;

pub trait WeightInfo {
    fn release() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Schedule, Released, Timestamp, vault balance, plus the restricted transfer
    // (Restrictions, Owner, Whitelists x2, OutboundWhitelists, Balances x2).
    // Writes: Released, Balances x2.
    fn release() -> Weight {
        Weight::from_parts(38_000_000, 7_802).saturating_add(T::DbWeight::get().reads_writes(11, 3))
    }
}

impl WeightInfo for () {
    fn release() -> Weight {
        Weight::from_parts(38_000_000, 7_802).saturating_add(RocksDbWeight::get().reads_writes(11, 3))
    }
}
