#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn transfer() -> Weight;
	fn transfer_from() -> Weight;
	fn approve() -> Weight;
	fn burn() -> Weight;
	fn set_excluded() -> Weight;
	fn set_designated_pair() -> Weight;
	fn set_treasury() -> Weight;
	fn set_venue_adapter() -> Weight;
	fn burn_tax_tokens() -> Weight;
	fn force_convert() -> Weight;
	fn deposit_reference() -> Weight;
	fn transfer_ownership() -> Weight;
	fn renounce_ownership() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn transfer() -> Weight {
		Weight::from_parts(60_000_000, 6000)
			.saturating_add(T::DbWeight::get().reads(9))
			.saturating_add(T::DbWeight::get().writes(6))
	}
	fn transfer_from() -> Weight {
		Weight::from_parts(65_000_000, 6500)
			.saturating_add(T::DbWeight::get().reads(10))
			.saturating_add(T::DbWeight::get().writes(7))
	}
	fn approve() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn burn() -> Weight {
		Weight::from_parts(20_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn set_excluded() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_designated_pair() -> Weight {
		Weight::from_parts(15_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_treasury() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_venue_adapter() -> Weight {
		Weight::from_parts(40_000_000, 4000)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn burn_tax_tokens() -> Weight {
		Weight::from_parts(22_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn force_convert() -> Weight {
		Weight::from_parts(55_000_000, 5500)
			.saturating_add(T::DbWeight::get().reads(8))
			.saturating_add(T::DbWeight::get().writes(6))
	}
	fn deposit_reference() -> Weight {
		Weight::from_parts(45_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(4))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn renounce_ownership() -> Weight {
		Weight::from_parts(12_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn transfer() -> Weight {
		Weight::from_parts(60_000_000, 6000)
	}
	fn transfer_from() -> Weight {
		Weight::from_parts(65_000_000, 6500)
	}
	fn approve() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn burn() -> Weight {
		Weight::from_parts(20_000_000, 2000)
	}
	fn set_excluded() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn set_designated_pair() -> Weight {
		Weight::from_parts(15_000_000, 2000)
	}
	fn set_treasury() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn set_venue_adapter() -> Weight {
		Weight::from_parts(40_000_000, 4000)
	}
	fn burn_tax_tokens() -> Weight {
		Weight::from_parts(22_000_000, 2000)
	}
	fn force_convert() -> Weight {
		Weight::from_parts(55_000_000, 5500)
	}
	fn deposit_reference() -> Weight {
		Weight::from_parts(45_000_000, 3500)
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
	fn renounce_ownership() -> Weight {
		Weight::from_parts(12_000_000, 1500)
	}
}
