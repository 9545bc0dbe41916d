use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;

const LIQUIDITY: u128 = 1_000_000_000_000;
const HELD_TAX: u128 = 1_000_000;
const SALE: u128 = 10_000_000;

/// Owner, treasury and a seeded pool on the helper's venue.
fn setup_market<T: Config>() -> (T::AccountId, T::AccountId) {
  let owner: T::AccountId = whitelisted_caller();
  Owner::<T>::put(&owner);
  let treasury: T::AccountId = account("treasury", 0, 0);
  Treasury::<T>::put(&treasury);
  T::BenchmarkHelper::fund_reference(&treasury, LIQUIDITY);

  let pool = Pallet::<T>::bind_venue(T::BenchmarkHelper::venue()).expect("Failed to bind venue");
  T::BenchmarkHelper::fund_reference(&pool, LIQUIDITY);
  Pallet::<T>::do_mint(&pool, LIQUIDITY).expect("Failed to seed pool");
  (owner, pool)
}

fn hold_tax<T: Config>() {
  Pallet::<T>::do_mint(&Pallet::<T>::account_id(), HELD_TAX).expect("Failed to fund pallet");
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn transfer() {
    let (_, pool) = setup_market::<T>();
    let seller: T::AccountId = account("seller", 0, 0);
    Pallet::<T>::do_mint(&seller, SALE).expect("Failed to fund seller");
    Liquidity::<T>::put(LiquidityState::Established);
    hold_tax::<T>();

    // Worst case: held tax is converted, then the sale itself is taxed
    #[extrinsic_call]
    transfer(RawOrigin::Signed(seller.clone()), pool, SALE);

    assert_eq!(Pallet::<T>::balance_of(&seller), 0);
  }

  #[benchmark]
  fn transfer_from() {
    let (_, pool) = setup_market::<T>();
    let seller: T::AccountId = account("seller", 0, 0);
    let spender: T::AccountId = account("spender", 0, 0);
    Pallet::<T>::do_mint(&seller, SALE).expect("Failed to fund seller");
    Pallet::<T>::do_approve(&seller, &spender, SALE).expect("Failed to approve");
    Liquidity::<T>::put(LiquidityState::Established);
    hold_tax::<T>();

    #[extrinsic_call]
    transfer_from(RawOrigin::Signed(spender.clone()), seller.clone(), pool, SALE);

    assert_eq!(Pallet::<T>::allowance(&seller, &spender), 0);
  }

  #[benchmark]
  fn approve() {
    let caller: T::AccountId = whitelisted_caller();
    let spender: T::AccountId = account("spender", 0, 0);

    #[extrinsic_call]
    approve(RawOrigin::Signed(caller.clone()), spender.clone(), SALE);

    assert_eq!(Pallet::<T>::allowance(&caller, &spender), SALE);
  }

  #[benchmark]
  fn burn() {
    let caller: T::AccountId = whitelisted_caller();
    Pallet::<T>::do_mint(&caller, SALE).expect("Failed to fund caller");

    #[extrinsic_call]
    burn(RawOrigin::Signed(caller.clone()), SALE);

    assert_eq!(Pallet::<T>::balance_of(&caller), 0);
  }

  #[benchmark]
  fn set_excluded() {
    let (owner, _) = setup_market::<T>();
    let target: T::AccountId = account("target", 0, 0);

    #[extrinsic_call]
    set_excluded(RawOrigin::Signed(owner), target.clone(), true);

    assert!(Pallet::<T>::is_excluded(&target));
  }

  #[benchmark]
  fn set_designated_pair() {
    let (owner, _) = setup_market::<T>();
    let pair: T::AccountId = account("pair", 0, 0);

    #[extrinsic_call]
    set_designated_pair(RawOrigin::Signed(owner), pair.clone(), true);

    assert!(Pallet::<T>::is_designated_pair(&pair));
  }

  #[benchmark]
  fn set_treasury() {
    let (owner, _) = setup_market::<T>();
    let treasury: T::AccountId = account("treasury", 1, 0);

    #[extrinsic_call]
    set_treasury(RawOrigin::Signed(owner), treasury.clone());

    assert_eq!(Treasury::<T>::get(), Some(treasury));
  }

  #[benchmark]
  fn set_venue_adapter() {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&owner);
    let venue = T::BenchmarkHelper::venue();

    #[extrinsic_call]
    set_venue_adapter(RawOrigin::Signed(owner), venue);

    assert_eq!(Venue::<T>::get(), Some(venue));
  }

  #[benchmark]
  fn burn_tax_tokens() {
    let (owner, _) = setup_market::<T>();
    hold_tax::<T>();

    #[extrinsic_call]
    burn_tax_tokens(RawOrigin::Signed(owner), HELD_TAX);

    assert_eq!(Pallet::<T>::balance_of(&Pallet::<T>::account_id()), 0);
  }

  #[benchmark]
  fn force_convert() {
    let (owner, _) = setup_market::<T>();
    Liquidity::<T>::put(LiquidityState::Established);
    hold_tax::<T>();

    #[extrinsic_call]
    force_convert(RawOrigin::Signed(owner), HELD_TAX);

    assert_eq!(Pallet::<T>::balance_of(&Pallet::<T>::account_id()), 0);
  }

  #[benchmark]
  fn deposit_reference() {
    let (_, _) = setup_market::<T>();
    let caller: T::AccountId = whitelisted_caller();
    T::BenchmarkHelper::fund_reference(&caller, LIQUIDITY);

    #[extrinsic_call]
    deposit_reference(RawOrigin::Signed(caller), HELD_TAX);
  }

  #[benchmark]
  fn transfer_ownership() {
    let (owner, _) = setup_market::<T>();
    let new_owner: T::AccountId = account("owner", 1, 0);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(owner), new_owner.clone());

    assert_eq!(Owner::<T>::get(), Some(new_owner));
  }

  #[benchmark]
  fn renounce_ownership() {
    let (owner, _) = setup_market::<T>();

    #[extrinsic_call]
    renounce_ownership(RawOrigin::Signed(owner));

    assert_eq!(Owner::<T>::get(), None);
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
