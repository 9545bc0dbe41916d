extern crate alloc;

use crate as pallet_tax_token;
use crate::{ExchangeAdapter, SwapInProgress};
use alloc::{vec, vec::Vec};
use core::cell::RefCell;
use polkadot_sdk::frame_support::traits::fungible::Mutate;
use polkadot_sdk::frame_support::traits::tokens::Preservation;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl, ensure,
  traits::{ConstU32, ConstU64, ConstU128, Get},
};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{AssetKind, TAX_TOKEN};
use std::collections::BTreeMap;

pub type AccountId = u64;
pub type VenueId = u32;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
pub const TREASURY: AccountId = 50;
pub const NULL: AccountId = 0;

/// Healthy venue the token is bound to at genesis.
pub const VENUE_A: VenueId = 1;
/// Second healthy venue.
pub const VENUE_B: VenueId = 2;
/// Known venue whose conversions always fail.
pub const BROKEN_VENUE: VenueId = 3;
/// Venue the adapter knows nothing about.
pub const UNKNOWN_VENUE: VenueId = 9;

pub const INITIAL_SUPPLY: u128 = 1_500_000_000;
pub const POOL_NATIVE: u128 = 1_000_000;
pub const EXISTENTIAL_DEPOSIT: u128 = 10;

pub fn router_of(venue: VenueId) -> AccountId {
  100 * venue as AccountId
}

pub fn pool_of(venue: VenueId) -> AccountId {
  1000 + venue as AccountId
}

// State containers for the stateful exchange mock
thread_local! {
    // (venue, sorted pair) -> pool account
    static POOLS: RefCell<BTreeMap<(VenueId, (AssetKind, AssetKind)), AccountId>> = const { RefCell::new(BTreeMap::new()) };

    // Calls made to `convert_to_reference`
    static CONVERSIONS: RefCell<u32> = const { RefCell::new(0) };

    // `SwapInProgress` as seen by the venue while converting
    static GUARD_SEEN: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };

    // Fail after pulling the tokens but before paying out
    static FAIL_AFTER_PULL: RefCell<bool> = const { RefCell::new(false) };
}

fn sorted_pair(a: AssetKind, b: AssetKind) -> (AssetKind, AssetKind) {
  if a < b { (a, b) } else { (b, a) }
}

pub fn conversions() -> u32 {
  CONVERSIONS.with(|c| *c.borrow())
}

pub fn guard_seen() -> Vec<bool> {
  GUARD_SEEN.with(|g| g.borrow().clone())
}

pub fn set_fail_after_pull(fail: bool) {
  FAIL_AFTER_PULL.with(|f| *f.borrow_mut() = fail);
}

pub fn set_time_secs(secs: u64) {
  Timestamp::set_timestamp(secs * 1000);
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Timestamp: polkadot_sdk::pallet_timestamp,
    TaxToken: pallet_tax_token,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<EXISTENTIAL_DEPOSIT>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_timestamp::Config for Test {
  type Moment = u64;
  type OnTimestampSet = ();
  type MinimumPeriod = ConstU64<1>;
  type WeightInfo = ();
}

pub struct TaxTokenPalletId;
impl Get<PalletId> for TaxTokenPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::ecosystem::pallet_ids::TAX_TOKEN_PALLET_ID)
  }
}

pub struct TaxTokenAsset;
impl Get<AssetKind> for TaxTokenAsset {
  fn get() -> AssetKind {
    TAX_TOKEN
  }
}

/// Constant-product venues quoting the token against native currency.
///
/// Token reserves live in the pallet ledger, native reserves in `Balances`; the pool
/// account of a venue holds both.
pub struct MockExchange;

impl ExchangeAdapter<AccountId, VenueId, u128> for MockExchange {
  fn router_account(venue: &VenueId) -> Option<AccountId> {
    matches!(*venue, VENUE_A | VENUE_B | BROKEN_VENUE).then(|| router_of(*venue))
  }

  fn reference_currency(venue: &VenueId) -> Option<AssetKind> {
    Self::router_account(venue).map(|_| AssetKind::Native)
  }

  fn lookup_pool(venue: &VenueId, a: AssetKind, b: AssetKind) -> Option<AccountId> {
    POOLS.with(|p| p.borrow().get(&(*venue, sorted_pair(a, b))).copied())
  }

  fn create_pool(venue: &VenueId, a: AssetKind, b: AssetKind) -> Result<AccountId, DispatchError> {
    ensure!(
      Self::router_account(venue).is_some(),
      DispatchError::Other("unknown venue")
    );
    let pool = pool_of(*venue);
    POOLS.with(|p| p.borrow_mut().insert((*venue, sorted_pair(a, b)), pool));
    Ok(pool)
  }

  fn convert_to_reference(
    venue: &VenueId,
    who: &AccountId,
    amount: u128,
    min_out: u128,
    path: Vec<AssetKind>,
    recipient: &AccountId,
    deadline: u64,
  ) -> Result<u128, DispatchError> {
    CONVERSIONS.with(|c| *c.borrow_mut() += 1);
    GUARD_SEEN.with(|g| g.borrow_mut().push(SwapInProgress::<Test>::get()));

    ensure!(*venue != BROKEN_VENUE, DispatchError::Other("venue halted"));
    ensure!(
      deadline >= TaxToken::now_secs(),
      DispatchError::Other("deadline passed")
    );
    ensure!(
      path == vec![TAX_TOKEN, AssetKind::Native],
      DispatchError::Other("unsupported path")
    );
    let router = Self::router_account(venue).ok_or(DispatchError::Other("unknown venue"))?;
    let pool = Self::lookup_pool(venue, path[0], path[1]).ok_or(DispatchError::Other("no pool"))?;

    let token_reserve = TaxToken::balance_of(&pool);
    let native_reserve = Balances::free_balance(pool);
    TaxToken::do_transfer_from(&router, who, &pool, amount)?;
    if FAIL_AFTER_PULL.with(|f| *f.borrow()) {
      return Err(DispatchError::Other("payout failed"));
    }

    let out = amount.saturating_mul(native_reserve) / token_reserve.saturating_add(amount);
    ensure!(
      out >= min_out && out > 0,
      DispatchError::Other("insufficient output")
    );
    <Balances as Mutate<AccountId>>::transfer(&pool, recipient, out, Preservation::Expendable)?;
    Ok(out)
  }
}

impl pallet_tax_token::Config for Test {
  type Currency = Balances;
  type Time = Timestamp;
  type VenueId = VenueId;
  type ExchangeAdapter = MockExchange;
  type PalletId = TaxTokenPalletId;
  type TokenAsset = TaxTokenAsset;
  type MaxDesignatedPairs = ConstU32<4>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = TaxTokenBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct TaxTokenBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<AccountId, VenueId> for TaxTokenBenchmarkHelper {
  fn venue() -> VenueId {
    VENUE_B
  }

  fn fund_reference(who: &AccountId, amount: u128) {
    <Balances as Mutate<AccountId>>::mint_into(who, amount).expect("Failed to fund");
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  // Reset State
  POOLS.with(|p| p.borrow_mut().clear());
  CONVERSIONS.with(|c| *c.borrow_mut() = 0);
  GUARD_SEEN.with(|g| g.borrow_mut().clear());
  FAIL_AFTER_PULL.with(|f| *f.borrow_mut() = false);

  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![
      (BOB, 1_000),
      (CHARLIE, 1_000),
      (TREASURY, 1_000),
      (pool_of(VENUE_A), POOL_NATIVE),
      (pool_of(VENUE_B), POOL_NATIVE),
    ],
    ..Default::default()
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_tax_token::GenesisConfig::<Test> {
    owner: Some(ALICE),
    treasury: Some(TREASURY),
    initial_supply: INITIAL_SUPPLY,
    venue: Some(VENUE_A),
    excluded: vec![],
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| System::set_block_number(1));
  ext
}
