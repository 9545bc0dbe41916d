//! Exchange adapter trait
//!
//! The pallet never talks to a DEX directly. Each venue is reached through
//! `ExchangeAdapter`, keyed by a runtime-chosen venue identifier.

use alloc::vec::Vec;
use frame::prelude::*;
use primitives::AssetKind;

/// Pool discovery and conversion on the exchange venues a runtime offers.
pub trait ExchangeAdapter<AccountId, VenueId, Balance> {
  /// Account that pulls tokens from the seller during a conversion.
  ///
  /// The pallet grants this account an unlimited allowance before converting.
  fn router_account(venue: &VenueId) -> Option<AccountId>;

  /// Asset the venue quotes the token against. `None` for an unknown venue.
  fn reference_currency(venue: &VenueId) -> Option<AssetKind>;

  /// Pool account trading `a` against `b`, if one exists.
  fn lookup_pool(venue: &VenueId, a: AssetKind, b: AssetKind) -> Option<AccountId>;

  fn create_pool(venue: &VenueId, a: AssetKind, b: AssetKind) -> Result<AccountId, DispatchError>;

  /// Sell exactly `amount` from `who` along `path`, paying the output to `recipient`.
  ///
  /// Fails when the output is below `min_out` or the current time is past `deadline`
  /// (unix seconds). Returns the amount delivered to `recipient`.
  #[allow(clippy::too_many_arguments)]
  fn convert_to_reference(
    venue: &VenueId,
    who: &AccountId,
    amount: Balance,
    min_out: Balance,
    path: Vec<AssetKind>,
    recipient: &AccountId,
    deadline: u64,
  ) -> Result<Balance, DispatchError>;
}

/// No venues at all: every venue is unknown.
impl<AccountId, VenueId, Balance> ExchangeAdapter<AccountId, VenueId, Balance> for () {
  fn router_account(_: &VenueId) -> Option<AccountId> {
    None
  }

  fn reference_currency(_: &VenueId) -> Option<AssetKind> {
    None
  }

  fn lookup_pool(_: &VenueId, _: AssetKind, _: AssetKind) -> Option<AccountId> {
    None
  }

  fn create_pool(_: &VenueId, _: AssetKind, _: AssetKind) -> Result<AccountId, DispatchError> {
    Err(DispatchError::Other("no exchange venues"))
  }

  fn convert_to_reference(
    _: &VenueId,
    _: &AccountId,
    _: Balance,
    _: Balance,
    _: Vec<AssetKind>,
    _: &AccountId,
    _: u64,
  ) -> Result<Balance, DispatchError> {
    Err(DispatchError::Other("no exchange venues"))
  }
}
