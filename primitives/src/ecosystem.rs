//! Ecosystem Constants for the Tax Token
//!
//! This module centralizes the system-level constants: the pallet ID the token's
//! self-custody account is derived from, the token unit and default supply, and the
//! time-decaying sell-tax schedule.
//!
//! These constants are the single source of truth for runtime configuration and are
//! re-used by the pallet, its mock runtime and any runtime wiring it.

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate accounts for pallet-specific operations.
pub mod pallet_ids {
  /// Tax token pallet ID (holds collected tax before conversion)
  pub const TAX_TOKEN_PALLET_ID: &[u8; 8] = b"taxtoken";
}

/// Ecosystem parameters defining the token and its tax schedule.
pub mod params {
  use super::Balance;
  use sp_arithmetic::Percent;

  /// Decimal places of the tax token.
  pub const TOKEN_DECIMALS: u8 = 18;

  /// One whole token in base units (10^18).
  pub const UNIT: Balance = 1_000_000_000_000_000_000;

  /// Default supply minted to the owner at genesis (1.5 billion tokens).
  pub const INITIAL_SUPPLY: Balance = 1_500_000_000 * UNIT;

  /// Seconds in one day, the granularity of the tax schedule.
  pub const SECONDS_PER_DAY: u64 = 86_400;

  /// Sell tax while trading is young (10%).
  pub const LAUNCH_TAX: Percent = Percent::from_percent(10);

  /// Sell tax once the launch window has passed (7%).
  pub const DECAYED_TAX: Percent = Percent::from_percent(7);

  /// Sell tax after the first year of trading (5%).
  pub const FLOOR_TAX: Percent = Percent::from_percent(5);

  /// Length of the launch window measured from trading start (90 days).
  pub const LAUNCH_WINDOW: u64 = 90 * SECONDS_PER_DAY;

  /// Elapsed time after which the floor tax applies (365 days).
  pub const DECAY_WINDOW: u64 = 365 * SECONDS_PER_DAY;

  /// Upper bound on designated pairs scanned for liquidity on every transfer.
  pub const MAX_DESIGNATED_PAIRS: u32 = 16;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pallet_ids_are_correct_length() {
    assert_eq!(pallet_ids::TAX_TOKEN_PALLET_ID.len(), 8);
  }

  #[test]
  fn tax_schedule_is_non_increasing() {
    assert!(params::LAUNCH_TAX >= params::DECAYED_TAX);
    assert!(params::DECAYED_TAX >= params::FLOOR_TAX);
    assert!(params::LAUNCH_WINDOW < params::DECAY_WINDOW);
  }

  #[test]
  fn initial_supply_fits_with_headroom() {
    assert_eq!(params::UNIT, 10u128.pow(params::TOKEN_DECIMALS as u32));
    assert!(params::INITIAL_SUPPLY.checked_mul(1_000).is_some());
  }
}
