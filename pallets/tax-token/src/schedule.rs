//! Sell tax schedule
//!
//! Rate as a step function of the time since trading started, and the floor split
//! of a taxed amount.

use crate::{Config, Pallet, TradingStart};
use frame::deps::sp_runtime::{PerThing, Percent};
use primitives::params::{DECAY_WINDOW, DECAYED_TAX, FLOOR_TAX, LAUNCH_TAX, LAUNCH_WINDOW};

/// Rate for a sale `elapsed_secs` after trading started.
pub fn tax_rate_after(elapsed_secs: u64) -> Percent {
  if elapsed_secs < LAUNCH_WINDOW {
    LAUNCH_TAX
  } else if elapsed_secs < DECAY_WINDOW {
    DECAYED_TAX
  } else {
    FLOOR_TAX
  }
}

/// `(tax, remainder)` with the tax rounded down; the two always add up to `amount`.
pub fn split(amount: u128, rate: Percent) -> (u128, u128) {
  let tax = rate.mul_floor(amount);
  (tax, amount.saturating_sub(tax))
}

impl<T: Config> Pallet<T> {
  /// Launch rate until the clock has started.
  pub fn current_tax_rate() -> Percent {
    let now = Self::now_secs();
    let start = TradingStart::<T>::get().unwrap_or(now);
    tax_rate_after(now.saturating_sub(start))
  }

  /// Record the first transfer's time as the trading start.
  pub(crate) fn start_trading_clock() {
    if TradingStart::<T>::get().is_none() {
      TradingStart::<T>::put(Self::now_secs());
    }
  }

  pub fn current_tax_rate_percent() -> u8 {
    Self::current_tax_rate().deconstruct()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use primitives::params::SECONDS_PER_DAY;

  #[test]
  fn rate_steps_down_at_window_edges() {
    assert_eq!(tax_rate_after(0), Percent::from_percent(10));
    assert_eq!(tax_rate_after(LAUNCH_WINDOW - 1), Percent::from_percent(10));
    assert_eq!(tax_rate_after(LAUNCH_WINDOW), Percent::from_percent(7));
    assert_eq!(tax_rate_after(DECAY_WINDOW - 1), Percent::from_percent(7));
    assert_eq!(tax_rate_after(DECAY_WINDOW), Percent::from_percent(5));
    assert_eq!(tax_rate_after(u64::MAX), Percent::from_percent(5));
  }

  #[test]
  fn windows_are_whole_days() {
    assert_eq!(LAUNCH_WINDOW, 90 * SECONDS_PER_DAY);
    assert_eq!(DECAY_WINDOW, 365 * SECONDS_PER_DAY);
  }

  #[test]
  fn split_rounds_tax_down() {
    assert_eq!(split(1000, Percent::from_percent(10)), (100, 900));
    assert_eq!(split(9, Percent::from_percent(10)), (0, 9));
    assert_eq!(split(19, Percent::from_percent(10)), (1, 18));
    assert_eq!(split(99, Percent::from_percent(7)), (6, 93));
    assert_eq!(split(1, Percent::from_percent(5)), (0, 1));
  }

  #[test]
  fn split_conserves_large_amounts() {
    let amount = u128::MAX;
    let (tax, remainder) = split(amount, Percent::from_percent(7));
    assert_eq!(tax + remainder, amount);
    assert!(tax > 0);
  }
}
