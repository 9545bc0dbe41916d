//! Liquidity state machine
//!
//! `Pending` until some designated pair holds tokens, then `Established` for good.
//! The transition restarts the tax clock, so the launch rate applies from the
//! moment real trading becomes possible.

use crate::{Config, DesignatedPairs, Error, Event, Liquidity, Pallet, TradingStart};
use frame::deps::sp_runtime::traits::Zero;
use frame::prelude::*;

#[derive(
  Clone,
  Copy,
  Debug,
  Default,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
)]
pub enum LiquidityState {
  #[default]
  Pending,
  Established,
}

impl LiquidityState {
  pub fn is_pending(&self) -> bool {
    matches!(self, Self::Pending)
  }

  pub fn is_established(&self) -> bool {
    matches!(self, Self::Established)
  }

  /// The only transition. There is nothing after `Established`.
  pub fn establish(self) -> Option<Self> {
    match self {
      Self::Pending => Some(Self::Established),
      Self::Established => None,
    }
  }
}

impl<T: Config> Pallet<T> {
  /// Establish liquidity as soon as a designated pair holds a positive balance.
  ///
  /// Resets `TradingStart` to now. Errors if liquidity is already established.
  pub fn check_and_transition() -> DispatchResult {
    let next = Liquidity::<T>::get()
      .establish()
      .ok_or(Error::<T>::LiquidityAlreadyEstablished)?;
    let Some(pair) = DesignatedPairs::<T>::get()
      .into_iter()
      .find(|pair| !Self::balance_of(pair).is_zero())
    else {
      return Ok(());
    };

    let trading_start = Self::now_secs();
    Liquidity::<T>::put(next);
    TradingStart::<T>::put(trading_start);
    log::debug!(
      target: crate::LOG_TARGET,
      "liquidity established, tax clock restarted at {}",
      trading_start
    );
    Self::deposit_event(Event::LiquidityEstablished {
      pair,
      trading_start,
    });
    Ok(())
  }
}
