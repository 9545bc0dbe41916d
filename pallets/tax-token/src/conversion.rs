//! Tax conversion
//!
//! Held tax is sold on the bound venue for the reference currency, which goes straight
//! to the treasury. Automatic conversion piggybacks on transfers and never makes one
//! fail; the owner can also burn or convert held tax explicitly.
//!
//! While a conversion runs, `SwapInProgress` is set. The venue pulls tokens through
//! [`Pallet::do_transfer_from`], and the flag keeps that nested transfer from starting
//! another conversion.

use crate::{
  Config, Error, Event, LOG_TARGET, OwnerCapability, Pallet, SwapInProgress, Treasury, Venue,
  adapters::ExchangeAdapter, ledger::UNLIMITED_ALLOWANCE,
};
use alloc::vec;
use frame::deps::{
  frame_support::{
    storage::with_storage_layer,
    traits::{fungible::Mutate as NativeMutate, tokens::Preservation},
  },
  sp_runtime::traits::Zero,
};
use frame::prelude::*;
use primitives::AssetKind;

/// Holds `SwapInProgress` for as long as it lives.
pub struct SwapGuard<T: Config>(PhantomData<T>);

impl<T: Config> SwapGuard<T> {
  /// `None` if a conversion is already running.
  pub fn acquire() -> Option<Self> {
    if SwapInProgress::<T>::get() {
      return None;
    }
    SwapInProgress::<T>::put(true);
    Some(Self(PhantomData))
  }
}

impl<T: Config> Drop for SwapGuard<T> {
  fn drop(&mut self) {
    SwapInProgress::<T>::kill();
  }
}

struct ConversionRoute<T: Config> {
  venue: T::VenueId,
  router: T::AccountId,
  reference: AssetKind,
  treasury: T::AccountId,
}

impl<T: Config> Pallet<T> {
  /// Convert everything the pallet account holds. Failures are reported, never raised.
  pub(crate) fn maybe_convert() {
    let held = Self::balance_of(&Self::account_id());
    if held.is_zero() {
      return;
    }
    let Some(_guard) = SwapGuard::<T>::acquire() else {
      return;
    };

    let outcome = Self::conversion_route().and_then(|route| Self::convert(&route, held));
    if let Err(error) = outcome {
      log::warn!(
        target: LOG_TARGET,
        "automatic conversion of {} held tax failed: {:?}",
        held,
        error
      );
      Self::deposit_event(Event::ConversionFailed {
        amount: held,
        error,
      });
    }
  }

  fn conversion_route() -> Result<ConversionRoute<T>, DispatchError> {
    let venue = Venue::<T>::get().ok_or(Error::<T>::VenueNotSet)?;
    let treasury = Treasury::<T>::get().ok_or(Error::<T>::TreasuryNotSet)?;
    let router = T::ExchangeAdapter::router_account(&venue).ok_or(Error::<T>::UnknownVenue)?;
    let reference =
      T::ExchangeAdapter::reference_currency(&venue).ok_or(Error::<T>::UnknownVenue)?;
    Ok(ConversionRoute {
      venue,
      router,
      reference,
      treasury,
    })
  }

  /// Sell `amount` of held tax. Only the venue call is rolled back on failure.
  fn convert(route: &ConversionRoute<T>, amount: u128) -> Result<u128, DispatchError> {
    let account = Self::account_id();
    if Self::allowance(&account, &route.router) != UNLIMITED_ALLOWANCE {
      Self::do_approve(&account, &route.router, UNLIMITED_ALLOWANCE)?;
    }

    let path = vec![T::TokenAsset::get(), route.reference];
    let deadline = Self::now_secs();
    let received = with_storage_layer(|| {
      T::ExchangeAdapter::convert_to_reference(
        &route.venue,
        &account,
        amount,
        0,
        path,
        &route.treasury,
        deadline,
      )
    })?;

    log::debug!(
      target: LOG_TARGET,
      "converted {} held tax into {} for the treasury",
      amount,
      received
    );
    Self::deposit_event(Event::TaxConverted {
      amount,
      received,
      treasury: route.treasury.clone(),
    });
    Ok(received)
  }

  /// `requested` capped at the held balance; zero either way is an error.
  fn clip_to_held(requested: u128) -> Result<u128, DispatchError> {
    let held = Self::balance_of(&Self::account_id());
    ensure!(
      !requested.is_zero() && !held.is_zero(),
      Error::<T>::ZeroAmount
    );
    Ok(requested.min(held))
  }

  pub(crate) fn do_burn_tax_tokens(_owner: &OwnerCapability<T>, requested: u128) -> DispatchResult {
    let amount = Self::clip_to_held(requested)?;
    Self::do_burn(&Self::account_id(), amount)?;
    Self::deposit_event(Event::TaxTokensBurned { amount });
    Ok(())
  }

  pub(crate) fn do_force_convert(
    _owner: &OwnerCapability<T>,
    requested: u128,
  ) -> Result<u128, DispatchError> {
    let amount = Self::clip_to_held(requested)?;
    let route = Self::conversion_route()?;
    let _guard = SwapGuard::<T>::acquire().ok_or(Error::<T>::ConversionInProgress)?;
    Self::convert(&route, amount).map_err(|error| {
      log::warn!(
        target: LOG_TARGET,
        "forced conversion of {} held tax failed: {:?}",
        amount,
        error
      );
      Error::<T>::ConversionFailed.into()
    })
  }

  /// Route reference currency from `from` through the pallet account to the treasury.
  pub(crate) fn forward_reference(from: &T::AccountId, amount: u128) -> DispatchResult {
    ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
    let treasury = Treasury::<T>::get().ok_or(Error::<T>::TreasuryNotSet)?;
    let account = Self::account_id();
    <T::Currency as NativeMutate<T::AccountId>>::transfer(
      from,
      &account,
      amount,
      Preservation::Preserve,
    )?;
    <T::Currency as NativeMutate<T::AccountId>>::transfer(
      &account,
      &treasury,
      amount,
      Preservation::Expendable,
    )?;
    Self::deposit_event(Event::ReferenceForwarded {
      from: from.clone(),
      amount,
      treasury,
    });
    Ok(())
  }
}
