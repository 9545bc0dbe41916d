//! Balance and allowance ledger
//!
//! Raw bookkeeping with checked arithmetic. No tax, no liquidity logic: that lives in
//! [`Pallet::do_transfer`], which calls into here once it has decided the split.

use crate::{Accounts, Allowances, Config, Error, Event, Pallet, TotalSupply};
use frame::deps::sp_runtime::traits::Zero;
use frame::prelude::*;

/// Allowance that is never decremented when spent.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

impl<T: Config> Pallet<T> {
  pub fn balance_of(who: &T::AccountId) -> u128 {
    Accounts::<T>::get(who)
  }

  pub fn allowance(owner: &T::AccountId, spender: &T::AccountId) -> u128 {
    Allowances::<T>::get(owner, spender)
  }

  pub fn total_supply() -> u128 {
    TotalSupply::<T>::get()
  }

  /// Debit `from` and credit `to`; emits one `Transferred`.
  pub(crate) fn ledger_transfer(
    from: &T::AccountId,
    to: &T::AccountId,
    amount: u128,
  ) -> DispatchResult {
    let from_balance = Accounts::<T>::get(from)
      .checked_sub(amount)
      .ok_or(Error::<T>::InsufficientBalance)?;
    if from != to {
      let to_balance = Accounts::<T>::get(to)
        .checked_add(amount)
        .ok_or(Error::<T>::ArithmeticOverflow)?;
      Accounts::<T>::insert(from, from_balance);
      Accounts::<T>::insert(to, to_balance);
    }
    Self::deposit_event(Event::Transferred {
      from: from.clone(),
      to: to.clone(),
      amount,
    });
    Ok(())
  }

  pub(crate) fn spend_allowance(
    owner: &T::AccountId,
    spender: &T::AccountId,
    amount: u128,
  ) -> DispatchResult {
    let current = Allowances::<T>::get(owner, spender);
    if current == UNLIMITED_ALLOWANCE {
      return Ok(());
    }
    let remaining = current
      .checked_sub(amount)
      .ok_or(Error::<T>::InsufficientAllowance)?;
    Allowances::<T>::insert(owner, spender, remaining);
    Ok(())
  }

  pub(crate) fn do_approve(
    owner: &T::AccountId,
    spender: &T::AccountId,
    amount: u128,
  ) -> DispatchResult {
    ensure!(
      !Self::is_null(owner) && !Self::is_null(spender),
      Error::<T>::InvalidAddress
    );
    Allowances::<T>::insert(owner, spender, amount);
    Self::deposit_event(Event::Approved {
      owner: owner.clone(),
      spender: spender.clone(),
      amount,
    });
    Ok(())
  }

  pub(crate) fn do_mint(to: &T::AccountId, amount: u128) -> DispatchResult {
    ensure!(!Self::is_null(to), Error::<T>::InvalidAddress);
    let supply = TotalSupply::<T>::get()
      .checked_add(amount)
      .ok_or(Error::<T>::ArithmeticOverflow)?;
    let balance = Accounts::<T>::get(to)
      .checked_add(amount)
      .ok_or(Error::<T>::ArithmeticOverflow)?;
    TotalSupply::<T>::put(supply);
    Accounts::<T>::insert(to, balance);
    Ok(())
  }

  pub(crate) fn do_burn(who: &T::AccountId, amount: u128) -> DispatchResult {
    ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
    let balance = Accounts::<T>::get(who)
      .checked_sub(amount)
      .ok_or(Error::<T>::InsufficientBalance)?;
    // Supply never trails a single balance, so this cannot underflow
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_sub(amount));
    Accounts::<T>::insert(who, balance);
    Self::deposit_event(Event::Burned {
      who: who.clone(),
      amount,
    });
    Ok(())
  }
}
