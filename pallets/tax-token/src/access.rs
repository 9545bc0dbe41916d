//! Owner access control

use crate::{Config, Error, Event, Owner, Pallet};
use frame::prelude::*;

/// Proof that the current call was signed by the owner.
///
/// Only [`Pallet::ensure_owner`] hands these out; privileged internals take one by
/// reference so they cannot run without the check.
pub struct OwnerCapability<T: Config> {
  owner: T::AccountId,
}

impl<T: Config> OwnerCapability<T> {
  pub fn owner(&self) -> &T::AccountId {
    &self.owner
  }
}

impl<T: Config> Pallet<T> {
  pub fn owner() -> Option<T::AccountId> {
    Owner::<T>::get()
  }

  pub fn ensure_owner(origin: OriginFor<T>) -> Result<OwnerCapability<T>, DispatchError> {
    let who = ensure_signed(origin)?;
    ensure!(
      Owner::<T>::get().as_ref() == Some(&who),
      Error::<T>::NotOwner
    );
    Ok(OwnerCapability { owner: who })
  }

  /// Pass the role on, or drop it for good with `None`.
  pub(crate) fn do_transfer_ownership(
    current: OwnerCapability<T>,
    new_owner: Option<T::AccountId>,
  ) -> DispatchResult {
    if let Some(new_owner) = &new_owner {
      ensure!(!Self::is_null(new_owner), Error::<T>::InvalidAddress);
    }
    Owner::<T>::set(new_owner.clone());
    Self::deposit_event(Event::OwnershipTransferred {
      previous: Some(current.owner),
      new: new_owner,
    });
    Ok(())
  }
}
