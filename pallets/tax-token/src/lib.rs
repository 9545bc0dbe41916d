//! Tax Token Pallet
//!
//! Fungible token ledger with a time-decaying sell tax. Sales into designated pools are
//! taxed; the tax accumulates on the pallet account and is converted into the reference
//! currency through an exchange venue, with the proceeds delivered to the treasury.
//!
//! Every value movement goes through [`Pallet::do_transfer`], which in one atomic step
//! detects first liquidity, opportunistically converts held tax, and applies the split.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod access;
pub mod adapters;
pub mod conversion;
pub mod ledger;
pub mod liquidity;
pub mod schedule;

pub use access::OwnerCapability;
pub use adapters::ExchangeAdapter;
pub use conversion::SwapGuard;
pub use liquidity::LiquidityState;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

pub(crate) const LOG_TARGET: &str = "runtime::tax-token";

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId, VenueId> {
  /// Venue the token is bound to while benchmarking.
  fn venue() -> VenueId;
  /// Credit `who` with reference currency, e.g. a pool that has to pay out a conversion.
  fn fund_reference(who: &AccountId, amount: u128);
}

#[frame::pallet]
pub mod pallet {
  use super::{ExchangeAdapter, LiquidityState, WeightInfo, schedule};
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::{
      PalletId,
      storage::with_storage_layer,
      traits::{
        UnixTime,
        fungible::{Inspect as NativeInspect, Mutate as NativeMutate},
      },
    },
    sp_runtime::{
      PerThing,
      traits::{AccountIdConversion, MaybeSerializeDeserialize, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::AssetKind;

  /// Configuration trait for the tax token pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Reference currency the collected tax is converted into
    type Currency: NativeInspect<Self::AccountId, Balance = u128>
      + NativeMutate<Self::AccountId>;

    /// Wall clock driving the tax schedule
    type Time: UnixTime;

    /// Identifier of an exchange venue known to `ExchangeAdapter`
    type VenueId: Parameter + Member + Copy + MaxEncodedLen + MaybeSerializeDeserialize;

    /// Exchange venues used for pool discovery and tax conversion
    type ExchangeAdapter: ExchangeAdapter<Self::AccountId, Self::VenueId, u128>;

    /// The pallet ID; its account holds collected tax until conversion
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    /// How venues refer to this token in conversion paths
    #[pallet::constant]
    type TokenAsset: Get<AssetKind>;

    /// Maximum number of designated pairs
    #[pallet::constant]
    type MaxDesignatedPairs: Get<u32>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::BenchmarkHelper<Self::AccountId, Self::VenueId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Token balance of every account that was ever credited
  #[pallet::storage]
  pub type Accounts<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

  /// Sum of all balances in `Accounts`
  #[pallet::storage]
  pub type TotalSupply<T: Config> = StorageValue<_, u128, ValueQuery>;

  /// Remaining amount a spender may move on behalf of an owner
  #[pallet::storage]
  pub type Allowances<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    T::AccountId,
    u128,
    ValueQuery,
  >;

  /// Accounts never taxed, whether sending or receiving
  #[pallet::storage]
  pub type ExcludedAccounts<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, (), OptionQuery>;

  /// Pools whose incoming transfers count as taxed sales
  #[pallet::storage]
  pub type DesignatedPairs<T: Config> =
    StorageValue<_, BoundedVec<T::AccountId, T::MaxDesignatedPairs>, ValueQuery>;

  /// Receiver of converted tax proceeds
  #[pallet::storage]
  pub type Treasury<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Venue used for conversions; frozen once liquidity is established
  #[pallet::storage]
  pub type Venue<T: Config> = StorageValue<_, T::VenueId, OptionQuery>;

  /// Token/reference pool on the current venue
  #[pallet::storage]
  pub type PrimaryPool<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Whether any designated pair has held tokens yet
  #[pallet::storage]
  pub type Liquidity<T: Config> = StorageValue<_, LiquidityState, ValueQuery>;

  /// Unix seconds the tax schedule counts from; unset until the first transfer
  #[pallet::storage]
  pub type TradingStart<T: Config> = StorageValue<_, u64, OptionQuery>;

  /// Set only while a conversion is running
  #[pallet::storage]
  pub type SwapInProgress<T: Config> = StorageValue<_, bool, ValueQuery>;

  /// Holder of the privileged calls
  #[pallet::storage]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Events for the tax token pallet
  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Tokens moved between accounts
    Transferred {
      from: T::AccountId,
      to: T::AccountId,
      amount: u128,
    },
    /// Allowance set
    Approved {
      owner: T::AccountId,
      spender: T::AccountId,
      amount: u128,
    },
    /// Tokens destroyed
    Burned { who: T::AccountId, amount: u128 },
    /// Part of a sale into a designated pair was kept as tax
    TaxCollected {
      from: T::AccountId,
      pair: T::AccountId,
      tax: u128,
      rate_percent: u8,
    },
    /// A designated pair holds tokens for the first time; the tax clock restarts
    LiquidityEstablished {
      pair: T::AccountId,
      trading_start: u64,
    },
    /// Held tax converted and delivered to the treasury
    TaxConverted {
      amount: u128,
      received: u128,
      treasury: T::AccountId,
    },
    /// Automatic conversion failed; the triggering transfer went ahead
    ConversionFailed { amount: u128, error: DispatchError },
    /// Held tax burned by the owner
    TaxTokensBurned { amount: u128 },
    /// Tax exemption changed
    ExclusionUpdated {
      account: T::AccountId,
      excluded: bool,
    },
    /// Designated pair set changed
    DesignatedPairUpdated {
      pair: T::AccountId,
      designated: bool,
    },
    /// Treasury changed
    TreasuryUpdated {
      old: Option<T::AccountId>,
      new: T::AccountId,
    },
    /// Venue changed and its pool designated
    VenueAdapterUpdated {
      old: Option<T::VenueId>,
      new: T::VenueId,
      pool: T::AccountId,
    },
    /// Deposited reference currency passed on to the treasury
    ReferenceForwarded {
      from: T::AccountId,
      amount: u128,
      treasury: T::AccountId,
    },
    /// Owner changed; `new` is `None` after renouncement
    OwnershipTransferred {
      previous: Option<T::AccountId>,
      new: Option<T::AccountId>,
    },
  }

  /// Errors for the tax token pallet
  #[pallet::error]
  pub enum Error<T> {
    /// Sender, recipient or target is the null account
    InvalidAddress,
    /// Amount, or the balance it is clipped to, is zero
    ZeroAmount,
    /// Caller is not the owner
    NotOwner,
    /// Liquidity is already established
    LiquidityAlreadyEstablished,
    /// The exchange adapter does not know this venue
    UnknownVenue,
    /// No venue has been bound
    VenueNotSet,
    /// No treasury has been set
    TreasuryNotSet,
    /// Designated pair set is full
    TooManyPairs,
    /// A conversion is already running
    ConversionInProgress,
    /// The venue rejected the conversion
    ConversionFailed,
    /// Balance too low
    InsufficientBalance,
    /// Allowance too low
    InsufficientAllowance,
    /// Arithmetic overflow occurred
    ArithmeticOverflow,
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      assert!(
        T::MaxDesignatedPairs::get() > 0,
        "at least one designated pair is needed to ever establish liquidity"
      );
    }

    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), frame::deps::sp_runtime::TryRuntimeError> {
      Self::do_try_state()
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Move tokens from the caller to `to`.
    ///
    /// Sales into a designated pair are taxed unless either side is excluded.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::transfer())]
    pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_transfer(&who, &to, amount)
    }

    /// Move tokens from `from` to `to` against the caller's allowance.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::transfer_from())]
    pub fn transfer_from(
      origin: OriginFor<T>,
      from: T::AccountId,
      to: T::AccountId,
      amount: u128,
    ) -> DispatchResult {
      let spender = ensure_signed(origin)?;
      Self::do_transfer_from(&spender, &from, &to, amount)
    }

    /// Allow `spender` to move up to `amount` of the caller's tokens.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::approve())]
    pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
      let owner = ensure_signed(origin)?;
      Self::do_approve(&owner, &spender, amount)
    }

    /// Destroy tokens held by the caller.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::burn())]
    pub fn burn(origin: OriginFor<T>, amount: u128) -> DispatchResult {
      let who = ensure_signed(origin)?;
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
      Self::do_burn(&who, amount)
    }

    /// Exempt an account from tax, or remove the exemption (owner only)
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_excluded())]
    pub fn set_excluded(
      origin: OriginFor<T>,
      account: T::AccountId,
      excluded: bool,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      if excluded {
        ExcludedAccounts::<T>::insert(&account, ());
      } else {
        ExcludedAccounts::<T>::remove(&account);
      }
      Self::deposit_event(Event::ExclusionUpdated { account, excluded });
      Ok(())
    }

    /// Add or remove a taxed sale destination (owner only)
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::set_designated_pair())]
    pub fn set_designated_pair(
      origin: OriginFor<T>,
      pair: T::AccountId,
      designated: bool,
    ) -> DispatchResult {
      Self::ensure_owner(origin)?;
      if designated {
        Self::designate_pair(&pair)?;
      } else {
        DesignatedPairs::<T>::mutate(|pairs| pairs.retain(|existing| existing != &pair));
      }
      Self::deposit_event(Event::DesignatedPairUpdated { pair, designated });
      Ok(())
    }

    /// Change the receiver of converted proceeds (owner only)
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::set_treasury())]
    pub fn set_treasury(origin: OriginFor<T>, treasury: T::AccountId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(!Self::is_null(&treasury), Error::<T>::InvalidAddress);
      let old = Treasury::<T>::get();
      Treasury::<T>::put(&treasury);
      Self::deposit_event(Event::TreasuryUpdated { old, new: treasury });
      Ok(())
    }

    /// Bind another venue and designate its pool (owner only).
    ///
    /// Only possible before liquidity is established.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::set_venue_adapter())]
    pub fn set_venue_adapter(origin: OriginFor<T>, venue: T::VenueId) -> DispatchResult {
      Self::ensure_owner(origin)?;
      ensure!(
        Liquidity::<T>::get().is_pending(),
        Error::<T>::LiquidityAlreadyEstablished
      );
      let old = Venue::<T>::get();
      let pool = Self::bind_venue(venue)?;
      Self::deposit_event(Event::VenueAdapterUpdated {
        old,
        new: venue,
        pool,
      });
      Ok(())
    }

    /// Burn up to `amount` of the held tax (owner only)
    #[pallet::call_index(8)]
    #[pallet::weight(T::WeightInfo::burn_tax_tokens())]
    pub fn burn_tax_tokens(origin: OriginFor<T>, amount: u128) -> DispatchResult {
      let owner = Self::ensure_owner(origin)?;
      Self::do_burn_tax_tokens(&owner, amount)
    }

    /// Convert up to `amount` of the held tax right away (owner only)
    #[pallet::call_index(9)]
    #[pallet::weight(T::WeightInfo::force_convert())]
    pub fn force_convert(origin: OriginFor<T>, amount: u128) -> DispatchResult {
      let owner = Self::ensure_owner(origin)?;
      Self::do_force_convert(&owner, amount).map(|_| ())
    }

    /// Hand reference currency to the token; it goes straight on to the treasury.
    #[pallet::call_index(10)]
    #[pallet::weight(T::WeightInfo::deposit_reference())]
    pub fn deposit_reference(origin: OriginFor<T>, amount: u128) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::forward_reference(&who, amount)
    }

    /// Hand the owner role to another account (owner only)
    #[pallet::call_index(11)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      let owner = Self::ensure_owner(origin)?;
      Self::do_transfer_ownership(owner, Some(new_owner))
    }

    /// Give up the owner role for good (owner only)
    #[pallet::call_index(12)]
    #[pallet::weight(T::WeightInfo::renounce_ownership())]
    pub fn renounce_ownership(origin: OriginFor<T>) -> DispatchResult {
      let owner = Self::ensure_owner(origin)?;
      Self::do_transfer_ownership(owner, None)
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// The all-zero account, which can neither send nor receive.
    pub fn is_null(who: &T::AccountId) -> bool {
      who.using_encoded(|bytes| bytes.iter().all(|byte| *byte == 0))
    }

    pub fn now_secs() -> u64 {
      T::Time::now().as_secs()
    }

    pub fn is_excluded(who: &T::AccountId) -> bool {
      ExcludedAccounts::<T>::contains_key(who)
    }

    pub fn is_designated_pair(who: &T::AccountId) -> bool {
      DesignatedPairs::<T>::get().contains(who)
    }

    pub fn treasury() -> Option<T::AccountId> {
      Treasury::<T>::get()
    }

    pub fn venue() -> Option<T::VenueId> {
      Venue::<T>::get()
    }

    pub fn primary_pool() -> Option<T::AccountId> {
      PrimaryPool::<T>::get()
    }

    pub fn liquidity_state() -> LiquidityState {
      Liquidity::<T>::get()
    }

    pub fn trading_start() -> Option<u64> {
      TradingStart::<T>::get()
    }

    pub fn metadata() -> primitives::CurrencyMetadata {
      primitives::tax_token_metadata()
    }

    /// Move `amount` from `from` to `to` as one atomic unit.
    ///
    /// 1. Reject the null account and zero amounts.
    /// 2. Start the tax clock if nothing has started it yet.
    /// 3. While liquidity is pending, check whether a designated pair now holds tokens.
    /// 4. Outside of a running conversion, convert held tax.
    /// 5. Exempt movements are a single ledger transfer.
    /// 6. Taxed sales send the tax to the pallet account and the rest to `to`.
    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
      ensure!(
        !Self::is_null(from) && !Self::is_null(to),
        Error::<T>::InvalidAddress
      );
      ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

      Self::start_trading_clock();
      if Liquidity::<T>::get().is_pending() {
        Self::check_and_transition()?;
      }
      if !SwapInProgress::<T>::get() && Liquidity::<T>::get().is_established() {
        Self::maybe_convert();
      }

      let exempt =
        Self::is_excluded(from) || Self::is_excluded(to) || !Self::is_designated_pair(to);
      if exempt {
        return Self::ledger_transfer(from, to, amount);
      }

      let rate = Self::current_tax_rate();
      let (tax, remainder) = schedule::split(amount, rate);
      let account = Self::account_id();
      with_storage_layer(|| -> DispatchResult {
        if !tax.is_zero() {
          Self::ledger_transfer(from, &account, tax)?;
        }
        Self::ledger_transfer(from, to, remainder)
      })?;
      Self::deposit_event(Event::TaxCollected {
        from: from.clone(),
        pair: to.clone(),
        tax,
        rate_percent: rate.deconstruct(),
      });
      Ok(())
    }

    /// Spend `spender`'s allowance over `from` and run the transfer.
    ///
    /// Venues pull tokens through here while a conversion is running.
    pub fn do_transfer_from(
      spender: &T::AccountId,
      from: &T::AccountId,
      to: &T::AccountId,
      amount: u128,
    ) -> DispatchResult {
      with_storage_layer(|| -> DispatchResult {
        Self::spend_allowance(from, spender, amount)?;
        Self::do_transfer(from, to, amount)
      })
    }

    /// Make `venue` current: find or create its token/reference pool and designate it.
    pub(crate) fn bind_venue(venue: T::VenueId) -> Result<T::AccountId, DispatchError> {
      let reference =
        T::ExchangeAdapter::reference_currency(&venue).ok_or(Error::<T>::UnknownVenue)?;
      let token = T::TokenAsset::get();
      let pool = match T::ExchangeAdapter::lookup_pool(&venue, token, reference) {
        Some(pool) => pool,
        None => T::ExchangeAdapter::create_pool(&venue, token, reference)?,
      };
      Self::designate_pair(&pool)?;
      Venue::<T>::put(venue);
      PrimaryPool::<T>::put(&pool);
      Ok(pool)
    }

    pub(crate) fn designate_pair(pair: &T::AccountId) -> DispatchResult {
      DesignatedPairs::<T>::try_mutate(|pairs| -> DispatchResult {
        if !pairs.contains(pair) {
          pairs
            .try_push(pair.clone())
            .map_err(|_| Error::<T>::TooManyPairs)?;
        }
        Ok(())
      })
    }

    /// Ledger and guard invariants that must hold between calls.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), frame::deps::sp_runtime::TryRuntimeError> {
      let sum = Accounts::<T>::iter_values()
        .try_fold(0u128, |acc, balance| acc.checked_add(balance))
        .ok_or(DispatchError::Other("balances overflow"))?;
      ensure!(
        sum == TotalSupply::<T>::get(),
        DispatchError::Other("sum of balances differs from total supply")
      );
      ensure!(
        !SwapInProgress::<T>::get(),
        DispatchError::Other("swap flag left set")
      );
      if let Some(treasury) = Treasury::<T>::get() {
        ensure!(
          !Self::is_null(&treasury),
          DispatchError::Other("null treasury")
        );
      }
      Ok(())
    }
  }

  /// Genesis configuration
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    /// Receives the initial supply and the owner role
    pub owner: Option<T::AccountId>,
    /// Receiver of converted proceeds
    pub treasury: Option<T::AccountId>,
    /// Tokens minted to the owner
    pub initial_supply: u128,
    /// Venue bound at launch; its pool gets created and designated
    pub venue: Option<T::VenueId>,
    /// Extra tax-exempt accounts
    pub excluded: Vec<T::AccountId>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      let account = Pallet::<T>::account_id();
      // Pallet account survives zero native balance via provider reference
      frame_system::Pallet::<T>::inc_providers(&account);
      ExcludedAccounts::<T>::insert(&account, ());
      // No block has set the time yet; the first transfer starts the tax clock

      if let Some(owner) = &self.owner {
        Owner::<T>::put(owner);
        ExcludedAccounts::<T>::insert(owner, ());
        Pallet::<T>::do_mint(owner, self.initial_supply).expect("initial supply fits the ledger");
      }
      if let Some(treasury) = &self.treasury {
        assert!(!Pallet::<T>::is_null(treasury), "treasury must not be the null account");
        Treasury::<T>::put(treasury);
        ExcludedAccounts::<T>::insert(treasury, ());
      }
      for who in &self.excluded {
        ExcludedAccounts::<T>::insert(who, ());
      }
      if let Some(venue) = self.venue {
        Pallet::<T>::bind_venue(venue).expect("genesis venue must be known to the exchange adapter");
      }
    }
  }
}
