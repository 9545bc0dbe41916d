use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Asset identifier shared between the tax token and the exchange venues it trades on.
///
/// Venues describe conversion paths as sequences of `AssetKind`, so the token itself and
/// the reference currency it is converted into are both named here.
///
/// - `Native`: The system's native token (managed by pallet-balances), the usual reference
///   currency.
/// - `Local(u32)`: Assets issued on this chain, including the tax token.
/// - `Foreign(u32)`: Assets bridged in from other chains.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum AssetKind {
  /// Native token managed by pallet-balances
  #[default]
  Native,
  /// Asset issued on this chain
  Local(u32),
  /// Foreign asset bridged from another chain
  Foreign(u32),
}

impl AssetKind {
  pub fn is_native(&self) -> bool {
    matches!(self, AssetKind::Native)
  }
}

/// Local identifier under which venues list the tax token.
pub const TAX_TOKEN_ID: u32 = 0x1000_0001;

/// The tax token as it appears in venue paths.
pub const TAX_TOKEN: AssetKind = AssetKind::Local(TAX_TOKEN_ID);

/// Metadata container for currencies
#[derive(Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, Clone, Debug, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
pub struct CurrencyMetadata {
  pub name: Vec<u8>,
  pub symbol: Vec<u8>,
  pub decimals: u8,
}

/// Display metadata of the tax token.
pub fn tax_token_metadata() -> CurrencyMetadata {
  CurrencyMetadata {
    name: b"Treasury Tax Token".to_vec(),
    symbol: b"TAXT".to_vec(),
    decimals: crate::ecosystem::params::TOKEN_DECIMALS,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tax_token_is_a_local_asset() {
    assert_eq!(TAX_TOKEN, AssetKind::Local(TAX_TOKEN_ID));
    assert!(!TAX_TOKEN.is_native());
    assert!(AssetKind::Native.is_native());
  }

  #[test]
  fn native_sorts_before_issued_assets() {
    assert!(AssetKind::Native < TAX_TOKEN);
    assert!(TAX_TOKEN < AssetKind::Foreign(0));
  }

  #[test]
  fn metadata_uses_token_decimals() {
    let meta = tax_token_metadata();
    assert_eq!(meta.symbol, b"TAXT".to_vec());
    assert_eq!(meta.decimals, 18);
  }
}
