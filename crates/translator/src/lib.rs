//! This crate translates addresses between legacy Bitcoin (base58check) and
//! Bitcoin Cash (CashAddr) encodings. Both encodings commit to the same
//! `Hash160`, so an address on one chain is translated by decoding it into a
//! `DecodedAddress` and re-encoding that under the other chain's rules.
//!
//! The network of each address (mainnet, testnet or regtest) is resolved
//! while decoding, so one `AddressTranslator` handles all of them. The
//! `MainnetTranslator`, `TestnetTranslator` and `RegtestTranslator` aliases
//! accept only their own network.
//!
//! ```
//! use forkaddr_translator::{AddressTranslator, Chain, ChainTranslator, MainnetTranslator};
//!
//! let legacy = "1BpEi6DfDAUFd7GtittLSdBeYJvcoaVggu";
//! assert_eq!(AddressTranslator::address_coin(legacy), Some(Chain::Btc));
//!
//! let cash = AddressTranslator::translate_output(legacy).unwrap();
//! assert_eq!(
//!     cash.first(),
//!     Some("bitcoincash:qpm2qsznhks23z7629mms6s4cwef74vcwvy22gdx6a")
//! );
//! assert_eq!(AddressTranslator::translate_input(cash).unwrap().first(), Some(legacy));
//!
//! let testnet = AddressTranslator::translate("mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn", Chain::Bch, None).unwrap();
//! assert_eq!(
//!     testnet.first(),
//!     Some("bchtest:qqjr7yu573z4faxw8ltgvjwpntwys08fysk07zmvce")
//! );
//! assert_eq!(MainnetTranslator::address_coin("mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn"), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

/// Supported chains
pub mod chain;

/// Per-chain address encoders
pub mod enc;

/// Network parameters
pub mod nets;

/// The address translator
pub mod translator;

/// Common re-exports
pub mod prelude;

/// Network selected by feature flag
#[cfg(any(feature = "mainnet", feature = "testnet", feature = "regtest"))]
pub mod defaults;

pub use chain::Chain;
pub use translator::*;

use forkaddr_core::enc::EncodingError;
use thiserror::Error;

/// Errors for this library
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Error bubbled up from an address encoder
    #[error(transparent)]
    EncodingError(#[from] EncodingError),

    /// Neither chain's rules accept the address
    #[error("Could not determine the chain of address {:?}", .0)]
    UnknownChain(String),

    /// Chain identifier is not "btc" or "bch"
    #[error("Unsupported chain identifier {:?}. Expected \"btc\" or \"bch\"", .0)]
    UnsupportedChain(String),
}

/// A simple result type alias
pub type TranslateResult<T> = Result<T, TranslateError>;
