//! Holds access to the base58check and CashAddr codecs, and the
//! `AddressEncoder` trait that chains implement on top of them.

/// Simplified access to base58check, and the common encoder errors
pub mod bases;

/// Simplified access to the CashAddr codec
pub mod cash;

/// The `AddressEncoder` trait
pub mod encoder;

pub use bases::*;
pub use cash::*;
pub use encoder::*;
