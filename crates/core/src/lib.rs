//! # Forkaddr Core
//!
//! `forkaddr-core` contains the encoding primitives used by the
//! `forkaddr-translator` crate.
//!
//! ## Crate Layout
//!
//! ### Enc
//!
//! The enc module holds simplified access to the `bs58` base58check
//! encoder/decoder and the `cashaddr` codec, and the `AddressEncoder` trait.
//! An `AddressEncoder` turns an address string into a chain-agnostic
//! `DecodedAddress` and back. Each supported chain implements it once.
//!
//! ### Types
//!
//! `DecodedAddress` is the pivot of every translation. It holds the network,
//! the address kind (pubkey hash or script hash) and the raw hash payload.
//!
//! ### Hashes
//!
//! Bitcoin's `ripemd160(sha256(x))`, used to build a `DecodedAddress` from a
//! public key or a redeem script.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]

pub mod enc;
pub mod hashes;
pub mod prelude;
pub mod types;
