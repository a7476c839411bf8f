//! Contains simplified access to the `bs58` base58check encoder/decoder for
//! legacy addresses. Also defines common encoder errors.

use thiserror::Error;

use crate::types::{AddressKind, Network};

/// Errors that can be returned by an `AddressEncoder`.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// Bubbled up error from bs58 library
    #[error("B58Error: {:?}", .0)]
    B58Error(#[from] bs58::decode::Error),

    /// Bubbled up decoding error from cashaddr library
    #[error("CashDecodeError: {}", .0)]
    CashDecodeError(#[from] cashaddr::DecodeError),

    /// Bubbled up encoding error from cashaddr library
    #[error("CashEncodeError: {}", .0)]
    CashEncodeError(#[from] cashaddr::EncodeError),

    /// Legacy version byte is not a pubkey-hash or script-hash version of the
    /// current network.
    #[error("Unknown version byte {:#04x}. Hint: Is this address for another network?", got)]
    WrongVersion {
        /// The actual version byte.
        got: u8,
    },

    /// CashAddr prefix does not match the current network.
    #[error("CashAddr prefix does not match. \nGot {:?} expected {:?} Hint: Is this address for another network?", got, expected)]
    WrongPrefix {
        /// The actual prefix.
        got: String,
        /// The expected prefix.
        expected: String,
    },

    /// The decoded address belongs to a different network than the encoder.
    #[error("Cannot encode a {} address with a {} encoder", got, expected)]
    WrongNetwork {
        /// The network of the decoded address.
        got: Network,
        /// The network of the encoder.
        expected: Network,
    },

    /// The address string decodes to a different kind than its wrapper claims
    #[error("Address decodes to {:?}, but was wrapped as {:?}", got, expected)]
    KindMismatch {
        /// The kind the string decodes to.
        got: AddressKind,
        /// The kind of the wrapping variant.
        expected: AddressKind,
    },

    /// CashAddr string mixes upper and lower case
    #[error("CashAddr string mixes upper and lower case")]
    MixedCase,

    /// CashAddr type bits are neither pubkey hash nor script hash
    #[error("Unknown CashAddr address type {}", .0)]
    UnknownAddressType(u8),

    /// Incorrect address size
    #[error("InvalidSizeError")]
    InvalidSizeError,
}

impl EncodingError {
    /// True if the address is well-formed but belongs to a network other
    /// than the encoder's.
    pub fn is_network_mismatch(&self) -> bool {
        matches!(
            self,
            EncodingError::WrongVersion { .. }
                | EncodingError::WrongPrefix { .. }
                | EncodingError::WrongNetwork { .. }
        )
    }
}

/// A simple result type alias
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Encode a payload to base58check, prefixed by `version`.
pub fn encode_base58(version: u8, v: &[u8]) -> String {
    let mut data = Vec::with_capacity(v.len() + 1);
    data.push(version);
    data.extend_from_slice(v);
    bs58::encode(data).with_check().into_string()
}

/// Decode a base58check string. Returns the version byte and the payload
/// that follows it.
pub fn decode_base58(s: &str) -> EncodingResult<(u8, Vec<u8>)> {
    let data = bs58::decode(s).with_check(None).into_vec()?;
    let (version, payload) = data.split_first().ok_or(EncodingError::InvalidSizeError)?;
    Ok((*version, payload.to_vec()))
}
