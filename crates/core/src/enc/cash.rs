//! Contains simplified access to the `cashaddr` codec. The crate owns the
//! alphabet, the polymod checksum and the version byte; this module pins the
//! prefix to a network and maps hash types onto `AddressKind`.

use cashaddr::{CashEnc, HashType, Payload};

pub use cashaddr::{DecodeError, EncodeError};

use crate::{
    enc::bases::{EncodingError, EncodingResult},
    types::AddressKind,
};

/// Number of 5-bit checksum characters at the end of every CashAddr string
pub const CHECKSUM_LENGTH: usize = 8;

/// The CashAddr hash type for an address kind
pub fn hash_type(kind: AddressKind) -> HashType {
    match kind {
        AddressKind::PubkeyHash => HashType::P2PKH,
        AddressKind::ScriptHash => HashType::P2SH,
    }
}

/// The address kind for a CashAddr hash type. Only P2PKH and P2SH have a
/// legacy counterpart.
pub fn address_kind(hash_type: HashType) -> EncodingResult<AddressKind> {
    if hash_type == HashType::P2PKH {
        Ok(AddressKind::PubkeyHash)
    } else if hash_type == HashType::P2SH {
        Ok(AddressKind::ScriptHash)
    } else {
        Err(EncodingError::UnknownAddressType(hash_type.numeric_value()))
    }
}

/// Encode a hash as a lowercase CashAddr string, always including `prefix`.
pub fn encode_cashaddr(prefix: &str, kind: AddressKind, hash: &[u8]) -> EncodingResult<String> {
    Ok(hash.encode(prefix, hash_type(kind))?)
}

/// Decode a CashAddr string. Caller specifies an expected prefix, which may
/// be omitted from `s`. If a different prefix is found, returns
/// `WrongPrefix`.
pub fn decode_cashaddr(expected_prefix: &str, s: &str) -> EncodingResult<(AddressKind, Vec<u8>)> {
    let (prefix, body) = s.rsplit_once(':').unwrap_or((expected_prefix, s));
    if !prefix.eq_ignore_ascii_case(expected_prefix) {
        return Err(EncodingError::WrongPrefix {
            got: prefix.to_ascii_lowercase(),
            expected: expected_prefix.to_owned(),
        });
    }
    // the codec indexes past the checksum without checking the length
    if body.len() < CHECKSUM_LENGTH + 2 {
        return Err(EncodingError::InvalidSizeError);
    }

    let payload: Payload = [expected_prefix, ":", body].concat().parse()?;

    // the codec is case-insensitive, CashAddr strings are not
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(EncodingError::MixedCase);
    }

    let kind = address_kind(payload.hash_type())?;
    Ok((kind, payload.to_vec()))
}
