//! Re-exports of common types

pub use crate::{
    enc::{AddressEncoder, EncodingError, EncodingResult},
    hashes::{hash160, Hash160Digest},
    types::{AddressKind, DecodedAddress, Network},
};
