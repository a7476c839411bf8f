//! Holds the Bitcoin `Hash160` digest.

use digest::Digest;
use ripemd::Ripemd160;
use sha2::Sha256;

/// A 20-byte `ripemd160(sha256(x))` digest
pub type Hash160Digest = [u8; 20];

/// Compute Bitcoin's `Hash160` of `data`. This is the hash committed to by
/// legacy and CashAddr pubkey-hash and script-hash addresses.
pub fn hash160(data: &[u8]) -> Hash160Digest {
    let sha = Sha256::digest(data);
    let rmd = Ripemd160::digest(sha);

    let mut digest = Hash160Digest::default();
    digest.copy_from_slice(&rmd[..]);
    digest
}
