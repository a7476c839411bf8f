use crate::types::DecodedAddress;

/// An AddressEncoder encodes and decodes addresses for one chain on one
/// network. It converts between the chain's textual addresses and the
/// chain-agnostic `DecodedAddress`, which is what lets an address move from
/// one chain's encoding to another's.
///
/// The associated type defines what the encoder considers to be an "address."
pub trait AddressEncoder {
    /// A type representing the encoded address
    type Address;
    /// An error type that will be returned in case of encoding errors
    type Error;

    /// Encode a decoded address under this encoder's rules.
    fn encode_address(decoded: &DecodedAddress) -> Result<Self::Address, Self::Error>;

    /// Decode an address into its chain-agnostic representation.
    fn decode_address(addr: &Self::Address) -> Result<DecodedAddress, Self::Error>;

    /// Validate a string and wrap it in the address type.
    fn string_to_address(s: &str) -> Result<Self::Address, Self::Error>;

    /// Validate and decode a string in one step.
    fn decode_str(s: &str) -> Result<DecodedAddress, Self::Error> {
        Self::decode_address(&Self::string_to_address(s)?)
    }
}
