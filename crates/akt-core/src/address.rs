//! # Account Addresses
//!
//! Owner and provider flags carry bech32 account addresses such as
//! `akash1...`. Two call paths treat them differently and the types keep
//! the distinction explicit:
//!
//! - **Required** (identifier path): the provider of a [`BidId`](crate::BidId)
//!   must decode. The decoded [`AccAddress`] is stored, not the raw string.
//! - **Optional** (filter path): an empty string means "no filter". A
//!   non-empty string must still decode, but the input string is kept
//!   unchanged inside an [`OptionalAddress`].
//!
//! Decoding sits behind the [`AddressDecoder`] trait so callers can swap
//! the account prefix or the encoding scheme. [`Bech32Codec`] is the
//! implementation used by the CLI.

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use serde::Serialize;

use crate::error::{AddressError, ValidationError};

/// Human-readable prefix of account addresses on the default network.
pub const DEFAULT_ACCOUNT_PREFIX: &str = "akash";

/// Longest address payload accepted, in bytes.
pub const MAX_ADDRESS_LEN: usize = 255;

/// Decodes account address strings.
pub trait AddressDecoder {
    /// Decode `value` into an account address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] when `value` is empty or
    /// does not decode under this decoder's scheme.
    fn decode(&self, value: &str) -> Result<AccAddress, ValidationError>;
}

/// A decoded account address.
///
/// Holds the raw address bytes and the canonical (lowercase) bech32
/// encoding. Serializes as the encoded string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccAddress {
    bytes: Vec<u8>,
    encoded: String,
}

impl AccAddress {
    /// The raw address bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The canonical bech32 encoding.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl std::fmt::Display for AccAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl Serialize for AccAddress {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.encoded)
    }
}

/// An address filter: either unset (empty) or a string known to decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OptionalAddress(String);

impl OptionalAddress {
    /// An unset filter.
    pub fn unset() -> Self {
        Self::default()
    }

    /// Validate an address filter value.
    ///
    /// Empty input yields an unset filter. Non-empty input must decode with
    /// `decoder`; on success the input is kept exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] when non-empty input
    /// does not decode.
    pub fn parse<D>(value: &str, decoder: &D) -> Result<Self, ValidationError>
    where
        D: AddressDecoder + ?Sized,
    {
        if !value.is_empty() {
            decoder.decode(value)?;
        }
        Ok(Self(value.to_string()))
    }

    /// Whether no address constraint applies.
    pub fn is_unset(&self) -> bool {
        self.0.is_empty()
    }

    /// The filter string; empty when unset.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The address, or `None` when unset.
    pub fn as_option(&self) -> Option<&str> {
        (!self.0.is_empty()).then_some(self.0.as_str())
    }
}

impl std::fmt::Display for OptionalAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bech32 (BIP-173 checksum) account address codec bound to one prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bech32Codec {
    hrp: Hrp,
}

impl Bech32Codec {
    /// Create a codec for `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPrefix`] if `prefix` is not a
    /// valid bech32 human-readable part.
    pub fn new(prefix: &str) -> Result<Self, ValidationError> {
        let hrp =
            Hrp::parse(prefix).map_err(|_| ValidationError::InvalidPrefix(prefix.to_string()))?;
        Ok(Self { hrp })
    }

    /// Codec for [`DEFAULT_ACCOUNT_PREFIX`].
    pub fn akash() -> Self {
        Self {
            hrp: Hrp::parse_unchecked(DEFAULT_ACCOUNT_PREFIX),
        }
    }

    /// The lowercase prefix this codec accepts.
    pub fn prefix(&self) -> String {
        self.hrp.to_lowercase()
    }

    /// Encode raw address bytes under this codec's prefix.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidAddress`] if `bytes` is empty,
    /// longer than [`MAX_ADDRESS_LEN`], or cannot be encoded.
    pub fn encode(&self, bytes: &[u8]) -> Result<AccAddress, ValidationError> {
        let invalid = |reason| ValidationError::InvalidAddress {
            value: String::new(),
            reason,
        };
        check_payload_len(bytes.len()).map_err(invalid)?;
        let encoded = bech32::encode::<Bech32>(self.hrp, bytes)
            .map_err(|e| invalid(AddressError::Decode(e.to_string())))?;
        Ok(AccAddress {
            bytes: bytes.to_vec(),
            encoded,
        })
    }

    fn decode_inner(&self, value: &str) -> Result<AccAddress, AddressError> {
        if value.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let checked = CheckedHrpstring::new::<Bech32>(value)
            .map_err(|e| AddressError::Decode(e.to_string()))?;

        let found = checked.hrp().to_lowercase();
        let expected = self.prefix();
        if found != expected {
            return Err(AddressError::PrefixMismatch { expected, found });
        }

        let bytes: Vec<u8> = checked.byte_iter().collect();
        check_payload_len(bytes.len())?;

        // byte_iter drops leftover bits; only the exact re-encoding is accepted.
        let encoded = bech32::encode::<Bech32>(self.hrp, &bytes)
            .map_err(|e| AddressError::Decode(e.to_string()))?;
        if encoded != value.to_ascii_lowercase() {
            return Err(AddressError::InvalidPadding);
        }

        Ok(AccAddress { bytes, encoded })
    }
}

impl Default for Bech32Codec {
    fn default() -> Self {
        Self::akash()
    }
}

impl AddressDecoder for Bech32Codec {
    fn decode(&self, value: &str) -> Result<AccAddress, ValidationError> {
        self.decode_inner(value)
            .map_err(|reason| ValidationError::InvalidAddress {
                value: value.to_string(),
                reason,
            })
    }
}

fn check_payload_len(len: usize) -> Result<(), AddressError> {
    if len == 0 {
        return Err(AddressError::EmptyPayload);
    }
    if len > MAX_ADDRESS_LEN {
        return Err(AddressError::TooLong {
            len,
            max: MAX_ADDRESS_LEN,
        });
    }
    Ok(())
}
