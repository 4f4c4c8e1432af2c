//! SIREN to intra-community VAT number derivation
//!
//! A French VAT number is `FR` followed by a two digit key and the nine
//! digits of the SIREN. The key is `(12 + 3 * (siren mod 97)) mod 97`.

use std::fmt;
use thiserror::Error;

/// Country prefix of every derived VAT number
pub const COUNTRY_PREFIX: &str = "FR";

/// Number of digits in a SIREN
pub const SIREN_LEN: usize = 9;

/// Rejected identifier shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("SIREN must contain exactly {SIREN_LEN} digits, got {input:?}")]
pub struct FormatError {
    /// The offending input, as received
    pub input: String,
}

/// A derived VAT number, e.g. `FR89380129866`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VatNumber(String);

impl VatNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two digit control key
    pub fn key(&self) -> &str {
        &self.0[COUNTRY_PREFIX.len()..COUNTRY_PREFIX.len() + 2]
    }

    /// The SIREN the number was derived from
    pub fn siren(&self) -> &str {
        &self.0[COUNTRY_PREFIX.len() + 2..]
    }
}

impl fmt::Display for VatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VatNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Compute the control key for a nine digit SIREN value
pub fn vat_key(siren: u32) -> u32 {
    (12 + 3 * (siren % 97)) % 97
}

/// Derive the VAT number of a SIREN.
///
/// The input must be exactly nine ASCII digits; no trimming happens here.
///
/// ```
/// use vies_rs::core::vat::derive_vat_number;
///
/// assert_eq!(derive_vat_number("380129866").unwrap().as_str(), "FR89380129866");
/// assert!(derive_vat_number("38012986").is_err());
/// ```
pub fn derive_vat_number(siren: &str) -> Result<VatNumber, FormatError> {
    if siren.len() != SIREN_LEN || !siren.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError {
            input: siren.to_string(),
        });
    }

    // Nine digits always fit in a u32
    let value: u32 = siren.parse().map_err(|_| FormatError {
        input: siren.to_string(),
    })?;

    Ok(VatNumber(format!(
        "{}{:02}{}",
        COUNTRY_PREFIX,
        vat_key(value),
        siren
    )))
}
