// 🧾 Recipient Model - one disclosed row of the BLT Kesra list
//
// The registration number (KK) is the only sensitive field. It is kept behind a newtype
// that can be masked or compared, but never printed in full.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed length of a household registration number.
pub const REGISTRATION_NUMBER_LEN: usize = 16;

/// Replaces the middle digits of a masked registration number.
pub const MASK_MARKER: &str = "******";

const MASK_PREFIX_LEN: usize = 6;
const MASK_SUFFIX_LEN: usize = 4;

// ============================================================================
// REGION (DUSUN)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "DSN. KOMIS")]
    Komis,

    #[serde(rename = "DSN. TOTONGAN")]
    Totongan,

    #[serde(rename = "DSN. DUKO")]
    Duko,

    #[serde(rename = "DSN. MALAKAH")]
    Malakah,
}

impl Region {
    /// Picker order.
    pub const ALL: [Region; 4] = [Region::Komis, Region::Totongan, Region::Duko, Region::Malakah];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Komis => "DSN. KOMIS",
            Region::Totongan => "DSN. TOTONGAN",
            Region::Duko => "DSN. DUKO",
            Region::Malakah => "DSN. MALAKAH",
        }
    }

    /// Short name without the "DSN." prefix, used on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Region::Komis => "komis",
            Region::Totongan => "totongan",
            Region::Duko => "duko",
            Region::Malakah => "malakah",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    /// Accepts the full label ("DSN. KOMIS") or the short name ("komis"), any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Region::ALL
            .iter()
            .copied()
            .find(|region| {
                region.as_str().eq_ignore_ascii_case(needle)
                    || region.short_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| {
                format!(
                    "unknown region '{}' (expected one of: komis, totongan, duko, malakah)",
                    s
                )
            })
    }
}

// ============================================================================
// REGISTRATION NUMBER (KK)
// ============================================================================

/// A 16-digit household registration number.
///
/// `Debug` prints the masked form so the full value cannot leak through logs or panics.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationNumber(String);

impl RegistrationNumber {
    /// Returns `None` unless `raw` is exactly 16 ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == REGISTRATION_NUMBER_LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Some(RegistrationNumber(raw.to_string()))
        } else {
            None
        }
    }

    pub fn masked(&self) -> String {
        mask_registration_number(&self.0)
    }

    /// Exact equality against a candidate typed by a visitor.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for RegistrationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RegistrationNumber").field(&self.masked()).finish()
    }
}

/// Show the first 6 and last 4 characters around a fixed marker.
///
/// Values shorter than 10 characters come back unchanged.
pub fn mask_registration_number(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    if chars.len() < MASK_PREFIX_LEN + MASK_SUFFIX_LEN {
        return raw.to_string();
    }

    let start: String = chars[..MASK_PREFIX_LEN].iter().collect();
    let end: String = chars[chars.len() - MASK_SUFFIX_LEN..].iter().collect();
    format!("{}{}{}", start, MASK_MARKER, end)
}

// ============================================================================
// RECIPIENT
// ============================================================================

/// Raw row as it appears in the data file (column names follow the published sheet)
#[derive(Deserialize, Clone)]
pub struct RecipientRecord {
    pub id: u32,

    /// Unvalidated; checked when the store is built
    #[serde(rename = "no_kk")]
    pub registration_number: String,

    #[serde(rename = "nama")]
    pub full_name: String,

    #[serde(rename = "alamat")]
    pub region: Region,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    /// Row identity, never displayed
    pub id: u32,
    pub registration_number: RegistrationNumber,
    pub full_name: String,
    pub region: Region,
}

impl Recipient {
    pub fn new(id: u32, registration_number: RegistrationNumber, full_name: &str, region: Region) -> Self {
        Recipient {
            id,
            registration_number,
            full_name: full_name.to_string(),
            region,
        }
    }

    pub fn masked_registration_number(&self) -> String {
        self.registration_number.masked()
    }

    /// Case-insensitive substring match on name or region label.
    /// `lower_term` must already be lower-cased.
    pub fn matches_search(&self, lower_term: &str) -> bool {
        self.full_name.to_lowercase().contains(lower_term)
            || self.region.as_str().to_lowercase().contains(lower_term)
    }
}
