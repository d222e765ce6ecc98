//! Random literal generators, one per column type.
//!
//! Every type knows two things: how to produce a random literal and the
//! short token that names it in block headers and canonical keys.
//!
//! | Type         | Token    | Literal                                      |
//! |--------------|----------|----------------------------------------------|
//! | `Int`        | `int`    | signed 32-bit magnitude, random sign         |
//! | `BigInt`     | `bint`   | signed 64-bit magnitude, random sign         |
//! | `SmallInt`   | `sint`   | magnitude in `0..=0x7FFF`                    |
//! | `TinyInt`    | `tint`   | magnitude in `0..=0x7F`                      |
//! | `Decimal`    | `dec`    | `<signed int>.<1-8 digits>`                  |
//! | `VarChar4`   | `str4`   | four letters from `{a,b,c,d}`                |
//! | `VarChar128` | `str128` | 1 to 10 dictionary words, no separator       |

mod words;

pub use words::{SHORT_ALPHABET, WORDS};

use crate::error::{GenError, Result};
use rand::Rng;

const SMALLINT_MAX: i64 = 0x7FFF;
const TINYINT_MAX: i64 = 0x7F;
const MAX_FRACTION_EXCLUSIVE: u32 = 100_000_000;
const VARCHAR4_LEN: usize = 4;
const VARCHAR128_MAX_WORDS: usize = 10;

/// Column value type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    BigInt,
    SmallInt,
    TinyInt,
    Decimal,
    VarChar4,
    VarChar128,
}

impl ValueType {
    /// Build a VARCHAR generator. Only sizes 4 and 128 exist.
    pub fn varchar(size: usize) -> Result<Self> {
        match size {
            4 => Ok(ValueType::VarChar4),
            128 => Ok(ValueType::VarChar128),
            other => Err(GenError::UnsupportedVarCharSize(other)),
        }
    }

    /// Map a type token back to its generator.
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "int" => Ok(ValueType::Int),
            "bint" => Ok(ValueType::BigInt),
            "sint" => Ok(ValueType::SmallInt),
            "tint" => Ok(ValueType::TinyInt),
            "dec" => Ok(ValueType::Decimal),
            "str4" => ValueType::varchar(4),
            "str128" => ValueType::varchar(128),
            other => Err(GenError::UnknownTypeToken(other.to_string())),
        }
    }

    /// Stable short token for headers and canonical keys
    pub fn abbrev(&self) -> &'static str {
        match self {
            ValueType::Int => "int",
            ValueType::BigInt => "bint",
            ValueType::SmallInt => "sint",
            ValueType::TinyInt => "tint",
            ValueType::Decimal => "dec",
            ValueType::VarChar4 => "str4",
            ValueType::VarChar128 => "str128",
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ValueType::Int | ValueType::BigInt | ValueType::SmallInt | ValueType::TinyInt
        )
    }

    /// Produce one random literal of this type.
    pub fn create(&self, rng: &mut dyn rand::RngCore) -> String {
        match self {
            ValueType::Int => signed(rng, i32::MAX as i64).to_string(),
            ValueType::BigInt => signed(rng, i64::MAX).to_string(),
            ValueType::SmallInt => nonzero_signed(rng, SMALLINT_MAX).to_string(),
            ValueType::TinyInt => nonzero_signed(rng, TINYINT_MAX).to_string(),
            ValueType::Decimal => {
                let whole = signed(rng, i32::MAX as i64);
                let fraction = rng.random_range(0..MAX_FRACTION_EXCLUSIVE);
                format!("{}.{}", whole, fraction)
            }
            ValueType::VarChar4 => (0..VARCHAR4_LEN)
                .map(|_| SHORT_ALPHABET[rng.random_range(0..SHORT_ALPHABET.len())])
                .collect(),
            ValueType::VarChar128 => {
                let count = rng.random_range(1..=VARCHAR128_MAX_WORDS);
                let mut s = String::new();
                for _ in 0..count {
                    s.push_str(WORDS[rng.random_range(0..WORDS.len())]);
                }
                s
            }
        }
    }
}

impl std::str::FromStr for ValueType {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        ValueType::from_token(s)
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Magnitude in `0..=max` with an independent coin-flip sign.
fn signed(rng: &mut dyn rand::RngCore, max: i64) -> i64 {
    let magnitude = rng.random_range(0..=max);
    if rng.random_bool(0.5) {
        -magnitude
    } else {
        magnitude
    }
}

/// Magnitude in `0..=max`; the sign is only drawn for a non-zero magnitude.
fn nonzero_signed(rng: &mut dyn rand::RngCore, max: i64) -> i64 {
    let magnitude = rng.random_range(0..=max);
    if magnitude != 0 && rng.random_bool(0.5) {
        -magnitude
    } else {
        magnitude
    }
}
