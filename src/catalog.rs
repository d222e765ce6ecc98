//! Registry of the value types a schema can draw from.

use crate::error::{GenError, Result};
use crate::value::ValueType;
use ahash::AHashMap;

/// Every type token a generic schema may use, in catalog order.
pub const ALL_TYPE_TOKENS: &[&str] = &["int", "bint", "sint", "tint", "dec", "str4", "str128"];

/// The integer subset used for hash-index schemas.
pub const INTEGER_TYPE_TOKENS: &[&str] = &["int", "bint", "sint", "tint"];

/// Maps type tokens to constructed generators.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    by_token: AHashMap<&'static str, ValueType>,
}

impl TypeCatalog {
    /// Build the catalog holding all seven column types.
    pub fn standard() -> Result<Self> {
        let mut by_token = AHashMap::with_capacity(ALL_TYPE_TOKENS.len());
        for token in ALL_TYPE_TOKENS {
            by_token.insert(*token, ValueType::from_token(token)?);
        }
        Ok(Self { by_token })
    }

    /// Look up the generator for a type token.
    pub fn lookup(&self, token: &str) -> Result<ValueType> {
        self.by_token
            .get(token)
            .copied()
            .ok_or_else(|| GenError::UnknownTypeToken(token.to_string()))
    }

    /// Tokens usable by a generic schema
    pub fn all_types(&self) -> &'static [&'static str] {
        ALL_TYPE_TOKENS
    }

    /// Tokens usable by an integer-only schema
    pub fn integer_types(&self) -> &'static [&'static str] {
        INTEGER_TYPE_TOKENS
    }

    pub fn len(&self) -> usize {
        self.by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}
