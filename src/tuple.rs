//! Tuples and their canonical keys.

use crate::error::{GenError, Result};
use crate::schema::Schema;

/// Separator between `<token>:<value>` pairs in a canonical key
pub const KEY_DELIMITER: char = ',';

/// One row of literals, one per schema column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    values: Vec<String>,
}

impl Tuple {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn arity(&self) -> usize {
        self.values.len()
    }

    /// Comma-separated literals, as they appear on a command line
    pub fn to_value_list(&self) -> String {
        self.values.join(",")
    }

    /// Derive the key used to detect duplicate rows.
    ///
    /// Pairs each literal with its column's type token, so `5` in an `int`
    /// column and `5` in a `sint` column never collide.
    pub fn canonical_key(&self, schema: &Schema) -> Result<String> {
        if self.arity() != schema.len() {
            return Err(GenError::ArityMismatch {
                expected: schema.len(),
                actual: self.arity(),
            });
        }

        let mut key = String::new();
        for (i, (ty, value)) in schema.columns().iter().zip(&self.values).enumerate() {
            if i > 0 {
                key.push(KEY_DELIMITER);
            }
            key.push_str(ty.abbrev());
            key.push(':');
            key.push_str(value);
        }
        Ok(key)
    }
}

/// Generate one tuple for `schema`, calling each column's generator once in order.
pub fn generate_tuple(schema: &Schema, rng: &mut dyn rand::RngCore) -> Tuple {
    Tuple::new(schema.columns().iter().map(|ty| ty.create(rng)).collect())
}
