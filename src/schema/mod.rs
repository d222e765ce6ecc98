//! Random index schemas.
//!
//! A schema is the ordered list of column types for one test block's index.
//! Two policies exist:
//! - `Generic`: 1 to 50 columns drawn from all seven types (tree indexes)
//! - `IntegerOnly`: 1 to 4 columns drawn from the integer types (hash indexes)

use crate::catalog::TypeCatalog;
use crate::error::Result;
use crate::value::ValueType;
use rand::Rng;
use std::ops::RangeInclusive;

pub const MAX_GENERIC_COLUMNS: usize = 50;
pub const MAX_INTEGER_COLUMNS: usize = 4;

/// Column-type policy for schema generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaPolicy {
    Generic,
    IntegerOnly,
}

impl SchemaPolicy {
    /// Allowed column counts, inclusive
    pub fn column_range(&self) -> RangeInclusive<usize> {
        match self {
            SchemaPolicy::Generic => 1..=MAX_GENERIC_COLUMNS,
            SchemaPolicy::IntegerOnly => 1..=MAX_INTEGER_COLUMNS,
        }
    }

    /// Type tokens each column is drawn from
    pub fn type_pool<'a>(&self, catalog: &'a TypeCatalog) -> &'a [&'static str] {
        match self {
            SchemaPolicy::Generic => catalog.all_types(),
            SchemaPolicy::IntegerOnly => catalog.integer_types(),
        }
    }
}

/// Ordered column types of one index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<ValueType>,
}

impl Schema {
    pub fn new(columns: Vec<ValueType>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[ValueType] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Type tokens in column order, as written in block headers
    pub fn tokens(&self) -> Vec<&'static str> {
        self.columns.iter().map(ValueType::abbrev).collect()
    }
}

/// Draws random schemas from a catalog.
pub struct SchemaBuilder<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> SchemaBuilder<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    /// Build a schema: the column count is uniform over the policy's range,
    /// then each column type is drawn independently from its pool.
    pub fn build(&self, policy: SchemaPolicy, rng: &mut dyn rand::RngCore) -> Result<Schema> {
        let count = rng.random_range(policy.column_range());
        let pool = policy.type_pool(self.catalog);

        let mut columns = Vec::with_capacity(count);
        for _ in 0..count {
            let token = pool[rng.random_range(0..pool.len())];
            columns.push(self.catalog.lookup(token)?);
        }

        Ok(Schema::new(columns))
    }
}
