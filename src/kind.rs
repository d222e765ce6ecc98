//! Index test kinds understood by the harness.

use crate::schema::SchemaPolicy;
use serde::{Deserialize, Serialize};

/// Kind of unique index a block targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TestKind {
    /// Hash index over 1-4 integer columns
    #[default]
    UniqueIntsHash,
    /// Tree index over 1-4 integer columns
    UniqueIntsTree,
    /// Hash index over 1-50 columns of any type
    UniqueGenericHash,
    /// Tree index over 1-50 columns of any type
    UniqueGenericTree,
}

impl TestKind {
    pub const ALL: [TestKind; 4] = [
        TestKind::UniqueIntsHash,
        TestKind::UniqueIntsTree,
        TestKind::UniqueGenericHash,
        TestKind::UniqueGenericTree,
    ];

    /// Name written in block headers
    pub fn name(&self) -> &'static str {
        match self {
            TestKind::UniqueIntsHash => "UniqueIntsHash",
            TestKind::UniqueIntsTree => "UniqueIntsTree",
            TestKind::UniqueGenericHash => "UniqueGenericHash",
            TestKind::UniqueGenericTree => "UniqueGenericTree",
        }
    }

    pub fn schema_policy(&self) -> SchemaPolicy {
        match self {
            TestKind::UniqueIntsHash | TestKind::UniqueIntsTree => SchemaPolicy::IntegerOnly,
            TestKind::UniqueGenericHash | TestKind::UniqueGenericTree => SchemaPolicy::Generic,
        }
    }

    /// Test name for the `n`th block, e.g. `TestUniqueIntsHash_0`
    pub fn test_name(&self, n: u64) -> String {
        format!("Test{}_{}", self.name(), n)
    }
}

impl std::str::FromStr for TestKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestKind::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown test kind: {}. Use UniqueIntsHash, UniqueIntsTree, UniqueGenericHash, or UniqueGenericTree",
                    s
                )
            })
    }
}

impl TryFrom<String> for TestKind {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::fmt::Display for TestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
