//! Randomized script generator for unique index tests.
//!
//! Each test block gets a random column schema, a set of distinct random
//! tuples for it, and a fixed sequence of insert / lookup / delete commands
//! (with their expected outcomes) for an external index harness to replay.
//!
//! ```rust
//! use index_script_gen::{Driver, GeneratorConfig};
//!
//! let config = GeneratorConfig {
//!     seed: 42,
//!     blocks: Some(2),
//!     ..Default::default()
//! };
//! let mut driver = Driver::new(config).unwrap();
//! let mut script = Vec::new();
//! let stats = driver.run(&mut script).unwrap();
//!
//! assert_eq!(stats.blocks, 2);
//! assert!(String::from_utf8(script).unwrap().ends_with("exec\ndone\n"));
//! ```

pub mod catalog;
pub mod config;
pub mod dedup;
pub mod driver;
pub mod emitter;
pub mod error;
pub mod kind;
pub mod schema;
pub mod tuple;
pub mod value;

pub use catalog::TypeCatalog;
pub use config::GeneratorYamlConfig;
pub use dedup::Deduplicator;
pub use driver::{Driver, GenerateStats, GeneratorConfig};
pub use emitter::{Command, ScriptEmitter, TestBlock, BLOCK_SEQUENCE};
pub use error::GenError;
pub use kind::TestKind;
pub use schema::{Schema, SchemaBuilder, SchemaPolicy};
pub use tuple::{generate_tuple, Tuple};
pub use value::ValueType;
