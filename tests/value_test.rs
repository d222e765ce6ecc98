//! Literal shape tests for every value type, plus catalog and schema wiring.

use index_script_gen::value::{SHORT_ALPHABET, WORDS};
use index_script_gen::{
    generate_tuple, Deduplicator, GenError, Schema, SchemaBuilder, SchemaPolicy, Tuple,
    TypeCatalog, ValueType,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use regex::Regex;

const SAMPLES: usize = 2000;

#[test]
fn test_decimal_literal_shape() {
    let re = Regex::new(r"^-?\d+\.\d{1,8}$").unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let v = ValueType::Decimal.create(&mut rng);
        assert!(re.is_match(&v), "{v}");
    }
}

#[test]
fn test_integer_literal_shapes() {
    let re = Regex::new(r"^-?\d+$").unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for ty in [
        ValueType::Int,
        ValueType::BigInt,
        ValueType::SmallInt,
        ValueType::TinyInt,
    ] {
        for _ in 0..SAMPLES {
            let v = ty.create(&mut rng);
            assert!(re.is_match(&v), "{ty}: {v}");
            assert_ne!(v, "-0");
        }
    }
}

#[test]
fn test_small_int_magnitudes() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..SAMPLES {
        let s: i64 = ValueType::SmallInt.create(&mut rng).parse().unwrap();
        assert!(s.unsigned_abs() <= 0x7FFF);
        let t: i64 = ValueType::TinyInt.create(&mut rng).parse().unwrap();
        assert!(t.unsigned_abs() <= 0x7F);
    }
}

#[test]
fn test_varchar4_literals() {
    let re = Regex::new(r"^[abcd]{4}$").unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let v = ValueType::VarChar4.create(&mut rng);
        assert!(re.is_match(&v), "{v}");
    }
    assert_eq!(SHORT_ALPHABET, &['a', 'b', 'c', 'd']);
}

#[test]
fn test_varchar128_literals() {
    let pattern = format!("^(?:{}){{1,10}}$", WORDS.join("|"));
    let re = Regex::new(&pattern).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..SAMPLES {
        let v = ValueType::VarChar128.create(&mut rng);
        assert!(re.is_match(&v), "{v}");
        assert!(v.chars().all(|c| c.is_ascii_lowercase()), "{v}");
    }
}

#[test]
fn test_single_str4_column_schema() {
    let schema = Schema::new(vec![ValueType::VarChar4]);
    let mut rng = StdRng::seed_from_u64(17);
    let mut dedup = Deduplicator::new();
    for _ in 0..10 {
        let tuple = generate_tuple(&schema, &mut rng);
        assert_eq!(tuple.values()[0].len(), 4);
        dedup.insert(&schema, tuple).unwrap();
    }
    for tuple in dedup.into_sorted() {
        assert_eq!(tuple.to_value_list().len(), 4);
    }
}

#[test]
fn test_schema_tuples_have_schema_arity() {
    let catalog = TypeCatalog::standard().unwrap();
    let builder = SchemaBuilder::new(&catalog);
    let mut rng = StdRng::seed_from_u64(21);

    for policy in [SchemaPolicy::Generic, SchemaPolicy::IntegerOnly] {
        for _ in 0..200 {
            let schema = builder.build(policy, &mut rng).unwrap();
            assert!(policy.column_range().contains(&schema.len()));
            let tuple = generate_tuple(&schema, &mut rng);
            assert_eq!(tuple.arity(), schema.len());
            assert_eq!(
                tuple.canonical_key(&schema).unwrap().split(',').count(),
                schema.len()
            );
        }
    }
}

#[test]
fn test_equal_keys_keep_one_tuple() {
    let schema = Schema::new(vec![ValueType::SmallInt, ValueType::TinyInt]);
    let mut dedup = Deduplicator::new();
    for values in [["5", "-3"], ["-100", "20"], ["5", "-3"], ["5", "-3"]] {
        let tuple = Tuple::new(values.iter().map(|v| v.to_string()).collect());
        dedup.insert(&schema, tuple).unwrap();
    }
    assert_eq!(dedup.len(), 2);
    assert_eq!(dedup.duplicates(), 2);
}

#[test]
fn test_factory_errors_are_misconfiguration() {
    let catalog = TypeCatalog::standard().unwrap();
    let err = catalog.lookup("float").unwrap_err();
    assert!(matches!(err, GenError::UnknownTypeToken(_)));
    assert!(err.is_misconfiguration());

    let err = ValueType::varchar(64).unwrap_err();
    assert!(matches!(err, GenError::UnsupportedVarCharSize(64)));
    assert!(err.is_misconfiguration());
}
