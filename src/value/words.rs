//! Word list for VARCHAR(128) literals.
//!
//! Words are drawn with replacement and concatenated without a separator,
//! so every entry must stay lowercase ASCII.

pub const WORDS: &[&str] = &[
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel", "india", "juliet",
    "kilo", "lima", "mike", "november", "oscar", "papa", "quebec", "romeo", "sierra", "tango",
    "uniform", "victor", "whiskey", "xray", "yankee", "zulu", "volt",
];

/// Letters that VARCHAR(4) literals are built from.
pub const SHORT_ALPHABET: &[char] = &['a', 'b', 'c', 'd'];
