//! Renders test blocks as harness script lines.
//!
//! A block is written as:
//!
//! ```text
//! begin TestUniqueIntsHash_0 UniqueIntsHash sint,tint
//! is 5,-3        insert, expected to succeed
//! ls 5,-3        lookup, expected to find the row
//! if 5,-3        insert again, expected to conflict
//! ds 5,-3        delete, expected to succeed
//! df 5,-3        delete again, expected to fail
//! lf 5,-3        lookup, expected to miss
//! exec
//! ```
//!
//! Each command group covers every tuple of the block before the next group starts.

use crate::kind::TestKind;
use crate::schema::Schema;
use crate::tuple::Tuple;
use std::io::{self, BufWriter, Write};

pub const EMITTER_BUFFER_SIZE: usize = 64 * 1024;

/// Index operation plus its expected outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    InsertSuccess,
    InsertFailure,
    LookupSuccess,
    LookupFailure,
    DeleteSuccess,
    DeleteFailure,
}

impl Command {
    pub fn token(&self) -> &'static str {
        match self {
            Command::InsertSuccess => "is",
            Command::InsertFailure => "if",
            Command::LookupSuccess => "ls",
            Command::LookupFailure => "lf",
            Command::DeleteSuccess => "ds",
            Command::DeleteFailure => "df",
        }
    }
}

/// Order of the command groups inside every block
pub const BLOCK_SEQUENCE: [Command; 6] = [
    Command::InsertSuccess,
    Command::LookupSuccess,
    Command::InsertFailure,
    Command::DeleteSuccess,
    Command::DeleteFailure,
    Command::LookupFailure,
];

/// One schema, its distinct tuples, and the block identity.
#[derive(Debug, Clone)]
pub struct TestBlock {
    pub name: String,
    pub kind: TestKind,
    pub schema: Schema,
    pub tuples: Vec<Tuple>,
}

impl TestBlock {
    /// Lines this block occupies: header, six groups, terminator
    pub fn line_count(&self) -> u64 {
        2 + (BLOCK_SEQUENCE.len() * self.tuples.len()) as u64
    }
}

/// Streams blocks to an output in emission order.
pub struct ScriptEmitter<W: Write> {
    writer: BufWriter<W>,
    lines: u64,
}

impl<W: Write> ScriptEmitter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(EMITTER_BUFFER_SIZE, inner),
            lines: 0,
        }
    }

    /// Leading comment naming the generator
    pub fn write_preamble(&mut self, generator_name: &str) -> io::Result<()> {
        writeln!(self.writer, "# File generated by {}", generator_name)?;
        self.lines += 1;
        Ok(())
    }

    /// Write one complete block and flush, so a reader never sees half a block.
    pub fn emit_block(&mut self, block: &TestBlock) -> io::Result<()> {
        writeln!(
            self.writer,
            "begin {} {} {}",
            block.name,
            block.kind.name(),
            block.schema.tokens().join(",")
        )?;

        let value_lists: Vec<String> = block.tuples.iter().map(Tuple::to_value_list).collect();
        for command in BLOCK_SEQUENCE {
            for values in &value_lists {
                writeln!(self.writer, "{} {}", command.token(), values)?;
            }
        }

        self.writer.write_all(b"exec\n")?;
        self.writer.flush()?;
        self.lines += block.line_count();
        Ok(())
    }

    /// Closing line; only reachable for bounded runs
    pub fn write_trailer(&mut self) -> io::Result<()> {
        self.writer.write_all(b"done\n")?;
        self.lines += 1;
        self.writer.flush()
    }

    pub fn lines_written(&self) -> u64 {
        self.lines
    }

    /// Flush and hand back the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueType;

    fn tuple(values: &[&str]) -> Tuple {
        Tuple::new(values.iter().map(|v| v.to_string()).collect())
    }

    fn render(block: &TestBlock) -> String {
        let mut emitter = ScriptEmitter::new(Vec::new());
        emitter.emit_block(block).unwrap();
        assert_eq!(emitter.lines_written(), block.line_count());
        String::from_utf8(emitter.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_block_layout() {
        let block = TestBlock {
            name: TestKind::UniqueIntsHash.test_name(0),
            kind: TestKind::UniqueIntsHash,
            schema: Schema::new(vec![ValueType::SmallInt, ValueType::TinyInt]),
            tuples: vec![tuple(&["-100", "20"]), tuple(&["5", "-3"])],
        };

        let expected = "\
begin TestUniqueIntsHash_0 UniqueIntsHash sint,tint
is -100,20
is 5,-3
ls -100,20
ls 5,-3
if -100,20
if 5,-3
ds -100,20
ds 5,-3
df -100,20
df 5,-3
lf -100,20
lf 5,-3
exec
";
        assert_eq!(render(&block), expected);
    }

    #[test]
    fn test_empty_block_has_header_and_terminator() {
        let block = TestBlock {
            name: "TestUniqueIntsTree_3".to_string(),
            kind: TestKind::UniqueIntsTree,
            schema: Schema::new(vec![ValueType::Int]),
            tuples: Vec::new(),
        };
        assert_eq!(
            render(&block),
            "begin TestUniqueIntsTree_3 UniqueIntsTree int\nexec\n"
        );
    }

    #[test]
    fn test_preamble_and_trailer() {
        let mut emitter = ScriptEmitter::new(Vec::new());
        emitter.write_preamble("index-script-gen").unwrap();
        emitter.write_trailer().unwrap();
        assert_eq!(emitter.lines_written(), 2);
        let out = String::from_utf8(emitter.into_inner().unwrap()).unwrap();
        assert_eq!(out, "# File generated by index-script-gen\ndone\n");
    }

    #[test]
    fn test_command_tokens() {
        let tokens: Vec<&str> = BLOCK_SEQUENCE.iter().map(Command::token).collect();
        assert_eq!(tokens, vec!["is", "ls", "if", "ds", "df", "lf"]);
    }
}
