//! Text rendering of a traced SHA-256 computation.
//!
//! [`Report`] is a consumer of the snapshot stream: it drives a [`Trace`]
//! and writes a per-block table of the working registers followed by the
//! folding of each block into the digest state. Nothing in the hashing
//! path depends on this module.

use std::fmt::{self, Display, Formatter};

use super::padding::PaddedMessage;
use super::state::WorkingRegisters;
use super::trace::{Snapshot, Trace};

/// Messages rendered by default when no input is supplied: the one-block
/// and two-block examples from FIPS 180-4.
pub const DEMO_MESSAGES: [&[u8]; 2] = [
    b"abc",
    b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
];

const COLUMNS: &str =
    "            a         b         c         d         e         f         g         h";

/// Rendering switches for [`Report`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ReportOptions {
    /// Emit one line per round. When `false` only the block headers, the
    /// block folds and the digest are written.
    pub rounds: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { rounds: true }
    }
}

/// Human readable walk-through of hashing one padded message.
///
/// Blocks and `Hk` words are numbered from one in the output, rounds from
/// zero. The message in the block header is double-quoted with Go-style
/// escapes: `\n`-like shorthands, `\xNN` for control bytes and invalid
/// UTF-8, `\uNNNN`/`\UNNNNNNNN` for other unprintable characters.
#[derive(Clone, Debug)]
pub struct Report<'a> {
    padded: &'a PaddedMessage,
    options: ReportOptions,
}

impl<'a> Report<'a> {
    pub fn new(padded: &'a PaddedMessage) -> Self {
        Self {
            padded,
            options: ReportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let message = quote(&self.padded.original());
        let mut trace = Trace::new(self.padded);

        while let Some(snapshot) = trace.next() {
            match snapshot {
                Snapshot::Round {
                    block,
                    round,
                    registers,
                } => {
                    if round == 0 {
                        writeln!(f, "\n# Hash of {message} (block {})\n", block + 1)?;
                        writeln!(f, "{COLUMNS}\n")?;
                        let seed = WorkingRegisters::from(trace.state());
                        writeln!(f, "init:   {seed}")?;
                    }

                    if self.options.rounds {
                        writeln!(f, "t = {round:>2}  {registers}")?;
                    }
                }
                Snapshot::Block {
                    block,
                    initial,
                    registers,
                    state,
                } => {
                    writeln!(
                        f,
                        "\nBlock {} has been processed. The values of {{Hi}} are\n",
                        block + 1
                    )?;

                    let rows = initial
                        .words()
                        .into_iter()
                        .zip(registers.to_words())
                        .zip(state.words());

                    for (i, ((seed, reg), sum)) in rows.enumerate() {
                        writeln!(f, "H{} = {seed:08x} + {reg:08x} = {sum:08x}", i + 1)?;
                    }
                }
            }
        }

        writeln!(f, "\nThe message digest is\n")?;
        writeln!(f, "    {}.", trace.state())
    }
}

/// Double-quotes `bytes` the way Go's `%q` verb does.
fn quote(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');

    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\u{07}' => out.push_str("\\a"),
                '\u{08}' => out.push_str("\\b"),
                '\u{0c}' => out.push_str("\\f"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                '\u{0b}' => out.push_str("\\v"),
                ' ' => out.push(' '),
                c if c.is_ascii_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
                c if c.is_control() || c.is_whitespace() => {
                    let code = c as u32;
                    if code < 0x10000 {
                        out.push_str(&format!("\\u{code:04x}"));
                    } else {
                        out.push_str(&format!("\\U{code:08x}"));
                    }
                }
                c => out.push(c),
            }
        }

        for byte in chunk.invalid() {
            out.push_str(&format!("\\x{byte:02x}"));
        }
    }

    out.push('"');
    out
}
