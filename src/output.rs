use std::fmt::Display;
use std::io::{self, Write};

/// Write `text` followed by a line terminator to `out`.
pub fn write_message(out: &mut impl Write, text: impl Display) -> io::Result<()> {
    writeln!(out, "{}", text)
}

/// Write `tag`, the literal separator `": "`, then `text` and a line
/// terminator to `out`.
pub fn write_tagged(out: &mut impl Write, text: impl Display, tag: impl Display) -> io::Result<()> {
    writeln!(out, "{}: {}", tag, text)
}

/// Print a plain line to standard output.
pub fn message(text: impl Display) {
    let stdout = io::stdout();
    let _ = write_message(&mut stdout.lock(), text);
}

/// Print a tagged line (`<tag>: <text>`) to standard output.
pub fn tagged(text: impl Display, tag: impl Display) {
    let stdout = io::stdout();
    let _ = write_tagged(&mut stdout.lock(), text, tag);
}

pub fn info(text: impl Display) {
    tagged(text, "INFO");
}

pub fn warning(text: impl Display) {
    tagged(text, "WARNING");
}

pub fn error(text: impl Display) {
    tagged(text, "ERROR");
}

pub fn debug(text: impl Display) {
    tagged(text, "DEBUG");
}
