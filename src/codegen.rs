//! C header codegen (SPEC_FULL.md §2, item 12): dump the four lookup
//! tables as a C header, for interop with the original project's C/Python
//! tooling. Ported from `poker_lite.write_ctables` / `poker_lite.arraystr`.

use std::fmt::Write as _;
use std::io;
use std::path::Path;

use crate::tables::{FLUSH_TABLE, IS_FLUSH, LOWBITS, STRAIGHT_TABLE};

fn array_literal<T: std::fmt::Display>(name: &str, values: &[T]) -> String {
    let mut body = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            body.push(',');
        }
        let _ = write!(body, "{}", v);
    }
    format!("#define {} {{{}}}\n", name, body)
}

/// Render the four tables as `#define NAME {...}` C array literals, in the
/// same order as the original `write_ctables`.
pub fn render_c_header() -> String {
    let mut out = String::new();
    out.push_str(&array_literal("FLUSH_TABLE", &FLUSH_TABLE));
    out.push('\n');
    out.push_str(&array_literal("STRAIGHT_TABLE", &STRAIGHT_TABLE));
    out.push('\n');
    out.push_str(&array_literal("LOWBITS", &LOWBITS));
    out.push('\n');
    out.push_str(&array_literal("ISFLUSH", &IS_FLUSH));
    out
}

/// Write the rendered header to `path` (default `cpokertables.h`).
pub fn write_c_header(path: impl AsRef<Path>) -> io::Result<()> {
    std::fs::write(path, render_c_header())
}
