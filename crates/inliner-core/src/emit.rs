//! Rendering the asset table as a JavaScript module.
//!
//! The output is a single assignment, `const dataUrls = {...};`, whose right
//! hand side is a JSON object with one entry per line and no indentation.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::assets::AssetTable;

/// Name bound to the table in the generated module.
pub const DEFAULT_IDENTIFIER: &str = "dataUrls";

/// Write `const <identifier> = <table>;\n` to `writer`.
pub fn write_module<W: Write>(table: &AssetTable, identifier: &str, mut writer: W) -> io::Result<()> {
    write!(writer, "const {identifier} = ")?;
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b""));
    table.serialize(&mut ser).map_err(io::Error::from)?;
    writer.write_all(b";\n")?;
    writer.flush()
}

/// Render the module to a string.
pub fn render_module(table: &AssetTable, identifier: &str) -> io::Result<String> {
    let mut buf = Vec::new();
    write_module(table, identifier, &mut buf)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
