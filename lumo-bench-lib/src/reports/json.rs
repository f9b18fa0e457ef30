use crate::Result;
use crate::ranking::{EditionSet, Summary};
use core::fmt::Write;

/// Write the condensed summary consumed by badge generators.
pub fn generate_summary<W: Write>(summary: &Summary, writer: &mut W) -> Result<()> {
    write!(writer, "{}", serde_json::to_string_pretty(summary)?)?;
    Ok(())
}

/// Write every edition's full record, keyed by edition name.
pub fn generate_raw<W: Write>(editions: &EditionSet, writer: &mut W) -> Result<()> {
    write!(writer, "{}", serde_json::to_string_pretty(editions)?)?;
    Ok(())
}
