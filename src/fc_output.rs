// src/fc_output.rs
use std::io::{self, BufWriter, Write};

use anyhow::Result;

use crate::fc_combos::display_key;
use crate::fc_types::{Combination, OutputFormat};

/// Writes `combos` to `out` in the requested format.
pub fn write_combinations<W: Write>(
    out: &mut W,
    combos: &[Combination],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for combo in combos {
                writeln!(out, "{}", display_key(combo))?;
            }
        }
        OutputFormat::Cargo => {
            for combo in combos {
                writeln!(out, "{}", cargo_args(combo))?;
            }
        }
        OutputFormat::Json => write_json(out, combos)?,
    }
    out.flush()?;
    Ok(())
}

/// Buffered, locked stdout variant of [`write_combinations`].
pub fn print_combinations(combos: &[Combination], format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_combinations(&mut out, combos, format)
}

/// The `cargo` arguments selecting exactly `combo`.
///
/// ```
/// use cargo_fc::fc_output::cargo_args;
///
/// let combo = ["a", "b"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(cargo_args(&combo), "--no-default-features --features a,b");
/// assert_eq!(cargo_args(&Default::default()), "--no-default-features");
/// ```
pub fn cargo_args(combo: &Combination) -> String {
    if combo.is_empty() {
        "--no-default-features".to_string()
    } else {
        format!("--no-default-features --features {}", display_key(combo))
    }
}

#[cfg(feature = "uses_serde")]
fn write_json<W: Write>(out: &mut W, combos: &[Combination]) -> Result<()> {
    serde_json::to_writer(&mut *out, combos)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(not(feature = "uses_serde"))]
fn write_json<W: Write>(_out: &mut W, _combos: &[Combination]) -> Result<()> {
    anyhow::bail!("JSON output needs cargo-fc built with the `uses_serde` feature")
}
