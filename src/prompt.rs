//! Interactive prompt.
//!
//! Each line the user types is a new value for the single focal-length field.
//! Results are recomputed through [`ResultCache`], so re-entering the same
//! value (or a preset that matches it) reuses the previous sequence.
//!
//! ```text
//! > 80          set the focal length
//! >             blank line: focal length 0
//! > p3          third quick-select preset
//! > presets     list presets, active one in brackets
//! > q           quit (also `quit`, or end of input)
//! ```

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::engine::{CacheStats, ResultCache};
use crate::input::FocalLengthInput;
use crate::output;
use std::io::{self, BufRead, Write};

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptCommand {
    Quit,
    ListPresets,
    /// 1-based preset index.
    Preset(usize),
    /// Anything else is focal-length text.
    Value(String),
}

/// Parse a prompt line into a command.
pub fn parse_command(line: &str) -> PromptCommand {
    let trimmed = line.trim();
    match trimmed {
        "q" | "quit" | "exit" => PromptCommand::Quit,
        "presets" => PromptCommand::ListPresets,
        _ => match trimmed.strip_prefix('p').map(str::parse::<usize>) {
            Some(Ok(n)) => PromptCommand::Preset(n),
            _ => PromptCommand::Value(trimmed.to_string()),
        },
    }
}

/// Run the prompt until `q` or end of input. Returns the cache counters.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    mut writer: W,
    catalog: &Catalog,
    config: &AppConfig,
    mut input: FocalLengthInput,
) -> io::Result<CacheStats> {
    let presets = &config.calculator.presets;
    let mut cache = ResultCache::new(catalog);

    write_results(&mut writer, &mut cache, catalog, config, &input)?;
    writeln!(writer, "{}", output::format_presets(presets, &input))?;
    write!(writer, "> ")?;
    writer.flush()?;

    for line in reader.lines() {
        let line = line?;
        match parse_command(&line) {
            PromptCommand::Quit => break,
            PromptCommand::ListPresets => {
                writeln!(writer, "{}", output::format_presets(presets, &input))?;
            }
            PromptCommand::Preset(n) => match n.checked_sub(1).and_then(|i| presets.get(i)) {
                Some(&mm) => {
                    input.select_preset(mm);
                    write_results(&mut writer, &mut cache, catalog, config, &input)?;
                }
                None => writeln!(writer, "No preset p{} (1-{})", n, presets.len())?,
            },
            PromptCommand::Value(raw) => match input.set_raw(&raw) {
                Ok(_) => write_results(&mut writer, &mut cache, catalog, config, &input)?,
                Err(e) => {
                    tracing::debug!(raw = %raw, error = %e, "rejected input");
                    writeln!(
                        writer,
                        "Invalid input: {} (keeping {})",
                        e,
                        output::format_field(&input)
                    )?;
                }
            },
        }
        write!(writer, "> ")?;
        writer.flush()?;
    }
    writeln!(writer)?;

    Ok(cache.stats())
}

fn write_results<W: Write>(
    writer: &mut W,
    cache: &mut ResultCache<'_>,
    catalog: &Catalog,
    config: &AppConfig,
    input: &FocalLengthInput,
) -> io::Result<()> {
    let focal_length = input.value();
    let results = cache.results(focal_length);
    for line in output::format_results(focal_length, catalog.reference(), results, &config.display) {
        writeln!(writer, "{}", line)?;
    }
    writeln!(writer)
}
