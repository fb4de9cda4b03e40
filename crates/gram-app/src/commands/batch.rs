use std::io::{BufRead, Write};

use gram_translator::Translator;

/// One text per input line, one translation per output line, in order
pub fn handle_batch(
    translator: &impl Translator,
    input: impl BufRead,
    from: &str,
    to: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let lines = input.lines().collect::<Result<Vec<_>, _>>()?;
    tracing::info!("Translating batch of {} lines", lines.len());

    for translated in translator.translate_batch(&lines, from, to) {
        writeln!(out, "{translated}")?;
    }
    Ok(())
}
