use std::io::Write;

use gram_translator::Translator;

pub fn handle_translate(
    translator: &impl Translator,
    text: &str,
    from: &str,
    to: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let translated = translator.translate(text, from, to);
    tracing::debug!("Translated {:?} -> {:?}", text, translated);
    writeln!(out, "{translated}")?;
    Ok(())
}
