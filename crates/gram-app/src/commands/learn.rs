use std::io::Write;

use gram_translator::Translator;

pub fn handle_learn(
    translator: &impl Translator,
    source: &str,
    target: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if translator.learn_word(source, target) {
        writeln!(out, "learned: {} -> {}", source.trim(), target.trim())?;
    } else {
        writeln!(out, "not learned: {:?} is blank or already known", source.trim())?;
    }
    Ok(())
}
