use std::collections::BTreeMap;
use std::io::Write;

use gram_lang_marathi::MarathiTranslator;
use gram_translator::Translator;

/// Pretty JSON, keys sorted
pub fn handle_dump(
    translator: &MarathiTranslator,
    learned_only: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let entries: BTreeMap<String, String> = if learned_only {
        translator.learned_translations()
    } else {
        translator.all_translations().into_iter().collect()
    };

    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}
