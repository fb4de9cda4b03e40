use std::io::{BufRead, Read, Write};

use gram_translator::{ErrorResponse, TranslateRequest, Translator};

/// Read a request JSON document, write a response or error object
pub fn handle_request(
    translator: &impl Translator,
    mut input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut body = String::new();
    input.read_to_string(&mut body)?;

    let request: TranslateRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Rejecting malformed request: {}", e);
            let error = ErrorResponse {
                error: format!("Invalid request body: {e}"),
            };
            serde_json::to_writer(&mut *out, &error)?;
            writeln!(out)?;
            return Ok(());
        }
    };

    match request.answer(translator) {
        Ok(response) => serde_json::to_writer(&mut *out, &response)?,
        Err(e) => {
            tracing::warn!("Rejecting request: {}", e);
            serde_json::to_writer(&mut *out, &ErrorResponse::from(&e))?;
        }
    }
    writeln!(out)?;
    Ok(())
}
