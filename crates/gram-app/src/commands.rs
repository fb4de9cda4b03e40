use std::io::{BufRead, Write};

use crate::cli::Command;
use crate::state::AppState;

pub mod batch;
pub mod dump;
pub mod learn;
pub mod request;
pub mod translate;

use batch::handle_batch;
use dump::handle_dump;
use learn::handle_learn;
use request::handle_request;
use translate::handle_translate;

/// Run one translator command, reading from `input` and writing results to `out`.
///
/// `init-config` does not touch the translator and is handled before state
/// is built.
pub fn handle_command(
    state: &AppState,
    command: Command,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    tracing::debug!("Handling command {:?}", command);
    match command {
        Command::Translate { text, from, to } => {
            let from = from.as_deref().unwrap_or(state.source_lang());
            let to = to.as_deref().unwrap_or(state.target_lang());
            handle_translate(&state.translator, &text, from, to, out)?;
        }
        Command::Batch { from, to } => {
            let from = from.as_deref().unwrap_or(state.source_lang());
            let to = to.as_deref().unwrap_or(state.target_lang());
            handle_batch(&state.translator, input, from, to, out)?;
        }
        Command::Learn { source, target } => {
            handle_learn(&state.translator, &source, &target, out)?;
        }
        Command::Dump { learned } => {
            handle_dump(&state.translator, learned, out)?;
        }
        Command::Request => {
            handle_request(&state.translator, input, out)?;
        }
        Command::InitConfig { .. } => {
            tracing::warn!("init-config reached the translator loop, ignoring");
        }
    }

    out.flush()?;
    Ok(())
}
