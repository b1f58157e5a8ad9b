//! Scripted, non-interactive execution

use crate::error::SiteError;
use crate::shell::Shell;
use crate::viewer::render_full;
use anyhow::{Context as _, Result};
use std::io::Write;
use tracing::debug;

/// Run each command and write its output to `out`
///
/// When a command opens the viewer, the viewer's full rendering is written
/// as well and the viewer is closed before the next command.
///
/// Returns the errors reported by failed commands, in order. A failed
/// command does not stop the ones after it.
pub fn run_batch<I, S, W>(
    shell: &mut Shell<'_>,
    commands: I,
    out: &mut W,
) -> Result<Vec<SiteError>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut failures = Vec::new();

    for command in commands {
        if let Err(err) = shell.execute(command.as_ref()) {
            failures.push(err);
        }
        for line in shell.take_scrollback() {
            writeln!(out, "{}", line.text).context("Failed to write output")?;
        }

        if let Some(frame) = render_full(shell.viewer(), shell.store()) {
            debug!("Printing viewer contents for {}", frame.title);
            writeln!(out, "[{}]", frame.title).context("Failed to write output")?;
            out.write_all(frame.to_text().as_bytes())
                .context("Failed to write output")?;
            shell.viewer_mut().close();
        }
    }

    out.flush().context("Failed to write output")?;
    Ok(failures)
}
