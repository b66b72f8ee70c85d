//! Quill - a kilo-class modal text editor
//! Main entry point

use anyhow::Context;
use quill::editor::Editor;
use quill::term::crossterm::CrosstermBackend;

fn run() -> anyhow::Result<()> {
    let filename = std::env::args().nth(1);

    let backend = CrosstermBackend::new()
        .map_err(anyhow::Error::msg)
        .context("failed to create terminal backend")?;

    // The editor loads the file before touching the terminal, so an open
    // failure reports cleanly without leaving raw mode behind
    let mut editor = Editor::with_file(backend, filename).context("failed to initialize editor")?;

    editor.run().context("editor error")?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}
