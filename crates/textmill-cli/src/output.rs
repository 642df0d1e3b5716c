use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the diagnostic for a missing input or output directory.
pub fn print_missing_directory(
    w: &mut dyn Write,
    path: &Path,
    color: ColorMode,
) -> std::io::Result<()> {
    let msg = format!(
        "Directory does not exist: {}. Create it and re-run.",
        path.display()
    );
    if color.enabled() {
        writeln!(w, "{}", msg.red())
    } else {
        writeln!(w, "{}", msg)
    }
}
