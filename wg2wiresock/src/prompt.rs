use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Ask for a path, falling back to `default` on an empty answer or end of input.
pub fn prompt_path<R: BufRead, W: Write>(
    input: &mut R,
    prompt: &mut W,
    label: &str,
    default: &str,
) -> io::Result<PathBuf> {
    write!(prompt, "{label} [{default}]: ")?;
    prompt.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    Ok(PathBuf::from(if answer.is_empty() { default } else { answer }))
}
