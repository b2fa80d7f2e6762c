use std::io::{BufRead, Write};

/// Print `prompt` and read a single line from `input`.
///
/// The line terminator (`\n`, `\r\n` or `\r`) is stripped, nothing else is.
/// Returns `Ok(None)` when `input` is already exhausted.
#[tracing::instrument(name = "Reading email from input", skip(input, output, prompt))]
pub fn read_email<R, W>(mut input: R, mut output: W, prompt: &str) -> std::io::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        tracing::warn!("Input closed before an email was entered");
        return Ok(None);
    }
    // `\n`, `\r\n` and a lone `\r` all end the line.
    if let Some(end) = line.find(['\r', '\n']) {
        line.truncate(end);
    }
    Ok(Some(line))
}
