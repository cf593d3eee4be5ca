use super::diagnostics::Reporter;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Reads a file or stdin, enforcing `max_size` (0 = unlimited).
pub fn read_input(
    file: Option<&Path>,
    max_size: usize,
    force: bool,
    reporter: &Reporter,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        if max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;
            if file_size > max_size {
                if !force {
                    return Err(format!(
                        "file size ({} bytes) exceeds limit ({} bytes), use --force to process anyway",
                        file_size, max_size
                    )
                    .into());
                }
                reporter.warn(&format!(
                    "processing large file ({} bytes, limit: {} bytes)",
                    file_size, max_size
                ));
            }
        }
        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    if max_size > 0 && buffer.len() > max_size {
        if !force {
            return Err(format!(
                "input size ({} bytes) exceeds limit ({} bytes), use --force to process anyway",
                buffer.len(),
                max_size
            )
            .into());
        }
        reporter.warn(&format!(
            "processing large input ({} bytes, limit: {} bytes)",
            buffer.len(),
            max_size
        ));
    }

    Ok(buffer)
}

/// Writes to the output file, or stdout.
pub fn write_output(output: Option<&Path>, data: &[u8]) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, data),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()
        }
    }
}
