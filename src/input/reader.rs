use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024;

/// Reads text to format from a file or stdin, capped at 1 MB.
pub struct InputReader;

impl InputReader {
    pub fn read(file_path: Option<&str>) -> Result<String> {
        file_path.map_or_else(Self::read_stdin, Self::read_file)
    }

    fn read_file(path: &str) -> Result<String> {
        let metadata =
            fs::metadata(path).with_context(|| format!("Failed to access file: {path}"))?;
        check_size(metadata.len() as usize)?;

        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
    }

    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .take(MAX_INPUT_SIZE as u64 + 1)
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;
        check_size(buffer.len())?;

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn check_size(size: usize) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        bail!(
            "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB)",
            size as f64 / 1024.0 / 1024.0
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn read_temp(content: &str) -> Result<String> {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{content}").unwrap();
        InputReader::read(Some(temp_file.path().to_str().unwrap()))
    }

    #[test]
    fn test_read_file() {
        assert_eq!(read_temp("**Show** all patients").unwrap(), "**Show** all patients");
    }

    #[test]
    fn test_read_markdown_table_unicode() {
        let content = "| Patient | Note |\n|---|---|\n| Zoë | 🩺 ok |";
        assert_eq!(read_temp(content).unwrap(), content);
    }

    #[test]
    fn test_read_empty_file() {
        assert!(read_temp("").unwrap().is_empty());
    }

    #[test]
    fn test_read_nonexistent_file() {
        let err = InputReader::read(Some("/nonexistent/reply.md")).unwrap_err();
        assert!(err.to_string().contains("Failed to access file"));
    }

    #[test]
    fn test_size_limit() {
        let temp_dir = TempDir::new().unwrap();
        let at_limit = temp_dir.path().join("at_limit.md");
        let over_limit = temp_dir.path().join("over_limit.md");
        fs::write(&at_limit, "x".repeat(MAX_INPUT_SIZE)).unwrap();
        fs::write(&over_limit, "x".repeat(MAX_INPUT_SIZE + 1)).unwrap();

        let content = InputReader::read(Some(at_limit.to_str().unwrap())).unwrap();
        assert_eq!(content.len(), MAX_INPUT_SIZE);

        let err = InputReader::read(Some(over_limit.to_str().unwrap())).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
    }
}
