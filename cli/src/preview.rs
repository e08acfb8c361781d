//! Writing the preview document and handing it to a viewer for printing.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use logoprint::{Error, PrintableDocument, Result};

/// Default preview file name, timestamped so runs do not overwrite each other.
pub fn default_output_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    PathBuf::from(format!("logoprint-{}.html", stamp))
}

/// Write the document, replacing any previous preview at `path`.
pub fn write_preview(path: &Path, doc: &PrintableDocument) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, doc.as_str())?;
    debug!("wrote {} bytes to {}", doc.len(), path.display());
    Ok(())
}

fn opener_command(path: &Path) -> Command {
    #[cfg(target_os = "windows")]
    {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    }

    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Open a written preview in the system viewer so it can be printed.
///
/// Failures come back as [`Error::Print`] with instructions for printing by
/// hand.
pub fn open_for_printing(path: &Path) -> Result<()> {
    let manual = || {
        format!(
            "open {} in a browser and press Ctrl+P to print",
            path.display()
        )
    };

    let status = opener_command(path)
        .status()
        .map_err(|e| Error::Print(format!("{} ({})", manual(), e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::Print(manual()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logoprint::DocumentSource;

    #[test]
    fn test_default_output_path() {
        let path = default_output_path();
        let name = path.to_string_lossy();
        assert!(name.starts_with("logoprint-"));
        assert!(name.ends_with(".html"));
    }

    #[test]
    fn test_write_preview_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sheet.html");

        let first = PrintableDocument::new("<html>uno</html>", DocumentSource::Embedded);
        write_preview(&path, &first).unwrap();
        let second = PrintableDocument::new("<html>dos</html>", DocumentSource::Embedded);
        write_preview(&path, &second).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<html>dos</html>");
    }
}
