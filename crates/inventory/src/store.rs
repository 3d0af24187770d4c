//! Line-file persistence helpers for the inventory backing file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default backing file location: `records/inventory.txt` next to the
/// executable, mirroring the tool's install layout. Falls back to the
/// current directory when the executable path cannot be resolved.
pub fn default_data_file() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("records").join("inventory.txt")
}

/// Create the file (and any missing parent directories) if absent. Never
/// truncates an existing file.
pub fn ensure_exists(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().append(true).create(true).open(path)?;
    Ok(())
}

/// Read the backing file into lines.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).lines().collect()
}

/// Truncate and rewrite the backing file, one record line per entry, each
/// terminated by a line break.
///
/// This is a plain whole-file rewrite: a failure mid-write can leave the
/// file truncated. There is no atomic-rename step (known limitation of the
/// format, kept as-is).
pub fn write_lines<I>(path: &Path, lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = String>,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
