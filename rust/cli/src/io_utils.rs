//! File I/O utilities for reading logs and rosters and ensuring directories.
//!
//! This module provides helper functions for file operations used across CLI commands:
//! - Reading text files with automatic .zst decompression
//! - Discovering log files under a directory
//! - Loading raw event rows and the player roster
//! - Ensuring parent directories exist before file writes
//!
//! ## Compressed File Support
//!
//! The `read_text_auto` function automatically detects and decompresses .zst
//! (Zstandard) compressed files based on the file extension.

use std::path::{Path, PathBuf};

use handlog_engine::errors::LogError;
use handlog_engine::event::{EventRow, read_rows};
use handlog_engine::roster::PlayerRoster;

/// Read text file with automatic .zst decompression detection.
///
/// This function reads a text file from the specified path. If the path ends
/// with ".zst", the file is automatically decompressed using Zstandard compression.
/// UTF-8 BOM (Byte Order Mark) is automatically stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use handlog_cli::io_utils::read_text_auto;
///
/// // Read plain text file
/// let content = read_text_auto("game.csv").unwrap();
///
/// // Read compressed file (automatic decompression)
/// let compressed = read_text_auto("game.csv.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        // Streaming decoder: output size is not bounded by any preset buffer
        let file = std::fs::File::open(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(std::io::BufReader::new(file)).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// True for `.csv` and `.csv.zst` file names.
pub fn is_log_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|f| f.to_str())
        .is_some_and(|name| name.ends_with(".csv") || name.ends_with(".csv.zst"))
}

/// Lists log files under `input`. A file path is returned as-is; a directory
/// is walked recursively. The result is sorted for stable output.
pub fn collect_log_files(input: &Path) -> Vec<PathBuf> {
    if !input.is_dir() {
        return vec![input.to_path_buf()];
    }
    let mut files = Vec::new();
    let mut stack = vec![input.to_path_buf()];
    while let Some(d) = stack.pop() {
        let rd = match std::fs::read_dir(&d) {
            Ok(v) => v,
            Err(_) => continue,
        };
        for e in rd.filter_map(Result::ok) {
            let p = e.path();
            if p.is_dir() {
                stack.push(p);
            } else if is_log_file(&p) {
                files.push(p);
            }
        }
    }
    files.sort();
    files
}

/// Reads every event row of one log file.
///
/// Errors do not name `path`; callers add it as context.
pub fn load_rows(path: &Path) -> Result<Vec<EventRow>, LogError> {
    let text = read_text_auto(&path.to_string_lossy())
        .map_err(|e| LogError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;
    read_rows(text.as_bytes())
}

pub fn load_roster(path: &str) -> Result<PlayerRoster, LogError> {
    let file = std::fs::File::open(path)?;
    PlayerRoster::from_json(std::io::BufReader::new(file))
}

/// Ensure parent directory exists for given path, creating if needed.
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// # use handlog_cli::io_utils::ensure_parent_dir;
///
/// let path = Path::new("output/hands/game.jsonl");
/// ensure_parent_dir(path).unwrap();
/// // Now "output/hands/" directory exists
/// ```
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

/// Strip UTF-8 BOM (Byte Order Mark) from the beginning of a string if present.
///
/// UTF-8 BOM is the character U+FEFF at the start of a file. Some text editors
/// add this marker, but it breaks the first CSV field of the log.
fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
