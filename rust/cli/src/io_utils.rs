//! Input helpers for reading matchup lines.
//!
//! - Reading every line from stdin
//! - Reading text files with automatic .zst decompression
//!
//! ## Compressed File Support
//!
//! The `read_text_auto` function automatically detects and decompresses .zst
//! (Zstandard) compressed files based on the file extension.

use std::fs::File;
use std::io::{BufRead, Read};

/// Reads all lines from a file path, or from `stdin` when no path is given.
///
/// Line terminators are removed. A UTF-8 BOM at the start of the input is
/// stripped.
pub fn read_input_lines(
    input: Option<&str>,
    stdin: &mut dyn BufRead,
) -> Result<Vec<String>, String> {
    let mut content = match input {
        Some(path) => read_text_auto(path)?,
        None => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).map_err(|e| e.to_string())?;
            buf
        }
    };
    strip_utf8_bom(&mut content);
    Ok(content.lines().map(str::to_string).collect())
}

/// Read text file with automatic .zst decompression detection.
///
/// If the path ends with ".zst", the file is decompressed using Zstandard.
/// UTF-8 BOM (Byte Order Mark) is automatically stripped if present.
///
/// # Example
///
/// ```rust,no_run
/// # use handsort_cli::io_utils::read_text_auto;
///
/// let content = read_text_auto("hands.txt").unwrap();
/// let compressed = read_text_auto("hands.txt.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let file = File::open(path).map_err(|e| e.to_string())?;
        let dec = zstd::stream::decode_all(file).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
