//! C-style quoting of index paths
//!
//! A path made only of printable ASCII (other than `"` and `\`) is written as
//! is. Any other path is wrapped in double quotes, with control characters
//! and non-ASCII bytes escaped, so every index line stays on one line and
//! every byte of the file name survives a reload.

use crate::errors::{LitError, Result};
use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

const QUOTE: u8 = b'"';
const ESCAPE: u8 = b'\\';

fn needs_quoting(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .any(|byte| !(0x20..0x7f).contains(byte) || *byte == QUOTE || *byte == ESCAPE)
}

pub fn quote(path: &Path) -> String {
    let bytes = path.as_os_str().as_bytes();
    if !needs_quoting(bytes) {
        return String::from_utf8_lossy(bytes).into_owned();
    }

    let mut quoted = String::with_capacity(bytes.len() + 2);
    quoted.push('"');
    for byte in bytes {
        match *byte {
            0x07 => quoted.push_str("\\a"),
            0x08 => quoted.push_str("\\b"),
            b'\t' => quoted.push_str("\\t"),
            b'\n' => quoted.push_str("\\n"),
            0x0b => quoted.push_str("\\v"),
            0x0c => quoted.push_str("\\f"),
            b'\r' => quoted.push_str("\\r"),
            QUOTE => quoted.push_str("\\\""),
            ESCAPE => quoted.push_str("\\\\"),
            0x20..=0x7e => quoted.push(*byte as char),
            other => quoted.push_str(&format!("\\{other:03o}")),
        }
    }
    quoted.push('"');

    quoted
}

pub fn unquote(name: &str) -> Result<PathBuf> {
    let Some(inner) = name.strip_prefix('"') else {
        return Ok(PathBuf::from(name));
    };
    let inner = inner
        .strip_suffix('"')
        .ok_or_else(|| LitError::format(format!("unterminated quoted path: {name:?}")))?
        .as_bytes();

    let mut bytes = Vec::with_capacity(inner.len());
    let mut position = 0;
    while position < inner.len() {
        let byte = inner[position];
        position += 1;

        match byte {
            ESCAPE => {
                let escaped = *inner
                    .get(position)
                    .ok_or_else(|| LitError::format(format!("dangling escape in {name:?}")))?;
                position += 1;

                bytes.push(match escaped {
                    b'a' => 0x07,
                    b'b' => 0x08,
                    b't' => b'\t',
                    b'n' => b'\n',
                    b'v' => 0x0b,
                    b'f' => 0x0c,
                    b'r' => b'\r',
                    QUOTE => QUOTE,
                    ESCAPE => ESCAPE,
                    b'0'..=b'3' => {
                        let octal = inner
                            .get(position - 1..position + 2)
                            .and_then(|digits| std::str::from_utf8(digits).ok())
                            .and_then(|digits| u8::from_str_radix(digits, 8).ok())
                            .ok_or_else(|| {
                                LitError::format(format!("invalid octal escape in {name:?}"))
                            })?;
                        position += 2;
                        octal
                    }
                    other => {
                        return Err(LitError::format(format!(
                            "unknown escape \\{} in {name:?}",
                            other as char
                        )));
                    }
                });
            }
            QUOTE => {
                return Err(LitError::format(format!("stray quote in {name:?}")));
            }
            other => bytes.push(other),
        }
    }

    Ok(PathBuf::from(OsStr::from_bytes(&bytes)))
}
