//! `fopen`-style file opening with Unicode-safe path handling.
//!
//! [`open`] accepts the conventional `fopen` mode vocabulary (`"r"`,
//! `"w+"`, `"ab"`, ...) and maps it onto [`std::fs::OpenOptions`]. Paths
//! are UTF-8 (any [`AsRef<Path>`]); on Windows, `std`'s path layer
//! re-encodes them to UTF-16 before reaching the wide Win32 API, so
//! non-ASCII file names need no special handling here.
//!
//! The helper adds nothing beyond mode parsing: open failures surface the
//! underlying [`std::io::Error`] unchanged, and the returned [`File`] is
//! closed by its owner like any other.
//!
//! ```rust,no_run
//! use raster_support::file;
//!
//! let log = file::open("dumps/frame-0042.bin", "wb")?;
//! # Ok::<(), raster_support::file::OpenError>(())
//! ```

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Errors from [`open`] and [`OpenMode`] parsing.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The mode string is not in the `fopen` vocabulary.
    #[error("unrecognized open mode {0:?}")]
    InvalidMode(String),
    /// The platform open call failed; the cause is passed through
    /// untranslated.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A parsed `fopen` mode string.
///
/// The primary modes and their [`OpenOptions`] mapping:
///
/// | mode | read | write | append | truncate | create |
/// |------|------|-------|--------|----------|--------|
/// | `r`  | ✓    |       |        |          |        |
/// | `r+` | ✓    | ✓     |        |          |        |
/// | `w`  |      | ✓     |        | ✓        | ✓      |
/// | `w+` | ✓    | ✓     |        | ✓        | ✓      |
/// | `a`  |      | ✓     | ✓      |          | ✓      |
/// | `a+` | ✓    | ✓     | ✓      |          | ✓      |
///
/// The `b` and `t` modifiers are accepted anywhere after the primary mode
/// and ignored: Rust performs no newline translation, so binary and text
/// modes read and write identical bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMode {
    read: bool,
    write: bool,
    append: bool,
    truncate: bool,
    create: bool,
}

impl OpenMode {
    /// Whether the file will be readable.
    pub fn is_read(&self) -> bool {
        self.read
    }

    /// Whether the file will be writable (including append).
    pub fn is_write(&self) -> bool {
        self.write
    }

    /// Whether writes go to the end of the file.
    pub fn is_append(&self) -> bool {
        self.append
    }

    /// The [`OpenOptions`] this mode maps onto.
    pub fn to_options(self) -> OpenOptions {
        let mut opts = OpenOptions::new();
        opts.read(self.read)
            .write(self.write && !self.append)
            .append(self.append)
            .truncate(self.truncate)
            .create(self.create);
        opts
    }
}

impl FromStr for OpenMode {
    type Err = OpenError;

    fn from_str(mode: &str) -> Result<Self, Self::Err> {
        let invalid = || OpenError::InvalidMode(mode.to_owned());

        let mut chars = mode.chars();
        let mut parsed = match chars.next() {
            Some('r') => OpenMode {
                read: true,
                write: false,
                append: false,
                truncate: false,
                create: false,
            },
            Some('w') => OpenMode {
                read: false,
                write: true,
                append: false,
                truncate: true,
                create: true,
            },
            Some('a') => OpenMode {
                read: false,
                write: true,
                append: true,
                truncate: false,
                create: true,
            },
            _ => return Err(invalid()),
        };

        let mut seen_plus = false;
        for c in chars {
            match c {
                '+' if !seen_plus => {
                    seen_plus = true;
                    parsed.read = true;
                    parsed.write = true;
                }
                // No newline translation in Rust; both modifiers are no-ops.
                'b' | 't' => {}
                _ => return Err(invalid()),
            }
        }

        Ok(parsed)
    }
}

/// Open a file with an `fopen`-style mode string.
///
/// Returns the opened [`File`], or the platform's failure untranslated
/// (nonexistent file, permission denied, ...). See [`OpenMode`] for the
/// mode vocabulary.
pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<File, OpenError> {
    let mode: OpenMode = mode.parse()?;
    Ok(mode.to_options().open(path)?)
}
