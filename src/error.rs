//! Errors on the inputs. An unattainable alignment is not an error; it is `None`.
//! Errors on a read layout are [`CigarError`].
use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Debug)]
pub enum InputError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    EmptyFile(PathBuf),
    /// The `line`-th line (1-origin) is not terminated by a line feed.
    MissingLineEnd { path: PathBuf, line: usize },
    EmptySequence { which: &'static str },
    TruthLengthMismatch { s1: usize, s2: usize },
    /// A predicted sequence has a base other than `ACGT`.
    IllegalBase {
        which: &'static str,
        position: usize,
        base: u8,
    },
    /// Band width should be odd and positive.
    InvalidBandWidth(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Io { path, source } => {
                write!(f, "cannot open {}: {}", path.display(), source)
            }
            InputError::EmptyFile(path) => write!(f, "{} is empty file", path.display()),
            InputError::MissingLineEnd { path, line } => {
                write!(f, "invalid format: line {} of {} has no line end", line, path.display())
            }
            InputError::EmptySequence { which } => write!(f, "{} is empty", which),
            InputError::TruthLengthMismatch { s1, s2 } => {
                write!(f, "strlen(s1) != strlen(s2) ({} != {})", s1, s2)
            }
            InputError::IllegalBase {
                which,
                position,
                base,
            } => write!(
                f,
                "invalid input: {} has {:?} at {}",
                which,
                char::from(*base),
                position
            ),
            InputError::InvalidBandWidth(bw) => {
                write!(f, "bandwidth must be odd and positive ({})", bw)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CigarError {
    /// There is no reference line.
    EmptyInput,
    /// The `line`-th line (1-origin) is not `<orientation> <offset> <cigar>`.
    MalformedRead { line: usize },
    /// The CIGAR string on the `line`-th line is broken at `column` (both 1-origin).
    Parse { line: usize, column: usize },
    /// The `read`-th read (0-origin) runs off the reference.
    OutOfReference { read: usize },
}

impl fmt::Display for CigarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CigarError::EmptyInput => write!(f, "no reference sequence"),
            CigarError::MalformedRead { line } => write!(f, "malformed read at line {}", line),
            CigarError::Parse { line, column } => {
                write!(f, "parse error at line {}, col {}", line, column)
            }
            CigarError::OutOfReference { read } => {
                write!(f, "read {} runs off the reference", read)
            }
        }
    }
}

impl std::error::Error for CigarError {}
