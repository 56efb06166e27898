//! Very thin reader of the two-line sequence files.
//! Each file has exactly two sequences, one per line. Carriage returns are ignored.
use crate::error::{InputError, Result};
use crate::{PredictedPair, TruthPair};
use std::io::Read;
use std::path::Path;

/// Read the first two lines of `path`.
pub fn read_pair<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, Vec<u8>)> {
    let path = path.as_ref();
    let io_error = |source| InputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut contents = vec![];
    std::fs::File::open(path)
        .and_then(|mut file| file.read_to_end(&mut contents))
        .map_err(io_error)?;
    parse_pair(&contents, path)
}

fn parse_pair(contents: &[u8], path: &Path) -> Result<(Vec<u8>, Vec<u8>)> {
    if contents.is_empty() {
        return Err(InputError::EmptyFile(path.to_path_buf()));
    }
    let contents: Vec<u8> = contents.iter().filter(|&&x| x != b'\r').copied().collect();
    let missing = |line| InputError::MissingLineEnd {
        path: path.to_path_buf(),
        line,
    };
    let first_end = find_newline(&contents).ok_or_else(|| missing(1))?;
    let rest = &contents[first_end + 1..];
    let second_end = find_newline(rest).ok_or_else(|| missing(2))?;
    Ok((contents[..first_end].to_vec(), rest[..second_end].to_vec()))
}

fn find_newline(xs: &[u8]) -> Option<usize> {
    xs.iter().position(|&x| x == b'\n')
}

pub fn read_truth<P: AsRef<Path>>(path: P) -> Result<TruthPair> {
    let (s1, s2) = read_pair(path)?;
    Ok(TruthPair { s1, s2 })
}

pub fn read_predicted<P: AsRef<Path>>(path: P) -> Result<PredictedPair> {
    let (t1, t2) = read_pair(path)?;
    Ok(PredictedPair { t1, t2 })
}
