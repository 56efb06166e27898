//! Gap-padded layout of reads against a reference.
//!
//! A read is written as `<orientation> <offset> <cigar>`, where the offset is 0-origin on the
//! reference and the `X` and `I` operations carry their bases right after the operation,
//! e.g., `3=1XG2IAC1D4=`. Every reference base is preceded by as many columns as the longest
//! insertion just before it, so the reference and the reads line up column by column.
//! The padded reference uses [`GAP`] for these columns, and a read with a shorter insertion fills
//! the rest with [`INSERTION_FILL`].
use crate::alignment::GAP;
use crate::error::CigarError;
use std::fmt;

pub type Result<T> = std::result::Result<T, CigarError>;

pub const INSERTION_FILL: u8 = b'=';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Match(usize),
    /// Mismatched bases of the read.
    Mismatch(Vec<u8>),
    /// Inserted bases of the read.
    Insertion(Vec<u8>),
    Deletion(usize),
}

impl Op {
    /// The number of reference bases consumed.
    pub fn ref_len(&self) -> usize {
        match self {
            Op::Match(l) | Op::Deletion(l) => *l,
            Op::Mismatch(bases) => bases.len(),
            Op::Insertion(_) => 0,
        }
    }
}

/// Parse a CIGAR string with inline bases. On failure, return the 1-origin column.
pub fn parse_cigar_string(cigar: &[u8]) -> std::result::Result<Vec<Op>, usize> {
    let mut ops = vec![];
    let mut pos = 0;
    while pos < cigar.len() {
        let start = pos;
        let mut num: usize = 0;
        while let Some(&d) = cigar.get(pos).filter(|d| d.is_ascii_digit()) {
            num = num
                .checked_mul(10)
                .and_then(|n| n.checked_add((d - b'0') as usize))
                .ok_or(start + 1)?;
            pos += 1;
        }
        if pos == start {
            return Err(start + 1);
        }
        let op = *cigar.get(pos).ok_or(pos + 1)?;
        pos += 1;
        let op = match op {
            b'=' => Op::Match(num),
            b'X' => Op::Mismatch(take_bases(cigar, &mut pos, num)?),
            b'I' => Op::Insertion(take_bases(cigar, &mut pos, num)?),
            b'D' => Op::Deletion(num),
            _ => return Err(pos),
        };
        ops.push(op);
    }
    Ok(ops)
}

fn take_bases(cigar: &[u8], pos: &mut usize, len: usize) -> std::result::Result<Vec<u8>, usize> {
    let end = pos
        .checked_add(len)
        .filter(|&end| end <= cigar.len())
        .ok_or(cigar.len() + 1)?;
    let bases = cigar[*pos..end].to_vec();
    *pos = end;
    Ok(bases)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRead {
    pub orientation: u8,
    pub offset: usize,
    pub ops: Vec<Op>,
}

impl AlignedRead {
    pub fn new(orientation: u8, offset: usize, ops: Vec<Op>) -> Self {
        Self {
            orientation,
            offset,
            ops,
        }
    }
    fn from_columns(columns: &[&str], line: usize) -> Result<Self> {
        let malformed = || CigarError::MalformedRead { line };
        let (orientation, offset, cigar) = match columns {
            [orientation, offset, cigar, ..] => (orientation, offset, cigar),
            _ => return Err(malformed()),
        };
        let orientation = match orientation.as_bytes() {
            [x] => *x,
            _ => return Err(malformed()),
        };
        let offset: usize = offset.parse().map_err(|_| malformed())?;
        let ops = parse_cigar_string(cigar.as_bytes())
            .map_err(|column| CigarError::Parse { line, column })?;
        Ok(Self::new(orientation, offset, ops))
    }
}

/// The longest insertion just before each reference base.
pub fn max_insertions(reference_len: usize, reads: &[AlignedRead]) -> Result<Vec<usize>> {
    let mut longest = vec![0; reference_len];
    for (idx, read) in reads.iter().enumerate() {
        let out_of_reference = CigarError::OutOfReference { read: idx };
        let mut rpos = read.offset;
        for op in read.ops.iter() {
            if let Op::Insertion(bases) = op {
                let slot = longest.get_mut(rpos).ok_or_else(|| out_of_reference.clone())?;
                *slot = (*slot).max(bases.len());
            }
            rpos = rpos
                .checked_add(op.ref_len())
                .ok_or_else(|| out_of_reference.clone())?;
        }
        if reference_len < rpos {
            return Err(out_of_reference);
        }
    }
    Ok(longest)
}

/// A reference and its reads, with the insertion columns fixed.
#[derive(Debug, Clone)]
pub struct Layout {
    reference: Vec<u8>,
    reads: Vec<AlignedRead>,
    // Longest insertion just before each reference base.
    longest: Vec<usize>,
}

impl Layout {
    pub fn new(reference: Vec<u8>, reads: Vec<AlignedRead>) -> Result<Self> {
        let longest = max_insertions(reference.len(), &reads)?;
        debug!(
            "LAYOUT\t{}\t{}\t{}",
            reference.len(),
            reads.len(),
            longest.iter().sum::<usize>()
        );
        Ok(Self {
            reference,
            reads,
            longest,
        })
    }
    /// Parse the reference line followed by one read per line.
    /// Blank lines are skipped, and a line starting with `=` ends the reads.
    pub fn parse(contents: &str) -> Result<Self> {
        let mut lines = contents.lines();
        let reference = lines.next().ok_or(CigarError::EmptyInput)?;
        let reference = reference.trim().as_bytes().to_vec();
        let mut reads = vec![];
        for (idx, line) in lines.enumerate() {
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }
            let columns: Vec<_> = line.split(' ').collect();
            if columns[0] == "=" {
                break;
            }
            reads.push(AlignedRead::from_columns(&columns, idx + 2)?);
        }
        Self::new(reference, reads)
    }
    pub fn reference(&self) -> &[u8] {
        &self.reference
    }
    pub fn reads(&self) -> &[AlignedRead] {
        &self.reads
    }
    pub fn padded_reference(&self) -> Vec<u8> {
        self.pad(0, &[Op::Match(self.reference.len())])
    }
    /// The padded `idx`-th read, or `None` if there is no such read.
    pub fn padded_read(&self, idx: usize) -> Option<Vec<u8>> {
        self.reads.get(idx).map(|read| self.pad(read.offset, &read.ops))
    }
    // `ops` should be checked by `max_insertions` beforehand.
    fn pad(&self, offset: usize, ops: &[Op]) -> Vec<u8> {
        let longest = &self.longest;
        let lead = offset + longest[..offset].iter().sum::<usize>();
        let mut padded = vec![b' '; lead];
        let mut rpos = offset;
        // The insertion columns of `rpos` are already taken.
        let mut after_insertion = false;
        for op in ops.iter() {
            match op {
                Op::Match(len) => {
                    for k in 0..*len {
                        if !(after_insertion && k == 0) {
                            push_gaps(&mut padded, longest[rpos]);
                        }
                        padded.push(self.reference[rpos]);
                        rpos += 1;
                    }
                }
                Op::Mismatch(bases) => {
                    for (k, &base) in bases.iter().enumerate() {
                        if !(after_insertion && k == 0) {
                            push_gaps(&mut padded, longest[rpos]);
                        }
                        padded.push(base);
                        rpos += 1;
                    }
                }
                Op::Insertion(bases) => {
                    padded.extend_from_slice(bases);
                    let fill = longest[rpos].saturating_sub(bases.len());
                    padded.extend(std::iter::repeat(INSERTION_FILL).take(fill));
                }
                Op::Deletion(len) => {
                    for k in 0..*len {
                        if !(after_insertion && k == 0) {
                            push_gaps(&mut padded, longest[rpos]);
                        }
                        rpos += 1;
                    }
                    push_gaps(&mut padded, *len);
                }
            }
            after_insertion = matches!(op, Op::Insertion(_));
        }
        padded
    }
}

fn push_gaps(padded: &mut Vec<u8>, len: usize) {
    padded.extend(std::iter::repeat(GAP).take(len));
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reference = self.padded_reference();
        writeln!(f, "REF  : {}", String::from_utf8_lossy(&reference))?;
        for (idx, read) in self.reads.iter().enumerate() {
            let padded = self.pad(read.offset, &read.ops);
            let orientation = char::from(read.orientation);
            writeln!(f, "{:3} {}: {}", idx, orientation, String::from_utf8_lossy(&padded))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn parse_ops() {
        let ops = parse_cigar_string(b"3=1XG2IAC1D12=").unwrap();
        let answer = vec![
            Op::Match(3),
            Op::Mismatch(b"G".to_vec()),
            Op::Insertion(b"AC".to_vec()),
            Op::Deletion(1),
            Op::Match(12),
        ];
        assert_eq!(ops, answer);
        assert_eq!(ops.iter().map(Op::ref_len).sum::<usize>(), 17);
        assert_eq!(parse_cigar_string(b""), Ok(vec![]));
    }
    #[test]
    fn parse_broken_ops() {
        assert_eq!(parse_cigar_string(b"=3"), Err(1));
        assert_eq!(parse_cigar_string(b"3=2"), Err(4));
        assert_eq!(parse_cigar_string(b"3M"), Err(2));
        assert_eq!(parse_cigar_string(b"2XA"), Err(4));
        assert_eq!(parse_cigar_string(b"99999999999999999999999="), Err(1));
    }
    #[test]
    fn insertion_columns() {
        let contents = "ACGTACGT\n+ 0 8=\n- 2 2=2IGG2=\n+ 1 3=1IT1XA1D1=\n";
        let layout = Layout::parse(contents).unwrap();
        assert_eq!(layout.reference(), b"ACGTACGT");
        assert_eq!(layout.reads().len(), 3);
        assert_eq!(layout.padded_reference(), b"ACGT--ACGT".to_vec());
        assert_eq!(layout.padded_read(0).unwrap(), b"ACGT--ACGT".to_vec());
        assert_eq!(layout.padded_read(1).unwrap(), b"  GTGGAC".to_vec());
        assert_eq!(layout.padded_read(2).unwrap(), b" CGTT=A-G".to_vec());
        assert_eq!(layout.padded_read(3), None);
        let answer = "REF  : ACGT--ACGT\n  0 +: ACGT--ACGT\n  1 -:   GTGGAC\n  2 +:  CGTT=A-G\n";
        assert_eq!(format!("{}", layout), answer);
    }
    #[test]
    fn deletion_right_after_insertion() {
        let reads = vec![
            AlignedRead::new(b'+', 0, parse_cigar_string(b"2=1IT1D3=").unwrap()),
            AlignedRead::new(b'+', 3, parse_cigar_string(b"2IGG3=").unwrap()),
        ];
        let layout = Layout::new(b"AACCGG".to_vec(), reads).unwrap();
        assert_eq!(layout.padded_reference(), b"AA-C--CGG".to_vec());
        assert_eq!(layout.padded_read(0).unwrap(), b"AAT---CGG".to_vec());
        assert_eq!(layout.padded_read(1).unwrap(), b"    GGCGG".to_vec());
    }
    #[test]
    fn end_marker_and_blank_lines() {
        let contents = "ACGT\r\n\n+ 0 4=\n=\n+ 0 2=\n";
        let layout = Layout::parse(contents).unwrap();
        assert_eq!(layout.reads().len(), 1);
        assert_eq!(format!("{}", layout), "REF  : ACGT\n  0 +: ACGT\n");
    }
    #[test]
    fn broken_layouts() {
        assert_eq!(Layout::parse("").unwrap_err(), CigarError::EmptyInput);
        let err = Layout::parse("ACGT\n+ 0\n").unwrap_err();
        assert_eq!(err, CigarError::MalformedRead { line: 2 });
        let err = Layout::parse("ACGT\n+ x 4=\n").unwrap_err();
        assert_eq!(err, CigarError::MalformedRead { line: 2 });
        let err = Layout::parse("ACGT\n+- 0 4=\n").unwrap_err();
        assert_eq!(err, CigarError::MalformedRead { line: 2 });
        let err = Layout::parse("ACGT\n+ 0 4=\n+ 0 4Q\n").unwrap_err();
        assert_eq!(err, CigarError::Parse { line: 3, column: 2 });
        let err = Layout::parse("ACGT\n+ 0 4=\n+ 1 4=\n").unwrap_err();
        assert_eq!(err, CigarError::OutOfReference { read: 1 });
        // No reference base after the insertion.
        let err = Layout::parse("ACGT\n+ 0 4=1IA\n").unwrap_err();
        assert_eq!(err, CigarError::OutOfReference { read: 0 });
        let err = Layout::parse("ACGT\n+ 5 0=\n").unwrap_err();
        assert_eq!(err, CigarError::OutOfReference { read: 0 });
    }
}
