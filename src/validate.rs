// Input checks before any alignment.
use crate::alignment::{GAP, MASK};
use crate::error::{InputError, Result};
use crate::{PredictedPair, TruthPair};

const fn lookup_table() -> [bool; 256] {
    let mut slots = [false; 256];
    slots[b'A' as usize] = true;
    slots[b'C' as usize] = true;
    slots[b'G' as usize] = true;
    slots[b'T' as usize] = true;
    slots
}

// True for the bases a predicted sequence may have.
const NUCLEOTIDES: [bool; 256] = lookup_table();

/// Check the inputs, and return the maximum number of gap and mask markers in a truth sequence.
pub fn check_input(truth: &TruthPair, predicted: &PredictedPair) -> Result<usize> {
    let seqs = [
        ("s1", truth.s1.as_slice()),
        ("s2", truth.s2.as_slice()),
        ("t1", predicted.t1.as_slice()),
        ("t2", predicted.t2.as_slice()),
    ];
    if let Some(&(which, _)) = seqs.iter().find(|(_, seq)| seq.is_empty()) {
        return Err(InputError::EmptySequence { which });
    }
    if truth.s1.len() != truth.s2.len() {
        return Err(InputError::TruthLengthMismatch {
            s1: truth.s1.len(),
            s2: truth.s2.len(),
        });
    }
    for &(which, seq) in seqs.iter().skip(2) {
        if let Some(position) = seq.iter().position(|&b| !NUCLEOTIDES[b as usize]) {
            let base = seq[position];
            return Err(InputError::IllegalBase {
                which,
                position,
                base,
            });
        }
    }
    Ok(count_markers(&truth.s1).max(count_markers(&truth.s2)))
}

/// The number of gap and mask markers.
pub fn count_markers(seq: &[u8]) -> usize {
    bytecount::count(seq, GAP) + bytecount::count(seq, MASK)
}
