use super::ScoringScheme;
use crate::dptable::{DPTable, Orientation};

/// Banded global alignment between the truth `xs` and the predicted `ys`.
///
/// The table is filled column by column (one column per predicted base), and only the rows
/// `i` with `|i - j| <= band_width / 2` are computed. In [`Orientation::Reverse`] both sequences
/// are read from their ends, so the table holds suffix alignments instead of prefix alignments.
///
/// Return the table and the score of the whole alignment, or `None` if either sequence is empty
/// or the band is too narrow to connect the two ends, i.e., `band_width / 2 < |xs.len() - ys.len()|`.
pub fn align(
    xs: &[u8],
    ys: &[u8],
    band_width: usize,
    orientation: Orientation,
    scheme: &ScoringScheme,
) -> Option<(DPTable, i32)> {
    let (xlen, ylen) = (xs.len(), ys.len());
    if xlen == 0 || ylen == 0 || band_width == 0 {
        return None;
    }
    // Every cell and boundary is inside a band of this radius, so any wider band adds nothing.
    let radius = (band_width / 2).min(xlen.max(ylen));
    if radius < xlen.max(ylen) - xlen.min(ylen) {
        debug!("BAND\t{}\t{}\t{}", xlen, ylen, band_width);
        return None;
    }
    debug_assert!(band_width % 2 == 1);
    let x_at = |i: usize| match orientation {
        Orientation::Forward => xs[i],
        Orientation::Reverse => xs[xlen - 1 - i],
    };
    let y_at = |j: usize| match orientation {
        Orientation::Forward => ys[j],
        Orientation::Reverse => ys[ylen - 1 - j],
    };
    let pen = scheme.step_penalty;
    let mut dp = DPTable::new(xlen, ylen, 2 * radius + 1, orientation);
    for j in 0..ylen {
        let y = y_at(j);
        let (start, end) = (j.saturating_sub(radius), (j + radius).min(xlen - 1));
        for i in start..=end {
            let x = x_at(i);
            let (i_s, j_s) = (i as isize, j as isize);
            let mat = predecessor(&dp, i_s - 1, j_s - 1, pen).map(|s| s + scheme.diagonal(x, y));
            let del = predecessor(&dp, i_s - 1, j_s, pen).map(|s| s + scheme.truth_only(x));
            let ins = predecessor(&dp, i_s, j_s - 1, pen).map(|s| s + scheme.predicted_only());
            if let Some(score) = mat.into_iter().chain(del).chain(ins).max() {
                dp.set_raw(i, j, score);
            }
        }
    }
    let score = dp.full_score()?;
    Some((dp, score))
}

/// Score of the whole alignment only.
pub fn align_score(xs: &[u8], ys: &[u8], band_width: usize, scheme: &ScoringScheme) -> Option<i32> {
    align(xs, ys, band_width, Orientation::Forward, scheme).map(|(_, score)| score)
}

// Score of the storage cell (i, j). The index -1 is the boundary before the first base,
// charged one step penalty per base already consumed.
// A cell outside of the band, the boundary included, can not be a predecessor.
fn predecessor(dp: &DPTable, i: isize, j: isize, pen: i32) -> Option<i32> {
    if dp.radius() < (i - j).unsigned_abs() {
        return None;
    }
    match (i, j) {
        (-1, -1) => Some(0),
        (-1, j) => Some((j as i32 + 1) * pen),
        (i, -1) => Some((i as i32 + 1) * pen),
        (i, j) => dp.get_raw(i as usize, j as usize),
    }
}
