use crate::dptable::{DPTable, Orientation};

/// Scores of switching from one truth sequence to the other, indexed by the split position.
/// `None` means no valid split exists at that position.
pub type SplitScores = Vec<Option<i32>>;

/// Splice a forward table of `(xs, ys)` and a reverse table of `(zs, ys)`, where `xs` and `zs`
/// have the same length `n`.
///
/// The `k`-th element (`0 < k < n`) is the best score of aligning `xs[..k]` to `ys[..=j]` and `zs[k..]`
/// to `ys[j+1..]`, maximized over `j`, plus the switch penalty.
/// The first element is the score of aligning whole `zs` to `ys`,
/// and the last element is the score of aligning whole `xs` to `ys`. Neither of them pays the switch penalty.
pub fn merge(prefix: &DPTable, suffix: &DPTable, switch_penalty: i32) -> SplitScores {
    assert_eq!(prefix.orientation(), Orientation::Forward);
    assert_eq!(suffix.orientation(), Orientation::Reverse);
    assert_eq!((prefix.rows(), prefix.cols()), (suffix.rows(), suffix.cols()));
    assert_eq!(prefix.radius(), suffix.radius());
    let (slen, tlen) = (prefix.rows() as isize, prefix.cols() as isize);
    let radius = prefix.radius() as isize;
    let mut scores = Vec::with_capacity(slen as usize + 1);
    scores.push(suffix.full_score());
    for i in 1..slen {
        // Columns around the band of the prefix table at row i ...
        let pre_start = (i - radius).max(0);
        let pre_end = (i + radius).min(tlen - 1);
        // ... and around the band of the suffix table, which is centered on the other diagonal.
        let post_start = (tlen - slen + i - radius).max(0);
        let post_end = (tlen - slen + i + radius).min(tlen - 1);
        let (start, end) = (pre_start.max(post_start - 1).max(0), pre_end.min(post_end - 1));
        let best = (start..=end)
            .filter_map(|j| {
                let (i, j) = (i as usize, j as usize);
                let pre = prefix.try_get(i - 1, j)?;
                let post = suffix.try_get(i, j + 1)?;
                Some(pre + post + switch_penalty)
            })
            .max();
        scores.push(best);
    }
    scores.push(prefix.full_score());
    scores
}
