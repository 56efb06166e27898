//! Scoring a predicted pair `(t1, t2)` against a truth pair `(s1, s2)`.
//!
//! With a switch, the predicted pair may follow `(s1, s2)` up to some truth position and
//! `(s2, s1)` after it. Both predicted sequences have to switch at the same truth position.
use super::banded::{align, align_score};
use super::merge::{merge, SplitScores};
use super::ScoringScheme;
use crate::dptable::Orientation;

/// The best score allowing at most one synchronized switch, or `None` if no assignment is attainable.
pub fn switch_score(
    s1: &[u8],
    s2: &[u8],
    t1: &[u8],
    t2: &[u8],
    band_width: usize,
    scheme: &ScoringScheme,
) -> Option<i32> {
    assert_eq!(s1.len(), s2.len());
    // t1 starts on s1, t2 starts on s2.
    let straight = assignment_score(s1, s2, t1, t2, band_width, scheme);
    // t2 starts on s1, t1 starts on s2.
    let crossed = assignment_score(s1, s2, t2, t1, band_width, scheme);
    debug!("ASSIGN\t{:?}\t{:?}", straight, crossed);
    if straight.is_none() && crossed.is_none() {
        warn!(
            "No attainable alignment under band width {} (truth:{}, predicted:{},{})",
            band_width,
            s1.len(),
            t1.len(),
            t2.len()
        );
    }
    straight.max(crossed)
}

/// The best score without any switch. It is the better of `s1~t1 + s2~t2` and `s1~t2 + s2~t1`.
pub fn no_switch_score(
    s1: &[u8],
    s2: &[u8],
    t1: &[u8],
    t2: &[u8],
    band_width: usize,
    scheme: &ScoringScheme,
) -> Option<i32> {
    let pair = |xs: &[u8], ys: &[u8], zs: &[u8], ws: &[u8]| -> Option<i32> {
        let (first, second) = rayon::join(
            || align_score(xs, ys, band_width, scheme),
            || align_score(zs, ws, band_width, scheme),
        );
        Some(first? + second?)
    };
    let straight = pair(s1, t1, s2, t2);
    let crossed = pair(s1, t2, s2, t1);
    info!("score1 = {}", crate::display_score(straight));
    info!("score2 = {}", crate::display_score(crossed));
    straight.max(crossed)
}

// `first` starts on `on_first` and switches to `on_second`, while `second` does the opposite.
// The two split vectors are summed position-wise, so both switch at the same truth position.
fn assignment_score(
    first: &[u8],
    second: &[u8],
    on_first: &[u8],
    on_second: &[u8],
    band_width: usize,
    scheme: &ScoringScheme,
) -> Option<i32> {
    let xs = spliced(first, second, on_first, band_width, scheme)?;
    let ys = spliced(second, first, on_second, band_width, scheme)?;
    trace!("SPLIT\t{:?}", xs);
    trace!("SPLIT\t{:?}", ys);
    best_synchronized(&xs, &ys)
}

// Split scores of following `prefix` and then `suffix` by `predicted`.
// The two tables are dropped as soon as they are merged.
fn spliced(
    prefix: &[u8],
    suffix: &[u8],
    predicted: &[u8],
    band_width: usize,
    scheme: &ScoringScheme,
) -> Option<SplitScores> {
    let (pre, post) = rayon::join(
        || align(prefix, predicted, band_width, Orientation::Forward, scheme),
        || align(suffix, predicted, band_width, Orientation::Reverse, scheme),
    );
    let ((pre, _), (post, _)) = (pre?, post?);
    Some(merge(&pre, &post, scheme.switch_penalty))
}

fn best_synchronized(xs: &[Option<i32>], ys: &[Option<i32>]) -> Option<i32> {
    xs.iter()
        .zip(ys.iter())
        .filter_map(|(&x, &y)| Some(x? + y?))
        .max()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::gen_seq;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;
    const SEED: u64 = 923480;
    #[test]
    fn no_switch_short() {
        let scheme = ScoringScheme::default();
        let (s1, s2) = (&b"ACGT-"[..], &b"ACGTA"[..]);
        let (t1, t2) = (&b"ACGT"[..], &b"ACGTA"[..]);
        let score = no_switch_score(s1, s2, t1, t2, 603, &scheme);
        assert_eq!(score, Some(9));
        let score = switch_score(s1, s2, t1, t2, 603, &scheme);
        assert_eq!(score, Some(9));
        // Swapped labels.
        let score = no_switch_score(s1, s2, t2, t1, 603, &scheme);
        assert_eq!(score, Some(9));
        let score = switch_score(s1, s2, t2, t1, 603, &scheme);
        assert_eq!(score, Some(9));
    }
    #[test]
    fn synchronized_switch() {
        let scheme = ScoringScheme::default();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(SEED);
        for _ in 0..20 {
            let len = rng.gen_range(100..300);
            let (s1, s2) = gen_seq::generate_haplotypes(&mut rng, len, 0.1);
            let pos = rng.gen_range(1..len);
            let (t1, t2) = gen_seq::switch_at(&s1, &s2, pos);
            let switched = switch_score(&s1, &s2, &t1, &t2, 601, &scheme).unwrap();
            // Each of the two merged vectors pays the switch penalty once.
            let answer = 2 * len as i32 + 2 * scheme.switch_penalty;
            assert!(answer <= switched, "{},{}", answer, switched);
            let fixed = no_switch_score(&s1, &s2, &t1, &t2, 601, &scheme).unwrap();
            assert!(fixed <= switched);
        }
    }
    #[test]
    fn switch_never_worse_than_no_switch() {
        let scheme = ScoringScheme::default();
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(SEED);
        for _ in 0..30 {
            let len = rng.gen_range(1..150);
            let (h1, h2) = gen_seq::generate_haplotypes(&mut rng, len, 0.05);
            let s1 = gen_seq::introduce_masks(&h1, &mut rng, 0.02);
            let s2 = gen_seq::introduce_masks(&h2, &mut rng, 0.02);
            let t1 = gen_seq::introduce_randomness(&h1, &mut rng, &gen_seq::PROFILE);
            let t2 = gen_seq::introduce_randomness(&h2, &mut rng, &gen_seq::PROFILE);
            if t1.is_empty() || t2.is_empty() {
                continue;
            }
            for &bw in &[11, 31, 601] {
                let fixed = no_switch_score(&s1, &s2, &t1, &t2, bw, &scheme);
                let switched = switch_score(&s1, &s2, &t1, &t2, bw, &scheme);
                assert!(fixed <= switched, "{:?},{:?}", fixed, switched);
            }
        }
    }
    #[test]
    fn unattainable_branches() {
        let scheme = ScoringScheme::default();
        let (s1, s2) = (&b"ACGTACGTAC"[..], &b"ACGTACGTAC"[..]);
        let (t1, t2) = (&b"ACGTACGTAC"[..], &b"AC"[..]);
        assert_eq!(switch_score(s1, s2, t1, t2, 5, &scheme), None);
        assert_eq!(no_switch_score(s1, s2, t1, t2, 5, &scheme), None);
        assert!(switch_score(s1, s2, t1, t2, 17, &scheme).is_some());
    }
    #[test]
    fn synchronized_sum_skips_unattainable() {
        let xs = vec![Some(1), None, Some(3), Some(-4)];
        let ys = vec![Some(2), Some(10), None, Some(5)];
        assert_eq!(best_synchronized(&xs, &ys), Some(3));
        let ys = vec![None, None, None, None];
        assert_eq!(best_synchronized(&xs, &ys), None);
    }
}
