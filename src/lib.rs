//! Evaluate a predicted haplotype pair against a truth haplotype pair.
//!
//! The score is the best alignment score of the two pairs, allowing at most one
//! synchronized phase switch. See [`alignment::switch`].
#[macro_use]
extern crate log;
pub mod alignment;
pub mod cigar;
pub mod dptable;
pub mod error;
pub mod gen_seq;
pub mod io;
pub mod validate;
use alignment::switch::{no_switch_score, switch_score};
use alignment::ScoringScheme;
use error::{InputError, Result};

/// The truth haplotypes. Both sequences have the same length and are over `ACGT-X`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthPair {
    pub s1: Vec<u8>,
    pub s2: Vec<u8>,
}

impl TruthPair {
    pub fn new(s1: &[u8], s2: &[u8]) -> Self {
        Self {
            s1: s1.to_vec(),
            s2: s2.to_vec(),
        }
    }
}

/// The predicted haplotypes, over `ACGT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictedPair {
    pub t1: Vec<u8>,
    pub t2: Vec<u8>,
}

impl PredictedPair {
    pub fn new(t1: &[u8], t2: &[u8]) -> Self {
        Self {
            t1: t1.to_vec(),
            t2: t2.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// At most one synchronized switch.
    Switch,
    /// The better of the two label assignments, without any switch.
    NoSwitch,
}

#[derive(Debug, Clone)]
pub struct EvalConfig {
    pub scheme: ScoringScheme,
    pub mode: Mode,
    /// Band width. If `None`, it is derived from the number of markers in the truth.
    pub band_width: Option<usize>,
}

impl std::default::Default for EvalConfig {
    fn default() -> Self {
        Self {
            scheme: ScoringScheme::default(),
            mode: Mode::Switch,
            band_width: None,
        }
    }
}

impl EvalConfig {
    pub fn new(scheme: ScoringScheme, mode: Mode, band_width: Option<usize>) -> Self {
        Self {
            scheme,
            mode,
            band_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    /// `None` if no alignment is attainable under the band.
    pub raw: Option<i32>,
    pub band_width: usize,
}

impl ScoreReport {
    pub fn raw_score(&self) -> i32 {
        display_score(self.raw)
    }
    /// Non-negative part of the raw score, divided by 100.
    pub fn final_score(&self) -> i32 {
        self.raw_score().max(0) / 100
    }
}

impl std::fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "raw_score: {}", self.raw_score())?;
        write!(f, "final_score (raw_score / 100): {}", self.final_score())
    }
}

/// The printed form of a score. An unattainable score is `i32::MIN`.
pub fn display_score(score: Option<i32>) -> i32 {
    score.unwrap_or(i32::MIN)
}

/// Validate the inputs and score the predicted pair against the truth pair.
pub fn evaluate(truth: &TruthPair, predicted: &PredictedPair, config: &EvalConfig) -> Result<ScoreReport> {
    let marker_count = validate::check_input(truth, predicted)?;
    let band_width = match config.band_width {
        Some(bw) if bw % 2 == 1 => bw,
        Some(bw) => return Err(InputError::InvalidBandWidth(bw)),
        None => config.scheme.band_width(marker_count),
    };
    debug!("MARKERS\t{}\tBAND\t{}", marker_count, band_width);
    let (s1, s2) = (truth.s1.as_slice(), truth.s2.as_slice());
    let (t1, t2) = (predicted.t1.as_slice(), predicted.t2.as_slice());
    let raw = match config.mode {
        Mode::Switch => switch_score(s1, s2, t1, t2, band_width, &config.scheme),
        Mode::NoSwitch => no_switch_score(s1, s2, t1, t2, band_width, &config.scheme),
    };
    Ok(ScoreReport { raw, band_width })
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_xoshiro::Xoshiro256StarStar;
    const SEED: u64 = 32389;
    #[test]
    fn trailing_gap_scenario() {
        let truth = TruthPair::new(b"ACGT-", b"ACGTA");
        let predicted = PredictedPair::new(b"ACGT", b"ACGTA");
        let config = EvalConfig {
            mode: Mode::NoSwitch,
            ..EvalConfig::default()
        };
        let fixed = evaluate(&truth, &predicted, &config).unwrap();
        assert_eq!(fixed.band_width, 603);
        assert_eq!(fixed.raw, Some(9));
        assert_eq!(fixed.final_score(), 0);
        let switched = evaluate(&truth, &predicted, &EvalConfig::default()).unwrap();
        assert!(fixed.raw <= switched.raw);
        assert_eq!(switched.raw, Some(9));
    }
    #[test]
    fn report_format() {
        let report = ScoreReport {
            raw: Some(12_345),
            band_width: 601,
        };
        assert_eq!(report.final_score(), 123);
        assert_eq!(
            format!("{}", report),
            "raw_score: 12345\nfinal_score (raw_score / 100): 123"
        );
        let report = ScoreReport {
            raw: None,
            band_width: 601,
        };
        assert_eq!(report.raw_score(), i32::MIN);
        assert_eq!(report.final_score(), 0);
    }
    #[test]
    fn invalid_inputs() {
        let truth = TruthPair::new(b"ACGT", b"ACGT");
        let predicted = PredictedPair::new(b"ACGN", b"ACGT");
        assert!(evaluate(&truth, &predicted, &EvalConfig::default()).is_err());
        let predicted = PredictedPair::new(b"ACGT", b"ACGT");
        let config = EvalConfig {
            band_width: Some(4),
            ..EvalConfig::default()
        };
        assert!(matches!(
            evaluate(&truth, &predicted, &config),
            Err(InputError::InvalidBandWidth(4))
        ));
    }
    #[test]
    fn narrow_band_override() {
        let truth = TruthPair::new(b"ACGTACGTAC", b"ACGTACGTAC");
        let predicted = PredictedPair::new(b"ACGTACGTAC", b"ACG");
        let config = EvalConfig::new(ScoringScheme::default(), Mode::Switch, Some(3));
        let report = evaluate(&truth, &predicted, &config).unwrap();
        assert_eq!(report.raw, None);
        assert_eq!(report.raw_score(), i32::MIN);
        let report = evaluate(&truth, &predicted, &EvalConfig::default()).unwrap();
        assert!(report.raw.is_some());
    }
    #[test]
    fn huge_band_override() {
        let truth = TruthPair::new(b"ACGT-ACGTX", b"ACGTTACGTA");
        let predicted = PredictedPair::new(b"ACGTACGTA", b"ACGTTACGTA");
        for &mode in &[Mode::Switch, Mode::NoSwitch] {
            let scheme = ScoringScheme::default();
            let derived = EvalConfig::new(scheme, mode, None);
            let derived = evaluate(&truth, &predicted, &derived).unwrap();
            let huge = EvalConfig::new(scheme, mode, Some(usize::MAX));
            let huge = evaluate(&truth, &predicted, &huge).unwrap();
            assert_eq!(huge.band_width, usize::MAX);
            assert!(huge.raw.is_some());
            assert_eq!(huge.raw, derived.raw);
        }
    }
    #[test]
    fn noisy_prediction() {
        let mut rng: Xoshiro256StarStar = SeedableRng::seed_from_u64(SEED);
        for _ in 0..10 {
            let len = rng.gen_range(500..1000);
            let (h1, h2) = gen_seq::generate_haplotypes(&mut rng, len, 0.01);
            let s1 = gen_seq::introduce_masks(&h1, &mut rng, 0.01);
            let s2 = gen_seq::introduce_masks(&h2, &mut rng, 0.01);
            let t1 = gen_seq::introduce_randomness(&h1, &mut rng, &gen_seq::CCS_PROFILE);
            let t2 = gen_seq::introduce_randomness(&h2, &mut rng, &gen_seq::CCS_PROFILE);
            let truth = TruthPair { s1, s2 };
            let predicted = PredictedPair { t1, t2 };
            let exact = PredictedPair::new(&h1, &h2);
            let report = evaluate(&truth, &predicted, &EvalConfig::default()).unwrap();
            let perfect = evaluate(&truth, &exact, &EvalConfig::default()).unwrap();
            assert!(report.raw <= perfect.raw);
            assert!(perfect.raw.unwrap() <= 2 * len as i32);
        }
    }
}
