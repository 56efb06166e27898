//! This module is to generate random haplotypes to assess the performance.
//! Usually, it would not be used in the real-applications.
use rand::seq::SliceRandom;
use rand::Rng;
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub sub: f64,
    pub del: f64,
    pub ins: f64,
}

impl Profile {
    pub fn sum(&self) -> f64 {
        self.sub + self.del + self.ins
    }
}

pub const PROFILE: Profile = Profile {
    sub: 0.04,
    del: 0.04,
    ins: 0.07,
};

pub const CCS_PROFILE: Profile = Profile {
    sub: 0.002,
    del: 0.004,
    ins: 0.004,
};

#[derive(Debug, Clone, Copy)]
enum Op {
    Match,
    MisMatch,
    Del,
    In,
}

impl Op {
    fn weight(self, p: &Profile) -> f64 {
        match self {
            Op::Match => 1. - p.sum(),
            Op::MisMatch => p.sub,
            Op::Del => p.del,
            Op::In => p.ins,
        }
    }
}

const OPERATIONS: [Op; 4] = [Op::Match, Op::MisMatch, Op::Del, Op::In];

/// Introduce substitutions, deletions, and insertions into `seq` following `p`.
pub fn introduce_randomness<T: Rng>(seq: &[u8], rng: &mut T, p: &Profile) -> Vec<u8> {
    let mut res = vec![];
    let mut remainings: Vec<_> = seq.iter().copied().rev().collect();
    while let Some(&base) = remainings.last() {
        match OPERATIONS.choose_weighted(rng, |e| e.weight(p)) {
            Ok(Op::Match) => res.push(base),
            Ok(Op::MisMatch) => res.push(choose_base(rng, base)),
            Ok(Op::In) => {
                res.push(random_base(rng));
                continue;
            }
            Ok(Op::Del) | Err(_) => {}
        }
        remainings.pop();
    }
    res
}

pub fn generate_seq<T: Rng>(rng: &mut T, len: usize) -> Vec<u8> {
    (0..len).map(|_| random_base(rng)).collect()
}

/// Two haplotypes of length `len`, differing by substitutions at the rate of `het_rate`.
pub fn generate_haplotypes<T: Rng>(rng: &mut T, len: usize, het_rate: f64) -> (Vec<u8>, Vec<u8>) {
    let hap1 = generate_seq(rng, len);
    let hap2 = hap1
        .iter()
        .map(|&base| match rng.gen_bool(het_rate) {
            true => choose_base(rng, base),
            false => base,
        })
        .collect();
    (hap1, hap2)
}

/// Exchange the two haplotypes from `pos`: `(h1[..pos] + h2[pos..], h2[..pos] + h1[pos..])`.
pub fn switch_at(hap1: &[u8], hap2: &[u8], pos: usize) -> (Vec<u8>, Vec<u8>) {
    let first = hap1[..pos].iter().chain(&hap2[pos..]).copied().collect();
    let second = hap2[..pos].iter().chain(&hap1[pos..]).copied().collect();
    (first, second)
}

/// Replace bases by the mask marker at the rate of `rate`. The length does not change.
pub fn introduce_masks<T: Rng>(seq: &[u8], rng: &mut T, rate: f64) -> Vec<u8> {
    seq.iter()
        .map(|&base| if rng.gen_bool(rate) { b'X' } else { base })
        .collect()
}

/// Replace bases by the mask marker at the rate of `mask_rate`, and put
/// gap markers before bases at the rate of `gap_rate`.
pub fn introduce_markers<T: Rng>(seq: &[u8], rng: &mut T, mask_rate: f64, gap_rate: f64) -> Vec<u8> {
    let mut res = Vec::with_capacity(seq.len() * 11 / 10);
    for &base in seq {
        if rng.gen_bool(gap_rate) {
            res.push(b'-');
        }
        res.push(if rng.gen_bool(mask_rate) { b'X' } else { base });
    }
    res
}

/// Truncate `seq` or extend it by random bases so that its length is `len`.
pub fn fit_length<T: Rng>(seq: &[u8], len: usize, rng: &mut T) -> Vec<u8> {
    let mut res: Vec<_> = seq.iter().take(len).copied().collect();
    while res.len() < len {
        res.push(random_base(rng));
    }
    res
}

fn choose_base<T: Rng>(rng: &mut T, base: u8) -> u8 {
    let bases: Vec<u8> = b"ATCG".iter().filter(|&&e| e != base).copied().collect();
    bases.choose(rng).copied().unwrap_or(base)
}

fn random_base<T: Rng>(rng: &mut T) -> u8 {
    b"ATGC"[rng.gen_range(0..4)]
}
