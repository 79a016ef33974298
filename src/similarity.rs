//! Ratcliff/Obershelp "gestalt" similarity with the same scoring, cutoffs and
//! tie-breaking as the classic `get_close_matches` matcher, so suggestion lists
//! come out identical for identical inputs.
//!
//! Strings are compared as sequences of Unicode scalar values.

use std::collections::{HashMap, HashSet};

/// Default minimum ratio a candidate must reach.
pub const DEFAULT_CUTOFF : f64 = 0.6;
/// Default number of matches returned.
pub const DEFAULT_MAX : usize = 3;

// b-sequences at least this long get popular elements pruned from b2j
const AUTOJUNK_MIN_LEN : usize = 200;

/// Matcher with a fixed second sequence (the query), against which many first
/// sequences (candidates) are scored.
pub struct SequenceMatcher {
    a : Vec<char>,
    b : Vec<char>,
    b2j : HashMap<char, Vec<usize>>,
    b_counts : HashMap<char, usize>
}

impl SequenceMatcher {
    pub fn new(b : &str) -> SequenceMatcher {
        let b : Vec<char> = b.chars().collect();
        let mut b2j : HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }
        if b.len() >= AUTOJUNK_MIN_LEN {
            let ntest = b.len() / 100 + 1;
            let popular : HashSet<char> = b2j.iter()
                .filter(|(_, idxs)| idxs.len() > ntest)
                .map(|(&c, _)| c)
                .collect();
            for c in popular {
                b2j.remove(&c);
            }
        }
        let mut b_counts = HashMap::new();
        for &c in b.iter() {
            *b_counts.entry(c).or_insert(0) += 1;
        }
        SequenceMatcher { a : Vec::new(), b, b2j, b_counts }
    }

    pub fn set_a(&mut self, a : &str) {
        self.a = a.chars().collect();
    }

    /// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as
    /// `(i, j, size)`, earliest in `a` then in `b` among equals.
    fn find_longest_match(&self, alo : usize, ahi : usize, blo : usize, bhi : usize)
            -> (usize, usize, usize) {
        let (a, b) = (&self.a, &self.b);
        let (mut besti, mut bestj, mut bestsize) = (alo, blo, 0);
        let mut j2len : HashMap<usize, usize> = HashMap::new();
        for i in alo..ahi {
            let mut newj2len = HashMap::new();
            if let Some(js) = self.b2j.get(&a[i]) {
                for &j in js {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let k = j.checked_sub(1)
                        .and_then(|p| j2len.get(&p))
                        .copied()
                        .unwrap_or(0) + 1;
                    newj2len.insert(j, k);
                    if k > bestsize {
                        besti = i + 1 - k;
                        bestj = j + 1 - k;
                        bestsize = k;
                    }
                }
            }
            j2len = newj2len;
        }
        // grow across elements pruned as popular
        while besti > alo && bestj > blo && a[besti - 1] == b[bestj - 1] {
            besti -= 1;
            bestj -= 1;
            bestsize += 1;
        }
        while besti + bestsize < ahi && bestj + bestsize < bhi
                && a[besti + bestsize] == b[bestj + bestsize] {
            bestsize += 1;
        }
        (besti, bestj, bestsize)
    }

    /// Total number of matched elements across all matching blocks.
    fn matches(&self) -> usize {
        let mut queue = vec![(0, self.a.len(), 0, self.b.len())];
        let mut total = 0;
        while let Some((alo, ahi, blo, bhi)) = queue.pop() {
            let (i, j, k) = self.find_longest_match(alo, ahi, blo, bhi);
            if k > 0 {
                total += k;
                if alo < i && blo < j {
                    queue.push((alo, i, blo, j));
                }
                if i + k < ahi && j + k < bhi {
                    queue.push((i + k, ahi, j + k, bhi));
                }
            }
        }
        total
    }

    fn total_len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    pub fn ratio(&self) -> f64 {
        calculate_ratio(self.matches(), self.total_len())
    }

    /// Upper bound on `ratio` from the multiset of shared characters.
    pub fn quick_ratio(&self) -> f64 {
        let mut avail : HashMap<char, isize> = HashMap::new();
        let mut matches = 0;
        for &c in self.a.iter() {
            let left = avail.entry(c)
                .or_insert_with(|| self.b_counts.get(&c).copied().unwrap_or(0) as isize);
            *left -= 1;
            if *left >= 0 {
                matches += 1;
            }
        }
        calculate_ratio(matches, self.total_len())
    }

    /// Upper bound on `ratio` from the lengths alone.
    pub fn real_quick_ratio(&self) -> f64 {
        calculate_ratio(self.a.len().min(self.b.len()), self.total_len())
    }
}

fn calculate_ratio(matches : usize, length : usize) -> f64 {
    if length == 0 {
        1.0
    } else {
        2.0 * matches as f64 / length as f64
    }
}

/// Up to `n` of `possibilities` scoring at least `cutoff` against `word`, best
/// first. Equal scores are ordered by descending string.
pub fn get_close_matches<'a, I>(word : &str, possibilities : I, n : usize, cutoff : f64)
        -> Vec<&'a str> where I : IntoIterator<Item = &'a str> {
    if n == 0 || !(0.0..=1.0).contains(&cutoff) {
        return Vec::new();
    }
    let mut matcher = SequenceMatcher::new(word);
    let mut scored : Vec<(f64, &'a str)> = Vec::new();
    for x in possibilities {
        matcher.set_a(x);
        if matcher.real_quick_ratio() >= cutoff && matcher.quick_ratio() >= cutoff {
            let ratio = matcher.ratio();
            if ratio >= cutoff {
                scored.push((ratio, x));
            }
        }
    }
    scored.sort_by(|l, r| r.0.total_cmp(&l.0).then_with(|| r.1.cmp(l.1)));
    scored.truncate(n);
    scored.into_iter().map(|(_, x)| x).collect()
}
