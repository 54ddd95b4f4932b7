//! Rank aggregation across expanded queries.
//!
//! Every expanded query yields its own noisy ranking. Frames that several
//! queries agree on rise to the top: each list a frame appears in adds one
//! point plus a rank bonus in (0, 1]. The merged ranking is then thinned so
//! that near-identical frames of the same joke (the same episode, a few
//! seconds apart) collapse onto the best-scoring one.

use std::collections::{HashMap, HashSet};

use homer_models::{Frame, FrameKey};

/// Frames of the same episode closer than this are treated as one moment.
pub const MIN_GAP_MS: i64 = 30_000;

/// Default shortlist size.
pub const DEFAULT_MAX_RESULTS: usize = 12;

/// Merges ranked frame lists into a deduplicated, temporally spread shortlist.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    /// Upper bound on the shortlist length
    pub max_results: usize,
    /// Minimum distance between two kept frames of one episode
    pub min_gap_ms: i64,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            min_gap_ms: MIN_GAP_MS,
        }
    }
}

struct ScoredFrame {
    frame: Frame,
    score: f64,
    first_seen: usize,
}

impl Aggregator {
    pub fn new(max_results: usize) -> Self {
        Self {
            max_results,
            ..Default::default()
        }
    }

    /// Merge `lists` (each best match first) into at most `max_results` frames.
    pub fn aggregate<L: AsRef<[Frame]>>(&self, lists: &[L]) -> Vec<Frame> {
        let mut scored = score(lists);

        // sort_by is stable, but first_seen makes the tie-break explicit
        scored.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.first_seen.cmp(&b.first_seen))
        });

        self.suppress_near_duplicates(scored)
    }

    /// Greedy pass: accept a frame only if it is at least `min_gap_ms` from
    /// every frame already accepted for the same episode.
    fn suppress_near_duplicates(&self, ranked: Vec<ScoredFrame>) -> Vec<Frame> {
        let mut kept: Vec<Frame> = Vec::with_capacity(self.max_results.min(ranked.len()));
        let mut kept_by_episode: HashMap<String, Vec<i64>> = HashMap::new();

        for candidate in ranked {
            if kept.len() >= self.max_results {
                break;
            }

            let frame = candidate.frame;
            let timestamps = kept_by_episode.entry(frame.episode.clone()).or_default();
            let too_close = timestamps
                .iter()
                .any(|&t| frame.timestamp.abs_diff(t) < self.min_gap_ms.unsigned_abs());

            if !too_close {
                timestamps.push(frame.timestamp);
                kept.push(frame);
            }
        }

        kept
    }
}

/// Accumulate scores per (episode, timestamp), preserving first-seen order.
///
/// The first list to mention a key supplies its canonical `Frame`.
fn score<L: AsRef<[Frame]>>(lists: &[L]) -> Vec<ScoredFrame> {
    let mut index: HashMap<FrameKey, usize> = HashMap::new();
    let mut scored: Vec<ScoredFrame> = Vec::new();

    for list in lists {
        let list = list.as_ref();
        let len = list.len() as f64;
        let mut seen_in_list: HashSet<FrameKey> = HashSet::with_capacity(list.len());

        for (rank, frame) in list.iter().enumerate() {
            let key = frame.key();
            if !seen_in_list.insert(key.clone()) {
                continue;
            }

            let contribution = 1.0 + (1.0 - rank as f64 / len);

            match index.get(&key) {
                Some(&i) => scored[i].score += contribution,
                None => {
                    let first_seen = scored.len();
                    index.insert(key, first_seen);
                    scored.push(ScoredFrame {
                        frame: frame.clone(),
                        score: contribution,
                        first_seen,
                    });
                }
            }
        }
    }

    scored
}

/// Merge ranked lists into at most `max_results` frames with the default gap.
pub fn aggregate<L: AsRef<[Frame]>>(lists: &[L], max_results: usize) -> Vec<Frame> {
    Aggregator::new(max_results).aggregate(lists)
}
