//! Deterministic daily-seeded sampling.
//!
//! The one primitive behind every "pick N of a pool, dedup, pad" need in
//! the system: candidates are ranked by a fixed string hash of
//! (daily nonce, seed inputs, candidate) and the first N unique ones win.
//! Identical (date, seed inputs, pool) always produce identical output;
//! the output changes when the date rolls over.

mod hash;
mod nonce;

use std::collections::HashSet;
use std::sync::Mutex;

use tracing::{debug, trace};

pub use hash::fnv1a_32;
pub use nonce::{Clock, FileNonceStore, FixedClock, MemoryNonceStore, NonceStore, SystemClock};

/// The deterministic sampler.
///
/// Holds the injected clock and nonce-store capabilities. The read-or-
/// create step for the daily nonce is mutex-guarded so two concurrent
/// callers cannot mint two different nonces for the same date.
pub struct Sampler<C: Clock, S: NonceStore> {
    clock: C,
    store: S,
    mint_guard: Mutex<()>,
}

impl<C: Clock, S: NonceStore> Sampler<C, S> {
    /// Create a sampler over the given capabilities.
    pub fn new(clock: C, store: S) -> Self {
        Self {
            clock,
            store,
            mint_guard: Mutex::new(()),
        }
    }

    /// The nonce for today, created on first use and reused for every
    /// call made that date.
    fn daily_nonce(&self) -> String {
        let date = self.clock.today();

        let _guard = self
            .mint_guard
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        if let Some(nonce) = self.store.load(date) {
            return nonce;
        }

        let nonce = nonce::mint_nonce(date);
        debug!(%date, "minted daily nonce");
        self.store.store(date, &nonce);
        nonce
    }

    /// Pick exactly `count` candidates from `pool`.
    ///
    /// Each candidate is ranked by `fnv1a_32(seed + ":" + candidate)`
    /// where the seed combines the daily nonce with `seed_inputs`;
    /// candidates sort ascending by hash (then by identity, so equal
    /// hashes cannot reorder between calls), deduplicate by string
    /// identity, and the first `count` win.
    ///
    /// If the pool holds fewer than `count` unique candidates, the result
    /// is padded by repeating the lowest-hash candidate; the result is
    /// never shorter than `count` and never an error. The one exception
    /// is an empty pool, which returns an empty vec: there is nothing to
    /// repeat.
    pub fn sample<T: AsRef<str> + Clone>(
        &self,
        pool: &[T],
        seed_inputs: &[&str],
        count: usize,
    ) -> Vec<T> {
        if pool.is_empty() || count == 0 {
            return Vec::new();
        }

        let nonce = self.daily_nonce();
        let mut seed = nonce;
        for part in seed_inputs {
            seed.push('|');
            seed.push_str(part);
        }

        let mut ranked: Vec<(u32, &T)> = pool
            .iter()
            .map(|candidate| {
                let key = fnv1a_32(&format!("{seed}:{}", candidate.as_ref()));
                trace!(candidate = candidate.as_ref(), key, "ranked candidate");
                (key, candidate)
            })
            .collect();

        ranked.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.as_ref().cmp(b.1.as_ref())));

        let mut seen = HashSet::new();
        let mut picked: Vec<T> = Vec::with_capacity(count);
        for (_, candidate) in &ranked {
            if seen.insert(candidate.as_ref()) {
                picked.push((*candidate).clone());
                if picked.len() == count {
                    break;
                }
            }
        }

        // Documented fallback: repeat the lowest-hash candidate rather
        // than returning short.
        while picked.len() < count {
            let lowest = picked[0].clone();
            picked.push(lowest);
        }

        picked
    }

    /// Pick a single candidate, if the pool is non-empty.
    pub fn sample_one<T: AsRef<str> + Clone>(&self, pool: &[T], seed_inputs: &[&str]) -> Option<T> {
        self.sample(pool, seed_inputs, 1).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sampler(day: &str) -> Sampler<FixedClock, MemoryNonceStore> {
        let s = Sampler::new(FixedClock(date(day)), MemoryNonceStore::new());
        // Pin the nonce so tests are self-contained.
        s.store.store(date(day), day);
        s
    }

    fn pool(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn repeat_calls_are_identical() {
        let s = sampler("2026-08-25");
        let p = pool(&["ramen", "sushi", "soba", "udon", "curry"]);

        let first = s.sample(&p, &["shinjuku", "solo"], 3);
        let second = s.sample(&p, &["shinjuku", "solo"], 3);

        assert_eq!(first.len(), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn changing_a_seed_component_changes_output() {
        let s = sampler("2026-08-25");
        let p = pool(&["ramen", "sushi", "soba", "udon", "curry", "gyoza", "tempura"]);

        let base = s.sample(&p, &["shinjuku", "solo"], 3);
        let other_area = s.sample(&p, &["asakusa", "solo"], 3);
        let other_mood = s.sample(&p, &["shinjuku", "family"], 3);

        // Representative case: at least one component change is visible.
        assert!(base != other_area || base != other_mood);
    }

    #[test]
    fn different_date_changes_output() {
        let p = pool(&["ramen", "sushi", "soba", "udon", "curry", "gyoza", "tempura"]);

        let today = sampler("2026-08-25").sample(&p, &["x"], 3);
        let tomorrow = sampler("2026-08-26").sample(&p, &["x"], 3);

        assert_ne!(today, tomorrow);
    }

    #[test]
    fn oversized_request_pads_with_lowest_hash() {
        let s = sampler("2026-08-25");
        let p = pool(&["ramen", "sushi"]);

        let picked = s.sample(&p, &["pad-case"], 5);

        assert_eq!(picked.len(), 5);
        // First two are the unique candidates, rest repeat the first.
        assert_ne!(picked[0], picked[1]);
        assert_eq!(picked[2], picked[0]);
        assert_eq!(picked[3], picked[0]);
        assert_eq!(picked[4], picked[0]);
    }

    #[test]
    fn duplicates_in_pool_are_ignored() {
        let s = sampler("2026-08-25");
        let p = pool(&["ramen", "ramen", "ramen", "sushi"]);

        let picked = s.sample(&p, &["dup-case"], 2);

        assert_eq!(picked.len(), 2);
        assert_ne!(picked[0], picked[1]);
    }

    #[test]
    fn empty_pool_returns_empty() {
        let s = sampler("2026-08-25");
        let p: Vec<String> = Vec::new();
        assert!(s.sample(&p, &["x"], 3).is_empty());
    }

    #[test]
    fn zero_count_returns_empty() {
        let s = sampler("2026-08-25");
        let p = pool(&["ramen"]);
        assert!(s.sample(&p, &["x"], 0).is_empty());
    }

    #[test]
    fn sample_one() {
        let s = sampler("2026-08-25");
        let p = pool(&["ramen", "sushi", "soba"]);

        let one = s.sample_one(&p, &["x"]).unwrap();
        assert!(p.contains(&one));
        assert_eq!(s.sample_one(&p, &["x"]), Some(one));
    }

    #[test]
    fn nonce_is_created_once_and_reused() {
        let s = Sampler::new(FixedClock(date("2026-08-25")), MemoryNonceStore::new());
        let p = pool(&["a", "b", "c"]);

        let first = s.sample(&p, &["x"], 2);
        let stored = s.store.load(date("2026-08-25")).unwrap();
        let second = s.sample(&p, &["x"], 2);

        assert_eq!(first, second);
        assert_eq!(s.store.load(date("2026-08-25")).unwrap(), stored);
    }

    #[test]
    fn shared_store_gives_shared_results() {
        // Two samplers over the same slot behave as one session.
        let dir = tempfile::tempdir().unwrap();
        let store = FileNonceStore::new(dir.path().join("nonce.json"));
        let p = pool(&["a", "b", "c", "d"]);

        let s1 = Sampler::new(FixedClock(date("2026-08-25")), store.clone());
        let first = s1.sample(&p, &["x"], 2);

        let s2 = Sampler::new(FixedClock(date("2026-08-25")), store);
        let second = s2.sample(&p, &["x"], 2);

        assert_eq!(first, second);
    }
}
