//! Per-size latency accumulator.
//!
//! Maps codec name to the running sum of measured nanoseconds. Entries keep
//! the order in which codecs were registered, so reports print in a fixed
//! order. A fresh accumulator is built for every size and dropped once that
//! size has been reported.

use crate::timefn::LatencyNs;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LatencyAccumulator {
    entries: Vec<(&'static str, LatencyNs)>,
}

impl LatencyAccumulator {
    /// One zeroed entry per name, in the given order.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let mut acc = LatencyAccumulator::default();
        for name in names {
            acc.slot(name);
        }
        acc
    }

    fn slot(&mut self, codec: &'static str) -> &mut LatencyNs {
        let idx = match self.entries.iter().position(|(n, _)| *n == codec) {
            Some(idx) => idx,
            None => {
                self.entries.push((codec, 0));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Add `ns` to `codec`'s sum, creating the entry at the end if needed.
    pub fn add(&mut self, codec: &'static str, ns: LatencyNs) {
        let total = self.slot(codec);
        *total = total.saturating_add(ns);
    }

    pub fn total(&self, codec: &str) -> Option<LatencyNs> {
        self.entries.iter().find(|(n, _)| *n == codec).map(|(_, t)| *t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, LatencyNs)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
