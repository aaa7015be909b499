use {
    crate::trace::{CpuId, Event, ProcessId, TimeSlot},
    std::collections::{BTreeMap, btree_map},
    tracing::debug,
};

#[cfg(test)]
mod tests;

/// a (cpu, process) pairing. each distinct pair is one row of the chart.
///
/// pairs are ordered by cpu, and then by process.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Pair {
    pub cpu: CpuId,
    pub process: ProcessId,
}

/// the time slots during which a [`Pair`] was observed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Interval {
    /// the first slot.
    pub start: TimeSlot,
    /// one past the last slot.
    pub end: TimeSlot,
}

/// the [`Interval`] of every [`Pair`] in a trace.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Intervals {
    inner: BTreeMap<Pair, Interval>,
}

// === impl Pair ===

impl Pair {
    pub fn new(cpu: CpuId, process: ProcessId) -> Self {
        Self { cpu, process }
    }
}

impl From<&Event> for Pair {
    fn from(&Event { cpu, process, .. }: &Event) -> Self {
        Self { cpu, process }
    }
}

// === impl Interval ===

impl Interval {
    /// an interval covering only the given slot.
    pub fn at(time: TimeSlot) -> Self {
        Self {
            start: time,
            end: time.next(),
        }
    }

    /// the number of slots this interval spans.
    pub fn width(&self) -> i64 {
        self.end - self.start
    }
}

// === impl Intervals ===

impl Intervals {
    /// folds one more event into the intervals.
    ///
    /// NB: a pair that was seen before has its end overwritten, not extended. events are
    /// expected in non-decreasing time order, and a pair that reappears after a gap covers
    /// the gap too.
    pub fn push(&mut self, event: &Event) {
        let Self { inner } = self;

        inner
            .entry(Pair::from(event))
            .and_modify(|interval| interval.end = event.time.next())
            .or_insert_with(|| Interval::at(event.time));
    }

    pub fn get(&self, pair: &Pair) -> Option<&Interval> {
        self.inner.get(pair)
    }

    /// returns the intervals in ascending order of their pairs.
    pub fn iter(&self) -> btree_map::Iter<'_, Pair, Interval> {
        self.inner.iter()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// returns the earliest and latest slot boundaries of all intervals.
    ///
    /// returns `None` if there are no intervals.
    pub fn span(&self) -> Option<(TimeSlot, TimeSlot)> {
        self.inner
            .values()
            .flat_map(|&Interval { start, end }| [start, end])
            .fold(None, |span, t| match span {
                None => Some((t, t)),
                Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
            })
    }
}

impl<'a> FromIterator<&'a Event> for Intervals {
    fn from_iter<I: IntoIterator<Item = &'a Event>>(events: I) -> Self {
        let (intervals, count) =
            events
                .into_iter()
                .fold((Self::default(), 0_usize), |(mut intervals, n), event| {
                    intervals.push(event);
                    (intervals, n + 1)
                });

        debug!(events = count, intervals = intervals.len(), "built intervals");
        intervals
    }
}

impl<'a> IntoIterator for &'a Intervals {
    type Item = (&'a Pair, &'a Interval);
    type IntoIter = btree_map::Iter<'a, Pair, Interval>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
