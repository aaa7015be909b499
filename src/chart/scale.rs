use crate::{interval::Interval, trace::TimeSlot};

/// maps time slots onto terminal columns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scale {
    /// the slot at the left edge.
    start: TimeSlot,
    /// the slot at the right edge.
    end: TimeSlot,
    /// the column of the left edge.
    x: u16,
    /// the number of columns between the edges.
    width: u16,
}

// === impl Scale ===

impl Scale {
    /// returns a scale spanning `start..end` over `width` columns beginning at `x`.
    ///
    /// an empty span is widened to one slot, and the width is at least one column.
    pub fn new((start, end): (TimeSlot, TimeSlot), x: u16, width: u16) -> Self {
        let end = if end > start { end } else { start.next() };
        Self {
            start,
            end,
            x,
            width: width.max(1),
        }
    }

    /// returns the column where the given slot begins.
    ///
    /// slots outside the scale are clamped to its edges.
    pub fn column(&self, time: TimeSlot) -> u16 {
        let Self {
            start,
            end,
            x,
            width,
        } = *self;

        let span = (end - start).max(1);
        let offset = i128::from(time - start) * i128::from(width) / i128::from(span);
        let offset = offset.clamp(0, i128::from(width));

        // the clamp above keeps this within `u16`.
        x + offset as u16
    }

    /// returns the first column and the number of columns covered by an interval.
    ///
    /// a non-empty interval always covers at least one column.
    pub fn bar(&self, &Interval { start, end }: &Interval) -> (u16, u16) {
        let (lo, hi) = if start <= end { (start, end) } else { (end, start) };
        let (a, b) = (self.column(lo), self.column(hi));

        if lo == hi {
            (a, 0)
        } else if b > a {
            (a, b - a)
        } else {
            (a.min(self.x + self.width - 1), 1)
        }
    }

    /// returns the slots to label along the axis.
    ///
    /// ticks fall on round multiples, spaced so that their labels do not collide.
    pub fn ticks(&self) -> Vec<TimeSlot> {
        let Self {
            start,
            end,
            x: _,
            width,
        } = *self;

        let label = start.to_string().len().max(end.to_string().len()) as i64;
        let gaps = (i64::from(width) / (label + 2) - 1).max(1);
        let step = Self::round_step((end - start).saturating_add(gaps - 1) / gaps);

        // no round multiple of the step may fit before `i64::MAX`; then there are no ticks.
        let first = start.get().div_euclid(step) * step;
        let first = if first < start.get() {
            first.checked_add(step)
        } else {
            Some(first)
        };

        std::iter::successors(first, |t| t.checked_add(step))
            .take_while(|t| *t <= end.get())
            .map(TimeSlot::new)
            .collect()
    }

    /// rounds a step up to 1, 2 or 5 times a power of ten.
    fn round_step(step: i64) -> i64 {
        let mut magnitude: i64 = 1;
        loop {
            for m in [1, 2, 5] {
                let candidate = magnitude.saturating_mul(m);
                if candidate >= step {
                    return candidate;
                }
            }
            magnitude = magnitude.saturating_mul(10);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(t: i64) -> TimeSlot {
        TimeSlot::new(t)
    }

    fn interval(start: i64, end: i64) -> Interval {
        Interval {
            start: slot(start),
            end: slot(end),
        }
    }

    #[test]
    fn columns() {
        let scale = Scale::new((slot(0), slot(10)), 5, 50);
        assert_eq!(scale.column(slot(0)), 5);
        assert_eq!(scale.column(slot(1)), 10);
        assert_eq!(scale.column(slot(10)), 55);
    }

    #[test]
    fn clamped() {
        let scale = Scale::new((slot(0), slot(10)), 5, 50);
        assert_eq!(scale.column(slot(-4)), 5);
        assert_eq!(scale.column(slot(40)), 55);
    }

    #[test]
    fn negative_start() {
        let scale = Scale::new((slot(-1), slot(3)), 0, 40);
        assert_eq!(scale.column(slot(-1)), 0);
        assert_eq!(scale.column(slot(0)), 10);
    }

    #[test]
    fn empty_span() {
        let scale = Scale::new((slot(4), slot(4)), 0, 10);
        assert_eq!(scale.column(slot(5)), 10);
    }

    #[test]
    fn bars() {
        let scale = Scale::new((slot(0), slot(10)), 0, 20);
        assert_eq!(scale.bar(&interval(0, 2)), (0, 4));
        assert_eq!(scale.bar(&interval(9, 10)), (18, 2));
    }

    /// a bar narrower than a column is still drawn.
    #[test]
    fn narrow_bar() {
        let scale = Scale::new((slot(0), slot(1000)), 0, 10);
        assert_eq!(scale.bar(&interval(500, 501)), (5, 1));
        assert_eq!(scale.bar(&interval(999, 1000)), (9, 1));
    }

    #[test]
    fn reversed_bar() {
        let scale = Scale::new((slot(0), slot(10)), 0, 20);
        assert_eq!(scale.bar(&interval(6, 2)), (4, 8));
    }

    #[test]
    fn ticks_every_slot() {
        let scale = Scale::new((slot(0), slot(4)), 0, 80);
        let ticks = scale.ticks();
        assert_eq!(ticks, (0..=4).map(slot).collect::<Vec<_>>());
    }

    #[test]
    fn ticks_are_round() {
        let scale = Scale::new((slot(0), slot(1000)), 0, 60);
        let ticks = scale.ticks();
        assert!(ticks.len() > 1);
        assert!(ticks.len() <= 10);
        assert!(ticks.iter().all(|t| t.get() % 100 == 0));
        assert_eq!(ticks.first(), Some(&slot(0)));
    }

    #[test]
    fn ticks_skip_unround_start() {
        let scale = Scale::new((slot(-1), slot(3)), 0, 80);
        assert_eq!(scale.ticks().first(), Some(&slot(-1)));

        let scale = Scale::new((slot(3), slot(40)), 0, 20);
        let ticks = scale.ticks();
        assert!(ticks.iter().all(|t| *t >= slot(3) && *t <= slot(40)));
    }

    /// ticks near the top of the slot range do not overflow.
    #[test]
    fn ticks_near_max() {
        let scale = Scale::new((slot(i64::MAX - 6), slot(i64::MAX)), 0, 16);
        let ticks = scale.ticks();
        assert!(ticks.iter().all(|t| *t >= slot(i64::MAX - 6)));

        let scale = Scale::new((slot(i64::MAX - 6), slot(i64::MAX - 1)), 0, 10);
        assert!(scale.ticks().len() <= 2);
    }

    #[test]
    fn round_step() {
        assert_eq!(Scale::round_step(1), 1);
        assert_eq!(Scale::round_step(3), 5);
        assert_eq!(Scale::round_step(7), 10);
        assert_eq!(Scale::round_step(11), 20);
        assert_eq!(Scale::round_step(0), 1);
    }
}
