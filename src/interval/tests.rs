use super::*;

fn event(time: i64, cpu: u8, process: u32) -> Event {
    Event {
        time: TimeSlot::new(time),
        cpu: CpuId::new(cpu),
        process: ProcessId::new(process),
    }
}

fn pair(cpu: u8, process: u32) -> Pair {
    Pair::new(CpuId::new(cpu), ProcessId::new(process))
}

fn interval(start: i64, end: i64) -> Interval {
    Interval {
        start: TimeSlot::new(start),
        end: TimeSlot::new(end),
    }
}

#[test]
fn example() {
    let events = [event(0, 0, 1), event(1, 0, 1), event(2, 1, 2)];
    let intervals = events.iter().collect::<Intervals>();

    assert_eq!(intervals.len(), 2);
    assert_eq!(intervals.get(&pair(0, 1)), Some(&interval(0, 2)));
    assert_eq!(intervals.get(&pair(1, 2)), Some(&interval(2, 3)));
}

#[test]
fn single_event() {
    let intervals = [event(4, 3, 9)].iter().collect::<Intervals>();
    assert_eq!(intervals.get(&pair(3, 9)), Some(&interval(4, 5)));
    assert_eq!(intervals.get(&pair(3, 9)).map(Interval::width), Some(1));
}

/// a pair that reappears later covers the gap in between.
#[test]
fn gap_is_absorbed() {
    let intervals = [event(0, 0, 1), event(5, 0, 1)]
        .iter()
        .collect::<Intervals>();
    assert_eq!(intervals.len(), 1);
    assert_eq!(intervals.get(&pair(0, 1)), Some(&interval(0, 6)));
}

#[test]
fn before_first_time_slot() {
    let intervals = [event(-1, 0, 5)].iter().collect::<Intervals>();
    assert_eq!(intervals.get(&pair(0, 5)), Some(&interval(-1, 0)));
}

/// each process on a cpu gets its own interval, even when they overlap.
#[test]
fn no_merging_across_processes() {
    let events = [event(0, 0, 1), event(0, 0, 2), event(1, 0, 1)];
    let intervals = events.iter().collect::<Intervals>();
    assert_eq!(intervals.len(), 2);
    assert_eq!(intervals.get(&pair(0, 1)), Some(&interval(0, 2)));
    assert_eq!(intervals.get(&pair(0, 2)), Some(&interval(0, 1)));
}

/// the same process on different cpus is a different pair.
#[test]
fn migration() {
    let events = [event(0, 0, 1), event(1, 1, 1), event(2, 0, 1)];
    let intervals = events.iter().collect::<Intervals>();
    assert_eq!(intervals.get(&pair(0, 1)), Some(&interval(0, 3)));
    assert_eq!(intervals.get(&pair(1, 1)), Some(&interval(1, 2)));
}

/// the end is overwritten by the most recent event, not extended.
#[test]
fn end_is_last_write() {
    let events = [event(3, 0, 1), event(7, 0, 1), event(5, 0, 1)];
    let intervals = events.iter().collect::<Intervals>();
    assert_eq!(intervals.get(&pair(0, 1)), Some(&interval(3, 6)));
}

#[test]
fn ordered_by_cpu_then_process() {
    let events = [
        event(0, 1, 1),
        event(0, 0, 3),
        event(1, 0, 2),
        event(2, 1, 0),
    ];
    let intervals = events.iter().collect::<Intervals>();
    let pairs = intervals.iter().map(|(p, _)| *p).collect::<Vec<_>>();
    assert_eq!(pairs, vec![pair(0, 2), pair(0, 3), pair(1, 0), pair(1, 1)]);
}

/// every interval built from a well-ordered trace spans at least one slot.
#[test]
fn widths_are_positive() {
    let events = (0..40)
        .map(|t| event(t / 2, (t % 3) as u8, (t % 7) as u32))
        .collect::<Vec<_>>();
    let intervals = events.iter().collect::<Intervals>();
    assert!(intervals.iter().all(|(_, i)| i.width() >= 1));
}

#[test]
fn span() {
    let events = [event(2, 0, 1), event(3, 0, 1), event(9, 1, 2)];
    let intervals = events.iter().collect::<Intervals>();
    assert_eq!(
        intervals.span(),
        Some((TimeSlot::new(2), TimeSlot::new(10)))
    );
}

#[test]
fn empty() {
    let intervals = std::iter::empty::<&Event>().collect::<Intervals>();
    assert!(intervals.is_empty());
    assert_eq!(intervals.span(), None);
}
