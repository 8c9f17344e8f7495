use rpunchclock::core::timers::{Job, Timers};

#[test]
fn test_periodic_job_is_delivered_each_period() {
    let mut timers = Timers::new();
    let handle = timers.every(0, 1_000, Job::WallClock);

    assert_eq!(timers.pop_due(999), None);
    assert_eq!(timers.pop_due(1_000), Some((handle, Job::WallClock)));
    assert_eq!(timers.pop_due(1_000), None);
    assert_eq!(timers.next_due(), Some(2_000));
    assert!(timers.is_active(handle));
}

#[test]
fn test_missed_periods_collapse_into_one_delivery() {
    let mut timers = Timers::new();
    timers.every(0, 1_000, Job::Chronometer);

    assert!(timers.pop_due(5_500).is_some());
    assert_eq!(timers.pop_due(5_500), None);
    assert_eq!(timers.next_due(), Some(6_000));
}

#[test]
fn test_one_shot_job_is_delivered_once() {
    let mut timers = Timers::new();
    let handle = timers.once(0, 600_000, Job::AutoRearm);

    assert_eq!(timers.pop_due(599_999), None);
    assert_eq!(timers.pop_due(600_000), Some((handle, Job::AutoRearm)));
    assert_eq!(timers.pop_due(10_000_000), None);
    assert!(!timers.is_active(handle));
    assert!(timers.is_empty());
}

#[test]
fn test_cancelled_job_is_never_delivered() {
    let mut timers = Timers::new();
    let handle = timers.every(0, 30_000, Job::AutoCheck);

    assert!(timers.cancel(handle));
    assert!(!timers.cancel(handle));
    assert_eq!(timers.pop_due(60_000), None);
    assert_eq!(timers.count(Job::AutoCheck), 0);
}

#[test]
fn test_earliest_due_job_comes_first() {
    let mut timers = Timers::new();
    let slow = timers.every(0, 30_000, Job::AutoCheck);
    let fast = timers.every(0, 1_000, Job::WallClock);

    assert_eq!(timers.pop_due(30_000), Some((fast, Job::WallClock)));
    assert_eq!(timers.pop_due(30_000), Some((slow, Job::AutoCheck)));
    assert_eq!(timers.pop_due(30_000), None);
    assert_eq!(timers.len(), 2);
}
