use super::*;

#[test]
fn poll_before_deadline_is_not_due() {
    let mut t = DwellTimer::new(DurationMs(4_000));
    t.start(TimeMs(0));
    assert!(!t.poll(TimeMs(0)));
    assert!(!t.poll(TimeMs(3_999)));
}

#[test]
fn poll_fires_once_per_interval() {
    let mut t = DwellTimer::new(DurationMs(4_000));
    t.start(TimeMs(0));
    assert!(t.poll(TimeMs(4_000)));
    assert!(!t.poll(TimeMs(4_000)));
    assert!(!t.poll(TimeMs(7_999)));
    assert!(t.poll(TimeMs(8_000)));
}

#[test]
fn restart_reschedules_from_now_with_a_single_deadline() {
    let mut t = DwellTimer::new(DurationMs(4_000));
    t.start(TimeMs(0));
    t.restart(TimeMs(1_000));

    // The original schedule is gone; only the fresh one fires.
    assert!(!t.poll(TimeMs(4_000)));
    assert!(t.poll(TimeMs(5_000)));
    assert!(!t.poll(TimeMs(5_000)));
}

#[test]
fn start_keeps_the_schedule_of_an_armed_timer() {
    let mut t = DwellTimer::new(DurationMs(4_000));
    t.start(TimeMs(0));
    t.start(TimeMs(3_000));
    assert!(t.poll(TimeMs(4_000)));
}

#[test]
fn stop_cancels_the_pending_fire() {
    let mut t = DwellTimer::new(DurationMs(4_000));
    t.start(TimeMs(0));
    assert!(t.is_armed());
    t.stop();
    assert!(!t.is_armed());
    assert!(!t.poll(TimeMs(100_000)));
}

#[test]
fn late_polls_catch_up_one_tick_at_a_time() {
    let mut t = DwellTimer::new(DurationMs(1_000));
    t.start(TimeMs(0));

    // Host slept through three deadlines (1000, 2000, 3000).
    assert!(t.poll(TimeMs(3_500)));
    assert!(t.poll(TimeMs(3_500)));
    assert!(t.poll(TimeMs(3_500)));
    assert!(!t.poll(TimeMs(3_500)));
    assert!(t.poll(TimeMs(4_000)));
}
