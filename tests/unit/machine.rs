use super::*;

#[test]
fn request_moves_current_and_records_previous() {
    let mut s = CarouselState::new();
    assert!(s.request(SlideIndex(3), 6));
    assert_eq!(s.current(), SlideIndex(3));
    assert_eq!(s.previous(), Some(SlideIndex(0)));
    assert_eq!(s.phase(), Phase::Transitioning);
}

#[test]
fn request_while_transitioning_is_dropped_for_any_target() {
    let mut s = CarouselState::new();
    assert!(s.request(SlideIndex(1), 6));

    let snapshot = s;
    assert!(!s.request(SlideIndex(2), 6));
    assert!(!s.request(SlideIndex(0), 6));
    assert!(!s.request(SlideIndex(5), 6));
    assert_eq!(s, snapshot);
}

#[test]
fn request_to_current_is_dropped_in_any_phase() {
    let mut s = CarouselState::new();
    assert!(!s.request(SlideIndex(0), 6));
    assert_eq!(s.phase(), Phase::Idle);

    assert!(s.request(SlideIndex(2), 6));
    assert!(s.complete());
    assert!(!s.request(SlideIndex(2), 6));
    assert_eq!(s.phase(), Phase::Idle);
}

#[test]
fn request_out_of_range_or_empty_is_dropped_never_wrapped() {
    let mut s = CarouselState::new();
    assert!(!s.request(SlideIndex(6), 6));
    assert!(!s.request(SlideIndex(usize::MAX), 6));
    assert!(!s.request(SlideIndex(1), 0));
    assert_eq!(s.current(), SlideIndex(0));
    assert_eq!(s.phase(), Phase::Idle);
}

#[test]
fn complete_clears_previous_and_repeat_is_a_noop() {
    let mut s = CarouselState::new();
    assert!(s.request(SlideIndex(4), 6));
    assert!(s.complete());
    assert_eq!(s.previous(), None);
    assert_eq!(s.phase(), Phase::Idle);
    assert_eq!(s.current(), SlideIndex(4));

    assert!(!s.complete());
    assert_eq!(s.current(), SlideIndex(4));
}

#[test]
fn previous_never_equals_current_while_defined() {
    let mut s = CarouselState::new();
    for target in 1..6 {
        assert!(s.request(SlideIndex(target), 6));
        assert!(s.is_transitioning());
        assert_ne!(s.previous(), Some(s.current()));
        s.complete();
    }
}
