//! End-to-end tests for the slider widget, driven through the fake
//! element tree: clicks and transition completions are fired exactly the
//! way a host event loop would deliver them.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use carousel::fake::{FakeElement, FakeTree};
use carousel::{ClickEvent, Element, Slider, SliderOptions, Transform};

const ACTIVE: &str = "indicator--active";

struct Fixture {
    slider: Slider<FakeTree>,
    track: FakeElement,
    next: FakeElement,
    prev: FakeElement,
    indicators: Vec<FakeElement>,
}

/// Build a slider over `real` slides (plus the two clone slides the
/// markup convention requires), with both buttons and indicators wired.
fn fixture(real: usize) -> Fixture {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut tree = FakeTree::new();

    let track = FakeElement::generic();
    tree.insert(".slider", track.clone());

    for _ in 0..real + 2 {
        tree.insert(".slide", FakeElement::generic());
    }

    let next = FakeElement::button().with_attribute("data-direction", "next");
    let prev = FakeElement::button().with_attribute("data-direction", "previous");
    tree.insert(".slider-btn", next.clone());
    tree.insert(".slider-btn", prev.clone());

    let mut indicators = Vec::new();
    for _ in 0..real {
        let dot = FakeElement::button();
        indicators.push(dot.clone());
        tree.insert(".indicator", dot);
    }

    let options = SliderOptions::new(".slider", ".slide")
        .with_buttons(".slider-btn")
        .with_indicators(".indicator")
        .with_indicator_active_class(ACTIVE);

    let slider = Slider::new(tree, options);
    slider.init().expect("fixture init");

    Fixture {
        slider,
        track,
        next,
        prev,
        indicators,
    }
}

fn recorded(slider: &Slider<FakeTree>) -> Arc<Mutex<Vec<i32>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    slider.subscribe(move |index| {
        seen_clone.lock().push(index);
    });
    seen
}

#[test]
fn next_clicks_step_forward_once_each_transition_completes() {
    let f = fixture(5);

    f.next.click();
    assert_eq!(f.slider.current_index(), 2);
    assert_eq!(f.track.transform(), Some(Transform::translate_x(-200.0)));

    f.track.finish_transition();
    f.next.click();
    assert_eq!(f.slider.current_index(), 3);
    assert_eq!(f.track.transform(), Some(Transform::translate_x(-300.0)));
}

#[test]
fn previous_clicks_step_backward() {
    let f = fixture(5);
    f.slider.move_slider_to(3);
    f.track.finish_transition();

    f.prev.click();
    assert_eq!(f.slider.current_index(), 2);
}

#[test]
fn clicks_during_a_move_are_dropped_not_queued() {
    let f = fixture(5);

    f.next.click();
    assert_eq!(f.slider.current_index(), 2);

    // Still moving: further clicks change nothing
    f.next.click();
    f.prev.click();
    assert_eq!(f.slider.current_index(), 2);
    assert!(f.slider.is_moving());
}

#[test]
fn forward_wrap_snaps_from_appended_clone_to_first_real_slide() {
    let f = fixture(5);
    // Walk to the appended clone at padded index 6
    for expected in 2..=6 {
        f.next.click();
        assert_eq!(f.slider.current_index(), expected);
        f.track.finish_transition();
    }

    // The completion at index 6 already re-jumped to index 1 with a
    // near-zero duration
    assert_eq!(f.slider.current_index(), 1);
    assert_eq!(f.track.transition_duration(), Some(Duration::from_millis(1)));
    assert_eq!(f.track.transform(), Some(Transform::translate_x(-100.0)));

    // The snap's own completion restores the normal duration
    f.track.finish_transition();
    assert_eq!(
        f.track.transition_duration(),
        Some(Duration::from_millis(350))
    );
    assert_eq!(f.slider.current_index(), 1);
    assert!(!f.slider.is_moving());
}

#[test]
fn backward_wrap_snaps_from_prepended_clone_to_last_real_slide() {
    let f = fixture(5);

    f.prev.click();
    assert_eq!(f.slider.current_index(), 0);

    f.track.finish_transition();
    assert_eq!(f.slider.current_index(), 5);
    assert_eq!(f.track.transition_duration(), Some(Duration::from_millis(1)));
    assert_eq!(f.track.transform(), Some(Transform::translate_x(-500.0)));

    f.track.finish_transition();
    assert_eq!(
        f.track.transition_duration(),
        Some(Duration::from_millis(350))
    );
    assert_eq!(f.slider.current_index(), 5);
}

#[test]
fn configured_transition_duration_is_restored_after_settling() {
    let mut tree = FakeTree::new();
    let track = FakeElement::generic();
    tree.insert(".slider", track.clone());
    for _ in 0..5 {
        tree.insert(".slide", FakeElement::generic());
    }
    let next = FakeElement::button().with_attribute("data-direction", "next");
    tree.insert(".slider-btn", next.clone());

    let slider = Slider::new(
        tree,
        SliderOptions::new(".slider", ".slide")
            .with_buttons(".slider-btn")
            .with_transition_duration(Duration::from_millis(500)),
    );
    slider.init().unwrap();

    next.click();
    track.finish_transition();
    assert_eq!(track.transition_duration(), Some(Duration::from_millis(500)));
}

#[test]
fn indicator_click_maps_position_to_padded_index() {
    let f = fixture(5);
    let seen = recorded(&f.slider);

    f.indicators[2].click();
    assert_eq!(f.slider.current_index(), 3);
    assert_eq!(*seen.lock(), vec![3]);
    assert!(f.indicators[2].has_class(ACTIVE));
    assert!(!f.indicators[0].has_class(ACTIVE));
}

#[test]
fn subscribers_fire_once_per_accepted_click_in_subscription_order() {
    let f = fixture(5);
    let order = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second"] {
        let order_clone = order.clone();
        f.slider.subscribe(move |index| {
            order_clone.lock().push((tag, index));
        });
    }

    f.next.click();
    // Dropped click while moving: no notification
    f.next.click();

    assert_eq!(*order.lock(), vec![("first", 2), ("second", 2)]);
}

#[test]
fn wrap_click_notifies_with_the_raw_padded_index() {
    let f = fixture(5);
    let seen = recorded(&f.slider);

    f.prev.click();
    // Subscribers see the clone index, not the real-slide ordinal
    assert_eq!(*seen.lock(), vec![0]);

    f.track.finish_transition();
    f.track.finish_transition();
    // The wrap correction itself never notifies
    assert_eq!(*seen.lock(), vec![0]);
}

#[test]
fn move_slider_to_does_not_notify() {
    let f = fixture(5);
    let seen = recorded(&f.slider);

    f.slider.move_slider_to(4);
    f.track.finish_transition();

    assert!(seen.lock().is_empty());
    assert_eq!(f.slider.current_index(), 4);
}

#[test]
fn button_without_direction_attribute_steps_backward() {
    let mut tree = FakeTree::new();
    let track = FakeElement::generic();
    tree.insert(".slider", track.clone());
    for _ in 0..5 {
        tree.insert(".slide", FakeElement::generic());
    }
    let bare = FakeElement::button();
    tree.insert(".slider-btn", bare.clone());

    let slider = Slider::new(
        tree,
        SliderOptions::new(".slider", ".slide").with_buttons(".slider-btn"),
    );
    slider.init().unwrap();
    slider.move_slider_to(3);
    track.finish_transition();

    bare.click();
    assert_eq!(slider.current_index(), 2);
}

#[test]
fn malformed_click_events_are_swallowed() {
    let f = fixture(5);
    let seen = recorded(&f.slider);

    // No target information at all
    f.next.click_with(ClickEvent::empty());

    // Trigger element is not a button
    f.next.click_with(ClickEvent::on(FakeElement::generic()));

    // Indicator click bubbled from a child button that is not in the
    // indicator collection
    f.indicators[0].click_with(ClickEvent::on(FakeElement::button()));

    assert_eq!(f.slider.current_index(), 1);
    assert!(!f.slider.is_moving());
    assert!(seen.lock().is_empty());
}

#[test]
fn padded_slide_count_and_start_index() {
    for real in [1, 3, 5, 8] {
        let f = fixture(real);
        assert_eq!(f.slider.slide_count(), real + 2);
        assert_eq!(f.slider.current_index(), 1);
    }
}
