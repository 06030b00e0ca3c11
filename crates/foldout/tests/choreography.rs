use foldout::anim::{Property, ScheduledTween, Target};
use foldout::{
    Choreographer, Cue, Gravity, HeadlessFactory, MenuEntry, MenuState, SELECTION_DURATION,
    Selection, StaticEnvironment, Tap, TapKind, ViewId,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const ACTION_BAR: f32 = 56.0;

type Log = Rc<RefCell<Vec<(TapKind, Selection)>>>;

fn entries(n: usize) -> Vec<MenuEntry> {
    (0..n)
        .map(|i| MenuEntry::new(format!("icn_{i}"), format!("Item {i}"), format!("tag-{i}")))
        .collect()
}

fn menu(n: usize, gravity: Gravity, rtl: bool) -> (Choreographer<StaticEnvironment>, Log) {
    let mut factory = HeadlessFactory::new();
    let mut menu = Choreographer::new(
        entries(n),
        &mut factory,
        StaticEnvironment::new(rtl, 32.0),
        ACTION_BAR,
        gravity,
    );

    let log: Log = Rc::default();
    let clicks = log.clone();
    menu.set_click_listener(move |s| record(&clicks, TapKind::Click, s));
    let long_clicks = log.clone();
    menu.set_long_click_listener(move |s| record(&long_clicks, TapKind::LongClick, s));
    (menu, log)
}

fn record(log: &Log, kind: TapKind, selection: &Selection) {
    log.borrow_mut().push((kind, selection.clone()));
}

fn run_to_idle(menu: &mut Choreographer<StaticEnvironment>) {
    let mut frames = 0;
    while menu.advance(FRAME) {
        frames += 1;
        assert!(frames < 10_000, "program never finished");
    }
}

fn opened(n: usize, gravity: Gravity, rtl: bool) -> (Choreographer<StaticEnvironment>, Log) {
    let (mut menu, log) = menu(n, gravity, rtl);
    assert!(menu.toggle());
    run_to_idle(&mut menu);
    assert_eq!(menu.state(), MenuState::Open);
    (menu, log)
}

fn icon(menu: &Choreographer<StaticEnvironment>, index: usize) -> ViewId {
    menu.icons().view_at(index).unwrap()
}

fn tween(
    menu: &Choreographer<StaticEnvironment>,
    target: Target,
    property: Property,
) -> ScheduledTween {
    let schedule = menu.active_schedule().unwrap();
    let mut found = schedule.tweens_for(target);
    *found.find(|s| s.tween.property == property).unwrap()
}

#[test]
fn test_item_count_matches_both_columns() {
    for n in 1..=5 {
        let (menu, _) = menu(n, Gravity::End, false);
        assert_eq!(menu.item_count(), n);
        assert_eq!(menu.icons().len(), n);
        assert_eq!(menu.labels().len(), n);
        assert_eq!(menu.state(), MenuState::Closed);
    }
}

#[test]
fn test_toggle_is_gated_while_opening() {
    let (mut menu, _) = menu(3, Gravity::End, false);

    assert!(menu.toggle());
    assert_eq!(menu.state(), MenuState::Opening);
    assert!(menu.is_open() && menu.is_animating());

    let halfway = Duration::from_millis(50);
    menu.advance(halfway);
    let timeline = menu.active_schedule().unwrap().tweens().to_vec();

    assert!(!menu.toggle());
    assert_eq!(menu.state(), MenuState::Opening);
    assert_eq!(menu.elapsed(), Some(halfway));
    let unchanged = menu.active_schedule().unwrap().tweens();
    assert_eq!(unchanged, timeline.as_slice());

    run_to_idle(&mut menu);
    assert_eq!(menu.state(), MenuState::Open);
    assert!(!menu.is_animating());
}

#[test]
fn test_open_then_close_round_trip() {
    let (mut menu, log) = opened(3, Gravity::End, false);
    for index in 0..3 {
        let icon = menu.icons().transform(index).unwrap();
        assert_eq!((icon.rotation_x, icon.rotation_y), (0.0, 0.0));
        let label = menu.labels().transform(index).unwrap();
        assert_eq!((label.alpha, label.translation_x), (1.0, 0.0));
    }

    assert!(menu.toggle());
    assert_eq!(menu.state(), MenuState::Closing);
    run_to_idle(&mut menu);

    assert_eq!(menu.state(), MenuState::Closed);
    assert_eq!(menu.icons().transform(0).unwrap().rotation_y, -90.0);
    assert_eq!(menu.icons().transform(2).unwrap().rotation_x, -90.0);
    assert_eq!(menu.labels().transform(1).unwrap().alpha, 0.0);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_closed_reset_hides_slots_before_their_step() {
    let (mut menu, _) = menu(3, Gravity::End, false);
    menu.toggle();

    // only the first step has started
    menu.advance(Duration::from_millis(10));
    assert_eq!(menu.icons().transform(2).unwrap().rotation_x, -90.0);
    assert_eq!(menu.labels().transform(2).unwrap().alpha, 0.0);
    assert_eq!(menu.icons().transform(0).unwrap().pivot_x, ACTION_BAR);
}

#[test]
fn test_tap_ignored_when_closed_or_animating() {
    let (mut menu, log) = menu(3, Gravity::End, false);
    let view = icon(&menu, 1);

    assert!(!menu.click(view));
    assert_eq!(menu.state(), MenuState::Closed);

    menu.toggle();
    assert!(!menu.click(view));
    assert!(!menu.long_click(view));
    assert_eq!(menu.state(), MenuState::Opening);

    run_to_idle(&mut menu);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_detached_view_tap_is_noop() {
    let (mut menu, log) = opened(3, Gravity::End, false);

    assert!(!menu.click(ViewId::new(u64::MAX)));
    assert_eq!(menu.state(), MenuState::Open);
    assert!(menu.active_schedule().is_none());
    assert!(log.borrow().is_empty());
}

#[test]
fn test_four_items_end_ltr_tap_two() {
    let (mut menu, log) = opened(4, Gravity::End, false);

    assert!(menu.click(icon(&menu, 2)));
    assert_eq!(menu.state(), MenuState::Closing);

    let chosen = tween(&menu, Target::icon(2), Property::RotationY);
    assert_eq!((chosen.tween.from, chosen.tween.to), (0.0, -90.0));
    let pivot = menu.icons().transform(2).unwrap();
    assert_eq!(pivot.pivot_x, ACTION_BAR);
    assert_eq!(pivot.pivot_y, ACTION_BAR / 2.0);

    let group_end = [0, 1, 3]
        .into_iter()
        .map(|i| tween(&menu, Target::icon(i), Property::RotationX).end())
        .max()
        .unwrap();
    assert!(chosen.start >= group_end);
    let tap = Tap {
        index: 2,
        view: icon(&menu, 2),
        kind: TapKind::Click,
    };
    let cues = menu.active_schedule().unwrap().cues();
    assert_eq!(cues, &[(chosen.end(), Cue::Chosen(tap))]);

    // nothing fires before the chosen slot has collapsed
    menu.advance(chosen.start);
    assert!(log.borrow().is_empty());

    run_to_idle(&mut menu);
    assert_eq!(menu.state(), MenuState::Closed);
    for i in [0, 1, 3] {
        assert_eq!(menu.icons().transform(i).unwrap().rotation_x, -90.0);
    }
    assert_eq!(menu.icons().transform(2).unwrap().rotation_y, -90.0);

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    let (kind, selection) = &log[0];
    assert_eq!(*kind, TapKind::Click);
    assert_eq!(selection.index, 2);
    assert_eq!(selection.tag.as_str(), "tag-2");
}

#[test]
fn test_label_tap_resolves_its_slot() {
    let (mut menu, log) = opened(3, Gravity::Start, false);
    let label = menu.labels().view_at(0).unwrap();

    assert!(menu.click(label));
    run_to_idle(&mut menu);

    assert_eq!(log.borrow().len(), 1);
    assert_eq!(log.borrow()[0].1.index, 0);
    assert_eq!(log.borrow()[0].1.view, label);
}

#[test]
fn test_long_click_fires_only_long_listener() {
    let (mut menu, log) = opened(3, Gravity::End, false);

    assert!(menu.long_click(icon(&menu, 1)));
    run_to_idle(&mut menu);

    let log = log.borrow();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].0, TapKind::LongClick);
}

#[test]
fn test_one_dispatch_per_tap_across_reuse() {
    let (mut menu, log) = opened(3, Gravity::End, false);

    menu.click(icon(&menu, 1));
    run_to_idle(&mut menu);
    menu.toggle();
    run_to_idle(&mut menu);
    menu.long_click(icon(&menu, 0));
    run_to_idle(&mut menu);

    let kinds: Vec<_> = log.borrow().iter().map(|(k, s)| (*k, s.index)).collect();
    assert_eq!(kinds, vec![(TapKind::Click, 1), (TapKind::LongClick, 0)]);
}

#[test]
fn test_listener_replaced_in_flight_receives_dispatch() {
    let (mut menu, log) = opened(2, Gravity::End, false);
    menu.click(icon(&menu, 1));
    menu.advance(FRAME);

    let late: Rc<RefCell<Vec<usize>>> = Rc::default();
    let sink = late.clone();
    menu.set_click_listener(move |s| sink.borrow_mut().push(s.index));
    run_to_idle(&mut menu);

    assert!(log.borrow().is_empty());
    assert_eq!(*late.borrow(), vec![1]);
}

#[test]
fn test_custom_duration_patches_open_program_only() {
    let duration = Duration::from_millis(250);
    let (mut menu, _) = menu(3, Gravity::End, false);
    menu.set_animation_duration(duration);
    assert_eq!(menu.animation_duration(), duration);

    menu.toggle();
    let schedule = menu.active_schedule().unwrap();
    assert_eq!(schedule.duration(), Some(duration));
    assert!(
        schedule
            .tweens()
            .iter()
            .all(|s| s.tween.duration == duration)
    );
    assert_eq!(schedule.end(), duration * 3);
    run_to_idle(&mut menu);

    menu.click(icon(&menu, 1));
    let schedule = menu.active_schedule().unwrap();
    assert_eq!(schedule.duration(), Some(SELECTION_DURATION));
    assert!(
        schedule
            .tweens()
            .iter()
            .all(|s| s.tween.duration == SELECTION_DURATION)
    );
}

#[test]
fn test_duration_change_after_first_play_patches_cache() {
    let (mut menu, _) = opened(2, Gravity::End, false);
    menu.toggle();
    run_to_idle(&mut menu);

    menu.set_animation_duration(Duration::from_millis(40));
    menu.toggle();
    assert_eq!(
        menu.active_schedule().unwrap().end(),
        Duration::from_millis(80)
    );
}

#[test]
fn test_cached_programs_keep_build_time_direction() {
    let (mut menu, _) = opened(3, Gravity::End, false);
    menu.environment_mut().rtl = true;

    // selection programs are built fresh and see the new direction
    menu.click(icon(&menu, 0));
    let chosen = tween(&menu, Target::icon(0), Property::RotationY);
    assert_eq!(chosen.tween.to, 90.0);
    assert_eq!(menu.icons().transform(0).unwrap().pivot_x, 0.0);
    run_to_idle(&mut menu);

    // the open program was cached while left-to-right
    menu.toggle();
    let trigger = tween(&menu, Target::icon(0), Property::RotationY);
    assert_eq!(trigger.tween.from, -90.0);
}

#[test]
fn test_single_item_selection() {
    let (mut menu, log) = opened(1, Gravity::Start, true);

    menu.click(icon(&menu, 0));
    let chosen = tween(&menu, Target::icon(0), Property::RotationY);
    assert_eq!(chosen.start, Duration::ZERO);
    assert_eq!(chosen.tween.to, -90.0);
    run_to_idle(&mut menu);

    assert_eq!(log.borrow().len(), 1);
    assert_eq!(menu.state(), MenuState::Closed);
}

#[test]
fn test_zero_duration_toggle_settles_on_next_frame() {
    let (mut menu, _) = menu(3, Gravity::End, false);
    menu.set_animation_duration(Duration::ZERO);

    assert!(menu.toggle());
    assert!(!menu.toggle());
    assert_eq!(menu.state(), MenuState::Opening);

    assert!(!menu.advance(Duration::ZERO));
    assert_eq!(menu.state(), MenuState::Open);
    assert_eq!(menu.icons().transform(2).unwrap().rotation_x, 0.0);
}
