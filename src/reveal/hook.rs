use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, Window};
use yew::prelude::*;

use super::timeline::{
    ScrollStart, Timeline, Track, TrackId, Trigger, TriggerRect, Tween, VisualState,
};

const FRAME_MS: u32 = 16;
const STYLED_PROPERTIES: [&str; 3] = ["opacity", "visibility", "transform"];

#[derive(Clone, PartialEq)]
pub enum RevealTrigger {
    Mount,
    /// `start` is `None` when the start line could not be parsed.
    Viewport { node: NodeRef, start: Option<ScrollStart> },
}

/// Elements that reveal together when their trigger fires.
#[derive(Clone, PartialEq)]
pub struct RevealGroup {
    pub targets: Vec<NodeRef>,
    pub trigger: RevealTrigger,
    pub tween: Tween,
}

impl RevealGroup {
    pub fn on_mount(targets: Vec<NodeRef>, tween: Tween) -> Self {
        RevealGroup { targets, trigger: RevealTrigger::Mount, tween }
    }

    /// `start` is a start line such as `"top 80%"`.
    pub fn on_scroll(targets: Vec<NodeRef>, trigger: &NodeRef, start: &str, tween: Tween) -> Self {
        RevealGroup {
            targets,
            trigger: RevealTrigger::Viewport {
                node: trigger.clone(),
                start: ScrollStart::parse(start),
            },
            tween,
        }
    }
}

/// An element whose inline style the animator drives.
trait RevealTarget {
    fn apply(&self, state: &VisualState);
    fn clear(&self);
}

impl RevealTarget for HtmlElement {
    fn apply(&self, state: &VisualState) {
        let style = self.style();
        let _ = style.set_property("opacity", &state.alpha.to_string());
        let _ = style.set_property("visibility", state.visibility());
        let _ = style.set_property("transform", &state.transform());
    }

    fn clear(&self) {
        let style = self.style();
        for property in STYLED_PROPERTIES {
            let _ = style.remove_property(property);
        }
    }
}

/// Builds one track per usable group. A group is left out when any target
/// or its trigger does not resolve, or when its start line is unrecognised.
/// Returns the timeline, the resolved targets indexed by the tracks, and the
/// trigger of each track (`None` for mount tracks).
fn plan<E>(
    groups: &[RevealGroup],
    resolve: impl Fn(&NodeRef) -> Option<E>,
) -> (Timeline, Vec<E>, Vec<Option<E>>) {
    let mut timeline = Timeline::new();
    let mut elements = Vec::new();
    let mut triggers = Vec::new();

    for (index, group) in groups.iter().enumerate() {
        let targets: Option<Vec<E>> = group.targets.iter().map(&resolve).collect();
        let targets = match targets {
            Some(targets) if !targets.is_empty() => targets,
            _ => {
                debug!("reveal group {} has unmounted targets, skipping", index);
                continue;
            }
        };
        let (trigger, trigger_el) = match &group.trigger {
            RevealTrigger::Mount => (Trigger::Mount, None),
            RevealTrigger::Viewport { start: None, .. } => {
                warn!("reveal group {} has an unrecognised start line, skipping", index);
                continue;
            }
            RevealTrigger::Viewport { node, start: Some(start) } => match resolve(node) {
                Some(el) => (Trigger::Viewport(*start), Some(el)),
                None => {
                    debug!("reveal group {} has no trigger element, skipping", index);
                    continue;
                }
            },
        };

        let first = elements.len();
        elements.extend(targets);
        let ids = (first..elements.len()).collect();
        timeline.add(Track::new(ids, trigger, group.tween));
        triggers.push(trigger_el);
    }

    (timeline, elements, triggers)
}

struct Animator<E> {
    timeline: Timeline,
    elements: Vec<E>,
    triggers: Vec<Option<E>>,
    ticker: Option<Interval>,
}

impl<E: RevealTarget> Animator<E> {
    fn bind(groups: &[RevealGroup], resolve: impl Fn(&NodeRef) -> Option<E>) -> Self {
        let (timeline, elements, triggers) = plan(groups, resolve);
        Animator { timeline, elements, triggers, ticker: None }
    }

    /// Hides every target and starts the mount tracks.
    fn start(&mut self, now: f64) -> usize {
        let frames = self.timeline.initial_frames();
        self.paint(&frames);
        self.timeline.start_mounted(now)
    }

    fn paint(&self, frames: &[(usize, VisualState)]) {
        for (target, state) in frames {
            if let Some(el) = self.elements.get(*target) {
                el.apply(state);
            }
        }
    }

    fn teardown(&mut self) {
        self.timeline.cancel();
        // dropping the Interval cancels it
        self.ticker = None;
        for el in &self.elements {
            el.clear();
        }
    }
}

fn now() -> f64 {
    web_sys::js_sys::Date::now()
}

fn viewport_height(window: &Window) -> f64 {
    window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0)
}

fn ensure_ticker(animator: &Rc<RefCell<Animator<HtmlElement>>>) {
    if animator.borrow().ticker.is_some() || animator.borrow().timeline.is_settled() {
        return;
    }
    let weak = Rc::downgrade(animator);
    let ticker = Interval::new(FRAME_MS, move || {
        let Some(animator) = weak.upgrade() else { return };
        let mut animator = animator.borrow_mut();
        let frames = animator.timeline.sample(now());
        animator.paint(&frames);
        if animator.timeline.is_settled() {
            animator.ticker = None;
        }
    });
    animator.borrow_mut().ticker = Some(ticker);
}

fn check_triggers(animator: &Rc<RefCell<Animator<HtmlElement>>>, window: &Window) {
    let started = {
        let mut guard = animator.borrow_mut();
        let Animator { timeline, triggers, .. } = &mut *guard;
        if !timeline.has_pending() {
            return;
        }
        timeline.poll(now(), viewport_height(window), |id| trigger_rect(triggers, id))
    };
    if started > 0 {
        ensure_ticker(animator);
    }
}

fn trigger_rect(triggers: &[Option<HtmlElement>], id: TrackId) -> Option<TriggerRect> {
    let el = triggers.get(id.index())?.as_ref()?;
    if !el.is_connected() {
        return None;
    }
    let rect = el.get_bounding_client_rect();
    Some(TriggerRect { top: rect.top(), bottom: rect.bottom() })
}

/// Hides the targets of every group and reveals each group once, when its
/// trigger fires. Everything is cancelled and the inline styles removed when
/// the owning component unmounts.
#[hook]
pub fn use_reveal(groups: Vec<RevealGroup>) {
    use_effect_with_deps(
        move |groups: &Vec<RevealGroup>| {
            let window = window();
            let animator = Rc::new(RefCell::new(Animator::bind(groups, |node| {
                node.cast::<HtmlElement>()
            })));
            let mut listener: Option<Closure<dyn FnMut()>> = None;

            if let Some(window) = window.clone() {
                animator.borrow_mut().start(now());
                ensure_ticker(&animator);

                // page may already be scrolled past some start lines
                check_triggers(&animator, &window);

                if animator.borrow().timeline.has_pending() {
                    let weak = Rc::downgrade(&animator);
                    let win = window.clone();
                    let on_scroll = Closure::wrap(Box::new(move || {
                        if let Some(animator) = weak.upgrade() {
                            check_triggers(&animator, &win);
                        }
                    }) as Box<dyn FnMut()>);
                    for event in ["scroll", "resize"] {
                        let _ = window.add_event_listener_with_callback(
                            event,
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                    listener = Some(on_scroll);
                }
            }

            move || {
                if let (Some(window), Some(on_scroll)) = (window, listener.as_ref()) {
                    for event in ["scroll", "resize"] {
                        let _ = window.remove_event_listener_with_callback(
                            event,
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
                animator.borrow_mut().teardown();
            }
        },
        groups,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::presets::{rise, TOP_80};
    use crate::reveal::timeline::TrackState;

    /// Stand-in element recording the inline style the animator leaves on it.
    #[derive(Default)]
    struct Swatch {
        style: RefCell<Option<VisualState>>,
    }

    impl RevealTarget for Rc<Swatch> {
        fn apply(&self, state: &VisualState) {
            *self.style.borrow_mut() = Some(*state);
        }

        fn clear(&self) {
            *self.style.borrow_mut() = None;
        }
    }

    struct Page {
        mounted: Vec<(NodeRef, Rc<Swatch>)>,
    }

    impl Page {
        fn new() -> Self {
            Page { mounted: Vec::new() }
        }

        fn mount(&mut self) -> (NodeRef, Rc<Swatch>) {
            let node = NodeRef::default();
            let swatch = Rc::new(Swatch::default());
            self.mounted.push((node.clone(), swatch.clone()));
            (node, swatch)
        }

        fn resolve(&self, node: &NodeRef) -> Option<Rc<Swatch>> {
            self.mounted.iter().find(|(n, _)| n == node).map(|(_, s)| s.clone())
        }
    }

    #[test]
    fn group_with_an_unmounted_target_is_left_out() {
        let mut page = Page::new();
        let (section, _) = page.mount();
        let (title, _) = page.mount();
        let missing = NodeRef::default();

        let tween = rise(50.0, 800.0);
        let groups = [RevealGroup::on_scroll(vec![title, missing], &section, TOP_80, tween)];
        let (timeline, elements, triggers) = plan(&groups, |n| page.resolve(n));

        assert!(elements.is_empty());
        assert!(triggers.is_empty());
        assert!(!timeline.has_pending());
        assert!(timeline.initial_frames().is_empty());
    }

    #[test]
    fn viewport_group_without_its_trigger_is_left_out() {
        let mut page = Page::new();
        let (card, _) = page.mount();
        let detached = NodeRef::default();

        let groups = [RevealGroup::on_scroll(vec![card], &detached, TOP_80, rise(50.0, 600.0))];
        let (timeline, elements, _) = plan(&groups, |n| page.resolve(n));

        assert!(elements.is_empty());
        assert!(!timeline.has_pending());
    }

    #[test]
    fn unrecognised_start_line_leaves_the_group_out() {
        let mut page = Page::new();
        let (section, _) = page.mount();
        let (card, _) = page.mount();

        let tween = rise(50.0, 600.0);
        let groups = [RevealGroup::on_scroll(vec![card], &section, "middle 50%", tween)];
        let (timeline, elements, _) = plan(&groups, |n| page.resolve(n));

        assert!(elements.is_empty());
        assert!(!timeline.has_pending());
    }

    #[test]
    fn sibling_groups_keep_their_tracks_and_target_indices() {
        let mut page = Page::new();
        let (section, section_el) = page.mount();
        let (first, first_el) = page.mount();
        let (second, second_el) = page.mount();
        let (badge, badge_el) = page.mount();
        let missing = NodeRef::default();

        let groups = [
            RevealGroup::on_scroll(vec![first, second], &section, TOP_80, rise(50.0, 600.0)),
            RevealGroup::on_scroll(vec![missing], &section, TOP_80, rise(50.0, 600.0)),
            RevealGroup::on_mount(vec![badge], rise(30.0, 500.0)),
        ];
        let (timeline, elements, triggers) = plan(&groups, |n| page.resolve(n));

        assert_eq!(elements.len(), 3);
        assert!(Rc::ptr_eq(&elements[0], &first_el));
        assert!(Rc::ptr_eq(&elements[1], &second_el));
        assert!(Rc::ptr_eq(&elements[2], &badge_el));

        let first_track = timeline.track(TrackId::from_index(0)).unwrap();
        let second_track = timeline.track(TrackId::from_index(1)).unwrap();
        assert_eq!(first_track.targets(), &[0, 1]);
        assert_eq!(second_track.targets(), &[2]);
        assert!(timeline.track(TrackId::from_index(2)).is_none());

        assert_eq!(triggers.len(), 2);
        assert!(Rc::ptr_eq(triggers[0].as_ref().unwrap(), &section_el));
        assert!(triggers[1].is_none());
    }

    #[test]
    fn start_hides_targets_and_plays_mount_tracks() {
        let mut page = Page::new();
        let (section, _) = page.mount();
        let (card, card_el) = page.mount();
        let (headline, headline_el) = page.mount();

        let groups = [
            RevealGroup::on_scroll(vec![card], &section, TOP_80, rise(50.0, 600.0)),
            RevealGroup::on_mount(vec![headline], rise(30.0, 500.0)),
        ];
        let mut animator = Animator::bind(&groups, |n| page.resolve(n));

        assert_eq!(animator.start(0.0), 1);
        assert_eq!(*card_el.style.borrow(), Some(VisualState::hidden().offset_y(50.0)));
        assert_eq!(*headline_el.style.borrow(), Some(VisualState::hidden().offset_y(30.0)));

        let frames = animator.timeline.sample(500.0);
        animator.paint(&frames);
        assert_eq!(*headline_el.style.borrow(), Some(VisualState::REST));
        assert_eq!(*card_el.style.borrow(), Some(VisualState::hidden().offset_y(50.0)));
    }

    #[test]
    fn teardown_clears_styles_and_stops_every_track() {
        let mut page = Page::new();
        let (section, section_el) = page.mount();
        let (card, card_el) = page.mount();
        let (headline, headline_el) = page.mount();

        let groups = [
            RevealGroup::on_scroll(vec![card], &section, TOP_80, rise(50.0, 600.0)),
            RevealGroup::on_mount(vec![headline], rise(30.0, 500.0)),
        ];
        let mut animator = Animator::bind(&groups, |n| page.resolve(n));
        animator.start(0.0);
        animator.teardown();

        assert!(animator.ticker.is_none());
        assert!(animator.timeline.is_settled());
        assert!(!animator.timeline.has_pending());
        assert!(animator.timeline.sample(100.0).is_empty());
        let first = animator.timeline.track(TrackId::from_index(0)).unwrap();
        assert_eq!(first.state(), TrackState::Done);

        assert_eq!(*card_el.style.borrow(), None);
        assert_eq!(*headline_el.style.borrow(), None);
        // triggers are never styled
        assert_eq!(*section_el.style.borrow(), None);
    }
}
