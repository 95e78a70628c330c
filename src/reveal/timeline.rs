//! Play-once reveal scheduling, independent of the DOM.
//!
//! A [`Timeline`] holds tracks of target indices. Each track waits for its
//! trigger, plays its tween once across its targets, and then stays `Done`
//! for the rest of the mount.

/// Opacity, translation (px) and scale of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub alpha: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl VisualState {
    pub const REST: VisualState = VisualState { alpha: 1.0, x: 0.0, y: 0.0, scale: 1.0 };

    pub const fn hidden() -> Self {
        VisualState { alpha: 0.0, ..Self::REST }
    }

    pub const fn offset_x(self, x: f64) -> Self {
        VisualState { x, ..self }
    }

    pub const fn offset_y(self, y: f64) -> Self {
        VisualState { y, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        VisualState { scale, ..self }
    }

    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        let mix = |a: f64, b: f64| a + (b - a) * t;
        VisualState {
            alpha: mix(self.alpha, to.alpha),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }

    /// Zero alpha also hides the element from hit testing.
    pub fn visibility(&self) -> &'static str {
        if self.alpha <= 0.0 { "hidden" } else { "visible" }
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    #[cfg(test)]
    Linear,
    Power3Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            #[cfg(test)]
            Ease::Linear => t,
            Ease::Power3Out => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: VisualState,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub stagger_ms: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn from(from: VisualState, duration_ms: f64) -> Self {
        Tween { from, duration_ms, delay_ms: 0.0, stagger_ms: 0.0, ease: Ease::Power3Out }
    }

    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn stagger(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    #[cfg(test)]
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Progress of the `index`-th target, `elapsed` ms after the track started.
    fn progress(&self, index: usize, elapsed: f64) -> f64 {
        let local = elapsed - self.delay_ms - self.stagger_ms * index as f64;
        if self.duration_ms <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration_ms).clamp(0.0, 1.0)
    }

    fn total_ms(&self, targets: usize) -> f64 {
        let last = targets.saturating_sub(1) as f64;
        self.delay_ms + self.stagger_ms * last + self.duration_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Where the trigger element must be for a track to start, e.g. `"top 80%"`:
/// the element's top edge has reached 80% of the way down the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStart {
    pub edge: Edge,
    pub viewport_fraction: f64,
}

impl ScrollStart {
    pub const fn new(edge: Edge, viewport_fraction: f64) -> Self {
        ScrollStart { edge, viewport_fraction }
    }

    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let edge = match parts.next()? {
            "top" => Edge::Top,
            "bottom" => Edge::Bottom,
            _ => return None,
        };
        let percent: f64 = parts.next()?.strip_suffix('%')?.parse().ok()?;
        if parts.next().is_some() || !(0.0..=100.0).contains(&percent) {
            return None;
        }
        Some(ScrollStart::new(edge, percent / 100.0))
    }

    pub fn reached(&self, rect: TriggerRect, viewport_height: f64) -> bool {
        let edge = match self.edge {
            Edge::Top => rect.top,
            Edge::Bottom => rect.bottom,
        };
        edge <= viewport_height * self.viewport_fraction
    }
}

/// Bounding box of a trigger element relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerRect {
    pub top: f64,
    pub bottom: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    Mount,
    Viewport(ScrollStart),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackState {
    Pending,
    Playing { started_at: f64 },
    Done,
}

#[derive(Debug, Clone)]
pub struct Track {
    targets: Vec<usize>,
    trigger: Trigger,
    tween: Tween,
    state: TrackState,
}

impl Track {
    pub fn new(targets: Vec<usize>, trigger: Trigger, tween: Tween) -> Self {
        Track { targets, trigger, tween, state: TrackState::Pending }
    }

    #[cfg(test)]
    pub fn state(&self) -> TrackState {
        self.state
    }

    #[cfg(test)]
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }
}

/// Handle returned by [`Timeline::add`], used to look up a track's trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrackId(usize);

impl TrackId {
    pub fn index(self) -> usize {
        self.0
    }

    #[cfg(test)]
    pub fn from_index(index: usize) -> Self {
        TrackId(index)
    }
}

#[derive(Debug, Default)]
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, track: Track) -> TrackId {
        self.tracks.push(track);
        TrackId(self.tracks.len() - 1)
    }

    #[cfg(test)]
    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.get(id.0)
    }

    pub fn initial_frames(&self) -> Vec<(usize, VisualState)> {
        self.tracks
            .iter()
            .filter(|track| track.state == TrackState::Pending)
            .flat_map(|track| track.targets.iter().map(move |&t| (t, track.tween.from)))
            .collect()
    }

    pub fn start_mounted(&mut self, now: f64) -> usize {
        let mut started = 0;
        for track in &mut self.tracks {
            if track.state == TrackState::Pending && track.trigger == Trigger::Mount {
                track.state = TrackState::Playing { started_at: now };
                started += 1;
            }
        }
        started
    }

    /// Starts every pending viewport track whose trigger has reached its
    /// start line. `geometry` returns `None` when the trigger element is gone.
    pub fn poll<F>(&mut self, now: f64, viewport_height: f64, mut geometry: F) -> usize
    where
        F: FnMut(TrackId) -> Option<TriggerRect>,
    {
        let mut started = 0;
        for (index, track) in self.tracks.iter_mut().enumerate() {
            let start = match (track.state, track.trigger) {
                (TrackState::Pending, Trigger::Viewport(start)) => start,
                _ => continue,
            };
            if let Some(rect) = geometry(TrackId(index)) {
                if start.reached(rect, viewport_height) {
                    track.state = TrackState::Playing { started_at: now };
                    started += 1;
                }
            }
        }
        started
    }

    pub fn sample(&mut self, now: f64) -> Vec<(usize, VisualState)> {
        let mut frames = Vec::new();
        for track in &mut self.tracks {
            let started_at = match track.state {
                TrackState::Playing { started_at } => started_at,
                _ => continue,
            };
            let elapsed = now - started_at;
            let finished = elapsed >= track.tween.total_ms(track.targets.len());
            for (i, &target) in track.targets.iter().enumerate() {
                let state = if finished {
                    VisualState::REST
                } else {
                    let t = track.tween.ease.apply(track.tween.progress(i, elapsed));
                    track.tween.from.lerp(&VisualState::REST, t)
                };
                frames.push((target, state));
            }
            if finished {
                track.state = TrackState::Done;
            }
        }
        frames
    }

    pub fn is_settled(&self) -> bool {
        !self.tracks.iter().any(|t| matches!(t.state, TrackState::Playing { .. }))
    }

    pub fn has_pending(&self) -> bool {
        self.tracks.iter().any(|t| t.state == TrackState::Pending)
    }

    pub fn cancel(&mut self) {
        for track in &mut self.tracks {
            track.state = TrackState::Done;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(top: f64) -> TriggerRect {
        TriggerRect { top, bottom: top + 400.0 }
    }

    fn fade_up() -> Tween {
        Tween::from(VisualState::hidden().offset_y(50.0), 600.0)
    }

    #[test]
    fn parses_start_lines() {
        assert_eq!(ScrollStart::parse("top 80%"), Some(ScrollStart::new(Edge::Top, 0.8)));
        assert_eq!(ScrollStart::parse("bottom 90%"), Some(ScrollStart::new(Edge::Bottom, 0.9)));
        assert_eq!(ScrollStart::parse("center 50%"), None);
        assert_eq!(ScrollStart::parse("top 80"), None);
        assert_eq!(ScrollStart::parse("top 120%"), None);
        assert_eq!(ScrollStart::parse("top 80% extra"), None);
    }

    #[test]
    fn start_line_uses_the_selected_edge() {
        let top = ScrollStart::new(Edge::Top, 0.8);
        assert!(!top.reached(rect(900.0), 1000.0));
        assert!(top.reached(rect(800.0), 1000.0));

        let bottom = ScrollStart::new(Edge::Bottom, 0.9);
        assert!(!bottom.reached(TriggerRect { top: 600.0, bottom: 950.0 }, 1000.0));
        assert!(bottom.reached(TriggerRect { top: 400.0, bottom: 900.0 }, 1000.0));
    }

    #[test]
    fn power3_out_is_front_loaded() {
        assert_eq!(Ease::Power3Out.apply(0.0), 0.0);
        assert_eq!(Ease::Power3Out.apply(1.0), 1.0);
        assert!((Ease::Power3Out.apply(0.5) - 0.875).abs() < 1e-9);
        assert_eq!(Ease::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn pending_tracks_wait_for_their_trigger() {
        let mut timeline = Timeline::new();
        timeline.add(Track::new(
            vec![0],
            Trigger::Viewport(ScrollStart::new(Edge::Top, 0.8)),
            fade_up(),
        ));

        assert_eq!(timeline.poll(0.0, 1000.0, |_| Some(rect(1200.0))), 0);
        assert!(timeline.sample(100.0).is_empty());
        assert_eq!(timeline.initial_frames(), vec![(0, VisualState::hidden().offset_y(50.0))]);
    }

    #[test]
    fn missing_trigger_geometry_never_starts() {
        let mut timeline = Timeline::new();
        timeline.add(Track::new(
            vec![0],
            Trigger::Viewport(ScrollStart::new(Edge::Top, 0.8)),
            fade_up(),
        ));
        assert_eq!(timeline.poll(0.0, 1000.0, |_| None), 0);
        assert!(timeline.has_pending());
    }

    #[test]
    fn reaches_rest_exactly_once_despite_reentry() {
        let mut timeline = Timeline::new();
        let id = timeline.add(Track::new(
            vec![0],
            Trigger::Viewport(ScrollStart::new(Edge::Top, 0.8)),
            fade_up(),
        ));

        let mut rests = 0;
        let mut count_rests = |frames: Vec<(usize, VisualState)>| {
            rests += frames.iter().filter(|(_, s)| *s == VisualState::REST).count();
        };

        assert_eq!(timeline.poll(0.0, 1000.0, |_| Some(rect(700.0))), 1);
        count_rests(timeline.sample(300.0));
        count_rests(timeline.sample(600.0));
        assert_eq!(timeline.track(id).map(Track::state), Some(TrackState::Done));

        // scroll away and come back a few times
        for (now, top) in [(700.0, 1500.0), (800.0, 500.0), (900.0, 1500.0), (1000.0, 100.0)] {
            assert_eq!(timeline.poll(now, 1000.0, |_| Some(rect(top))), 0);
            count_rests(timeline.sample(now));
        }
        assert_eq!(rests, 1);
    }

    #[test]
    fn stagger_follows_list_order() {
        let mut timeline = Timeline::new();
        timeline.add(Track::new(
            vec![3, 4, 5],
            Trigger::Mount,
            Tween::from(VisualState::hidden(), 600.0).stagger(200.0).ease(Ease::Linear),
        ));
        timeline.start_mounted(0.0);

        let frames = timeline.sample(300.0);
        assert_eq!(frames.iter().map(|(t, _)| *t).collect::<Vec<_>>(), vec![3, 4, 5]);
        assert!((frames[0].1.alpha - 0.5).abs() < 1e-9);
        assert!((frames[1].1.alpha - 1.0 / 6.0).abs() < 1e-9);
        assert_eq!(frames[2].1.alpha, 0.0);

        // last target starts at 400ms and runs 600ms
        assert!(!timeline.sample(999.0).is_empty());
        assert!(!timeline.is_settled());
        assert!(timeline.sample(1000.0).iter().all(|(_, s)| *s == VisualState::REST));
        assert!(timeline.is_settled());
    }

    #[test]
    fn delay_holds_the_from_state() {
        let mut timeline = Timeline::new();
        let from = VisualState::hidden().scaled(0.8);
        timeline.add(Track::new(vec![0], Trigger::Mount, Tween::from(from, 600.0).delay(1000.0)));
        timeline.start_mounted(0.0);
        assert_eq!(timeline.sample(500.0), vec![(0, from)]);
        assert_eq!(timeline.sample(1600.0), vec![(0, VisualState::REST)]);
    }

    #[test]
    fn mount_tracks_ignore_scroll_polls() {
        let mut timeline = Timeline::new();
        timeline.add(Track::new(vec![0], Trigger::Mount, fade_up()));
        assert_eq!(timeline.poll(0.0, 1000.0, |_| Some(rect(0.0))), 0);
        assert_eq!(timeline.start_mounted(0.0), 1);
        assert_eq!(timeline.start_mounted(10.0), 0);
    }

    #[test]
    fn cancel_stops_everything_without_frames() {
        let mut timeline = Timeline::new();
        timeline.add(Track::new(vec![0], Trigger::Mount, fade_up()));
        timeline.add(Track::new(
            vec![1],
            Trigger::Viewport(ScrollStart::new(Edge::Top, 0.8)),
            fade_up(),
        ));
        timeline.start_mounted(0.0);
        timeline.cancel();

        assert!(timeline.sample(100.0).is_empty());
        assert_eq!(timeline.poll(200.0, 1000.0, |_| Some(rect(0.0))), 0);
        assert!(timeline.is_settled());
        assert!(!timeline.has_pending());
    }

    #[test]
    fn zero_alpha_is_hidden() {
        assert_eq!(VisualState::hidden().visibility(), "hidden");
        assert_eq!(VisualState::REST.visibility(), "visible");
        assert_eq!(VisualState::REST.offset_x(-50.0).transform(), "translate(-50px, 0px) scale(1)");
    }
}
