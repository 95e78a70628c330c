use yew::NodeRef;

use super::timeline::{Tween, VisualState};

pub const TOP_70: &str = "top 70%";
pub const TOP_75: &str = "top 75%";
pub const TOP_80: &str = "top 80%";
pub const TOP_85: &str = "top 85%";
pub const BOTTOM_90: &str = "bottom 90%";

/// Fade in while rising `distance` px.
pub fn rise(distance: f64, duration_ms: f64) -> Tween {
    Tween::from(VisualState::hidden().offset_y(distance), duration_ms)
}

/// Fade in while sliding horizontally from `offset` px.
pub fn slide(offset: f64, duration_ms: f64) -> Tween {
    Tween::from(VisualState::hidden().offset_x(offset), duration_ms)
}

pub fn grow(from_scale: f64, duration_ms: f64) -> Tween {
    Tween::from(VisualState::hidden().scaled(from_scale), duration_ms)
}

pub fn node_refs(count: usize) -> Vec<NodeRef> {
    (0..count).map(|_| NodeRef::default()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::timeline::{Ease, Edge, ScrollStart};

    #[test]
    fn presets_start_hidden_and_offset() {
        let tween = rise(50.0, 800.0);
        assert_eq!(tween.from.alpha, 0.0);
        assert_eq!(tween.from.y, 50.0);
        assert_eq!(tween.ease, Ease::Power3Out);

        assert_eq!(slide(-50.0, 800.0).from.x, -50.0);
        assert_eq!(grow(0.8, 600.0).from.scale, 0.8);
    }

    #[test]
    fn start_lines_all_parse() {
        for (line, edge, fraction) in [
            (TOP_70, Edge::Top, 0.70),
            (TOP_75, Edge::Top, 0.75),
            (TOP_80, Edge::Top, 0.80),
            (TOP_85, Edge::Top, 0.85),
            (BOTTOM_90, Edge::Bottom, 0.90),
        ] {
            let start = ScrollStart::parse(line).unwrap();
            assert_eq!(start.edge, edge, "{line}");
            assert!((start.viewport_fraction - fraction).abs() < 1e-9, "{line}");
        }
    }

    #[test]
    fn node_refs_are_distinct() {
        let refs = node_refs(3);
        assert_eq!(refs.len(), 3);
        assert!(refs[0] != refs[1]);
    }
}
