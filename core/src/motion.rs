use std::f64::consts::TAU;
use std::fmt::Write;
use std::time::Duration;

use crate::reveal::RevealState;

pub const REVEAL_DISTANCE: f64 = 60.0;
pub const REVEAL_DURATION: Duration = Duration::from_millis(600);
pub const REVEAL_EASING: CubicBezier = CubicBezier(0.25, 0.25, 0.0, 1.0);
/// Shrinks the observed viewport so reveals start a little after the edge is crossed.
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

pub const STAGGER_STEP: Duration = Duration::from_millis(100);
pub const STAGGER_CHILD_DURATION: Duration = Duration::from_millis(500);
pub const STAGGER_CHILD_RISE: f64 = 30.0;
pub const STAGGER_CHILD_SCALE: f64 = 0.95;

pub const FLOAT_PERIOD: Duration = Duration::from_secs(3);
pub const FLOAT_INTENSITY: f64 = 10.0;
pub const FLOAT_WOBBLE_DEG: f64 = 1.0;
pub const FLOAT_KEYFRAMES: &str = "folio-float";
const FLOAT_KEYFRAME_STOPS: usize = 8;

pub const PARALLAX_SPEED: f64 = 0.5;

pub const MAGNETIC_STRENGTH: f64 = 0.3;
pub const MAGNETIC_LIMIT: f64 = 12.0;
pub const HOVER_SCALE: f64 = 1.05;
pub const PRESS_SCALE: f64 = 0.95;

pub const SKELETON_PULSE: Duration = Duration::from_millis(1500);
pub const SKELETON_LINE_DELAY: Duration = Duration::from_millis(200);
pub const SKELETON_KEYFRAMES: &str = "folio-pulse";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Where a revealing element starts; it always travels back to (0, 0).
    pub fn initial_offset(self) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, REVEAL_DISTANCE),
            Direction::Down => (0.0, -REVEAL_DISTANCE),
            Direction::Left => (REVEAL_DISTANCE, 0.0),
            Direction::Right => (-REVEAL_DISTANCE, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier(pub f64, pub f64, pub f64, pub f64);

impl CubicBezier {
    pub fn css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.0, self.1, self.2, self.3)
    }
}

/// Declarative description of how a wrapper moves. `duration` must be non-zero; that is a
/// caller precondition and is not checked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionIntent {
    pub direction: Direction,
    pub delay: Duration,
    pub duration: Duration,
    pub stagger: Duration,
    pub intensity: f64,
}

impl Default for MotionIntent {
    fn default() -> Self {
        Self {
            direction: Direction::Up,
            delay: Duration::ZERO,
            duration: REVEAL_DURATION,
            stagger: STAGGER_STEP,
            intensity: 1.0,
        }
    }
}

impl MotionIntent {
    pub fn reveal(direction: Direction, delay: Duration, duration: Duration) -> Self {
        Self {
            direction,
            delay,
            duration,
            ..Self::default()
        }
    }

    pub fn floating(duration: Duration, intensity: f64) -> Self {
        Self {
            duration,
            intensity,
            ..Self::default()
        }
    }

    pub fn parallax(speed: f64) -> Self {
        Self {
            intensity: speed,
            ..Self::default()
        }
    }

    pub fn staggered(stagger: Duration) -> Self {
        Self {
            stagger,
            duration: STAGGER_CHILD_DURATION,
            ..Self::default()
        }
    }
}

/// Visual state of a wrapped element. Only compositor-friendly properties are expressed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate_deg: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    pub fn transform_css(&self) -> String {
        let mut out = format!("translate3d({}px, {}px, 0)", self.x, self.y);
        if self.scale != 1.0 {
            let _ = write!(out, " scale({})", self.scale);
        }
        if self.rotate_deg != 0.0 {
            let _ = write!(out, " rotate({}deg)", self.rotate_deg);
        }
        out
    }

    pub fn style(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform_css())
    }
}

pub fn fade_pose(direction: Direction, state: RevealState) -> Pose {
    match state {
        RevealState::Revealed => Pose::REST,
        RevealState::Hidden => {
            let (x, y) = direction.initial_offset();
            Pose {
                opacity: 0.0,
                x,
                y,
                ..Pose::REST
            }
        }
    }
}

pub fn stagger_child_pose(state: RevealState) -> Pose {
    match state {
        RevealState::Revealed => Pose::REST,
        RevealState::Hidden => Pose {
            opacity: 0.0,
            y: STAGGER_CHILD_RISE,
            scale: STAGGER_CHILD_SCALE,
            ..Pose::REST
        },
    }
}

pub fn css_time(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

/// `transition` value animating opacity and transform together.
pub fn transition_css(duration: Duration, delay: Duration, easing: CubicBezier) -> String {
    let easing = easing.css();
    let duration = css_time(duration);
    let delay = css_time(delay);
    format!("opacity {duration} {easing} {delay}, transform {duration} {easing} {delay}")
}

/// Start delay of the child at `index` inside a stagger group.
pub fn stagger_offset(index: usize, step: Duration) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    step.saturating_mul(index)
}

pub fn stagger_offsets(count: usize, step: Duration) -> Vec<Duration> {
    (0..count).map(|index| stagger_offset(index, step)).collect()
}

/// Normalized idle oscillation in [-1, 1]: -1 at phase 0 and 1, +1 at phase 0.5.
pub fn idle_wave(phase: f64) -> f64 {
    -(TAU * phase.rem_euclid(1.0)).cos()
}

/// Keyframes for the floating idle motion. The amplitude comes from the
/// `--folio-float-intensity` custom property so one rule serves every instance.
pub fn float_keyframes() -> String {
    let mut css = format!("@keyframes {FLOAT_KEYFRAMES} {{");
    for stop in 0..=FLOAT_KEYFRAME_STOPS {
        let phase = stop as f64 / FLOAT_KEYFRAME_STOPS as f64;
        let wave = round3(idle_wave(phase));
        let percent = round3(phase * 100.0);
        let _ = write!(
            css,
            " {percent}% {{ transform: translate3d(0, calc(var(--folio-float-intensity) * {wave}), 0) rotate({}deg); }}",
            round3(wave * FLOAT_WOBBLE_DEG)
        );
    }
    css.push_str(" }");
    css
}

pub fn pulse_keyframes() -> String {
    format!(
        "@keyframes {SKELETON_KEYFRAMES} {{ 0% {{ opacity: 0.5; }} 50% {{ opacity: 1; }} 100% {{ opacity: 0.5; }} }}"
    )
}

/// Width in percent of skeleton line `index`; deterministic so rerenders don't jitter.
pub fn skeleton_width(index: usize) -> f64 {
    let spread = (index.wrapping_mul(37).wrapping_add(11) % 41) as f64;
    60.0 + spread
}

/// Offset pulling an element towards the pointer, clamped per axis.
pub fn magnetic_offset(pointer: (f64, f64), center: (f64, f64), strength: f64, limit: f64) -> (f64, f64) {
    let pull = |delta: f64| (delta * strength).clamp(-limit, limit);
    (pull(pointer.0 - center.0), pull(pointer.1 - center.1))
}

pub fn magnetic_pose(offset: (f64, f64), hovered: bool, pressed: bool) -> Pose {
    let scale = if pressed {
        PRESS_SCALE
    } else if hovered {
        HOVER_SCALE
    } else {
        1.0
    };
    Pose {
        x: offset.0,
        y: offset.1,
        scale,
        ..Pose::REST
    }
}

fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directions_collapse_to_origin() {
        assert_eq!(Direction::Up.initial_offset(), (0.0, 60.0));
        assert_eq!(Direction::Down.initial_offset(), (0.0, -60.0));
        assert_eq!(Direction::Left.initial_offset(), (60.0, 0.0));
        assert_eq!(Direction::Right.initial_offset(), (-60.0, 0.0));
        for direction in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(fade_pose(direction, RevealState::Revealed), Pose::REST);
        }
    }

    #[test]
    fn hidden_pose_style() {
        let pose = fade_pose(Direction::Right, RevealState::Hidden);
        assert_eq!(pose.style(), "opacity: 0; transform: translate3d(-60px, 0px, 0);");
        let child = stagger_child_pose(RevealState::Hidden);
        assert_eq!(child.transform_css(), "translate3d(0px, 30px, 0) scale(0.95)");
    }

    #[test]
    fn transition_lists_both_properties() {
        let css = transition_css(Duration::from_millis(600), Duration::from_millis(200), REVEAL_EASING);
        assert_eq!(
            css,
            "opacity 600ms cubic-bezier(0.25, 0.25, 0, 1) 200ms, transform 600ms cubic-bezier(0.25, 0.25, 0, 1) 200ms"
        );
    }

    #[test]
    fn idle_wave_bounds() {
        assert!((idle_wave(0.0) + 1.0).abs() < 1e-9);
        assert!((idle_wave(0.5) - 1.0).abs() < 1e-9);
        assert!((idle_wave(1.0) + 1.0).abs() < 1e-9);
        for step in 0..100 {
            let value = idle_wave(step as f64 / 100.0);
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn float_keyframes_span_full_cycle() {
        let css = float_keyframes();
        assert!(css.starts_with("@keyframes folio-float {"));
        assert!(css.contains(" 0% { transform: translate3d(0, calc(var(--folio-float-intensity) * -1), 0) rotate(-1deg); }"));
        assert!(css.contains(" 50% { transform: translate3d(0, calc(var(--folio-float-intensity) * 1), 0) rotate(1deg); }"));
        assert!(css.contains(" 100% {"));
    }

    #[test]
    fn magnetic_pull_is_clamped() {
        assert_eq!(magnetic_offset((110.0, 95.0), (100.0, 100.0), 0.5, 12.0), (5.0, -2.5));
        assert_eq!(magnetic_offset((400.0, -400.0), (0.0, 0.0), 0.3, 12.0), (12.0, -12.0));
        assert_eq!(magnetic_pose((0.0, 0.0), true, true).scale, PRESS_SCALE);
        assert_eq!(magnetic_pose((0.0, 0.0), true, false).scale, HOVER_SCALE);
    }

    #[test]
    fn skeleton_widths_in_range() {
        for index in 0..50 {
            let width = skeleton_width(index);
            assert!((60.0..=100.0).contains(&width), "{width}");
        }
    }
}
