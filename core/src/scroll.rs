/// Probe line (px from the viewport top) used to decide which section is active.
pub const SECTION_PROBE: f64 = 100.0;
/// Height of the fixed header; in-page navigation lands sections just below it.
pub const HEADER_OFFSET: f64 = 80.0;

/// One sample of the page scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, viewport_height: f64, content_height: f64) -> Self {
        Self {
            offset,
            viewport_height,
            content_height,
        }
    }

    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Fraction of the scrollable distance covered, clamped to [0, 1].
    pub fn progress(&self) -> f64 {
        let max = self.max_scroll();
        if max <= 0.0 || self.offset.is_nan() {
            return 0.0;
        }
        (self.offset / max).clamp(0.0, 1.0)
    }
}

/// Vertical parallax displacement for `speed`; content drifts up as the page scrolls.
pub fn parallax_offset(scroll_offset: f64, speed: f64) -> f64 {
    let scroll_offset = scroll_offset.max(0.0);
    let offset = -scroll_offset * speed;
    if offset == 0.0 {
        0.0
    } else {
        offset
    }
}

/// Linear mapping from an input scroll range onto an output range, clamped at both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTransform {
    pub input: (f64, f64),
    pub output: (f64, f64),
}

impl ScrollTransform {
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        let span = in_end - in_start;
        if span == 0.0 {
            return if value < in_start { out_start } else { out_end };
        }
        let t = ((value - in_start) / span).clamp(0.0, 1.0);
        out_start + (out_end - out_start) * t
    }
}

pub const HERO_DRIFT: ScrollTransform = ScrollTransform::new((0.0, 500.0), (0.0, 150.0));
pub const HERO_FADE: ScrollTransform = ScrollTransform::new((0.0, 300.0), (1.0, 0.0));

/// Viewport-relative vertical bounds of a page section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// First section, in document order, that straddles the probe line.
pub fn active_section(sections: &[SectionBounds], probe: f64) -> Option<&str> {
    sections
        .iter()
        .find(|section| section.top <= probe && section.bottom >= probe)
        .map(|section| section.id.as_str())
}

/// Absolute scroll target that puts a section just below the fixed header.
pub fn section_scroll_target(section_offset_top: f64) -> f64 {
    (section_offset_top - HEADER_OFFSET).max(0.0)
}
