use std::time::Duration;

use folio_core::motion::{fade_pose, stagger_offsets, STAGGER_STEP};
use folio_core::scroll::SECTION_PROBE;
use folio_core::{active_section, Direction, Pose, Reveal, RevealLatch, ScrollMetrics, SectionBounds};

#[test]
fn unseen_reveal_keeps_initial_pose() {
    let latch = RevealLatch::new();
    let pose = fade_pose(Direction::Left, latch.state());
    assert_eq!(pose.opacity, 0.0);
    assert_eq!((pose.x, pose.y), (60.0, 0.0));
    assert_ne!(pose, Pose::REST);
}

#[test]
fn reveal_reaches_rest_pose() {
    let mut latch = RevealLatch::new();
    latch.on_enter_viewport();
    assert_eq!(fade_pose(Direction::Down, latch.state()), Pose::REST);
}

#[test]
fn stagger_start_order_is_monotonic() {
    for step in [Duration::ZERO, STAGGER_STEP, Duration::from_millis(300)] {
        let offsets = stagger_offsets(12, step);
        assert_eq!(offsets.len(), 12);
        assert_eq!(offsets[0], Duration::ZERO);
        for pair in offsets.windows(2) {
            assert!(pair[0] <= pair[1], "{pair:?}");
        }
    }
    let offsets = stagger_offsets(3, Duration::from_millis(200));
    assert_eq!(
        offsets,
        vec![
            Duration::ZERO,
            Duration::from_millis(200),
            Duration::from_millis(400)
        ]
    );
}

#[test]
fn progress_is_clamped_and_monotonic() {
    let viewport = 800.0;
    let content = 4800.0;
    assert_eq!(ScrollMetrics::new(-120.0, viewport, content).progress(), 0.0);
    assert_eq!(ScrollMetrics::new(4000.0, viewport, content).progress(), 1.0);
    assert_eq!(ScrollMetrics::new(9000.0, viewport, content).progress(), 1.0);
    let mut last = 0.0;
    let mut offset = -200.0;
    while offset <= 4400.0 {
        let value = ScrollMetrics::new(offset, viewport, content).progress();
        assert!((0.0..=1.0).contains(&value));
        assert!(value >= last, "progress went backwards at {offset}");
        last = value;
        offset += 37.0;
    }
}

#[test]
fn scroll_spy_picks_first_section_at_probe() {
    let sections = vec![
        SectionBounds {
            id: "home".to_string(),
            top: -900.0,
            bottom: -20.0,
        },
        SectionBounds {
            id: "about".to_string(),
            top: -20.0,
            bottom: 100.0,
        },
        SectionBounds {
            id: "experience".to_string(),
            top: 100.0,
            bottom: 900.0,
        },
    ];
    assert_eq!(active_section(&sections, SECTION_PROBE), Some("about"));
    assert_eq!(active_section(&sections[..1], SECTION_PROBE), None);
}
