// Host-side tests for reveal bookkeeping, skill values and floating decor.

use backdrop_core::*;
use std::time::Duration;

#[test]
fn thresholds_and_classes_per_group() {
    assert_eq!(RevealKind::Section.threshold(), 0.08);
    assert_eq!(RevealKind::ProjectCard.threshold(), 0.08);
    assert_eq!(RevealKind::SkillBar.threshold(), 0.22);

    assert_eq!(RevealKind::Section.class(), "visible");
    assert_eq!(RevealKind::ProjectCard.class(), "visible");
    assert_eq!(RevealKind::SkillBar.class(), "show");
}

#[test]
fn reveal_fires_once_per_element() {
    let mut log = RevealLog::new(RevealKind::Section);
    assert!(log.fire(3));
    assert!(!log.fire(3));
    assert!(log.fire(0));
    assert!(log.has_fired(3));
    assert!(!log.has_fired(1));
    assert_eq!(log.fired_count(), 2);
    assert_eq!(log.kind(), RevealKind::Section);
}

#[test]
fn project_cards_are_staggered() {
    assert_eq!(RevealKind::ProjectCard.delay(0), Duration::ZERO);
    assert_eq!(RevealKind::ProjectCard.delay(3), Duration::from_millis(300));
    assert_eq!(RevealKind::Section.delay(5), Duration::ZERO);
    assert_eq!(stagger_delay(1), Duration::from_millis(100));
}

#[test]
fn skill_value_parsing() {
    assert_eq!(skill_value(None), 70);
    assert_eq!(skill_value(Some("")), 70);
    assert_eq!(skill_value(Some("lots")), 70);
    assert_eq!(skill_value(Some("85")), 85);
    assert_eq!(skill_value(Some(" 90% ")), 90);
    assert_eq!(skill_value(Some("120")), 100);
    assert_eq!(skill_value(Some("-5")), 0);
    assert_eq!(skill_css_value(skill_value(None)), "70%");
}

#[test]
fn decor_offsets_stay_within_amplitude() {
    let mut decor = FloatingDecor::new();
    let o = decor.offset(0);
    assert_eq!(o.x, 0.0);
    assert_eq!(o.y, 10.0);
    assert_eq!(decor.transform(0), "translate(0.000px, 10.000px)");

    for _ in 0..5000 {
        decor.advance();
        for i in 0..4 {
            let o = decor.offset(i);
            assert!(o.x.abs() <= 16.0 + 1e-4);
            assert!(o.y.abs() <= 10.0 + 1e-4);
        }
    }
}

#[test]
fn cursor_hover_reports_changes() {
    let mut cursor = CursorFollower::default();
    cursor.move_to(12.0, 40.5);
    assert_eq!(cursor.style_position(), ("12px".to_string(), "40.5px".to_string()));
    assert!(cursor.set_hover(true));
    assert!(!cursor.set_hover(true));
    assert!(cursor.set_hover(false));
}
