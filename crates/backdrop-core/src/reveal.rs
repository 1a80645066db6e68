use crate::constants::*;
use fnv::FnvHashSet;
use std::time::Duration;

/// The three observer groups on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    Section,
    SkillBar,
    ProjectCard,
}

impl RevealKind {
    /// Visible fraction that triggers the reveal.
    pub fn threshold(self) -> f64 {
        match self {
            RevealKind::Section => SECTION_REVEAL_THRESHOLD,
            RevealKind::SkillBar => SKILL_REVEAL_THRESHOLD,
            RevealKind::ProjectCard => PROJECT_REVEAL_THRESHOLD,
        }
    }

    /// Class added once the element has been revealed.
    pub fn class(self) -> &'static str {
        match self {
            RevealKind::Section | RevealKind::ProjectCard => "visible",
            RevealKind::SkillBar => "show",
        }
    }

    /// Delay before the class is added for the element at `index`.
    pub fn delay(self, index: usize) -> Duration {
        match self {
            RevealKind::ProjectCard => stagger_delay(index),
            _ => Duration::ZERO,
        }
    }
}

/// Remembers which elements of a group already fired.
#[derive(Clone, Debug)]
pub struct RevealLog {
    kind: RevealKind,
    fired: FnvHashSet<usize>,
}

impl RevealLog {
    pub fn new(kind: RevealKind) -> Self {
        Self {
            kind,
            fired: FnvHashSet::default(),
        }
    }

    pub fn kind(&self) -> RevealKind {
        self.kind
    }

    /// Record an intersection for `index`; true only the first time.
    pub fn fire(&mut self, index: usize) -> bool {
        self.fired.insert(index)
    }

    pub fn has_fired(&self, index: usize) -> bool {
        self.fired.contains(&index)
    }

    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}

#[inline]
pub fn stagger_delay(index: usize) -> Duration {
    Duration::from_millis(PROJECT_STAGGER_MS.saturating_mul(index as u64))
}

/// Skill level from a `data-value` attribute, clamped to 0..=100.
/// Missing, empty or non-numeric values fall back to the default.
pub fn skill_value(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.trim_end_matches('%').parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, MAX_SKILL_VALUE as f64) as u32)
        .unwrap_or(DEFAULT_SKILL_VALUE)
}

/// Value for the `--value` custom property, e.g. `70%`.
pub fn skill_css_value(value: u32) -> String {
    format!("{}%", value)
}
