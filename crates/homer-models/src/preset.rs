//! Preset one-click scenarios.

use schemars::JsonSchema;
use serde::Serialize;

/// A canned scenario offered as a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Preset {
    /// Short button label
    pub label: &'static str,
    /// Scenario text submitted when the preset is chosen
    pub scenario: &'static str,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        label: "Monday morning",
        scenario: "dragging myself into work on a Monday morning",
    },
    Preset {
        label: "Diet fail",
        scenario: "breaking my diet the day after starting it",
    },
    Preset {
        label: "Deploy on Friday",
        scenario: "deploying to production on a Friday afternoon",
    },
    Preset {
        label: "Group project",
        scenario: "doing all the work in a group project",
    },
    Preset {
        label: "Fake expert",
        scenario: "pretending I know what I'm talking about in a meeting",
    },
    Preset {
        label: "Payday",
        scenario: "spending my whole paycheck the day it arrives",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_populated() {
        assert!(!PRESETS.is_empty());
        assert!(PRESETS.iter().all(|p| !p.label.is_empty() && !p.scenario.is_empty()));
    }
}
