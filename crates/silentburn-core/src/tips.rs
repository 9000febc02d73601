//! Guided wellness tip catalog.
//!
//! A fixed set of suggestions keyed by risk level, with a category tag for
//! browsing. Selection is random within the requested level.

use rand::seq::SliceRandom;
use serde::Serialize;

use crate::entry::RiskLevel;

/// Focus area of a tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    Rest,
    Social,
    Productivity,
    Mindfulness,
}

/// One wellness suggestion.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WellnessTip {
    pub level: RiskLevel,
    pub text: &'static str,
    pub icon: &'static str,
    pub category: TipCategory,
}

const fn tip(
    level: RiskLevel,
    text: &'static str,
    icon: &'static str,
    category: TipCategory,
) -> WellnessTip {
    WellnessTip {
        level,
        text,
        icon,
        category,
    }
}

/// The full tip catalog.
pub const WELLNESS_TIPS: &[WellnessTip] = &[
    // Low risk
    tip(
        RiskLevel::Low,
        "Keep up the balance. Try a 5-minute walk after lunch.",
        "🚶",
        TipCategory::Rest,
    ),
    tip(
        RiskLevel::Low,
        "You're doing great! Consider starting a gratitude journal.",
        "📔",
        TipCategory::Mindfulness,
    ),
    tip(
        RiskLevel::Low,
        "Maintain this momentum. How about a quick stretch break?",
        "🧘",
        TipCategory::Rest,
    ),
    tip(
        RiskLevel::Low,
        "Excellent balance! Try connecting with a colleague today.",
        "👥",
        TipCategory::Social,
    ),
    tip(
        RiskLevel::Low,
        "Perfect rhythm! Block 15 minutes for deep breathing.",
        "🌬️",
        TipCategory::Mindfulness,
    ),
    // Medium risk
    tip(
        RiskLevel::Medium,
        "You're showing early signals. Try disconnecting 1 hour before bed.",
        "🌙",
        TipCategory::Rest,
    ),
    tip(
        RiskLevel::Medium,
        "Time for a reset. Schedule a 15-minute mindfulness session.",
        "🧘",
        TipCategory::Mindfulness,
    ),
    tip(
        RiskLevel::Medium,
        "Your energy is dipping. Consider taking a proper lunch break.",
        "🍽️",
        TipCategory::Rest,
    ),
    tip(
        RiskLevel::Medium,
        "Early warning signs detected. Try the 2-minute rule for tasks.",
        "⏰",
        TipCategory::Productivity,
    ),
    tip(
        RiskLevel::Medium,
        "Balance is shifting. Block 30 minutes for something you enjoy.",
        "🎨",
        TipCategory::Rest,
    ),
    tip(
        RiskLevel::Medium,
        "Consider a walking meeting instead of sitting.",
        "🚶",
        TipCategory::Rest,
    ),
    tip(
        RiskLevel::Medium,
        "Try the Pomodoro technique: 25 min work, 5 min break.",
        "🍅",
        TipCategory::Productivity,
    ),
    // High risk
    tip(
        RiskLevel::High,
        "Your body is asking for rest. Block tomorrow as a recovery day.",
        "🛌",
        TipCategory::Rest,
    ),
    tip(
        RiskLevel::High,
        "Critical burnout risk. Please speak with your manager about workload.",
        "💬",
        TipCategory::Social,
    ),
    tip(
        RiskLevel::High,
        "Immediate action needed. Take the rest of today off if possible.",
        "🚫",
        TipCategory::Rest,
    ),
    tip(
        RiskLevel::High,
        "You're at high risk. Consider professional support this week.",
        "🏥",
        TipCategory::Social,
    ),
    tip(
        RiskLevel::High,
        "Emergency rest required. Prioritize sleep and disconnect completely.",
        "💤",
        TipCategory::Rest,
    ),
    tip(
        RiskLevel::High,
        "Set up an emergency wellness call with a trusted friend.",
        "📞",
        TipCategory::Social,
    ),
];

/// Pick a random tip for the given risk level.
///
/// The catalog covers every level, so this only returns `None` if the
/// catalog is ever emptied.
pub fn random_tip(level: RiskLevel) -> Option<&'static WellnessTip> {
    let matching: Vec<&WellnessTip> = WELLNESS_TIPS
        .iter()
        .filter(|t| t.level == level)
        .collect();
    matching.choose(&mut rand::thread_rng()).copied()
}

/// All tips in a category, catalog order.
pub fn tips_by_category(category: TipCategory) -> Vec<&'static WellnessTip> {
    WELLNESS_TIPS
        .iter()
        .filter(|t| t.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_tips() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert!(WELLNESS_TIPS.iter().any(|t| t.level == level));
        }
    }

    #[test]
    fn test_random_tip_matches_level() {
        for _ in 0..20 {
            let tip = random_tip(RiskLevel::High).unwrap();
            assert_eq!(tip.level, RiskLevel::High);
        }
    }

    #[test]
    fn test_tips_by_category() {
        let social = tips_by_category(TipCategory::Social);
        assert!(!social.is_empty());
        assert!(social.iter().all(|t| t.category == TipCategory::Social));
    }
}
