//! Static content tables for the landing page. Everything here is fixed at
//! build time; nothing is user-editable or persisted.

/// Icon tag carried by each feature entry. Rendering resolves the tag to a
/// glyph by looking at the entry itself, so the icon always matches the
/// selected tab.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FeatureIcon {
    Guests,
    Invites,
    Timeline,
    Budget,
}

impl FeatureIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            FeatureIcon::Guests => "👥",
            FeatureIcon::Invites => "💬",
            FeatureIcon::Timeline => "📅",
            FeatureIcon::Budget => "💰",
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct FeatureTab {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: FeatureIcon,
}

/// Feature highlight tabs, in display order. The first entry is the default
/// selection.
pub static FEATURE_TABS: [FeatureTab; 4] = [
    FeatureTab {
        title: "Guests & RSVPs",
        description: "Add your guest list with phone numbers, dietary preferences, and side of family. Track confirmed, pending, and declined responses in one view.",
        icon: FeatureIcon::Guests,
    },
    FeatureTab {
        title: "Invite templates",
        description: "Choose from ready-made templates for roka, mehendi, sangeet, wedding, and reception. Copy the message and send it from your own WhatsApp or SMS.",
        icon: FeatureIcon::Invites,
    },
    FeatureTab {
        title: "Timeline & tasks",
        description: "Plan every event with dates and venues. Assign tasks to family members and track what is done and what is pending.",
        icon: FeatureIcon::Timeline,
    },
    FeatureTab {
        title: "Budget overview",
        description: "Set a total budget and add expenses by category. See how much you have spent and how much is left at a glance.",
        icon: FeatureIcon::Budget,
    },
];

#[derive(Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// FAQ accordion entries, in display order.
pub static FAQ_ITEMS: [FaqEntry; 4] = [
    FaqEntry {
        question: "Is Swift Shaadi free to use?",
        answer: "Yes, Swift Shaadi is completely free to use right now. You can manage guests, RSVPs, timeline, tasks, budget, and send invite messages without paying anything.",
    },
    FaqEntry {
        question: "Can my parents and siblings also log in?",
        answer: "Yes! You can invite family members to your wedding with different roles. Parents can be added as Family Admins with full access, while others can be Helpers with limited permissions.",
    },
    FaqEntry {
        question: "Do you send WhatsApp messages automatically?",
        answer: "No, we do not send messages on your behalf. We provide ready-to-use templates that you copy and paste into WhatsApp or SMS. This keeps your invitations personal and coming from your own number.",
    },
    FaqEntry {
        question: "Does this work on my phone?",
        answer: "Yes! Swift Shaadi is designed mobile-first. It works in any modern browser on your phone, tablet, or computer. No app download needed.",
    },
];

// Anchor ids the in-page navigation scrolls to. Each one must match the id
// attribute of a rendered section; a missing anchor degrades to a no-op.
pub const SECTION_FEATURES: &str = "features";
pub const SECTION_HOW_IT_WORKS: &str = "how-it-works";
pub const SECTION_PRICING: &str = "pricing";
pub const SECTION_FAQ: &str = "faq";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_tabs_keep_their_display_order() {
        let titles: Vec<&str> = FEATURE_TABS.iter().map(|tab| tab.title).collect();
        assert_eq!(
            titles,
            [
                "Guests & RSVPs",
                "Invite templates",
                "Timeline & tasks",
                "Budget overview",
            ]
        );
    }

    #[test]
    fn default_tab_is_the_guest_list() {
        assert_eq!(FEATURE_TABS[0].icon, FeatureIcon::Guests);
    }

    #[test]
    fn every_feature_icon_resolves_to_a_distinct_glyph() {
        let glyphs: Vec<&str> = FEATURE_TABS.iter().map(|tab| tab.icon.glyph()).collect();
        for (i, glyph) in glyphs.iter().enumerate() {
            assert!(!glyph.is_empty());
            assert!(!glyphs[i + 1..].contains(glyph));
        }
    }

    #[test]
    fn faq_list_has_four_ordered_entries() {
        assert_eq!(FAQ_ITEMS.len(), 4);
        assert_eq!(FAQ_ITEMS[0].question, "Is Swift Shaadi free to use?");
        assert_eq!(FAQ_ITEMS[3].question, "Does this work on my phone?");
    }

    #[test]
    fn section_ids_match_the_rendered_anchors() {
        assert_eq!(
            [
                SECTION_FEATURES,
                SECTION_HOW_IT_WORKS,
                SECTION_PRICING,
                SECTION_FAQ,
            ],
            ["features", "how-it-works", "pricing", "faq"]
        );
    }
}
