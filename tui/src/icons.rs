//! Block Text Icon Library
//!
//! Single-cell glyphs standing in for the icon set. Everything here is a
//! geometric shape or block element so it renders in most terminal fonts
//! without emoji width surprises.
//!
//! # Character Reference
//!
//! Triangles: ▲ △ ▶ ▷ ◀ ▴ ▾
//! Squares: ■ □ ◆ ◇ ◈
//! Circles: ● ○ ◉ ◎ ◌
//! Stars: ★ ☆ ✦ ✧ ✹

use shine_core::{QuickAction, StatKind, ViewState};

/// Every icon the interface draws
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    MessageCircle,
    BarChart,
    Sparkles,
    Clock,
    Flame,
    Target,
    Trophy,
    Award,
    TrendingUp,
    Mic,
    MicOff,
    Send,
    Volume,
    Share,
    Close,
    Lightbulb,
    Heart,
}

impl Icon {
    /// Terminal glyph for this icon
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Home => "⌂",
            Icon::MessageCircle => "◎",
            Icon::BarChart => "▆",
            Icon::Sparkles => "✦",
            Icon::Clock => "◷",
            Icon::Flame => "▲",
            Icon::Target => "◉",
            Icon::Trophy => "★",
            Icon::Award => "✧",
            Icon::TrendingUp => "↗",
            Icon::Mic => "●",
            Icon::MicOff => "○",
            Icon::Send => "▶",
            Icon::Volume => "◁",
            Icon::Share => "⇪",
            Icon::Close => "×",
            Icon::Lightbulb => "◌",
            Icon::Heart => "♥",
        }
    }

    /// Navigation bar icon for a view
    pub fn for_view(view: ViewState) -> Self {
        match view {
            ViewState::Dashboard => Icon::Home,
            ViewState::Conversation => Icon::MessageCircle,
            ViewState::Progress => Icon::BarChart,
        }
    }

    /// Stat card icon
    pub fn for_stat(kind: StatKind) -> Self {
        match kind {
            StatKind::Clock => Icon::Clock,
            StatKind::Flame => Icon::Flame,
            StatKind::Sparkles => Icon::Sparkles,
        }
    }

    /// Quick action button icon
    pub fn for_quick_action(action: QuickAction) -> Self {
        match action {
            QuickAction::Transform => Icon::Sparkles,
            QuickAction::Spark => Icon::MessageCircle,
            QuickAction::Focus => Icon::Target,
        }
    }

    /// Suggestion chip icons, in suggestion order
    pub fn for_suggestion(index: usize) -> Self {
        match index {
            0 => Icon::Lightbulb,
            1 => Icon::Heart,
            _ => Icon::Sparkles,
        }
    }
}

impl std::fmt::Display for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    const ALL: [Icon; 18] = [
        Icon::Home,
        Icon::MessageCircle,
        Icon::BarChart,
        Icon::Sparkles,
        Icon::Clock,
        Icon::Flame,
        Icon::Target,
        Icon::Trophy,
        Icon::Award,
        Icon::TrendingUp,
        Icon::Mic,
        Icon::MicOff,
        Icon::Send,
        Icon::Volume,
        Icon::Share,
        Icon::Close,
        Icon::Lightbulb,
        Icon::Heart,
    ];

    #[test]
    fn test_every_icon_is_one_cell() {
        for icon in ALL {
            assert_eq!(icon.glyph().width(), 1, "{icon:?}");
        }
    }

    #[test]
    fn test_nav_icons_are_distinct() {
        let glyphs: Vec<_> = ViewState::ALL
            .into_iter()
            .map(|v| Icon::for_view(v).glyph())
            .collect();
        assert_eq!(glyphs, vec!["⌂", "◎", "▆"]);
    }
}
