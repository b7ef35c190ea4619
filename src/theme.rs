//! Color themes for the site and its outbound email documents.
//!
//! The active palette is picked once at startup and injected into the
//! dispatcher state; nothing mutates it afterwards.

use std::str::FromStr;

/// The available theme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeName {
    #[default]
    NavyGold,
    ForestCopper,
    CharcoalBlush,
    TealCoral,
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "navy-gold" => Ok(Self::NavyGold),
            "forest-copper" => Ok(Self::ForestCopper),
            "charcoal-blush" => Ok(Self::CharcoalBlush),
            "teal-coral" => Ok(Self::TealCoral),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::NavyGold => "navy-gold",
            Self::ForestCopper => "forest-copper",
            Self::CharcoalBlush => "charcoal-blush",
            Self::TealCoral => "teal-coral",
        };
        write!(f, "{s}")
    }
}

/// The subset of the site palette the email templates draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub light_bg: &'static str,
    pub card_bg: &'static str,
    pub body: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub text_on_dark: &'static str,
}

const NAVY_GOLD: Palette = Palette {
    primary: "#1A2E4C",
    secondary: "#C9A227",
    light_bg: "#FAF8F5",
    card_bg: "#F5F2EC",
    body: "#4A4A4A",
    muted: "#717171",
    border: "#E5E2DC",
    text_on_dark: "#FFFFFF",
};

const FOREST_COPPER: Palette = Palette {
    primary: "#2D4A3E",
    secondary: "#B87333",
    light_bg: "#F7F5F2",
    card_bg: "#EDE8E1",
    body: "#4A4A4A",
    muted: "#717171",
    border: "#DDD8D0",
    text_on_dark: "#FFFFFF",
};

const CHARCOAL_BLUSH: Palette = Palette {
    primary: "#2E2E2E",
    secondary: "#C4A484",
    light_bg: "#FDFBF9",
    card_bg: "#F5F1ED",
    body: "#555555",
    muted: "#777777",
    border: "#E5E0DA",
    text_on_dark: "#FFFFFF",
};

const TEAL_CORAL: Palette = Palette {
    primary: "#0D5C63",
    secondary: "#E07A5F",
    light_bg: "#FFFDF9",
    card_bg: "#F4F1E8",
    body: "#4A4A4A",
    muted: "#717171",
    border: "#E0DDD5",
    text_on_dark: "#FFFFFF",
};

impl ThemeName {
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::NavyGold => &NAVY_GOLD,
            Self::ForestCopper => &FOREST_COPPER,
            Self::CharcoalBlush => &CHARCOAL_BLUSH,
            Self::TealCoral => &TEAL_CORAL,
        }
    }
}
