use log::debug;
use ratatui::style::Color;

/// Condition codes understood by the screen. Anything else falls back to
/// `Sun` when resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconCode {
    Sun,
    Cloud,
    CloudSun,
    CloudRain,
    CloudSnow,
}

impl IconCode {
    pub fn from_code<'a>(code: impl Into<Option<&'a str>>) -> Self {
        match code.into() {
            Some("sun") => IconCode::Sun,
            Some("cloud") => IconCode::Cloud,
            Some("cloud-sun") => IconCode::CloudSun,
            Some("cloud-rain") => IconCode::CloudRain,
            Some("cloud-snow") => IconCode::CloudSnow,
            other => {
                debug!("unrecognized icon code {other:?}, using sun");
                IconCode::Sun
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Cloud,
    PartlyCloudy,
    Rain,
    Snow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconColor {
    Yellow,
    DarkGray,
    LightGray,
    Blue,
    LightBlue,
}

impl From<IconColor> for Color {
    fn from(color: IconColor) -> Self {
        match color {
            IconColor::Yellow => Color::Yellow,
            IconColor::DarkGray => Color::DarkGray,
            IconColor::LightGray => Color::Gray,
            IconColor::Blue => Color::Blue,
            IconColor::LightBlue => Color::LightBlue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    // nothing on screen is drawn this small yet
    #[allow(dead_code)]
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub fn dimension(self) -> u16 {
        match self {
            SizeTier::Small => 24,
            SizeTier::Medium => 32,
            SizeTier::Large => 64,
        }
    }
}

/// A resolved icon: what to draw, how big, and in which color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icon {
    pub glyph: Glyph,
    pub color: IconColor,
    pub size: u16,
}

/// Resolve an icon code to a glyph. Never fails: unknown, empty or missing
/// codes give the sun.
pub fn resolve<'a>(code: impl Into<Option<&'a str>>, tier: SizeTier) -> Icon {
    let (glyph, color) = match IconCode::from_code(code) {
        IconCode::Sun => (Glyph::Sun, IconColor::Yellow),
        IconCode::Cloud => (Glyph::Cloud, IconColor::DarkGray),
        IconCode::CloudSun => (Glyph::PartlyCloudy, IconColor::LightGray),
        IconCode::CloudRain => (Glyph::Rain, IconColor::Blue),
        IconCode::CloudSnow => (Glyph::Snow, IconColor::LightBlue),
    };
    Icon {
        glyph,
        color,
        size: tier.dimension(),
    }
}

const ART_SUN: [&str; 5] = [
    "    \\   /    ",
    "     .-.     ",
    "  - (   ) -  ",
    "     `-'     ",
    "    /   \\    ",
];
const ART_CLOUD: [&str; 5] = [
    "             ",
    "     .--.    ",
    "  .-(    ).  ",
    " (___.__)__) ",
    "             ",
];
const ART_PARTLY_CLOUDY: [&str; 5] = [
    "   \\  /      ",
    " _ /\"\".-.    ",
    "   \\_(   ).  ",
    "   /(___(__) ",
    "             ",
];
const ART_RAIN: [&str; 5] = [
    "     .-.     ",
    "    (   ).   ",
    "   (___(__)  ",
    "    ' ' ' '  ",
    "   ' ' ' '   ",
];
const ART_SNOW: [&str; 5] = [
    "     .-.     ",
    "    (   ).   ",
    "   (___(__)  ",
    "    *  *  *  ",
    "   *  *  *   ",
];

impl Icon {
    pub fn symbol(&self) -> &'static str {
        match self.glyph {
            Glyph::Sun => "☀",
            Glyph::Cloud => "☁",
            Glyph::PartlyCloudy => "⛅",
            Glyph::Rain => "☂",
            Glyph::Snow => "❄",
        }
    }

    /// Terminal rendering: large icons get a block of art, the other tiers a
    /// single symbol.
    pub fn lines(&self) -> Vec<&'static str> {
        if self.size < SizeTier::Large.dimension() {
            return vec![self.symbol()];
        }
        let art = match self.glyph {
            Glyph::Sun => &ART_SUN,
            Glyph::Cloud => &ART_CLOUD,
            Glyph::PartlyCloudy => &ART_PARTLY_CLOUDY,
            Glyph::Rain => &ART_RAIN,
            Glyph::Snow => &ART_SNOW,
        };
        art.to_vec()
    }

    pub fn fg(&self) -> Color {
        self.color.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        let expected = [
            ("sun", Glyph::Sun, IconColor::Yellow),
            ("cloud", Glyph::Cloud, IconColor::DarkGray),
            ("cloud-sun", Glyph::PartlyCloudy, IconColor::LightGray),
            ("cloud-rain", Glyph::Rain, IconColor::Blue),
            ("cloud-snow", Glyph::Snow, IconColor::LightBlue),
        ];
        for (code, glyph, color) in expected {
            let icon = resolve(code, SizeTier::Medium);
            assert_eq!(icon.glyph, glyph, "{code}");
            assert_eq!(icon.color, color, "{code}");
        }
    }

    #[test]
    fn test_unknown_codes_fall_back_to_sun() {
        for code in [Some("tornado"), Some(""), Some("Cloud"), None] {
            let icon = resolve(code, SizeTier::Small);
            assert_eq!(icon.glyph, Glyph::Sun);
            assert_eq!(icon.color, IconColor::Yellow);
            assert!(!icon.symbol().is_empty());
        }
    }

    #[test]
    fn test_size_tiers() {
        for code in ["sun", "cloud-snow", "whatever"] {
            assert_eq!(resolve(code, SizeTier::Small).size, 24);
            assert_eq!(resolve(code, SizeTier::Medium).size, 32);
            assert_eq!(resolve(code, SizeTier::Large).size, 64);
        }
    }

    #[test]
    fn test_terminal_rendering() {
        assert_eq!(resolve("cloud-rain", SizeTier::Medium).lines(), vec!["☂"]);
        let art = resolve("cloud-rain", SizeTier::Large).lines();
        assert_eq!(art.len(), 5);
        assert!(art.iter().all(|l| l.chars().count() == 13));
        assert_eq!(resolve("cloud", SizeTier::Small).fg(), Color::DarkGray);
    }
}
