//! Chord settings and their flat key/value form.
//!
//! Every recognised query key except `count` is a [`Toggle`]. The single
//! `TOGGLES` table holds the key, default and suffix of each toggle and
//! drives both [`Settings::decode`] and [`Settings::encode`].

use super::query::FlatMap;

pub const COUNT_KEY: &str = "count";
pub const DEFAULT_COUNT: usize = 16;
pub const MIN_COUNT: i64 = 1;
pub const MAX_COUNT: i64 = 400;

pub(super) const ON: &str = "on";
pub(super) const OFF: &str = "off";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    MajTriad,
    MinTriad,
    Aug,
    Dim,
    Maj7,
    Dom7,
    Min7,
    Min7Flat5,
    Maj9,
    Dom9,
    Min9,
    Maj7Sharp11,
    Alt,
    SevenFlat9,
    SevenSharp11,
    SevenSharp5,
    Flats,
    Sharps,
    ShowSettings,
}

struct ToggleSpec {
    toggle: Toggle,
    key: &'static str,
    default: bool,
    /// Text appended to the root, only quality toggles have one.
    suffix: Option<&'static str>,
}

const fn quality(
    toggle: Toggle,
    key: &'static str,
    default: bool,
    suffix: &'static str,
) -> ToggleSpec {
    ToggleSpec {
        toggle,
        key,
        default,
        suffix: Some(suffix),
    }
}

const fn flag(toggle: Toggle, key: &'static str, default: bool) -> ToggleSpec {
    ToggleSpec {
        toggle,
        key,
        default,
        suffix: None,
    }
}

// Indexed by `Toggle as usize`; the quality entries come first, in suffix order.
static TOGGLES: [ToggleSpec; Toggle::COUNT] = [
    quality(Toggle::MajTriad, "maj", true, ""),
    quality(Toggle::MinTriad, "min", true, "min"),
    quality(Toggle::Aug, "aug", false, "aug"),
    quality(Toggle::Dim, "dim", false, "dim"),
    quality(Toggle::Maj7, "maj7", false, "maj7"),
    quality(Toggle::Dom7, "dom7", false, "7"),
    quality(Toggle::Min7, "min7", false, "min7"),
    quality(Toggle::Min7Flat5, "m7b5", false, "min7♭5"),
    quality(Toggle::Maj9, "maj9", false, "maj9"),
    quality(Toggle::Dom9, "dom9", false, "9"),
    quality(Toggle::Min9, "min9", false, "min9"),
    quality(Toggle::Maj7Sharp11, "maj7sharp11", false, "maj7♯11"),
    quality(Toggle::Alt, "alt", false, "alt"),
    quality(Toggle::SevenFlat9, "sevenb9", false, "7♭9"),
    quality(Toggle::SevenSharp11, "sevensharp11", false, "7♯11"),
    quality(Toggle::SevenSharp5, "sevensharp5", false, "7♯5"),
    flag(Toggle::Flats, "flats", true),
    flag(Toggle::Sharps, "sharps", true),
    flag(Toggle::ShowSettings, "settings", false),
];

impl Toggle {
    pub const COUNT: usize = 19;

    pub const ALL: [Toggle; Toggle::COUNT] = [
        Toggle::MajTriad,
        Toggle::MinTriad,
        Toggle::Aug,
        Toggle::Dim,
        Toggle::Maj7,
        Toggle::Dom7,
        Toggle::Min7,
        Toggle::Min7Flat5,
        Toggle::Maj9,
        Toggle::Dom9,
        Toggle::Min9,
        Toggle::Maj7Sharp11,
        Toggle::Alt,
        Toggle::SevenFlat9,
        Toggle::SevenSharp11,
        Toggle::SevenSharp5,
        Toggle::Flats,
        Toggle::Sharps,
        Toggle::ShowSettings,
    ];

    fn spec(self) -> &'static ToggleSpec {
        &TOGGLES[self as usize]
    }

    /// The query-string key of this toggle.
    pub fn key(self) -> &'static str {
        self.spec().key
    }

    /// The value used when the key is absent from the query.
    pub fn default_value(self) -> bool {
        self.spec().default
    }

    /// The chord suffix gated by this toggle, `None` for non-quality toggles.
    pub fn suffix(self) -> Option<&'static str> {
        self.spec().suffix
    }

    pub fn from_key(key: &str) -> Option<Self> {
        TOGGLES.iter().find(|spec| spec.key == key).map(|spec| spec.toggle)
    }

    /// Quality toggles in suffix order.
    pub fn qualities() -> impl Iterator<Item = Toggle> {
        Self::ALL.into_iter().filter(|toggle| toggle.suffix().is_some())
    }
}

/// Everything a request can choose about the generated chords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    toggles: [bool; Toggle::COUNT],
    pub count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        let mut toggles = [false; Toggle::COUNT];
        for spec in TOGGLES.iter() {
            toggles[spec.toggle as usize] = spec.default;
        }
        Settings {
            toggles,
            count: DEFAULT_COUNT,
        }
    }
}

impl Settings {
    pub fn is_on(&self, toggle: Toggle) -> bool {
        self.toggles[toggle as usize]
    }

    pub fn set(&mut self, toggle: Toggle, on: bool) {
        self.toggles[toggle as usize] = on;
    }

    pub fn with(mut self, toggle: Toggle, on: bool) -> Self {
        self.set(toggle, on);
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn include_flats(&self) -> bool {
        self.is_on(Toggle::Flats)
    }

    pub fn include_sharps(&self) -> bool {
        self.is_on(Toggle::Sharps)
    }

    pub fn show_settings(&self) -> bool {
        self.is_on(Toggle::ShowSettings)
    }

    /// Builds settings from query parameters.
    ///
    /// Never fails: a toggle is on only for the exact value `"on"`, absent or
    /// empty values fall back to the toggle default, and a count that is not
    /// an integer within `1..=400` becomes 16.
    pub fn decode(params: &FlatMap) -> Self {
        let mut settings = Settings::default();
        for spec in TOGGLES.iter() {
            let on = match params.get(spec.key) {
                Some(value) if !value.is_empty() => value == ON,
                _ => spec.default,
            };
            settings.set(spec.toggle, on);
        }
        settings.count = params
            .get(COUNT_KEY)
            .and_then(parse_count)
            .unwrap_or(DEFAULT_COUNT);
        settings
    }

    /// Canonical flat form of these settings.
    ///
    /// Toggles that default to on are always written, as `on` or `off`, so a
    /// link can turn them off. The others are written only when on.
    pub fn encode(&self) -> FlatMap {
        let mut params = FlatMap::new();
        for spec in TOGGLES.iter() {
            let on = self.is_on(spec.toggle);
            if spec.default {
                params.insert(spec.key, on_off(on));
            } else if on {
                params.insert(spec.key, ON);
            }
        }
        params.insert(COUNT_KEY, self.count.to_string());
        params
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        ON
    } else {
        OFF
    }
}

fn parse_count(value: &str) -> Option<usize> {
    value
        .parse::<i64>()
        .ok()
        .filter(|count| (MIN_COUNT..=MAX_COUNT).contains(count))
        .map(|count| count as usize)
}
