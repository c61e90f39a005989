//! View models and askama templates for the page and its fragments.
//!
//! All four templates share one [`PageView`], so `layout.html` can include
//! `main.html`, which in turn includes `grid.html` and `settings.html`.

use askama::Template;

use crate::chords::{flip_toggle, set_count, FlatMap, Settings, Toggle, FLAT, SHARP};

/// Counts offered in the settings panel.
pub const COUNT_CHOICES: [i64; 5] = [4, 8, 16, 32, 64];

/// Stagger between the entry animations of consecutive chord cells.
pub const CHORD_ANIMATION_STEP_MS: usize = 30;

static OPTION_GROUPS: [(&str, &[(Toggle, &str)]); 6] = [
    ("Roots", &[(Toggle::Flats, "Flats"), (Toggle::Sharps, "Sharps")]),
    (
        "Triads",
        &[
            (Toggle::MajTriad, "maj"),
            (Toggle::MinTriad, "min"),
            (Toggle::Aug, "aug"),
            (Toggle::Dim, "dim"),
        ],
    ),
    (
        "Sevenths",
        &[
            (Toggle::Maj7, "maj7"),
            (Toggle::Dom7, "7"),
            (Toggle::Min7, "min7"),
            (Toggle::Min7Flat5, "m7♭5"),
        ],
    ),
    (
        "Ninths",
        &[
            (Toggle::Maj9, "maj9"),
            (Toggle::Dom9, "9"),
            (Toggle::Min9, "min9"),
        ],
    ),
    ("Extensions", &[(Toggle::Maj7Sharp11, "maj7♯11")]),
    (
        "Altered",
        &[
            (Toggle::Alt, "alt"),
            (Toggle::SevenFlat9, "7♭9"),
            (Toggle::SevenSharp11, "7♯11"),
            (Toggle::SevenSharp5, "7♯5"),
        ],
    ),
];

/// The same state as a full-page link and as a bare query for fragment routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub query: String,
}

impl From<FlatMap> for Link {
    fn from(params: FlatMap) -> Self {
        Link {
            href: params.href(),
            query: params.to_query_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChordCell {
    pub root: String,
    pub suffix: String,
    pub delay_ms: usize,
}

#[derive(Debug, Clone)]
pub struct OptionView {
    pub key: &'static str,
    pub title: &'static str,
    pub on: bool,
    /// Link with this option flipped.
    pub link: Link,
}

#[derive(Debug, Clone)]
pub struct OptionGroup {
    pub label: &'static str,
    pub options: Vec<OptionView>,
}

#[derive(Debug, Clone)]
pub struct CountChoice {
    pub value: i64,
    pub selected: bool,
    pub link: Link,
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub chords: Vec<ChordCell>,
    pub groups: Vec<OptionGroup>,
    pub counts: Vec<CountChoice>,
    pub count: usize,
    pub show_settings: bool,
    pub current: Link,
    pub settings_toggle: Link,
}

impl PageView {
    pub fn new(settings: &Settings, chords: Vec<String>) -> Self {
        let chords = chords
            .iter()
            .enumerate()
            .map(|(index, chord)| {
                let (root, suffix) = split_chord(chord);
                ChordCell {
                    root,
                    suffix,
                    delay_ms: index * CHORD_ANIMATION_STEP_MS,
                }
            })
            .collect();

        PageView {
            chords,
            groups: build_groups(settings),
            counts: build_count_choices(settings),
            count: settings.count,
            show_settings: settings.show_settings(),
            current: settings.encode().into(),
            settings_toggle: flip_toggle(settings, Toggle::ShowSettings.key()).into(),
        }
    }
}

pub fn build_groups(settings: &Settings) -> Vec<OptionGroup> {
    OPTION_GROUPS
        .iter()
        .map(|&(label, options)| OptionGroup {
            label,
            options: options
                .iter()
                .map(|&(toggle, title)| OptionView {
                    key: toggle.key(),
                    title,
                    on: settings.is_on(toggle),
                    link: flip_toggle(settings, toggle.key()).into(),
                })
                .collect(),
        })
        .collect()
}

fn build_count_choices(settings: &Settings) -> Vec<CountChoice> {
    COUNT_CHOICES
        .iter()
        .map(|&value| CountChoice {
            value,
            selected: value == settings.count as i64,
            link: set_count(settings, value).into(),
        })
        .collect()
}

/// Splits a chord name into its root (letter plus optional accidental) and
/// suffix. An ASCII `#` is rendered as `♯`.
pub fn split_chord(chord: &str) -> (String, String) {
    let mut chars = chord.char_indices();
    let Some((_, letter)) = chars.next() else {
        return (String::new(), String::new());
    };

    let mut root = letter.to_string();
    let mut suffix_start = letter.len_utf8();
    if let Some((index, accidental)) = chars.next() {
        match accidental {
            FLAT | SHARP => {
                root.push(accidental);
                suffix_start = index + accidental.len_utf8();
            }
            '#' => {
                root.push(SHARP);
                suffix_start = index + 1;
            }
            _ => {}
        }
    }
    (root, chord[suffix_start..].to_string())
}

#[derive(Template)]
#[template(path = "layout.html")]
pub struct IndexTemplate<'a> {
    pub view: &'a PageView,
    pub build_hash: &'a str,
}

#[derive(Template)]
#[template(path = "main.html")]
pub struct MainTemplate<'a> {
    pub view: &'a PageView,
}

#[derive(Template)]
#[template(path = "grid.html")]
pub struct GridTemplate<'a> {
    pub view: &'a PageView,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsTemplate<'a> {
    pub view: &'a PageView,
}
