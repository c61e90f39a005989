mod generator;
mod query;
mod settings;

pub use generator::{
    natural_roots, root_vocabulary, sample_chords, suffix_vocabulary, ChordGenerator,
    IndexSource, RngIndexSource, FLAT, ROOTS, SHARP,
};
pub use query::{flip_toggle, set_count, FlatMap};
pub use settings::{Settings, Toggle, COUNT_KEY, DEFAULT_COUNT, MAX_COUNT, MIN_COUNT};
