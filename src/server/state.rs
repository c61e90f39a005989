use axum::extract::FromRef;

use crate::chords::ChordGenerator;
use std::sync::Arc;

use super::ServerConfig;

pub type GuardedChordGenerator = Arc<ChordGenerator>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub generator: GuardedChordGenerator,
    pub hash: String,
}

impl FromRef<ServerState> for GuardedChordGenerator {
    fn from_ref(input: &ServerState) -> Self {
        input.generator.clone()
    }
}
