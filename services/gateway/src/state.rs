use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub max_rounds: u64,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            max_rounds: config.max_rounds,
        }
    }
}
