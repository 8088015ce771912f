use crate::settings::FireSettings;

/// Frames simulated in print mode when neither the CLI nor the settings say otherwise
pub const DEFAULT_PRINT_FRAMES: u64 = 120;

/// Configuration for a fire run
#[derive(Clone, Debug, PartialEq)]
pub struct FireConfig {
    pub seed: Option<u64>,
    pub print: bool,
    pub frames: u64,
}

impl FireConfig {
    /// Merge command line values over the settings file
    pub fn resolve(seed: Option<u64>, print: bool, frames: Option<u64>, settings: &FireSettings) -> Self {
        Self {
            seed: seed.or(settings.seed),
            print,
            frames: frames.or(settings.frames).unwrap_or(DEFAULT_PRINT_FRAMES).max(1),
        }
    }
}
