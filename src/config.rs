/// Runtime configuration parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pause between AI moves in the self-play demo, in milliseconds.
    pub ai_delay_ms: u64,
    /// Hard cap on demo game length, counted in half-moves.
    pub max_plies: u32,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        AppConfig {
            ai_delay_ms: std::env::var("MINICHESS_AI_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            max_plies: std::env::var("MINICHESS_MAX_PLIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            ai_delay_ms: 500,
            max_plies: 200,
        }
    }
}
