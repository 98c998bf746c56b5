/// Application configuration and constants.

pub struct Config {
    /// Publish-check endpoint: one unauthenticated GET, no query, no body
    pub endpoint: String,

    /// Main loop tick rate in milliseconds (target 60 FPS = ~16ms)
    pub tick_rate_ms: u64,

    /// Modulo for animation frame counter
    pub animation_frame_mod: usize,

    /// Maximum characters accepted into the number field
    pub input_max_len: usize,

    /// Width of the centered card in characters
    pub card_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://2hmeq6lj0l.execute-api.ap-northeast-1.amazonaws.com/".to_string(),
            tick_rate_ms: 16,
            animation_frame_mod: 360,
            input_max_len: 8,
            card_width: 72,
        }
    }
}
