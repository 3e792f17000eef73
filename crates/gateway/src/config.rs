//! Process configuration.
//!
//! Built exactly once at startup from CLI flags and environment, then passed
//! into the components that need it. No component reads ambient globals.

use secrecy::Secret;

#[derive(Clone)]
pub struct Config {
    /// Bot token from @BotFather.
    pub bot_token: Secret<String>,

    /// API key for the transcription provider.
    pub stt_api_key: Secret<String>,

    /// Transcription model override (provider default when unset).
    pub stt_model: Option<String>,

    /// Address to bind to.
    pub bind: String,

    /// Port to listen on.
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"[REDACTED]")
            .field("stt_api_key", &"[REDACTED]")
            .field("stt_model", &self.stt_model)
            .field("bind", &self.bind)
            .field("port", &self.port)
            .finish()
    }
}
