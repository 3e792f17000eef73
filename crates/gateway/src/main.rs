use {
    clap::Parser,
    secrecy::Secret,
    std::sync::Arc,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {
    hearsay_gateway::{Config, server},
    hearsay_pipeline::Pipeline,
    hearsay_stt::{SttProvider, WhisperStt},
    hearsay_telegram::TelegramClient,
};

#[derive(Parser)]
#[command(name = "hearsay", about = "Hearsay — Telegram voice transcription relay")]
struct Cli {
    /// Address to bind to.
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Bot token from @BotFather.
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    bot_token: String,

    /// API key for the transcription provider.
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    stt_api_key: String,

    /// Transcription model (provider default when unset).
    #[arg(long, env = "STT_MODEL")]
    stt_model: Option<String>,
}

fn init_telemetry(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    let registry = tracing_subscriber::registry().with(filter);

    if cli.json_logs {
        registry
            .with(fmt::layer().json().with_target(true).with_thread_ids(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_ansi(true),
            )
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before clap reads the environment.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_telemetry(&cli);

    let config = Config {
        bot_token: Secret::new(cli.bot_token),
        stt_api_key: Secret::new(cli.stt_api_key),
        stt_model: cli.stt_model,
        bind: cli.bind,
        port: cli.port,
    };

    let telegram = TelegramClient::new(config.bot_token.clone());
    let stt = WhisperStt::with_model(Some(config.stt_api_key.clone()), config.stt_model.clone());
    anyhow::ensure!(stt.is_configured(), "transcription provider not configured");
    info!(provider = stt.id(), "transcription provider ready");
    let pipeline = Arc::new(Pipeline::new(telegram, Arc::new(stt)));

    let addr = format!("{}:{}", config.bind, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "hearsay gateway listening");

    axum::serve(listener, server::router(pipeline))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("shutting down");
        })
        .await?;
    Ok(())
}
