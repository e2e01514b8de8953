//! sd-support-agent: interactive support chat on stdin/stdout.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::EnvFilter;

use sd_support_agent::agent::GREETING;
use sd_support_agent::inference::{IntentParser, KeywordParser, OllamaParser, TieredParser};
use sd_support_agent::{AgentConfig, DbAgentClient, SupportAgent};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they don't interleave with the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "sd-support-agent starting"
    );

    // ── Load config ─────────────────────────────────────────────
    let config = match std::env::args().nth(1) {
        Some(path) => AgentConfig::from_file(&path)?,
        None => AgentConfig::default(),
    };
    tracing::info!(db_agent_url = %config.db_agent_url, "config loaded");

    // ── Intent parser ───────────────────────────────────────────
    let parser: Box<dyn IntentParser> = if config.ollama.enabled {
        tracing::info!(
            host = %config.ollama.host,
            model = %config.ollama.model,
            "ollama intent parsing enabled"
        );
        Box::new(TieredParser::new(
            Box::new(OllamaParser::new(config.ollama.clone())?),
            Box::new(KeywordParser::new()),
        ))
    } else {
        tracing::info!("ollama disabled, using keyword parsing only");
        Box::new(KeywordParser::new())
    };

    // ── Database agent ──────────────────────────────────────────
    let client = DbAgentClient::new(&config.db_agent_url, config.request_timeout())?;
    let mut agent = SupportAgent::new(parser, client);
    if let Err(e) = agent.discover().await {
        tracing::warn!(error = %e, "database agent not reachable yet");
    }

    // ── Conversation loop ───────────────────────────────────────
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout
        .write_all(format!("SupportAgent: {GREETING}\n").as_bytes())
        .await?;
    loop {
        stdout.write_all(b"Customer: ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }

        let reply = agent.handle_query(text).await;
        stdout
            .write_all(format!("SupportAgent: {reply}\n").as_bytes())
            .await?;
    }

    tracing::info!("sd-support-agent stopped");
    Ok(())
}
