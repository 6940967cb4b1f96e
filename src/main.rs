//! Smoke run of both pipelines over a small sample transcript.

use anyhow::Result;
use mentora::{AssistEngine, AssistRequest, ChatMessage, Config, StatsEngine, StatsRequest};

fn sample_history() -> Vec<ChatMessage> {
    let lines = [
        ("hey! dinner friday?", false),
        ("yeah sounds fun!", true),
        ("cool, 7pm at the usual place?", false),
        ("works for me, see you there", true),
    ];
    lines
        .iter()
        .map(|(text, outgoing)| ChatMessage {
            text: text.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            is_outgoing: *outgoing,
            sender: if *outgoing { "me" } else { "them" }.to_string(),
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    mentora::init_logging();
    let config = Config::from_env();

    let history = sample_history();

    let assist = AssistEngine::from_config(&config);
    let reply = assist
        .assist(&AssistRequest {
            chat_history: history.clone(),
            user_query: "How should I reply?".to_string(),
            user_id: "demo".to_string(),
        })
        .await?;
    println!("{}", serde_json::to_string_pretty(&reply)?);

    let stats = StatsEngine::from_config(&config);
    let profile = stats
        .stats(&StatsRequest {
            chat_history: history,
            user_id: "demo".to_string(),
        })
        .await;
    println!("{}", serde_json::to_string_pretty(&profile)?);

    Ok(())
}
