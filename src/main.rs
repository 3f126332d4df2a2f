use std::io::Write;

use anyhow::Context;
use clap::Parser;
use discharge_chat_client::{ChatClient, ChatResponse, ClientConfig, Conversation};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser, Debug)]
#[command(name = "discharge-chat", about = "Talk to the discharge assistant backend")]
struct Cli {
    /// Chat endpoint to post messages to [default: $CHAT_API_URL or http://localhost:8000/api/chat]
    #[arg(long)]
    endpoint: Option<String>,

    /// Continue an existing session instead of starting a new one
    #[arg(long)]
    session_id: Option<String>,

    /// Send a single message and exit
    message: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = match cli.endpoint {
        Some(endpoint) => ClientConfig::new(endpoint),
        None => ClientConfig::from_env(),
    };
    let client = ChatClient::new(config).context("building HTTP client")?;
    let mut conversation = match cli.session_id {
        Some(id) => Conversation::resume(client, id),
        None => Conversation::new(client),
    };

    if let Some(message) = cli.message {
        let response = conversation.send(&message).await.context("sending message")?;
        print_response(&response);
        return Ok(());
    }

    run_repl(&mut conversation).await
}

async fn run_repl(conversation: &mut Conversation) -> anyhow::Result<()> {
    println!("Connected to {}. Type /reset, /health or /quit.", conversation.client().endpoint());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/reset" => {
                conversation.reset();
                println!("Session cleared.");
            }
            "/health" => match conversation.client().health().await {
                Ok(health) => println!("backend status: {}", health.status),
                Err(e) => eprintln!("health check failed: {e}"),
            },
            message => match conversation.send(message).await {
                Ok(response) => print_response(&response),
                Err(e) => eprintln!("error: {e}"),
            },
        }
    }

    Ok(())
}

fn print_response(response: &ChatResponse) {
    let agent = response.agent.as_deref().unwrap_or("assistant");
    println!("[{agent}] {}", response.reply_text());

    if let Some(source) = &response.source_type {
        println!("  source: {source}");
    }
    if !response.citations().is_empty() {
        println!("  citations: {}", response.citations().join(", "));
    }
    if let Some(id) = &response.session_id {
        println!("  session: {id}");
    }
}
