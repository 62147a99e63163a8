//! Command-line client for the siteedit server.
//!
//! Provides the `siteedit` binary: `send` posts an instruction to
//! `/process_command`, `session` prints the current session snapshot. Output
//! is the server's JSON, pretty-printed to stdout.

use std::process;

use clap::{Parser, Subcommand};
use serde_json::json;

/// Natural-language website editor client.
#[derive(Parser)]
#[command(name = "siteedit", about = "Natural-language website editor client")]
struct Cli {
    /// Base URL of the siteedit server.
    #[arg(long, global = true, default_value = "http://127.0.0.1:8000")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Send an editing instruction.
    Send {
        /// The instruction, e.g. `make the header red`.
        #[arg(required = true, num_args = 1..)]
        instruction: Vec<String>,
    },
    /// Show the current document and undo depth.
    Session,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let base = cli.server.trim_end_matches('/').to_string();

    let exit_code = match cli.command {
        Commands::Send { instruction } => run_send(&base, &instruction.join(" ")).await,
        Commands::Session => run_session(&base).await,
    };
    process::exit(exit_code);
}

/// Execute the send subcommand.
///
/// Returns exit code: 0 = success, 1 = error envelope, 3 = transport failure.
async fn run_send(base: &str, instruction: &str) -> i32 {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/process_command", base))
        .json(&json!({ "command": instruction }))
        .send()
        .await;

    let body = match read_json(response).await {
        Ok(body) => body,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return 3;
        }
    };

    print_json(&body);
    envelope_exit_code(&body)
}

/// Execute the session subcommand.
async fn run_session(base: &str) -> i32 {
    let response = reqwest::get(format!("{}/session", base)).await;
    match read_json(response).await {
        Ok(body) => {
            print_json(&body);
            0
        }
        Err(msg) => {
            eprintln!("Error: {}", msg);
            3
        }
    }
}

async fn read_json(
    response: Result<reqwest::Response, reqwest::Error>,
) -> Result<serde_json::Value, String> {
    let response = response.map_err(|e| format!("request failed: {}", e))?;
    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(format!("server returned {}: {}", status, text));
    }
    response
        .json()
        .await
        .map_err(|e| format!("invalid JSON response: {}", e))
}

fn print_json(body: &serde_json::Value) {
    let text = serde_json::to_string_pretty(body)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to format response: {}\"}}", e));
    println!("{}", text);
}

fn envelope_exit_code(body: &serde_json::Value) -> i32 {
    if body["status"] == "success" {
        0
    } else {
        1
    }
}
