//! apimocker - CLI entry point

use anyhow::Result;
use apimocker::{server, Config, RequestLogger};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use tokio::sync::oneshot;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const LONG_ABOUT: &str = r#"apimocker - A lightweight mock REST API server with authentication.

Supports dynamic query parameters:
 - count/limit: number of items to return
 - sort: field to sort by
 - order: asc/desc (default: asc)
 - filter: field:value to filter by
 - offset: number of items to skip
 - meta: include metadata in response (true/false)

Authentication types:
 - Basic Auth: username and password
 - Bearer Token: token-based authentication

Additional features:
 - Custom status codes
 - Response delays (ms, s, m or compound durations like 1m30s)
 - Custom headers
 - Error simulation with probability
 - Static file responses

Example config:
  port: 5050
  logging:
    enabled: true
    format: json # or "plain"
    output: stdout # or file path like "requests.log"
  endpoints:
    - path: /users
      method: GET
      status: 200
      delay: 500ms
      headers:
        X-Test-Mode: "true"
        X-API-Version: "v1"
      auth:
        type: bearer
        token: mysecrettoken
      data: |
        {
          "id": "uuid",
          "name": "name",
          "email": "email"
        }
      errors:
        - probability: 0.1
          status: 500
          message: "Internal server error"
    - path: /admin
      method: GET
      auth:
        type: basic
        username: admin
        password: secret123

Examples:
 - GET /users?count=10
 - GET /users?sort=name&order=desc
 - GET /users?filter=name:john&count=5
 - GET /users?offset=10&limit=20&meta=true"#;

#[derive(Parser, Debug)]
#[command(
    name = "apimocker",
    about = "Lightweight mock REST API server with authentication and query parameter support",
    long_about = LONG_ABOUT,
    version
)]
struct Args {
    /// Path to mock config file
    #[arg(short, long, default_value = "mock.yaml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, default_value = "info")]
    log_level: Level,

    /// Validate configuration and exit
    #[arg(long)]
    validate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!(path = %args.config.display(), "Loading configuration");
    let config = Config::from_file(&args.config)?;

    if args.validate {
        println!(
            "Configuration is valid ({} endpoints defined)",
            config.endpoints.len()
        );
        return Ok(());
    }

    let logger = RequestLogger::from_config(&config.logging)?;

    print!("{}", status_view(&config));

    server::serve(config, logger, shutdown_signal()).await
}

/// Startup summary printed before the server begins serving.
fn status_view(config: &Config) -> String {
    let mut view = String::new();
    view.push_str("apimocker\n");
    view.push_str("Running endpoints:\n");
    for line in server::route_summaries(config) {
        view.push_str("- ");
        view.push_str(&line);
        view.push('\n');
    }
    view.push_str("\nSupported query parameters:\n");
    view.push_str("- count: number of items to return\n");
    view.push_str("- sort: field to sort by\n");
    view.push_str("- order: asc/desc (default: asc)\n");
    view.push_str("- filter: field:value to filter by\n");
    view.push_str("- offset: number of items to skip\n");
    view.push_str("- limit: alias for count\n");
    view.push_str("\nAuthentication types supported:\n");
    view.push_str("- Basic Auth: Authorization: Basic <base64(username:password)>\n");
    view.push_str("- Bearer Token: Authorization: Bearer <token>\n");
    view.push_str("\nPress q to quit.\n");
    view
}

/// Resolve on Ctrl-C or when a lone "q" line arrives on stdin.
async fn shutdown_signal() {
    let quit = spawn_quit_listener(std::io::BufReader::new(std::io::stdin()));

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {}
        // Closed stdin never quits; only Ctrl-C stops the server then.
        Ok(()) = quit => {}
    }
}

/// Watch `input` for a lone "q" line on a detached thread.
///
/// Stdin reads stay off the runtime, so a read still pending at Ctrl-C
/// cannot hold runtime shutdown open. On EOF or a read error the sender
/// drops and the receiver resolves to `Err`.
fn spawn_quit_listener<R>(input: R) -> oneshot::Receiver<()>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        for line in input.lines() {
            match line {
                Ok(line) if line.trim() == "q" => {
                    let _ = tx.send(());
                    return;
                }
                Ok(_) => continue,
                Err(_) => return,
            }
        }
    });
    rx
}
