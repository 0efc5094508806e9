//! PhysCalc MCP Server
//!
//! Line-delimited JSON-RPC 2.0 over stdin/stdout.
//!
//! Tools:
//! - calculate: Call any calculator function by name
//! - help: Get documentation for functions
//! - list_functions: List available functions
//! - list_units: List unit categories and units

mod config;
mod convert;
mod protocol;

use config::ServerConfig;
use physcalc::Calculator;
use protocol::{handle_request, McpRequest, McpResponse, PROTOCOL_VERSION, SERVER_VERSION};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    // stdout is the protocol channel
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}

fn main() {
    let config = ServerConfig::from_env();
    init_logging(&config);

    let calc = Calculator::with_standard_library().with_precision(config.precision);

    info!(
        version = SERVER_VERSION,
        protocol = PROTOCOL_VERSION,
        functions = calc.registry().len(),
        precision = calc.precision(),
        "PhysCalc MCP server started"
    );

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());
    let mut line = String::new();

    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                debug!(bytes = trimmed.len(), "received");

                let request: McpRequest = match serde_json::from_str(trimmed) {
                    Ok(r) => r,
                    Err(e) => {
                        error!(error = %e, "failed to parse request");
                        if let Err(e) = write_response(&McpResponse::parse_error(e)) {
                            error!(error = %e, "failed to write response");
                            break;
                        }
                        continue;
                    }
                };

                let response = handle_request(&calc, &request);

                // Notifications get no response
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed");
                    continue;
                }

                if let Err(e) = write_response(&response) {
                    error!(error = %e, "failed to write response");
                    break;
                }
                debug!(method = %request.method, "response sent");
            }
            Err(e) => {
                error!(error = %e, "failed to read input");
                break;
            }
        }
    }

    info!("server shutting down");
}
