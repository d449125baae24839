pub mod server;
pub mod submitter;

use std::env;

use clap::{Arg, Command};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use trigger_common::error::Error;
use trigger_function::SubmitHandler;

use crate::{server::TriggerServer, submitter::LoggingSubmitter};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_level(true)
        .with_target(true)
        .init();

    let matches = Command::new("vertex-trigger")
        .about("Pub/Sub trigger for managed ML pipeline jobs")
        .version("0.1.0")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("serve")
                .about("Starts the trigger push endpoint")
                .arg(
                    Arg::new("listen_addr")
                        .short('l')
                        .long("listen_addr")
                        .help("Address to listen on (falls back to $TRIGGER_LISTEN_ADDR, then 0.0.0.0:8080)")
                        .action(clap::ArgAction::Set),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("serve", sub_matches)) => {
            let listen_addr = sub_matches
                .get_one::<String>("listen_addr")
                .cloned()
                .or_else(|| env::var("TRIGGER_LISTEN_ADDR").ok())
                .unwrap_or_else(|| "0.0.0.0:8080".to_string());

            let handler = SubmitHandler::new(LoggingSubmitter);
            let server = TriggerServer::new(handler, listen_addr.clone())?;

            info!("Starting trigger server on {}", listen_addr);

            let server_handle = server.serve().await?;

            tokio::select! {
                _ = server_handle => {
                    error!("Server Handle Error");
                }

                _ = tokio::signal::ctrl_c() => {
                    info!("Received Ctrl-C, shutting down server");
                }
            }
        }
        _ => {
            println!("Invalid subcommand");
        }
    }

    Ok(())
}
