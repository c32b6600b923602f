mod api;
mod config;
mod logging;

use std::env;
use std::process;

use tracing::error;

use api::{Client, Credentials};
use config::{Environment, Settings};

/// Demo credentials used when no --username/--password flags are given.
const DEFAULT_USERNAME: &str = "user";
const DEFAULT_PASSWORD: &str = "pass";

/// Demo quotation id used when --id is not given.
const DEFAULT_QUOTATION_ID: &str = "6c491aea-64d3-41ba-964d-dc8409189ffb";

/// First positional argument, if any.
fn parse_command() -> Option<String> {
    env::args().skip(1).find(|arg| !arg.starts_with("--"))
}

/// Value of a `--name=value` flag, or the default.
fn parse_flag(name: &str, default: &str) -> String {
    for arg in env::args().skip(1) {
        if let Some(value) = arg.strip_prefix(name) {
            return value.to_string();
        }
    }
    default.to_string()
}

#[tokio::main]
async fn main() {
    let environment = match Environment::resolve() {
        Ok(environment) => environment,
        Err(e) => {
            eprintln!("Failed to resolve environment: {}", e);
            process::exit(1);
        }
    };

    let settings = match Settings::load(environment) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = logging::init(&settings, environment) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    // No command: startup only (resolve, load, log).
    let Some(command) = parse_command() else {
        return;
    };

    let client = match Client::from_settings(&settings) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create API client");
            process::exit(1);
        }
    };

    match command.as_str() {
        "login" => {
            let credentials = Credentials {
                username: parse_flag("--username=", DEFAULT_USERNAME),
                password: parse_flag("--password=", DEFAULT_PASSWORD),
            };

            // login logs its own failures before returning them.
            if api::login(&client, &credentials).await.is_err() {
                process::exit(1);
            }
        }
        "create-quotation" => {
            let id = parse_flag("--id=", DEFAULT_QUOTATION_ID);

            match api::get_quotation(&client, &id).await {
                Ok(response) => println!("Create Quotation Response: {}", response),
                Err(e) => {
                    error!(error = %e, "quotation request failed");
                    process::exit(1);
                }
            }
        }
        other => {
            eprintln!("Unknown command: {} (expected login or create-quotation)", other);
            process::exit(1);
        }
    }
}
