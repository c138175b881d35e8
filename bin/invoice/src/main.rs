//! eInvoice exchange client

mod config;
mod constants;
mod error;
mod get;
mod logger;
mod prompt;
mod receive;
mod send;

use clap::{Parser, Subcommand};
use common::Signature;
use config::Settings;
use constants::{
    APIKEY_ENV, DEFAULT_API_VERSION, DEFAULT_HOST, HOST_ENV, VERBOSE_ENV, VERSION_ENV,
};
use error::CliError;
use get::GetOptions;
use prompt::TerminalPrompt;
use receive::ReceiveOptions;
use send::SendOptions;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "invoice", version)]
#[command(about = "Send and receive electronic invoices via the eInvoice API")]
struct Cli {
    /// API host address
    #[arg(long, global = true, env = HOST_ENV, default_value = DEFAULT_HOST)]
    host: String,
    /// API key used to authenticate every request
    #[arg(long, global = true, env = APIKEY_ENV, hide_env_values = true)]
    apikey: Option<String>,
    /// API version
    #[arg(long, global = true, env = VERSION_ENV, default_value_t = DEFAULT_API_VERSION)]
    api_version: u32,
    /// Display a more verbose output
    #[arg(
        short,
        long,
        global = true,
        env = VERBOSE_ENV,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one or more invoices (wildcards allowed)
    Send {
        /// Files or glob patterns, e.g. `dir/*.xml`
        #[arg(required = true)]
        files: Vec<String>,
        /// Once a file has been sent, delete it from disk
        #[arg(long)]
        delete: bool,
        /// Validate first, and reject the document if it is invalid
        #[arg(long)]
        validate: bool,
        /// Digital signature handling: auto, apply or none
        #[arg(long, default_value = "auto")]
        signature: Signature,
    },
    /// Receive invoices
    Receive {
        /// Print the response as JSON; no file is saved
        #[arg(long)]
        json: bool,
        /// Assume yes on all answers
        #[arg(short, long)]
        yes: bool,
        /// Fetch unread documents only
        #[arg(long)]
        unread: bool,
        /// Once downloaded, delete the documents from the remote API
        #[arg(long)]
        delete: bool,
        /// Destination directory
        #[arg(short, long)]
        dest: Option<PathBuf>,
    },
    /// Get an invoice by ID
    Get {
        /// Document identifier
        id: i64,
        /// Print the response as JSON; no file is saved
        #[arg(long)]
        json: bool,
        /// Destination directory
        #[arg(short, long)]
        dest: Option<PathBuf>,
    },
}

impl Cli {
    fn settings(&self) -> Settings {
        Settings {
            host: self.host.clone(),
            api_version: self.api_version,
            api_key: self.apikey.clone().unwrap_or_default(),
            verbose: self.verbose,
        }
    }
}

fn run(command: Commands, settings: &Settings) -> Result<(), CliError> {
    let api = settings.connect()?;
    let mut out = io::stdout();

    match command {
        Commands::Send {
            files,
            delete,
            validate,
            signature,
        } => {
            let options = SendOptions {
                validate,
                signature,
                delete,
            };
            send::send_files(&api, &files, options)?;
        }
        Commands::Receive {
            json,
            yes,
            unread,
            delete,
            dest,
        } => {
            let options = ReceiveOptions {
                unread,
                json,
                delete,
                assume_yes: yes,
                dest,
            };
            receive::receive(&api, &options, &mut TerminalPrompt, &mut out)?;
        }
        Commands::Get { id, json, dest } => {
            get::get(&api, id, &GetOptions { json, dest }, &mut out)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = cli.settings();
    logger::init(settings.verbose);

    match run(cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Printed directly so RUST_LOG cannot silence it
            eprintln!("error: {}: {}", e.kind(), e);
            if let Some(body) = e.response_body() {
                eprintln!("{}", body);
            }
            ExitCode::FAILURE
        }
    }
}
