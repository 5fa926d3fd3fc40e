use std::io;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};

use mspass_cli::commands::options::{decode_options, encode_options};
use mspass_cli::commands::password_generator::{derive_password, DerivePasswordRequest};
use mspass_cli::input;
use mspass_core::alphabet::AlphabetOptions;
use mspass_core::params::MiddleSquareParams;

#[derive(Parser)]
#[command(name = "mspass", about = "Deterministic password derivation", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a password from a secret and a key
    Derive {
        #[command(flatten)]
        blocks: BlockArgs,
        /// Take the selection from a `generatorOptions=` query or URL
        #[arg(long, value_name = "QUERY")]
        options: Option<String>,
        /// Read secret and key as two lines from stdin instead of prompting
        #[arg(long)]
        stdin: bool,
        /// Print a JSON object including the configuration identity
        #[arg(long)]
        json: bool,
    },
    /// Print the configuration identity of this build
    Identity,
    /// Share or restore a character block selection
    Options {
        #[command(subcommand)]
        action: OptionsAction,
    },
}

#[derive(Subcommand)]
enum OptionsAction {
    /// Print the query fragment for a selection
    Encode {
        #[command(flatten)]
        blocks: BlockArgs,
    },
    /// Print the selection stored in a query fragment or URL
    Decode {
        /// Query (`generatorOptions=...`) or full URL
        query: String,
    },
}

/// Character block flags. Every block is enabled unless switched off.
#[derive(Args)]
struct BlockArgs {
    /// Leave out uppercase letters (A-Z)
    #[arg(long)]
    no_uppercase: bool,
    /// Leave out lowercase letters (a-z)
    #[arg(long)]
    no_lowercase: bool,
    /// Leave out digits (0-9)
    #[arg(long)]
    no_digits: bool,
}

impl BlockArgs {
    const fn to_options(&self) -> AlphabetOptions {
        AlphabetOptions {
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_digits: !self.no_digits,
        }
    }
}

// ── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    mspass_cli::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Derive {
            blocks,
            options,
            stdin,
            json,
        } => cmd_derive(&blocks, options, stdin, json),
        Commands::Identity => {
            println!("{}", MiddleSquareParams::DEFAULT.identity());
            Ok(())
        }
        Commands::Options { action } => cmd_options(action),
    }
}

// ── Derive ─────────────────────────────────────────────────────────────

fn cmd_derive(blocks: &BlockArgs, options: Option<String>, stdin: bool, json: bool) -> Result<()> {
    let selection = blocks.to_options();
    let request = DerivePasswordRequest {
        uppercase: Some(selection.include_uppercase),
        lowercase: Some(selection.include_lowercase),
        digits: Some(selection.include_digits),
        options_query: options,
    };

    let inputs = if stdin {
        input::read_lines(io::stdin().lock())?
    } else {
        input::prompt()?
    };

    let result = derive_password(&inputs.secret, &inputs.key, &request).map_err(|e| anyhow!(e))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.value);
    }
    Ok(())
}

// ── Options ────────────────────────────────────────────────────────────

fn cmd_options(action: OptionsAction) -> Result<()> {
    match action {
        OptionsAction::Encode { blocks } => {
            let query = encode_options(&blocks.to_options()).map_err(|e| anyhow!(e))?;
            println!("{query}");
        }
        OptionsAction::Decode { query } => {
            let options = decode_options(&query).map_err(|e| anyhow!(e))?;
            println!("{}", serde_json::to_string_pretty(&options)?);
        }
    }
    Ok(())
}
