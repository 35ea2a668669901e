use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::LevelFilter;
use md5forge::forge;

/// Forge a message and MAC for MD5(secret || message) without knowing the secret.
///
/// Any input not given as a flag is prompted for on stdin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// the original message, as the server printed it
    #[arg(short, long)]
    message: Option<String>,

    /// the original MAC, 32 hex characters
    #[arg(long)]
    mac: Option<String>,

    /// assumed length of the server's secret key in bytes
    #[arg(short, long)]
    secret_len: Option<usize>,

    /// the data to append, e.g. "&admin=true"
    #[arg(short, long)]
    append: Option<String>,

    /// log the forging steps (overridden by RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn prompt(input: &mut impl BufRead, label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("stdin closed while waiting for input");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn prompt_secret_len(input: &mut impl BufRead) -> Result<usize> {
    loop {
        let line = prompt(input, "Enter the server's SECRET_KEY length (integer): ")?;
        match line.trim().parse::<i64>() {
            Ok(n) if n < 0 => println!("Secret key length cannot be negative."),
            Ok(n) => return usize::try_from(n).context("secret key length does not fit usize"),
            Err(_) => println!("Invalid input. Please enter an integer for the secret key length."),
        }
    }
}

/// Prints bytes the way a byte-string literal would show them.
fn escape_bytes(bytes: &[u8]) -> String {
    bytes.escape_ascii().to_string()
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("--- Client Attack Setup ---");
    let message = match args.message {
        Some(m) => m,
        None => prompt(&mut input, "Enter the original message string (from server output): ")?,
    };
    let mac = match args.mac {
        Some(m) => m,
        None => prompt(&mut input, "Enter the original MAC (hex string from server output): ")?,
    };
    let secret_len = match args.secret_len {
        Some(n) => n,
        None => prompt_secret_len(&mut input)?,
    };
    let append = match args.append {
        Some(a) => a,
        None => prompt(&mut input, "Enter the data string to append (e.g., &admin=true): ")?,
    };
    let mac = mac.trim();

    println!();
    println!("=== Attacker Side ===");
    println!("Using original message: '{}'", message);
    println!("Using original MAC: {}", mac);
    println!("Using data to append: '{}'", append);
    println!("Using assumed secret key length: {}", secret_len);
    println!();

    let forgery = forge(secret_len, message.as_bytes(), mac, append.as_bytes())
        .with_context(|| format!("length extension with secret length {} failed", secret_len))?;

    println!("--- Attack Results ---");
    println!("Forged MAC (hex): {}", forgery.digest);
    println!("Forged message (bytes): b\"{}\"", escape_bytes(&forgery.message));
    println!("Forged message (hex): {}", forgery.message_hex());

    Ok(())
}
