use anyhow::{Context, Result};
use clap::Parser;
use contract_gen::core::command::{execute, parse_command, Reply};
use contract_gen::utils::{logger, validation};
use contract_gen::{DraftFile, FormState, LocalStorage};
use std::io::{self, BufRead, Write};

#[derive(Parser)]
#[command(name = "contract-shell")]
#[command(about = "Fill in a contract interactively, preview it and print it to HTML")]
struct Args {
    /// Start from a TOML draft file
    #[arg(short, long)]
    draft: Option<String>,

    /// Directory where 'print' writes documents
    #[arg(long, default_value = ".")]
    out_dir: String,

    /// Signing date as YYYY-MM-DD (overrides the draft file; defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    let mut state = match &args.draft {
        Some(path) => {
            let file = DraftFile::from_file(path)
                .with_context(|| format!("Failed to load draft file '{}'", path))?;
            let state = file.form_state().context("Invalid draft file")?;
            tracing::info!("📁 Loaded draft from {}", path);
            state
        }
        None => FormState::new(),
    };

    if let Some(date) = &args.date {
        state = state.with_signing_date(validation::validate_date("date", date)?);
    }

    let storage = LocalStorage::new(args.out_dir.clone());
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("📄 Gerador de Contratos — type 'help' for commands");
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => {
                prompt(&mut stdout)?;
                continue;
            }
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                prompt(&mut stdout)?;
                continue;
            }
        };

        match execute(&mut state, command, &storage) {
            Ok(Reply::Quit) => break,
            Ok(Reply::Message(message)) => println!("{}", message),
            Ok(Reply::Document(text)) => {
                println!();
                print!("{}", text);
                println!();
                println!("(preview — 'edit' to go back, 'print' to save as HTML)");
            }
            Err(e) => {
                tracing::error!("❌ {} (Severity: {:?})", e, e.severity());
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
        }
        prompt(&mut stdout)?;
    }

    tracing::debug!("Session ended");
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> Result<()> {
    print!("> ");
    stdout.flush()?;
    Ok(())
}
