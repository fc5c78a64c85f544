use clap::Parser;
use contract_gen::core::form::form_sections;
use contract_gen::domain::ports::Storage;
use contract_gen::utils::{logger, validation::Validate};
use contract_gen::{render_on, CliConfig, ContractError, DocumentKind, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    if config.list_fields {
        print_fields();
        return;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(e);
    }

    if let Err(e) = run(&config) {
        fail(e);
    }
}

fn run(config: &CliConfig) -> contract_gen::Result<()> {
    let request = config.resolve()?;
    tracing::info!(
        "📄 Generating {} ({}) as {:?}",
        request.kind.label(),
        request.kind,
        request.format
    );

    let document = render_on(request.kind, &request.draft, request.signing_date);
    let output = request.format.format(&document)?;

    match &request.output {
        Some(path) => {
            let location = LocalStorage::new(".").write_file(path, output.as_bytes())?;
            tracing::info!("✅ Document saved to: {}", location);
        }
        None => print!("{}", output),
    }

    Ok(())
}

fn fail(e: ContractError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn print_fields() {
    for kind in DocumentKind::ALL {
        println!("{} — {} ({})", kind, kind.label(), kind.description());
        for section in form_sections(kind) {
            println!("  {}", section.title);
            for (field, label) in section.fields {
                println!("    {:<22} {} [{}]", field.key(), label, field.hint());
            }
        }
        println!();
    }
}
