use anyhow::Context;
use clap::Parser;
use dashfmt::config::cli::InputSource;
use dashfmt::utils::{logger, validation::Validate};
use dashfmt::{CliConfig, Command, FormatError, Formatter, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    // 載入設定檔（可選）
    let mut config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 初始化日誌
    if config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }
    tracing::debug!("CLI config: {:?}", cli);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match run(&cli.command, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("❌ Formatting failed: {:#}", e);
            let exit_code = match e.downcast_ref::<FormatError>() {
                Some(format_error) => {
                    eprintln!("❌ {}", format_error.user_friendly_message());
                    eprintln!("💡 {}", format_error.recovery_suggestion());
                    format_error.exit_code()
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    1
                }
            };
            std::process::exit(exit_code);
        }
    }
}

fn run(command: &Command, config: &TomlConfig) -> anyhow::Result<String> {
    let formatter = Formatter::new(config)?;

    let Command::Batch { input, pretty } = command else {
        let request = command
            .to_request()
            .context("command does not describe a value to format")?;
        return Ok(formatter.apply(&request)?);
    };

    let source = InputSource::from_arg(input)?;
    let requests = source
        .read_requests()
        .with_context(|| format!("reading batch requests from '{}'", input))?;
    let outcomes = formatter.apply_all(&requests);

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        tracing::warn!("{} of {} batch entries failed", failed, outcomes.len());
    }

    let json = if *pretty {
        serde_json::to_string_pretty(&outcomes)?
    } else {
        serde_json::to_string(&outcomes)?
    };
    Ok(json)
}
