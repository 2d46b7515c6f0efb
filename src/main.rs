use clap::Parser;
use sample_ops::core::sum::read_numbers_csv;
use sample_ops::utils::{logger, validation::Validate};
use sample_ops::{
    get_user_name, save_data, sum, AppConfig, AppError, CliConfig, Command, HttpApi,
    JsonFileUserStore, Payload, Result,
};

/// 執行子指令並回傳要印到 stdout 的內容
async fn execute(command: &Command, config: &AppConfig) -> Result<String> {
    match command {
        Command::User { id, .. } => {
            let store = JsonFileUserStore::load(&config.store.users_file).await?;
            tracing::info!("Loaded {} users from {}", store.len(), store.path());

            Ok(get_user_name(&store, id)
                .await?
                .unwrap_or_else(|| "(no name)".to_string()))
        }
        Command::Save { data, file, .. } => {
            let raw = match (data, file) {
                (Some(data), _) => data.clone(),
                (None, Some(path)) => tokio::fs::read_to_string(path).await?,
                (None, None) => {
                    return Err(AppError::MissingConfigError {
                        field: "--data or --file".to_string(),
                    })
                }
            };
            let payload: Payload = serde_json::from_str(&raw)?;

            let api = HttpApi::new(config.api.clone());
            tracing::info!("📤 Sending payload to {}", api.endpoint());
            let response = save_data(&api, &payload).await?;
            Ok(serde_json::to_string_pretty(&response)?)
        }
        Command::Sum { numbers, file } => {
            let mut values = numbers.clone();
            if let Some(path) = file {
                let content = tokio::fs::read(path).await?;
                values.extend(read_numbers_csv(content.as_slice())?);
            }
            tracing::debug!("Summing {} values", values.len());
            // 空序列的浮點和可能是 -0.0，加上 0.0 統一成 0
            let total = sum(&values) + 0.0;
            Ok(total.to_string())
        }
    }
}

fn exit_code(result: &Result<String>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 設定檔載入失敗時仍需有日誌可用
    let config = cli.resolve();
    let level = config.as_ref().ok().and_then(|c| c.log_level().map(str::to_string));
    if cli.log_json {
        logger::init_json_logger(cli.verbose, level.as_deref());
    } else {
        logger::init_cli_logger(cli.verbose, level.as_deref());
    }

    tracing::info!("Starting sample-ops");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match config {
        Ok(config) => match config.validate() {
            Ok(()) => execute(&cli.command, &config).await,
            Err(e) => Err(e),
        },
        Err(e) => Err(e),
    };

    match &result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());
        }
    }

    let code = exit_code(&result);
    if code > 0 {
        std::process::exit(code);
    }
}
