use clap::{Parser, Subcommand};
use std::process::ExitCode;

use empire_checker::infrastructure::adapters::console::ConsoleAdapter;
use empire_checker::infrastructure::adapters::webhook::{self, WebhookState};
use empire_checker::infrastructure::{self, config::Config};
use empire_checker::BotError;

#[derive(Parser)]
#[command(name = "empire-checker")]
#[command(about = "Webhook bot for card-number checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the webhook (default)
    Serve {
        /// Listening port (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Read commands from stdin
    Console,
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => run(&cli.config, |config| serve(config, port)),
        Commands::Console => run(&cli.config, console),
        Commands::Version => {
            println!("empire-checker v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(config_path: &str) -> Config {
    if !std::path::Path::new(config_path).exists() {
        return Config::load_env();
    }

    match Config::load(config_path) {
        Ok(mut config) => {
            if let Err(e) = config.apply_env() {
                tracing::warn!("{}, keeping port {}", e, config.server.port);
            }
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        }
    }
}

fn run<F, Fut>(config_path: &str, app: F) -> Result<(), BotError>
where
    F: FnOnce(Config) -> Fut,
    Fut: std::future::Future<Output = Result<(), BotError>>,
{
    let config = load_config(config_path);
    tracing::info!("Starting {}", config.bot.name);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| BotError::Internal(format!("Failed to start runtime: {}", e)))?;
    rt.block_on(app(config))
}

async fn serve(mut config: Config, port: Option<u16>) -> Result<(), BotError> {
    if let Some(port) = port {
        config.server.port = port;
    }
    let addr = config.listen_addr()?;
    let router = infrastructure::command_router(&config)?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| BotError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    webhook::serve(listener, WebhookState::new(router, config.bot.greeting.as_str())).await
}

async fn console(config: Config) -> Result<(), BotError> {
    let router = infrastructure::command_router(&config)?;
    ConsoleAdapter::new(router).run().await
}

fn init_config() -> Result<(), BotError> {
    let yaml = serde_yaml::to_string(&Config::default())
        .map_err(|e| BotError::Internal(e.to_string()))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
