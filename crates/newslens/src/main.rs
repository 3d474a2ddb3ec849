use anyhow::Result;
use clap::{Parser, Subcommand};
use newslens_common::{logger, AppConfig};
use newslens_inference::{BatchRequest, HfClient, NewsSummarizer};
use std::io::Read;
use std::path::PathBuf;

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "newslens")]
#[command(about = "NewsLens - fake news detection and article summarization backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(long, default_value = "5000")]
        port: u16,
    },

    /// Summarize one JSON document from stdin and write the result to stdout
    Summarize {
        /// Override the requested sentence count
        #[arg(long)]
        sentences: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env at project root
    load_dotenv_from_project_root();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            // Override with CLI arguments
            std::env::set_var("SERVER_HOST", &host);
            std::env::set_var("SERVER_PORT", port.to_string());

            // Load config with updated env vars
            let config = AppConfig::from_env()?;
            config.ensure_directories()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("NewsLens starting...");
            tracing::info!("  Host: {}", host);
            tracing::info!("  Port: {}", port);
            tracing::info!("  Classifier model: {}", config.classifier_model);
            tracing::info!("  Summarizer model: {}", config.summarizer_model);

            println!("Server listening on http://{}:{}", host, port);

            newslens_server::start_server(config).await?;
        }
        Some(Commands::Summarize { sentences }) => {
            let config = AppConfig::from_env()?;

            // Stdout is reserved for the JSON result
            logger::setup_stderr_logging(&config.log_level)?;

            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;

            let mut request: BatchRequest = serde_json::from_str(&input)?;
            if let Some(count) = sentences {
                request.sentence_count = count;
            }

            let client = HfClient::new(&config.hf_api_base, config.hf_api_token.clone())?;
            let summarizer = NewsSummarizer::new(client, &config.summarizer_model);

            let outcome = newslens_inference::run_batch(&summarizer, request).await;
            println!("{}", serde_json::to_string(&outcome)?);
        }
        None => {
            // Default: start server with default config
            let config = AppConfig::from_env()?;
            config.ensure_directories()?;
            logger::setup_logging(&config.log_dir, &config.log_level)?;

            tracing::info!("NewsLens starting with default configuration...");

            let bind_addr = config.server_bind_address();
            println!("Server listening on http://{}", bind_addr);

            newslens_server::start_server(config).await?;
        }
    }

    Ok(())
}
