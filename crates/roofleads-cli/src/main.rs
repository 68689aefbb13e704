mod render;

use clap::{CommandFactory, Parser, Subcommand};
use roofleads_llm::ChatClient;
use roofleads_maps::MapsClient;
use roofleads_pipeline::LeadPipeline;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::render::{render_outcome, OutputFormat};

const PROMPT_HINT: &str = "Ask something like: 'Show me homes near Richmond Hill for leads'";

#[derive(Debug, Parser)]
#[command(name = "roofleads")]
#[command(about = "Neighborhood roof lead finder")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find and rank leads for a single prompt
    Find {
        /// Free-text request naming a city or neighborhood
        prompt: String,

        /// Print the outcome as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Read prompts from stdin, one per line, until EOF
    Chat {
        /// Print each outcome as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = roofleads_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let chat = ChatClient::from_app_config(&config)?;
    let maps = MapsClient::from_app_config(&config)?;
    let pipeline = LeadPipeline::with_radius(&chat, &maps, &maps, config.search_radius_meters);

    match command {
        Commands::Find { prompt, json } => {
            let outcome = pipeline.run(&prompt).await;
            println!("{}", render_outcome(&outcome, OutputFormat::from_json_flag(json))?);
        }
        Commands::Chat { json } => {
            let format = OutputFormat::from_json_flag(json);
            eprintln!("{PROMPT_HINT}");
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                let prompt = line.trim();
                if prompt.is_empty() {
                    continue;
                }
                let outcome = pipeline.run(prompt).await;
                println!("{}", render_outcome(&outcome, format)?);
            }
        }
    }

    Ok(())
}
