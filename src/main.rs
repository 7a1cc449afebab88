use clap::{Parser, Subcommand};
use clipshelf_lib::api::commands;
use clipshelf_lib::core::features::text_transform::suggest_transformations;
use clipshelf_lib::shared::settings::AppSettings;
use clipshelf_lib::shared::types::TransformTextRequest;
use clipshelf_lib::{logging, AppError, AppResult, TransformationKind};
use tokio::io::AsyncReadExt;
use tracing::warn;

/// Clipboard text transformations from the terminal
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the available transformations
    List,
    /// Apply a transformation and print the result
    Apply {
        /// Transformation id or alias (e.g. snake_case, kebab, url-decode)
        transformation: TransformationKind,
        /// Text to transform; read from stdin when omitted
        text: Option<String>,
    },
    /// Suggest transformations for a text, best first
    Suggest {
        /// Text to inspect; read from stdin when omitted
        text: Option<String>,
    },
    /// Inspect the settings file
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
}

#[derive(Subcommand, Debug)]
enum SettingsCommands {
    /// Print the settings file location
    Path,
    /// Print the current settings as JSON
    Show,
}

#[tokio::main]
async fn main() {
    logging::init_tracing("warn");
    let cli = Cli::parse();

    if let Err(e) = run(cli.command).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands) -> AppResult<()> {
    match command {
        Commands::List => {
            let settings = load_settings_or_default().await;
            for info in commands::get_transformations(&settings) {
                println!("{:<16} {}", info.id, info.label);
            }
        }
        Commands::Apply { transformation, text } => {
            let text = text_or_stdin(text).await?;
            let response = commands::transform_text(TransformTextRequest { text, transformation });
            println!("{}", response.result);
        }
        Commands::Suggest { text } => {
            let text = text_or_stdin(text).await?;
            let settings = load_settings_or_default().await;
            for (kind, score) in suggest_transformations(&text) {
                if settings.preferences.is_hidden(kind) {
                    continue;
                }
                println!("{:<16} {:>5.1}  {}", kind.id(), score, kind.apply(&text));
            }
        }
        Commands::Settings { command: SettingsCommands::Path } => {
            println!("{}", commands::get_settings_path()?.display());
        }
        Commands::Settings { command: SettingsCommands::Show } => {
            let settings = commands::get_settings().await?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }
    Ok(())
}

async fn load_settings_or_default() -> AppSettings {
    commands::get_settings().await.unwrap_or_else(|e| {
        warn!("[CLI] Failed to load settings, using defaults: {}", e);
        AppSettings::default()
    })
}

/// Use the argument, or read stdin minus the trailing newline a pipe adds
async fn text_or_stdin(text: Option<String>) -> AppResult<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .map_err(|e| AppError::Io(format!("Failed to read stdin: {}", e)))?;

    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}
