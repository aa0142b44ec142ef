use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use mlphone::KeyLevel;
use ml_cli::commands::{config_ops, key_ops};

#[derive(Parser)]
#[command(name = "mlphone", about = "Phonetic keys for Malayalam words")]
struct Cli {
    /// Custom glyph tables (TOML)
    #[arg(long, global = true)]
    glyphs: Option<String>,
    /// Custom settings (TOML)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Write a JSON trace to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print key0, key1 and key2 for each word (stdin if no words given)
    Keys {
        words: Vec<String>,
        /// Output JSON lines instead of text
        #[arg(long)]
        json: bool,
        /// Align columns with spaces instead of tabs
        #[arg(long, conflicts_with = "json")]
        align: bool,
    },
    /// Group the words of a file by phonetic key
    Group {
        /// Word list, one word per line
        file: String,
        /// Key to group on: broad, medium or narrow
        #[arg(short, long, default_value = "broad")]
        level: KeyLevel,
        /// Only show groups with at least this many words
        #[arg(long, default_value = "2")]
        min_size: usize,
        /// Output JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the matcher state after every pass
    Explain {
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the embedded glyph tables
    GlyphsExport,
    /// Check a glyph table file
    GlyphsValidate { file: String },
    /// Print the embedded settings
    SettingsExport,
    /// Check a settings file
    SettingsValidate { file: String },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = cli.trace_dir.as_deref() {
        if let Err(e) = mlphone::api::trace_init(Path::new(dir)) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
    config_ops::load_custom(cli.glyphs.as_deref(), cli.settings.as_deref());

    match cli.command {
        Command::Keys { words, json, align } => key_ops::keys_cmd(&words, json, align),
        Command::Group {
            file,
            level,
            min_size,
            json,
        } => key_ops::group_cmd(&file, level, min_size, json),
        Command::Explain { word, json } => key_ops::explain_cmd(&word, json),
        Command::GlyphsExport => config_ops::glyphs_export(),
        Command::GlyphsValidate { file } => config_ops::glyphs_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
