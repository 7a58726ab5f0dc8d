use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use hatsuon::config::{self, Config};
use hatsuon::dict::AccentDictionary;
use hatsuon::lookup::LookupEngine;

/// Unwrap a Result or print the error and exit.
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "pitchtool", about = "Hatsuon accent database tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a raw NHK accent CSV into a snapshot file
    Compile {
        /// Path to the raw accent database CSV
        input: String,
        /// Path to the output snapshot file
        output: String,
    },

    /// Print snapshot statistics and a few sample lookups
    Info {
        /// Path to a compiled snapshot file
        file: String,
    },

    /// Look up the pitch accent markup for an expression
    Lookup {
        /// Path to the raw accent database CSV; a snapshot is kept next to it
        database: String,
        /// Expression to look up
        expression: String,
        /// Path to a lookup config TOML (defaults to the built-in config)
        #[arg(long)]
        config: Option<String>,
        /// Convert katakana pronunciations to hiragana
        #[arg(long)]
        hiragana: bool,
    },

    /// Export a snapshot as key/kana/markup TSV
    Export {
        /// Path to a compiled snapshot file
        file: String,
        /// Path to the output TSV file
        output: String,
    },

    /// Print the built-in default config TOML
    ConfigExport,

    /// Validate a lookup config TOML file
    ConfigValidate {
        /// Path to the config TOML file
        file: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hatsuon=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compile { input, output } => compile(&input, &output),
        Command::Info { file } => info(&file),
        Command::Lookup {
            database,
            expression,
            config: config_file,
            hiragana,
        } => lookup(&database, &expression, config_file.as_deref(), hiragana),
        Command::Export { file, output } => export(&file, &output),
        Command::ConfigExport => {
            print!("{}", config::default_toml());
        }
        Command::ConfigValidate { file } => config_validate(&file),
    }
}

fn compile(input: &str, output: &str) {
    eprintln!("Compiling {input}...");
    let dict = die!(
        AccentDictionary::compile_file(Path::new(input)),
        "Error compiling accent database: {}"
    );

    let (key_count, pron_count) = dict.stats();
    eprintln!("  {key_count} keys, {pron_count} pronunciations");

    die!(
        dict.save(Path::new(output)),
        "Error writing snapshot: {}"
    );

    let file_size = fs::metadata(output).map(|m| m.len()).unwrap_or(0);
    eprintln!(
        "Wrote {output} ({:.1} MB)",
        file_size as f64 / 1_048_576.0
    );
}

fn info(file: &str) {
    let dict = die!(
        AccentDictionary::open(Path::new(file)),
        "Error opening snapshot: {}"
    );

    let file_size = fs::metadata(file).map(|m| m.len()).unwrap_or(0);
    let (key_count, pron_count) = dict.stats();

    println!("Snapshot:       {file}");
    println!("File size:      {:.1} MB", file_size as f64 / 1_048_576.0);
    println!("Keys:           {key_count}");
    println!("Pronunciations: {pron_count}");

    // Sample some entries
    let sample_keys = ["学校", "日本", "東京", "電気"];
    println!();
    println!("Sample lookups:");
    for key in &sample_keys {
        if let Some(prons) = dict.lookup(key) {
            let kana: Vec<&str> = prons.iter().take(5).map(|p| p.kana.as_str()).collect();
            println!("  {key} → {}", kana.join(", "));
        } else {
            println!("  {key} → (not found)");
        }
    }
}

fn lookup(database: &str, expression: &str, config_file: Option<&str>, hiragana: bool) {
    let raw = PathBuf::from(database);
    let snapshot = raw.with_extension("snapshot");

    let dict = die!(
        AccentDictionary::load_or_compile(&raw, &snapshot),
        "Error loading accent database: {}"
    );

    let mut config = match config_file {
        Some(path) => {
            let content = die!(fs::read_to_string(path), "Error reading {path}: {}");
            die!(config::parse_config_toml(&content), "Error: {}")
        }
        None => Config::default(),
    };
    if hiragana {
        config.pronunciation_hiragana = true;
    }

    let engine = LookupEngine::new(Arc::new(dict), &config, None);
    let results = engine.lookup(expression);

    if results.is_empty() {
        eprintln!("No pronunciation found for '{expression}'");
        process::exit(1);
    }
    println!("{}", results.to_text(" / ", "\n", Some("：")));
}

fn export(file: &str, output: &str) {
    let dict = die!(
        AccentDictionary::open(Path::new(file)),
        "Error opening snapshot: {}"
    );

    die!(
        dict.export_tsv(Path::new(output)),
        "Error writing {output}: {}"
    );

    let (_, pron_count) = dict.stats();
    eprintln!("Wrote {output} ({pron_count} rows)");
}

fn config_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(config::parse_config_toml(&content), "Error: {}");
    println!(
        "OK: {} style rules, pronunciation_hiragana={}, use_segmentation_fallback={}",
        config.styles.len(),
        config.pronunciation_hiragana,
        config.use_segmentation_fallback
    );
}
