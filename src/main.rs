use std::io;
use std::path::PathBuf;

use atomic_unit_converter::app;
use atomic_unit_converter::config::Config;
use atomic_unit_converter::conversion::{format_result, parse_value};
use atomic_unit_converter::i18n::{self, Translator};
use atomic_unit_converter::ui_cli::Console;
use atomic_unit_converter::PropertyRegistry;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "atomic_unit_converter")]
#[command(about = "Convert lengths, times, masses, photon energies and laser fields between atomic and SI units", long_about = None)]
struct Cli {
    /// Config file path (default: ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// UI language: ko, en or auto
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Directory with <lang>.toml string overrides
    #[arg(long, global = true)]
    locales: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List properties with their indices
    Properties,

    /// List the units of a property with their indices
    Units {
        /// Property index (see `properties`)
        property: usize,
    },

    /// Convert a value between two units of a property
    Convert {
        /// Property index
        property: usize,
        /// Source unit index
        from: usize,
        /// Target unit index
        to: usize,
        /// Value in the source unit
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Print the full-precision number instead of the formatted result
        #[arg(long)]
        raw: bool,
    },

    /// Run the interactive menu (default)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 요청된 명령을 실행한다.
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = try_run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn try_run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let command = cli.command.unwrap_or(Commands::Interactive);
    // 기본 설정 파일은 대화형 모드에서만 만든다
    let config = match command {
        Commands::Interactive => Config::load_or_default(cli.config.as_deref())?,
        _ => Config::load(cli.config.as_deref())?,
    };
    let registry = PropertyRegistry::initialize()?;

    match command {
        Commands::Properties => {
            for (i, name) in registry.property_names().iter().enumerate() {
                println!("{i}: {name}");
            }
        }
        Commands::Units { property } => {
            for (i, label) in registry.labels_for_property(property)?.iter().enumerate() {
                println!("{i}: {label}");
            }
        }
        Commands::Convert {
            property,
            from,
            to,
            value,
            raw,
        } => {
            let value = parse_value(&value)?;
            let result = registry.convert(property, from, to, value)?;
            if raw {
                println!("{result:e}");
            } else {
                let labels = registry.labels_for_property(property)?;
                println!("{} {}", format_result(result, &config.display), labels[to]);
            }
        }
        Commands::Interactive => {
            let lang = i18n::resolve_language(cli.lang.as_deref(), config.language.as_deref());
            let tr = Translator::new_with_pack(&lang, cli.locales.as_deref());
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            app::run(&registry, &config, &tr, &mut console)?;
        }
    }
    Ok(())
}
