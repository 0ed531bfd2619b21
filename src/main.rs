use clap::{Parser, Subcommand};
use selo::{download, open_print_view, DirectorySink, FilePrintOpener, SealData, SeloConfig, SeloError};
use std::fs;
use std::path::{Path, PathBuf};

/// Generates shipping labels from a campaign JSON file.
#[derive(Parser)]
#[command(name = "selo", version, about)]
struct Cli {
    /// JSON configuration file; defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Writes the one-label-per-page PDF.
    Pdf {
        /// Campaign data (SealData JSON).
        input: PathBuf,
        /// Directory the PDF is written to. Overrides `outputDir` from the config.
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Writes the two-labels-per-page print view.
    Html {
        /// Campaign data (SealData JSON).
        input: PathBuf,
        #[arg(long, short, default_value = "selos.html")]
        output: PathBuf,
    },
}

fn load_seal(path: &Path) -> Result<SealData, SeloError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

fn main() -> Result<(), SeloError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SeloConfig::from_json(&fs::read_to_string(path)?)?,
        None => SeloConfig::default(),
    };

    match cli.command {
        Command::Pdf { input, out_dir } => {
            let seal = load_seal(&input)?;
            let mut sink = match out_dir {
                Some(dir) => DirectorySink::new(dir),
                None => DirectorySink::from_config(&config),
            };
            let filename = download(&seal, &config, &mut sink)?;
            println!("{}", sink.dir().join(filename).display());
        }
        Command::Html { input, output } => {
            let seal = load_seal(&input)?;
            open_print_view(&seal, &config, &mut FilePrintOpener::new(&output))?;
            println!("{}", output.display());
        }
    }
    Ok(())
}
