use clap::{Parser, Subcommand};
use keyword_census::{
    BatchReport, Error, Extractor, PagedTextExtractor, Pipeline, PipelineConfig,
    RuleBasedTokenizer, TechnologyKey, TokenizerKind,
};
use log::error;
use std::path::PathBuf;

/// Counts keyword categories in tokenized annual reports and aggregates them across
/// extraction and tokenization technologies
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import page-delimited report texts and file them under an extractor
    Extract {
        #[arg(long)]
        extractor: Extractor,
    },

    /// Tokenize previously extracted texts
    Tokenize {
        #[arg(long)]
        extractor: Extractor,

        #[arg(long)]
        tokenizer: TokenizerKind,
    },

    /// Count keyword occurrences for one technology combination
    Analyse {
        #[arg(long)]
        extractor: Extractor,

        #[arg(long)]
        tokenizer: TokenizerKind,
    },

    /// Compute mean, std and std in percent across all technology combinations
    Aggregate,

    /// Pool the statistics of all companies per category
    Summarize,

    /// Analyse all technology combinations, then aggregate and summarize
    Run,
}

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if e.is_missing_prerequisite() {
            error!("Please check the README, because the stages need to run in a defined sequence.");
        }
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let config = match &cli.config {
        Some(path) => PipelineConfig::from_toml_file(path)?,
        None => PipelineConfig::default(),
    };
    let pipeline = Pipeline::new(config);

    let reports: Vec<BatchReport> = match cli.command {
        Command::Extract { extractor } => {
            vec![pipeline.extract(&PagedTextExtractor::new(extractor))?]
        }
        Command::Tokenize {
            extractor,
            tokenizer,
        } => {
            vec![pipeline.tokenize(extractor, &RuleBasedTokenizer::new(tokenizer))?]
        }
        Command::Analyse {
            extractor,
            tokenizer,
        } => vec![pipeline.analyse(TechnologyKey::new(extractor, tokenizer))?],
        Command::Aggregate => vec![pipeline.aggregate()?],
        Command::Summarize => vec![pipeline.summarize()?],
        Command::Run => pipeline.run_all()?,
    };

    for report in &reports {
        println!(
            "{}: {} processed, {} skipped, {} suspicious pages",
            report.stage,
            report.processed.len(),
            report.skipped.len(),
            report.gaps.len()
        );
    }

    Ok(())
}
