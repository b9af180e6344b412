use std::path::PathBuf;

use clap::Parser;
use log::debug;

use rs_brain_core::BrainError;
use rs_brain_core::io::{self, Encoding};
use rs_brain_core::model::{BrainBuilder, TrainingOptions};

/// Build a Markov brain from a text file.
#[derive(Parser, Debug)]
#[command(name = "rs-brain-trainer", version, about)]
struct Args {
    /// Path to input .txt file
    input: PathBuf,

    /// Channel name (used to name the output brain file)
    channel: String,

    /// Directory receiving the brain file [default: ~/Documents/MiniBot]
    #[arg(long, env = "MINIBOT_BRAIN_DIR")]
    output_dir: Option<PathBuf>,

    /// Minimum ratio of ASCII letters for a line to be kept
    #[arg(long, default_value_t = 0.7)]
    threshold: f64,

    /// Skip lines containing links (http, .com, .net, .org)
    #[arg(long)]
    skip_links: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let mut options = TrainingOptions::new(args.threshold)?;
    options.skip_links = args.skip_links;

    io::validate_channel(&args.channel)?;

    let corpus = match io::read_corpus(&args.input) {
        Ok(corpus) => corpus,
        Err(BrainError::InputNotFound(path)) => {
            println!("Input file not found: {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    if corpus.encoding == Encoding::Windows1252 {
        debug!("Corpus decoded as Windows-1252");
    }

    let mut builder = BrainBuilder::new(options);
    builder.add_text(&corpus.text);
    debug!(
        "{} of {} lines kept, {} transitions",
        builder.stats().lines_kept,
        builder.stats().lines_read,
        builder.table().transition_count()
    );

    let output_dir = match args.output_dir {
        Some(dir) => dir,
        None => io::default_brain_dir().ok_or("Unable to resolve the home directory")?,
    };

    let table = builder.into_table();
    let output_path = io::save_brain(&table, &output_dir, &args.channel)?;

    println!("Markov brain saved to: {}", output_path.display());
    println!("Total keys: {}", table.len());

    Ok(())
}
