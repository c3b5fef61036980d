use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use wordle_five::io as wordio;
use wordle_five::{canonical_order, solve, DictionaryIndex, SolveConfig, Strategy, ThreadConfig};

/// Find every set of five five-letter words covering 25 distinct letters.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Word list, whitespace separated.
    #[arg(value_name = "WORDS", default_value = "words_alpha.txt")]
    words: PathBuf,

    /// Where to write solutions, `-` for stdout.
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Worker threads [default: WORDLE_FIVE_THREADS, RAYON_NUM_THREADS, or all cores].
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    #[arg(long, value_enum, default_value_t = Strategy::Nested)]
    strategy: Strategy,

    /// Sort the words of each solution and the solutions themselves.
    #[arg(long)]
    sorted: bool,

    /// Show a progress bar while searching.
    #[arg(long)]
    progress: bool,

    /// No status lines on stderr.
    #[arg(short, long)]
    quiet: bool,
}

macro_rules! status {
    ($args:expr, $($fmt:tt)*) => {
        if !$args.quiet {
            eprintln!($($fmt)*);
        }
    };
}

fn main() -> Result<()> {
    let args = Args::parse();
    let start = Instant::now();

    let threads = ThreadConfig::detect(args.threads);
    status!(
        args,
        "[threads] rayon pool = {} threads (hint: {})",
        threads.count,
        threads.source
    );

    let words = wordio::read_words_file(&args.words)?;
    let index = DictionaryIndex::build(words);
    let stats = index.stats();
    let loaded = Instant::now();
    status!(
        args,
        "[load] {} words read, {} qualifying, {} distinct keys in {} ms",
        stats.words_read,
        stats.qualifying_words,
        stats.distinct_keys,
        (loaded - start).as_millis()
    );

    let config = SolveConfig {
        threads: Some(threads.count),
        strategy: args.strategy,
        progress: args.progress && !args.quiet,
    };
    status!(args, "[search] {:?} search started", config.strategy);
    let mut solutions = solve(&index, &config)?;
    let searched = Instant::now();
    status!(
        args,
        "[search] done in {:.3}s, {} key combinations, {} solutions found",
        (searched - loaded).as_secs_f64(),
        solutions.combinations.len(),
        solutions.tuples.len()
    );

    if args.sorted {
        canonical_order(&mut solutions.tuples);
    }

    if args.output.as_os_str() == "-" {
        wordio::write_solutions(io::stdout().lock(), &solutions.tuples)?;
    } else {
        let out = File::create(&args.output)
            .with_context(|| format!("create {}", args.output.display()))?;
        wordio::write_solutions(BufWriter::new(out), &solutions.tuples)?;
    }
    let written = Instant::now();
    status!(
        args,
        "[write] {} in {} ms",
        args.output.display(),
        (written - searched).as_millis()
    );
    status!(args, "[total] {:.3}s", (written - start).as_secs_f64());

    Ok(())
}
