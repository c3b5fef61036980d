use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::expand::{expand, WordTuple};
use crate::index::DictionaryIndex;
use crate::key::LetterKey;
use crate::runtime::ThreadConfig;
use crate::search::{Engine, KeyCombination, Strategy};

#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    /// Worker count; `None` defers to [`ThreadConfig::detect`].
    pub threads: Option<usize>,
    pub strategy: Strategy,
    /// Draw a progress bar over search roots on stderr.
    pub progress: bool,
}

#[derive(Debug, Default)]
pub struct Solutions<'a> {
    pub combinations: Vec<KeyCombination>,
    pub tuples: Vec<WordTuple<'a>>,
}

/// Runs the whole search over `index` and expands every accepted key
/// combination into word tuples.
pub fn solve<'a>(index: &'a DictionaryIndex, config: &SolveConfig) -> Result<Solutions<'a>> {
    let pool = ThreadConfig::detect(config.threads).build_pool()?;
    let candidates = index.candidates();

    let progress = if config.progress {
        progress_bar(candidates.len())?
    } else {
        ProgressBar::hidden()
    };

    let combinations = pool.install(|| {
        let engine = Engine::prepare(config.strategy, candidates);
        search_all(candidates, &engine, &progress)
    });
    progress.finish_and_clear();

    let tuples = combinations
        .iter()
        .flat_map(|&combination| expand(index, combination))
        .collect();

    Ok(Solutions {
        combinations,
        tuples,
    })
}

/// Fans the roots out over the current rayon pool.
///
/// Every root is its own task, so idle workers steal the next unclaimed root
/// rather than a fixed chunk; early roots have far more surviving partners
/// than late ones. Each worker collects into a private buffer and the buffers
/// are only concatenated at the join.
pub fn search_all(
    candidates: &[LetterKey],
    engine: &Engine,
    progress: &ProgressBar,
) -> Vec<KeyCombination> {
    (0..candidates.len())
        .into_par_iter()
        .with_max_len(1)
        .fold(Vec::new, |mut found, i1| {
            engine.search_root(candidates, i1, &mut |c| found.push(c));
            progress.inc(1);
            found
        })
        .reduce(Vec::new, |mut a, mut b| {
            a.append(&mut b);
            a
        })
}

fn progress_bar(roots: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(roots as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} roots")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Sorts the words inside each tuple, then the tuples, so output can be
/// compared across runs and worker counts.
pub fn canonical_order(tuples: &mut [WordTuple<'_>]) {
    for t in tuples.iter_mut() {
        t.sort_unstable();
    }
    tuples.sort_unstable();
}
