use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::expand::WordTuple;

/// Whitespace-delimited words, assumed lowercase ascii.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        words.extend(line.split_whitespace().map(str::to_owned));
    }
    Ok(words)
}

pub fn read_words_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    read_words(BufReader::new(file)).with_context(|| format!("read {}", path.display()))
}

/// One line per tuple, words separated by a single space.
pub fn write_solutions<W: Write>(mut out: W, tuples: &[WordTuple<'_>]) -> Result<()> {
    for tuple in tuples {
        writeln!(out, "{}", tuple.iter().format(" "))?;
    }
    out.flush()?;
    Ok(())
}
