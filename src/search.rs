//! Enumeration of pairwise letter-disjoint key combinations.
//!
//! Every combination is reported as the keys at strictly increasing
//! candidate indices `i1 < i2 < i3 < i4 < i5`, so each unordered set is seen
//! exactly once and no bookkeeping is shared between roots. A branch rooted
//! at `i1` only reads the candidate list (and the adjacency graph, for
//! [`Strategy::Graph`]), which is what lets roots run on different threads.

use clap::ValueEnum;
use itertools::{EitherOrBoth, Itertools};
use rayon::prelude::*;

use crate::key::{LetterKey, COVERED_LETTERS, TUPLE_LEN};

pub type KeyCombination = [LetterKey; TUPLE_LEN];

const _: () = assert!(TUPLE_LEN == 5, "the nested search unrolls exactly five levels");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Nested loops, each level filtering the survivors of the previous one.
    #[default]
    Nested,
    /// Depth-first walk over a precomputed graph of disjoint key pairs.
    Graph,
}

/// A strategy together with whatever it precomputes over the candidates.
pub enum Engine {
    Nested,
    Graph(AdjacencyGraph),
}

impl Engine {
    pub fn prepare(strategy: Strategy, candidates: &[LetterKey]) -> Self {
        match strategy {
            Strategy::Nested => Engine::Nested,
            Strategy::Graph => Engine::Graph(AdjacencyGraph::build(candidates)),
        }
    }

    /// Reports every combination whose lowest index is `i1`.
    pub fn search_root<F>(&self, candidates: &[LetterKey], i1: usize, emit: &mut F)
    where
        F: FnMut(KeyCombination),
    {
        match self {
            Engine::Nested => search_root_nested(candidates, i1, emit),
            Engine::Graph(graph) => search_root_graph(candidates, graph, i1, emit),
        }
    }
}

/// Sequential search over every root. Mostly useful for tests and as the
/// reference the parallel driver is checked against.
pub fn search_sequential(candidates: &[LetterKey], strategy: Strategy) -> Vec<KeyCombination> {
    let engine = Engine::prepare(strategy, candidates);
    let mut found = Vec::new();
    for i1 in 0..candidates.len() {
        engine.search_root(candidates, i1, &mut |c| found.push(c));
    }
    found
}

fn filter(union: LetterKey, pool: &[LetterKey], filtered: &mut Vec<LetterKey>) {
    filtered.clear();
    filtered.extend(pool.iter().copied().filter(|k| k.is_disjoint(union)));
}

pub fn search_root_nested<F>(candidates: &[LetterKey], i1: usize, emit: &mut F)
where
    F: FnMut(KeyCombination),
{
    let k1 = candidates[i1];
    let rest = &candidates[i1 + 1..];
    let mut level2 = Vec::with_capacity(rest.len());
    let mut level3 = Vec::with_capacity(rest.len());
    let mut level4 = Vec::with_capacity(rest.len());

    // Each level keeps the survivors in candidate order, so scanning only the
    // tail after the current entry keeps indices strictly increasing.
    filter(k1, rest, &mut level2);
    for (j2, &k2) in level2.iter().enumerate() {
        let u2 = k1.union(k2);
        filter(u2, &level2[j2 + 1..], &mut level3);
        for (j3, &k3) in level3.iter().enumerate() {
            let u3 = u2.union(k3);
            filter(u3, &level3[j3 + 1..], &mut level4);
            for (j4, &k4) in level4.iter().enumerate() {
                let u4 = u3.union(k4);
                for &k5 in &level4[j4 + 1..] {
                    if k5.is_disjoint(u4) {
                        debug_assert_eq!(u4.union(k5).letter_count(), COVERED_LETTERS);
                        emit([k1, k2, k3, k4, k5]);
                    }
                }
            }
        }
    }
}

/// For every candidate index `i`, the ascending indices `j > i` whose keys
/// share no letter with candidate `i`. Stored as one flat edge array plus
/// row offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    offsets: Vec<usize>,
    edges: Vec<u32>,
}

impl AdjacencyGraph {
    pub fn build(candidates: &[LetterKey]) -> Self {
        let n = candidates.len();
        let rows: Vec<Vec<u32>> = (0..n)
            .into_par_iter()
            .map(|i| {
                let ki = candidates[i];
                (i + 1..n)
                    .filter(|&j| ki.is_disjoint(candidates[j]))
                    .map(|j| j as u32)
                    .collect()
            })
            .collect();

        let mut offsets = Vec::with_capacity(n + 1);
        let mut edges = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        offsets.push(0);
        for row in rows {
            edges.extend(row);
            offsets.push(edges.len());
        }
        AdjacencyGraph { offsets, edges }
    }

    pub fn neighbors(&self, i: usize) -> &[u32] {
        &self.edges[self.offsets[i]..self.offsets[i + 1]]
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A partial combination awaiting its next slot.
struct Frame {
    chosen: [u32; TUPLE_LEN],
    depth: usize,
    union: LetterKey,
    /// Indices disjoint from `union`, all above the last chosen one.
    pool: Vec<u32>,
}

pub fn search_root_graph<F>(
    candidates: &[LetterKey],
    graph: &AdjacencyGraph,
    i1: usize,
    emit: &mut F,
) where
    F: FnMut(KeyCombination),
{
    let mut chosen = [0u32; TUPLE_LEN];
    chosen[0] = i1 as u32;
    let mut stack = vec![Frame {
        chosen,
        depth: 1,
        union: candidates[i1],
        pool: graph.neighbors(i1).to_vec(),
    }];

    while let Some(frame) = stack.pop() {
        let last = frame.depth + 1 == TUPLE_LEN;
        let still_needed = TUPLE_LEN - frame.depth - 1;

        for (pos, &j) in frame.pool.iter().enumerate() {
            let mut chosen = frame.chosen;
            chosen[frame.depth] = j;

            if last {
                debug_assert_eq!(
                    frame.union.union(candidates[j as usize]).letter_count(),
                    COVERED_LETTERS
                );
                emit(chosen.map(|i| candidates[i as usize]));
                continue;
            }

            let rest = &frame.pool[pos + 1..];
            if rest.len() < still_needed {
                break;
            }

            // Survivors must be disjoint from everything chosen so far, which
            // is the old pool intersected with the new key's neighbours.
            let pool: Vec<u32> = rest
                .iter()
                .merge_join_by(graph.neighbors(j as usize), |a, b| a.cmp(b))
                .filter_map(|e| match e {
                    EitherOrBoth::Both(&k, _) => Some(k),
                    _ => None,
                })
                .collect();

            if pool.len() >= still_needed {
                stack.push(Frame {
                    chosen,
                    depth: frame.depth + 1,
                    union: frame.union.union(candidates[j as usize]),
                    pool,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::CandidateList;

    fn keys(words: &str) -> CandidateList {
        CandidateList::new(words.split_whitespace().map(LetterKey::from_word))
    }

    fn sorted(mut found: Vec<KeyCombination>) -> Vec<KeyCombination> {
        for c in &mut found {
            c.sort();
        }
        found.sort();
        found
    }

    #[test]
    fn finds_the_single_partition() {
        let candidates = keys("abcde fghij klmno pqrst uvwxy");
        for strategy in [Strategy::Nested, Strategy::Graph] {
            let found = search_sequential(&candidates, strategy);
            assert_eq!(found.len(), 1, "{strategy:?}");
            let union = found[0].iter().fold(LetterKey::EMPTY, |u, &k| u.union(k));
            assert_eq!(union.letter_count(), 25);
            assert!(!union.contains(b'z'));
        }
    }

    #[test]
    fn finder() {
        let candidates = keys("abcde fghij klmno pqrst uvwxy zabcd");
        for strategy in [Strategy::Nested, Strategy::Graph] {
            let found = sorted(search_sequential(&candidates, strategy));
            assert_eq!(
                found,
                sorted(vec![
                    ["abcde", "fghij", "klmno", "pqrst", "uvwxy"].map(LetterKey::from_word),
                    ["fghij", "klmno", "pqrst", "uvwxy", "zabcd"].map(LetterKey::from_word),
                ])
            );
        }
    }

    #[test]
    fn fewer_than_five_keys_is_empty() {
        let candidates = keys("abcde fghij klmno pqrst");
        assert!(search_sequential(&candidates, Strategy::Nested).is_empty());
        assert!(search_sequential(&candidates, Strategy::Graph).is_empty());
        assert!(search_sequential(&keys(""), Strategy::Nested).is_empty());
        assert!(search_sequential(&keys(""), Strategy::Graph).is_empty());
    }

    #[test]
    fn overlapping_keys_never_combine() {
        // "uvwxa" overlaps "abcde"; only the "uvwxy" completion survives.
        let candidates = keys("abcde fghij klmno pqrst uvwxy uvwxa");
        let a = LetterKey::from_word("abcde");
        let b = LetterKey::from_word("uvwxa");
        for strategy in [Strategy::Nested, Strategy::Graph] {
            let found = search_sequential(&candidates, strategy);
            assert_eq!(found.len(), 1);
            for c in &found {
                assert!(!(c.contains(&a) && c.contains(&b)));
            }
        }
    }

    #[test]
    fn roots_only_report_their_own_combinations() {
        let candidates = keys("abcde fghij klmno pqrst uvwxy zabcd");
        let root = candidates
            .iter()
            .position(|&k| k == LetterKey::from_word("abcde"))
            .unwrap();
        let mut found = Vec::new();
        search_root_nested(&candidates, root, &mut |c| found.push(c));
        for c in &found {
            assert_eq!(c[0], candidates[root]);
            assert!(c.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn adjacency_graph_edges_point_forward() {
        let candidates = keys("abcde fghij efghi klmno");
        let graph = AdjacencyGraph::build(&candidates);
        assert_eq!(graph.node_count(), 4);
        for i in 0..candidates.len() {
            for &j in graph.neighbors(i) {
                assert!(j as usize > i);
                assert!(candidates[i].is_disjoint(candidates[j as usize]));
            }
        }
        // abcde-fghij, abcde-klmno, fghij-klmno, efghi-klmno
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn strategies_agree_on_overlapping_partitions() {
        let candidates = keys(
            "abcde fghij klmno pqrst uvwxy bcdef ghijk lmnop qrstu vwxyz \
             acegi bdfhj kmoqs lnprt uwyza vxzbd",
        );
        let nested = sorted(search_sequential(&candidates, Strategy::Nested));
        let graph = sorted(search_sequential(&candidates, Strategy::Graph));
        assert!(!nested.is_empty());
        assert_eq!(nested, graph);
    }
}
