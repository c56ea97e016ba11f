use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::Arc;

use threadpool::ThreadPool;

use super::{Symbol, SymbolFrequency};
use crate::error::Error;
use crate::Result;

/// Counts occurrences in first-occurrence order.
struct FrequencyCounter<S> {
    positions: HashMap<S, usize>,
    frequencies: Vec<SymbolFrequency<S>>,
}

impl<S: Symbol> FrequencyCounter<S> {
    fn new() -> Self {
        Self {
            positions: HashMap::new(),
            frequencies: Vec::new(),
        }
    }

    fn add(&mut self, symbol: &S, count: usize) {
        match self.positions.get(symbol) {
            Some(&position) => self.frequencies[position].frequency += count,
            None => {
                self.positions.insert(symbol.clone(), self.frequencies.len());
                self.frequencies.push(SymbolFrequency {
                    symbol: symbol.clone(),
                    frequency: count,
                });
            }
        }
    }

    fn increment_symbol(&mut self, symbol: &S) {
        self.add(symbol, 1);
    }

    fn into_symbol_frequencies(self) -> Vec<SymbolFrequency<S>> {
        self.frequencies
    }
}

pub fn count_frequencies<S: Symbol>(symbols: &[S]) -> Vec<SymbolFrequency<S>> {
    let mut counter = FrequencyCounter::new();
    for symbol in symbols {
        counter.increment_symbol(symbol);
    }
    counter.into_symbol_frequencies()
}

/// Sums the entries of repeated symbols, keeping first-occurrence order.
pub fn merge_frequencies<S: Symbol>(
    symbols_and_frequencies: &[SymbolFrequency<S>],
) -> Vec<SymbolFrequency<S>> {
    let mut counter = FrequencyCounter::new();
    for sf in symbols_and_frequencies {
        counter.add(&sf.symbol, sf.frequency);
    }
    counter.into_symbol_frequencies()
}

/// Counts contiguous chunks on the pool and merges them in chunk order,
/// which yields the same result as [`count_frequencies`].
pub fn count_frequencies_parallel<S>(
    symbols: &[S],
    threadpool: &ThreadPool,
) -> Result<Vec<SymbolFrequency<S>>>
where
    S: Symbol + Send + Sync + 'static,
{
    let worker_count = threadpool.max_count().max(1);
    if symbols.is_empty() || worker_count == 1 {
        return Ok(count_frequencies(symbols));
    }
    let chunk_size = symbols.len().div_ceil(worker_count);
    let shared: Arc<[S]> = Arc::from(symbols);
    let chunk_count = symbols.len().div_ceil(chunk_size);
    let (sender, receiver) = mpsc::channel();

    for chunk_index in 0..chunk_count {
        let sender = sender.clone();
        let shared = Arc::clone(&shared);
        threadpool.execute(move || {
            let start = chunk_index * chunk_size;
            let end = (start + chunk_size).min(shared.len());
            let partial = count_frequencies(&shared[start..end]);
            // receiver outlives all jobs
            let _ = sender.send((chunk_index, partial));
        });
    }
    drop(sender);

    let mut partials: Vec<Option<Vec<SymbolFrequency<S>>>> = vec![None; chunk_count];
    for (chunk_index, partial) in receiver.iter() {
        partials[chunk_index] = Some(partial);
    }

    let mut counter = FrequencyCounter::new();
    for (chunk_index, partial) in partials.into_iter().enumerate() {
        let partial = partial.ok_or_else(|| {
            log::error!("Counting job for chunk {} did not report", chunk_index);
            Error::CountingJobFailed(chunk_index)
        })?;
        for sf in partial {
            counter.add(&sf.symbol, sf.frequency);
        }
    }
    log::debug!("Counted {} symbols in {} chunks", symbols.len(), chunk_count);
    Ok(counter.into_symbol_frequencies())
}

#[cfg(test)]
mod test {
    use threadpool::ThreadPool;

    use std::hash::{Hash, Hasher};

    use super::{count_frequencies, count_frequencies_parallel, merge_frequencies};
    use crate::error::Error;
    use crate::huffman::SymbolFrequency;

    #[test]
    fn test_count_frequencies_in_first_occurrence_order() {
        let symbols: Vec<char> = "abracadabra".chars().collect();
        let frequencies = count_frequencies(&symbols);
        let expected =
            [('a', 5), ('b', 2), ('r', 2), ('c', 1), ('d', 1)].map(SymbolFrequency::from);
        assert_eq!(frequencies, expected);
    }

    #[test]
    fn test_count_frequencies_of_empty_input() {
        let symbols: Vec<u8> = vec![];
        assert!(count_frequencies(&symbols).is_empty());
    }

    #[test]
    fn test_parallel_count_matches_sequential_count() {
        let text = "I love data structures, and data structures love me back. ".repeat(97);
        let symbols: Vec<char> = text.chars().collect();
        let threadpool = ThreadPool::new(4);
        let parallel = count_frequencies_parallel(&symbols, &threadpool).unwrap();
        let sequential = count_frequencies(&symbols);
        assert_eq!(parallel, sequential, "Parallel count differs from sequential count");
    }

    #[test]
    fn test_parallel_count_with_more_workers_than_symbols() {
        let symbols = vec![3u8, 1, 3];
        let threadpool = ThreadPool::new(8);
        let frequencies = count_frequencies_parallel(&symbols, &threadpool).unwrap();
        let expected = [(3u8, 2), (1, 1)].map(SymbolFrequency::from);
        assert_eq!(frequencies, expected);
    }

    #[test]
    fn test_merge_frequencies_sums_repeated_symbols() {
        let frequencies = [('a', 1), ('b', 1), ('a', 5)].map(SymbolFrequency::from);
        let merged = merge_frequencies(&frequencies);
        let expected = [('a', 6), ('b', 1)].map(SymbolFrequency::from);
        assert_eq!(merged, expected);
    }

    // hashing the poisoned value kills the worker counting it
    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Poisonable(u8);

    impl Hash for Poisonable {
        fn hash<H: Hasher>(&self, state: &mut H) {
            if self.0 == u8::MAX {
                panic!("poisoned symbol");
            }
            self.0.hash(state);
        }
    }

    #[test]
    fn test_parallel_count_reports_lost_chunk() {
        let mut symbols: Vec<Poisonable> = (0..64).map(|i| Poisonable(i % 7)).collect();
        symbols[50] = Poisonable(u8::MAX);
        let threadpool = ThreadPool::new(4);
        match count_frequencies_parallel(&symbols, &threadpool) {
            Err(Error::CountingJobFailed(chunk_index)) => assert_eq!(chunk_index, 3),
            _ => panic!("A chunk without result must not be merged silently"),
        }
    }
}
