//! Table building logic.

use log::{debug, trace};
use rayon::prelude::*;
use wordfreq_types::Aggregation;

use crate::analyzer::{split_at_separators, Tokenizer};
use crate::frequency::shard::ShardedTable;
use crate::frequency::types::{FrequencyAnalyzer, FrequencyTable};

impl FrequencyAnalyzer {
    /// Tokenizes `text` and aggregates it into a complete frequency table.
    ///
    /// The strategy comes from the configuration; both produce the same table.
    #[inline(never)]
    pub fn analyze(&self, text: &str) -> FrequencyTable {
        let strategy = self.strategy_for(text);

        let table = match strategy {
            Aggregation::Parallel => {
                Self::aggregate_parallel(text, self.worker_count(), self.config.shards)
            }
            _ => Self::aggregate_sequential(text),
        };

        debug!(
            "aggregated {} bytes ({}): {} tokens, {} distinct words",
            text.len(),
            strategy,
            table.total_tokens(),
            table.len()
        );

        table
    }

    /// Single linear scan on the calling thread.
    pub(crate) fn aggregate_sequential(text: &str) -> FrequencyTable {
        let mut table = FrequencyTable::new();
        Tokenizer::new().tokenize(text, |token| table.record(token));
        table
    }

    /// Splits `text` on separators and counts the chunks on the rayon pool.
    ///
    /// Each worker pre-counts its chunk locally and then folds the partial
    /// table into the shared [`ShardedTable`]. `for_each` returns only after
    /// every chunk is merged, and only then is the table read.
    pub(crate) fn aggregate_parallel(text: &str, workers: usize, shards: usize) -> FrequencyTable {
        let chunks = split_at_separators(text, workers);
        trace!(
            "parallel aggregation: {} chunks over {} workers, {} shards",
            chunks.len(),
            workers,
            shards
        );

        let table = ShardedTable::new(shards);
        chunks.as_slice().par_iter().for_each(|range| {
            table.merge(Self::aggregate_sequential(&text[range.clone()]));
        });

        table.into_table()
    }
}
