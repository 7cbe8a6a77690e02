//! Write configuration for MYFT files

/// Configuration for buffered, optionally parallel file writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Capacity of the write buffer in bytes
    pub buffer_capacity: usize,
    /// Record count at which payload encoding is split across threads
    pub parallel_threshold: usize,
    /// Flush file contents to the device before returning
    pub sync: bool,
}

impl CodecConfig {
    /// Default write buffer (64KB)
    pub const DEFAULT_BUFFER_CAPACITY: usize = 64 * 1024;

    /// Default parallel encoding threshold (1M records)
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 20;

    /// Set write buffer capacity in bytes
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity.max(crate::HEADER_SIZE);
        self
    }

    /// Set the record count at which encoding goes parallel
    ///
    /// `usize::MAX` keeps encoding on the calling thread.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Call `sync_all` on the file after writing
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    /// Whether `record_count` records should be encoded in parallel
    pub fn use_parallel(&self, record_count: usize) -> bool {
        record_count >= self.parallel_threshold
    }

    /// Records per parallel encoding chunk, sized like the rayon pool
    pub fn parallel_chunk_len(&self, record_count: usize) -> usize {
        let threads = rayon::current_num_threads().max(1);
        let chunk = if record_count > self.parallel_threshold.saturating_mul(50) {
            // Very large inputs: several chunks per thread for work stealing
            record_count.div_ceil(threads * 4)
        } else {
            record_count.div_ceil(threads)
        };
        chunk.max(1)
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: Self::DEFAULT_BUFFER_CAPACITY,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
            sync: false,
        }
    }
}
