//! Configuration management for the friend graph analyzer

/// Runtime configuration for the analyzer
pub struct Config {
    /// Number of worker threads (0 = use all available cores)
    pub threads: usize,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threads: 0,
            pretty: false,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(threads: usize, pretty: bool) -> Self {
        Self { threads, pretty }
    }

    /// Worker thread count with 0 resolved to the number of cores
    pub fn worker_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            num_cpus::get()
        }
    }
}
