use serde::{Deserialize, Serialize};

/// Shared templatizer configuration passed across layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplatizerConfig {
    /// Parameter vector capacity preallocated per visitor state.
    ///
    /// States grow past this without limit; the preallocation only bounds
    /// reallocation churn for the common case.
    #[serde(default = "default_params_capacity")]
    pub params_capacity: usize,

    /// Maximum number of idle visitor states retained by the pool.
    ///
    /// Acquires beyond the bound allocate fresh states; releases beyond the
    /// bound drop the state instead of retaining it.
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle: usize,

    /// Collapse repeated references to the same table into one entry.
    ///
    /// Off by default: a table referenced in several clauses is reported
    /// once per reference, in first-visit order.
    #[serde(default)]
    pub dedup_tables: bool,
}

fn default_params_capacity() -> usize {
    64
}

fn default_pool_max_idle() -> usize {
    8
}

impl Default for TemplatizerConfig {
    fn default() -> Self {
        Self {
            params_capacity: default_params_capacity(),
            pool_max_idle: default_pool_max_idle(),
            dedup_tables: false,
        }
    }
}
