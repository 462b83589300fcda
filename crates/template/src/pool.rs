use std::ops::{Deref, DerefMut};
use std::sync::Mutex;

use sqf_common::{MetricsRegistry, TemplatizerConfig};

use crate::state::TemplateState;

/// Bounded free list of visitor states.
///
/// Safe for concurrent use; individual states are handed out exclusively.
/// Purely a reallocation-avoidance facility, correctness-neutral: a pool
/// of size zero behaves identically, just slower.
#[derive(Debug)]
pub struct StatePool {
    idle: Mutex<Vec<TemplateState>>,
    max_idle: usize,
    params_capacity: usize,
    dedup_tables: bool,
    metrics: MetricsRegistry,
}

impl StatePool {
    /// Create a pool sized and parameterised from shared config.
    pub fn new(config: &TemplatizerConfig, metrics: MetricsRegistry) -> Self {
        Self {
            idle: Mutex::new(Vec::with_capacity(config.pool_max_idle)),
            max_idle: config.pool_max_idle,
            params_capacity: config.params_capacity,
            dedup_tables: config.dedup_tables,
            metrics,
        }
    }

    /// Hand out a cleared state, reusing an idle one when available.
    ///
    /// The guard returns the state to the pool on drop.
    pub fn acquire(&self) -> PooledState<'_> {
        let reused = {
            let mut idle = self.idle.lock().unwrap_or_else(|e| e.into_inner());
            idle.pop()
        };
        self.metrics.record_pool_acquire(reused.is_some());
        let state =
            reused.unwrap_or_else(|| TemplateState::new(self.params_capacity, self.dedup_tables));
        PooledState {
            pool: self,
            state: Some(state),
        }
    }

    fn release(&self, mut state: TemplateState) {
        state.reset();
        let mut idle = self.idle.lock().unwrap_or_else(|e| e.into_inner());
        if idle.len() < self.max_idle {
            idle.push(state);
        }
    }
}

/// RAII handle over one exclusively-held [`TemplateState`].
#[derive(Debug)]
pub struct PooledState<'a> {
    pool: &'a StatePool,
    state: Option<TemplateState>,
}

impl Deref for PooledState<'_> {
    type Target = TemplateState;

    fn deref(&self) -> &TemplateState {
        self.state.as_ref().expect("state present until drop")
    }
}

impl DerefMut for PooledState<'_> {
    fn deref_mut(&mut self) -> &mut TemplateState {
        self.state.as_mut().expect("state present until drop")
    }
}

impl Drop for PooledState<'_> {
    fn drop(&mut self) {
        if let Some(state) = self.state.take() {
            self.pool.release(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    fn pool() -> StatePool {
        StatePool::new(&TemplatizerConfig::default(), MetricsRegistry::new())
    }

    #[test]
    fn released_state_comes_back_cleared() {
        let pool = pool();
        {
            let mut state = pool.acquire();
            state.push_str("SELECT ?");
            state.push_param(Value::Int64(1));
        }
        let state = pool.acquire();
        assert_eq!(state.template(), "");
        assert!(state.params().is_empty());
    }

    #[test]
    fn idle_list_is_bounded() {
        let config = TemplatizerConfig {
            pool_max_idle: 1,
            ..TemplatizerConfig::default()
        };
        let pool = StatePool::new(&config, MetricsRegistry::new());
        let a = pool.acquire();
        let b = pool.acquire();
        drop(a);
        drop(b);
        let idle = pool.idle.lock().unwrap();
        assert_eq!(idle.len(), 1);
    }

    #[test]
    fn concurrent_acquire_release() {
        let pool = std::sync::Arc::new(pool());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let pool = std::sync::Arc::clone(&pool);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        let mut state = pool.acquire();
                        state.push_str("x");
                        assert_eq!(state.template(), "x");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
