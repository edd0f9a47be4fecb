//! # Caching Module
//!
//! This module provides memoization for objective evaluations. Every
//! problem in this library is deterministic once constructed, so repeated
//! evaluations of the same phenome can be served from a cache; this pays
//! off for the peak landscapes, whose cost grows with the number of peaks.
//!
//! Phenomes are their own cache keys. Objectives reporting
//! `is_deterministic() == false` bypass the cache entirely, and failed
//! evaluations are never cached.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::Result;
use crate::objective::Objective;

/// A wrapper around an objective that caches evaluations in a shared map.
///
/// The cache is guarded by a mutex and shared across clones. For parallel
/// evaluation without lock contention, see [`ThreadLocalCachedObjective`].
#[derive(Debug, Clone)]
pub struct CachedObjective<O>
where
    O: Objective,
{
    /// The wrapped objective
    objective: O,
    /// The cache of objective evaluations
    cache: Arc<Mutex<HashMap<Vec<u8>, f64>>>,
}

impl<O> CachedObjective<O>
where
    O: Objective,
{
    /// Creates a new cached objective wrapping the given objective.
    pub fn new(objective: O) -> Self {
        Self {
            objective,
            cache: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Creates a new cached objective with a pre-populated cache.
    pub fn with_cache(objective: O, cache: HashMap<Vec<u8>, f64>) -> Self {
        Self {
            objective,
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Returns a reference to the wrapped objective.
    pub fn inner(&self) -> &O {
        &self.objective
    }

    /// Returns the number of cached evaluations.
    pub fn cache_size(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Clears the cache.
    pub fn clear_cache(&self) {
        self.cache.lock().unwrap().clear();
    }

    /// Returns a copy of the cache.
    pub fn get_cache(&self) -> HashMap<Vec<u8>, f64> {
        self.cache.lock().unwrap().clone()
    }
}

impl<O> Objective for CachedObjective<O>
where
    O: Objective,
{
    fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }

    fn is_deterministic(&self) -> bool {
        self.objective.is_deterministic()
    }

    fn objective_value(&self, phenome: &[u8]) -> Result<f64> {
        if !self.objective.is_deterministic() {
            return self.objective.objective_value(phenome);
        }

        let mut cache = self.cache.lock().unwrap();
        if let Some(value) = cache.get(phenome) {
            return Ok(*value);
        }

        // Not cached: evaluate, and cache only successful results.
        let value = self.objective.objective_value(phenome)?;
        cache.insert(phenome.to_vec(), value);

        Ok(value)
    }
}

/// A wrapper around an objective that keeps one cache per thread.
///
/// Designed for rayon contexts: each worker thread memoizes into its own
/// map, so no synchronization happens on the evaluation path.
#[derive(Debug)]
pub struct ThreadLocalCachedObjective<O>
where
    O: Objective,
{
    /// The wrapped objective
    objective: O,
    /// The per-thread caches of objective evaluations
    cache: Arc<thread_local::ThreadLocal<RefCell<HashMap<Vec<u8>, f64>>>>,
}

impl<O> ThreadLocalCachedObjective<O>
where
    O: Objective,
{
    /// Creates a new thread-local cached objective wrapping the given objective.
    pub fn new(objective: O) -> Self {
        Self {
            objective,
            cache: Arc::new(thread_local::ThreadLocal::new()),
        }
    }

    /// Returns a reference to the wrapped objective.
    pub fn inner(&self) -> &O {
        &self.objective
    }

    /// Returns the number of cached evaluations for the current thread.
    pub fn cache_size(&self) -> usize {
        self.cache.get().map_or(0, |cell| cell.borrow().len())
    }

    /// Clears the cache for the current thread.
    pub fn clear_cache(&self) {
        if let Some(cell) = self.cache.get() {
            cell.borrow_mut().clear();
        }
    }
}

impl<O> Objective for ThreadLocalCachedObjective<O>
where
    O: Objective,
{
    fn num_variables(&self) -> usize {
        self.objective.num_variables()
    }

    fn is_deterministic(&self) -> bool {
        self.objective.is_deterministic()
    }

    fn objective_value(&self, phenome: &[u8]) -> Result<f64> {
        if !self.objective.is_deterministic() {
            return self.objective.objective_value(phenome);
        }

        let cell = self.cache.get_or(|| RefCell::new(HashMap::new()));
        if let Some(value) = cell.borrow().get(phenome) {
            return Ok(*value);
        }

        let value = self.objective.objective_value(phenome)?;
        cell.borrow_mut().insert(phenome.to_vec(), value);

        Ok(value)
    }
}
