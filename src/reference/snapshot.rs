// ABOUTME: Shared handle over the current reference table snapshot
// ABOUTME: Readers take an Arc snapshot; hot reload swaps in a complete new table set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ReferenceSource;
use std::fmt;
use std::mem;
use std::sync::{Arc, RwLock};
use tracing::info;

/// Immutable table set shared between callers
pub type TableSnapshot = Arc<dyn ReferenceSource>;

/// Swappable holder for the active table snapshot
///
/// Tables are never mutated in place. A caller that grabbed a snapshot keeps
/// classifying against it even if [`SharedTables::replace`] runs concurrently.
pub struct SharedTables {
    current: RwLock<TableSnapshot>,
}

impl SharedTables {
    /// Wrap an initial snapshot
    #[must_use]
    pub fn new(tables: TableSnapshot) -> Self {
        Self {
            current: RwLock::new(tables),
        }
    }

    /// Current snapshot
    #[must_use]
    pub fn snapshot(&self) -> TableSnapshot {
        // A poisoned lock still holds a complete Arc
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Swap in a new snapshot, returning the previous one
    #[must_use]
    pub fn replace(&self, tables: TableSnapshot) -> TableSnapshot {
        let previous = match self.current.write() {
            Ok(mut guard) => mem::replace(&mut *guard, tables),
            Err(poisoned) => mem::replace(&mut *poisoned.into_inner(), tables),
        };
        info!("Reference table snapshot replaced");
        previous
    }
}

impl fmt::Debug for SharedTables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedTables").finish_non_exhaustive()
    }
}
