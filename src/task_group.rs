// SPDX-FileCopyrightText: 2025 Tokenview Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Worker-limited task group with fail-fast join
//!
//! The aggregation path launches a handful of independent lookups per request
//! and needs three guarantees: a hard cap on how many run at once, a join
//! that waits for all of them, and a join that stops waiting the moment one
//! fails. [`TaskGroup`] packages exactly that on top of `tokio::spawn`, a
//! semaphore, and a `FuturesUnordered` over the join handles.
//!
//! The cap is enforced inside each spawned task (the task body waits for a
//! permit before running), so a group with more tasks than permits still
//! accepts all spawns and simply staggers execution.
//!
//! On the first failure [`TaskGroup::join_all`] returns immediately. Sibling
//! tasks are not cancelled; they finish in the background on the runtime and
//! their results are dropped with the detached join handles.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut group: TaskGroup<u64, SourceError> = TaskGroup::with_limit(3);
//! group.spawn(async { fetch_a().await });
//! group.spawn(async { fetch_b().await });
//! let results = group.join_all().await?;
//! ```

use std::future::Future;
use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinHandle};

/// A group of spawned tasks sharing a concurrency cap and a fail-fast join.
pub struct TaskGroup<T, E> {
    semaphore: Arc<Semaphore>,
    tasks: FuturesUnordered<JoinHandle<Result<T, E>>>,
}

impl<T, E> TaskGroup<T, E>
where
    T: Send + 'static,
    E: Send + From<JoinError> + 'static,
{
    /// Create a group allowing at most `limit` tasks in flight at once.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(limit)),
            tasks: FuturesUnordered::new(),
        }
    }

    /// Number of tasks spawned into the group so far.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether no tasks have been spawned.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Spawn a task into the group.
    ///
    /// The future starts executing only once a permit is available, keeping
    /// the in-flight count at or below the group's limit.
    pub fn spawn<F>(&mut self, fut: F)
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let semaphore = Arc::clone(&self.semaphore);
        self.tasks.push(tokio::spawn(async move {
            // The group never closes its semaphore, so acquisition only fails
            // if the group logic itself is broken; running unthrottled is the
            // safer degradation in that case.
            let _permit = semaphore.acquire_owned().await.ok();
            fut.await
        }));
    }

    /// Wait until every task has completed or any task has failed.
    ///
    /// Returns the successful results in completion order, or the first
    /// error observed. A panicked task surfaces through the `From<JoinError>`
    /// conversion of the error type.
    pub async fn join_all(mut self) -> Result<Vec<T>, E> {
        let mut results = Vec::with_capacity(self.tasks.len());
        while let Some(joined) = self.tasks.next().await {
            match joined {
                Ok(Ok(value)) => results.push(value),
                Ok(Err(e)) => return Err(e),
                Err(join_err) => return Err(E::from(join_err)),
            }
        }
        Ok(results)
    }
}
