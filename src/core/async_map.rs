//! Fan-out/fan-in mapping.
//!
//! Every element is dispatched up front; completions are gathered by a single
//! collector that owns a fixed-size slot buffer and a completion counter.
//! Output order always follows input order, whatever order workers finish in.
//! Nothing is cancelled once dispatched: after the collector has settled,
//! late completions are dropped on the floor.

use crate::domain::ports::Worker;
use crate::utils::error::{Result, WunderError};
use std::fmt;
use std::sync::Arc;
use tokio::sync::mpsc;

type Completion<R> = (usize, std::result::Result<R, String>);

/// Completion handle for one element of an [`async_map`] call.
///
/// Completing consumes the handle, so each index is recorded at most once.
/// Dropping it without completing leaves the slot empty.
pub struct Done<R> {
    index: usize,
    tx: mpsc::UnboundedSender<Completion<R>>,
}

impl<R> Done<R> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn complete(self, value: R) {
        // the collector may already have settled with an error
        let _ = self.tx.send((self.index, Ok(value)));
    }
}

impl<R> fmt::Debug for Done<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Done").field("index", &self.index).finish()
    }
}

struct FanIn<R> {
    slots: Vec<Option<R>>,
    completed: usize,
    rx: mpsc::UnboundedReceiver<Completion<R>>,
}

impl<R> FanIn<R> {
    fn new(expected: usize) -> (mpsc::UnboundedSender<Completion<R>>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        let slots = std::iter::repeat_with(|| None).take(expected).collect();
        (
            tx,
            Self {
                slots,
                completed: 0,
                rx,
            },
        )
    }

    async fn join(mut self) -> Result<Vec<R>> {
        let expected = self.slots.len();

        while self.completed < expected {
            match self.rx.recv().await {
                Some((index, Ok(value))) => {
                    self.slots[index] = Some(value);
                    self.completed += 1;
                    tracing::debug!(index, completed = self.completed, expected, "worker completed");
                }
                Some((index, Err(message))) => {
                    tracing::warn!(index, %message, "worker failed");
                    return Err(WunderError::Worker { index, message });
                }
                None => {
                    return Err(WunderError::Incomplete {
                        completed: self.completed,
                        expected,
                    })
                }
            }
        }

        Ok(self.slots.into_iter().flatten().collect())
    }
}

/// Applies a callback-style worker to every element concurrently.
///
/// `worker(item, index, done)` is invoked for each element without waiting on
/// earlier ones; it finishes by calling [`Done::complete`], either inline or
/// later from a spawned task. Returning `Err` from `worker` itself fails the
/// whole map immediately with an error naming that index.
///
/// # Examples
///
/// ```
/// # tokio_test::block_on(async {
/// use wunderscore::core::async_map::async_map;
///
/// let doubled = async_map(vec![1, 2, 3], |n, _, done| {
///     done.complete(n * 2);
///     Ok::<_, std::convert::Infallible>(())
/// })
/// .await
/// .unwrap();
///
/// assert_eq!(doubled, vec![2, 4, 6]);
/// # });
/// ```
pub async fn async_map<T, R, E, F>(items: Vec<T>, mut worker: F) -> Result<Vec<R>>
where
    F: FnMut(T, usize, Done<R>) -> std::result::Result<(), E>,
    E: fmt::Display,
{
    let (tx, fan_in) = FanIn::new(items.len());
    tracing::debug!(count = items.len(), "async_map: dispatching workers");

    for (index, item) in items.into_iter().enumerate() {
        let done = Done {
            index,
            tx: tx.clone(),
        };
        if let Err(e) = worker(item, index, done) {
            tracing::warn!(index, error = %e, "async_map: worker failed during dispatch");
            return Err(WunderError::Worker {
                index,
                message: e.to_string(),
            });
        }
    }
    drop(tx);

    fan_in.join().await
}

/// Task-per-element variant of [`async_map`].
///
/// Each element runs on its own tokio task. The first failure to arrive is
/// returned tagged with its index; other tasks keep running detached.
pub async fn spawn_map<T, R, W>(items: Vec<T>, worker: Arc<W>) -> Result<Vec<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    W: Worker<T, R> + 'static,
{
    let (tx, fan_in) = FanIn::new(items.len());
    tracing::debug!(count = items.len(), "spawn_map: spawning tasks");

    for (index, item) in items.into_iter().enumerate() {
        let tx = tx.clone();
        let worker = Arc::clone(&worker);
        tokio::spawn(async move {
            let outcome = worker
                .work(item, index)
                .await
                .map_err(|e| format!("{e:#}"));
            let _ = tx.send((index, outcome));
        });
    }
    drop(tx);

    fan_in.join().await
}
