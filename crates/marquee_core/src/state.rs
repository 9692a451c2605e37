//! Observable state held as immutable snapshots.

use std::sync::Arc;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// Process-wide state with a publish/subscribe contract.
///
/// The current value is an immutable `Arc<T>` snapshot. Writers install a new
/// snapshot and never edit the current one, so a reader holding a snapshot
/// never observes a partial update. Subscribers receive every later
/// replacement; a late subscriber only sees the latest value.
///
/// # Examples
///
/// ```
/// use marquee_core::StateCell;
///
/// let cell = StateCell::new(vec![1, 2]);
/// let before = cell.snapshot();
/// cell.update(|current| {
///     let mut next = current.clone();
///     next.push(3);
///     next
/// });
///
/// assert_eq!(*before, vec![1, 2]);
/// assert_eq!(*cell.snapshot(), vec![1, 2, 3]);
/// ```
#[derive(Debug)]
pub struct StateCell<T> {
    tx: watch::Sender<Arc<T>>,
}

impl<T> StateCell<T>
where
    T: Send + Sync + 'static,
{
    /// Create a cell holding `initial`.
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx }
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<T> {
        Arc::clone(&self.tx.borrow())
    }

    /// Receiver notified on every replacement.
    pub fn subscribe(&self) -> watch::Receiver<Arc<T>> {
        self.tx.subscribe()
    }

    /// Stream yielding the current snapshot, then each replacement.
    pub fn watch(&self) -> WatchStream<Arc<T>> {
        WatchStream::new(self.tx.subscribe())
    }

    /// Install `next` as the current snapshot.
    pub fn replace(&self, next: T) -> Arc<T> {
        let next = Arc::new(next);
        self.tx.send_replace(Arc::clone(&next));
        next
    }

    /// Derive a new snapshot from the current one and install it.
    ///
    /// The closure runs while writers are excluded, so it must not touch
    /// this cell.
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> Arc<T> {
        let mut installed = None;
        self.tx.send_modify(|current| {
            let next = Arc::new(f(current));
            *current = Arc::clone(&next);
            installed = Some(next);
        });
        installed.unwrap_or_else(|| self.snapshot())
    }
}

impl<T> Default for StateCell<T>
where
    T: Default + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}
