//! Bounded, closable hand-off queue between the run controller and the
//! worker pool.
//!
//! Built on a tokio mpsc channel: the channel's capacity gives the bounded
//! `put`, and dropping the sole sender is the close signal. Once closed,
//! `get` keeps returning buffered items until the queue is drained and only
//! then reports closed, so no item enqueued before `close` is ever lost.
//! The receiver sits behind an async mutex so any number of workers can
//! consume from the same queue.

use std::sync::Mutex as StdMutex;

use tokio::sync::{mpsc, Mutex};

pub struct WorkQueue<T> {
    tx: StdMutex<Option<mpsc::Sender<T>>>,
    rx: Mutex<mpsc::Receiver<T>>,
}

impl<T> WorkQueue<T> {
    /// Create a queue buffering at most `capacity` items.
    ///
    /// `capacity` must be at least 1.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = mpsc::channel(capacity);
        Self {
            tx: StdMutex::new(Some(tx)),
            rx: Mutex::new(rx),
        }
    }

    /// Enqueue one item, waiting while the buffer is full.
    ///
    /// Returns the item back as `Err` if the queue has been closed.
    pub async fn put(&self, item: T) -> Result<(), T> {
        let tx = match self.tx.lock().expect("queue sender lock poisoned").as_ref() {
            Some(tx) => tx.clone(),
            None => return Err(item),
        };
        tx.send(item).await.map_err(|err| err.0)
    }

    /// Dequeue the next item, waiting until one is available.
    ///
    /// Returns `None` once the queue is closed *and* empty; buffered items
    /// are always handed out before the closed indication.
    pub async fn get(&self) -> Option<T> {
        self.rx.lock().await.recv().await
    }

    /// Signal that no further items will be produced. Idempotent.
    pub fn close(&self) {
        self.tx.lock().expect("queue sender lock poisoned").take();
    }

    pub fn is_closed(&self) -> bool {
        self.tx.lock().expect("queue sender lock poisoned").is_none()
    }
}
