/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::PickupRequest;

/**
 * # Request Queue
 * Thread-safe FIFO of pending pickup requests.
 *
 * The queue is the only resource shared between the dispatcher and the
 * command boundary, so all operations take `&self` and are serialized by a
 * single internal mutex. Producers may push concurrently with a step in
 * progress; each operation is atomic with respect to the others and none of
 * them blocks beyond the mutex itself.
 */
pub struct RequestQueue {
    inner: Mutex<VecDeque<PickupRequest>>,
}

impl RequestQueue {
    pub fn new() -> RequestQueue {
        RequestQueue {
            inner: Mutex::new(VecDeque::new()),
        }
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Appends a request at the tail.
    pub fn push(&self, request: PickupRequest) {
        self.lock().push_back(request);
    }

    /// Removes and returns the head request, or `None` if the queue is empty.
    pub fn pop(&self) -> Option<PickupRequest> {
        self.lock().pop_front()
    }

    /// Reads the head request without removing it.
    pub fn peek(&self) -> Option<PickupRequest> {
        self.lock().front().copied()
    }

    /// Reads the request at `index` counted from the head. Used for
    /// inspection and tests only; the dispatch loop itself never indexes
    /// past the head.
    pub fn get(&self, index: usize) -> Option<PickupRequest> {
        self.lock().get(index).copied()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<PickupRequest>> {
        // Every operation is a single VecDeque call, so a lock poisoned by a
        // panicking producer still guards a structurally valid queue.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RequestQueue {
    fn default() -> RequestQueue {
        RequestQueue::new()
    }
}
