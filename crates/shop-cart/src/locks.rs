//! Per-customer serialization of cart workflows.

use std::collections::HashMap;
use std::sync::{Arc, Mutex as SyncMutex, PoisonError};
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::trace;

type LockMap = HashMap<String, Arc<Mutex<()>>>;

/// One async mutex per customer, created on first use and forgotten once nobody holds or
/// waits for it.
///
/// A workflow holds its customer's guard from its first read to its last write, so two
/// workflows for the same customer never interleave while different customers proceed in
/// parallel.
#[derive(Clone, Default)]
pub struct CustomerLocks {
    // Never held across an await.
    locks: Arc<SyncMutex<LockMap>>,
}

/// Exclusive access to one customer's carts. Releasing the last guard or waiter for a
/// customer drops the customer's entry.
pub struct CustomerGuard {
    guard: Option<OwnedMutexGuard<()>>,
    customer: String,
    locks: Arc<SyncMutex<LockMap>>,
}

impl Drop for CustomerGuard {
    fn drop(&mut self) {
        // The guard owns a handle to the mutex; release it before counting handles.
        drop(self.guard.take());
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if locks
            .get(&self.customer)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.customer);
            trace!(customer = %self.customer, "Customer lock released");
        }
    }
}

impl CustomerLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `customer`'s carts.
    pub async fn acquire(&self, customer: &str) -> CustomerGuard {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(customer.to_string()).or_default().clone()
        };
        trace!(customer, "Waiting for customer lock");
        CustomerGuard {
            guard: Some(lock.lock_owned().await),
            customer: customer.to_string(),
            locks: self.locks.clone(),
        }
    }

    /// Number of customers whose lock is held or awaited.
    pub fn active(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_customer_waits() {
        let locks = CustomerLocks::new();
        let guard = locks.acquire("ana").await;

        let contender = locks.clone();
        let waiting = tokio::spawn(async move {
            let _guard = contender.acquire("ana").await;
        });

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiting.is_finished());

        drop(guard);
        waiting.await.unwrap();
    }

    #[tokio::test]
    async fn test_other_customers_proceed() {
        let locks = CustomerLocks::new();
        let _ana = locks.acquire("ana").await;

        let bo = tokio::time::timeout(Duration::from_millis(100), locks.acquire("bo")).await;
        assert!(bo.is_ok());
    }

    #[tokio::test]
    async fn test_released_customers_are_forgotten() {
        let locks = CustomerLocks::new();
        for customer in ["ana", "bo", "cy"] {
            drop(locks.acquire(customer).await);
        }
        assert_eq!(locks.active(), 0);

        let held = locks.acquire("ana").await;
        drop(locks.acquire("bo").await);
        assert_eq!(locks.active(), 1);
        drop(held);
        assert_eq!(locks.active(), 0);
    }

    #[tokio::test]
    async fn test_entry_survives_while_someone_waits() {
        let locks = CustomerLocks::new();
        let first = locks.acquire("ana").await;

        let contender = locks.clone();
        let (tx, rx) = tokio::sync::oneshot::channel();
        let waiting = tokio::spawn(async move {
            let guard = contender.acquire("ana").await;
            rx.await.unwrap();
            drop(guard);
        });
        tokio::time::sleep(Duration::from_millis(20)).await;

        drop(first);
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(locks.active(), 1);

        tx.send(()).unwrap();
        waiting.await.unwrap();
        assert_eq!(locks.active(), 0);
    }
}
