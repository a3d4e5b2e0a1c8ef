use std::{
    cell::{Cell, RefCell},
    collections::HashSet,
    fmt,
    rc::Rc,
    sync::Arc,
};

use futures::stream::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::{debug, trace};

use super::{Record, StoreError, Subscription};

/// An immutable, complete copy of the store's ordered collection.
///
/// Every successful mutation publishes a new `Snapshot`; a snapshot that has
/// been handed out never changes.
pub type Snapshot<T> = Arc<[T]>;

type Callback<T> = Box<dyn FnMut(&Snapshot<T>)>;

type Registry<T> = RefCell<Vec<Rc<ObserverSlot<T>>>>;

struct ObserverSlot<T> {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: RefCell<Callback<T>>,
}

impl<T> ObserverSlot<T> {
    fn deliver(&self, snapshot: &Snapshot<T>) {
        if !self.active.get() {
            return;
        }

        if let Ok(mut callback) = self.callback.try_borrow_mut() {
            callback(snapshot);
        }
    }
}

/// Marks the store as "notifying" for the lifetime of the guard and restores
/// the previous state on drop, so nested deliveries unwind correctly.
struct NotifyGuard<'a> {
    flag: &'a Cell<bool>,
    previous: bool,
}

impl<'a> NotifyGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        let previous = flag.replace(true);
        Self { flag, previous }
    }
}

impl Drop for NotifyGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(self.previous);
    }
}

/// An observable, ordered collection of records.
///
/// The store is the only owner of its collection: consumers read immutable
/// [`Snapshot`]s and change state exclusively through [`add`](Self::add),
/// [`remove`](Self::remove) and [`update`](Self::update). Each successful
/// mutation replaces the snapshot and synchronously invokes every registered
/// observer, in subscription order, before returning.
///
/// The store is single-threaded (`!Sync`). Share it between consumers on the
/// same thread with `Rc<ReactiveStore<T>>`; async consumers can follow it
/// through [`watch`](Self::watch).
pub struct ReactiveStore<T: Record + 'static> {
    current: RefCell<Snapshot<T>>,
    observers: Rc<Registry<T>>,
    next_observer_id: Cell<u64>,
    notifying: Cell<bool>,
    tx: watch::Sender<Snapshot<T>>,
}

impl<T: Record + 'static> ReactiveStore<T> {
    /// Creates a store pre-seeded with `seed`, preserving its order.
    ///
    /// # Errors
    /// * `StoreError::DuplicateId` - If two seed records share an id
    pub fn new(seed: Vec<T>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(seed.len());
        for record in &seed {
            if !seen.insert(record.id()) {
                return Err(StoreError::duplicate_id(record.id()));
            }
        }

        Ok(Self::from_snapshot(Arc::from(seed)))
    }

    /// Creates a store with no records.
    pub fn empty() -> Self {
        Self::from_snapshot(Arc::from(Vec::new()))
    }

    fn from_snapshot(snapshot: Snapshot<T>) -> Self {
        let (tx, _) = watch::channel(Arc::clone(&snapshot));

        Self {
            current: RefCell::new(snapshot),
            observers: Rc::new(RefCell::new(Vec::new())),
            next_observer_id: Cell::new(1),
            notifying: Cell::new(false),
            tx,
        }
    }

    /// Returns the latest snapshot.
    pub fn current(&self) -> Snapshot<T> {
        Arc::clone(&self.current.borrow())
    }

    /// Number of records in the latest snapshot.
    pub fn len(&self) -> usize {
        self.current.borrow().len()
    }

    /// Whether the latest snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.current.borrow().is_empty()
    }

    /// Number of observers that have not been cancelled.
    pub fn observer_count(&self) -> usize {
        self.observers.borrow().len()
    }

    /// Looks up a record by id in the latest snapshot.
    pub fn find_by_id(&self, id: T::Id) -> Option<T> {
        self.current
            .borrow()
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Registers `callback` to receive every snapshot published from now on.
    ///
    /// The callback is invoked once with the current snapshot before this
    /// method returns, then once per successful mutation. Observers run
    /// sequentially in subscription order.
    ///
    /// The returned [`Subscription`] deregisters the callback when cancelled
    /// or dropped.
    pub fn observe<F>(&self, callback: F) -> Subscription
    where
        F: FnMut(&Snapshot<T>) + 'static,
    {
        let id = self.next_observer_id.get();
        self.next_observer_id.set(id + 1);

        let active = Rc::new(Cell::new(true));
        let slot = Rc::new(ObserverSlot {
            id,
            active: Rc::clone(&active),
            callback: RefCell::new(Box::new(callback)),
        });
        self.observers.borrow_mut().push(Rc::clone(&slot));

        let registry = Rc::downgrade(&self.observers);
        let subscription = Subscription::new(id, active, move || {
            let Some(registry) = registry.upgrade() else {
                return;
            };
            // The slot is dropped only after the registry borrow ends: its
            // callback may own other subscriptions to this store.
            let removed = {
                let mut slots = registry.borrow_mut();
                slots
                    .iter()
                    .position(|slot| slot.id == id)
                    .map(|index| slots.remove(index))
            };
            drop(removed);
        });

        trace!(observer = id, "observer registered");

        let snapshot = self.current();
        let _guard = NotifyGuard::enter(&self.notifying);
        slot.deliver(&snapshot);

        subscription
    }

    /// Follows the store as an async stream.
    ///
    /// The stream yields the current snapshot immediately, then the latest
    /// snapshot whenever the store changes. A slow consumer may skip
    /// intermediate snapshots; use [`observe`](Self::observe) when every
    /// snapshot must be seen.
    pub fn watch(&self) -> impl Stream<Item = Snapshot<T>> + Send + use<T>
    where
        T: Send + Sync,
    {
        WatchStream::new(self.tx.subscribe())
    }

    /// Appends `record` after all existing records.
    ///
    /// # Errors
    /// * `StoreError::DuplicateId` - If a record with the same id exists
    /// * `StoreError::ReentrantMutation` - If called from an observer callback
    pub fn add(&self, record: T) -> Result<(), StoreError> {
        self.ensure_not_notifying("add")?;

        let next = {
            let current = self.current.borrow();
            if current.iter().any(|existing| existing.id() == record.id()) {
                return Err(StoreError::duplicate_id(record.id()));
            }

            let mut records = Vec::with_capacity(current.len() + 1);
            records.extend(current.iter().cloned());
            records.push(record);
            records
        };

        self.publish(Arc::from(next));
        Ok(())
    }

    /// Removes the record with `id`.
    ///
    /// Returns `Ok(false)` without notifying anyone when no such record
    /// exists.
    ///
    /// # Errors
    /// * `StoreError::ReentrantMutation` - If called from an observer callback
    pub fn remove(&self, id: T::Id) -> Result<bool, StoreError> {
        self.ensure_not_notifying("remove")?;

        let next: Vec<T> = {
            let current = self.current.borrow();
            if !current.iter().any(|record| record.id() == id) {
                trace!(%id, "remove of unknown id ignored");
                return Ok(false);
            }

            current
                .iter()
                .filter(|record| record.id() != id)
                .cloned()
                .collect()
        };

        self.publish(Arc::from(next));
        Ok(true)
    }

    /// Replaces the record whose id matches `record`, keeping its position.
    ///
    /// # Errors
    /// * `StoreError::NotFound` - If no record has that id
    /// * `StoreError::ReentrantMutation` - If called from an observer callback
    pub fn update(&self, record: T) -> Result<(), StoreError> {
        self.ensure_not_notifying("update")?;

        let next = {
            let current = self.current.borrow();
            let position = current
                .iter()
                .position(|existing| existing.id() == record.id())
                .ok_or_else(|| StoreError::not_found(record.id()))?;

            let mut records = current.to_vec();
            records[position] = record;
            records
        };

        self.publish(Arc::from(next));
        Ok(())
    }

    fn ensure_not_notifying(&self, operation: &'static str) -> Result<(), StoreError> {
        if self.notifying.get() {
            return Err(StoreError::ReentrantMutation { operation });
        }
        Ok(())
    }

    fn publish(&self, snapshot: Snapshot<T>) {
        self.current.replace(Arc::clone(&snapshot));
        self.tx.send_replace(Arc::clone(&snapshot));

        let observers: Vec<_> = self.observers.borrow().clone();
        debug!(
            records = snapshot.len(),
            observers = observers.len(),
            "publishing snapshot"
        );

        let _guard = NotifyGuard::enter(&self.notifying);
        for slot in &observers {
            slot.deliver(&snapshot);
        }
    }
}

impl<T: Record + 'static> Default for ReactiveStore<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Record + fmt::Debug + 'static> fmt::Debug for ReactiveStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveStore")
            .field("records", &self.current())
            .field("observers", &self.observer_count())
            .finish()
    }
}
