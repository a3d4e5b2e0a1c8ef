//! Unit tests for store module
//! Synchronous delivery, failure atomicity and subscription lifetimes.

#![allow(clippy::unwrap_used)]

use std::{
    cell::RefCell,
    pin::pin,
    rc::{Rc, Weak},
    sync::Arc,
};

use futures::StreamExt;

use crate::{
    store::{ReactiveStore, Snapshot, StoreError},
    users::{Role, User, demo_users},
};

fn user(id: u32, role: Role) -> User {
    User::new(id, format!("User {id}"), format!("user{id}@example.com"), role)
}

fn ids(snapshot: &[User]) -> Vec<u32> {
    snapshot.iter().map(|user| user.id).collect()
}

/// Records the ids of every snapshot an observer receives.
fn recorder() -> (Rc<RefCell<Vec<Vec<u32>>>>, impl FnMut(&Snapshot<User>)) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |snapshot: &Snapshot<User>| {
        sink.borrow_mut().push(ids(snapshot))
    })
}

#[test]
fn seeded_store_keeps_seed_order() {
    let store = ReactiveStore::new(demo_users()).unwrap();

    assert_eq!(ids(&store.current()), vec![1, 2, 3]);
    assert_eq!(store.len(), 3);
    assert!(!store.is_empty());
}

#[test]
fn empty_store_has_no_records() {
    let store: ReactiveStore<User> = ReactiveStore::empty();

    assert!(store.is_empty());
    assert_eq!(store.current().len(), 0);
}

#[test]
fn seed_with_duplicate_ids_is_rejected() {
    let result = ReactiveStore::new(vec![user(1, Role::User), user(1, Role::Admin)]);

    assert_eq!(
        result.unwrap_err(),
        StoreError::DuplicateId {
            id: "1".to_string()
        }
    );
}

#[test]
fn add_appends_in_insertion_order() {
    let store = ReactiveStore::empty();

    store.add(user(5, Role::User)).unwrap();
    store.add(user(2, Role::Admin)).unwrap();
    store.add(user(9, Role::Moderator)).unwrap();

    assert_eq!(ids(&store.current()), vec![5, 2, 9]);
}

#[test]
fn add_publishes_a_new_snapshot() {
    let store = ReactiveStore::new(demo_users()).unwrap();
    let before = store.current();

    store.add(user(4, Role::User)).unwrap();

    let after = store.current();
    assert!(!Arc::ptr_eq(&before, &after));
    assert_eq!(ids(&before), vec![1, 2, 3]);
    assert_eq!(ids(&after), vec![1, 2, 3, 4]);
}

#[test]
fn duplicate_add_leaves_snapshot_untouched() {
    let store = ReactiveStore::new(demo_users()).unwrap();
    let (seen, callback) = recorder();
    let _subscription = store.observe(callback);
    let before = store.current();

    let error = store.add(user(2, Role::Admin)).unwrap_err();

    assert_eq!(
        error,
        StoreError::DuplicateId {
            id: "2".to_string()
        }
    );
    assert!(Arc::ptr_eq(&before, &store.current()));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn remove_drops_record_and_keeps_order() {
    let store = ReactiveStore::new(demo_users()).unwrap();

    assert!(store.remove(2).unwrap());
    assert_eq!(ids(&store.current()), vec![1, 3]);
}

#[test]
fn remove_of_absent_id_is_a_silent_no_op() {
    let store = ReactiveStore::new(demo_users()).unwrap();
    let (seen, callback) = recorder();
    let _subscription = store.observe(callback);
    let before = store.current();

    assert!(!store.remove(42).unwrap());

    assert!(Arc::ptr_eq(&before, &store.current()));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn update_replaces_in_place() {
    let store = ReactiveStore::new(demo_users()).unwrap();
    let mut promoted = store.find_by_id(2).unwrap();
    promoted.role = Role::Admin;

    store.update(promoted.clone()).unwrap();

    assert_eq!(ids(&store.current()), vec![1, 2, 3]);
    assert_eq!(store.find_by_id(2), Some(promoted));
}

#[test]
fn update_of_unknown_id_fails_without_mutation() {
    let store = ReactiveStore::new(demo_users()).unwrap();
    let (seen, callback) = recorder();
    let _subscription = store.observe(callback);
    let before = store.current();

    let error = store.update(user(7, Role::User)).unwrap_err();

    assert_eq!(
        error,
        StoreError::NotFound {
            id: "7".to_string()
        }
    );
    assert!(Arc::ptr_eq(&before, &store.current()));
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn find_by_id_reads_latest_snapshot() {
    let store = ReactiveStore::new(demo_users()).unwrap();

    assert_eq!(store.find_by_id(3).map(|user| user.role), Some(Role::Moderator));
    assert!(store.find_by_id(4).is_none());

    store.remove(3).unwrap();
    assert!(store.find_by_id(3).is_none());
}

#[test]
fn observer_receives_current_snapshot_on_subscribe() {
    let store = ReactiveStore::new(demo_users()).unwrap();
    let (seen, callback) = recorder();

    let _subscription = store.observe(callback);

    assert_eq!(*seen.borrow(), vec![vec![1, 2, 3]]);
}

#[test]
fn observer_receives_one_notification_per_mutation() {
    let store = ReactiveStore::new(vec![user(1, Role::Admin)]).unwrap();
    let (seen, callback) = recorder();
    let _subscription = store.observe(callback);

    store.add(user(2, Role::User)).unwrap();
    store.update(user(1, Role::Moderator)).unwrap();
    store.remove(1).unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![vec![1], vec![1, 2], vec![1, 2], vec![2]]
    );
}

#[test]
fn observers_run_in_subscription_order_before_mutation_returns() {
    let store = ReactiveStore::empty();
    let order = Rc::new(RefCell::new(Vec::new()));

    let first = {
        let order = Rc::clone(&order);
        store.observe(move |snapshot: &Snapshot<User>| {
            order.borrow_mut().push(("first", snapshot.len()));
        })
    };
    let second = {
        let order = Rc::clone(&order);
        store.observe(move |snapshot: &Snapshot<User>| {
            order.borrow_mut().push(("second", snapshot.len()));
        })
    };
    order.borrow_mut().clear();

    store.add(user(1, Role::User)).unwrap();

    assert_eq!(*order.borrow(), vec![("first", 1), ("second", 1)]);
    assert_eq!(store.observer_count(), 2);
    drop((first, second));
}

#[test]
fn cancelled_observer_receives_nothing_further() {
    let store = ReactiveStore::empty();
    let (seen, callback) = recorder();
    let subscription = store.observe(callback);

    store.add(user(1, Role::User)).unwrap();
    subscription.cancel();
    store.add(user(2, Role::User)).unwrap();

    assert!(!subscription.is_active());
    assert_eq!(*seen.borrow(), vec![vec![], vec![1]]);
    assert_eq!(store.observer_count(), 0);
}

#[test]
fn cancel_twice_is_a_no_op() {
    let store: ReactiveStore<User> = ReactiveStore::empty();
    let (_seen, callback) = recorder();
    let subscription = store.observe(callback);

    subscription.cancel();
    subscription.cancel();

    assert!(!subscription.is_active());
    assert_eq!(store.observer_count(), 0);
}

#[test]
fn cancelling_one_observer_keeps_the_others() {
    let store = ReactiveStore::empty();
    let (seen_a, callback_a) = recorder();
    let (seen_b, callback_b) = recorder();
    let a = store.observe(callback_a);
    let _b = store.observe(callback_b);

    a.cancel();
    store.add(user(1, Role::User)).unwrap();

    assert_eq!(seen_a.borrow().len(), 1);
    assert_eq!(*seen_b.borrow(), vec![vec![], vec![1]]);
}

#[test]
fn dropping_subscription_cancels_it() {
    let store = ReactiveStore::empty();
    let (seen, callback) = recorder();

    {
        let _subscription = store.observe(callback);
        assert_eq!(store.observer_count(), 1);
    }

    store.add(user(1, Role::User)).unwrap();
    assert_eq!(store.observer_count(), 0);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn detached_subscription_keeps_observing() {
    let store = ReactiveStore::empty();
    let (seen, callback) = recorder();

    store.observe(callback).detach();
    store.add(user(1, Role::User)).unwrap();

    assert_eq!(*seen.borrow(), vec![vec![], vec![1]]);
    assert_eq!(store.observer_count(), 1);
}

#[test]
fn subscription_outliving_store_cancels_quietly() {
    let store = ReactiveStore::new(demo_users()).unwrap();
    let (_seen, callback) = recorder();
    let subscription = store.observe(callback);

    drop(store);
    subscription.cancel();

    assert!(!subscription.is_active());
}

#[test]
fn mutation_from_observer_is_rejected() {
    let store = Rc::new(ReactiveStore::new(demo_users()).unwrap());
    let outcomes = Rc::new(RefCell::new(Vec::new()));

    let _subscription = {
        let weak: Weak<ReactiveStore<User>> = Rc::downgrade(&store);
        let outcomes = Rc::clone(&outcomes);
        store.observe(move |_: &Snapshot<User>| {
            if let Some(store) = weak.upgrade() {
                outcomes.borrow_mut().push(store.add(user(99, Role::User)));
            }
        })
    };

    store.remove(1).unwrap();

    let expected = Err(StoreError::ReentrantMutation { operation: "add" });
    assert_eq!(*outcomes.borrow(), vec![expected.clone(), expected]);
    assert_eq!(ids(&store.current()), vec![2, 3]);
    assert!(store.find_by_id(99).is_none());
}

#[test]
fn store_accepts_mutations_again_after_broadcast() {
    let store = Rc::new(ReactiveStore::empty());
    let _subscription = {
        let weak = Rc::downgrade(&store);
        store.observe(move |_: &Snapshot<User>| {
            if let Some(store) = weak.upgrade() {
                let _ = store.remove(1);
            }
        })
    };

    store.add(user(1, Role::User)).unwrap();
    store.add(user(2, Role::User)).unwrap();

    assert_eq!(ids(&store.current()), vec![1, 2]);
}

#[test]
fn observer_may_read_store_during_broadcast() {
    let store = Rc::new(ReactiveStore::empty());
    let reads = Rc::new(RefCell::new(Vec::new()));

    let _subscription = {
        let weak = Rc::downgrade(&store);
        let reads = Rc::clone(&reads);
        store.observe(move |snapshot: &Snapshot<User>| {
            if let Some(store) = weak.upgrade() {
                let current = store.current();
                reads
                    .borrow_mut()
                    .push((Arc::ptr_eq(snapshot, &current), store.find_by_id(1).is_some()));
            }
        })
    };

    store.add(user(1, Role::User)).unwrap();

    assert_eq!(*reads.borrow(), vec![(true, false), (true, true)]);
}

#[test]
fn observer_cancelled_mid_broadcast_is_skipped() {
    let store = ReactiveStore::empty();
    let victim: Rc<RefCell<Option<crate::store::Subscription>>> = Rc::new(RefCell::new(None));
    let (seen, callback) = recorder();

    let _canceller = {
        let victim = Rc::clone(&victim);
        store.observe(move |snapshot: &Snapshot<User>| {
            if !snapshot.is_empty() {
                if let Some(subscription) = victim.borrow().as_ref() {
                    subscription.cancel();
                }
            }
        })
    };
    *victim.borrow_mut() = Some(store.observe(callback));

    store.add(user(1, Role::User)).unwrap();

    assert_eq!(*seen.borrow(), vec![Vec::<u32>::new()]);
    assert_eq!(store.observer_count(), 1);
}

#[test]
fn observer_registered_mid_broadcast_sees_snapshot_once() {
    let store = Rc::new(ReactiveStore::empty());
    let (late_seen, late_callback) = recorder();
    let late_callback = Rc::new(RefCell::new(Some(late_callback)));
    let late_subscription = Rc::new(RefCell::new(None));

    let _spawner = {
        let weak = Rc::downgrade(&store);
        let late_callback = Rc::clone(&late_callback);
        let late_subscription = Rc::clone(&late_subscription);
        store.observe(move |snapshot: &Snapshot<User>| {
            if snapshot.is_empty() {
                return;
            }
            if let (Some(store), Some(callback)) =
                (weak.upgrade(), late_callback.borrow_mut().take())
            {
                *late_subscription.borrow_mut() = Some(store.observe(callback));
            }
        })
    };

    store.add(user(1, Role::User)).unwrap();
    store.add(user(2, Role::User)).unwrap();

    assert_eq!(*late_seen.borrow(), vec![vec![1], vec![1, 2]]);
}

#[tokio::test]
async fn watch_yields_current_then_latest_snapshot() {
    let store = ReactiveStore::new(demo_users()).unwrap();
    let mut stream = pin!(store.watch());

    let first = stream.next().await.unwrap();
    assert_eq!(ids(&first), vec![1, 2, 3]);

    store.add(user(4, Role::User)).unwrap();
    let second = stream.next().await.unwrap();
    assert_eq!(ids(&second), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn watch_coalesces_to_latest_snapshot() {
    let store = ReactiveStore::empty();
    let mut stream = pin!(store.watch());
    let _ = stream.next().await;

    store.add(user(1, Role::User)).unwrap();
    store.add(user(2, Role::User)).unwrap();

    let latest = stream.next().await.unwrap();
    assert_eq!(ids(&latest), vec![1, 2]);
}

#[test]
fn error_messages_name_the_id() {
    assert_eq!(
        StoreError::DuplicateId {
            id: "3".to_string()
        }
        .to_string(),
        "record with id '3' already exists"
    );
    assert_eq!(
        StoreError::NotFound {
            id: "8".to_string()
        }
        .to_string(),
        "record with id '8' not found"
    );
    assert!(
        StoreError::ReentrantMutation { operation: "update" }
            .to_string()
            .contains("update")
    );
}
