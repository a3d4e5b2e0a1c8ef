//! Observable in-memory record store.
//!
//! A [`ReactiveStore`] holds an ordered collection of [`Record`]s and
//! publishes a fresh immutable [`Snapshot`] on every successful mutation.
//! Observers registered through [`ReactiveStore::observe`] are notified
//! synchronously, in subscription order, before the mutating call returns.

mod error;
mod record;
mod reactive_store;
mod subscription;

#[cfg(test)]
mod tests;

pub use error::StoreError;
pub use record::Record;
pub use reactive_store::{ReactiveStore, Snapshot};
pub use subscription::Subscription;
