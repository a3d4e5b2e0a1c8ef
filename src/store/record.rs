use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// An item that can live inside a [`ReactiveStore`](super::ReactiveStore).
///
/// Identity is the value returned by [`Record::id`]; two live records in
/// one store never share an id.
pub trait Record: Clone {
    /// Caller-assigned identifier type.
    type Id: Copy + Eq + Hash + Debug + Display;

    /// Returns the identity of this record.
    fn id(&self) -> Self::Id;
}
