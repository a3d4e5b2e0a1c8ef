//! The user record kept in the application's [`ReactiveStore`](crate::store::ReactiveStore).

mod role;

pub use role::Role;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::store::Record;

/// A user account as shown in the user list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct User {
    /// Caller-assigned unique id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Access role.
    pub role: Role,
}

impl User {
    /// Creates a user from its parts.
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

impl Record for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

/// Users the store is seeded with when the API is mocked.
pub fn demo_users() -> Vec<User> {
    vec![
        User::new(1, "Ivan Ivanov", "ivan@example.com", Role::Admin),
        User::new(2, "Petr Petrov", "petr@example.com", Role::User),
        User::new(3, "Maria Sidorova", "maria@example.com", Role::Moderator),
    ]
}

/// Next free id for a new user: one past the largest id in `users`.
///
/// Id assignment is the caller's business; the store only rejects
/// duplicates.
pub fn next_user_id(users: &[User]) -> u32 {
    users.iter().map(|user| user.id).max().map_or(1, |max| max + 1)
}
