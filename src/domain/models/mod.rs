pub mod auth;
pub mod card;
pub mod column;

pub use auth::{AuthState, Credentials};
pub use card::{Assignee, Card, CardDraft, Priority, PriorityFilter};
pub use column::{Column, ColumnId};
