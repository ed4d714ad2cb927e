//! Single-user kanban board rendered in the browser with Leptos.
//!
//! Everything is held in memory for the session: four fixed columns, cards
//! created through modal forms, search and priority filtering, and pointer
//! drag-and-drop between columns behind a login gate that accepts anyone.

pub mod app;
pub mod domain;
pub mod features;
pub mod pages;

pub use app::App;
