//! Server-rendered UI components.

pub mod shoe_card;
