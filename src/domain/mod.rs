//! Core domain types shared across loaders, merger and renderer

pub mod member;

pub use member::{Flag, Member, Roster};
