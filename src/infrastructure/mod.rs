// src/infrastructure/mod.rs
//
// Infrastructure: filesystem concerns outside the domain

pub mod cover_store;

pub use cover_store::CoverStore;
