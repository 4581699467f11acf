//! `storefront-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no presentation
//! concerns): strongly-typed identifiers, the domain error model, and the
//! small marker traits the data model is built on.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, find_by_id};
pub use error::{DomainError, DomainResult};
pub use id::{CategoryId, ProductId, UserId};
pub use value_object::ValueObject;
