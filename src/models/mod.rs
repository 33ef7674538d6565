//! Core data models for Wrench Quote
//!
//! This module contains the data structures that represent the pricing
//! domain: catalog services, their categories, and the user's selection.

pub mod category;
pub mod selection;
pub mod service;

pub use category::Category;
pub use selection::{SelectedService, Selection};
pub use service::{slugify, Service};
