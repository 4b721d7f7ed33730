//! Catalog domain types: artists, paintings, exhibitions, and news.

mod types;

pub use types::{Artist, Exhibition, NewsPost, Painting};
