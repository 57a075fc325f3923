//! Data models for the fact service.

mod fact;

pub use fact::Fact;
