//! Mouse interaction for the fact view.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
