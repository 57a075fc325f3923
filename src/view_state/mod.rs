//! View-only state for the fact widget.
//!
//! Rendering is a pure function of [`ViewState`]; the `ui` module reads it
//! and the `app` module is the only writer.

mod fact_view;

pub use fact_view::ViewState;
