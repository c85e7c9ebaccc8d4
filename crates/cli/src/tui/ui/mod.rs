//! UI rendering modules.

mod form;
mod layout;
mod preview;
mod status;

pub use layout::draw;
