//! egui widgets: panels, the two map views, the detail screen, and the
//! embedded image assets. Everything here draws from [`crate::state`] and
//! never touches the catalog mutably.

pub mod detail;
pub mod images;
pub mod map;
pub mod panels;
