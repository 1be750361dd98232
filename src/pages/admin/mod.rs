//! Admin area pages, all behind the route guard.

pub mod categories;
pub mod dashboard;
pub mod post_edit;
pub mod post_list;
pub mod settings;
pub mod tags;
