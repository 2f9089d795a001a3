//! View components for issueboard-ui.

pub mod issue_list;
pub mod main_view;

pub use main_view::MainView;
