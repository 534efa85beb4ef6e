pub mod error;
pub mod grid;
pub mod group;
pub mod presence;

pub use error::{CollkitError, Result};

pub use grid::to_rows;
pub use group::add_to_collection;
pub use presence::{is_absent, is_non_empty_text, is_present};
