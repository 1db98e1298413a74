mod admin_wrapper;
mod metadata_source;

pub use admin_wrapper::*;
pub use metadata_source::*;
