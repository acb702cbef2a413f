//! Loading layer: reference jurisdiction tables and validation config from disk.

mod error;
pub use error::StoreError;

mod reference;
pub use reference::{load_config, load_jurisdictions, parse_jurisdictions};
