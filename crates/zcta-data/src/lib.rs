#![deny(unsafe_code)]

pub mod error;
pub mod paths;
pub mod source;
pub mod store;

pub use crate::error::{DataError, TableKind};
pub use crate::paths::{DATA_DIR_ENV_VAR, data_root, table_path};
pub use crate::source::{DirectorySource, MemorySource, TableSource};
pub use crate::store::{TableStore, default_store};
