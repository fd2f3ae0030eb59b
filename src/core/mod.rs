pub mod cache;
pub mod mapping;
pub mod reader;
pub mod sheet_url;
pub mod sync;
pub mod transport;
pub mod writer;

pub use crate::domain::model::DomainKind;
pub use crate::domain::ports::{KeyValueStore, SheetTransport};
pub use crate::utils::error::Result;
