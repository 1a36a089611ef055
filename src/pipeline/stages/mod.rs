//! Stage implementations backed by files and content rules.

mod file;
mod filter;
mod transform;

pub use file::{FileSink, FileSource};
pub use filter::{DropAll, RedactFilter};
pub use transform::JsonWrap;
