// search & derived views over the loaded catalog
// every operation here is total: "not found" comes back as data, never as an error

pub mod course;
pub mod index;
pub mod normalize;
pub mod rankings;
pub mod resolve;
pub mod session;
pub mod skills;
pub mod suggest;

pub use course::parse_course;
pub use index::{DedupMode, IndexBuilder, SchoolIndex};
pub use rankings::SortKey;
pub use resolve::resolve;
pub use session::{Session, StartMode};
pub use suggest::suggest;
