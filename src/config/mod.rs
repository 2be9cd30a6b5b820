mod path;
mod store;
mod types;

pub use path::*;
pub use store::*;
pub use types::*;
