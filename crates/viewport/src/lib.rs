pub mod adapter;
pub mod memory;
pub mod style;

pub use adapter::*;
pub use memory::InMemoryViewport;
pub use style::*;
