
mod heap;
mod merge;
mod quick;
mod verify;

pub use heap::*;
pub use merge::*;
pub use quick::*;
pub use verify::*;
