mod node;
mod branch;
mod persistent_rope;
mod rope_iterator;
mod diagnostic;

pub use self::persistent_rope::*;
pub use self::rope_iterator::*;
pub use self::diagnostic::*;
