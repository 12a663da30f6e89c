//!
//! `persistent_rope` is a persistent implementation of the rope data structure.
//!
//! A rope represents a long string as a binary tree: leaves hold runs of Unicode code
//! points, and branches join two subropes together. Concatenation, splitting, indexed
//! lookup and range extraction all work without copying the whole text, which makes
//! ropes suitable for manipulating very large documents.
//!
//! This implementation is persistent:
//!
//!  * Every operation returns a new rope value and never mutates an existing one, so
//!    older ropes remain valid and usable after they are used to derive new ones.
//!  * New values share every unmodified subtree with the values they were derived
//!    from, instead of copying; cloning a rope is O(1).
//!  * Because shared subtrees are read-only for their entire lifetime, ropes can be
//!    handed to any number of threads and traversed concurrently without locking.
//!
//! Positions throughout the API are 1-based code point positions, the usual
//! convention for a character position in a document.
//!
//! ## Examples
//!
//! Splitting and rejoining a rope
//!
//! ```
//! use persistent_rope::*;
//!
//! let rope = Rope::new("Hello, ").concat(&Rope::new("world"));
//! assert_eq!(rope.len(), 12);
//! assert_eq!(rope.to_text(), "Hello, world");
//!
//! let (left, right) = rope.split(5);
//! assert_eq!(left.to_text(), "Hello");
//! assert_eq!(right.to_text(), ", world");
//!
//! // The original rope is untouched by the split
//! assert_eq!(rope.to_text(), "Hello, world");
//! ```
//!
//! Editing by code point position
//!
//! ```
//! use persistent_rope::*;
//!
//! let rope = Rope::new("abcdef");
//!
//! assert_eq!(rope.insert(3, "xxx")?.to_text(), "abcxxxdef");
//! assert_eq!(rope.delete(3, 2)?.to_text(), "abef");
//! assert_eq!(rope.substr(3, 2)?.to_text(), "cd");
//! # Ok::<(), RopeError>(())
//! ```

pub mod error;
pub mod rope;

pub use crate::error::*;
pub use crate::rope::*;
