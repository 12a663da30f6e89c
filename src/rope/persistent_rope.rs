use super::node::*;
use super::rope_iterator::*;

use crate::error::*;

use std::fmt;

///
/// A persistent rope over a sequence of Unicode code points
///
/// The rope is an immutable binary tree: leaves hold runs of code points, and branches
/// record how two subropes are joined. Every operation returns a new `Rope` value and
/// leaves its operands untouched, so older values stay valid after they are used to
/// derive new ones. Unmodified subtrees are shared by reference between the old and
/// new values rather than copied, which keeps edits on very large texts cheap and
/// makes cloning O(1).
///
/// Because no node is ever mutated in place, any number of threads may hold and
/// traverse the same rope, or derive new ropes from it, without coordination.
///
/// Positions are 1-based code point positions, the usual convention for a character
/// position in a document: the first code point of a non-empty rope is at position 1.
///
#[derive(Clone, Debug)]
pub struct Rope {
    /// The root node of this rope
    pub (super) root: RopeNode,
}

impl Rope {
    ///
    /// Creates a rope holding the code points of a string
    ///
    /// The result is a single leaf, counted by code point rather than by byte. An
    /// empty string produces a valid zero-length rope.
    ///
    pub fn new(text: &str) -> Rope {
        Rope {
            root: RopeNode::leaf(text)
        }
    }

    ///
    /// Returns the number of code points in this rope
    ///
    /// The length is cached on every node, so this never walks the tree.
    ///
    #[inline]
    pub fn len(&self) -> usize {
        self.root.len()
    }

    ///
    /// Returns true if this rope contains no code points
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    ///
    /// Fetches the code point at 1-based position `idx`
    ///
    /// Valid for `1 ..= len()`; any other position is a caller error and is answered
    /// with `RopeError::OutOfRange`.
    ///
    pub fn index(&self, idx: usize) -> Result<char> {
        self.root.index_at(idx)
            .ok_or(RopeError::OutOfRange { position: idx, len: self.len() })
    }

    ///
    /// Extracts `count` code points starting at 1-based position `idx`
    ///
    /// A request with `count == 0` is answered with an empty sequence regardless of
    /// `idx`. Otherwise the whole run must lie inside the rope (`idx >= 1` and
    /// `idx + count - 1 <= len()`), and a run that does not is answered with
    /// `RopeError::OutOfRange`.
    ///
    pub fn report(&self, idx: usize, count: usize) -> Result<Vec<char>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        self.check_span(idx, count)?;

        let mut out = Vec::with_capacity(count);
        self.root.report_into(idx, count, &mut out);

        Ok(out)
    }

    ///
    /// Returns the complete text stored in this rope
    ///
    pub fn to_text(&self) -> String {
        self.chars().collect()
    }

    ///
    /// Joins this rope and another rope in sequence, sharing both operands unchanged
    ///
    /// This is O(1): the result is a single new branch over the two existing trees,
    /// and neither operand is traversed or modified. Concatenating with an empty rope
    /// returns the other operand's tree as it is.
    ///
    pub fn concat(&self, other: &Rope) -> Rope {
        Rope {
            root: RopeNode::concat(self.root.clone(), other.root.clone())
        }
    }

    ///
    /// Splits this rope so that the first result holds positions `1 ..= idx` and the
    /// second result holds everything after them
    ///
    /// The boundary cases are defined rather than errors: `idx == 0` yields an empty
    /// first half and this rope as the second, and `idx >= len()` yields this rope as
    /// the first half and an empty second. Concatenating the two results always
    /// reconstructs the original text, though not necessarily the original tree
    /// shape.
    ///
    pub fn split(&self, idx: usize) -> (Rope, Rope) {
        if idx == 0 {
            return (Rope::empty(), self.clone());
        }
        if idx >= self.len() {
            return (self.clone(), Rope::empty());
        }

        let (near, far) = self.root.split_at(idx);

        (Rope { root: near }, Rope { root: far })
    }

    ///
    /// Returns a new rope with the code points of `text` inserted after 1-based
    /// position `idx`
    ///
    /// Valid for `0 ..= len()`: inserting at 0 prepends and inserting at `len()`
    /// appends. Positions beyond the end are answered with `RopeError::OutOfRange`.
    ///
    pub fn insert(&self, idx: usize, text: &str) -> Result<Rope> {
        if idx > self.len() {
            return Err(RopeError::OutOfRange { position: idx, len: self.len() });
        }

        let (near, far) = self.split(idx);

        Ok(near.concat(&Rope::new(text)).concat(&far))
    }

    ///
    /// Returns a new rope with `count` code points removed, starting at 1-based
    /// position `idx`
    ///
    /// Removing zero code points returns the rope unchanged. Otherwise the removed
    /// run must lie inside the rope, and a run that does not is answered with
    /// `RopeError::OutOfRange`.
    ///
    pub fn delete(&self, idx: usize, count: usize) -> Result<Rope> {
        if count == 0 {
            return Ok(self.clone());
        }

        self.check_span(idx, count)?;

        let (head, rest) = self.split(idx - 1);
        let (_, tail)    = rest.split(count);

        Ok(head.concat(&tail))
    }

    ///
    /// Extracts `count` code points starting at 1-based position `idx` as a rope of
    /// their own
    ///
    /// This is the range that `delete` with the same arguments would remove. A
    /// request with `count == 0` yields the empty rope; a run outside the rope is
    /// answered with `RopeError::OutOfRange`.
    ///
    pub fn substr(&self, idx: usize, count: usize) -> Result<Rope> {
        if count == 0 {
            return Ok(Rope::empty());
        }

        self.check_span(idx, count)?;

        let (_, rest) = self.split(idx - 1);
        let (mid, _)  = rest.split(count);

        Ok(mid)
    }

    ///
    /// Returns an iterator over the code points of this rope, in order
    ///
    pub fn chars(&self) -> RopeChars<'_> {
        RopeChars {
            remaining:  vec![&self.root],
            current:    &[]
        }
    }

    ///
    /// The empty rope
    ///
    fn empty() -> Rope {
        Rope {
            root: RopeNode::Empty
        }
    }

    ///
    /// Checks that the run of `count` code points starting at 1-based `idx` lies
    /// inside this rope (callers handle `count == 0` before asking)
    ///
    fn check_span(&self, idx: usize, count: usize) -> Result<()> {
        if idx == 0 {
            return Err(RopeError::OutOfRange { position: 0, len: self.len() });
        }

        match idx.checked_add(count - 1) {
            Some(end) if end <= self.len()  => Ok(()),
            _                               => Err(RopeError::OutOfRange {
                position:   idx.saturating_add(count - 1),
                len:        self.len()
            })
        }
    }
}

impl Default for Rope {
    ///
    /// The default rope is the empty rope
    ///
    fn default() -> Rope {
        Rope::empty()
    }
}

impl From<&str> for Rope {
    fn from(text: &str) -> Rope {
        Rope::new(text)
    }
}

impl From<String> for Rope {
    fn from(text: String) -> Rope {
        Rope::new(&text)
    }
}

impl fmt::Display for Rope {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        for point in self.chars() {
            write!(formatter, "{}", point)?;
        }

        Ok(())
    }
}

impl PartialEq for Rope {
    ///
    /// Ropes compare by content: two ropes holding the same code points are equal
    /// even when their trees have different shapes
    ///
    fn eq(&self, other: &Rope) -> bool {
        self.len() == other.len() && self.chars().eq(other.chars())
    }
}

impl Eq for Rope { }
