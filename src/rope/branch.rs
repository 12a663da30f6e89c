use super::node::*;

use std::sync::*;

///
/// Represents a branch in a persistent rope
///
#[derive(Clone, PartialEq, Debug)]
pub struct RopeBranch {
    /// The left-hand side of the rope (first part of the string)
    pub (super) left: RopeNode,

    /// The right-hand side of the rope
    pub (super) right: RopeNode,

    /// The number of code points stored under the left-hand side
    pub (super) weight: usize,

    /// The total number of code points stored under this branch
    pub (super) length: usize
}

impl RopeBranch {
    ///
    /// Joins two non-empty nodes under a new branch, caching the bookkeeping that
    /// routes later lookups left or right without re-measuring the subtrees
    ///
    pub (super) fn join(left: RopeNode, right: RopeNode) -> RopeNode {
        let weight = left.len();
        let length = weight + right.len();

        RopeNode::Branch(Arc::new(RopeBranch {
            left:   left,
            right:  right,
            weight: weight,
            length: length
        }))
    }
}
