use super::branch::*;

use std::sync::*;

///
/// A node in a persistent rope
///
/// Nodes are immutable once built. Leaves own their code points behind an `Arc`, and a
/// branch owns its children directly, so cloning a node shares the whole subtree it
/// roots rather than copying it. `Empty` is the representable zero-length rope that the
/// structural operations hand back when a side of a split or an edit has no content.
///
#[derive(Clone, PartialEq, Debug)]
pub enum RopeNode {
    /// An empty rope node
    Empty,

    /// A leaf node holds a contiguous run of code points
    Leaf(Arc<Vec<char>>),

    /// A branch node joins two subropes at a seam
    Branch(Arc<RopeBranch>),
}

impl RopeNode {
    ///
    /// Creates a leaf node containing the code points of a string
    ///
    pub (super) fn leaf(text: &str) -> RopeNode {
        RopeNode::Leaf(Arc::new(text.chars().collect()))
    }

    ///
    /// Returns the total number of code points stored under this node
    ///
    pub (super) fn len(&self) -> usize {
        match self {
            RopeNode::Empty             => 0,
            RopeNode::Leaf(points)      => points.len(),
            RopeNode::Branch(branch)    => branch.length
        }
    }

    ///
    /// Returns the number of code points reached before crossing into the right-hand
    /// subtree, if there is one (for a leaf this is the length of the leaf itself)
    ///
    pub (super) fn weight(&self) -> usize {
        match self {
            RopeNode::Empty             => 0,
            RopeNode::Leaf(points)      => points.len(),
            RopeNode::Branch(branch)    => branch.weight
        }
    }

    ///
    /// Joins two nodes in sequence. An empty operand is elided, so the other side is
    /// shared unchanged and no branch with a zero-length child is ever built
    ///
    pub (super) fn concat(left: RopeNode, right: RopeNode) -> RopeNode {
        if left.len() == 0 {
            return right;
        }
        if right.len() == 0 {
            return left;
        }

        RopeBranch::join(left, right)
    }

    ///
    /// Fetches the code point at 1-based position `idx`, or `None` if the position is
    /// outside this node
    ///
    pub (super) fn index_at(&self, idx: usize) -> Option<char> {
        match self {
            RopeNode::Empty => None,

            RopeNode::Leaf(points) => {
                if idx == 0 {
                    None
                } else {
                    points.get(idx - 1).copied()
                }
            }

            RopeNode::Branch(branch) => {
                if idx > branch.weight {
                    // Position is past the left subtree, so descend right with the
                    // position shifted by everything the left subtree holds
                    branch.right.index_at(idx - branch.weight)
                } else {
                    branch.left.index_at(idx)
                }
            }
        }
    }

    ///
    /// Appends `count` code points starting at 1-based position `idx` to `out`
    ///
    /// Expects a validated request: `count >= 1` and `idx + count - 1 <= self.len()`.
    /// The recursion preserves this, so a leaf always fully contains the run it is
    /// asked for.
    ///
    pub (super) fn report_into(&self, idx: usize, count: usize, out: &mut Vec<char>) {
        match self {
            RopeNode::Empty => {
                debug_assert!(false, "Tried to report from an empty rope node");
            }

            RopeNode::Leaf(points) => {
                let start = idx - 1;
                out.extend_from_slice(&points[start..start + count]);
            }

            RopeNode::Branch(branch) => {
                if idx > branch.weight {
                    // The run lies entirely within the right subtree
                    branch.right.report_into(idx - branch.weight, count, out);
                } else if branch.weight >= idx + count - 1 {
                    // The run lies entirely within reach of the left subtree
                    branch.left.report_into(idx, count, out);
                } else {
                    // The run straddles the seam: read the tail of the left subtree,
                    // then the head of the right subtree
                    let from_left = branch.weight - idx + 1;

                    branch.left.report_into(idx, from_left, out);
                    branch.right.report_into(1, count - from_left, out);
                }
            }
        }
    }

    ///
    /// Splits this node so that the first result holds the initial `idx` code points
    /// and the second result holds the remainder
    ///
    /// Expects an interior split point, `0 < idx < self.len()`: callers resolve the
    /// boundary cases before recursing. Only the nodes along the path to the split
    /// point are rebuilt, and every untouched subtree is shared with the original.
    ///
    pub (super) fn split_at(&self, idx: usize) -> (RopeNode, RopeNode) {
        match self {
            RopeNode::Empty => {
                debug_assert!(false, "Tried to split an empty rope node");
                (RopeNode::Empty, RopeNode::Empty)
            }

            RopeNode::Leaf(points) => {
                // Slice the run into two new leaves; the original leaf stays intact
                // for anyone else holding it
                let near = points[..idx].to_vec();
                let far  = points[idx..].to_vec();

                (RopeNode::Leaf(Arc::new(near)), RopeNode::Leaf(Arc::new(far)))
            }

            RopeNode::Branch(branch) => {
                if idx == branch.weight {
                    // The split point falls exactly on the seam, so both halves
                    // already exist and are shared as they are
                    (branch.left.clone(), branch.right.clone())
                } else if idx > branch.weight {
                    // Split inside the right subtree. The original left subtree is
                    // reused whole and rejoined with the near part of the recursive
                    // split; the far part propagates up unchanged
                    let (near, far) = branch.right.split_at(idx - branch.weight);

                    (RopeNode::concat(branch.left.clone(), near), far)
                } else {
                    // Split inside the left subtree. The leftover tail of the left
                    // subtree is reunited with the untouched right subtree
                    let (near, far) = branch.left.split_at(idx);

                    (near, RopeNode::concat(far, branch.right.clone()))
                }
            }
        }
    }
}
