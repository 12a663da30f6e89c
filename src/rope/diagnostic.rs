use super::node::*;
use super::persistent_rope::*;

use serde::{Serialize};

///
/// Serializable snapshot of one node in a rope tree
///
/// Written for inspecting tree shape while debugging. Branches store no content of
/// their own, so their `value` is the empty string, and absent children appear as
/// explicit nulls rather than being omitted, which keeps the shape unambiguous. The
/// snapshot is not consumed by any structural operation.
///
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct DiagnosticNode {
    /// The code points stored at this node (empty for branches)
    pub value: String,

    /// The number of code points reached before crossing into the right child
    pub weight: usize,

    /// The total number of code points stored under this node
    pub length: usize,

    /// The left child, or null when there is none
    pub left: Option<Box<DiagnosticNode>>,

    /// The right child, or null when there is none
    pub right: Option<Box<DiagnosticNode>>,
}

impl DiagnosticNode {
    ///
    /// Creates the snapshot of the subtree rooted at a node (`None` for the empty
    /// marker, matching how absent children are rendered)
    ///
    fn from_node(node: &RopeNode) -> Option<DiagnosticNode> {
        match node {
            RopeNode::Empty => None,

            RopeNode::Leaf(points) => Some(DiagnosticNode {
                value:  points.iter().collect(),
                weight: node.weight(),
                length: node.len(),
                left:   None,
                right:  None
            }),

            RopeNode::Branch(branch) => Some(DiagnosticNode {
                value:  String::new(),
                weight: branch.weight,
                length: branch.length,
                left:   DiagnosticNode::from_node(&branch.left).map(Box::new),
                right:  DiagnosticNode::from_node(&branch.right).map(Box::new)
            })
        }
    }
}

impl Rope {
    ///
    /// Renders the shape of this rope as indented JSON
    ///
    /// Every node reports its stored content, weight, length and both children, so
    /// the exact tree produced by a sequence of operations can be read back. The
    /// empty rope renders as `null`.
    ///
    pub fn to_diagnostic_tree(&self) -> String {
        let snapshot = DiagnosticNode::from_node(&self.root);

        serde_json::to_string_pretty(&snapshot)
            .unwrap_or_else(|_| String::from("null"))
    }
}
