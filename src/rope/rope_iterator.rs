use super::node::*;

///
/// Iterator that reads the code points of a rope from left to right
///
pub struct RopeChars<'a> {
    /// Subtrees that have not been visited yet, with the leftmost on top
    pub (super) remaining: Vec<&'a RopeNode>,

    /// Code points left to read from the leaf currently being visited
    pub (super) current: &'a [char],
}

impl<'a> Iterator for RopeChars<'a> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        loop {
            // Drain the current leaf first
            if let Some((&point, rest)) = self.current.split_first() {
                self.current = rest;
                return Some(point);
            }

            // Move to the next unvisited subtree, pushing children so the leftmost
            // leaf is reached before anything to its right
            match self.remaining.pop()? {
                RopeNode::Empty => { }

                RopeNode::Leaf(points) => {
                    self.current = points;
                }

                RopeNode::Branch(branch) => {
                    self.remaining.push(&branch.right);
                    self.remaining.push(&branch.left);
                }
            }
        }
    }
}
