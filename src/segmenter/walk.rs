use libxml::tree::Node;

/// Document-order walk over the element stream below a scope node: next
/// element sibling if there is one, otherwise the next element sibling of
/// the nearest ancestor that has one. Never ascends past the scope.
///
/// Yields the start node first, then whatever follows it in flattened
/// order. Restartable from any node by constructing a fresh instance.
#[derive(Clone)]
pub struct FlattenedSiblings {
    scope: Node,
    cursor: Option<Node>,
}

impl FlattenedSiblings {
    pub fn new(scope: &Node, start: &Node) -> Self {
        Self {
            scope: scope.clone(),
            cursor: Some(start.clone()),
        }
    }

    fn next_in_scope(&self, node: &Node) -> Option<Node> {
        if let Some(sibling) = node.get_next_element_sibling() {
            return Some(sibling);
        }

        let mut current = node.clone();
        while let Some(parent) = current.get_parent() {
            if parent == self.scope {
                break;
            }

            if let Some(sibling) = parent.get_next_element_sibling() {
                return Some(sibling);
            }

            current = parent;
        }

        None
    }
}

impl Iterator for FlattenedSiblings {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let current = self.cursor.take()?;
        self.cursor = self.next_in_scope(&current);
        Some(current)
    }
}
