//! Flattening of the nested source shape.
//!
//! The store may return records as a recursive group tree. The tree is
//! walked iteratively with an explicit stack and an ancestor-key
//! accumulator — no parent pointers, no recursion — emitting leaves in
//! source order so the flat list preserves the store's ordering.

/// Source-shape node: either a keyed group of children or a leaf record.
pub trait Nested: Sized {
    type Leaf;

    /// Group view of this node: its key and children.
    fn group(&self) -> Option<(&str, &[Self])>;

    /// Leaf view of this node.
    fn leaf(&self) -> Option<&Self::Leaf>;
}

/// Walk `roots` depth-first in source order, calling `emit` for every leaf
/// with the ancestor key chain accumulated from the enclosing groups.
pub fn flatten<N, F>(roots: &[N], mut emit: F)
where
    N: Nested,
    F: FnMut(&[String], &N::Leaf),
{
    // (node, depth); children pushed in reverse so pops preserve order.
    let mut stack: Vec<(&N, usize)> = roots.iter().rev().map(|n| (n, 0)).collect();
    let mut path: Vec<String> = Vec::new();

    while let Some((node, depth)) = stack.pop() {
        path.truncate(depth);
        if let Some((key, children)) = node.group() {
            path.push(key.to_string());
            for child in children.iter().rev() {
                stack.push((child, depth + 1));
            }
        } else if let Some(leaf) = node.leaf() {
            emit(&path, leaf);
        }
    }
}
