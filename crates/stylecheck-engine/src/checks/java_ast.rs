//! Tree helpers shared by the tree-sitter based checks.

use tree_sitter::Node;

/// Declarations whose `body` field is a method-like body.
const METHOD_KINDS: &[&str] = &["method_declaration", "constructor_declaration"];

/// Depth-first pre-order walk.
pub fn visit<'t, F: FnMut(Node<'t>)>(node: Node<'t>, f: &mut F) {
    f(node);
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, f);
    }
}

/// Bodies of every method and constructor in the tree, nested ones included.
pub fn method_bodies(root: Node<'_>) -> Vec<Node<'_>> {
    let mut bodies = Vec::new();
    visit(root, &mut |node| {
        if METHOD_KINDS.contains(&node.kind()) {
            if let Some(body) = node.child_by_field_name("body") {
                bodies.push(body);
            }
        }
    });
    bodies
}

/// True when `inner` lies strictly inside the braces of `outer`.
pub fn strictly_inside(inner: Node<'_>, outer: Node<'_>) -> bool {
    inner.start_byte() > outer.start_byte() && inner.end_byte() < outer.end_byte()
}

/// 1-based line of a node's first character.
pub fn line_of(node: Node<'_>) -> u32 {
    node.start_position().row as u32 + 1
}

/// 1-based column of a node's first character.
pub fn column_of(node: Node<'_>) -> u32 {
    node.start_position().column as u32 + 1
}
