//! Topic inference
//!
//! Keyword heuristics over a problem's title/slug. Approximate by nature;
//! kept as a single pure function so every view of a problem derives the
//! same topic. First matching category wins, default "Other".

use std::sync::LazyLock;

use regex::Regex;

/// Ordered category table; earlier entries take priority
static CATEGORIES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("Linked List", r"\b(linked ?list|linked-list)\b"),
        ("Tree", r"\b(tree|binary tree|bst)\b"),
        ("Graph", r"\b(graph|dfs|bfs)\b"),
        ("Array", r"\b(array|arrays?)\b"),
        ("String", r"\b(string|strings?)\b"),
        ("DP", r"\b(dynamic programming|dp)\b"),
        ("Stack/Queue", r"\b(stack|queue|deque)\b"),
        ("Matrix", r"\b(matrix|grid)\b"),
        ("Hash / Map", r"\b(hash|map|unordered)\b"),
        ("Binary Search", r"\b(binary search|search)\b"),
        ("Two Pointers", r"\b(two ?pointers|two-pointers)\b"),
    ]
    .into_iter()
    .map(|(label, pattern)| {
        let re = Regex::new(pattern).expect("invalid topic pattern");
        (label, re)
    })
    .collect()
});

/// Fallback topic when no category matches
pub const OTHER: &str = "Other";

/// Infer a topic label from a problem's title and slug
pub fn infer_topic(title: &str, slug: &str) -> &'static str {
    let text = if title.is_empty() { slug } else { title }.to_lowercase();
    for (label, re) in CATEGORIES.iter() {
        if re.is_match(&text) {
            return label;
        }
    }
    OTHER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(infer_topic("Reverse Linked List", "reverse-linked-list"), "Linked List");
        assert_eq!(infer_topic("Binary Tree Paths", "binary-tree-paths"), "Tree");
        assert_eq!(infer_topic("Valid Parentheses Stack", ""), "Stack/Queue");
        assert_eq!(infer_topic("Spiral Matrix", "spiral-matrix"), "Matrix");
    }

    #[test]
    fn test_first_match_wins() {
        // Mentions both a tree and a graph; the tree category comes first
        assert_eq!(infer_topic("Graph Valid Tree", "graph-valid-tree"), "Tree");
    }

    #[test]
    fn test_falls_back_to_slug_then_other() {
        assert_eq!(infer_topic("", "merge-two-sorted-lists"), OTHER);
        assert_eq!(infer_topic("Pow(x, n)", "powx-n"), OTHER);
    }
}
