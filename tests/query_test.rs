//! Aggregate queries and rendering.

use ordtree::util::testing::init_test_setup;
use ordtree::{Forest, NodeId, Position, Scope, TreeResult};

/// Builds `R[A[D E] B C]` and returns (forest, r, a, b, c, d, e).
fn standard_tree() -> (Forest<&'static str>, [NodeId; 6]) {
    init_test_setup();
    let mut forest = Forest::new();
    let r = forest.new_node("R");
    let a = forest.new_node("A");
    let b = forest.new_node("B");
    let c = forest.new_node("C");
    forest.link(r, Position::End, &[a, b, c]).unwrap();

    let d = forest.new_node("D");
    let e = forest.new_node("E");
    forest.link(a, Position::End, &[d, e]).unwrap();

    (forest, [r, a, b, c, d, e])
}

// ============================================================
// Aggregate Tests
// ============================================================

#[test]
fn given_standard_tree_when_sizing_then_scope_selects_the_range() -> TreeResult<()> {
    let (forest, [_r, a, b, ..]) = standard_tree();

    assert_eq!(forest.size(a, Scope::Subtree)?, 3);
    assert_eq!(forest.size(a, Scope::Tree)?, 6);
    assert_eq!(forest.size(b, Scope::Subtree)?, 1);
    Ok(())
}

#[test]
fn given_standard_tree_when_querying_width_then_levels_are_absolute() -> TreeResult<()> {
    let (forest, [r, a, ..]) = standard_tree();

    assert_eq!(forest.width(r, 0, Scope::Tree)?, 1);
    assert_eq!(forest.width(r, 1, Scope::Tree)?, 3);
    assert_eq!(forest.width(r, 2, Scope::Tree)?, 2);
    assert_eq!(forest.width(r, 3, Scope::Tree)?, 0);
    // subtree scope still counts against absolute levels
    assert_eq!(forest.width(a, 2, Scope::Subtree)?, 2);
    assert_eq!(forest.width(a, 0, Scope::Subtree)?, 0);
    Ok(())
}

#[test]
fn given_standard_tree_when_counting_leaves_then_breadth_matches() -> TreeResult<()> {
    let (forest, [_r, a, b, ..]) = standard_tree();

    assert_eq!(forest.breadth(a, Scope::Tree)?, 4);
    assert_eq!(forest.breadth(a, Scope::Subtree)?, 2);
    assert_eq!(forest.breadth(b, Scope::Subtree)?, 1);
    Ok(())
}

#[test]
fn given_standard_tree_when_querying_degree_and_height_then_maxima_win() -> TreeResult<()> {
    let (forest, [_r, a, b, ..]) = standard_tree();

    assert_eq!(forest.max_degree(a, Scope::Tree)?, 3);
    assert_eq!(forest.max_degree(a, Scope::Subtree)?, 2);
    assert_eq!(forest.tree_height(b, Scope::Tree)?, 2);
    assert_eq!(forest.tree_height(b, Scope::Subtree)?, 0);
    Ok(())
}

#[test]
fn given_standard_tree_when_listing_leaves_then_traversal_order_holds() -> TreeResult<()> {
    let (forest, [_r, a, b, c, d, e]) = standard_tree();

    assert_eq!(forest.leaves(a, Scope::Tree)?, vec![d, e, b, c]);
    assert_eq!(forest.leaves(a, Scope::Subtree)?, vec![d, e]);
    Ok(())
}

#[test]
fn given_standard_tree_when_listing_leaf_paths_then_each_agrees_with_path() -> TreeResult<()> {
    let (forest, [r, a, b, c, d, e]) = standard_tree();

    let paths = forest.leaf_paths(r, Scope::Tree)?;
    assert_eq!(
        paths,
        vec![vec![r, a, d], vec![r, a, e], vec![r, b], vec![r, c]]
    );
    for path in &paths {
        let leaf = *path.last().unwrap();
        assert_eq!(&forest.path(r, leaf)?, path);
    }
    Ok(())
}

// ============================================================
// Rendering Tests
// ============================================================

#[test]
fn given_two_front_and_back_links_when_rendering_then_bracket_form_matches() -> TreeResult<()> {
    init_test_setup();
    let mut forest = Forest::new();
    let r = forest.new_node("R");
    let x = forest.new_node("X");
    let y = forest.new_node("Y");

    forest.link(r, Position::End, &[x])?;
    forest.link(r, Position::At(0), &[y])?;

    assert_eq!(forest.render(r)?, "R[Y X]");
    Ok(())
}

#[test]
fn given_standard_tree_when_rendering_then_nesting_is_recursive() -> TreeResult<()> {
    let (forest, [r, a, ..]) = standard_tree();

    assert_eq!(forest.render(r)?, "R[A[D E] B C]");
    assert_eq!(forest.render(a)?, "A[D E]");
    Ok(())
}

#[test]
fn given_leaf_when_rendering_then_brackets_are_omitted() -> TreeResult<()> {
    let (forest, [_r, _a, b, ..]) = standard_tree();

    assert_eq!(forest.render(b)?, "B");
    Ok(())
}

#[test]
fn given_standard_tree_when_pretty_printing_then_all_payloads_appear() -> TreeResult<()> {
    let (forest, [r, ..]) = standard_tree();

    let rendered = forest.to_tree_string(r)?.to_string();
    for payload in ["R", "A", "B", "C", "D", "E"] {
        assert!(
            rendered.contains(payload),
            "pretty output should mention {}: {}",
            payload,
            rendered
        );
    }
    Ok(())
}
