use graphwalk::graph::Graph;

/// Weighted triangle: A-B=1, B-C=2, A-C=4
#[allow(dead_code)]
pub fn triangle() -> Graph {
    let mut g = Graph::new(false);
    for id in ["A", "B", "C"] {
        g.add_node(id).unwrap();
    }
    g.add_edge("A", "B", 1.0).unwrap();
    g.add_edge("B", "C", 2.0).unwrap();
    g.add_edge("A", "C", 4.0).unwrap();
    g
}

/// Six-node sparse tree
#[allow(dead_code)]
pub fn sparse_tree() -> Graph {
    let mut g = Graph::new(false);
    for id in ["A", "B", "C", "D", "E", "F"] {
        g.add_node(id).unwrap();
    }
    for (u, v, w) in [
        ("A", "B", 2.0),
        ("B", "C", 3.0),
        ("A", "D", 1.0),
        ("D", "E", 4.0),
        ("E", "F", 2.0),
    ] {
        g.add_edge(u, v, w).unwrap();
    }
    g
}

/// Complete graph on five nodes with fixed weights
#[allow(dead_code)]
pub fn complete5() -> Graph {
    let mut g = Graph::new(false);
    for id in ["A", "B", "C", "D", "E"] {
        g.add_node(id).unwrap();
    }
    for (u, v, w) in [
        ("A", "B", 4.0),
        ("A", "C", 2.0),
        ("A", "D", 7.0),
        ("A", "E", 3.0),
        ("B", "C", 5.0),
        ("B", "D", 1.0),
        ("B", "E", 6.0),
        ("C", "D", 8.0),
        ("C", "E", 9.0),
        ("D", "E", 2.0),
    ] {
        g.add_edge(u, v, w).unwrap();
    }
    g
}

/// Unit-weight graph where the shortest A-D route takes two hops
#[allow(dead_code)]
pub fn uniform_weights() -> Graph {
    let mut g = Graph::new(false);
    for id in ["A", "B", "C", "D"] {
        g.add_node(id).unwrap();
    }
    for (u, v) in [("A", "B"), ("B", "C"), ("C", "D"), ("A", "C")] {
        g.add_edge(u, v, 1.0).unwrap();
    }
    g
}

/// Directed square whose loop sums to -1
#[allow(dead_code)]
pub fn negative_cycle_square() -> Graph {
    let mut g = Graph::new(true);
    for id in ["A", "B", "C", "D"] {
        g.add_node(id).unwrap();
    }
    g.add_edge("A", "B", 1.0).unwrap();
    g.add_edge("B", "C", -4.0).unwrap();
    g.add_edge("C", "D", 1.0).unwrap();
    g.add_edge("D", "A", 1.0).unwrap();
    g
}

/// Triangle component plus a separate D-E component
#[allow(dead_code)]
pub fn two_components() -> Graph {
    let mut g = triangle();
    g.add_node("D").unwrap();
    g.add_node("E").unwrap();
    g.add_edge("D", "E", 1.0).unwrap();
    g
}
