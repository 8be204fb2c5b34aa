use crate::errors::GraphError;
use crate::collections::FxHashSet;
use super::Predecessors;

use std::hash::Hash;


/// Collect every node lying on some shortest path from `source` to `target`
/// Walks the predecessor sets back from the target; ties branch and reconverge,
/// so shared ancestors are visited once. The source ends the walk and must be
/// reached, otherwise there is no path.
/// predecessors: Predecessors<N> - tie-preserving relation produced by a solve
pub fn optimal_nodes<N>(target: &N, predecessors: &Predecessors<N>, source: &N) -> Result<FxHashSet<N>, GraphError>
where
    N: Eq + Hash + Clone,
{

    if target != source && !predecessors.contains_key(target) {
        return Err(GraphError::NoPathFound);
    }

    let mut on_path: FxHashSet<N> = FxHashSet::default();
    let mut to_visit: Vec<&N> = vec![target];

    while let Some(node) = to_visit.pop() {
        if !on_path.insert(node.clone()) || node == source {
            continue;
        }
        if let Some(parents) = predecessors.get(node) {
            to_visit.extend(parents.iter().filter(|parent| !on_path.contains(*parent)));
        }
    }

    // The walk dead-ended before reaching the source
    if !on_path.contains(source) {
        return Err(GraphError::NoPathFound);
    }

    Ok(on_path)
}


/// Construct one shortest path from the source to the target
/// Returns the ordered path as a vector of nodes from source to target,
/// following an arbitrary predecessor wherever optimal paths tie
pub fn shortest_path<N>(target: &N, predecessors: &Predecessors<N>, source: &N) -> Result<Vec<N>, GraphError>
where
    N: Eq + Hash + Clone,
{

    let mut path = vec![target.clone()];
    let mut current = target;

    // Trace back from target to source
    while current != source {
        let parent = predecessors
            .get(current)
            .and_then(|parents| parents.iter().next())
            .ok_or(GraphError::NoPathFound)?;

        // Predecessors are acyclic, a path can never outgrow the relation
        if path.len() > predecessors.len() {
            return Err(GraphError::NoPathFound);
        }

        path.push(parent.clone());
        current = parent;
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn relation(edges: Vec<(&'static str, Vec<&'static str>)>) -> Predecessors<&'static str> {
        edges
            .into_iter()
            .map(|(node, parents)| (node, parents.into_iter().collect()))
            .collect()
    }

    fn set<const K: usize>(nodes: [&'static str; K]) -> FxHashSet<&'static str> {
        nodes.into_iter().collect()
    }

    #[test]
    fn test_optimal_nodes_single_chain() {
        let predecessors = relation(vec![("B", vec!["A"]), ("C", vec!["B"]), ("D", vec!["C"])]);

        assert_eq!(optimal_nodes(&"D", &predecessors, &"A").unwrap(), set(["A", "B", "C", "D"]));
        assert_eq!(optimal_nodes(&"B", &predecessors, &"A").unwrap(), set(["A", "B"]));
    }

    #[test]
    fn test_optimal_nodes_branching_and_reconverging() {
        // A fans out to B and C, both feed D, D and X both feed E
        let predecessors = relation(vec![
            ("B", vec!["A"]),
            ("C", vec!["A"]),
            ("D", vec!["B", "C"]),
            ("X", vec!["A"]),
            ("E", vec!["D", "X"]),
            ("Y", vec!["C"]), // not on any path to E
        ]);

        assert_eq!(
            optimal_nodes(&"E", &predecessors, &"A").unwrap(),
            set(["A", "B", "C", "D", "X", "E"])
        );
    }

    #[test]
    fn test_optimal_nodes_target_is_source() {
        let predecessors = relation(vec![("B", vec!["A"])]);
        assert_eq!(optimal_nodes(&"A", &predecessors, &"A").unwrap(), set(["A"]));
    }

    #[test]
    fn test_optimal_nodes_unknown_target() {
        let predecessors = relation(vec![("B", vec!["A"])]);
        assert_eq!(optimal_nodes(&"Q", &predecessors, &"A"), Err(GraphError::NoPathFound));
    }

    #[test]
    fn test_optimal_nodes_dead_end() {
        // C leads back to B, which never reaches the source
        let predecessors = relation(vec![("C", vec!["B"])]);
        assert_eq!(optimal_nodes(&"C", &predecessors, &"A"), Err(GraphError::NoPathFound));

        // Walk ends at A, which is not the requested source
        let predecessors = relation(vec![("B", vec!["A"]), ("C", vec!["B"])]);
        assert_eq!(optimal_nodes(&"C", &predecessors, &"Z"), Err(GraphError::NoPathFound));
        assert_eq!(shortest_path(&"C", &predecessors, &"Z"), Err(GraphError::NoPathFound));
    }

    #[test]
    fn test_shortest_path_reconstruction() {
        let predecessors = relation(vec![("B", vec!["A"]), ("C", vec!["A"]), ("D", vec!["C"])]);

        assert_eq!(shortest_path(&"D", &predecessors, &"A").unwrap(), vec!["A", "C", "D"]);
        assert_eq!(shortest_path(&"B", &predecessors, &"A").unwrap(), vec!["A", "B"]);
        assert_eq!(shortest_path(&"A", &predecessors, &"A").unwrap(), vec!["A"]);
    }

    #[test]
    fn test_shortest_path_picks_one_tied_route() {
        let predecessors = relation(vec![("B", vec!["A"]), ("C", vec!["A"]), ("D", vec!["B", "C"])]);

        let path = shortest_path(&"D", &predecessors, &"A").unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], "A");
        assert!(path[1] == "B" || path[1] == "C");
        assert_eq!(path[2], "D");
    }

    #[test]
    fn test_shortest_path_dead_end() {
        // C leads back to B, which never reaches the source
        let predecessors = relation(vec![("C", vec!["B"])]);
        assert_eq!(shortest_path(&"C", &predecessors, &"A"), Err(GraphError::NoPathFound));
        assert_eq!(shortest_path(&"Z", &predecessors, &"A"), Err(GraphError::NoPathFound));
    }
}
