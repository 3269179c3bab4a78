use super::PackageName;
use std::collections::{BTreeSet, HashMap};

/// Directed dependency graph over the installed environment.
///
/// Keys are normalized package names; values are the set of normalized
/// names the key declares a requirement on (forward edges only). Names
/// referenced only as targets need not themselves be keys: a package may
/// declare a requirement on something that is not installed, and lookups
/// must tolerate that.
///
/// Reverse lookups are computed on demand by scanning all forward sets.
/// They are not pre-indexed; callers that query dependents repeatedly for
/// the same name should cache the result themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph {
    forward: HashMap<PackageName, BTreeSet<PackageName>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a distribution and its outgoing edges.
    ///
    /// A distribution with zero requirements still gets an entry mapping to
    /// an empty set, so it stays distinguishable from an unknown package.
    pub fn insert_distribution(&mut self, name: PackageName, dependencies: BTreeSet<PackageName>) {
        self.forward.entry(name).or_default().extend(dependencies);
    }

    /// Forward edges of a package, or `None` for packages the graph has
    /// never seen as a source.
    pub fn dependencies_of(&self, name: &PackageName) -> Option<&BTreeSet<PackageName>> {
        self.forward.get(name)
    }

    /// All packages that declare an edge to `name`. Full scan of the
    /// forward-edge sets; O(nodes × avg_deps) per call.
    pub fn dependents_of(&self, name: &PackageName) -> BTreeSet<PackageName> {
        self.forward
            .iter()
            .filter(|(_, deps)| deps.contains(name))
            .map(|(pkg, _)| pkg.clone())
            .collect()
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.forward.contains_key(name)
    }

    pub fn node_count(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> PackageName {
        PackageName::normalized(raw).unwrap()
    }

    fn deps(raw: &[&str]) -> BTreeSet<PackageName> {
        raw.iter().map(|n| name(n)).collect()
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut graph = DependencyGraph::new();
        graph.insert_distribution(name("pandas"), deps(&["numpy", "python-dateutil"]));

        let pandas_deps = graph.dependencies_of(&name("pandas")).unwrap();
        assert_eq!(pandas_deps.len(), 2);
        assert!(pandas_deps.contains(&name("numpy")));
    }

    #[test]
    fn test_zero_requirement_entry_is_distinguishable() {
        let mut graph = DependencyGraph::new();
        graph.insert_distribution(name("numpy"), BTreeSet::new());

        assert!(graph.contains(&name("numpy")));
        assert!(graph.dependencies_of(&name("numpy")).unwrap().is_empty());
        assert!(!graph.contains(&name("never-installed")));
        assert!(graph.dependencies_of(&name("never-installed")).is_none());
    }

    #[test]
    fn test_dependents_of_scans_forward_sets() {
        let mut graph = DependencyGraph::new();
        graph.insert_distribution(name("pandas"), deps(&["numpy"]));
        graph.insert_distribution(name("scipy"), deps(&["numpy"]));
        graph.insert_distribution(name("requests"), deps(&["urllib3"]));

        let dependents = graph.dependents_of(&name("numpy"));
        assert_eq!(dependents, deps(&["pandas", "scipy"]));
    }

    #[test]
    fn test_dependents_of_missing_target_is_empty() {
        let mut graph = DependencyGraph::new();
        graph.insert_distribution(name("requests"), deps(&["urllib3"]));

        assert!(graph.dependents_of(&name("numpy")).is_empty());
    }

    #[test]
    fn test_dependents_of_declared_but_not_installed_target() {
        // urllib3 appears only as a target, never as a key
        let mut graph = DependencyGraph::new();
        graph.insert_distribution(name("requests"), deps(&["urllib3"]));

        assert!(!graph.contains(&name("urllib3")));
        assert_eq!(graph.dependents_of(&name("urllib3")), deps(&["requests"]));
    }

    #[test]
    fn test_duplicate_edges_are_deduplicated() {
        let mut graph = DependencyGraph::new();
        graph.insert_distribution(name("app"), deps(&["requests"]));
        graph.insert_distribution(name("app"), deps(&["requests", "click"]));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(
            graph.dependencies_of(&name("app")).unwrap(),
            &deps(&["requests", "click"])
        );
    }
}
