use crate::ports::outbound::DistributionMetadataSource;
use crate::primary_detection::domain::{parse_requirement, DependencyGraph, PackageName};
use std::cell::OnceCell;
use std::collections::BTreeSet;

/// DependencyGraphBuilder constructs the environment's dependency graph
/// from declared requirement metadata.
///
/// The graph is built lazily on first use and memoized for the lifetime of
/// the builder instance. Each builder owns its own cache; nothing is shared
/// across instances and nothing here is thread-safe.
pub struct DependencyGraphBuilder<M> {
    source: M,
    cache: OnceCell<DependencyGraph>,
}

impl<M> DependencyGraphBuilder<M>
where
    M: DistributionMetadataSource,
{
    pub fn new(source: M) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    /// Returns the dependency graph, building it on first call.
    ///
    /// Subsequent calls return the memoized graph without consulting the
    /// metadata source again. A source failure yields an empty graph with a
    /// warning; a single malformed requirement skips that edge only.
    pub fn graph(&self) -> &DependencyGraph {
        self.cache.get_or_init(|| self.build())
    }

    fn build(&self) -> DependencyGraph {
        let distributions = match self.source.distributions() {
            Ok(distributions) => distributions,
            Err(e) => {
                eprintln!("Warning: could not build complete dependency graph: {}", e);
                return DependencyGraph::new();
            }
        };

        let mut graph = DependencyGraph::new();
        for dist in distributions {
            let name = match PackageName::normalized(&dist.name) {
                Ok(name) => name,
                Err(e) => {
                    eprintln!("Warning: skipping distribution with unusable name: {}", e);
                    continue;
                }
            };

            let mut dependencies = BTreeSet::new();
            for specifier in &dist.requires {
                match parse_requirement(specifier) {
                    Ok(dep) => {
                        dependencies.insert(dep);
                    }
                    Err(_) => {
                        eprintln!(
                            "Warning: skipping unparsable requirement {:?} of {}",
                            specifier, name
                        );
                    }
                }
            }

            graph.insert_distribution(name, dependencies);
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::DistributionMetadata;
    use crate::shared::Result;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StubSource {
        distributions: Vec<DistributionMetadata>,
        calls: Rc<Cell<usize>>,
        fail: bool,
    }

    impl StubSource {
        fn new(distributions: Vec<DistributionMetadata>) -> (Self, Rc<Cell<usize>>) {
            let calls = Rc::new(Cell::new(0));
            (
                Self {
                    distributions,
                    calls: Rc::clone(&calls),
                    fail: false,
                },
                calls,
            )
        }

        fn failing() -> Self {
            Self {
                distributions: Vec::new(),
                calls: Rc::new(Cell::new(0)),
                fail: true,
            }
        }
    }

    impl DistributionMetadataSource for StubSource {
        fn distributions(&self) -> Result<Vec<DistributionMetadata>> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                anyhow::bail!("metadata store unavailable");
            }
            Ok(self.distributions.clone())
        }
    }

    fn dist(name: &str, requires: &[&str]) -> DistributionMetadata {
        DistributionMetadata::new(
            name.to_string(),
            "1.0".to_string(),
            requires.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn name(raw: &str) -> PackageName {
        PackageName::normalized(raw).unwrap()
    }

    #[test]
    fn test_build_creates_forward_edges() {
        let (source, _) = StubSource::new(vec![
            dist("pandas", &["numpy>=1.20", "python-dateutil"]),
            dist("numpy", &[]),
        ]);
        let builder = DependencyGraphBuilder::new(source);
        let graph = builder.graph();

        assert_eq!(graph.node_count(), 2);
        let pandas_deps = graph.dependencies_of(&name("pandas")).unwrap();
        assert!(pandas_deps.contains(&name("numpy")));
        assert!(pandas_deps.contains(&name("python-dateutil")));
        assert!(graph.dependencies_of(&name("numpy")).unwrap().is_empty());
    }

    #[test]
    fn test_build_is_memoized() {
        let (source, calls) = StubSource::new(vec![dist("numpy", &[])]);
        let builder = DependencyGraphBuilder::new(source);

        let first = builder.graph().clone();
        let second = builder.graph().clone();

        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_malformed_requirement_skips_edge_only() {
        let (source, _) = StubSource::new(vec![dist("app", &[">=1.0", "requests>=2.0"])]);
        let builder = DependencyGraphBuilder::new(source);
        let graph = builder.graph();

        let deps = graph.dependencies_of(&name("app")).unwrap();
        assert_eq!(deps.len(), 1);
        assert!(deps.contains(&name("requests")));
    }

    #[test]
    fn test_source_failure_yields_empty_graph() {
        let builder = DependencyGraphBuilder::new(StubSource::failing());
        assert!(builder.graph().is_empty());
    }

    #[test]
    fn test_names_are_normalized() {
        let (source, _) = StubSource::new(vec![dist("My_Package", &["Flask==2.0.1"])]);
        let builder = DependencyGraphBuilder::new(source);
        let graph = builder.graph();

        assert!(graph.contains(&name("my-package")));
        assert!(graph
            .dependencies_of(&name("my-package"))
            .unwrap()
            .contains(&name("flask")));
    }
}
