use super::{DependencyGraphBuilder, ExclusionSet};
use crate::ports::outbound::DistributionMetadataSource;
use crate::primary_detection::domain::{
    ClassificationResult, PackageName, PackageRecord,
};
use std::collections::BTreeSet;

/// Packages with at most this many dependents may still count as primary.
///
/// Policy constant, not derived from theory; kept tunable through
/// [`ClassifierConfig`] so the threshold can be tested independently of the
/// decision logic.
pub const MAX_DEPENDENTS_FOR_PRIMARY: usize = 2;

/// Tunable thresholds for the primary-package heuristic.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierConfig {
    /// Upper bound on dependent count for the final primary rule.
    pub max_dependents_for_primary: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            max_dependents_for_primary: MAX_DEPENDENTS_FOR_PRIMARY,
        }
    }
}

/// PrimaryClassifier decides which installed packages were deliberately
/// installed by the user.
///
/// The decision is a heuristic over the dependency graph, not a proof of
/// user intent. Rules are applied in order, first match wins:
///
/// 1. name in the common-dependency exclusion set → not primary;
/// 2. no installed package depends on it → primary;
/// 3. exactly one dependent which is itself not excluded → primary;
/// 4. otherwise primary iff the dependent count is at most
///    `max_dependents_for_primary`.
///
/// The graph is built lazily on first query and cached for the lifetime of
/// this instance.
pub struct PrimaryClassifier<M> {
    graph_builder: DependencyGraphBuilder<M>,
    exclusions: ExclusionSet,
    config: ClassifierConfig,
}

impl<M> PrimaryClassifier<M>
where
    M: DistributionMetadataSource,
{
    pub fn new(
        graph_builder: DependencyGraphBuilder<M>,
        exclusions: ExclusionSet,
        config: ClassifierConfig,
    ) -> Self {
        Self {
            graph_builder,
            exclusions,
            config,
        }
    }

    /// Whether the named package looks deliberately installed.
    ///
    /// The name is normalized before classification; a name that cannot be
    /// normalized is never primary.
    pub fn is_primary(&self, name: &str) -> bool {
        match PackageName::normalized(name) {
            Ok(name) => self.is_primary_normalized(&name),
            Err(_) => false,
        }
    }

    /// Installed packages that declare a requirement on `name`.
    ///
    /// Recomputed per query by scanning the graph's forward-edge sets.
    pub fn dependents_of(&self, name: &str) -> BTreeSet<PackageName> {
        match PackageName::normalized(name) {
            Ok(name) => self.graph_builder.graph().dependents_of(&name),
            Err(_) => BTreeSet::new(),
        }
    }

    /// Evaluates every installed package and returns the primary subset.
    ///
    /// Each passing record is enriched with its dependents set and an
    /// explicit `is_primary = true` marker. Inventory order is preserved.
    pub fn detect_primary_packages(
        &self,
        installed: &[PackageRecord],
    ) -> Vec<ClassificationResult> {
        installed
            .iter()
            .filter(|record| self.is_primary_normalized(&record.name))
            .map(|record| {
                let dependents = self.graph_builder.graph().dependents_of(&record.name);
                ClassificationResult::new(record.clone(), true, dependents)
            })
            .collect()
    }

    fn is_primary_normalized(&self, name: &PackageName) -> bool {
        if self.exclusions.contains(name) {
            return false;
        }

        let dependents = self.graph_builder.graph().dependents_of(name);

        if dependents.is_empty() {
            return true;
        }

        if dependents.len() == 1 {
            if let Some(sole_dependent) = dependents.iter().next() {
                if !self.exclusions.contains(sole_dependent) {
                    return true;
                }
            }
        }

        dependents.len() <= self.config.max_dependents_for_primary
    }
}
