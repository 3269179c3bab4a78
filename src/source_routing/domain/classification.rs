use serde::Serialize;

/// Which install channel a package name was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceBucket {
    /// Explicitly conda-preferred (precompiled/binary channel)
    Native,
    /// Explicitly pip-preferred (source/pure-Python channel)
    Source,
    /// Not in either preference table; routed to pip by default
    Unclassified,
}

/// Routing decision for one input package specifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceClassification {
    /// The input string as given, possibly with a version constraint
    pub original: String,
    /// The conda channel's name for this package, when it differs or the
    /// package is conda-routed; `None` for pip-routed packages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conda_name: Option<String>,
    pub bucket: SourceBucket,
    /// Human-readable justification
    pub reason: String,
}

/// Aggregate result of classifying a list of package names.
///
/// `source_packages` carries both explicitly pip-preferred and
/// unclassified (default-routed) entries; the bucket on each entry keeps
/// them distinguishable. `conflicts` is reserved and currently always
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AffinityAnalysis {
    pub conda_packages: Vec<SourceClassification>,
    pub pip_packages: Vec<SourceClassification>,
    pub conflicts: Vec<SourceClassification>,
    pub recommendations: Vec<String>,
}

impl AffinityAnalysis {
    pub fn is_empty(&self) -> bool {
        self.conda_packages.is_empty() && self.pip_packages.is_empty()
    }

    pub fn total(&self) -> usize {
        self.conda_packages.len() + self.pip_packages.len()
    }
}
