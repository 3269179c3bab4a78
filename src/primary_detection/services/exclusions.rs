use crate::primary_detection::domain::PackageName;
use std::collections::HashSet;

/// Well-known utility packages that are almost always pulled in as
/// dependencies rather than installed deliberately.
const DEFAULT_COMMON_DEPENDENCIES: &[&str] = &[
    "pip",
    "setuptools",
    "wheel",
    "distlib",
    "packaging",
    "six",
    "certifi",
    "charset-normalizer",
    "idna",
    "urllib3",
    "requests-oauthlib",
    "pyasn1",
    "pyasn1-modules",
    "rsa",
    "cachetools",
    "google-auth",
    "pyparsing",
    "cycler",
    "kiwisolver",
    "python-dateutil",
    "pytz",
    "markupsafe",
    "itsdangerous",
    "blinker",
    "importlib-metadata",
    "zipp",
    "typing-extensions",
    "colorama",
];

/// Immutable exclusion set of common transitive dependencies.
///
/// Constructed once at classifier initialization and injected, so tests can
/// substitute their own contents.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    names: HashSet<PackageName>,
}

impl ExclusionSet {
    /// An empty set, useful for tests exercising the raw dependent rules.
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    /// Builds a set from raw names, normalizing each. Names that fail to
    /// normalize (empty after trimming) are ignored.
    pub fn from_names<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = raw
            .into_iter()
            .filter_map(|n| PackageName::normalized(n.as_ref()).ok())
            .collect();
        Self { names }
    }

    /// Adds further names on top of the current contents.
    pub fn extend<I, S>(&mut self, raw: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names
            .extend(raw.into_iter().filter_map(|n| PackageName::normalized(n.as_ref()).ok()));
    }

    pub fn contains(&self, name: &PackageName) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::from_names(DEFAULT_COMMON_DEPENDENCIES.iter().copied())
    }
}
