use std::collections::{HashMap, HashSet};

/// Packages that benefit from conda's precompiled binary distribution.
const DEFAULT_PREFER_CONDA: &[&str] = &[
    "numpy",
    "scipy",
    "pandas",
    "matplotlib",
    "scikit-learn",
    "tensorflow",
    "pytorch",
    "opencv",
    "pillow",
    "numba",
    "jupyterlab",
    "jupyter",
    "ipython",
    "spyder",
];

/// Packages that should stay with pip.
const DEFAULT_PREFER_PIP: &[&str] = &[
    "flask",
    "django",
    "fastapi",
    "requests",
    "click",
    "rich",
    "pydantic",
    "sqlalchemy",
    "alembic",
    "celery",
];

/// Known pip → conda name differences.
const DEFAULT_CONDA_REMAP: &[(&str, &str)] = &[
    ("opencv-python", "opencv"),
    ("pillow", "pillow"),
    ("scikit-learn", "scikit-learn"),
    ("tensorflow", "tensorflow"),
    ("pytorch", "pytorch"),
    ("beautifulsoup4", "beautifulsoup4"),
    ("pyyaml", "pyyaml"),
    ("msgpack", "msgpack-python"),
    ("pyqt5", "pyqt"),
];

/// Static routing tables consumed by the source-affinity resolver.
///
/// Immutable configuration data, constructed once and injected so tests
/// can substitute their own contents. Keys are case-folded bare names.
#[derive(Debug, Clone)]
pub struct RoutingTables {
    prefer_conda: HashSet<String>,
    prefer_pip: HashSet<String>,
    conda_remap: HashMap<String, String>,
}

impl RoutingTables {
    pub fn new(
        prefer_conda: HashSet<String>,
        prefer_pip: HashSet<String>,
        conda_remap: HashMap<String, String>,
    ) -> Self {
        Self {
            prefer_conda,
            prefer_pip,
            conda_remap,
        }
    }

    pub fn empty() -> Self {
        Self {
            prefer_conda: HashSet::new(),
            prefer_pip: HashSet::new(),
            conda_remap: HashMap::new(),
        }
    }

    pub fn prefers_conda(&self, bare_name: &str) -> bool {
        self.prefer_conda.contains(bare_name)
    }

    pub fn prefers_pip(&self, bare_name: &str) -> bool {
        self.prefer_pip.contains(bare_name)
    }

    /// The conda channel's name for a pip package, defaulting to the bare
    /// name when no explicit remap entry exists.
    pub fn conda_name_for<'a>(&'a self, bare_name: &'a str) -> &'a str {
        self.conda_remap
            .get(bare_name)
            .map(String::as_str)
            .unwrap_or(bare_name)
    }

    /// Extends the preference sets and remap table, case-folding keys.
    pub fn extend(
        &mut self,
        prefer_conda: impl IntoIterator<Item = String>,
        prefer_pip: impl IntoIterator<Item = String>,
        conda_remap: impl IntoIterator<Item = (String, String)>,
    ) {
        self.prefer_conda
            .extend(prefer_conda.into_iter().map(|n| n.to_lowercase()));
        self.prefer_pip
            .extend(prefer_pip.into_iter().map(|n| n.to_lowercase()));
        self.conda_remap
            .extend(conda_remap.into_iter().map(|(k, v)| (k.to_lowercase(), v)));
    }
}

impl Default for RoutingTables {
    fn default() -> Self {
        Self {
            prefer_conda: DEFAULT_PREFER_CONDA.iter().map(|s| s.to_string()).collect(),
            prefer_pip: DEFAULT_PREFER_PIP.iter().map(|s| s.to_string()).collect(),
            conda_remap: DEFAULT_CONDA_REMAP
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
