use crate::ports::outbound::NativeToolProbe;
use crate::primary_detection::domain::strip_version_constraint;
use crate::source_routing::domain::{
    AffinityAnalysis, CondaDependency, CondaEnvironmentSpec, HybridResolution, RoutingTables,
    SourceBucket, SourceClassification, TargetFormat,
};
use crate::shared::Result;

/// Conda is suggested as the primary package manager once the conda-routed
/// count exceeds this multiple of the pip-routed count.
///
/// Policy constant with no theoretical backing; exposed so the threshold
/// can be tuned and tested independently of the classification logic.
pub const CONDA_DOMINANCE_RATIO: usize = 2;

const REASON_CONDA: &str = "Better performance/compatibility";
const REASON_PIP: &str = "Pip ecosystem package";
const REASON_DEFAULT: &str = "Default to pip";

const ADVICE_INSTALL_CONDA: &str =
    "Install conda/miniconda for better scientific package management";
const ADVICE_CONDA_PRIMARY: &str =
    "Consider using conda as primary package manager for this project";
const ADVICE_PIP_PERFORMANCE: &str =
    "Some packages might perform better with conda installation";

const HYBRID_ENV_NAME: &str = "hybrid-env";
const CONDA_CHANNELS: &[&str] = &["conda-forge", "defaults"];

/// SourceAffinityResolver routes package names between the conda and pip
/// ecosystems.
///
/// Classification of a given bare name is a pure function of the injected
/// tables: the same input always produces the same output. The only
/// environmental influence is the conda availability flag, probed once at
/// construction and folded into the advisory output.
pub struct SourceAffinityResolver {
    tables: RoutingTables,
    conda_available: bool,
}

impl SourceAffinityResolver {
    pub fn new(tables: RoutingTables, conda_available: bool) -> Self {
        Self {
            tables,
            conda_available,
        }
    }

    /// Constructs the resolver, probing conda availability once.
    pub fn with_probe<P: NativeToolProbe>(tables: RoutingTables, probe: &P) -> Self {
        Self::new(tables, probe.is_available())
    }

    pub fn conda_available(&self) -> bool {
        self.conda_available
    }

    /// Classifies each input name into a conda or pip routing decision and
    /// synthesizes aggregate recommendations.
    pub fn analyze_sources(&self, packages: &[String]) -> AffinityAnalysis {
        let mut analysis = AffinityAnalysis::default();

        for package in packages {
            let bare_name = strip_version_constraint(package).to_lowercase();

            if self.tables.prefers_conda(&bare_name) {
                let conda_name = self.tables.conda_name_for(&bare_name).to_string();
                analysis.conda_packages.push(SourceClassification {
                    original: package.clone(),
                    conda_name: Some(conda_name),
                    bucket: SourceBucket::Native,
                    reason: REASON_CONDA.to_string(),
                });
            } else if self.tables.prefers_pip(&bare_name) {
                analysis.pip_packages.push(SourceClassification {
                    original: package.clone(),
                    conda_name: None,
                    bucket: SourceBucket::Source,
                    reason: REASON_PIP.to_string(),
                });
            } else {
                analysis.pip_packages.push(SourceClassification {
                    original: package.clone(),
                    conda_name: None,
                    bucket: SourceBucket::Unclassified,
                    reason: REASON_DEFAULT.to_string(),
                });
            }
        }

        analysis.recommendations = self.synthesize_recommendations(&analysis);
        analysis
    }

    /// Resolves the input into a hybrid conda+pip environment description
    /// or a flat pip list, depending on the target format and conda
    /// availability.
    ///
    /// # Errors
    /// Only an unexpected internal fault produces an error; every expected
    /// input yields a resolution.
    pub fn resolve_hybrid_environment(
        &self,
        packages: &[String],
        target_format: TargetFormat,
    ) -> Result<HybridResolution> {
        let analysis = self.analyze_sources(packages);

        if target_format == TargetFormat::Conda && self.conda_available {
            Ok(self.build_conda_hybrid(&analysis))
        } else {
            Ok(self.build_pip_only(&analysis))
        }
    }

    fn build_conda_hybrid(&self, analysis: &AffinityAnalysis) -> HybridResolution {
        let conda_deps: Vec<String> = analysis
            .conda_packages
            .iter()
            .filter_map(|c| c.conda_name.clone())
            .collect();
        let pip_deps: Vec<String> = analysis
            .pip_packages
            .iter()
            .map(|c| c.original.clone())
            .collect();

        let mut dependencies: Vec<CondaDependency> = conda_deps
            .iter()
            .cloned()
            .map(CondaDependency::Package)
            .collect();
        if !pip_deps.is_empty() {
            dependencies.push(CondaDependency::PipSection {
                pip: pip_deps.clone(),
            });
        }

        HybridResolution::CondaHybrid {
            environment: CondaEnvironmentSpec {
                name: HYBRID_ENV_NAME.to_string(),
                channels: CONDA_CHANNELS.iter().map(|s| s.to_string()).collect(),
                dependencies,
            },
            conda_count: conda_deps.len(),
            pip_count: pip_deps.len(),
            recommendations: analysis.recommendations.clone(),
        }
    }

    fn build_pip_only(&self, analysis: &AffinityAnalysis) -> HybridResolution {
        let packages: Vec<String> = analysis
            .conda_packages
            .iter()
            .chain(analysis.pip_packages.iter())
            .map(|c| c.original.clone())
            .collect();

        let mut recommendations = analysis.recommendations.clone();
        recommendations.push(ADVICE_PIP_PERFORMANCE.to_string());

        HybridResolution::Pip {
            packages,
            recommendations,
        }
    }

    fn synthesize_recommendations(&self, analysis: &AffinityAnalysis) -> Vec<String> {
        let mut recommendations = Vec::new();

        if !analysis.conda_packages.is_empty() && !self.conda_available {
            recommendations.push(ADVICE_INSTALL_CONDA.to_string());
        }

        if analysis.conda_packages.len() > analysis.pip_packages.len() * CONDA_DOMINANCE_RATIO {
            recommendations.push(ADVICE_CONDA_PRIMARY.to_string());
        }

        recommendations
    }
}
