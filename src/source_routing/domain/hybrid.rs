use crate::shared::Result;
use serde::Serialize;

/// Which manifest layout the hybrid resolver should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetFormat {
    Conda,
    Pip,
}

/// One dependency entry in a conda environment description: either a plain
/// package name or the nested `pip:` sub-list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CondaDependency {
    Package(String),
    PipSection { pip: Vec<String> },
}

/// A conda `environment.yml`-shaped environment description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CondaEnvironmentSpec {
    pub name: String,
    pub channels: Vec<String>,
    pub dependencies: Vec<CondaDependency>,
}

impl CondaEnvironmentSpec {
    /// Renders the spec as environment.yml-style YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml_ng::to_string(self)
            .map_err(|e| anyhow::anyhow!("Failed to render environment spec: {}", e))
    }
}

/// Outcome of hybrid environment resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum HybridResolution {
    /// Conda environment with pip-routed packages nested under `pip:`
    CondaHybrid {
        environment: CondaEnvironmentSpec,
        conda_count: usize,
        pip_count: usize,
        recommendations: Vec<String>,
    },
    /// Flat pip-only package list
    Pip {
        packages: Vec<String>,
        recommendations: Vec<String>,
    },
}

impl HybridResolution {
    pub fn recommendations(&self) -> &[String] {
        match self {
            HybridResolution::CondaHybrid {
                recommendations, ..
            } => recommendations,
            HybridResolution::Pip {
                recommendations, ..
            } => recommendations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conda_spec_yaml_shape() {
        let spec = CondaEnvironmentSpec {
            name: "hybrid-env".to_string(),
            channels: vec!["conda-forge".to_string(), "defaults".to_string()],
            dependencies: vec![
                CondaDependency::Package("numpy".to_string()),
                CondaDependency::PipSection {
                    pip: vec!["flask==2.0.1".to_string()],
                },
            ],
        };
        let yaml = spec.to_yaml().unwrap();

        assert!(yaml.contains("name: hybrid-env"));
        assert!(yaml.contains("conda-forge"));
        assert!(yaml.contains("- numpy"));
        assert!(yaml.contains("pip:"));
        assert!(yaml.contains("flask==2.0.1"));
    }

    #[test]
    fn test_resolution_serializes_with_format_tag() {
        let resolution = HybridResolution::Pip {
            packages: vec!["requests".to_string()],
            recommendations: vec![],
        };
        let json = serde_json::to_string(&resolution).unwrap();
        assert!(json.contains("\"format\":\"pip\""));
    }

    #[test]
    fn test_recommendations_accessor() {
        let resolution = HybridResolution::Pip {
            packages: vec![],
            recommendations: vec!["advice".to_string()],
        };
        assert_eq!(resolution.recommendations(), &["advice".to_string()]);
    }
}
