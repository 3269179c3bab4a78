use crate::ports::outbound::{
    DistributionMetadata, DistributionMetadataSource, InstalledPackageProvider,
};
use crate::primary_detection::domain::{PackageName, PackageOrigin, PackageRecord};
use crate::shared::Result;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Parsed `direct_url.json`, present for packages installed from a local
/// directory or VCS checkout.
#[derive(Debug, Default, Deserialize)]
struct DirectUrl {
    #[serde(default)]
    dir_info: DirInfo,
}

#[derive(Debug, Default, Deserialize)]
struct DirInfo {
    #[serde(default)]
    editable: bool,
}

/// Fields extracted from a dist-info METADATA file.
#[derive(Debug, Default)]
struct MetadataFields {
    name: Option<String>,
    version: Option<String>,
    requires: Vec<String>,
}

/// DistInfoInventory adapter reading installed-distribution metadata
/// directly from `*.dist-info` directories in site-packages.
///
/// Serves two ports: the fallback inventory listing, and the
/// requirement-metadata source the dependency graph is built from.
#[derive(Debug, Clone)]
pub struct DistInfoInventory {
    roots: Vec<PathBuf>,
}

impl DistInfoInventory {
    /// Discovers site-packages roots from the active environment's
    /// activation variables (`VIRTUAL_ENV`, `CONDA_PREFIX`).
    pub fn discover() -> Self {
        let mut roots = Vec::new();
        for var in ["VIRTUAL_ENV", "CONDA_PREFIX"] {
            if let Some(prefix) = env::var_os(var) {
                roots.extend(site_packages_under(Path::new(&prefix)));
            }
        }
        Self { roots }
    }

    /// Uses explicit site-packages roots; the constructor tests and
    /// embedders reach for.
    pub fn with_roots(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    fn scan(&self) -> Vec<(DistributionMetadata, bool)> {
        let mut distributions = Vec::new();
        for root in &self.roots {
            let entries = match fs::read_dir(root) {
                Ok(entries) => entries,
                Err(e) => {
                    eprintln!(
                        "Warning: cannot read site-packages at {}: {}",
                        root.display(),
                        e
                    );
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();
                if !path.is_dir()
                    || !path
                        .file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.ends_with(".dist-info"))
                {
                    continue;
                }
                match read_dist_info(&path) {
                    Some(dist) => distributions.push(dist),
                    None => {
                        eprintln!(
                            "Warning: skipping unreadable dist-info at {}",
                            path.display()
                        );
                    }
                }
            }
        }

        // read_dir order is platform-dependent; sort for stable output
        distributions.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));
        distributions
    }
}

impl InstalledPackageProvider for DistInfoInventory {
    fn list_installed(&self) -> Result<Vec<PackageRecord>> {
        Ok(self
            .scan()
            .into_iter()
            .filter_map(|(dist, editable)| {
                let name = PackageName::normalized(&dist.name).ok()?;
                Some(PackageRecord::new(
                    name,
                    dist.version,
                    PackageOrigin::Pip,
                    editable,
                ))
            })
            .collect())
    }
}

impl DistributionMetadataSource for DistInfoInventory {
    fn distributions(&self) -> Result<Vec<DistributionMetadata>> {
        Ok(self.scan().into_iter().map(|(dist, _)| dist).collect())
    }
}

/// Site-packages directories under an environment prefix, unix layout:
/// `<prefix>/lib/pythonX.Y/site-packages`.
fn site_packages_under(prefix: &Path) -> Vec<PathBuf> {
    let lib = prefix.join("lib");
    let entries = match fs::read_dir(&lib) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    entries
        .flatten()
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|n| n.starts_with("python"))
        })
        .map(|entry| entry.path().join("site-packages"))
        .filter(|path| path.is_dir())
        .collect()
}

fn read_dist_info(dist_info: &Path) -> Option<(DistributionMetadata, bool)> {
    let content = fs::read_to_string(dist_info.join("METADATA")).ok()?;
    let fields = parse_metadata_headers(&content);
    let name = fields.name?;
    let version = fields.version.unwrap_or_default();
    let editable = read_editable_flag(dist_info);
    Some((
        DistributionMetadata::new(name, version, fields.requires),
        editable,
    ))
}

/// Parses the RFC 822-style header block of a METADATA file. Headers end
/// at the first blank line; the long-description body after it is ignored.
fn parse_metadata_headers(content: &str) -> MetadataFields {
    let mut fields = MetadataFields::default();
    for line in content.lines() {
        if line.trim().is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Name:") {
            fields.name = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Version:") {
            fields.version = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Requires-Dist:") {
            fields.requires.push(value.trim().to_string());
        }
    }
    fields
}

fn read_editable_flag(dist_info: &Path) -> bool {
    let path = dist_info.join("direct_url.json");
    let Ok(content) = fs::read_to_string(&path) else {
        return false;
    };
    serde_json::from_str::<DirectUrl>(&content)
        .map(|direct_url| direct_url.dir_info.editable)
        .unwrap_or(false)
}
