use crate::primary_detection::domain::EnvironmentKind;
use std::env;
use std::path::Path;

/// Detects the kind of Python environment the tool is running against,
/// from activation environment variables and project files in the working
/// directory.
pub fn detect_environment() -> EnvironmentKind {
    let conda = env::var_os("CONDA_DEFAULT_ENV").is_some() || env::var_os("CONDA_PREFIX").is_some();
    let venv = env::var_os("VIRTUAL_ENV").is_some();
    let pipenv = env::var_os("PIPENV_ACTIVE").is_some();
    let poetry_files = has_poetry_files(Path::new("."));
    classify(conda, venv, pipenv, poetry_files)
}

fn has_poetry_files(project_dir: &Path) -> bool {
    project_dir.join("poetry.lock").exists() || project_dir.join("pyproject.toml").exists()
}

fn classify(conda: bool, venv: bool, pipenv: bool, poetry_files: bool) -> EnvironmentKind {
    if conda {
        EnvironmentKind::Conda
    } else if venv {
        EnvironmentKind::Venv
    } else if pipenv {
        EnvironmentKind::Pipenv
    } else if poetry_files {
        EnvironmentKind::Poetry
    } else {
        EnvironmentKind::System
    }
}
