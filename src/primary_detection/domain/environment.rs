use serde::Serialize;

/// Kind of Python environment the inspection ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentKind {
    Conda,
    Venv,
    Pipenv,
    Poetry,
    System,
}

impl std::fmt::Display for EnvironmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvironmentKind::Conda => write!(f, "conda"),
            EnvironmentKind::Venv => write!(f, "venv"),
            EnvironmentKind::Pipenv => write!(f, "pipenv"),
            EnvironmentKind::Poetry => write!(f, "poetry"),
            EnvironmentKind::System => write!(f, "system"),
        }
    }
}
