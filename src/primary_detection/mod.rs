//! Primary-package detection: which installed packages were deliberately
//! chosen by the user, and which arrived as transitive dependencies.

pub mod domain;
pub mod services;
