//! Source routing: for a candidate package name, whether the conda
//! channel (precompiled binaries) or pip (source/pure-Python) is the
//! better install source.

pub mod domain;
pub mod services;
