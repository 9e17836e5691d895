//! Domain layer: scan records, vulnerability groups and the pure services
//! that group, merge and annotate them.
pub mod domain;
pub mod services;
