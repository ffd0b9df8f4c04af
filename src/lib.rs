//! Healthcare desert and telehealth feasibility scoring for regions.
//!
//! The [`scoring`] module holds the two scorers and their configuration;
//! [`region`] defines the input records and where they come from;
//! [`config`] loads scoring configuration from YAML; [`output`] renders
//! assessments for the command line.

pub mod config;
pub mod output;
pub mod region;
pub mod scoring;
