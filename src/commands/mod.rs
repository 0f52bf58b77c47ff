//! Command implementations
//!
//! Each command is a thin orchestration script over the Repository
//! facade: it reads the current state, computes the desired change,
//! writes through the facade, and returns a typed outcome. No command
//! formats user-facing text — that is the view layer's job.

pub mod porcelain;
