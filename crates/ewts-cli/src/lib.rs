//! Command-line consumer of the ACIP → EWTS transducer.
//!
//! All file and stream I/O lives here; the core stays pure.

pub mod commands;
