// Candidate profiles: JSON files on disk → normalized records, recomputed on every scan.

pub mod handlers;
pub mod loader;
pub mod normalize;
