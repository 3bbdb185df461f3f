/// Filesystem output of per-channel event lists.
pub mod fs;
