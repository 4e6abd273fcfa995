/// PNG output of rendered frames.
pub mod png;
