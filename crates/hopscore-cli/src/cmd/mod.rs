pub mod path;
pub mod samples;
pub mod scores;
