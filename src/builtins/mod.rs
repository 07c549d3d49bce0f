pub mod cd;
pub mod jobs;
pub mod registry;
pub mod system;
