pub mod distance;
pub mod generator;
pub mod instance_io;
pub mod plot;
pub mod report;
