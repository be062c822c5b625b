pub mod failure_writer;
pub mod validation;

pub use failure_writer::FailureWriter;
pub use validation::validate;
