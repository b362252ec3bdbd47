#![forbid(unsafe_code)]

//! The evaluation engine and its host-facing contracts

mod content;
mod decision;
mod evaluator;

pub use content::ContentQuery;
pub use decision::Decision;
pub use evaluator::PublishGate;
