#![forbid(unsafe_code)]
mod assessment;
mod batch;
mod calculator;
mod continent;
pub mod csv;
mod emission_factors;
mod error;
mod model;
mod report;

pub use assessment::*;
pub use batch::*;
pub use calculator::*;
pub use continent::*;
pub use emission_factors::*;
pub use error::*;
pub use model::*;
pub use report::*;
