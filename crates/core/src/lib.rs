pub mod case;
pub mod config;
pub mod deadline;
pub mod error;
pub mod violation;

pub use case::*;
pub use config::PolicyConfig;
pub use deadline::*;
pub use error::*;
pub use violation::*;
