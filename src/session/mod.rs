pub mod operator_session;

pub use operator_session::{OperatorSession, StationRegistry};
