pub mod band_code;
pub mod fir_stage;
pub mod response_chain;
pub mod channel;
pub mod station;
pub mod network;
pub mod batch;

pub use band_code::BandCodeClassifier;
pub use fir_stage::{FirStageValidator, FIR_REQUIRED_UNITS, FIR_SUM_TOLERANCE};
pub use response_chain::{ResponseChainValidator, SENSITIVITY_TOLERANCE};
pub use channel::{ChannelOutcome, ChannelValidator};
pub use station::StationValidator;
pub use network::NetworkValidator;
pub use batch::BatchValidator;
