pub mod station_tree;

pub use station_tree::{
    Channel, Document, FirFilter, FirSymmetry, Network, Response,
    StagedStation, Stage, Station, LOG_CHANNEL_CODE, SCHEMA_ROOT_TAG,
};
