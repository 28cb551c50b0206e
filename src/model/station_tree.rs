use serde::{Deserialize, Serialize};

/// Root tag a submitted document must carry before any network is inspected
pub const SCHEMA_ROOT_TAG: &str = "FDSNStationXML";

/// Channel code exempt from geometry, rate, and response checks
pub const LOG_CHANNEL_CODE: &str = "LOG";

/// Parsed metadata document: the root element plus its network entries,
/// in document order. Produced by a `DocumentParser`, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Root element tag name, compared against [`SCHEMA_ROOT_TAG`]
    #[serde(rename = "rootTag")]
    pub root_tag: String,

    /// Name of the submitted file this document came from (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Networks found at the document root
    #[serde(default)]
    pub networks: Vec<Network>,
}

impl Document {
    /// Create a new document with the standard schema root tag
    pub fn new() -> Self {
        Self {
            root_tag: SCHEMA_ROOT_TAG.to_string(),
            source: None,
            networks: Vec::new(),
        }
    }

    /// Set the originating file name
    pub fn with_source<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Append a network entry
    pub fn add_network(&mut self, network: Network) {
        self.networks.push(network);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// One network entry: code, validity epoch, and its stations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Network {
    /// Network code (1-2 alphanumeric characters)
    pub code: String,

    /// Epoch start as delivered by the parser (normalized during validation)
    pub start: String,

    /// Epoch end, open when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,

    /// Stations owned by this network, in document order
    #[serde(default)]
    pub stations: Vec<Station>,
}

impl Network {
    /// Create a new network entry
    pub fn new<S: Into<String>>(code: S, start: S) -> Self {
        Self {
            code: code.into(),
            start: start.into(),
            end: None,
            stations: Vec::new(),
        }
    }

    /// Set the epoch end
    pub fn with_end<S: Into<String>>(mut self, end: S) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Append a station
    pub fn add_station(&mut self, station: Station) {
        self.stations.push(station);
    }
}

/// One station: code, reference geometry, and its channels
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Station {
    /// Station code (1-5 alphanumeric characters)
    pub code: String,

    /// Reference latitude for all non-log channels, degrees
    pub latitude: f64,

    /// Reference longitude for all non-log channels, degrees
    pub longitude: f64,

    /// Channels owned by this station, in document order
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl Station {
    /// Create a new station
    pub fn new<S: Into<String>>(code: S, latitude: f64, longitude: f64) -> Self {
        Self {
            code: code.into(),
            latitude,
            longitude,
            channels: Vec::new(),
        }
    }

    /// Append a channel
    pub fn add_channel(&mut self, channel: Channel) {
        self.channels.push(channel);
    }
}

/// One channel: code, geometry, sample rate, and its response elements.
/// The response list length is itself a checked property (exactly one
/// element for non-log channels), so the raw element count is kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Channel {
    /// Channel code; the first character is the band code
    pub code: String,

    /// Location code, empty for the default location
    #[serde(rename = "locationCode", default)]
    pub location_code: String,

    /// Channel latitude, degrees
    pub latitude: f64,

    /// Channel longitude, degrees
    pub longitude: f64,

    /// Sampling rate, Hz
    #[serde(rename = "sampleRate")]
    pub sample_rate: f64,

    /// Response elements as found under the channel
    #[serde(default)]
    pub responses: Vec<Response>,
}

impl Channel {
    /// Create a new channel
    pub fn new<S: Into<String>>(code: S, latitude: f64, longitude: f64, sample_rate: f64) -> Self {
        Self {
            code: code.into(),
            location_code: String::new(),
            latitude,
            longitude,
            sample_rate,
            responses: Vec::new(),
        }
    }

    /// Set the location code
    pub fn with_location_code<S: Into<String>>(mut self, location_code: S) -> Self {
        self.location_code = location_code.into();
        self
    }

    /// Append a response element
    pub fn with_response(mut self, response: Response) -> Self {
        self.responses.push(response);
        self
    }

    /// True for the administrative logging channel
    pub fn is_log(&self) -> bool {
        self.code == LOG_CHANNEL_CODE
    }

    /// Leading letter of the channel code
    pub fn band_code(&self) -> Option<char> {
        self.code.chars().next()
    }

    /// Full channel identity for diagnostics (NET.STA.LOC.CHA)
    pub fn identity(&self, network_code: &str, station_code: &str) -> String {
        format!(
            "{}.{}.{}.{}",
            network_code, station_code, self.location_code, self.code
        )
    }
}

/// Instrument response: declared end-to-end sensitivity plus the ordered
/// stage chain it is cross-checked against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    /// Declared end-to-end scalar gain
    #[serde(rename = "instrumentSensitivity")]
    pub instrument_sensitivity: f64,

    /// Response stages in document order
    #[serde(default)]
    pub stages: Vec<Stage>,
}

impl Response {
    /// Create a new response with the declared sensitivity
    pub fn new(instrument_sensitivity: f64) -> Self {
        Self {
            instrument_sensitivity,
            stages: Vec::new(),
        }
    }

    /// Append a stage
    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }
}

/// One response stage: a scalar gain, optionally carrying FIR filter data
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stage {
    /// Stage gain value
    pub gain: f64,

    /// FIR filter data, when the stage is a digital filter stage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fir: Option<FirFilter>,
}

impl Stage {
    /// Create a plain gain stage
    pub fn new(gain: f64) -> Self {
        Self { gain, fir: None }
    }

    /// Attach FIR filter data
    pub fn with_fir(mut self, fir: FirFilter) -> Self {
        self.fir = Some(fir);
        self
    }
}

/// FIR coefficient listing convention
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum FirSymmetry {
    /// All coefficients listed explicitly
    None,
    /// Odd-length symmetric set, mirrored half omitted
    Odd,
    /// Even-length symmetric set, mirrored half omitted
    Even,
}

impl FirSymmetry {
    /// True when the document omits the mirrored half of the coefficients
    pub fn is_symmetric(&self) -> bool {
        !matches!(self, FirSymmetry::None)
    }
}

/// FIR filter stage data: units, symmetry convention, and the numerator
/// coefficients in document order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FirFilter {
    /// Input unit name
    #[serde(rename = "inputUnits")]
    pub input_units: String,

    /// Output unit name
    #[serde(rename = "outputUnits")]
    pub output_units: String,

    /// Coefficient listing convention
    pub symmetry: FirSymmetry,

    /// Numerator coefficients
    #[serde(default)]
    pub coefficients: Vec<f64>,
}

impl FirFilter {
    /// Create a new FIR filter description
    pub fn new<S: Into<String>>(input_units: S, output_units: S, symmetry: FirSymmetry) -> Self {
        Self {
            input_units: input_units.into(),
            output_units: output_units.into(),
            symmetry,
            coefficients: Vec::new(),
        }
    }

    /// Set the coefficient list
    pub fn with_coefficients(mut self, coefficients: Vec<f64>) -> Self {
        self.coefficients = coefficients;
        self
    }
}

/// Descriptor of a station that passed validation and is ready for staging
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StagedStation {
    /// Owning network code
    #[serde(rename = "networkCode")]
    pub network_code: String,

    /// Station code
    #[serde(rename = "stationCode")]
    pub station_code: String,

    /// True when the station is absent from the known-station registry
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

impl StagedStation {
    /// Create a staged-station descriptor
    pub fn new<S: Into<String>>(network_code: S, station_code: S, is_new: bool) -> Self {
        Self {
            network_code: network_code.into(),
            station_code: station_code.into(),
            is_new,
        }
    }
}
