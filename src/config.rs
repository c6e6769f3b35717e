use std::path::PathBuf;

use clap::Parser;

use crate::data::loader::LoadOptions;
use crate::data::model::Schema;

/// Monthly mean total sunspot number file published by SILSO.
pub const DEFAULT_DATA_FILE: &str = "SN_m_tot_V2.0.csv";

/// Latest SOHO/HMI continuum image of the sun.
pub const SUN_IMAGE_URL: &str = "https://soho.nascom.nasa.gov/data/realtime/hmi_igr/1024/latest.jpg";

// Initial control values.
pub const DEFAULT_YEAR_RANGE: (i32, i32) = (1900, 2000);
pub const YEAR_STEP: i32 = 5;
pub const DEFAULT_SMOOTHING: usize = 5;
pub const MAX_SMOOTHING: usize = 24;
pub const DEFAULT_CYCLE_LENGTH: u32 = 11;
pub const CYCLE_LENGTH_BOUNDS: (u32, u32) = (1, 15);

#[derive(Parser, Debug)]
#[command(name = "sunspot-dashboard")]
#[command(about = "Interactive dashboard of historical sunspot activity", long_about = None)]
pub struct Cli {
    /// Headerless monthly sunspot file (Year, Month, FracDate, mean, std dev, observations, indicator)
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    /// Field separator of the data file
    #[arg(long, default_value = ";", value_parser = parse_delimiter)]
    pub sep: u8,

    /// Image shown under the charts (http(s):// or file:// URI)
    #[arg(long, default_value = SUN_IMAGE_URL)]
    pub sun_image: String,
}

impl Cli {
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            schema: Schema::default(),
            delimiter: self.sep,
        }
    }
}

fn parse_delimiter(s: &str) -> Result<u8, String> {
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(format!("separator must be a single ASCII character, got '{s}'")),
    }
}
