use once_cell::sync::Lazy;

use crate::error::FormatError;
use crate::formatter::Formatter;
use crate::options::Preset;

/// Decimal bits per second with a capitalized thousand prefix ("Mbps").
pub const BANDWIDTH: Preset = Preset {
    bits: true,
    binary: false,
    speed: true,
    large_k: true,
};

/// Binary byte counts ("KiB"), the usual convention for transfer volumes.
pub const TRAFFIC: Preset = Preset {
    bits: false,
    binary: true,
    speed: false,
    large_k: true,
};

/// Decimal byte counts ("KB"), the convention storage vendors use.
pub const STORAGE: Preset = Preset {
    bits: false,
    binary: false,
    speed: false,
    large_k: true,
};

static BYTES: Lazy<Formatter> = Lazy::new(|| Formatter::new(STORAGE));
static IBYTES: Lazy<Formatter> = Lazy::new(|| Formatter::new(Preset { binary: true, ..STORAGE }));
static BITS: Lazy<Formatter> = Lazy::new(|| Formatter::new(Preset { bits: true, ..STORAGE }));
static IBITS: Lazy<Formatter> = Lazy::new(|| {
    Formatter::new(Preset {
        bits: true,
        binary: true,
        ..STORAGE
    })
});
static BPS: Lazy<Formatter> = Lazy::new(|| {
    Formatter::new(Preset {
        bits: true,
        speed: true,
        ..STORAGE
    })
});
static BANDWIDTH_FORMATTER: Lazy<Formatter> = Lazy::new(|| Formatter::new(BANDWIDTH));
static TRAFFIC_FORMATTER: Lazy<Formatter> = Lazy::new(|| Formatter::new(TRAFFIC));

/// Decimal bytes: `format_bytes(1200.0)` -> "1.2 KB".
pub fn format_bytes(number: f64) -> Result<String, FormatError> {
    BYTES.format(number)
}

/// Binary bytes: `format_ibytes(1200.0)` -> "1.17 KiB".
pub fn format_ibytes(number: f64) -> Result<String, FormatError> {
    IBYTES.format(number)
}

/// Decimal bits: `format_bits(1200.0)` -> "1.2 Kbit".
pub fn format_bits(number: f64) -> Result<String, FormatError> {
    BITS.format(number)
}

/// Binary bits: `format_ibits(1230.0)` -> "1.2 kibit".
pub fn format_ibits(number: f64) -> Result<String, FormatError> {
    IBITS.format(number)
}

/// Decimal bits per second: `format_bps(1200.0)` -> "1.2 Kbps".
pub fn format_bps(number: f64) -> Result<String, FormatError> {
    BPS.format(number)
}

/// The [`BANDWIDTH`] preset: `format_bandwidth(1e6)` -> "1 Mbps".
pub fn format_bandwidth(number: f64) -> Result<String, FormatError> {
    BANDWIDTH_FORMATTER.format(number)
}

/// The [`TRAFFIC`] preset: `format_traffic(1_024_000.0)` -> "1000 KiB".
pub fn format_traffic(number: f64) -> Result<String, FormatError> {
    TRAFFIC_FORMATTER.format(number)
}
