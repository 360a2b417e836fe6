//! Human-readable formatting for byte and bit quantities and transfer rates.
//!
//! A [`Formatter`] is built once from a [`Preset`] (bits vs bytes, decimal vs
//! binary prefixes, per-second suffix, "KB" vs "kB") and then formats any
//! finite magnitude:
//!
//! ```
//! use xbits::{Formatter, Preset};
//!
//! let traffic = Formatter::new(Preset { binary: true, ..Preset::default() });
//! assert_eq!(traffic.format(1_024_000.0).unwrap(), "1000 KiB");
//!
//! let storage = Formatter::default();
//! assert_eq!(storage.format(1337.0).unwrap(), "1.34 KB");
//! ```
//!
//! Ready-made formatters cover the common cases:
//!
//! ```
//! assert_eq!(xbits::format_bandwidth(1e6).unwrap(), "1 Mbps");
//! assert_eq!(xbits::format_ibytes(1230.0).unwrap(), "1.2 KiB");
//! ```
//!
//! Per-call behavior — sign alignment, locale conventions, fraction digits,
//! spacing — goes through [`FormatOptions`]:
//!
//! ```
//! use xbits::{FormatOptions, Formatter, LocaleSpec};
//!
//! let formatter = Formatter::default();
//! let options = FormatOptions {
//!     locale: LocaleSpec::Tag("de".to_string()),
//!     ..FormatOptions::default()
//! };
//! assert_eq!(formatter.format_with(10.1, &options).unwrap(), "10,1 B");
//! ```

mod error;
mod formatter;
mod locale;
mod options;
pub mod presets;
mod units;

pub use error::FormatError;
pub use formatter::Formatter;
pub use locale::LocaleSpec;
pub use options::{FormatOptions, Preset};
pub use presets::{
    format_bandwidth, format_bits, format_bps, format_bytes, format_ibits, format_ibytes,
    format_traffic,
};
