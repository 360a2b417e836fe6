use tracing::trace;

use crate::error::FormatError;
use crate::locale::{self, Precision};
use crate::options::{FormatOptions, Preset};
use crate::units::{self, MAX_EXPONENT, UnitTable};

/// Significant digits rendered when the caller gives no fraction bounds.
const DEFAULT_SIGNIFICANT_DIGITS: usize = 3;

/// Reusable formatter bound to one unit table.
///
/// Construction resolves the table once; every call after that is a pure
/// computation on its inputs, so one instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    units: &'static UnitTable,
    binary: bool,
}

impl Formatter {
    pub fn new(preset: Preset) -> Self {
        let units = units::lookup(preset);
        trace!("resolved unit table for {preset:?}");
        Self {
            units,
            binary: preset.binary,
        }
    }

    /// Format with default options.
    pub fn format(&self, number: f64) -> Result<String, FormatError> {
        self.format_with(number, &FormatOptions::default())
    }

    /// Format `number`, which must be finite. Negative magnitudes keep their
    /// sign; `options.signed` additionally prefixes "+" on positive values and
    /// aligns exact zero with a leading space.
    pub fn format_with(&self, number: f64, options: &FormatOptions) -> Result<String, FormatError> {
        if !number.is_finite() {
            return Err(FormatError::InvalidInput(number));
        }

        let separator = options.separator();

        if options.signed && number == 0.0 {
            return Ok(format!(" 0{separator}{}", self.units.label(0)));
        }

        let negative = number < 0.0;
        let prefix = if negative {
            "-"
        } else if options.signed {
            "+"
        } else {
            ""
        };
        let mut magnitude = if negative { -number } else { number };

        let digits = options.fraction_digits();

        // Below one unit there is nothing to scale.
        if magnitude < 1.0 {
            let rendered =
                locale::render_number(magnitude, &options.locale, digits.map(Precision::Fraction));
            return Ok(format!("{prefix}{rendered}{separator}{}", self.units.label(0)));
        }

        let exponent = self.exponent(magnitude);
        let base: f64 = if self.binary { 1024.0 } else { 1000.0 };
        magnitude /= base.powi(exponent as i32);

        // 3 significant digits is the baseline policy; explicit fraction
        // bounds override it entirely.
        let precision = match digits {
            Some(digits) => Precision::Fraction(digits),
            None => Precision::Significant(DEFAULT_SIGNIFICANT_DIGITS),
        };

        let rendered = locale::render_number(magnitude, &options.locale, Some(precision));
        Ok(format!(
            "{prefix}{rendered}{separator}{}",
            self.units.label(exponent)
        ))
    }

    /// Power-of-base index for a magnitude >= 1, clamped to the table.
    fn exponent(&self, magnitude: f64) -> usize {
        let raw = if self.binary {
            magnitude.ln() / 1024f64.ln()
        } else {
            magnitude.log10() / 3.0
        };
        (raw.floor() as usize).min(MAX_EXPONENT)
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(Preset::default())
    }
}
