use num_format::{Grouping, Locale, SystemLocale};
use serde::{Deserialize, Serialize};

/// How rendered numbers pick up locale conventions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocaleSpec {
    /// Plain output, no digit grouping.
    #[default]
    Disabled,
    /// Conventions of the caller's system locale.
    System,
    /// A single BCP 47-style language tag, e.g. "en" or "de".
    Tag(String),
    /// Ordered list of tags; the first recognized one wins.
    Tags(Vec<String>),
}

/// Largest honored fraction-digit bound.
const MAX_FRACTION_DIGITS: usize = 100;

/// Bounds applied when a locale is active but the caller gave none.
const DEFAULT_LOCALE_FRACTION: FractionDigits = FractionDigits {
    minimum: 0,
    maximum: 3,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FractionDigits {
    pub(crate) minimum: usize,
    pub(crate) maximum: usize,
}

impl FractionDigits {
    /// `None` when neither bound was supplied. The maximum defaults to
    /// `max(3, minimum)` and is never allowed below the minimum.
    pub(crate) fn resolve(minimum: Option<usize>, maximum: Option<usize>) -> Option<Self> {
        if minimum.is_none() && maximum.is_none() {
            return None;
        }
        let minimum = minimum.unwrap_or(0).min(MAX_FRACTION_DIGITS);
        let maximum = maximum
            .unwrap_or_else(|| minimum.max(3))
            .min(MAX_FRACTION_DIGITS)
            .max(minimum);
        Some(Self { minimum, maximum })
    }
}

/// Numeric precision policy for one rendered value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Precision {
    /// Round to this many significant decimal digits.
    Significant(usize),
    /// Explicit fraction-digit bounds.
    Fraction(FractionDigits),
}

/// Grouping and decimal-separator conventions resolved from a locale.
struct Conventions {
    separator: String,
    decimal: String,
    grouping: Grouping,
}

impl Conventions {
    fn from_locale(locale: Locale) -> Self {
        Self {
            separator: locale.separator().to_string(),
            decimal: locale.decimal().to_string(),
            grouping: locale.grouping(),
        }
    }

    fn from_system() -> Self {
        match SystemLocale::default() {
            Ok(system) => Self {
                separator: system.separator().to_string(),
                decimal: system.decimal().to_string(),
                grouping: system.grouping(),
            },
            Err(_) => Self::from_locale(Locale::en),
        }
    }

    /// First tag that names a known locale wins; unknown tags are skipped and
    /// an exhausted list falls back to `en`. Hyphenated tags are normalized to
    /// the underscore names `num_format` uses.
    fn from_tags(tags: &[String]) -> Self {
        tags.iter()
            .find_map(|tag| Locale::from_name(tag.replace('-', "_")).ok())
            .map(Self::from_locale)
            .unwrap_or_else(|| Self::from_locale(Locale::en))
    }
}

impl LocaleSpec {
    fn conventions(&self) -> Option<Conventions> {
        match self {
            LocaleSpec::Disabled => None,
            LocaleSpec::System => Some(Conventions::from_system()),
            LocaleSpec::Tag(tag) => Some(Conventions::from_tags(std::slice::from_ref(tag))),
            LocaleSpec::Tags(tags) => Some(Conventions::from_tags(tags)),
        }
    }
}

/// Render a finite, non-negative number. With no locale and no precision this
/// is the plain shortest decimal representation; a precision policy switches
/// to fixed-point rendering; an active locale adds grouping and its decimal
/// separator.
pub(crate) fn render_number(
    value: f64,
    spec: &LocaleSpec,
    precision: Option<Precision>,
) -> String {
    let conventions = spec.conventions();
    let plain = match (precision, &conventions) {
        (None, None) => return value.to_string(),
        (None, Some(_)) => fixed_decimal(value, DEFAULT_LOCALE_FRACTION),
        (Some(Precision::Fraction(digits)), _) => fixed_decimal(value, digits),
        (Some(Precision::Significant(significant)), _) => significant_decimal(value, significant),
    };
    match conventions {
        Some(conventions) => localize(&plain, &conventions),
        None => plain,
    }
}

/// Round `value` (>= 1) half away from zero to `significant` decimal digits.
/// The rounding position can sit left of the decimal point, e.g. 827180.6 at
/// 3 significant digits becomes 827000.
fn significant_decimal(value: f64, significant: usize) -> String {
    let magnitude = value.log10().floor() as i32;
    let shift = significant as i32 - 1 - magnitude;
    let rounded = if shift >= 0 {
        let factor = 10f64.powi(shift);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-shift);
        (value / factor).round() * factor
    };
    let fixed = format!("{:.*}", shift.max(0) as usize, rounded);
    trim_fraction(&fixed, 0)
}

/// Round half away from zero at `maximum` places, then trim trailing zeros
/// down to `minimum` places.
fn fixed_decimal(value: f64, digits: FractionDigits) -> String {
    let factor = 10f64.powi(digits.maximum as i32);
    let scaled = value * factor;
    let rounded = if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    };
    let fixed = format!("{:.*}", digits.maximum, rounded);
    trim_fraction(&fixed, digits.minimum)
}

fn trim_fraction(fixed: &str, minimum: usize) -> String {
    match fixed.split_once('.') {
        None => fixed.to_string(),
        Some((integer, fraction)) => {
            let keep = fraction.trim_end_matches('0').len().max(minimum);
            if keep == 0 {
                integer.to_string()
            } else {
                format!("{integer}.{}", &fraction[..keep])
            }
        }
    }
}

fn localize(fixed: &str, conventions: &Conventions) -> String {
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed, None),
    };
    let grouped = group_digits(integer, &conventions.separator, conventions.grouping);
    match fraction {
        Some(fraction) => format!("{grouped}{}{fraction}", conventions.decimal),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: &str, grouping: Grouping) -> String {
    if separator.is_empty() || digits.len() <= 3 || matches!(grouping, Grouping::Posix) {
        return digits.to_string();
    }
    let len = digits.len();
    let mut boundaries = Vec::new();
    let mut offset = 3;
    while offset < len {
        boundaries.push(len - offset);
        offset += match grouping {
            Grouping::Indian => 2,
            _ => 3,
        };
    }
    boundaries.reverse();
    let mut grouped = String::with_capacity(len + boundaries.len() * separator.len());
    let mut start = 0;
    for boundary in boundaries {
        grouped.push_str(&digits[start..boundary]);
        grouped.push_str(separator);
        start = boundary;
    }
    grouped.push_str(&digits[start..]);
    grouped
}
