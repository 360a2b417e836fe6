use std::borrow::Cow;

use once_cell::sync::Lazy;

use crate::options::Preset;

const BYTE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
const BYTE_SPEED_UNITS: [&str; 9] = [
    "B/s", "kB/s", "MB/s", "GB/s", "TB/s", "PB/s", "EB/s", "ZB/s", "YB/s",
];

const BIBYTE_UNITS: [&str; 9] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB", "ZiB", "YiB"];
const BIBYTE_SPEED_UNITS: [&str; 9] = [
    "B/s", "KiB/s", "MiB/s", "GiB/s", "TiB/s", "PiB/s", "EiB/s", "ZiB/s", "YiB/s",
];

const BIT_UNITS: [&str; 9] = [
    "b", "kbit", "Mbit", "Gbit", "Tbit", "Pbit", "Ebit", "Zbit", "Ybit",
];
const BIT_SPEED_UNITS: [&str; 9] = [
    "bps", "kbps", "Mbps", "Gbps", "Tbps", "Pbps", "Ebps", "Zbps", "Ybps",
];

const BIBIT_UNITS: [&str; 9] = [
    "b", "kibit", "Mibit", "Gibit", "Tibit", "Pibit", "Eibit", "Zibit", "Yibit",
];
const BIBIT_SPEED_UNITS: [&str; 9] = [
    "b/s", "kib/s", "Mib/s", "Gib/s", "Tib/s", "Pib/s", "Eib/s", "Zib/s", "Yib/s",
];

/// Largest exponent any table can express; larger magnitudes reuse this slot.
pub(crate) const MAX_EXPONENT: usize = 8;

/// Ordered unit labels indexed by power-of-base exponent 0..=8.
#[derive(Debug, Clone)]
pub(crate) struct UnitTable {
    labels: [Cow<'static, str>; 9],
}

impl UnitTable {
    fn borrowed(labels: [&'static str; 9]) -> Self {
        Self {
            labels: labels.map(Cow::Borrowed),
        }
    }

    /// Copy of the table with the thousand-scale entry capitalized ("kB" -> "KB").
    fn with_large_k(&self) -> Self {
        let mut labels = self.labels.clone();
        let thousand = format!("K{}", &labels[1][1..]);
        labels[1] = Cow::Owned(thousand);
        Self { labels }
    }

    pub(crate) fn label(&self, exponent: usize) -> &str {
        &self.labels[exponent.min(MAX_EXPONENT)]
    }
}

fn base_labels(bits: bool, binary: bool, speed: bool) -> [&'static str; 9] {
    match (bits, binary, speed) {
        (false, false, false) => BYTE_UNITS,
        (false, false, true) => BYTE_SPEED_UNITS,
        (false, true, false) => BIBYTE_UNITS,
        (false, true, true) => BIBYTE_SPEED_UNITS,
        (true, false, false) => BIT_UNITS,
        (true, false, true) => BIT_SPEED_UNITS,
        (true, true, false) => BIBIT_UNITS,
        (true, true, true) => BIBIT_SPEED_UNITS,
    }
}

fn table_index(preset: Preset) -> usize {
    (preset.bits as usize) << 3
        | (preset.binary as usize) << 2
        | (preset.speed as usize) << 1
        | (preset.large_k as usize)
}

/// One table per flag combination, derived once on first use.
static REGISTRY: Lazy<[UnitTable; 16]> = Lazy::new(|| {
    std::array::from_fn(|index| {
        let bits = index & 0b1000 != 0;
        let binary = index & 0b0100 != 0;
        let speed = index & 0b0010 != 0;
        let large_k = index & 0b0001 != 0;

        let base = UnitTable::borrowed(base_labels(bits, binary, speed));
        // Binary-base labels are already capitalized; large-K only applies to
        // the decimal families.
        if large_k && !binary {
            base.with_large_k()
        } else {
            base
        }
    })
});

pub(crate) fn lookup(preset: Preset) -> &'static UnitTable {
    &REGISTRY[table_index(preset)]
}
