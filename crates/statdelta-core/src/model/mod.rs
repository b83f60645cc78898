//! Snapshot model and wire decoding.

pub mod snapshot;
pub mod wire;

pub use snapshot::{
    Bars, BattleStats, Gauge, Item, ItemKind, Job, PersonalStats, Refills, Snapshot,
    FLAT_BOOSTER_ITEM_ID, PROPORTIONAL_BOOSTER_ITEM_ID,
};
pub use wire::{decode_snapshot, decode_snapshot_value, sniff_shape, RawSnapshot, WireShape};

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Accepts a decimal quantity as either JSON text or a JSON number.
///
/// `null` and absent values become the empty string. Numbers keep their
/// source text, so no digits are lost to floating point.
pub(crate) mod decimal_text {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// Text of a stat value, or `None` for a value that is not a numeral.
    pub fn from_json(value: Value) -> Option<String> {
        match value {
            Value::String(raw) => Some(raw),
            Value::Number(number) => Some(number.to_string()),
            Value::Null => Some(String::new()),
            _ => None,
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        from_json(value).ok_or_else(|| D::Error::custom("expected a decimal string or number"))
    }

}
