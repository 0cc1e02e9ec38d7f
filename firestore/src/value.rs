//! The value model shared by documents, query cursors, and transform
//! results, plus the total order used to sort query results and Watch's
//! `docTree`.
//!
//! String comparison is byte-wise on the UTF-8 encoding: `str`'s `Ord` impl
//! already compares the underlying UTF-8 bytes lexicographically, which is
//! exactly the rule this model needs, never UTF-16 code-unit order.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::path::Path;

/// A timestamp expressed as seconds and nanoseconds since the Unix epoch,
/// compared seconds-then-nanos per the ordering rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// The tagged union every field value is represented as, plus the extended
/// kinds (object id, regex, 32-bit int, 128-bit decimal, min/max key, BSON
/// timestamp/binary) carried through unchanged for ordering and equality
/// even though the Firestore wire format never emits them.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Timestamp(Timestamp),
    String(String),
    Bytes(Vec<u8>),
    Reference(Path),
    GeoPoint(GeoPoint),
    Array(Vec<Value>),
    Map(BTreeMap<String, Value>),

    MinKey,
    MaxKey,
    ObjectId(Vec<u8>),
    Int32(i32),
    Decimal128([u8; 16]),
    Regex { pattern: String, options: String },
    BsonTimestamp { t: u32, i: u32 },
    BsonBinary { subtype: u8, data: Vec<u8> },
}

/// Sparsest-first kind rank. Numbers (`Integer`/`Double`/`Int32`/`Decimal128`)
/// share a rank and are compared as reals, with NaN sorting lowest among them.
/// `MinKey` sorts immediately above nothing (below `Null`) and `MaxKey` above
/// everything; the remaining extended kinds are slotted at the position their
/// closest core-kind analogue occupies, which is the only freedom the
/// ordering rules leave to the implementer.
fn kind_rank(v: &Value) -> u8 {
    match v {
        Value::MinKey => 0,
        Value::Null => 1,
        Value::Boolean(_) => 2,
        Value::Integer(_) | Value::Double(_) | Value::Int32(_) | Value::Decimal128(_) => 3,
        Value::Timestamp(_) | Value::BsonTimestamp { .. } => 4,
        Value::String(_) => 5,
        Value::Bytes(_) | Value::BsonBinary { .. } => 6,
        Value::ObjectId(_) => 7,
        Value::Reference(_) => 8,
        Value::GeoPoint(_) => 9,
        Value::Regex { .. } => 10,
        Value::Array(_) => 11,
        Value::Map(_) => 12,
        Value::MaxKey => 13,
    }
}

fn as_real(v: &Value) -> f64 {
    match v {
        Value::Integer(i) => *i as f64,
        Value::Double(d) => *d,
        Value::Int32(i) => *i as f64,
        Value::Decimal128(bytes) => decimal128_to_f64(bytes),
        _ => unreachable!("as_real called on a non-numeric value"),
    }
}

/// Best-effort conversion for ordering purposes; this model does not need
/// exact IEEE 754-2008 decimal128 semantics, only a real-valued magnitude
/// consistent across comparisons.
fn decimal128_to_f64(bytes: &[u8; 16]) -> f64 {
    let mut acc = 0f64;
    for b in bytes {
        acc = acc * 256.0 + *b as f64;
    }
    acc
}

fn cmp_numeric(a: &Value, b: &Value) -> Ordering {
    let (x, y) = (as_real(a), as_real(b));
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    }
}

fn cmp_geopoint(a: &GeoPoint, b: &GeoPoint) -> Ordering {
    a.latitude
        .partial_cmp(&b.latitude)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.longitude.partial_cmp(&b.longitude).unwrap_or(Ordering::Equal))
}

fn cmp_map(a: &BTreeMap<String, Value>, b: &BTreeMap<String, Value>) -> Ordering {
    // BTreeMap already iterates key-sorted; compare key-then-value pairwise.
    let mut ai = a.iter();
    let mut bi = b.iter();
    loop {
        match (ai.next(), bi.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some((ak, av)), Some((bk, bv))) => {
                let key_cmp = ak.as_str().cmp(bk.as_str());
                if key_cmp != Ordering::Equal {
                    return key_cmp;
                }
                let val_cmp = av.cmp(bv);
                if val_cmp != Ordering::Equal {
                    return val_cmp;
                }
            }
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Value {}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        let rank_cmp = kind_rank(self).cmp(&kind_rank(other));
        if rank_cmp != Ordering::Equal {
            return rank_cmp;
        }
        match (self, other) {
            (Value::Null, Value::Null) | (Value::MinKey, Value::MinKey) | (Value::MaxKey, Value::MaxKey) => {
                Ordering::Equal
            }
            (Value::Boolean(a), Value::Boolean(b)) => a.cmp(b),
            (Value::Integer(_) | Value::Double(_) | Value::Int32(_) | Value::Decimal128(_), _) => {
                cmp_numeric(self, other)
            }
            (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
            (Value::BsonTimestamp { t: at, i: ai }, Value::BsonTimestamp { t: bt, i: bi }) => {
                at.cmp(bt).then_with(|| ai.cmp(bi))
            }
            (Value::Timestamp(_), Value::BsonTimestamp { .. }) => Ordering::Less,
            (Value::BsonTimestamp { .. }, Value::Timestamp(_)) => Ordering::Greater,
            (Value::String(a), Value::String(b)) => a.as_str().cmp(b.as_str()),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            (Value::BsonBinary { subtype: asub, data: adata }, Value::BsonBinary { subtype: bsub, data: bdata }) => {
                asub.cmp(bsub).then_with(|| adata.cmp(bdata))
            }
            (Value::Bytes(_), Value::BsonBinary { .. }) => Ordering::Less,
            (Value::BsonBinary { .. }, Value::Bytes(_)) => Ordering::Greater,
            (Value::ObjectId(a), Value::ObjectId(b)) => a.cmp(b),
            (Value::Reference(a), Value::Reference(b)) => a.cmp(b),
            (Value::GeoPoint(a), Value::GeoPoint(b)) => cmp_geopoint(a, b),
            (Value::Regex { pattern: ap, options: ao }, Value::Regex { pattern: bp, options: bo }) => {
                ap.cmp(bp).then_with(|| ao.cmp(bo))
            }
            (Value::Array(a), Value::Array(b)) => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => cmp_map(a, b),
            _ => Ordering::Equal,
        }
    }
}

impl Value {
    /// Numeric equivalence (`3 == 3.0`), NaN-equals-NaN, and null-equals-null
    /// used by array-membership-style aggregation operators. Distinct from
    /// `PartialEq`, which keeps integer/double and NaN distinct for document
    /// equality.
    pub fn equal_for_aggregation(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Integer(_) | Value::Double(_), Value::Integer(_) | Value::Double(_)) => {
                let (a, b) = (as_real(self), as_real(other));
                if a.is_nan() && b.is_nan() {
                    true
                } else {
                    a == b
                }
            }
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.equal_for_aggregation(y))
            }
            (Value::Map(a), Value::Map(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.get(k).is_some_and(|bv| v.equal_for_aggregation(bv)))
            }
            _ => self == other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(seconds: i64, nanos: i32) -> Value {
        Value::Timestamp(Timestamp { seconds, nanos })
    }

    #[test]
    fn total_order_matches_kind_sequence() {
        let mut values = vec![
            Value::Map(BTreeMap::new()),
            Value::Array(vec![]),
            Value::GeoPoint(GeoPoint { latitude: 0.0, longitude: 0.0 }),
            Value::Reference(Path::parse("a/b")),
            Value::Bytes(vec![1]),
            Value::String("x".to_string()),
            ts(0, 0),
            Value::Double(1.0),
            Value::Double(f64::NAN),
            Value::Boolean(true),
            Value::Null,
        ];
        values.sort();
        assert!(matches!(values[0], Value::Null));
        assert!(matches!(values[1], Value::Boolean(_)));
        assert!(matches!(values[2], Value::Double(n) if n.is_nan()));
        assert!(matches!(values[3], Value::Double(_)));
        assert!(matches!(values.last().unwrap(), Value::Map(_)));
    }

    #[test]
    fn minkey_below_null_maxkey_above_everything() {
        assert!(Value::MinKey < Value::Null);
        assert!(Value::MaxKey > Value::Map(BTreeMap::new()));
    }

    #[test]
    fn negative_zero_equals_zero_numerically() {
        assert_eq!(cmp_numeric(&Value::Double(-0.0), &Value::Integer(0)), Ordering::Equal);
    }

    #[test]
    fn string_order_is_byte_wise_utf8_not_utf16() {
        // U+20AC (3 UTF-8 bytes, starts with 0xE2) sorts after U+FFFD's
        // surrogate-adjacent range only by raw byte comparison being used.
        let a = Value::String("\u{20AC}".to_string());
        let b = Value::String("\u{FFFD}".to_string());
        assert_eq!(
            a.cmp(&b),
            "\u{20AC}".as_bytes().cmp("\u{FFFD}".as_bytes())
        );
    }

    #[test]
    fn aggregation_equality_treats_int_and_double_as_equal() {
        assert!(Value::Integer(3).equal_for_aggregation(&Value::Double(3.0)));
        assert!(Value::Double(f64::NAN).equal_for_aggregation(&Value::Double(f64::NAN)));
        assert!(!(Value::Double(f64::NAN) == Value::Double(f64::NAN)));
    }

    #[test]
    fn map_ordering_is_key_sorted_lex() {
        let mut a = BTreeMap::new();
        a.insert("a".to_string(), Value::Integer(1));
        let mut b = BTreeMap::new();
        b.insert("a".to_string(), Value::Integer(2));
        assert!(Value::Map(a) < Value::Map(b));
    }
}
