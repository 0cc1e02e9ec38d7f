//! Document snapshots and conversion between the local [`Value`] model and
//! the wire `google.firestore.v1.Value` oneof.

use std::collections::{BTreeMap, HashMap};

use google_cloud_firestore_proto::firestore::v1 as pb;

use crate::path::Path;
use crate::value::{GeoPoint, Timestamp, Value};

/// `(reference, optional fields map, createTime, updateTime, readTime)`.
/// `exists()` iff `fields` is `Some`.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSnapshot {
    pub reference: Path,
    pub fields: Option<BTreeMap<String, Value>>,
    pub create_time: Option<Timestamp>,
    pub update_time: Option<Timestamp>,
    pub read_time: Option<Timestamp>,
}

impl DocumentSnapshot {
    pub fn missing(reference: Path, read_time: Option<Timestamp>) -> DocumentSnapshot {
        DocumentSnapshot {
            reference,
            fields: None,
            create_time: None,
            update_time: None,
            read_time,
        }
    }

    pub fn exists(&self) -> bool {
        self.fields.is_some()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.as_ref().and_then(|f| f.get(field))
    }

    /// Two snapshots are equal iff reference, fields, createTime, and
    /// updateTime all match; readTime does not participate.
    pub fn document_equal(&self, other: &DocumentSnapshot) -> bool {
        self.reference == other.reference
            && self.fields == other.fields
            && self.create_time == other.create_time
            && self.update_time == other.update_time
    }

    pub fn from_proto(doc: &pb::Document, read_time: Option<Timestamp>) -> DocumentSnapshot {
        DocumentSnapshot {
            reference: Path::parse(&doc.name),
            fields: Some(doc.fields.iter().map(|(k, v)| (k.clone(), value_from_proto(v))).collect()),
            create_time: doc.create_time.as_ref().map(timestamp_from_proto),
            update_time: doc.update_time.as_ref().map(timestamp_from_proto),
            read_time,
        }
    }
}

pub fn timestamp_from_proto(t: &prost_types::Timestamp) -> Timestamp {
    Timestamp { seconds: t.seconds, nanos: t.nanos }
}

pub fn timestamp_to_proto(t: &Timestamp) -> prost_types::Timestamp {
    prost_types::Timestamp { seconds: t.seconds, nanos: t.nanos }
}

pub fn value_from_proto(v: &pb::Value) -> Value {
    use pb::value::ValueType;
    match &v.value_type {
        None | Some(ValueType::NullValue(_)) => Value::Null,
        Some(ValueType::BooleanValue(b)) => Value::Boolean(*b),
        Some(ValueType::IntegerValue(i)) => Value::Integer(*i),
        Some(ValueType::DoubleValue(d)) => Value::Double(*d),
        Some(ValueType::TimestampValue(t)) => Value::Timestamp(timestamp_from_proto(t)),
        Some(ValueType::StringValue(s)) => Value::String(s.clone()),
        Some(ValueType::BytesValue(b)) => Value::Bytes(b.clone()),
        Some(ValueType::ReferenceValue(r)) => Value::Reference(Path::parse(r)),
        Some(ValueType::GeoPointValue(g)) => Value::GeoPoint(GeoPoint {
            latitude: g.latitude,
            longitude: g.longitude,
        }),
        Some(ValueType::ArrayValue(a)) => Value::Array(a.values.iter().map(value_from_proto).collect()),
        Some(ValueType::MapValue(m)) => {
            Value::Map(m.fields.iter().map(|(k, v)| (k.clone(), value_from_proto(v))).collect())
        }
    }
}

pub fn value_to_proto(v: &Value) -> pb::Value {
    use pb::value::ValueType;
    let value_type = match v {
        Value::Null => Some(ValueType::NullValue(0)),
        Value::Boolean(b) => Some(ValueType::BooleanValue(*b)),
        Value::Integer(i) => Some(ValueType::IntegerValue(*i)),
        Value::Double(d) => Some(ValueType::DoubleValue(*d)),
        Value::Timestamp(t) => Some(ValueType::TimestampValue(timestamp_to_proto(t))),
        Value::String(s) => Some(ValueType::StringValue(s.clone())),
        Value::Bytes(b) => Some(ValueType::BytesValue(b.clone())),
        Value::Reference(p) => Some(ValueType::ReferenceValue(p.to_string())),
        Value::GeoPoint(g) => Some(ValueType::GeoPointValue(google_cloud_firestore_proto::r#type::LatLng {
            latitude: g.latitude,
            longitude: g.longitude,
        })),
        Value::Array(items) => Some(ValueType::ArrayValue(pb::ArrayValue {
            values: items.iter().map(value_to_proto).collect(),
        })),
        Value::Map(fields) => Some(ValueType::MapValue(pb::MapValue {
            fields: fields.iter().map(|(k, v)| (k.clone(), value_to_proto(v))).collect::<HashMap<_, _>>(),
        })),
        // Extended kinds never cross the wire; a caller building a write from
        // one is a programmer error upstream of this conversion.
        Value::MinKey
        | Value::MaxKey
        | Value::ObjectId(_)
        | Value::Int32(_)
        | Value::Decimal128(_)
        | Value::Regex { .. }
        | Value::BsonTimestamp { .. }
        | Value::BsonBinary { .. } => {
            unreachable!("extended value kinds have no Firestore wire representation")
        }
    };
    pb::Value { value_type }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_proto() {
        let mut fields = BTreeMap::new();
        fields.insert("n".to_string(), Value::String("hi".to_string()));
        fields.insert("i".to_string(), Value::Integer(42));
        for (_, v) in &fields {
            let back = value_from_proto(&value_to_proto(v));
            assert_eq!(&back, v);
        }
    }

    #[test]
    fn missing_document_does_not_exist() {
        let snap = DocumentSnapshot::missing(Path::parse("a/b"), None);
        assert!(!snap.exists());
    }

    #[test]
    fn equality_ignores_read_time() {
        let a = DocumentSnapshot {
            reference: Path::parse("a/b"),
            fields: Some(BTreeMap::new()),
            create_time: Some(Timestamp { seconds: 1, nanos: 0 }),
            update_time: Some(Timestamp { seconds: 1, nanos: 0 }),
            read_time: Some(Timestamp { seconds: 1, nanos: 0 }),
        };
        let mut b = a.clone();
        b.read_time = Some(Timestamp { seconds: 2, nanos: 0 });
        assert!(a.document_equal(&b));
    }
}
