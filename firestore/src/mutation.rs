//! Free functions building a `Write` for each of the create/set/update/delete
//! operations, plus the standalone field transforms (server timestamp,
//! increment, min, max, array-union, array-remove) that either accompany an
//! update or ride standalone.

use std::collections::BTreeMap;

use google_cloud_firestore_proto::firestore::v1 as pb;

use crate::document::{timestamp_to_proto, value_to_proto};
use crate::value::{Timestamp, Value};

#[derive(Clone, Debug, PartialEq)]
pub enum Transform {
    ServerTimestamp,
    Increment(Value),
    Maximum(Value),
    Minimum(Value),
    ArrayUnion(Vec<Value>),
    ArrayRemove(Vec<Value>),
}

fn transform_to_proto(field_path: &str, t: &Transform) -> pb::document_transform::FieldTransform {
    use pb::document_transform::field_transform::{ServerValue, TransformType};
    let transform_type = match t {
        Transform::ServerTimestamp => TransformType::SetToServerValue(ServerValue::RequestTime as i32),
        Transform::Increment(v) => TransformType::Increment(value_to_proto(v)),
        Transform::Maximum(v) => TransformType::Maximum(value_to_proto(v)),
        Transform::Minimum(v) => TransformType::Minimum(value_to_proto(v)),
        Transform::ArrayUnion(vs) => TransformType::AppendMissingElements(pb::ArrayValue {
            values: vs.iter().map(value_to_proto).collect(),
        }),
        Transform::ArrayRemove(vs) => TransformType::RemoveAllFromArray(pb::ArrayValue {
            values: vs.iter().map(value_to_proto).collect(),
        }),
    };
    pb::document_transform::FieldTransform {
        field_path: field_path.to_string(),
        transform_type: Some(transform_type),
    }
}

/// Fails the write unless the document exists (`create`).
pub fn create(name: impl Into<String>, fields: BTreeMap<String, Value>) -> pb::Write {
    pb::Write {
        current_document: Some(pb::Precondition {
            condition_type: Some(pb::precondition::ConditionType::Exists(false)),
        }),
        operation: Some(pb::write::Operation::Update(document(name, fields))),
        update_transforms: Vec::new(),
    }
}

/// Overwrites the document unconditionally (`set`), optionally applying field
/// transforms after the update.
pub fn set(name: impl Into<String>, fields: BTreeMap<String, Value>, transforms: Vec<(String, Transform)>) -> pb::Write {
    pb::Write {
        current_document: None,
        operation: Some(pb::write::Operation::Update(document(name, fields))),
        update_transforms: transforms.iter().map(|(p, t)| transform_to_proto(p, t)).collect(),
    }
}

/// Fails the write unless the document exists (`update`), merging only the
/// given fields via a document mask carried separately by the caller when a
/// true merge is required; this builder always overwrites the listed fields.
pub fn update(
    name: impl Into<String>,
    fields: BTreeMap<String, Value>,
    transforms: Vec<(String, Transform)>,
) -> pb::Write {
    pb::Write {
        current_document: Some(pb::Precondition {
            condition_type: Some(pb::precondition::ConditionType::Exists(true)),
        }),
        operation: Some(pb::write::Operation::Update(document(name, fields))),
        update_transforms: transforms.iter().map(|(p, t)| transform_to_proto(p, t)).collect(),
    }
}

/// Fails the write unless `update_time` still matches server-side.
pub fn update_with_precondition_time(
    name: impl Into<String>,
    fields: BTreeMap<String, Value>,
    update_time: Timestamp,
) -> pb::Write {
    pb::Write {
        current_document: Some(pb::Precondition {
            condition_type: Some(pb::precondition::ConditionType::UpdateTime(timestamp_to_proto(&update_time))),
        }),
        operation: Some(pb::write::Operation::Update(document(name, fields))),
        update_transforms: Vec::new(),
    }
}

pub fn delete(name: impl Into<String>) -> pb::Write {
    pb::Write {
        current_document: None,
        operation: Some(pb::write::Operation::Delete(name.into())),
        update_transforms: Vec::new(),
    }
}

/// A standalone transform write, not accompanying an update.
pub fn transform(name: impl Into<String>, transforms: Vec<(String, Transform)>) -> pb::Write {
    let name = name.into();
    pb::Write {
        current_document: None,
        operation: Some(pb::write::Operation::Transform(pb::DocumentTransform {
            document: name,
            field_transforms: transforms.iter().map(|(p, t)| transform_to_proto(p, t)).collect(),
        })),
        update_transforms: Vec::new(),
    }
}

fn document(name: impl Into<String>, fields: BTreeMap<String, Value>) -> pb::Document {
    pb::Document {
        name: name.into(),
        fields: fields.into_iter().map(|(k, v)| (k, value_to_proto(&v))).collect(),
        create_time: None,
        update_time: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_sets_exists_false_precondition() {
        let w = create("projects/p/databases/(default)/documents/c/d", BTreeMap::new());
        assert_eq!(
            w.current_document,
            Some(pb::Precondition {
                condition_type: Some(pb::precondition::ConditionType::Exists(false))
            })
        );
    }

    #[test]
    fn update_sets_exists_true_precondition() {
        let w = update("c/d".to_string(), BTreeMap::new(), vec![]);
        assert_eq!(
            w.current_document,
            Some(pb::Precondition {
                condition_type: Some(pb::precondition::ConditionType::Exists(true))
            })
        );
    }

    #[test]
    fn set_carries_no_precondition() {
        let w = set("c/d".to_string(), BTreeMap::new(), vec![]);
        assert_eq!(w.current_document, None);
    }

    #[test]
    fn server_timestamp_transform_uses_request_time() {
        let w = set("c/d".to_string(), BTreeMap::new(), vec![("ts".to_string(), Transform::ServerTimestamp)]);
        assert_eq!(w.update_transforms.len(), 1);
    }
}
