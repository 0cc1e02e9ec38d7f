//! The query model: an immutable description built by chained combinators,
//! each returning a new `Query` value, plus the comparator derivation used by
//! both `QuerySnapshot` ordering and Watch's `docTree`.

use std::cmp::Ordering;

use google_cloud_firestore_proto::firestore::v1 as pb;

use crate::document::{value_from_proto, value_to_proto};
use crate::path::Path;
use crate::value::Value;

pub const NAME_FIELD: &str = "__name__";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOp {
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    Equal,
    NotEqual,
    ArrayContains,
    In,
    ArrayContainsAny,
    NotIn,
    IsNan,
    IsNull,
    IsNotNan,
    IsNotNull,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Filter {
    Field { path: String, op: FilterOp, value: Value },
    Composite { and: bool, filters: Vec<Filter> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub field: String,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cursor {
    pub values: Vec<Value>,
    pub before: bool,
}

/// An immutable query description: `parent` plus the accumulated combinator
/// steps. `collection_id` is `None` for a collection-group query.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    pub parent: Path,
    pub collection_id: String,
    pub all_descendants: bool,
    pub filters: Vec<Filter>,
    pub orders: Vec<Order>,
    pub start_at: Option<Cursor>,
    pub end_at: Option<Cursor>,
    pub limit: Option<i32>,
    pub offset: i32,
    pub select: Vec<String>,
}

impl Query {
    pub fn collection(parent: Path, collection_id: impl Into<String>) -> Query {
        Query {
            parent,
            collection_id: collection_id.into(),
            all_descendants: false,
            filters: Vec::new(),
            orders: Vec::new(),
            start_at: None,
            end_at: None,
            limit: None,
            offset: 0,
            select: Vec::new(),
        }
    }

    pub fn collection_group(parent: Path, collection_id: impl Into<String>) -> Query {
        let mut q = Query::collection(parent, collection_id);
        q.all_descendants = true;
        q
    }

    pub fn with_filter(&self, filter: Filter) -> Query {
        let mut q = self.clone();
        q.filters.push(filter);
        q
    }

    pub fn with_order(&self, field: impl Into<String>, direction: Direction) -> Query {
        let mut q = self.clone();
        q.orders.push(Order { field: field.into(), direction });
        q
    }

    pub fn with_limit(&self, limit: i32) -> Query {
        let mut q = self.clone();
        q.limit = Some(limit);
        q
    }

    pub fn with_offset(&self, offset: i32) -> Query {
        let mut q = self.clone();
        q.offset = offset;
        q
    }

    pub fn with_select(&self, fields: Vec<String>) -> Query {
        let mut q = self.clone();
        q.select = fields;
        q
    }

    /// The orderings actually used for sorting: the explicit orderings plus
    /// a trailing `__name__` tie-break in the direction of the last explicit
    /// ordering (ascending if none were given).
    fn effective_orders(&self) -> Vec<Order> {
        let mut orders = self.orders.clone();
        if orders.is_empty() {
            orders.push(Order {
                field: NAME_FIELD.to_string(),
                direction: Direction::Ascending,
            });
            return orders;
        }
        let tail_direction = orders.last().unwrap().direction;
        if orders.last().unwrap().field != NAME_FIELD {
            orders.push(Order {
                field: NAME_FIELD.to_string(),
                direction: tail_direction,
            });
        }
        orders
    }

    /// Builds the comparator used to sort `QuerySnapshot` docs and to key
    /// Watch's `docTree`. Looks up `__name__` via the document's reference
    /// path and all other fields via `DocumentSnapshot::get`.
    pub fn comparator(&self) -> QueryComparator {
        QueryComparator {
            orders: self.effective_orders(),
        }
    }

    pub fn to_structured_query(&self) -> pb::StructuredQuery {
        pb::StructuredQuery {
            select: if self.select.is_empty() {
                None
            } else {
                Some(pb::structured_query::Projection {
                    fields: self
                        .select
                        .iter()
                        .map(|f| pb::structured_query::FieldReference { field_path: f.clone() })
                        .collect(),
                })
            },
            from: vec![pb::structured_query::CollectionSelector {
                collection_id: self.collection_id.clone(),
                all_descendants: self.all_descendants,
            }],
            r#where: composite_filter(&self.filters),
            order_by: self
                .orders
                .iter()
                .map(|o| pb::structured_query::Order {
                    field: Some(pb::structured_query::FieldReference { field_path: o.field.clone() }),
                    direction: match o.direction {
                        Direction::Ascending => pb::structured_query::Direction::Ascending as i32,
                        Direction::Descending => pb::structured_query::Direction::Descending as i32,
                    },
                })
                .collect(),
            start_at: self.start_at.as_ref().map(cursor_to_proto),
            end_at: self.end_at.as_ref().map(cursor_to_proto),
            offset: self.offset,
            limit: self.limit.map(|n| prost_types::Int32Value { value: n }),
        }
    }
}

fn cursor_to_proto(c: &Cursor) -> pb::structured_query::Cursor {
    pb::structured_query::Cursor {
        values: c.values.iter().map(value_to_proto).collect(),
        before: c.before,
    }
}

fn composite_filter(filters: &[Filter]) -> Option<pb::structured_query::Filter> {
    if filters.is_empty() {
        return None;
    }
    if filters.len() == 1 {
        return Some(filter_to_proto(&filters[0]));
    }
    Some(pb::structured_query::Filter {
        filter_type: Some(pb::structured_query::filter::FilterType::CompositeFilter(
            pb::structured_query::CompositeFilter {
                op: pb::structured_query::composite_filter::Operator::And as i32,
                filters: filters.iter().map(filter_to_proto).collect(),
            },
        )),
    })
}

fn filter_to_proto(f: &Filter) -> pb::structured_query::Filter {
    match f {
        Filter::Composite { and, filters } => pb::structured_query::Filter {
            filter_type: Some(pb::structured_query::filter::FilterType::CompositeFilter(
                pb::structured_query::CompositeFilter {
                    op: if *and {
                        pb::structured_query::composite_filter::Operator::And as i32
                    } else {
                        pb::structured_query::composite_filter::Operator::Or as i32
                    },
                    filters: filters.iter().map(filter_to_proto).collect(),
                },
            )),
        },
        Filter::Field { path, op, value } => match unary_op(*op) {
            Some(unary) => pb::structured_query::Filter {
                filter_type: Some(pb::structured_query::filter::FilterType::UnaryFilter(
                    pb::structured_query::UnaryFilter {
                        op: unary as i32,
                        operand_type: Some(pb::structured_query::unary_filter::OperandType::Field(
                            pb::structured_query::FieldReference { field_path: path.clone() },
                        )),
                    },
                )),
            },
            None => pb::structured_query::Filter {
                filter_type: Some(pb::structured_query::filter::FilterType::FieldFilter(
                    pb::structured_query::FieldFilter {
                        field: Some(pb::structured_query::FieldReference { field_path: path.clone() }),
                        op: field_op(*op) as i32,
                        value: Some(value_to_proto(value)),
                    },
                )),
            },
        },
    }
}

fn unary_op(op: FilterOp) -> Option<pb::structured_query::unary_filter::Operator> {
    use pb::structured_query::unary_filter::Operator;
    match op {
        FilterOp::IsNan => Some(Operator::IsNan),
        FilterOp::IsNull => Some(Operator::IsNull),
        FilterOp::IsNotNan => Some(Operator::IsNotNan),
        FilterOp::IsNotNull => Some(Operator::IsNotNull),
        _ => None,
    }
}

fn field_op(op: FilterOp) -> pb::structured_query::field_filter::Operator {
    use pb::structured_query::field_filter::Operator;
    match op {
        FilterOp::LessThan => Operator::LessThan,
        FilterOp::LessThanOrEqual => Operator::LessThanOrEqual,
        FilterOp::GreaterThan => Operator::GreaterThan,
        FilterOp::GreaterThanOrEqual => Operator::GreaterThanOrEqual,
        FilterOp::Equal => Operator::Equal,
        FilterOp::NotEqual => Operator::NotEqual,
        FilterOp::ArrayContains => Operator::ArrayContains,
        FilterOp::In => Operator::In,
        FilterOp::ArrayContainsAny => Operator::ArrayContainsAny,
        FilterOp::NotIn => Operator::NotIn,
        FilterOp::IsNan | FilterOp::IsNull | FilterOp::IsNotNan | FilterOp::IsNotNull => {
            unreachable!("unary ops are handled by unary_op")
        }
    }
}

/// A comparator derived once from a query's orderings, used to sort
/// `QuerySnapshot` docs and to key Watch's `docTree`.
#[derive(Clone, Debug)]
pub struct QueryComparator {
    orders: Vec<Order>,
}

impl QueryComparator {
    pub fn compare(&self, a: &crate::document::DocumentSnapshot, b: &crate::document::DocumentSnapshot) -> Ordering {
        for order in &self.orders {
            let ordering = if order.field == NAME_FIELD {
                a.reference.cmp(&b.reference)
            } else {
                let av = a.get(&order.field);
                let bv = b.get(&order.field);
                compare_optional_value(av, bv)
            };
            let ordering = match order.direction {
                Direction::Ascending => ordering,
                Direction::Descending => ordering.reverse(),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

fn compare_optional_value(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

pub fn value_from_cursor_proto(v: &pb::Value) -> Value {
    value_from_proto(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentSnapshot;
    use std::collections::BTreeMap;

    fn doc(name: &str, field: Option<i64>) -> DocumentSnapshot {
        let mut fields = BTreeMap::new();
        if let Some(v) = field {
            fields.insert("n".to_string(), Value::Integer(v));
        }
        DocumentSnapshot {
            reference: Path::parse(name),
            fields: Some(fields),
            create_time: None,
            update_time: None,
            read_time: None,
        }
    }

    #[test]
    fn no_explicit_order_falls_back_to_name_ascending() {
        let q = Query::collection(Path::root(), "c");
        let cmp = q.comparator();
        let a = doc("c/a", None);
        let b = doc("c/b", None);
        assert_eq!(cmp.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn explicit_order_gets_name_tiebreak_in_same_direction() {
        let q = Query::collection(Path::root(), "c").with_order("n", Direction::Descending);
        let cmp = q.comparator();
        let a = doc("c/a", Some(1));
        let b = doc("c/b", Some(1));
        // equal on "n", tie-break on __name__ descending too
        assert_eq!(cmp.compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn structural_equality_is_field_by_field() {
        let q1 = Query::collection(Path::root(), "c").with_limit(10);
        let q2 = Query::collection(Path::root(), "c").with_limit(10);
        assert_eq!(q1, q2);
        let q3 = q2.with_limit(11);
        assert_ne!(q1, q3);
    }
}
