use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Map, Number, Value};

/// A stored record as plain JSON, attribute names as keys.
pub type Item = Map<String, Value>;

pub fn from_dynamo_item(item: &HashMap<String, AttributeValue>) -> Item {
    item.iter()
        .map(|(name, attr)| (name.clone(), to_json(attr)))
        .collect()
}

fn to_json(attr: &AttributeValue) -> Value {
    match attr {
        AttributeValue::S(s) => Value::String(s.clone()),
        AttributeValue::N(n) => number(n),
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(values.iter().map(to_json).collect()),
        AttributeValue::M(map) => Value::Object(from_dynamo_item(map)),
        AttributeValue::Ss(values) => {
            Value::Array(values.iter().cloned().map(Value::String).collect())
        }
        AttributeValue::Ns(values) => Value::Array(values.iter().map(|n| number(n)).collect()),
        // binary attributes are never written for movies
        other => {
            tracing::warn!("Skipping unsupported attribute value: {:?}", other);
            Value::Null
        }
    }
}

/// Numbers that fit neither `i64`/`u64` nor an exact `f64` round trip are kept as
/// their original string.
fn number(n: &str) -> Value {
    n.parse::<i64>()
        .map(Number::from)
        .or_else(|_| n.parse::<u64>().map(Number::from))
        .ok()
        .or_else(|| {
            n.parse::<f64>()
                .ok()
                .filter(|f| f.to_string() == n)
                .and_then(Number::from_f64)
        })
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(n.to_string()))
}
