/*
 * ==========================================================================
 * DM RUNTIME - Truthiness Core
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 * Website:  https://www.pawx-lang.com
 * Github:   https://github.com/samwilcox/pawx
 *
 * License:
 * This file is part of the DM runtime shipped with the PAWX toolchain.
 *
 * The DM runtime is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 * Full license text available at:
 *    https://license.pawx-lang.com
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use serde::{Serialize, Serializer};
use serde_json::{json, Number, Value as JsonValue};

use crate::error::RuntimeError;
use crate::value::Value;

/// Type path given to references built from JSON arrays.
pub const LIST_TYPE: &str = "/list";

/// Type path given to references built from JSON objects.
pub const DATUM_TYPE: &str = "/datum";

impl Value {
    /// Builds a runtime value from a parsed JSON value.
    ///
    /// # Mapping
    /// - `null` → `Null`
    /// - `true` / `false` → `1` / `0` (DM has no booleans)
    /// - integers that fit in 32 bits → `Int`
    /// - any other number → `Double`
    /// - strings → `Text`
    /// - arrays → a `/list` reference holding the array
    /// - objects → a `/datum` reference holding the object
    pub fn from_json(json: &JsonValue) -> Value {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::from_bool(*b),
            JsonValue::Number(n) => number_from_json(n),
            JsonValue::String(s) => Value::Text(s.clone()),
            JsonValue::Array(_) => Value::object(LIST_TYPE, json.clone()),
            JsonValue::Object(_) => Value::object(DATUM_TYPE, json.clone()),
        }
    }

    /// Renders the value back to JSON.
    ///
    /// References built by [`Value::from_json`] give back their payload;
    /// other references become `{"$ref": "<type path>"}`. Numbers JSON
    /// cannot hold (NaN, infinities) become `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Double(n) => float_to_json(*n),
            // go through the shortest decimal form so 0.1f32 stays 0.1
            Value::Float(n) => float_to_json(n.to_string().parse().unwrap_or(f64::from(*n))),
            Value::Int(n) => JsonValue::from(*n),
            Value::Text(s) => JsonValue::String(s.clone()),
            Value::Ref(r) => match r.downcast_ref::<JsonValue>() {
                Some(payload) => payload.clone(),
                None => json!({ "$ref": r.type_path() }),
            },
            Value::Null => JsonValue::Null,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Parses one runtime value from JSON text.
pub fn parse_value(text: &str) -> Result<Value, RuntimeError> {
    let json = parse_json(text)?;
    Ok(Value::from_json(&json))
}

/// Parses a JSON array into one runtime value per element.
///
/// Elements are converted individually; nested arrays and objects become
/// references, they are not flattened.
pub fn parse_values(text: &str) -> Result<Vec<Value>, RuntimeError> {
    match parse_json(text)? {
        JsonValue::Array(items) => Ok(items.iter().map(Value::from_json).collect()),
        other => Err(RuntimeError::type_error(format!(
            "expected a JSON array of values, found {}",
            json_kind(&other)
        ))
        .with_help("wrap the values in [ ... ]")),
    }
}

fn parse_json(text: &str) -> Result<JsonValue, RuntimeError> {
    serde_json::from_str(text).map_err(|e| RuntimeError::json_error(e.to_string()))
}

fn number_from_json(n: &Number) -> Value {
    if let Some(i) = n.as_i64().and_then(|i| i32::try_from(i).ok()) {
        return Value::Int(i);
    }

    // as_f64 only fails with arbitrary precision enabled
    Value::Double(n.as_f64().unwrap_or(f64::NAN))
}

fn float_to_json(n: f64) -> JsonValue {
    Number::from_f64(n).map_or(JsonValue::Null, JsonValue::Number)
}

fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
