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

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Runtime value representation for transpiled DM procs.
///
/// Every local, argument and field in transpiled code is an untyped slot;
/// this is what can sit in one. The numeric variants mirror the boxed
/// numbers the code generator emits (`Float` being the canonical DM number),
/// and everything that is not a number or text is a `Ref`.
#[derive(Clone)]
pub enum Value {
    // Boxed numbers
    Double(f64),
    Float(f32),
    Int(i32),

    // Text. A null string is `Null`, never an empty `Text`.
    Text(String),

    // Non-null handle to any other host object (datums, lists, …)
    Ref(Reference),

    // The absent reference
    Null,
}

/// Shared, thread-safe handle to a host object.
///
/// The runtime never looks inside the object; it only needs to know that
/// the reference exists. The type path (`/mob`, `/list`) is kept as a label
/// for display and for callers that want to recover the concrete type.
#[derive(Clone)]
pub struct Reference {
    type_path: Arc<str>,
    object: Arc<dyn Any + Send + Sync>,
}

impl Reference {
    pub fn new<T>(type_path: impl Into<String>, object: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            type_path: Arc::from(type_path.into()),
            object: Arc::new(object),
        }
    }

    pub fn type_path(&self) -> &str {
        &self.type_path
    }

    /// Borrows the referenced object if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.object.downcast_ref::<T>()
    }

    /// Identity check: both handles point at the same object.
    pub fn ptr_eq(a: &Reference, b: &Reference) -> bool {
        Arc::ptr_eq(&a.object, &b.object)
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ref {}]", self.type_path)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Double(n) => write!(f, "Double({})", n),
            Value::Float(n) => write!(f, "Float({})", n),
            Value::Int(n) => write!(f, "Int({})", n),
            Value::Text(s) => write!(f, "Text({:?})", s),
            Value::Ref(r) => write!(f, "Ref({:?})", r),
            Value::Null => write!(f, "Null"),
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value the way DM's text embedding would.
    ///
    /// Integral numbers print without a fraction (`5`, not `5.0`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Double(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Int(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Ref(r) => write!(f, "[ref {}]", r.type_path()),
            Value::Null => f.write_str("null"),
        }
    }
}

impl Value {
    /// Canonical DM number. Integer and float literals are both boxed as
    /// single-precision floats by the code generator.
    pub fn number(n: f32) -> Value {
        Value::Float(n)
    }

    /// DM has no boolean type: comparisons and `!` yield `1` or `0`.
    ///
    /// # Returns
    /// - `Float(1.0)` for `true`
    /// - `Float(0.0)` for `false`
    pub fn from_bool(b: bool) -> Value {
        Value::Float(if b { 1.0 } else { 0.0 })
    }

    pub fn text(s: impl Into<String>) -> Value {
        Value::Text(s.into())
    }

    /// Wraps a host object into a reference value.
    pub fn object<T>(type_path: impl Into<String>, object: T) -> Value
    where
        T: Any + Send + Sync,
    {
        Value::Ref(Reference::new(type_path, object))
    }

    /// Returns a stable type name string (useful for errors).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Double(_) => "double",
            Value::Float(_)  => "float",
            Value::Int(_)    => "int",
            Value::Text(_)   => "text",
            Value::Ref(_)    => "ref",
            Value::Null      => "null",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Attempts to extract a number, widened to `f64`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Double(n) => Some(*n),
            Value::Float(n) => Some(f64::from(*n)),
            Value::Int(n) => Some(f64::from(*n)),
            _ => None,
        }
    }

    /// Attempts to extract a string slice.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Attempts to extract a reference.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            Value::Ref(r) => Some(r),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Reference> for Value {
    fn from(r: Reference) -> Self {
        Value::Ref(r)
    }
}

/// `None` is the null reference; this is how nullable host slots
/// (`Option<String>`, `Option<Reference>`) enter the runtime.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
