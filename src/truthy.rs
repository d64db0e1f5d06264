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

use crate::value::{Reference, Value};

/// Determines whether a runtime `Value` is considered **truthy** in DM.
///
/// This function defines the **boolean coercion rules** used by:
/// - Logical operators (`!`, `&&`, `||`)
/// - Conditional statements (`if`, `else if`, `while`, `do ... while`)
/// - Short-circuit evaluation
///
/// # Truthiness Rules
/// The following values are considered **false**:
/// - `Value::Double(0.0)`, `Value::Float(0.0)` (and negative zero)
/// - `Value::Int(0)`
/// - `Value::Text("")` (empty string)
/// - `Value::Null`
///
/// All other values are considered **true**, including:
/// - Non-zero numbers, NaN included (it is not equal to zero)
/// - Non-empty strings, even `"0"` or whitespace
/// - Any reference
///
/// # Parameters
/// - `value` → The runtime `Value` to test for truthiness
///
/// # Returns
/// - `true` if the value is truthy
/// - `false` if the value is falsy
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Double(d) => *d != 0.0,
        Value::Float(f) => *f != 0.0,
        Value::Int(i) => *i != 0,
        Value::Text(s) => !s.is_empty(),
        // anything else only has to exist
        Value::Ref(_) | Value::Null => !value.is_null(),
    }
}

impl Value {
    /// Method form of [`is_truthy`].
    pub fn is_truthy(&self) -> bool {
        is_truthy(self)
    }
}

/// Truthiness as a capability of plain Rust values.
///
/// Native code that hands numbers or strings to the runtime gets the same
/// answer it would after boxing them into a `Value`.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        is_truthy(self)
    }
}

impl Truthy for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for i32 {
    fn is_truthy(&self) -> bool {
        *self != 0
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        self.as_str().is_truthy()
    }
}

impl Truthy for Reference {
    fn is_truthy(&self) -> bool {
        true
    }
}

/// `None` is the null reference. `Option<String>` is a nullable string:
/// null and empty are both falsy.
impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}
