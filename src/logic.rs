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

//! Boolean-context helpers for transpiled proc bodies.
//!
//! The code generator never branches on a value directly; every `if`,
//! loop guard and logical operator is routed through these so that all of
//! them share one truthiness rule.

use crate::truthy::is_truthy;
use crate::value::Value;

/// Branch test for `if` / `else if` / `while` / `do ... while` / `for` guards.
pub fn condition(value: &Value) -> bool {
    is_truthy(value)
}

/// `!x`: `1` when `x` is falsy, `0` otherwise.
pub fn not(value: &Value) -> Value {
    Value::from_bool(!is_truthy(value))
}

/// `lhs && rhs`.
///
/// The left operand is evaluated once. If it is falsy it is returned as-is
/// and `rhs` is never evaluated; otherwise the result is whatever `rhs`
/// yields. Neither operand is coerced.
///
/// # Example
/// ```
/// use dm_runtime::{logic, Value};
///
/// let picked = logic::and(Value::text("a"), || Value::text("b"));
/// assert_eq!(picked.as_text(), Some("b"));
///
/// let short = logic::and(Value::Null, || Value::text("skipped"));
/// assert!(short.is_null());
/// ```
pub fn and<F>(lhs: Value, rhs: F) -> Value
where
    F: FnOnce() -> Value,
{
    if is_truthy(&lhs) {
        rhs()
    } else {
        lhs
    }
}

/// `lhs || rhs`.
///
/// If the left operand is truthy it is returned as-is and `rhs` is never
/// evaluated; otherwise the result is whatever `rhs` yields.
pub fn or<F>(lhs: Value, rhs: F) -> Value
where
    F: FnOnce() -> Value,
{
    if is_truthy(&lhs) {
        lhs
    } else {
        rhs()
    }
}

/// `cond ? then : otherwise`, evaluating only the chosen branch.
pub fn select<A, B>(cond: &Value, then: A, otherwise: B) -> Value
where
    A: FnOnce() -> Value,
    B: FnOnce() -> Value,
{
    if is_truthy(cond) {
        then()
    } else {
        otherwise()
    }
}
