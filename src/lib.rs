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

//! Runtime core for transpiled DM procs.
//!
//! Values in transpiled code are untyped slots holding a boxed number,
//! text, a reference to a host object, or nothing. This crate provides
//! that representation and the single rule every boolean context goes
//! through: [`is_truthy`].
//!
//! ```
//! use dm_runtime::{is_truthy, Value};
//!
//! assert!(!is_truthy(&Value::Int(0)));
//! assert!(is_truthy(&Value::text("0")));
//! assert!(!is_truthy(&Value::Null));
//! ```

pub mod error;
pub mod json;
pub mod logic;
pub mod truthy;
pub mod value;

pub use error::RuntimeError;
pub use json::{parse_value, parse_values};
pub use truthy::{is_truthy, Truthy};
pub use value::{Reference, Value};
