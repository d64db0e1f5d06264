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

use std::error::Error;
use std::fmt;

/// Error raised at the fallible edges of the runtime.
///
/// Truthiness and the boolean-context helpers never produce one; only
/// loading values from outside the runtime (JSON constants, fixtures) can
/// fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    /// Stable error code (E_JSON, E_TYPE, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional note / help text
    pub help: Option<String>,
}

impl RuntimeError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            help: None,
        }
    }

    /// Malformed JSON input
    pub fn json_error(message: impl Into<String>) -> Self {
        Self::new("E_JSON", message)
    }

    /// Well-formed input of the wrong shape
    pub fn type_error(message: impl Into<String>) -> Self {
        Self::new("E_TYPE", message)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;

        if let Some(help) = &self.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl Error for RuntimeError {}
