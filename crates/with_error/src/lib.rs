// Copyright © Emberfall 2022-present

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//    https://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Contract-violation helpers.
//!
//! A broken precondition (an illegal parameter index, a mismatched node type)
//! is a programmer error, not a recoverable runtime condition. In debug builds
//! these helpers panic at the failure site so the stack trace points at the
//! bug. In release builds they produce an [anyhow::Error] instead, which the
//! search runner turns into one failed iteration without taking down its
//! sibling workers.

use std::convert::Infallible;
use std::error;
use std::fmt::Display;

use anyhow::{Context, Error};

/// True when contract violations should panic rather than propagate.
pub const PANIC_ON_ERROR: bool = cfg!(debug_assertions);

/// Checks a precondition, like [anyhow::ensure] but panicking in debug builds.
#[macro_export]
macro_rules! verify {
    ($($tts:tt)*) => {
        if with_error::PANIC_ON_ERROR {
            assert!($($tts)*);
        } else {
            use anyhow::ensure;
            ensure!($($tts)*);
        }
    }
}

/// Reports an unconditional contract violation, like [anyhow::bail] but
/// panicking in debug builds.
#[macro_export]
macro_rules! fail {
    ($($tts:tt)*) => {
        if with_error::PANIC_ON_ERROR {
            panic!($($tts)*);
        } else {
            use anyhow::bail;
            bail!($($tts)*);
        }
    }
}

pub trait WithError<T, E> {
    /// Attaches lazily-evaluated context to an error, like
    /// [anyhow::Context::with_context], honoring [PANIC_ON_ERROR].
    fn with_error<C, F>(self, f: F) -> Result<T, Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T> WithError<T, Infallible> for Option<T> {
    fn with_error<C, F>(self, context: F) -> Result<T, Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        #[allow(unreachable_code)]
        if PANIC_ON_ERROR {
            self.with_context(|| {
                panic!("Error: {}", context());
                ""
            })
        } else {
            self.with_context(context)
        }
    }
}

impl<T, E> WithError<T, E> for Result<T, E>
where
    E: error::Error + Send + Sync + 'static,
{
    fn with_error<C, F>(self, context: F) -> Result<T, Error>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        #[allow(unreachable_code)]
        if PANIC_ON_ERROR {
            self.with_context(|| {
                panic!("Error: {}", context());
                ""
            })
        } else {
            self.with_context(context)
        }
    }
}
