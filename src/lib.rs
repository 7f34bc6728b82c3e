/*
 * SPDX-FileCopyrightText: 2025 The graph-distances authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]
#![allow(clippy::type_complexity)]

#[cfg(feature = "cli")]
pub mod cli;
pub mod components;
pub mod distances;
pub mod error;
pub mod graphs;
pub mod traits;
pub mod visits;

#[macro_use]
pub mod utils;

pub use error::{DistanceError, Result};

pub mod prelude {
    pub use crate::components::*;
    pub use crate::distances::*;
    pub use crate::error::DistanceError;
    pub use crate::graphs::prelude::*;
    pub use crate::traits::*;
    pub use crate::visits::breadth_first;
}
