// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - form workflow and its collaborators.

pub mod form;
pub mod ids;

pub use form::ActivityForm;
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
