// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers

mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_dates, assert_same_instances, assert_subjects};
#[allow(unused_imports)]
pub use fixtures::{at, day, management_with, standup_series, timed_draft};
