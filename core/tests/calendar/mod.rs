// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for a single calendar.

mod edit;
mod query;
mod series;
