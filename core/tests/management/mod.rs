// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the calendar registry.

mod copy;
mod registry;
