// SPDX-FileCopyrightText: 2025-2026 Shiftcal Developers
//
// SPDX-License-Identifier: Apache-2.0

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    shiftcal_cli::run().await
}
