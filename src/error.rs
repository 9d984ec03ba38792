// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 The barista-demo-rs authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Error types for order parsing.
//!
//! Composing a menu item never fails; errors only arise when turning
//! textual order specifications into items.

use thiserror::Error;

/// Order parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuError {
    /// Base beverage name is not on the menu
    #[error("unknown beverage: {0:?}")]
    UnknownBeverage(String),

    /// Add-on name is not on the menu
    #[error("unknown add-on: {0:?}")]
    UnknownAddOn(String),

    /// Order specification contains no beverage
    #[error("empty order specification")]
    EmptyOrder,
}
