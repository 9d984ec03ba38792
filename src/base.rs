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

//! Base beverage variants.

use crate::error::MenuError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A base drink with a fixed price and label.
///
/// Beverages carry no state beyond their identity and are freely copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Beverage {
    Coffee,
    Espresso,
    Tea,
}

impl Beverage {
    /// Fixed base price in dollars.
    pub fn price(&self) -> Decimal {
        match self {
            Self::Coffee => dec!(2.00),
            Self::Espresso => dec!(2.50),
            Self::Tea => dec!(1.75),
        }
    }

    /// Fixed menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Coffee => "Coffee",
            Self::Espresso => "Espresso",
            Self::Tea => "Tea",
        }
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Beverage {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "coffee" => Ok(Self::Coffee),
            "espresso" => Ok(Self::Espresso),
            "tea" => Ok(Self::Tea),
            other => Err(MenuError::UnknownBeverage(other.to_string())),
        }
    }
}
