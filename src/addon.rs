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

//! Add-on customizations.
//!
//! Each add-on kind is a fixed `(surcharge, label)` pair. The kinds differ
//! only in that data, so they are a single enum rather than one type per
//! add-on.

use crate::error::MenuError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A priced customization applied on top of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AddOn {
    Milk,
    Sugar,
    WhippedCream,
    Vanilla,
    Caramel,
    Chocolate,
    ExtraShot,
}

impl AddOn {
    /// Every add-on kind, in menu order.
    pub const ALL: [AddOn; 7] = [
        AddOn::Milk,
        AddOn::Sugar,
        AddOn::WhippedCream,
        AddOn::Vanilla,
        AddOn::Caramel,
        AddOn::Chocolate,
        AddOn::ExtraShot,
    ];

    /// Fixed amount this add-on adds to the price.
    pub fn surcharge(&self) -> Decimal {
        match self {
            Self::Milk => dec!(0.50),
            Self::Sugar => dec!(0.30),
            Self::WhippedCream => dec!(0.70),
            Self::Vanilla => dec!(0.60),
            Self::Caramel => dec!(0.65),
            Self::Chocolate => dec!(0.75),
            Self::ExtraShot => dec!(1.00),
        }
    }

    /// Fixed label appended to the description.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Milk => "Milk",
            Self::Sugar => "Sugar",
            Self::WhippedCream => "Whipped Cream",
            Self::Vanilla => "Vanilla",
            Self::Caramel => "Caramel",
            Self::Chocolate => "Chocolate",
            Self::ExtraShot => "Extra Shot",
        }
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AddOn {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "milk" => Ok(Self::Milk),
            "sugar" => Ok(Self::Sugar),
            "whipped cream" => Ok(Self::WhippedCream),
            "vanilla" => Ok(Self::Vanilla),
            "caramel" => Ok(Self::Caramel),
            "chocolate" => Ok(Self::Chocolate),
            "extra shot" => Ok(Self::ExtraShot),
            other => Err(MenuError::UnknownAddOn(other.to_string())),
        }
    }
}
