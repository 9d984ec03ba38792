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

//! Receipt formatting.
//!
//! A [`Receipt`] snapshots the description and total of any priced item for
//! display or serialization. Prices are rounded to cents on output.

use crate::item::Priced;
use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;

/// A priced order line ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    description: String,
    total: Decimal,
}

impl Receipt {
    const PRICE_PRECISION: u32 = 2;

    /// Captures the description and total of an item.
    pub fn new(item: &dyn Priced) -> Self {
        Self {
            description: item.describe(),
            total: item.cost(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

impl fmt::Display for Receipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Price: ${:.2}", self.total)
    }
}

impl Serialize for Receipt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Receipt", 2)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("price", &self.total.round_dp(Receipt::PRICE_PRECISION))?;
        state.end()
    }
}
