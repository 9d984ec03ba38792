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

//! # Barista Demo
//!
//! This library provides a beverage pricing engine that composes base drinks
//! with priced add-on customizations and produces formatted receipts.
//!
//! ## Core Components
//!
//! - [`Priced`]: The capability every menu entry satisfies: `cost` and `describe`
//! - [`Beverage`]: Base drinks with fixed prices (coffee, espresso, tea)
//! - [`AddOn`]: Customizations with fixed surcharges (milk, sugar, syrups, ...)
//! - [`MenuItem`]: A beverage wrapped in zero or more add-ons
//! - [`Receipt`]: Display/serialization snapshot of a priced item
//! - [`MenuError`]: Error types for order parsing failures
//!
//! ## Example
//!
//! ```
//! use barista_demo_rs::{AddOn, Beverage, MenuItem, Priced};
//! use rust_decimal_macros::dec;
//!
//! // Build a caramel macchiato by wrapping add-ons around an espresso
//! let drink = MenuItem::new(Beverage::Espresso)
//!     .with(AddOn::Milk)
//!     .with(AddOn::Caramel)
//!     .with(AddOn::WhippedCream);
//!
//! assert_eq!(drink.cost(), dec!(4.35));
//! assert_eq!(drink.describe(), "Espresso, Milk, Caramel, Whipped Cream");
//! ```
//!
//! ## Immutability
//!
//! Every item is immutable after construction and wrapping consumes its
//! inner item, so chains are always acyclic and may be shared read-only.

mod addon;
mod base;
pub mod error;
pub mod item;
mod receipt;

pub use addon::AddOn;
pub use base::Beverage;
pub use error::MenuError;
pub use item::{MenuItem, Priced};
pub use receipt::Receipt;
