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

//! Menu item composition.
//!
//! A [`MenuItem`] is either a base beverage or an add-on wrapped around an
//! inner item, forming a singly linked chain:
//!
//! ```text
//! Customized(WhippedCream) ──► Customized(Caramel) ──► Base(Espresso)
//! ```
//!
//! Wrapping consumes the inner item, so a chain is always acyclic and never
//! mutated after construction. Cost accumulates over the chain in any order;
//! the description lists the base label first and then each add-on in the
//! order it was applied, outermost last.
//!
//! # Example
//!
//! ```
//! use barista_demo_rs::{AddOn, Beverage, MenuItem, Priced};
//! use rust_decimal_macros::dec;
//!
//! let drink = MenuItem::new(Beverage::Espresso)
//!     .with(AddOn::Milk)
//!     .with(AddOn::Caramel);
//! assert_eq!(drink.cost(), dec!(3.65));
//! assert_eq!(drink.describe(), "Espresso, Milk, Caramel");
//! ```

use crate::addon::AddOn;
use crate::base::Beverage;
use crate::error::MenuError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// The capability shared by everything on the menu: a price and a label.
///
/// Both [`Beverage`] and [`MenuItem`] implement this, so callers that only
/// need to price and describe an item can take `&dyn Priced`.
pub trait Priced {
    /// Total price of the item.
    fn cost(&self) -> Decimal;

    /// Full composed label of the item.
    fn describe(&self) -> String;
}

/// An orderable item: a base beverage plus zero or more add-ons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// A plain beverage with no customizations.
    Base(Beverage),
    /// An add-on wrapped around an inner item.
    Customized {
        add_on: AddOn,
        /// Exclusively owned; wrapping takes ownership of the inner item.
        inner: Box<MenuItem>,
    },
}

impl MenuItem {
    /// Creates a plain item from a base beverage.
    pub fn new(beverage: Beverage) -> Self {
        Self::Base(beverage)
    }

    /// Wraps this item with an add-on, consuming it.
    ///
    /// The same add-on may be applied any number of times; each application
    /// independently adds its surcharge and appends its label.
    #[must_use]
    pub fn with(self, add_on: AddOn) -> Self {
        Self::Customized {
            add_on,
            inner: Box::new(self),
        }
    }

    /// Detaches and returns the inner item, leaving a leaf in its place.
    fn detach_inner(&mut self) -> Option<MenuItem> {
        match self {
            Self::Base(_) => None,
            Self::Customized { inner, .. } => {
                Some(std::mem::replace(inner.as_mut(), Self::Base(Beverage::Coffee)))
            }
        }
    }
}

impl Drop for MenuItem {
    /// Boxed chains drop recursively by default; unlink the chain first so
    /// deep chains cannot overflow the stack on drop either.
    fn drop(&mut self) {
        let mut next = self.detach_inner();
        while let Some(mut item) = next {
            next = item.detach_inner();
        }
    }
}

impl Priced for MenuItem {
    /// Walks the chain iteratively with an accumulator, so deep chains
    /// cannot overflow the stack.
    fn cost(&self) -> Decimal {
        let mut total = Decimal::ZERO;
        let mut node = self;
        loop {
            match node {
                Self::Base(beverage) => {
                    total += beverage.price();
                    break;
                }
                Self::Customized { add_on, inner } => {
                    total += add_on.surcharge();
                    node = inner;
                }
            }
        }
        debug_assert!(
            total >= Decimal::ZERO,
            "Invariant violated: item cost went negative: {total}"
        );
        total
    }

    /// Labels are collected outermost-first during the walk, then emitted in
    /// reverse so the description reads innermost (base) to outermost.
    fn describe(&self) -> String {
        let mut labels = Vec::new();
        let mut node = self;
        let base = loop {
            match node {
                Self::Base(beverage) => break beverage.label(),
                Self::Customized { add_on, inner } => {
                    labels.push(add_on.label());
                    node = inner;
                }
            }
        };

        let mut description = String::from(base);
        for label in labels.iter().rev() {
            description.push_str(", ");
            description.push_str(label);
        }
        debug_assert!(!description.is_empty(), "Invariant violated: empty description");
        description
    }
}

impl Priced for Beverage {
    fn cost(&self) -> Decimal {
        self.price()
    }

    fn describe(&self) -> String {
        self.label().to_string()
    }
}

impl From<Beverage> for MenuItem {
    fn from(beverage: Beverage) -> Self {
        Self::new(beverage)
    }
}

impl FromStr for MenuItem {
    type Err = MenuError;

    /// Parses an order specification of the form
    /// `"espresso + milk + caramel"`: a beverage name followed by
    /// `+`-separated add-on names, innermost add-on first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('+').map(str::trim);
        let base = parts
            .next()
            .filter(|part| !part.is_empty())
            .ok_or(MenuError::EmptyOrder)?;

        let mut item = Self::new(base.parse()?);
        for part in parts {
            item = item.with(part.parse()?);
        }
        Ok(item)
    }
}
