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

//! Order parsing and receipt integration tests.

use barista_demo_rs::{AddOn, Beverage, MenuError, MenuItem, Priced, Receipt};
use rust_decimal_macros::dec;

// === Order Parsing ===

#[test]
fn parse_plain_beverage() {
    let item: MenuItem = "espresso".parse().unwrap();
    assert_eq!(item, MenuItem::new(Beverage::Espresso));
}

#[test]
fn parse_caramel_macchiato_order() {
    let item: MenuItem = "espresso + milk + caramel + whipped cream".parse().unwrap();

    assert_eq!(item.cost(), dec!(4.35));
    assert_eq!(item.describe(), "Espresso, Milk, Caramel, Whipped Cream");
}

#[test]
fn parse_is_case_and_whitespace_tolerant() {
    let item: MenuItem = "  Coffee+MILK +  Vanilla  ".parse().unwrap();
    let expected = MenuItem::new(Beverage::Coffee)
        .with(AddOn::Milk)
        .with(AddOn::Vanilla);
    assert_eq!(item, expected);
}

#[test]
fn parse_repeated_add_ons() {
    let item: MenuItem = "espresso + extra shot + extra shot".parse().unwrap();
    assert_eq!(item.cost(), dec!(4.50));
    assert_eq!(item.describe(), "Espresso, Extra Shot, Extra Shot");
}

#[test]
fn parse_unknown_beverage_fails() {
    let result = "cappuccino + milk".parse::<MenuItem>();
    assert_eq!(
        result,
        Err(MenuError::UnknownBeverage("cappuccino".to_string()))
    );
}

#[test]
fn parse_unknown_add_on_fails() {
    let result = "tea + honey".parse::<MenuItem>();
    assert_eq!(result, Err(MenuError::UnknownAddOn("honey".to_string())));
}

#[test]
fn parse_empty_order_fails() {
    let result = "".parse::<MenuItem>();
    assert_eq!(result, Err(MenuError::EmptyOrder));
}

#[test]
fn parse_dangling_separator_fails() {
    let result = "coffee +".parse::<MenuItem>();
    assert_eq!(result, Err(MenuError::UnknownAddOn(String::new())));
}

// === Receipts ===

#[test]
fn receipt_snapshot_of_parsed_order() {
    let item: MenuItem = "coffee + milk + chocolate + whipped cream".parse().unwrap();
    let receipt = Receipt::new(&item);

    assert_eq!(receipt.description(), "Coffee, Milk, Chocolate, Whipped Cream");
    assert_eq!(receipt.total(), dec!(3.95));
}

#[test]
fn receipt_display_format() {
    let item: MenuItem = "tea + milk + vanilla".parse().unwrap();
    let receipt = Receipt::new(&item);

    assert_eq!(
        receipt.to_string(),
        "  Tea, Milk, Vanilla\n  Price: $2.85\n"
    );
}

#[test]
fn receipt_is_a_snapshot() {
    // Wrapping the item after taking a receipt does not change the receipt
    let item = MenuItem::new(Beverage::Coffee).with(AddOn::Sugar);
    let receipt = Receipt::new(&item);

    let upgraded = item.with(AddOn::WhippedCream);

    assert_eq!(receipt.total(), dec!(2.30));
    assert_eq!(upgraded.cost(), dec!(3.00));
}

// === Customer Orders (mixed bases, mixed chains) ===

#[test]
fn a_round_of_orders() {
    let orders = [
        ("coffee + milk + chocolate", dec!(3.25)),
        ("coffee + sugar", dec!(2.30)),
        ("espresso + caramel + whipped cream", dec!(3.85)),
        ("tea + milk + vanilla", dec!(2.85)),
    ];

    for (spec, expected) in orders {
        let item: MenuItem = spec.parse().unwrap();
        assert_eq!(item.cost(), expected, "wrong total for order {spec:?}");
    }
}
