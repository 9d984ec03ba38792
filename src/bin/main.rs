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

use barista_demo_rs::{MenuItem, Receipt};
use clap::Parser;
use csv::{ReaderBuilder, Trim, Writer};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;
use std::process;

/// Barista - Price beverage order CSV files
///
/// Reads orders from a CSV file and outputs priced receipts to stdout.
/// Each order is a base beverage plus an optional list of add-ons.
#[derive(Parser, Debug)]
#[command(name = "barista-demo-rs")]
#[command(about = "A pricing tool that turns beverage order CSVs into receipts", long_about = None)]
struct Args {
    /// Path to CSV file with orders
    ///
    /// Expected format: beverage,add_ons
    /// Example: cargo run -- orders.csv > receipts.csv
    #[arg(value_name = "FILE")]
    input: PathBuf,
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // Open input file
    let file = match File::open(&args.input) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Error opening file '{}': {}", args.input.display(), e);
            process::exit(1);
        }
    };

    // Price orders from CSV
    let receipts = match process_orders(BufReader::new(file)) {
        Ok(receipts) => receipts,
        Err(e) => {
            eprintln!("Error processing orders: {}", e);
            process::exit(1);
        }
    };

    // Write results to stdout
    if let Err(e) = write_receipts(&receipts, std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Raw CSV record matching the input format.
///
/// Fields: `beverage, add_ons` where `add_ons` is a `+`-separated list
/// and may be omitted entirely.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    beverage: String,
    add_ons: Option<String>,
}

impl CsvRecord {
    /// Converts a CSV record to a MenuItem.
    ///
    /// Returns `None` for unknown beverage or add-on names.
    fn into_item(self) -> Option<MenuItem> {
        let mut item = MenuItem::new(self.beverage.parse().ok()?);
        if let Some(add_ons) = self.add_ons {
            for part in add_ons.split('+').map(str::trim).filter(|p| !p.is_empty()) {
                item = item.with(part.parse().ok()?);
            }
        }
        Some(item)
    }
}

/// Price orders from a CSV reader.
///
/// Rows are parsed in a streaming fashion; malformed rows and unknown menu
/// names are silently skipped rather than aborting the run.
///
/// # CSV Format
///
/// Expected columns: `beverage, add_ons`
/// - `beverage`: Base drink name (coffee, espresso, tea)
/// - `add_ons`: Optional `+`-separated add-on names
///
/// # Example
///
/// ```csv
/// beverage,add_ons
/// espresso,milk + caramel + whipped cream
/// coffee,
/// tea,milk + vanilla
/// ```
///
/// # Errors
///
/// Returns a CSV error if the reader fails or the CSV structure is invalid.
pub fn process_orders<R: Read>(reader: R) -> Result<Vec<Receipt>, csv::Error> {
    let mut receipts = Vec::new();

    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All) // Handle whitespace in fields like " espresso "
        .flexible(true) // Allow missing add_ons field
        .has_headers(true) // Skip first row as header
        .from_reader(reader);

    for result in rdr.deserialize::<CsvRecord>() {
        match result {
            Ok(record) => {
                let Some(item) = record.into_item() else {
                    #[cfg(debug_assertions)]
                    eprintln!("Skipping order with unknown menu name");
                    continue;
                };
                receipts.push(Receipt::new(&item));
            }
            Err(e) => {
                // Skip malformed rows
                #[cfg(debug_assertions)]
                eprintln!("Skipping malformed row: {}", e);
                continue;
            }
        }
    }

    Ok(receipts)
}

/// Write receipts to a CSV writer.
///
/// Outputs all receipts with prices rounded to cents.
///
/// # CSV Format
///
/// Columns: `description, price`
///
/// # Example
///
/// ```csv
/// description,price
/// "Espresso, Milk, Caramel, Whipped Cream",4.35
/// Coffee,2.00
/// ```
///
/// # Errors
///
/// Returns a CSV error if writing fails.
pub fn write_receipts<W: Write>(receipts: &[Receipt], writer: W) -> Result<(), csv::Error> {
    let mut wtr = Writer::from_writer(writer);

    for receipt in receipts {
        wtr.serialize(receipt)?;
    }

    // Flush to ensure all data is written
    wtr.flush()?;
    Ok(())
}
