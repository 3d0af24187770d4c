//! Console-menu adapter for the inventory core.
//!
//! Presentation glue only: prompts, parsing of raw input, and rendering.
//! Every business rule lives in `stockroom-inventory`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use stockroom_core::DomainError;
use stockroom_inventory::Inventory;

#[derive(Debug, Parser)]
#[command(name = "stockroom", about = "Flat-file inventory manager")]
struct Args {
    /// Backing file (defaults to records/inventory.txt next to the
    /// executable).
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    stockroom_observability::init();

    let args = Args::parse();
    let mut inventory = match args.file {
        Some(path) => Inventory::open(path),
        None => Inventory::open_default(),
    };

    println!(
        "stockroom — {} record(s) loaded from {}",
        inventory.len(),
        inventory.path().display()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut input, "> ")? else {
            break;
        };
        match choice.trim() {
            "1" => add(&mut input, &mut inventory)?,
            "2" => list(&inventory),
            "3" => find(&mut input, &inventory)?,
            "4" => search(&mut input, &inventory)?,
            "5" => update(&mut input, &mut inventory)?,
            "6" => remove(&mut input, &mut inventory)?,
            "7" | "q" => break,
            "" => {}
            other => println!("Unknown option: {other}"),
        }
    }

    println!("Bye.");
    Ok(())
}

fn print_menu() {
    println!();
    println!("1) Add product");
    println!("2) List products");
    println!("3) Find by id");
    println!("4) Search by name");
    println!("5) Update quantity/price");
    println!("6) Remove product");
    println!("7) Quit");
}

fn add(input: &mut impl BufRead, inventory: &mut Inventory) -> Result<()> {
    let Some(id) = prompt_i64(input, "Id: ", Some(1))? else {
        return Ok(());
    };
    let Some(name) = prompt(input, "Name: ")? else {
        return Ok(());
    };
    let Some(quantity) = prompt_i64(input, "Quantity: ", Some(0))? else {
        return Ok(());
    };
    let Some(price) = prompt_f64(input, "Price: ")? else {
        return Ok(());
    };

    match inventory.add_product(id, &name, quantity, price) {
        Ok(true) => println!("Added."),
        Ok(false) => println!("A product with id {id} already exists."),
        Err(err) => report(&err),
    }
    Ok(())
}

fn list(inventory: &Inventory) {
    if inventory.is_empty() {
        println!("Inventory is empty.");
        return;
    }
    for product in inventory.list() {
        println!("{product}");
    }
}

fn find(input: &mut impl BufRead, inventory: &Inventory) -> Result<()> {
    let Some(id) = prompt_i64(input, "Id: ", Some(1))? else {
        return Ok(());
    };
    match inventory.find_by_id(id) {
        Some(product) => println!("{product}"),
        None => println!("No product with id {id}."),
    }
    Ok(())
}

fn search(input: &mut impl BufRead, inventory: &Inventory) -> Result<()> {
    let Some(text) = prompt(input, "Name contains: ")? else {
        return Ok(());
    };
    let hits = inventory.search_by_name(text.trim());
    if hits.is_empty() {
        println!("No matches.");
    }
    for product in hits {
        println!("{product}");
    }
    Ok(())
}

fn update(input: &mut impl BufRead, inventory: &mut Inventory) -> Result<()> {
    let Some(id) = prompt_i64(input, "Id: ", Some(1))? else {
        return Ok(());
    };
    let Some(quantity) = prompt_i64_or_keep(input, "New quantity (blank to keep): ")? else {
        return Ok(());
    };
    let Some(price) = prompt_f64_or_keep(input, "New price (blank to keep): ")? else {
        return Ok(());
    };

    match inventory.update(id, quantity, price) {
        Ok(true) => println!("Updated."),
        Ok(false) => println!("No product with id {id}."),
        Err(err) => report(&err),
    }
    Ok(())
}

fn remove(input: &mut impl BufRead, inventory: &mut Inventory) -> Result<()> {
    let Some(id) = prompt_i64(input, "Id: ", Some(1))? else {
        return Ok(());
    };
    if inventory.remove(id) {
        println!("Removed.");
    } else {
        println!("No product with id {id}.");
    }
    Ok(())
}

fn report(err: &DomainError) {
    println!("Rejected: {err}");
}

/// Print `message` and read one line. `None` on end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end().to_string()))
}

/// Keep asking until the answer parses as an integer (optionally bounded
/// below). `None` on end of input.
fn prompt_i64(input: &mut impl BufRead, message: &str, minimum: Option<i64>) -> Result<Option<i64>> {
    loop {
        let Some(raw) = prompt(input, message)? else {
            return Ok(None);
        };
        match raw.trim().parse::<i64>() {
            Ok(value) => match minimum {
                Some(min) if value < min => println!("Must be >= {min}."),
                _ => return Ok(Some(value)),
            },
            Err(_) => println!("Enter a valid integer."),
        }
    }
}

/// Keep asking until the answer parses as a number. `None` on end of input.
fn prompt_f64(input: &mut impl BufRead, message: &str) -> Result<Option<f64>> {
    loop {
        let Some(raw) = prompt(input, message)? else {
            return Ok(None);
        };
        match raw.trim().parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Enter a valid number."),
        }
    }
}

/// Like [`prompt_i64`], but an empty answer means "leave unchanged".
/// Outer `None` on end of input.
fn prompt_i64_or_keep(input: &mut impl BufRead, message: &str) -> Result<Option<Option<i64>>> {
    loop {
        let Some(raw) = prompt(input, message)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Some(None));
        }
        match raw.parse::<i64>() {
            Ok(value) => return Ok(Some(Some(value))),
            Err(_) => println!("Enter a valid integer."),
        }
    }
}

/// Like [`prompt_f64`], but an empty answer means "leave unchanged".
/// Outer `None` on end of input.
fn prompt_f64_or_keep(input: &mut impl BufRead, message: &str) -> Result<Option<Option<f64>>> {
    loop {
        let Some(raw) = prompt(input, message)? else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Some(None));
        }
        match raw.parse::<f64>() {
            Ok(value) => return Ok(Some(Some(value))),
            Err(_) => println!("Enter a valid number."),
        }
    }
}
