use core::fmt;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult};

/// Field separator used in the backing file: `id|name|quantity|price`.
pub const FIELD_SEPARATOR: char = '|';

/// Substitute for separator characters occurring inside a name, so that a
/// serialized line always splits back into exactly four fields.
const SEPARATOR_SUBSTITUTE: &str = "/";

/// Product identifier: a positive integer, unique across the inventory.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Validate and wrap a raw id. Ids must be strictly positive.
    pub fn new(raw: i64) -> DomainResult<Self> {
        if raw <= 0 {
            return Err(DomainError::validation("id must be a positive integer"));
        }
        Ok(Self(raw))
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single inventory record.
///
/// Fields are private and only reachable through validated accessors, so an
/// invalid product can never be observed. The id is fixed at construction;
/// nothing rewrites it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    quantity: i64,
    price: f64,
}

impl Product {
    /// Validated constructor.
    ///
    /// Checks run in field order {id, name, quantity, price} and fail on the
    /// first violation. The name is stored trimmed.
    pub fn new(id: i64, name: &str, quantity: i64, price: f64) -> DomainResult<Self> {
        let id = ProductId::new(id)?;
        let name = validate_name(name)?;
        validate_quantity(quantity)?;
        validate_price(price)?;
        Ok(Self {
            id,
            name,
            quantity,
            price,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_name(&mut self, name: &str) -> DomainResult<()> {
        self.name = validate_name(name)?;
        Ok(())
    }

    pub fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        validate_quantity(quantity)?;
        self.quantity = quantity;
        Ok(())
    }

    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Serialize to one line of the backing file.
    ///
    /// Separator characters inside the name are substituted so the line is
    /// guaranteed to split back into exactly four parts. Price keeps its
    /// default formatting here; two-decimal rendering is display-only.
    pub fn to_line(&self) -> String {
        let safe_name = self.name.replace(FIELD_SEPARATOR, SEPARATOR_SUBSTITUTE);
        format!(
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.id, safe_name, self.quantity, self.price
        )
    }

    /// Parse one line of the backing file.
    ///
    /// A line that does not split into exactly four parts, or whose numeric
    /// fields do not parse, fails with [`DomainError::Format`]. The parsed
    /// fields then go through the same validation as [`Product::new`].
    pub fn from_line(line: &str) -> DomainResult<Self> {
        let parts: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
        if parts.len() != 4 {
            return Err(DomainError::format(format!(
                "expected 4 fields, found {}",
                parts.len()
            )));
        }

        let id: i64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| DomainError::format(format!("id is not an integer: {:?}", parts[0])))?;
        let quantity: i64 = parts[2].trim().parse().map_err(|_| {
            DomainError::format(format!("quantity is not an integer: {:?}", parts[2]))
        })?;
        let price: f64 = parts[3]
            .trim()
            .parse()
            .map_err(|_| DomainError::format(format!("price is not a number: {:?}", parts[3])))?;

        Self::new(id, parts[1], quantity, price)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Quantity: {} | Price: ${:.2}",
            self.id, self.name, self.quantity, self.price
        )
    }
}

fn validate_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("name cannot be blank"));
    }
    Ok(trimmed.to_string())
}

fn validate_quantity(quantity: i64) -> DomainResult<()> {
    if quantity < 0 {
        return Err(DomainError::validation("quantity must be >= 0"));
    }
    Ok(())
}

fn validate_price(price: f64) -> DomainResult<()> {
    // "Number >= 0" is taken to mean a finite number; NaN and infinities
    // are rejected here rather than stored.
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("price must be >= 0"));
    }
    Ok(())
}
