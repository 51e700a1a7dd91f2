//! # Ledger
//!
//! The in-memory record store: an ordered list of [`Sale`]s in insertion order.
//!
//! ## Id Assignment
//!
//! New ids are derived, not counted: `next_id()` is always the current maximum id plus one
//! (1 for an empty ledger). Refunding the highest id and then selling again therefore hands
//! out that same id a second time. Ids never collide, but they are not monotonic across the
//! lifetime of a ledger.
//!
//! ## Selecting Sales
//!
//! Users refer to a sale either by id or by name. A [`SaleSelector`] is parsed from the raw
//! token: anything that parses as an integer is an id, everything else is a name matched
//! case-insensitively. When several sales share a name the first one in ledger order wins.

use crate::model::Sale;
use std::convert::Infallible;
use std::str::FromStr;

/// A user input naming a sale, either by id or by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaleSelector {
    Id(i64),
    Name(String),
}

impl SaleSelector {
    pub fn matches(&self, sale: &Sale) -> bool {
        match self {
            SaleSelector::Id(id) => u64::try_from(*id).is_ok_and(|id| id == sale.id),
            SaleSelector::Name(name) => sale.name.to_lowercase() == name.to_lowercase(),
        }
    }
}

impl FromStr for SaleSelector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<i64>() {
            Ok(id) => Ok(SaleSelector::Id(id)),
            Err(_) => Ok(SaleSelector::Name(s.to_string())),
        }
    }
}

impl std::fmt::Display for SaleSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaleSelector::Id(id) => write!(f, "ID {}", id),
            SaleSelector::Name(name) => write!(f, "\"{}\"", name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    sales: Vec<Sale>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sales(sales: Vec<Sale>) -> Self {
        Self { sales }
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sale> + '_ {
        self.sales.iter()
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.sales.iter().map(|s| s.id).max().unwrap_or(0) + 1
    }

    pub fn find(&self, selector: &SaleSelector) -> Option<&Sale> {
        self.sales.iter().find(|s| selector.matches(s))
    }

    pub fn find_mut(&mut self, selector: &SaleSelector) -> Option<&mut Sale> {
        self.sales.iter_mut().find(|s| selector.matches(s))
    }

    pub fn push(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    /// Removes the first sale matching `selector`, keeping the others in order.
    pub fn remove(&mut self, selector: &SaleSelector) -> Option<Sale> {
        let pos = self.sales.iter().position(|s| selector.matches(s))?;
        Some(self.sales.remove(pos))
    }

    pub fn replace(&mut self, sales: Vec<Sale>) {
        self.sales = sales;
    }

    pub fn clear(&mut self) {
        self.sales.clear();
    }
}
