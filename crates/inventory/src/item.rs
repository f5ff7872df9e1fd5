use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockreport_core::{Entity, LocationId, PartId, StockItemId};

/// Catalogue part a stock item is an instance of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,
    pub name: String,
    /// Internal part number, if the host assigns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipn: Option<String>,
}

impl Part {
    pub fn new(id: PartId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ipn: None,
        }
    }
}

/// A physical stock item as currently stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    pub part: Part,
    pub location: LocationId,
    pub quantity: Decimal,
    /// Unit purchase price. Missing prices value the item at zero.
    #[serde(default)]
    pub purchase_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
}

impl StockItem {
    pub fn new(id: StockItemId, part: Part, location: LocationId, quantity: Decimal) -> Self {
        Self {
            id,
            part,
            location,
            quantity,
            purchase_price: None,
            serial: None,
            batch: None,
        }
    }

    pub fn with_purchase_price(mut self, price: Decimal) -> Self {
        self.purchase_price = Some(price);
        self
    }

    /// Unit price used for valuation (zero when no purchase price is recorded).
    pub fn unit_price(&self) -> Decimal {
        self.purchase_price.unwrap_or(Decimal::ZERO)
    }

    /// Value of `quantity` units of this item; `None` if the product overflows.
    pub fn value_of(&self, quantity: Decimal) -> Option<Decimal> {
        quantity.checked_mul(self.unit_price())
    }
}

impl Entity for StockItem {
    type Id = StockItemId;

    fn id(&self) -> &StockItemId {
        &self.id
    }
}
