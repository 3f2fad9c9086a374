//! Editable, ordered list of line items.
//!
//! This is the state behind a bill or calculator form: rows are appended,
//! edited field by field and removed, and totals are recomputed from the
//! current snapshot after every change.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AggregateResult, LineItem, LineItemField, LineItemId, ensure_non_negative, parse_form_decimal,
};

use super::line_items::aggregate_line_items;

/// A line item together with the id it was given on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemEntry {
    /// Opaque id, unique within the process.
    pub id: LineItemId,
    /// The row's current values.
    pub item: LineItem,
}

/// An ordered collection of line items addressed by id.
///
/// # Example
///
/// ```
/// use supermart_engine::calculation::LineItemList;
/// use supermart_engine::models::LineItemField;
/// use rust_decimal::Decimal;
///
/// let mut list = LineItemList::new();
/// let id = list.append_blank(Decimal::from(16));
/// list.update_item(id, LineItemField::UnitRate, "250").unwrap();
///
/// let totals = list.totals().unwrap();
/// assert_eq!(totals.grand_total, Decimal::from(290));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineItemList {
    entries: Vec<LineItemEntry>,
}

impl LineItemList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line item and returns its new id.
    pub fn append_item(&mut self, item: LineItem) -> LineItemId {
        let id = LineItemId::new();
        self.entries.push(LineItemEntry { id, item });
        id
    }

    /// Appends a fresh row: quantity 1, unit rate 0, the given tax rate.
    pub fn append_blank(&mut self, default_tax_rate: Decimal) -> LineItemId {
        self.append_item(LineItem::new(
            String::new(),
            Decimal::ONE,
            Decimal::ZERO,
            default_tax_rate,
        ))
    }

    /// Removes a line item and returns it.
    ///
    /// Removing the last remaining row is allowed; the list becomes empty.
    pub fn remove_item(&mut self, id: LineItemId) -> EngineResult<LineItem> {
        let position = self.position(id)?;
        Ok(self.entries.remove(position).item)
    }

    /// Sets one field of a line item from the text typed into the form.
    ///
    /// Numeric fields accept blank text (cleared, counted as zero). Text
    /// that is not a number, or a negative number, is rejected and the row
    /// keeps its previous value.
    pub fn update_item(
        &mut self,
        id: LineItemId,
        field: LineItemField,
        value: &str,
    ) -> EngineResult<()> {
        let position = self.position(id)?;

        let parsed = match field {
            LineItemField::Description => None,
            _ => {
                let parsed = parse_form_decimal(field.as_str(), value)?;
                if let Some(number) = parsed {
                    ensure_non_negative(field.as_str(), number)?;
                }
                parsed
            }
        };

        let item = &mut self.entries[position].item;
        match field {
            LineItemField::Description => item.description = value.to_string(),
            LineItemField::Quantity => item.quantity = parsed,
            LineItemField::UnitRate => item.unit_rate = parsed,
            LineItemField::TaxRate => item.tax_rate = parsed,
        }

        Ok(())
    }

    /// Returns a line item by id.
    pub fn get(&self, id: LineItemId) -> Option<&LineItem> {
        self.entries
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.item)
    }

    /// Iterates entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItemEntry> {
        self.entries.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregates the current rows.
    pub fn totals(&self) -> EngineResult<AggregateResult> {
        aggregate_line_items(self.entries.iter().map(|entry| &entry.item))
    }

    fn position(&self, id: LineItemId) -> EngineResult<usize> {
        self.entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| EngineError::LineItemNotFound { id: id.to_string() })
    }
}
