//! Receipts dataset rules.
//!
//! Receipts are the only dataset cross-checked against the others: the
//! owning user and each item's brand must exist in the reference sets. The
//! receipt total is also reconciled with its priced items.

use crate::record::{non_empty_str, present};
use crate::{DatasetValidator, Record, ReferenceSets, SeenIds};
use dqa_core::{
    DEFAULT_FINANCIAL_TOLERANCE, Dataset, IssueCategory, IssueRegistry, display_value,
    format_amount, render_timestamp, to_number,
};
use serde_json::{Map, Value};

const ITEM_LIST_FIELD: &str = "rewardsReceiptItemList";

/// Validates records of the receipts dataset.
#[derive(Debug)]
pub struct ReceiptsValidator<'a> {
    references: &'a ReferenceSets,
    tolerance: f64,
    seen: SeenIds,
}

impl<'a> ReceiptsValidator<'a> {
    /// Creates a validator reading the given reference sets.
    pub fn new(references: &'a ReferenceSets) -> Self {
        Self {
            references,
            tolerance: DEFAULT_FINANCIAL_TOLERANCE,
            seen: SeenIds::default(),
        }
    }

    /// Sets the absolute tolerance of the total-spent check.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn check_user(&self, record_id: &str, record: &Record, issues: &mut IssueRegistry) {
        let known = record
            .get_str("userId")
            .is_some_and(|user_id| self.references.has_user(user_id));

        if !known {
            issues.log(
                IssueCategory::OrphanRecord,
                Dataset::Receipts,
                record_id,
                format!(
                    "Contains userId '{}' which does not exist in {}.",
                    display_value(record.get("userId")),
                    self.references.users_source()
                ),
            );
        }
    }

    fn check_dates(&self, record_id: &str, record: &Record, issues: &mut IssueRegistry) {
        if let (Some(scanned), Some(purchased)) =
            (record.date("dateScanned"), record.date("purchaseDate"))
        {
            if purchased > scanned {
                issues.log(
                    IssueCategory::LogicalInconsistency,
                    Dataset::Receipts,
                    record_id,
                    format!(
                        "purchaseDate {} is after dateScanned {}.",
                        render_timestamp(&purchased),
                        render_timestamp(&scanned)
                    ),
                );
            }
        }
    }

    fn check_item_count(
        &self,
        record_id: &str,
        record: &Record,
        items: &[Value],
        issues: &mut IssueRegistry,
    ) {
        let Some(count) = record.get_present("purchasedItemCount") else {
            return;
        };

        if count.as_f64() != Some(items.len() as f64) {
            issues.log(
                IssueCategory::InconsistentCount,
                Dataset::Receipts,
                record_id,
                format!(
                    "purchasedItemCount ({}) does not match {} count ({}).",
                    display_value(Some(count)),
                    ITEM_LIST_FIELD,
                    items.len()
                ),
            );
        }
    }

    /// Checks item brand links and returns the sum of item prices, or `None`
    /// if no item carried a usable price.
    fn check_items(
        &self,
        record_id: &str,
        items: &[Value],
        issues: &mut IssueRegistry,
    ) -> Option<f64> {
        let mut calculated_total = 0.0;
        let mut has_price = false;

        for item in items.iter().filter_map(Value::as_object) {
            if let Some(brand_code) = non_empty_str(item.get("brandCode")) {
                if !self.references.has_brand_code(brand_code) {
                    issues.log(
                        IssueCategory::OrphanItemBrandLink,
                        Dataset::Receipts,
                        record_id,
                        format!(
                            "Item has brandCode '{}' which does not exist in {}.",
                            brand_code,
                            self.references.brands_source()
                        ),
                    );
                }
            }

            // Unconvertible prices are skipped without a finding
            if let Some(price) = item_price(item).and_then(to_number) {
                calculated_total += price;
                has_price = true;
            }
        }

        has_price.then_some(calculated_total)
    }

    fn check_total(
        &self,
        record_id: &str,
        record: &Record,
        calculated_total: f64,
        issues: &mut IssueRegistry,
    ) {
        let raw = record.get("totalSpent");
        let total_spent = match raw {
            None => Some(0.0),
            Some(value) => to_number(value),
        };

        match total_spent {
            None => {
                issues.log(
                    IssueCategory::InvalidValue,
                    Dataset::Receipts,
                    record_id,
                    format!("totalSpent is not a valid number: '{}'.", display_value(raw)),
                );
            }
            // NaN never falls within tolerance
            Some(spent) if !((calculated_total - spent).abs() < self.tolerance) => {
                issues.log(
                    IssueCategory::FinancialInconsistency,
                    Dataset::Receipts,
                    record_id,
                    format!(
                        "totalSpent ({}) does not match sum of item prices ({:.2}).",
                        format_amount(spent),
                        calculated_total
                    ),
                );
            }
            Some(_) => {}
        }
    }
}

/// `finalPrice` when set, `itemPrice` otherwise.
fn item_price(item: &Map<String, Value>) -> Option<&Value> {
    present(item.get("finalPrice")).or_else(|| present(item.get("itemPrice")))
}

impl DatasetValidator for ReceiptsValidator<'_> {
    fn dataset(&self) -> Dataset {
        Dataset::Receipts
    }

    fn duplicate_message(&self) -> &'static str {
        "Receipt ID is duplicated in the file."
    }

    fn seen_ids(&mut self) -> &mut SeenIds {
        &mut self.seen
    }

    fn check_record(&self, record_id: &str, record: &Record, issues: &mut IssueRegistry) {
        self.check_user(record_id, record, issues);
        self.check_dates(record_id, record, issues);

        let items = record
            .get(ITEM_LIST_FIELD)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        self.check_item_count(record_id, record, items, issues);

        if let Some(calculated_total) = self.check_items(record_id, items, issues) {
            self.check_total(record_id, record, calculated_total, issues);
        }
    }
}
