#![cfg(feature = "core")]

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zugferd_generator::core::*;

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn valid_record() -> InvoiceRecord {
    InvoiceRecord {
        id: "INV-001".into(),
        issue_date: date(2024, 1, 1),
        currency: "EUR".into(),
        total_amount: Some(dec!(1000)),
        supplier: Party {
            name: "Example Supplier Ltd.".into(),
            country: "DE".into(),
            ..Party::default()
        },
        customer: Party {
            name: "Example Customer Ltd.".into(),
            country: "US".into(),
            ..Party::default()
        },
        tax_total: TaxSummary {
            tax_amount: Some(dec!(200)),
            tax_percentage: Some(dec!(20)),
        },
        line_items: vec![LineItem {
            id: "ITEM-001".into(),
            description: "Product A".into(),
            quantity: Some(dec!(5)),
            unit_price: Some(dec!(200)),
            line_total: Some(dec!(1000)),
        }],
        ..InvoiceRecord::default()
    }
}

#[test]
fn valid_record_passes() {
    let record = valid_record();
    assert!(missing_fields(&record).is_empty());
    assert!(validate(&record).is_ok());
}

#[test]
fn empty_record_reports_full_checklist_in_order() {
    let missing = missing_fields(&InvoiceRecord::default());
    assert_eq!(
        missing,
        vec![
            "id",
            "issueDate",
            "currency",
            "totalAmount",
            "supplier.name",
            "supplier.country",
            "customer.name",
            "customer.country",
            "taxTotal.taxAmount",
            "taxTotal.taxPercentage",
            "lineItems (at least one line item is required)",
        ]
    );
}

#[test]
fn validation_error_message_joins_paths() {
    let err = validate(&InvoiceRecord::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing required field(s): id, issueDate, currency, totalAmount, \
         supplier.name, supplier.country, customer.name, customer.country, \
         taxTotal.taxAmount, taxTotal.taxPercentage, \
         lineItems (at least one line item is required)"
    );
    assert_eq!(err.missing_fields().unwrap().len(), 11);
}

#[test]
fn zero_counts_as_present_for_numeric_fields() {
    let mut record = valid_record();
    record.total_amount = Some(dec!(0));
    record.tax_total.tax_amount = Some(dec!(0));
    record.tax_total.tax_percentage = Some(dec!(0));
    record.line_items[0].quantity = Some(dec!(0));
    record.line_items[0].unit_price = Some(dec!(0));
    record.line_items[0].line_total = Some(dec!(0));
    assert!(missing_fields(&record).is_empty());
}

#[test]
fn empty_string_counts_as_missing() {
    // Asymmetry with numeric fields: "" is missing, Some(0) is present.
    let mut record = valid_record();
    record.id = String::new();
    record.line_items[0].description = String::new();
    assert_eq!(missing_fields(&record), vec!["id", "lineItems[0].description"]);
}

#[test]
fn incomplete_supplier_reports_both_paths() {
    let mut record = valid_record();
    record.supplier = Party::default();
    assert_eq!(
        missing_fields(&record),
        vec!["supplier.name", "supplier.country"]
    );
}

#[test]
fn line_item_violations_use_zero_based_index() {
    let mut record = valid_record();
    record.line_items.push(LineItem {
        id: "ITEM-002".into(),
        description: String::new(),
        quantity: None,
        unit_price: Some(dec!(10)),
        line_total: None,
    });
    assert_eq!(
        missing_fields(&record),
        vec![
            "lineItems[1].description",
            "lineItems[1].quantity",
            "lineItems[1].lineTotal",
        ]
    );
}

#[test]
fn empty_line_items_is_a_single_violation() {
    let mut record = valid_record();
    record.line_items.clear();
    assert_eq!(
        missing_fields(&record),
        vec!["lineItems (at least one line item is required)"]
    );
}

#[test]
fn optional_fields_are_not_required() {
    let mut record = valid_record();
    record.due_date = None;
    record.notes.clear();
    record.payment_details = None;
    record.supplier.street = None;
    record.supplier.tax_number = None;
    assert!(validate(&record).is_ok());
}

#[test]
fn incomplete_json_record_reports_missing_fields() {
    // JSON-shaped input with whole sub-objects absent.
    let record: InvoiceRecord = serde_json::from_str(
        r#"{
            "id": "INV-002",
            "issueDate": "20240101",
            "currency": "EUR",
            "totalAmount": 500,
            "customer": {"name": "Customer Ltd.", "country": "US"},
            "taxTotal": {"taxAmount": 100, "taxPercentage": 20}
        }"#,
    )
    .unwrap();
    assert_eq!(
        missing_fields(&record),
        vec![
            "supplier.name",
            "supplier.country",
            "lineItems (at least one line item is required)",
        ]
    );
}
