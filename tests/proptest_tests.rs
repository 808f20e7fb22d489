//! Property-based tests for escaping, amount formatting, and validation.

#![cfg(feature = "cii")]

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use zugferd_generator::cii::{escape_xml, format_amount, to_cii_xml};
use zugferd_generator::core::*;

/// Reverse of `escape_xml`, entity by entity, ampersand last.
fn unescape_xml(value: &str) -> String {
    value
        .replace("&apos;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

fn arb_plain_text() -> impl Strategy<Value = String> {
    // No reserved characters.
    "[a-zA-Z0-9äöüÄÖÜß ._,;:()-]{0,40}"
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..6).prop_map(|(m, scale)| Decimal::new(m, scale))
}

fn record_with(lines: usize) -> InvoiceRecord {
    InvoiceRecord {
        id: "PROP-1".into(),
        issue_date: NaiveDate::from_ymd_opt(2024, 6, 15),
        currency: "EUR".into(),
        total_amount: Some(Decimal::from(100)),
        supplier: Party {
            name: "ACME GmbH".into(),
            country: "DE".into(),
            ..Party::default()
        },
        customer: Party {
            name: "Kunde AG".into(),
            country: "DE".into(),
            ..Party::default()
        },
        tax_total: TaxSummary {
            tax_amount: Some(Decimal::from(19)),
            tax_percentage: Some(Decimal::from(19)),
        },
        line_items: (0..lines)
            .map(|i| LineItem {
                id: format!("L{i}"),
                description: format!("Item {i}"),
                quantity: Some(Decimal::ONE),
                unit_price: Some(Decimal::from(10)),
                line_total: Some(Decimal::from(10)),
            })
            .collect(),
        ..InvoiceRecord::default()
    }
}

proptest! {
    #[test]
    fn escaping_is_identity_without_reserved_characters(s in arb_plain_text()) {
        prop_assert_eq!(escape_xml(&s), s);
    }

    #[test]
    fn escaped_text_contains_no_raw_reserved_characters(s in ".{0,60}") {
        let escaped = escape_xml(&s);
        // Strip the five legal entities; nothing reserved may remain.
        let stripped = escaped
            .replace("&amp;", "")
            .replace("&lt;", "")
            .replace("&gt;", "")
            .replace("&quot;", "")
            .replace("&apos;", "");
        prop_assert!(!stripped.contains(['&', '<', '>', '"', '\'']));
    }

    #[test]
    fn escaping_round_trips(s in ".{0,60}") {
        prop_assert_eq!(unescape_xml(&escape_xml(&s)), s);
    }

    #[test]
    fn amounts_always_have_exactly_two_decimals(d in arb_amount()) {
        let formatted = format_amount(d);
        let (int_part, frac_part) = formatted.split_once('.').expect("decimal point");
        prop_assert_eq!(frac_part.len(), 2);
        prop_assert!(frac_part.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(int_part.trim_start_matches('-').chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn complete_records_always_validate(lines in 1usize..8) {
        let record = record_with(lines);
        prop_assert!(validate(&record).is_ok());
        let xml = to_cii_xml(&record).unwrap();
        prop_assert_eq!(
            xml.matches("<ram:IncludedSupplyChainTradeLineItem>").count(),
            lines
        );
    }

    #[test]
    fn serializer_never_fails_on_incomplete_records(
        id in ".{0,10}",
        amount in proptest::option::of(arb_amount()),
    ) {
        // The serializer trusts its caller; even unvalidated records must
        // yield well-formed output rather than an error.
        let record = InvoiceRecord {
            id,
            total_amount: amount,
            ..InvoiceRecord::default()
        };
        let xml = to_cii_xml(&record).unwrap();
        prop_assert!(xml.contains("</rsm:CrossIndustryInvoice>"));
    }
}
