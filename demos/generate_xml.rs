use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zugferd_generator::ZugferdGenerator;
use zugferd_generator::core::*;

fn main() {
    let record = InvoiceRecord {
        id: "RE-2024-001".into(),
        issue_date: NaiveDate::from_ymd_opt(2024, 6, 15),
        due_date: NaiveDate::from_ymd_opt(2024, 7, 15),
        currency: "EUR".into(),
        total_amount: Some(dec!(3570.00)),
        supplier: Party {
            name: "ACME GmbH".into(),
            country: "DE".into(),
            street: Some("Friedrichstraße 123".into()),
            postal_code: Some("10115".into()),
            city: Some("Berlin".into()),
            tax_number: Some("DE123456789".into()),
            legal_entity_id: Some("HRB 12345 B".into()),
        },
        customer: Party {
            name: "Kunde AG".into(),
            country: "DE".into(),
            city: Some("München".into()),
            ..Party::default()
        },
        tax_total: TaxSummary {
            tax_amount: Some(dec!(570.00)),
            tax_percentage: Some(dec!(19)),
        },
        payment_details: Some(PaymentInfo {
            payment_means_code: Some("58".into()),
            payment_id: Some("RE-2024-001".into()),
            bank_details: Some(BankDetails {
                account_name: Some("ACME GmbH".into()),
                iban: Some("DE89370400440532013000".into()),
                bic: Some("COBADEFFXXX".into()),
                bank_name: Some("Commerzbank".into()),
            }),
        }),
        notes: vec!["Zahlbar innerhalb von 30 Tagen".into()],
        line_items: vec![LineItem {
            id: "1".into(),
            description: "IT-Beratung".into(),
            quantity: Some(dec!(20)),
            unit_price: Some(dec!(150)),
            line_total: Some(dec!(3000)),
        }],
    };

    match ZugferdGenerator::new(&record) {
        Ok(generator) => println!("{}", generator.as_xml()),
        Err(e) => eprintln!("invoice rejected: {e}"),
    }
}
