use chrono::NaiveDate;
use rust_decimal_macros::dec;
use zugferd_generator::ZugferdGenerator;
use zugferd_generator::core::*;

fn main() {
    let record = InvoiceRecord {
        id: "RE-2024-002".into(),
        issue_date: NaiveDate::from_ymd_opt(2024, 6, 15),
        currency: "EUR".into(),
        total_amount: Some(dec!(119.00)),
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
            tax_amount: Some(dec!(19.00)),
            tax_percentage: Some(dec!(19)),
        },
        line_items: vec![LineItem {
            id: "1".into(),
            description: "Beratung".into(),
            quantity: Some(dec!(1)),
            unit_price: Some(dec!(100.00)),
            line_total: Some(dec!(100.00)),
        }],
        ..InvoiceRecord::default()
    };

    let generator = ZugferdGenerator::new(&record).expect("record should be valid");

    let input = std::env::args().nth(1).unwrap_or_else(|| "invoice.pdf".into());
    let pdf_bytes = match std::fs::read(&input) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("cannot read {input}: {e}");
            eprintln!("usage: embed_pdf <input.pdf>");
            std::process::exit(1);
        }
    };

    match generator.embed_in_pdf(&pdf_bytes) {
        Ok(output) => {
            let out_path = format!("{input}.zugferd.pdf");
            std::fs::write(&out_path, output).expect("write output PDF");
            println!("wrote {out_path}");
        }
        Err(e) => eprintln!("embedding failed: {e}"),
    }
}
