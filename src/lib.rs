//! # zugferd-generator
//!
//! Generates ZUGFeRD electronic invoices: validates an invoice record
//! against the mandatory field set, serializes it to CII
//! (Cross Industry Invoice) XML, and optionally embeds the XML into an
//! existing PDF as a named file attachment.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use zugferd_generator::core::*;
//! use zugferd_generator::ZugferdGenerator;
//!
//! let record = InvoiceRecord {
//!     id: "INV-001".into(),
//!     issue_date: NaiveDate::from_ymd_opt(2024, 1, 15),
//!     currency: "EUR".into(),
//!     total_amount: Some(dec!(119.00)),
//!     supplier: Party { name: "ACME GmbH".into(), country: "DE".into(), ..Party::default() },
//!     customer: Party { name: "Kunde AG".into(), country: "DE".into(), ..Party::default() },
//!     tax_total: TaxSummary { tax_amount: Some(dec!(19.00)), tax_percentage: Some(dec!(19)) },
//!     line_items: vec![LineItem {
//!         id: "1".into(),
//!         description: "Beratung".into(),
//!         quantity: Some(dec!(1)),
//!         unit_price: Some(dec!(100.00)),
//!         line_total: Some(dec!(100.00)),
//!     }],
//!     ..InvoiceRecord::default()
//! };
//!
//! let generator = ZugferdGenerator::new(&record).unwrap();
//! assert!(generator.as_xml().contains("rsm:CrossIndustryInvoice"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Invoice record types and mandatory-field validation |
//! | `cii` (default) | CII XML serialization and the [`ZugferdGenerator`] wrapper |
//! | `pdf` | PDF attachment embedding |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "cii")]
pub mod cii;

#[cfg(feature = "cii")]
mod generator;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "cii")]
pub use generator::ZugferdGenerator;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
