//! Printable receipt document.
//!
//! A receipt is laid out on a fixed A5 landscape canvas (210mm × 148mm):
//! header with the receipt number, the amount boxed in figures, a sentence
//! with the student's name and the amount in words, the description, the long
//! date, a signature line and a footer. Rendering is a pure function of the
//! stored receipt.

use crate::{
    core::{format, words},
    entities::receipt,
    errors::Result,
};
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATE_NAME: &str = "receipt.html";
const RECEIPT_TEMPLATE: &str = include_str!("../../templates/receipt.html");

/// Display values for one receipt, already formatted for print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptDocument {
    /// `REC-2026-003`
    pub receipt_number: String,
    /// Student name in upper case
    pub student_name: String,
    /// Amount in figures, `R$ 450,00`
    pub amount: String,
    /// Amount in words, `quatrocentos e cinquenta reais`
    pub amount_in_words: String,
    /// What the payment refers to
    pub description: String,
    /// Long date, `06 de janeiro de 2026`
    pub date: String,
}

impl ReceiptDocument {
    /// Formats a stored receipt for print.
    ///
    /// # Errors
    /// Returns an error if the amount cannot be written out in words.
    pub fn from_model(receipt: &receipt::Model) -> Result<Self> {
        Ok(Self {
            receipt_number: receipt.receipt_number.clone(),
            student_name: receipt.student_name.to_uppercase(),
            amount: format::format_currency(receipt.amount),
            amount_in_words: words::amount_to_words(receipt.amount)?,
            description: receipt.description.clone(),
            date: format::format_long_date(receipt.date),
        })
    }
}

/// Renders receipt documents from the bundled template.
///
/// All text is HTML-escaped.
#[derive(Debug, Clone)]
pub struct DocumentRenderer {
    tera: Tera,
}

impl DocumentRenderer {
    /// Compiles the receipt template.
    ///
    /// # Errors
    /// Returns an error if the template does not compile.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, RECEIPT_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Renders the markup for one receipt.
    ///
    /// # Errors
    /// Returns an error if the receipt cannot be formatted or the template fails.
    pub fn render(&self, receipt: &receipt::Model) -> Result<String> {
        let document = ReceiptDocument::from_model(receipt)?;
        let context = Context::from_serialize(&document)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }
}

/// Renders one receipt with a freshly compiled template.
///
/// # Errors
/// See [`DocumentRenderer::render`].
pub fn render_document(receipt: &receipt::Model) -> Result<String> {
    DocumentRenderer::new()?.render(receipt)
}
