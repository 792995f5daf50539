//! Print/export trigger for receipt documents.
//!
//! A [`PrintJob`] wraps a rendered receipt into a standalone page sized for
//! A5 landscape that calls the browser's print dialog as soon as it loads.
//! In [`PrintMode::Print`] the page closes itself after printing; in
//! [`PrintMode::SavePdf`] it stays open so the user can pick "Salvar como PDF".
//!
//! A [`PrintSurface`] is wherever the page is opened. Opening either succeeds
//! or fails fast with [`Error::PrintSurfaceUnavailable`]; there is no retry and
//! no fallback to another surface. Nothing is written to the database.

use crate::{
    core::document::DocumentRenderer,
    entities::receipt,
    errors::{Error, Result},
};
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

const PRINT_STYLE: &str = "* { margin: 0; padding: 0; box-sizing: border-box; }
      body { font-family: Arial, sans-serif; }
      @media print {
        @page { size: A5 landscape; margin: 10mm; }
      }";

const SAVE_PDF_HINT: &str =
    "Use 'Salvar como PDF' na janela de impressão para baixar o recibo.";

/// What the print dialog is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// Print a hard copy, then close the page
    Print,
    /// Keep the page open so the dialog can save a PDF
    SavePdf,
}

impl PrintMode {
    fn on_load_script(self) -> &'static str {
        match self {
            Self::Print => "window.onload = function() { window.print(); window.close(); };",
            Self::SavePdf => "window.onload = function() { window.print(); };",
        }
    }
}

/// A standalone printable page for one receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    receipt_number: String,
    mode: PrintMode,
    html: String,
}

impl PrintJob {
    /// Renders `receipt` and wraps it into a printable page.
    ///
    /// # Errors
    /// Returns an error if the document cannot be rendered.
    pub fn new(
        renderer: &DocumentRenderer,
        receipt: &receipt::Model,
        mode: PrintMode,
    ) -> Result<Self> {
        let body = renderer.render(receipt)?;
        let title = format!("Recibo {}", receipt.receipt_number);
        let html = format!(
            "<!DOCTYPE html>
<html>
  <head>
    <meta charset=\"utf-8\">
    <title>{title}</title>
    <style>
      {PRINT_STYLE}
    </style>
  </head>
  <body>
{body}
    <script>
      {script}
    </script>
  </body>
</html>
",
            script = mode.on_load_script(),
        );

        Ok(Self {
            receipt_number: receipt.receipt_number.clone(),
            mode,
            html,
        })
    }

    /// Receipt number the page was built for.
    #[must_use]
    pub fn receipt_number(&self) -> &str {
        &self.receipt_number
    }

    /// Print mode of the page.
    #[must_use]
    pub const fn mode(&self) -> PrintMode {
        self.mode
    }

    /// Complete page markup.
    #[must_use]
    pub fn html(&self) -> &str {
        &self.html
    }

    /// File name used when the page is saved or attached, `REC-2026-003.html`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.html", self.receipt_number)
    }

    /// Message to show next to the page, if the mode needs one.
    #[must_use]
    pub const fn user_hint(&self) -> Option<&'static str> {
        match self.mode {
            PrintMode::Print => None,
            PrintMode::SavePdf => Some(SAVE_PDF_HINT),
        }
    }
}

/// Where a print job ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintOutcome {
    /// Written to a file
    Exported {
        /// Location of the written page
        path: PathBuf,
    },
    /// Handed to a chat reply
    Delivered,
}

/// A place where printable pages are opened.
pub trait PrintSurface {
    /// Opens `job` on this surface.
    ///
    /// # Errors
    /// Returns [`Error::PrintSurfaceUnavailable`] if the surface cannot be opened.
    fn open(&self, job: &PrintJob) -> impl Future<Output = Result<PrintOutcome>> + Send;
}

/// Writes printable pages into a directory, one file per receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDirectory {
    dir: PathBuf,
}

impl ExportDirectory {
    /// Surface writing into `dir`; the directory is created on first use.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl PrintSurface for ExportDirectory {
    #[instrument(skip(self, job), fields(receipt = %job.receipt_number(), dir = %self.dir.display()))]
    async fn open(&self, job: &PrintJob) -> Result<PrintOutcome> {
        let unavailable = |e: std::io::Error| {
            warn!("Cannot open export directory: {e}");
            Error::PrintSurfaceUnavailable {
                reason: format!("{}: {e}", self.dir.display()),
            }
        };

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(unavailable)?;
        let path = self.dir.join(job.file_name());
        tokio::fs::write(&path, job.html()).await.map_err(unavailable)?;

        info!("Exported printable receipt to {}", path.display());
        Ok(PrintOutcome::Exported { path })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::sample_receipt_model;

    fn job(mode: PrintMode) -> PrintJob {
        let renderer = DocumentRenderer::new().unwrap();
        PrintJob::new(&renderer, &sample_receipt_model(), mode).unwrap()
    }

    #[test]
    fn test_print_page_structure() {
        let job = job(PrintMode::Print);
        let html = job.html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Recibo REC-2026-003</title>"));
        assert!(html.contains("@page { size: A5 landscape; margin: 10mm; }"));
        assert!(html.contains("Recibo de Pagamento"));
        assert!(html.contains("window.print(); window.close();"));
        assert_eq!(job.file_name(), "REC-2026-003.html");
        assert_eq!(job.user_hint(), None);
        assert_eq!(job.mode(), PrintMode::Print);
    }

    #[test]
    fn test_save_pdf_page_stays_open() {
        let job = job(PrintMode::SavePdf);
        assert!(job.html().contains("window.print();"));
        assert!(!job.html().contains("window.close()"));
        assert_eq!(job.user_hint(), Some(SAVE_PDF_HINT));
    }

    #[tokio::test]
    async fn test_export_directory_writes_page() {
        let tmp = tempfile::tempdir().unwrap();
        let surface = ExportDirectory::new(tmp.path().join("recibos"));
        let job = job(PrintMode::SavePdf);

        let outcome = surface.open(&job).await.unwrap();
        let expected = tmp.path().join("recibos").join("REC-2026-003.html");
        assert_eq!(
            outcome,
            PrintOutcome::Exported {
                path: expected.clone()
            }
        );
        assert_eq!(std::fs::read_to_string(expected).unwrap(), job.html());
    }

    #[tokio::test]
    async fn test_blocked_surface_fails_fast() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        std::fs::write(&blocker, "occupied").unwrap();

        let surface = ExportDirectory::new(&blocker);
        let result = surface.open(&job(PrintMode::Print)).await;
        assert!(matches!(
            result,
            Err(Error::PrintSurfaceUnavailable { .. })
        ));
    }
}
