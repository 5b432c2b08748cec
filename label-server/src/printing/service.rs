//! Label print service
//!
//! Orchestrates one webhook event end to end: fetch → extract → render →
//! print. Each stage reports its own failure; this service is the policy
//! point that decides none of them abort the event. A fetch failure
//! degrades to zero labels, a per-label device failure abandons that
//! label and keeps going with its siblings.

use chrono::Local;
use qicha_printer::LabelDocument;
use tracing::{error, info, instrument};

use crate::labels::{LabelExtractor, LabelRenderer};
use crate::square::{RetrieveOrderResponse, SquareClient};

/// Label print service
pub struct LabelPrintService {
    square: SquareClient,
    extractor: LabelExtractor,
    renderer: LabelRenderer,
    printer_name: String,
    // Only read on the Windows print path
    #[cfg_attr(not(windows), allow(dead_code))]
    logo_path: String,
}

impl LabelPrintService {
    /// Create a service printing through the named driver printer
    pub fn new(square: SquareClient, printer_name: &str, logo_path: &str) -> Self {
        Self {
            square,
            extractor: LabelExtractor::new(),
            renderer: LabelRenderer::default(),
            printer_name: printer_name.to_string(),
            logo_path: logo_path.to_string(),
        }
    }

    /// Process one order event: print a sticker for every drink in it
    ///
    /// Returns the number of labels actually printed. Never fails - every
    /// stage failure is logged and absorbed here.
    #[instrument(skip(self))]
    pub async fn process_order(&self, order_id: &str) -> usize {
        let response = match self.square.retrieve_order(order_id).await {
            Ok(r) => r,
            Err(e) => {
                error!(error = %e, "Order fetch failed, treating as empty order");
                RetrieveOrderResponse::default()
            }
        };

        let labels = self.extractor.extract(&response);
        if labels.is_empty() {
            info!("No labels to print");
            return 0;
        }

        info!(
            labels = labels.len(),
            printer = %self.printer_name,
            "Printing labels"
        );

        let mut printed = 0;
        for (i, record) in labels.iter().enumerate() {
            let doc = self.renderer.render(record, Local::now().naive_local());
            match self.print_label(&doc).await {
                Ok(()) => printed += 1,
                Err(e) => {
                    // Abandon this label, keep trying its siblings
                    error!(label = i + 1, error = %e, "Label print failed");
                }
            }
        }

        printed
    }

    /// Send one rendered label to the sticker printer
    #[cfg(windows)]
    async fn print_label(&self, doc: &LabelDocument) -> qicha_printer::PrintResult<()> {
        use qicha_printer::{Printer, WindowsPrinter};

        let online = WindowsPrinter::check_online(&self.printer_name).unwrap_or(false);
        tracing::debug!(printer = %self.printer_name, online, "Printer status");

        let logo = qicha_printer::load_logo(&self.logo_path)?;
        let printer = WindowsPrinter::new(&self.printer_name).with_logo(logo);
        printer.print(doc).await
    }

    /// Fallback for non-Windows: driver printing not supported
    #[cfg(not(windows))]
    async fn print_label(&self, _doc: &LabelDocument) -> qicha_printer::PrintResult<()> {
        Err(qicha_printer::PrintError::Unsupported(
            "label printing requires a Windows printer driver".to_string(),
        ))
    }
}

impl std::fmt::Debug for LabelPrintService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelPrintService")
            .field("printer_name", &self.printer_name)
            .finish()
    }
}
