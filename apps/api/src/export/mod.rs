//! Export trigger — rasterizes the rendered document and assembles the PDF
//! download. A pure side effect over the renderer's output; editing state is
//! never touched, success or failure.

pub mod handlers;
mod pdf;

pub use pdf::assemble_pdf;

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

use crate::render::VisualDocument;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rasterizer error: {0}")]
    Rasterize(String),

    #[error("PDF assembly error: {0}")]
    Pdf(String),
}

/// The rasterization collaborator: visual document in, PNG page image out.
/// Carried in `AppState` as `Arc<dyn Rasterizer>` so tests can stub it.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(&self, document: &VisualDocument) -> Result<Bytes, ExportError>;
}

/// Device scale asked of the rasterizer; doubles the pixel density of the
/// page image the PDF embeds.
const RASTER_SCALE: u32 = 2;

#[derive(Debug, Serialize)]
struct RasterizeRequest<'a> {
    html: &'a str,
    width_px: u32,
    scale: u32,
}

/// Posts the document to the companion rasterizer service (a headless
/// browser behind an HTTP endpoint) and returns the PNG it produces.
pub struct HttpRasterizer {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRasterizer {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }
}

#[async_trait]
impl Rasterizer for HttpRasterizer {
    async fn rasterize(&self, document: &VisualDocument) -> Result<Bytes, ExportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&RasterizeRequest {
                html: &document.html,
                width_px: document.page_width_px,
                scale: RASTER_SCALE,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExportError::Rasterize(format!(
                "rasterizer returned {status}: {body}"
            )));
        }

        Ok(response.bytes().await?)
    }
}

/// Download filename: the person's name with only its first space replaced
/// by an underscore, suffixed `_Resume.pdf`.
pub fn export_filename(name: &str) -> String {
    format!("{}_Resume.pdf", name.replacen(' ', "_", 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_replaces_first_space_only() {
        assert_eq!(export_filename("Alex Doe"), "Alex_Doe_Resume.pdf");
        assert_eq!(
            export_filename("Mary Jane Watson"),
            "Mary_Jane Watson_Resume.pdf"
        );
    }

    #[test]
    fn test_export_filename_without_spaces() {
        assert_eq!(export_filename("Cher"), "Cher_Resume.pdf");
    }
}
