//! Preview popup methods
//!
//! Opens the popup for the cursor entry, queues the preview download the
//! resolver chose, and decodes arriving bytes into a terminal image
//! protocol in the background.

use crate::logic::entry::{display_name, is_directory};
use crate::logic::preview::resolve_preview;
use crate::model::PreviewPopupState;
use crate::services::api::{ApiRequest, Priority};
use crate::{log_debug, App, ImageMetadata, ImagePreviewState};

impl App {
    /// Open the preview popup for the entry under the cursor.
    pub(crate) fn open_preview_popup(&mut self) {
        let Some(entry) = self.model.cursor_entry().cloned() else {
            return;
        };

        let preview = resolve_preview(&entry, &self.mount);

        // Clear any old image state for this key to prevent stale renders
        self.image_state_map.remove(&entry.key);

        let popup = PreviewPopupState {
            key: entry.key.clone(),
            display_name: display_name(&entry.key).to_string(),
            content_type: entry.content_type().to_string(),
            size: entry.size,
            uploaded: entry.uploaded.clone(),
            is_directory: is_directory(&entry),
            preview: preview.clone(),
        };
        self.model.ui.preview_popup = Some(popup);

        // Only fetch when there is a surface to show and a protocol to show it with
        if self.image_picker.is_none() {
            return;
        }
        if let Some(url) = preview.url() {
            self.image_state_map
                .insert(entry.key.clone(), ImagePreviewState::Loading);
            let _ = self.api_tx.send(ApiRequest::FetchPreview {
                key: entry.key,
                url: url.to_string(),
                priority: Priority::High,
            });
        }
    }

    pub(crate) fn close_preview_popup(&mut self) {
        if let Some(popup) = self.model.ui.preview_popup.take() {
            self.image_state_map.remove(&popup.key);
        }
    }

    /// Route downloaded preview bytes into a background decode task.
    ///
    /// Responses for a closed popup or a different key are stale and
    /// silently dropped — navigation may abandon loads at any time.
    pub(crate) fn handle_preview_bytes(
        &mut self,
        key: String,
        bytes: Result<Vec<u8>, anyhow::Error>,
    ) {
        let still_wanted = self
            .model
            .ui
            .preview_popup
            .as_ref()
            .is_some_and(|popup| popup.key == key);
        if !still_wanted {
            log_debug(&format!("Discarding stale preview bytes for {}", key));
            return;
        }

        let data = match bytes {
            Ok(data) => data,
            Err(e) => {
                log_debug(&format!("Preview fetch failed for {}: {}", key, e));
                self.image_state_map.insert(
                    key,
                    ImagePreviewState::Failed {
                        metadata: ImageMetadata {
                            dimensions: None,
                            format: None,
                            file_size: 0,
                        },
                    },
                );
                return;
            }
        };

        let Some(picker) = self.image_picker.clone() else {
            return;
        };
        let image_tx = self.image_update_tx.clone();

        tokio::spawn(async move {
            match Self::decode_preview(data, picker).await {
                Ok((protocol, metadata)) => {
                    let _ = image_tx.send((key, ImagePreviewState::Ready { protocol, metadata }));
                }
                Err(metadata) => {
                    let _ = image_tx.send((key, ImagePreviewState::Failed { metadata }));
                }
            }
        });
    }

    async fn decode_preview(
        data: Vec<u8>,
        picker: ratatui_image::picker::Picker,
    ) -> Result<(ratatui_image::protocol::StatefulProtocol, ImageMetadata), ImageMetadata> {
        const MAX_SIZE_BYTES: usize = 20 * 1024 * 1024;

        let file_size = data.len() as u64;
        if data.len() > MAX_SIZE_BYTES {
            return Err(ImageMetadata {
                dimensions: None,
                format: Some("Too large".to_string()),
                file_size,
            });
        }

        let format = image::guess_format(&data)
            .ok()
            .map(|f| format!("{:?}", f));

        // Decoding is CPU-bound; keep it off the async workers
        let img_result = tokio::task::spawn_blocking(move || image::load_from_memory(&data)).await;

        let img = match img_result {
            Ok(Ok(img)) => img,
            Ok(Err(e)) => {
                return Err(ImageMetadata {
                    dimensions: None,
                    format: Some(format!("Decode error: {}", e)),
                    file_size,
                });
            }
            Err(e) => {
                return Err(ImageMetadata {
                    dimensions: None,
                    format: Some(format!("Task error: {}", e)),
                    file_size,
                });
            }
        };

        let dimensions = (img.width(), img.height());

        // Pre-downscale very large originals; the protocol resize is slow
        // on multi-megapixel inputs
        let font_size = picker.font_size();
        let max_width = 200 * font_size.0 as u32;
        let max_height = 60 * font_size.1 as u32;

        let processed = if img.width() > max_width || img.height() > max_height {
            log_debug(&format!(
                "Pre-downscaling {}x{} preview to fit {}x{}",
                img.width(),
                img.height(),
                max_width,
                max_height
            ));
            img.resize(max_width, max_height, image::imageops::FilterType::CatmullRom)
        } else {
            img
        };

        let protocol = picker.new_resize_protocol(processed);

        Ok((
            protocol,
            ImageMetadata {
                dimensions: Some(dimensions),
                format,
                file_size,
            },
        ))
    }
}
