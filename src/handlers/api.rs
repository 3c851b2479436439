//! API Response Handler
//!
//! Routes background worker responses into the model. Responses that no
//! longer match the current view (the user navigated away meanwhile) are
//! discarded rather than applied.

use crate::services::api::ApiResponse;
use crate::{log_debug, App};

pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::ChildrenResult { prefix, entries } => {
            if prefix != app.model.navigation.cwd {
                log_debug(&format!(
                    "Discarding stale listing for {:?} (now at {:?})",
                    prefix, app.model.navigation.cwd
                ));
                return;
            }

            match entries {
                Ok(items) => {
                    app.model.listing.set_entries(items);
                    app.model.navigation.cursor = if app.model.listing.is_empty() {
                        None
                    } else {
                        Some(0)
                    };
                    app.model.navigation.scroll_rows = 0;
                }
                Err(e) => {
                    log_debug(&format!("Listing failed for {:?}: {}", prefix, e));
                    app.model.listing.set_error(e.to_string());
                    app.model.navigation.cursor = None;
                    app.model.ui.show_toast(format!("Error: {}", e));
                }
            }
        }

        ApiResponse::PreviewResult { key, bytes } => {
            app.handle_preview_bytes(key, bytes);
        }
    }
}
