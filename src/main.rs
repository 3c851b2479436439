use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    fs, io,
    sync::atomic::{AtomicBool, Ordering},
};

/// Remote drive grid browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the temp directory
    #[arg(short, long)]
    debug: bool,

    /// Theme preset (slate, ocean, ember, matrix)
    #[arg(short, long)]
    theme: Option<String>,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod app;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod ui;
mod utils;

use api::DriveClient;
use config::Config;
use ui::icons::{IconMode, IconRenderer};
use ui::theme::Theme;

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(file, "{}", msg);
    }
}

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub format: Option<String>,
    pub file_size: u64,
}

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    Failed {
        metadata: ImageMetadata,
    },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Failed { metadata } => f
                .debug_struct("ImagePreviewState::Failed")
                .field("metadata", metadata)
                .finish(),
        }
    }
}

pub struct App {
    pub model: model::Model,

    pub(crate) client: DriveClient,
    pub(crate) api_tx: tokio::sync::mpsc::UnboundedSender<services::api::ApiRequest>,
    pub(crate) api_rx: tokio::sync::mpsc::UnboundedReceiver<services::api::ApiResponse>,
    pub(crate) icon_renderer: IconRenderer,
    pub(crate) image_picker: Option<ratatui_image::picker::Picker>,
    pub(crate) image_update_tx: tokio::sync::mpsc::UnboundedSender<(String, ImagePreviewState)>,
    pub(crate) image_update_rx: tokio::sync::mpsc::UnboundedReceiver<(String, ImagePreviewState)>,

    pub(crate) mount: String,
    pub(crate) open_command: Option<String>,

    /// Maps entry keys to their decoded preview states
    pub(crate) image_state_map: HashMap<String, ImagePreviewState>,
}

impl App {
    fn new(config: Config) -> Self {
        let client = DriveClient::new(config.base_url.clone());

        // Spawn API service worker
        let (api_tx, api_rx) = services::api::spawn_api_service(client.clone());

        // Create channel for decoded image updates
        let (image_update_tx, image_update_rx) = tokio::sync::mpsc::unbounded_channel();

        // Parse icon mode from config
        let icon_mode = match config.icon_mode.to_lowercase().as_str() {
            "emoji" => IconMode::Emoji,
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            _ => IconMode::NerdFont,
        };
        let icon_renderer = IconRenderer::new(icon_mode);

        // Initialize image preview protocol picker
        let image_picker = if config.image_preview_enabled {
            let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    log_debug(&format!("Image preview: Failed to detect terminal: {}", e));
                    ratatui_image::picker::Picker::from_fontsize((8, 16)) // Fallback font size
                }
            };

            match config.image_protocol.to_lowercase().as_str() {
                "auto" => {
                    // Protocol already auto-detected by from_query_stdio()
                }
                "iterm2" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2);
                }
                "kitty" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty);
                }
                "sixel" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel);
                }
                "halfblocks" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks);
                }
                unknown => {
                    log_debug(&format!(
                        "Image preview: Unknown protocol '{}', using auto-detect",
                        unknown
                    ));
                }
            }

            Some(picker)
        } else {
            log_debug("Image preview disabled in config");
            None
        };

        let mut model = model::Model::new();
        model.ui.theme_index = Theme::index_by_name(&config.theme);
        if let Some(empty_message) = config.empty_message {
            model.ui.empty_message = empty_message;
        }

        let mut app = App {
            model,
            client,
            api_tx,
            api_rx,
            icon_renderer,
            image_picker,
            image_update_tx,
            image_update_rx,
            mount: config.mount,
            open_command: config.open_command,
            image_state_map: HashMap::new(),
        };

        // Kick off the root listing
        app.request_listing(String::new());

        app
    }
}

/// Determine the config file path with fallback logic
fn get_config_path(cli_path: Option<String>) -> Result<std::path::PathBuf> {
    use std::path::PathBuf;

    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(p);
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/drivetui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("drivetui").join("config.yaml");
        if config_path.exists() {
            return Ok(config_path);
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(local_config);
    }

    // No config found, provide helpful error
    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("drivetui")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/drivetui/config.yaml".to_string()
    };

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location.",
        expected_path
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Determine config file path
    let config_path = get_config_path(args.config)?;

    if args.debug {
        log_debug(&format!("Loading config from: {:?}", config_path));
    }

    // Load configuration
    let config_str = fs::read_to_string(&config_path)?;
    let mut config: Config = serde_yaml::from_str(&config_str)?;

    // Override config with CLI flags
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    // Initialize app
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Always render from the latest snapshot
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            handlers::handle_api_response(app, response);
        }

        // Process decoded images from background tasks (non-blocking).
        // ImagePreviewState is not Clone, so it lives outside the Model.
        while let Ok((key, image_state)) = app.image_update_rx.try_recv() {
            let still_open = app
                .model
                .ui
                .preview_popup
                .as_ref()
                .is_some_and(|popup| popup.key == key);
            if still_open {
                app.image_state_map.insert(key, image_state);
            } else {
                log_debug(&format!("Dropping decoded preview for closed popup {}", key));
            }
        }

        // Poll for input; the timeout keeps toast dismissal and channel
        // draining ticking while idle
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => handlers::handle_key(app, key),
                Event::Mouse(mouse) => handlers::handle_mouse(app, mouse),
                _ => {}
            }
        }
    }

    Ok(())
}
