use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub base_url: String,
    #[serde(default = "default_mount")]
    pub mount: String,
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    #[serde(default = "default_true")]
    pub image_preview_enabled: bool,
    #[serde(default = "default_image_protocol")]
    pub image_protocol: String,
    #[serde(default)]
    pub empty_message: Option<String>,
}

fn default_mount() -> String {
    "/webdav".to_string()
}

fn default_theme() -> String {
    "slate".to_string()
}

fn default_icon_mode() -> String {
    "nerdfont".to_string()
}

fn default_true() -> bool {
    true
}

fn default_image_protocol() -> String {
    "auto".to_string()
}
