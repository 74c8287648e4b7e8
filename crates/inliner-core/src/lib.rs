//! Inline local asset files as `data:` URLs.
//!
//! Reads a list of files, base64-encodes each one into a data URL tagged with
//! its MIME type, and writes a JavaScript module binding the resulting table:
//!
//! ```text
//! const dataUrls = {
//! "1px": "data:image/png;base64,iVBORw0KGgo...",
//! "tex/daisy.webp": "data:image/webp;base64,UklGR..."
//! };
//! ```
//!
//! Missing or unreadable inputs are logged and skipped. Only a failure to
//! write the output module is returned as an error.

pub mod assets;
mod config;
pub mod data_url;
pub mod emit;
mod error;
pub mod inline;
pub mod mime;

pub use assets::{AssetTable, PLACEHOLDER_DATA_URL, PLACEHOLDER_KEY};
pub use config::{InlineConfig, DEFAULT_INPUTS, DEFAULT_OUTPUT};
pub use data_url::DataUrl;
pub use emit::{render_module, write_module, DEFAULT_IDENTIFIER};
pub use error::{AssetError, DataUrlError, InlineError, Result};
pub use inline::{collect_data_urls, inline_asset, make_data_urls, make_data_urls_with, InlineReport};
pub use mime::{mime_for_path, DEFAULT_MIME};
