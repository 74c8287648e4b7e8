//! Generates `data-urls.js` from the project's texture files.
//!
//! Usage: make-data-urls
//!
//! Takes no arguments. The input list and output path are fixed; see
//! [`InlineConfig::default`].

mod util;

use inliner_core::{make_data_urls_with, InlineConfig};

use crate::util::{init_logging, plural, print_error, shorten_path};

fn main() {
    init_logging();

    let config = InlineConfig::default();
    match make_data_urls_with(&config) {
        Ok(report) => {
            status!(
                "Inlined {} of {} into {}",
                report.inlined_count(),
                plural(report.inlined_count() + report.skipped_count(), "asset"),
                shorten_path(&report.output)
            );
            if !report.is_complete() {
                for skipped in &report.skipped {
                    log::debug!("skipped: {}", skipped.path());
                }
            }
        }
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
