//! # Bookstore Widget Entry Point
//!
//! Reads page events from stdin, one per line, and writes one JSON response
//! per event to stdout. Logs go to stderr.
//!
//! ```text
//! $ printf 'add 1\ndiscount\n' | bookstore-widget
//! {"items":[...],"total":90000,"totalDisplay":"₱900.00",...}
//! {"items":[...],"total":45000,"totalDisplay":"₱450.00",...}
//! ```

fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for better testability
    bookstore_widget::run()
}
