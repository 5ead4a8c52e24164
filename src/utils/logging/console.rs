//! Console output utilities
//!
//! This module provides utilities for formatted console output.

use crate::form::{RegistrationForm, Section};
use crate::listing::{Page, render_page};
use crate::validation::ValidationErrors;

/// Print a page of the listing with a position summary
pub fn print_page(page: &Page<'_>, search: &str) {
    if page.total_rows == 0 {
        if search.is_empty() {
            println!("No users registered");
        } else {
            println!("No users match {search:?}");
        }
        return;
    }

    println!("{}", render_page(page));
    println!();
    println!(
        "Page {} of {} ({} rows)",
        page.number, page.total_pages, page.total_rows
    );
}

/// Print the filled-in form grouped by section, with any field errors
pub fn print_form(form: &RegistrationForm, errors: Option<&ValidationErrors>) {
    for section in Section::ALL {
        println!("{}", section.heading());
        for &field in section.fields() {
            let value = if form.is_filled(field) {
                form.value(field)
            } else {
                "-"
            };
            match errors.and_then(|e| e.for_field(field)) {
                Some(error) => println!("  {:<18} {value}  <- {}", field.label(), error.message),
                None => println!("  {:<18} {value}", field.label()),
            }
        }
    }
}
