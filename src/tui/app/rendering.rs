//! Rendering logic for the Wayfarer TUI application.
//!
//! This module contains the view rendering methods that produce string output
//! for display in the terminal. These are pure query methods that read state
//! without modification.

use unicode_width::UnicodeWidthChar;

use super::{CHROME_HEIGHT, TravelApp};
use crate::catalogue::{Category, DurationBucket};
use crate::tui::components::{
    BookingListComponent, BookingListViewContext, FormComponent, FormViewContext,
    OfferListComponent, OfferListViewContext, PackageListComponent, PackageListViewContext,
    render_toast, truncate_to_height, truncate_to_width,
};
use crate::tui::state::{FormState, Modal, Page};

const ANSI_RESET: &str = "\x1b[0m";

/// Rows above the offer cards on the search page.
const SEARCH_HEADER_HEIGHT: usize = 4;

/// Rows above the cards on the packages and bookings pages.
const LISTING_HEADER_HEIGHT: usize = 2;

impl TravelApp {
    const fn max_width(&self) -> usize {
        self.width as usize
    }

    /// Rows available to the page body.
    pub(super) const fn body_height(&self) -> usize {
        let rows = (self.height as usize).saturating_sub(CHROME_HEIGHT);
        if rows == 0 { 1 } else { rows }
    }

    /// Renders the title line with the account control.
    pub(super) fn render_header(&self) -> String {
        let account = self.session.current_user().map_or_else(
            || self.session.account_label().to_owned(),
            |user| format!("{}: {}", self.session.account_label(), user.name),
        );
        format!("Wayfarer Travel  [{account}]\n")
    }

    /// Renders the navigation bar with the active page bracketed.
    pub(super) fn render_nav_bar(&self) -> String {
        let items: String = Page::ALL
            .into_iter()
            .map(|page| {
                if page == self.view.page {
                    format!("[{} {}]", page.shortcut(), page.label())
                } else {
                    format!(" {} {} ", page.shortcut(), page.label())
                }
            })
            .collect();
        format!("{items}\n")
    }

    /// Renders the modal or page body, padded to the body height.
    pub(super) fn render_body(&self) -> String {
        let height = self.body_height();
        let mut body = self
            .view
            .modal
            .as_ref()
            .map_or_else(|| self.render_page(height), |modal| self.render_modal(modal));

        truncate_to_height(&mut body, height);
        let missing = height.saturating_sub(body.lines().count());
        body.push_str(&"\n".repeat(missing));
        body
    }

    fn render_page(&self, height: usize) -> String {
        match self.view.page {
            Page::Home => self.render_home(),
            Page::Search => self.render_search(height),
            Page::Packages => self.render_packages(height),
            Page::Bookings => self.render_bookings(height),
            Page::Contact => self.render_contact(),
        }
    }

    fn render_page_form(&self, form: &FormState) -> String {
        FormComponent::view(&FormViewContext {
            form,
            active: self.view.editing,
            max_width: self.max_width(),
        })
    }

    fn render_home(&self) -> String {
        let mut output = String::from(
            "  Discover Your Next Adventure\n  Find and book amazing travel experiences around the world\n\n",
        );
        output.push_str(&self.render_page_form(&self.search_form));
        output
    }

    fn render_search(&self, height: usize) -> String {
        let duration = self
            .controls
            .duration
            .map_or("Any duration", DurationBucket::label);
        let category = self.controls.category.map_or("Any type", Category::label);
        let mut output = format!(
            "  Search Results\n  Price: {}   Duration: {duration}   Type: {category}\n  Showing {} of {} results\n\n",
            self.controls.price.label(),
            self.filtered_count(),
            self.offers.len()
        );

        output.push_str(&OfferListComponent::view(&OfferListViewContext {
            offers: &self.offers,
            filtered_indices: &self.filtered_indices,
            cursor_position: self.results_cursor.position(),
            max_width: self.max_width(),
            max_height: height.saturating_sub(SEARCH_HEADER_HEIGHT),
        }));
        output
    }

    fn render_packages(&self, height: usize) -> String {
        let mut output = String::from("  Travel Packages\n\n");
        output.push_str(&PackageListComponent::view(&PackageListViewContext {
            packages: self.packages.as_deref(),
            cursor_position: self.packages_cursor.position(),
            max_width: self.max_width(),
            max_height: height.saturating_sub(LISTING_HEADER_HEIGHT),
        }));
        output
    }

    fn render_bookings(&self, height: usize) -> String {
        let mut output = String::from("  My Bookings\n\n");
        output.push_str(&BookingListComponent::view(&BookingListViewContext {
            bookings: self.bookings.bookings(),
            max_width: self.max_width(),
            max_height: height.saturating_sub(LISTING_HEADER_HEIGHT),
        }));
        output
    }

    fn render_contact(&self) -> String {
        let mut output = String::from("  Contact Us\n  We'd love to hear from you.\n\n");
        output.push_str(&self.render_page_form(&self.contact_form));
        output
    }

    fn render_modal(&self, modal: &Modal) -> String {
        let mut output = match modal {
            Modal::Login(_) => String::new(),
            Modal::Booking { target, .. } => {
                let line = format!("  {} - ${}", target.title, target.price);
                format!("{}\n\n", truncate_to_width(&line, self.max_width()))
            }
        };
        output.push_str(&FormComponent::view(&FormViewContext {
            form: modal.form(),
            active: true,
            max_width: self.max_width(),
        }));
        output
    }

    /// Renders the toast line, blank when no toast is visible.
    pub(super) fn render_toast_line(&self) -> String {
        render_toast(self.toast.current(), self.max_width())
    }

    /// Renders the status bar with help hints for the current context.
    pub(super) fn render_status_bar(&self) -> String {
        let hints = if self.view.is_editing() {
            "type:edit  Tab:next field  Enter:submit  Esc:cancel"
        } else {
            match self.view.page {
                Page::Search => "j/k:move  [/]:price  d:duration  t:type  x:clear  Enter:book  ?:help  q:quit",
                Page::Packages => "j/k:move  Enter:book  1-5:pages  l:login  ?:help  q:quit",
                Page::Home | Page::Contact => "Enter:edit form  1-5:pages  l:login  ?:help  q:quit",
                Page::Bookings => "1-5:pages  l:login  ?:help  q:quit",
            }
        };
        format!("{hints}\n")
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        if !self.view.show_help {
            return String::new();
        }

        let help_text = r"
=== Keyboard Shortcuts ===

Pages:
  1-5        Home, Search, Packages, My Bookings, Contact
  l          Open login

Search results:
  j, Down    Move cursor down
  k, Up      Move cursor up
  ], Right   Raise maximum price
  [, Left    Lower maximum price
  d          Cycle duration (Any, 1-3, 4-7, 8+ days)
  t          Cycle trip type
  x          Clear filters
  Enter, b   Book selected trip

Packages:
  j/k        Move cursor
  Enter, b   Book selected package

Forms:
  Enter, e   Start editing (home and contact)
  text keys  Edit focused field
  Tab, Down  Next field
  BackTab    Previous field
  Enter      Submit
  Esc        Cancel or close dialog

Other:
  ?          Toggle this help
  q, Ctrl+C  Quit

Press any key to close this help.
";
        help_text.to_owned()
    }

    /// Normalises the rendered frame to terminal dimensions.
    ///
    /// Rows are clamped to one column less than the terminal width to avoid
    /// autowrap, and padded with spaces to clear stale cells after a resize.
    pub(super) fn normalise_viewport(&self, output: &str) -> String {
        let safe_width = self.max_width().saturating_sub(1).max(1);
        let height = (self.height as usize).max(1);

        let mut lines: Vec<String> = output
            .lines()
            .map(|line| fit_line(line, safe_width))
            .collect();
        lines.truncate(height);

        let missing = height.saturating_sub(lines.len());
        let blank = " ".repeat(safe_width);
        lines.extend(std::iter::repeat_with(|| blank.clone()).take(missing));

        let mut normalised = lines.join("\n");
        normalised.push('\n');
        normalised
    }
}

/// Clamps a line to `width` visible columns and pads it with spaces.
///
/// Escape sequences are copied through without counting towards the width,
/// and a reset is appended to any line that carried one.
fn fit_line(line: &str, width: usize) -> String {
    let mut output = String::new();
    let mut used = 0_usize;
    let mut in_escape = false;
    let mut had_escape = false;

    for ch in line.chars() {
        if in_escape {
            output.push(ch);
            in_escape = !ch.is_ascii_alphabetic();
            continue;
        }
        if ch == '\x1b' {
            in_escape = true;
            had_escape = true;
            output.push(ch);
            continue;
        }

        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(char_width) > width {
            break;
        }
        output.push(ch);
        used = used.saturating_add(char_width);
    }

    if had_escape {
        output.push_str(ANSI_RESET);
    }
    output.push_str(&" ".repeat(width.saturating_sub(used)));
    output
}
