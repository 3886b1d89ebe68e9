// src/pager.rs
use std::str::FromStr;

use crate::error::PageRequestError;
use crate::models::{ButtonKind, PageButton};

/// A page change coming from a page control or a raw page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    First,
    Previous,
    Next,
    Last,
    Number(i64),
}

impl FromStr for PageRequest {
    type Err = PageRequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(PageRequest::First),
            "previous" | "prev" => Ok(PageRequest::Previous),
            "next" => Ok(PageRequest::Next),
            "last" => Ok(PageRequest::Last),
            other => parse_page_number(other)
                .map(PageRequest::Number)
                .ok_or_else(|| PageRequestError::Unknown(s.to_string())),
        }
    }
}

/// Any signed integer token; out-of-range values saturate
fn parse_page_number(token: &str) -> Option<i64> {
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.parse::<i64>().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

/// ceil(len / page_size); zero records means zero pages
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Rows for the 1-based `current_page`, clipped to the collection.
pub fn visible_slice<T>(records: &[T], current_page: usize, page_size: usize) -> &[T] {
    let start = current_page.saturating_sub(1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

/// Resolve a request against the current position. The result always
/// lies in `1..=max(total_pages, 1)`.
pub fn change_page(request: PageRequest, current_page: usize, total_pages: usize) -> usize {
    let ceiling = total_pages.max(1);
    let target = match request {
        PageRequest::First => 1,
        PageRequest::Previous => current_page.saturating_sub(1),
        PageRequest::Next => current_page.saturating_add(1),
        PageRequest::Last => total_pages,
        PageRequest::Number(n) if n < 1 => 1,
        PageRequest::Number(n) => usize::try_from(n).unwrap_or(usize::MAX),
    };
    target.clamp(1, ceiling)
}

/// Page controls for the given position, left to right.
///
/// First/Previous and Next/Last are always present. The numeric run shows
/// up to two neighbours either side of the current page, with an ellipsis
/// where more pages exist beyond the run. An empty table has no current
/// page and gets the four controls only, all disabled.
pub fn page_buttons(current_page: usize, total_pages: usize) -> Vec<PageButton> {
    let at_start = current_page <= 1;
    let at_end = current_page >= total_pages;
    let last = total_pages.max(1);

    let mut buttons = vec![
        PageButton::control(ButtonKind::First, 1, !at_start),
        PageButton::control(ButtonKind::Previous, current_page.saturating_sub(1).max(1), !at_start),
    ];

    if total_pages > 0 {
        if current_page > 3 {
            buttons.push(PageButton::ellipsis());
        }
        if current_page > 2 {
            buttons.push(PageButton::page(current_page - 2));
        }
        if current_page > 1 {
            buttons.push(PageButton::page(current_page - 1));
        }

        buttons.push(PageButton::current(current_page));

        if current_page < total_pages {
            buttons.push(PageButton::page(current_page + 1));
        }
        if current_page + 1 < total_pages {
            buttons.push(PageButton::page(current_page + 2));
        }
        if current_page + 2 < total_pages {
            buttons.push(PageButton::ellipsis());
        }
    }

    buttons.push(PageButton::control(ButtonKind::Next, (current_page + 1).min(last), !at_end));
    buttons.push(PageButton::control(ButtonKind::Last, last, !at_end));

    buttons
}
