use std::collections::HashSet;
use std::sync::OnceLock;

use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::extractor::errors::ExtractError;
use crate::extractor::layout;
use crate::models::Entry;
use crate::types::{parse_amount, parse_date, FieldError};

fn selector(lock: &'static OnceLock<Selector>, css: &str) -> &'static Selector {
    lock.get_or_init(|| Selector::parse(css).expect("invalid static selector"))
}

fn table_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "table")
}

fn row_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "tr")
}

fn header_cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "th")
}

fn data_cell_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "td")
}

fn amount_element_selector() -> &'static Selector {
    static SEL: OnceLock<Selector> = OnceLock::new();
    selector(&SEL, "div")
}

/// Parses the first table of a statement page into a set of entries.
///
/// Rows with header cells are skipped, as are rows whose first data cell is
/// blank (decorative separators in the export). Any other row must match
/// [`layout`] completely: a missing cell or an unparsable field fails the whole
/// document, there is no partial result.
pub fn extract(document: &str) -> Result<HashSet<Entry>, ExtractError> {
    let html = Html::parse_document(document);
    let table = html.select(table_selector()).next().ok_or(ExtractError::MissingTable)?;

    let mut entries = HashSet::new();

    for (index, row) in table.select(row_selector()).enumerate() {
        if row.select(header_cell_selector()).next().is_some() {
            trace!("Skipping header row [{index}]");
            continue;
        }

        let cells: Vec<ElementRef> = row.select(data_cell_selector()).collect();
        let date = cell_text(&cells, index, layout::DATE)?;

        if date.is_empty() {
            debug!("Skipping row [{index}] with blank first cell");
            continue;
        }

        let entry = read_entry(&cells, index, &date)?;

        if entry.is_top_up() {
            trace!("Row [{index}] is a top-up, amount negated to {}", entry.amount);
        }

        entries.insert(entry);
    }

    Ok(entries)
}

fn read_entry(cells: &[ElementRef], index: usize, date: &str) -> Result<Entry, ExtractError> {
    let date = parse_date(date).map_err(ExtractError::field(index, layout::DATE))?;
    let memo = cell_text(cells, index, layout::MEMO)?;

    let amount_raw = cell(cells, index, layout::AMOUNT)?
        .select(amount_element_selector())
        .nth(layout::AMOUNT_ELEMENT)
        .map(element_text)
        .ok_or(ExtractError::MissingAmount { row: index, position: layout::AMOUNT_ELEMENT })?;
    let amount = parse_amount(&amount_raw, false).map_err(ExtractError::field(index, layout::AMOUNT))?;

    let fee = nullable_amount(cells, index, layout::FEE)?;
    let atm_fee = nullable_amount(cells, index, layout::ATM_FEE)?;
    let conversion_fee = nullable_amount(cells, index, layout::CONVERSION_FEE)?;
    let decision = cell_text(cells, index, layout::DECISION)?;

    let tx_id = cell_text(cells, index, layout::TX_ID)?;
    if tx_id.is_empty() {
        return Err(ExtractError::field(index, layout::TX_ID)(FieldError::Blank));
    }

    let note = cell_text(cells, index, layout::NOTE)?;

    Ok(Entry::new(date, memo, amount, fee, atm_fee, conversion_fee, decision, tx_id, note))
}

fn nullable_amount(cells: &[ElementRef], index: usize, column: usize) -> Result<Decimal, ExtractError> {
    let raw = cell_text(cells, index, column)?;
    parse_amount(&raw, true).map_err(ExtractError::field(index, column))
}

fn cell<'a>(cells: &[ElementRef<'a>], index: usize, column: usize) -> Result<ElementRef<'a>, ExtractError> {
    cells.get(column).copied().ok_or_else(|| ExtractError::missing_cell(index, column))
}

fn cell_text(cells: &[ElementRef], index: usize, column: usize) -> Result<String, ExtractError> {
    cell(cells, index, column).map(element_text)
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
