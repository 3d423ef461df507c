use std::path::Path;

use scraper::{ElementRef, Html, Selector};

use crate::error::{ExpensegenError, Result};
use crate::models::{RawRow, RawTable};

pub const DEFAULT_TABLE_SELECTOR: &str = "table[class=datatable]";

/// Whatever sits in front of the statement page. By the time
/// `extract_raw_table` is called the transaction table must be on screen.
pub trait PageSession {
    fn extract_raw_table(&mut self) -> Result<RawTable>;
}

/// A statement page saved to disk.
pub struct HtmlSession {
    html: String,
    table_selector: String,
}

impl HtmlSession {
    pub fn new(html: impl Into<String>, table_selector: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            table_selector: table_selector.into(),
        }
    }

    pub fn from_file(path: &Path, table_selector: &str) -> Result<Self> {
        let html = std::fs::read_to_string(path)?;
        Ok(Self::new(html, table_selector))
    }
}

impl PageSession for HtmlSession {
    fn extract_raw_table(&mut self) -> Result<RawTable> {
        parse_table(&self.html, &self.table_selector)
    }
}

fn is_cell(el: &ElementRef) -> bool {
    let name = el.value().name();
    name.eq_ignore_ascii_case("td") || name.eq_ignore_ascii_case("th")
}

fn owning_table<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name().eq_ignore_ascii_case("table"))
}

/// Rows of the first table matching `table_selector`, in document order.
/// Rows of nested tables are not included.
pub fn parse_table(html: &str, table_selector: &str) -> Result<RawTable> {
    let table_sel = Selector::parse(table_selector)
        .map_err(|_| ExpensegenError::Selector(table_selector.to_string()))?;
    let tr_sel = Selector::parse("tr").map_err(|_| ExpensegenError::Selector("tr".to_string()))?;

    let doc = Html::parse_document(html);
    let table = doc
        .select(&table_sel)
        .next()
        .ok_or_else(|| ExpensegenError::TableNotFound(table_selector.to_string()))?;

    let rows = table
        .select(&tr_sel)
        .filter(|tr| owning_table(*tr).map(|t| t.id()) == Some(table.id()))
        .map(|tr| {
            let cells = tr
                .children()
                .filter_map(ElementRef::wrap)
                .filter(is_cell)
                .map(|cell| cell.text().collect::<String>())
                .collect::<Vec<_>>();
            let text = tr.text().collect::<String>();
            RawRow::new(cells, text.trim())
        })
        .collect();
    Ok(RawTable { rows })
}
