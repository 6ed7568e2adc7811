//! Read-only views over a parsed assessor page.
//!
//! Lookups mirror how the assessor markup is laid out rather than strict
//! table semantics: a table's rows are *all* descendant `tr` elements and a
//! row's cells are *all* descendant `td` elements, so layout tables that wrap
//! data tables see the inner rows too. Header-based routing copes with this
//! by letting the innermost (later) table overwrite the outer one.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("Invalid table selector"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("Invalid tr selector"));
static HEADER_ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr.tableheaders").expect("Invalid header row selector"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("Invalid td selector"));

/// A parsed HTML document for one property (or property-year) page.
pub struct Page {
    document: Html,
}

impl Page {
    /// Parse raw HTML. Parsing never fails; malformed markup is repaired the
    /// way a browser would.
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }

    /// Every `table` element, in document order (outer tables before the
    /// tables nested inside them).
    pub fn tables(&self) -> impl Iterator<Item = Table<'_>> {
        self.document.select(&TABLE_SELECTOR).map(Table::new)
    }

    /// Trimmed text of every `td` element, in document order.
    pub fn cell_texts(&self) -> impl Iterator<Item = String> + '_ {
        self.document.select(&CELL_SELECTOR).map(trimmed_text)
    }
}

/// A `table` element.
#[derive(Clone, Copy)]
pub struct Table<'a> {
    element: ElementRef<'a>,
}

impl<'a> Table<'a> {
    pub fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Text of the first row marked with the `tableheaders` class.
    pub fn header_text(&self) -> Option<String> {
        self.element
            .select(&HEADER_ROW_SELECTOR)
            .next()
            .map(|row| row.text().collect())
    }

    /// All rows, including the header row and rows of nested tables.
    pub fn rows(&self) -> Vec<TableRow<'a>> {
        self.element
            .select(&ROW_SELECTOR)
            .map(|element| TableRow { element })
            .collect()
    }

    /// Full text content of the table.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Whether another `table` element sits anywhere below this one.
    pub fn has_nested_table(&self) -> bool {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .any(|el| el.value().name() == "table")
    }
}

/// A `tr` element.
#[derive(Clone, Copy)]
pub struct TableRow<'a> {
    element: ElementRef<'a>,
}

impl TableRow<'_> {
    /// Trimmed text of each `td` in the row.
    pub fn cells(&self) -> Vec<String> {
        self.element.select(&CELL_SELECTOR).map(trimmed_text).collect()
    }
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
