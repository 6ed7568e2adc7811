//! Tables with several aligned columns, in their four layouts.

use crate::error::{ExtractError, Result};
use crate::page::Table;
use crate::record::{FieldMap, Row};
use crate::text::normalize_field_name;

/// What to do with the last row of a header-keyed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Footer {
    /// The last row is data like the others.
    Keep,
    /// The last row is a footer and is not part of the output.
    Drop,
}

/// Key each data row by the normalized header row.
///
/// A data row whose cell count differs from the header's aborts the table
/// with [`ExtractError::ColumnMismatch`]. A dropped footer is never checked.
pub fn parse_rows(key: &str, table: &Table<'_>, footer: Footer) -> Result<Vec<Row>> {
    let rows = table.rows();
    let Some((header, rest)) = rows.split_first() else {
        return Ok(Vec::new());
    };
    let data = match footer {
        Footer::Keep => rest,
        Footer::Drop => rest.split_last().map_or(&[][..], |(_, body)| body),
    };

    let headers: Vec<String> = header
        .cells()
        .iter()
        .map(|label| normalize_field_name(label))
        .collect();

    data.iter()
        .enumerate()
        .map(|(i, row)| {
            let cells = row.cells();
            if cells.len() != headers.len() {
                return Err(ExtractError::ColumnMismatch {
                    key: key.to_string(),
                    row: i + 1,
                    expected: headers.len(),
                    found: cells.len(),
                });
            }
            Ok(headers.iter().cloned().zip(cells).collect::<Row>())
        })
        .collect()
}

/// Collapse (field-row, value-row) pairs into one mapping.
///
/// Both names and values live in the second cell. A trailing unpaired row,
/// or a pair missing its second cell, is skipped.
pub fn parse_tax_info(table: &Table<'_>) -> FieldMap {
    let rows = table.rows();
    let mut fields = FieldMap::new();

    for pair in rows.get(1..).unwrap_or_default().chunks_exact(2) {
        let (field_cells, value_cells) = (pair[0].cells(), pair[1].cells());
        let (Some(field), Some(value)) = (field_cells.get(1), value_cells.get(1)) else {
            continue;
        };
        fields.insert(normalize_field_name(field), value.clone());
    }

    fields
}

/// Read each row as `field | value`, skipping rows without both cells.
pub fn parse_mill_levy(table: &Table<'_>) -> FieldMap {
    table
        .rows()
        .iter()
        .skip(1)
        .filter_map(|row| match row.cells().as_slice() {
            [field, value, ..] => Some((normalize_field_name(field), value.clone())),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    fn first_table(page: &Page) -> Table<'_> {
        page.tables().next().unwrap()
    }

    const SALES: &str = r#"<table>
        <tr class="tableheaders"><td>Sale Date</td><td>Sale Amount</td><td>Deed Type</td></tr>
        <tr><td>03/14/2019</td><td>$455,000</td><td>WD</td></tr>
        <tr><td>06/01/2008</td><td> $289,900 </td><td>SW</td></tr>
    </table>"#;

    #[test]
    fn rows_are_keyed_by_normalized_header() {
        let page = Page::parse(SALES);
        let rows = parse_rows("sales_history", &first_table(&page), Footer::Keep).unwrap();

        assert_eq!(rows.len(), 2);
        for row in &rows {
            let keys: Vec<_> = row.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["deed_type", "sale_amount", "sale_date"]);
        }
        assert_eq!(rows[0]["sale_date"], "03/14/2019");
        assert_eq!(rows[1]["sale_amount"], "$289,900");
    }

    #[test]
    fn short_row_is_a_column_mismatch() {
        let page = Page::parse(
            r#"<table>
                <tr><td>Item</td><td>Quality</td><td>Count</td></tr>
                <tr><td>Fireplace</td><td>Average</td></tr>
            </table>"#,
        );
        let err =
            parse_rows("property_inventory_1", &first_table(&page), Footer::Keep).unwrap_err();
        assert_eq!(
            err,
            ExtractError::ColumnMismatch {
                key: "property_inventory_1".to_string(),
                row: 1,
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn property_description_drops_footer() {
        let page = Page::parse(
            r#"<table>
                <tr class="tableheaders"><td>Block</td><td>Lot</td><td>Key</td></tr>
                <tr><td>3</td><td>12</td><td>A</td></tr>
                <tr><td>3</td><td>13</td><td>B</td></tr>
                <tr><td colspan="3">Legal description continues on plat</td></tr>
            </table>"#,
        );
        let rows = parse_rows("property_description", &first_table(&page), Footer::Drop).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["lot"], "13");
    }

    #[test]
    fn kept_footer_is_checked_like_data() {
        let page = Page::parse(
            r#"<table>
                <tr><td>Block</td><td>Lot</td></tr>
                <tr><td>3</td><td>12</td></tr>
                <tr><td colspan="2">See plat</td></tr>
            </table>"#,
        );
        let table = first_table(&page);

        let err = parse_rows("k", &table, Footer::Keep).unwrap_err();
        assert!(matches!(err, ExtractError::ColumnMismatch { row: 2, found: 1, .. }));

        let rows = parse_rows("k", &table, Footer::Drop).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["block"], "3");
    }

    #[test]
    fn property_description_with_only_header_is_empty() {
        let page = Page::parse(r#"<table><tr><td>Block</td><td>Lot</td><td>Key</td></tr></table>"#);
        let rows = parse_rows("property_description", &first_table(&page), Footer::Drop).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn tax_info_pairs_rows() {
        let page = Page::parse(
            r#"<table>
                <tr class="tableheaders"><td colspan="2">Taxes Payable 2024</td></tr>
                <tr><td></td><td>Land Value</td></tr>
                <tr><td></td><td>$100,000</td></tr>
                <tr><td></td><td>Improvement Value</td></tr>
                <tr><td></td><td>$250,000</td></tr>
            </table>"#,
        );
        let fields = parse_tax_info(&first_table(&page));
        assert_eq!(
            fields,
            FieldMap::from([
                ("land_value".to_string(), "$100,000".to_string()),
                ("improvement_value".to_string(), "$250,000".to_string()),
            ])
        );
    }

    #[test]
    fn tax_info_skips_trailing_unpaired_row() {
        let page = Page::parse(
            r#"<table>
                <tr><td>Payable</td></tr>
                <tr><td></td><td>land_value</td></tr>
                <tr><td></td><td>$100,000</td></tr>
                <tr><td></td><td>orphan</td></tr>
            </table>"#,
        );
        let fields = parse_tax_info(&first_table(&page));
        assert_eq!(
            fields,
            FieldMap::from([("land_value".to_string(), "$100,000".to_string())])
        );
    }

    #[test]
    fn tax_info_skips_pair_without_second_cell() {
        let page = Page::parse(
            r#"<table>
                <tr><td>Payable</td></tr>
                <tr><td>only one</td></tr>
                <tr><td></td><td>$1</td></tr>
            </table>"#,
        );
        assert!(parse_tax_info(&first_table(&page)).is_empty());
    }

    #[test]
    fn mill_levy_reads_field_value_rows() {
        let page = Page::parse(
            r#"<table>
                <tr class="tableheaders"><td>Mill Levy</td><td></td></tr>
                <tr><td>total_mills</td><td>85.123</td></tr>
                <tr><td>School District R1</td><td>45.001</td></tr>
                <tr><td>spacer</td></tr>
            </table>"#,
        );
        let fields = parse_mill_levy(&first_table(&page));
        assert_eq!(
            fields,
            FieldMap::from([
                ("total_mills".to_string(), "85.123".to_string()),
                ("school_district_r1".to_string(), "45.001".to_string()),
            ])
        );
    }
}
