//! Tables that hold a single list under a title row (owners, land).

use crate::page::Table;

/// Join every data cell with `", "`, row by row, skipping the title row.
///
/// Empty cells are kept as empty elements so the element count always
/// matches the cell count.
pub fn parse(table: &Table<'_>) -> String {
    table
        .rows()
        .iter()
        .skip(1)
        .flat_map(|row| row.cells())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    fn parse_html(html: &str) -> String {
        let page = Page::parse(html);
        let table = page.tables().next().unwrap();
        parse(&table)
    }

    #[test]
    fn joins_rows_in_order() {
        let out = parse_html(
            r#"<table>
                <tr class="tableheaders"><td>Owner Name(s)</td></tr>
                <tr><td> SMITH JOHN </td></tr>
                <tr><td>SMITH JANE</td></tr>
            </table>"#,
        );
        assert_eq!(out, "SMITH JOHN, SMITH JANE");
    }

    #[test]
    fn keeps_empty_cells() {
        let out = parse_html(
            r#"<table>
                <tr><td>Land Characteristics</td></tr>
                <tr><td>Corner Lot</td></tr>
                <tr><td></td></tr>
                <tr><td>Cul-de-sac</td></tr>
            </table>"#,
        );
        assert_eq!(out, "Corner Lot, , Cul-de-sac");
        assert_eq!(out.matches(',').count(), 2);
    }

    #[test]
    fn walks_columns_within_a_row() {
        let out = parse_html(
            r#"<table>
                <tr><td>Assessor Parcel Maps Associated with Schedule</td></tr>
                <tr><td>4911</td><td>4912</td></tr>
            </table>"#,
        );
        assert_eq!(out, "4911, 4912");
    }

    #[test]
    fn title_only_table_is_empty() {
        assert_eq!(parse_html("<table><tr><td>Owner Name(s)</td></tr></table>"), "");
    }
}
