use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::config::TableConfig;
use crate::domain::entities::dataset::{CellValue, Row};
use crate::domain::entities::table::{
    PageState, RangeDescriptor, SortDirection, SortSpec, TablePage, TableQuery,
};
use crate::usecase::services::stats_service::parse_numeric;

pub struct TablePipeline {
    config: TableConfig,
}

impl TablePipeline {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    /// filter → sort → paginate. Never mutates `rows`.
    pub fn run(&self, rows: &[Row], query: &TableQuery) -> TablePage {
        let filtered = filter_rows(rows, &query.search_term);
        let sorted = sort_rows(filtered, &query.sort);
        let page = paginate(&sorted, query.page, self.config.page_size);
        debug!(
            "table pipeline: {} rows, {} matched {:?}, page {}/{}",
            rows.len(),
            sorted.len(),
            query.search_term,
            page.page.current_page,
            page.total_pages
        );
        page
    }

    pub fn page_strip(&self, current_page: usize, total_pages: usize) -> Vec<usize> {
        page_strip(current_page, total_pages, self.config.page_strip_width)
    }
}

pub fn filter_rows<'a>(rows: &'a [Row], search_term: &str) -> Vec<&'a Row> {
    if search_term.is_empty() {
        return rows.iter().collect();
    }
    let needle = search_term.to_lowercase();
    rows.iter()
        .filter(|row| {
            row.values()
                .any(|value| value.to_string().to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sort key for one cell: blanks first, then anything that reads as a
/// number (ordered numerically), then the rest by text.
enum SortKey {
    Blank,
    Number(f64),
    Text(String),
}

impl SortKey {
    fn of(value: Option<&CellValue>) -> Self {
        let Some(value) = value.filter(|value| !value.is_empty()) else {
            return SortKey::Blank;
        };
        match parse_numeric(value) {
            Some(number) => SortKey::Number(number),
            None => SortKey::Text(value.to_string()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Blank => 0,
            SortKey::Number(_) => 1,
            SortKey::Text(_) => 2,
        }
    }
}

/// Total order over cells, so mixed `Number`/`Text`/`Empty` columns sort
/// consistently. Missing cells read as blank.
pub fn compare_cells(a: Option<&CellValue>, b: Option<&CellValue>) -> Ordering {
    match (SortKey::of(a), SortKey::of(b)) {
        (SortKey::Number(left), SortKey::Number(right)) => left.total_cmp(&right),
        (SortKey::Text(left), SortKey::Text(right)) => left.cmp(&right),
        (left, right) => left.rank().cmp(&right.rank()),
    }
}

/// Stable, so rows with equal keys keep their filtered order in both
/// directions.
pub fn sort_rows<'a>(mut rows: Vec<&'a Row>, sort: &SortSpec) -> Vec<&'a Row> {
    let Some(column) = sort.column.as_deref() else {
        return rows;
    };
    rows.sort_by(|a, b| {
        let ordering = compare_cells(a.get(column), b.get(column));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    trace!("sorted {} rows by {column:?} {:?}", rows.len(), sort.direction);
    rows
}

pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    row_count.div_ceil(page_size).max(1)
}

pub fn clamp_page(requested: i64, total_pages: usize) -> usize {
    let last = total_pages.max(1) as i64;
    requested.clamp(1, last) as usize
}

pub fn paginate(rows: &[&Row], requested_page: i64, page_size: usize) -> TablePage {
    let page_size = page_size.max(1);
    let total = rows.len();
    let total_pages = total_pages(total, page_size);
    let current_page = clamp_page(requested_page, total_pages);

    let start = ((current_page - 1) * page_size).min(total);
    let end = (current_page * page_size).min(total);
    let visible = rows[start..end].iter().map(|row| (*row).clone()).collect();

    let range = if total == 0 {
        RangeDescriptor {
            start: 0,
            end: 0,
            total: 0,
        }
    } else {
        RangeDescriptor {
            start: start + 1,
            end,
            total,
        }
    };

    TablePage {
        rows: visible,
        page: PageState {
            current_page,
            page_size,
        },
        total_pages,
        range,
    }
}

/// Header click: a new column sorts ascending, the active column flips.
/// There is no way back to unsorted from here.
pub fn toggle_sort(current: &SortSpec, column: &str) -> SortSpec {
    if current.is_sorted_by(column) {
        SortSpec::by(column, current.direction.flipped())
    } else {
        SortSpec::by(column, SortDirection::Ascending)
    }
}

/// Up to `width` consecutive page numbers that follow the current page
/// while staying inside `[1, total_pages]`.
pub fn page_strip(current_page: usize, total_pages: usize, width: usize) -> Vec<usize> {
    let total_pages = total_pages.max(1);
    let width = width.max(1);
    let current = current_page.clamp(1, total_pages) as i64;
    let half = (width / 2) as i64;
    let latest_start = total_pages as i64 - (width as i64 - 1);
    let start = (current - half).min(latest_start).max(1) as usize;
    let end = (start + width - 1).min(total_pages);
    (start..=end).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), CellValue::from_raw(v)))
            .collect()
    }

    fn numbered_rows(count: usize) -> Vec<Row> {
        (1..=count)
            .map(|idx| row(&[("id", idx.to_string().as_str())]))
            .collect()
    }

    #[test]
    fn empty_term_keeps_every_row() {
        let rows = numbered_rows(3);
        assert_eq!(filter_rows(&rows, "").len(), 3);
    }

    #[test]
    fn filter_scans_every_value_case_insensitively() {
        let rows = vec![
            row(&[("name", "Alice"), ("city", "Paris")]),
            row(&[("name", "Bob"), ("city", "PARIS-Nord")]),
            row(&[("name", "Carol"), ("city", "Tokyo")]),
        ];
        let names: Vec<String> = filter_rows(&rows, "paris")
            .iter()
            .map(|r| r["name"].to_string())
            .collect();
        assert_eq!(names, vec!["Alice".to_string(), "Bob".to_string()]);
    }

    #[test]
    fn sort_without_column_preserves_order() {
        let rows = vec![row(&[("n", "b")]), row(&[("n", "a")])];
        let sorted = sort_rows(rows.iter().collect(), &SortSpec::default());
        assert_eq!(sorted[0]["n"].to_string(), "b");
    }

    #[test]
    fn numbers_sort_numerically_and_missing_sorts_first() {
        let rows = vec![
            row(&[("age", "30")]),
            row(&[("age", "4")]),
            row(&[("name", "nobody")]),
        ];
        let sorted = sort_rows(
            rows.iter().collect(),
            &SortSpec::by("age", SortDirection::Ascending),
        );
        let ages: Vec<String> = sorted
            .iter()
            .map(|r| r.get("age").map(ToString::to_string).unwrap_or_default())
            .collect();
        assert_eq!(ages, vec!["", "4", "30"]);
    }

    fn sorted_values(rows: &[Row], direction: SortDirection) -> Vec<String> {
        sort_rows(rows.iter().collect(), &SortSpec::by("v", direction))
            .iter()
            .map(|r| r.get("v").map(ToString::to_string).unwrap_or_default())
            .collect()
    }

    #[test]
    fn decimal_text_sorts_with_plain_numbers() {
        let rows: Vec<Row> = ["10", "2.50", "15.0", "100", "20"]
            .iter()
            .map(|v| row(&[("v", *v)]))
            .collect();
        assert!(matches!(rows[1]["v"], CellValue::Text(_)));
        assert_eq!(
            sorted_values(&rows, SortDirection::Ascending),
            vec!["2.50", "10", "15.0", "20", "100"]
        );
        assert_eq!(
            sorted_values(&rows, SortDirection::Descending),
            vec!["100", "20", "15.0", "10", "2.50"]
        );
    }

    #[test]
    fn mixed_cell_kinds_sort_blank_then_number_then_text() {
        let rows = vec![
            row(&[("v", "pending")]),
            row(&[("v", "7")]),
            row(&[("v", "")]),
            row(&[("v", "1,200")]),
            row(&[("other", "x")]),
            row(&[("v", "3.50")]),
            row(&[("v", "n/a")]),
        ];
        assert_eq!(
            sorted_values(&rows, SortDirection::Ascending),
            vec!["", "", "3.50", "7", "1,200", "n/a", "pending"]
        );
        assert_eq!(
            sorted_values(&rows, SortDirection::Descending),
            vec!["pending", "n/a", "1,200", "7", "3.50", "", ""]
        );
    }

    #[test]
    fn compare_cells_is_a_total_order_over_mixed_values() {
        let values: Vec<Option<CellValue>> = [
            "", "0", "10", "100", "15.0", "2.50", "20", "-3", "1,000", "abc", "ABC", "0050",
            "n/a", "1e3",
        ]
        .iter()
        .map(|raw| Some(CellValue::from_raw(raw)))
        .chain([None, Some(CellValue::Number(20.0))])
        .collect();

        for a in &values {
            for b in &values {
                let ab = compare_cells(a.as_ref(), b.as_ref());
                let ba = compare_cells(b.as_ref(), a.as_ref());
                assert_eq!(ab, ba.reverse(), "antisymmetry for {a:?} / {b:?}");
                for c in &values {
                    let bc = compare_cells(b.as_ref(), c.as_ref());
                    if ab != Ordering::Greater && bc != Ordering::Greater {
                        assert_ne!(
                            compare_cells(a.as_ref(), c.as_ref()),
                            Ordering::Greater,
                            "transitivity for {a:?} <= {b:?} <= {c:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn sorting_many_mixed_columns_stays_ordered() {
        for seed in 0..50u64 {
            let rows: Vec<Row> = (0..60u64)
                .map(|idx| {
                    let n = (idx * 37 + seed * 11) % 120;
                    let raw = match (idx + seed) % 4 {
                        0 => n.to_string(),
                        1 => format!("{n}.50"),
                        2 => format!("{n}.0"),
                        _ => String::new(),
                    };
                    row(&[("v", raw.as_str())])
                })
                .collect();
            for direction in [SortDirection::Ascending, SortDirection::Descending] {
                let sorted = sort_rows(rows.iter().collect(), &SortSpec::by("v", direction));
                assert_eq!(sorted.len(), rows.len());
                for pair in sorted.windows(2) {
                    let ordering = compare_cells(pair[0].get("v"), pair[1].get("v"));
                    let expected_not = match direction {
                        SortDirection::Ascending => Ordering::Greater,
                        SortDirection::Descending => Ordering::Less,
                    };
                    assert_ne!(ordering, expected_not, "seed {seed} {direction:?}");
                }
            }
        }
    }

    #[test]
    fn equal_keys_keep_filtered_order_in_both_directions() {
        let rows = vec![
            row(&[("k", "x"), ("id", "1")]),
            row(&[("k", "y"), ("id", "2")]),
            row(&[("k", "x"), ("id", "3")]),
        ];
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sorted = sort_rows(rows.iter().collect(), &SortSpec::by("k", direction));
            let ids: Vec<String> = sorted
                .iter()
                .filter(|r| r["k"].to_string() == "x")
                .map(|r| r["id"].to_string())
                .collect();
            assert_eq!(ids, vec!["1", "3"], "direction {direction:?}");
        }
    }

    #[test]
    fn descending_reverses_ascending_for_distinct_keys() {
        let rows = vec![
            row(&[("n", "b")]),
            row(&[("n", "c")]),
            row(&[("n", "a")]),
        ];
        let desc = sort_rows(
            rows.iter().collect(),
            &SortSpec::by("n", SortDirection::Descending),
        );
        let keys: Vec<String> = desc.iter().map(|r| r["n"].to_string()).collect();
        assert_eq!(keys, vec!["c", "b", "a"]);
    }

    #[test]
    fn clamp_page_handles_out_of_range_requests() {
        assert_eq!(clamp_page(-4, 3), 1);
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(99, 3), 3);
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn empty_result_still_has_one_page() {
        let page = paginate(&[], 7, 10);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page.current_page, 1);
        assert!(page.rows.is_empty());
        assert_eq!(page.range.to_string(), "0-0 of 0");
    }

    #[test]
    fn last_page_is_clipped() {
        let rows = numbered_rows(23);
        let refs: Vec<&Row> = rows.iter().collect();
        let page = paginate(&refs, 3, 10);
        assert_eq!(page.rows.len(), 3);
        assert_eq!(page.range.to_string(), "21-23 of 23");
    }

    #[test]
    fn toggle_sort_sets_then_flips() {
        let none = SortSpec::default();
        let first = toggle_sort(&none, "age");
        assert_eq!(first, SortSpec::by("age", SortDirection::Ascending));
        let second = toggle_sort(&first, "age");
        assert_eq!(second, SortSpec::by("age", SortDirection::Descending));
        let third = toggle_sort(&second, "age");
        assert_eq!(third, SortSpec::by("age", SortDirection::Ascending));
        let other = toggle_sort(&second, "name");
        assert_eq!(other, SortSpec::by("name", SortDirection::Ascending));
    }

    #[test]
    fn page_strip_tracks_current_page_within_bounds() {
        assert_eq!(page_strip(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_strip(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_strip(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_strip(9, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_strip(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_strip(1, 0, 5), vec![1]);
    }
}
