use crate::domain::MenuRow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bucket {
    Named(String),
    /// Rows with a blank or missing category. Rendered without a heading.
    Uncategorized,
}

impl Bucket {
    pub fn heading(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            Self::Uncategorized => None,
        }
    }
}

pub type GroupedMenu = Vec<(Bucket, Vec<MenuRow>)>;

/// Groups rows by trimmed `Category`, keeping buckets in first-seen order
/// and rows in input order.
pub fn group(rows: &[MenuRow]) -> GroupedMenu {
    let mut grouped: GroupedMenu = Vec::new();

    for row in rows {
        let bucket = bucket_for(row);
        match grouped.iter_mut().find(|(existing, _)| *existing == bucket) {
            Some((_, items)) => items.push(row.clone()),
            None => grouped.push((bucket, vec![row.clone()])),
        }
    }

    grouped
}

fn bucket_for(row: &MenuRow) -> Bucket {
    row.category
        .as_deref()
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map_or(Bucket::Uncategorized, |category| {
            Bucket::Named(category.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[MenuRow]) -> Vec<&str> {
        items.iter().map(|row| row.item_name.as_str()).collect()
    }

    #[test]
    fn keeps_first_seen_bucket_order_and_row_order() {
        let rows = vec![
            MenuRow::new("Tom Yum").with_category("Veg"),
            MenuRow::new("Tom Kha").with_category("Non-Veg"),
            MenuRow::new("Clear Soup").with_category("Veg"),
            MenuRow::new("Wonton").with_category("Non-Veg"),
            MenuRow::new("Manchow").with_category("Veg"),
        ];

        let grouped = group(&rows);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, Bucket::Named("Veg".to_string()));
        assert_eq!(names(&grouped[0].1), ["Tom Yum", "Clear Soup", "Manchow"]);
        assert_eq!(grouped[1].0, Bucket::Named("Non-Veg".to_string()));
        assert_eq!(names(&grouped[1].1), ["Tom Kha", "Wonton"]);
    }

    #[test]
    fn blank_and_missing_categories_share_one_bucket() {
        let rows = vec![
            MenuRow::new("Papad"),
            MenuRow::new("Salad").with_category("Sides"),
            MenuRow::new("Pickle").with_category("   "),
            MenuRow::new("Chutney").with_category(""),
        ];

        let grouped = group(&rows);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, Bucket::Uncategorized);
        assert_eq!(grouped[0].0.heading(), None);
        assert_eq!(names(&grouped[0].1), ["Papad", "Pickle", "Chutney"]);
        assert_eq!(grouped[1].0.heading(), Some("Sides"));
    }

    #[test]
    fn category_is_trimmed_before_grouping() {
        let rows = vec![
            MenuRow::new("Naan").with_category(" Breads"),
            MenuRow::new("Roti").with_category("Breads "),
        ];

        let grouped = group(&rows);

        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].0.heading(), Some("Breads"));
        assert_eq!(names(&grouped[0].1), ["Naan", "Roti"]);
    }

    #[test]
    fn buckets_are_not_sorted_alphabetically() {
        let rows = vec![
            MenuRow::new("a").with_category("Zest"),
            MenuRow::new("b").with_category("Apple"),
        ];

        let headings: Vec<_> = group(&rows)
            .iter()
            .map(|(bucket, _)| bucket.heading().map(ToString::to_string))
            .collect();

        assert_eq!(
            headings,
            [Some("Zest".to_string()), Some("Apple".to_string())]
        );
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(group(&[]).is_empty());
    }
}
