use super::error::DanglingReference;
use super::index::ReferenceIndex;
use super::source::{Export, List};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// One row per folder with its member lists in declared order.
    pub fn folders(export: &Export, index: &ReferenceIndex<'_>) {
        let mut table = Table::new();

        table.add_row(row!["ID", "FOLDER", "LISTS", "TASKS"]);
        for folder in &export.folders {
            let titles: Vec<&str> = folder
                .list_ids
                .iter()
                .map(|&id| index.list(id).map(|list| list.title.as_str()).unwrap_or("?"))
                .collect();
            let tasks: usize = folder.list_ids.iter().map(|&id| index.tasks_of(id).len()).sum();
            table.add_row(row![folder.id, folder.title, titles.join(", "), tasks]);
        }
        table.printstd();
    }

    pub fn orphans(lists: &[&List], index: &ReferenceIndex<'_>) {
        let mut table = Table::new();

        table.add_row(row!["ID", "LIST", "TASKS"]);
        for list in lists {
            table.add_row(row![list.id, list.title, index.tasks_of(list.id).len()]);
        }
        table.printstd();
    }

    pub fn dangling(references: &[DanglingReference]) {
        let mut table = Table::new();

        table.add_row(row!["#", "REFERENCE"]);
        for (i, reference) in references.iter().enumerate() {
            table.add_row(row![i + 1, reference]);
        }
        table.printstd();
    }
}
