use dioxus::prelude::*;
use records::{Cell, RecordId, Resource};

use crate::Icon;
use crate::icons::{FaPen, FaTrash};

/// One rendered table row.
#[derive(Clone, Debug, PartialEq)]
pub struct TableRow {
    pub id: RecordId,
    pub cells: Vec<Cell>,
}

impl TableRow {
    pub fn from_record<R: Resource>(record: &R) -> Self {
        Self {
            id: record.id().clone(),
            cells: record.cells(),
        }
    }
}

/// The records table: a running number, the resource's columns, and per-row
/// Edit/Delete actions.
#[component]
pub fn RecordTable(
    columns: &'static [&'static str],
    rows: Vec<TableRow>,
    #[props(default)] loading: bool,
    on_edit: EventHandler<RecordId>,
    on_delete: EventHandler<RecordId>,
) -> Element {
    rsx! {
        table {
            class: if loading { "records-table loading" } else { "records-table" },
            thead {
                tr {
                    th { scope: "col", "No" }
                    for column in columns.iter() {
                        th { scope: "col", "{column}" }
                    }
                    th { scope: "col", class: "text-end", "Action" }
                }
            }
            tbody {
                if rows.is_empty() && !loading {
                    tr {
                        td {
                            class: "records-empty",
                            colspan: "{columns.len() + 2}",
                            "No records"
                        }
                    }
                }
                for (index, row) in rows.into_iter().enumerate() {
                    tr {
                        key: "{row.id}",
                        th { scope: "row", "{index + 1}" }
                        for cell in row.cells.iter() {
                            td { CellView { cell: cell.clone() } }
                        }
                        td {
                            class: "row-actions",
                            button {
                                class: "btn btn-primary",
                                title: "Edit",
                                onclick: {
                                    let id = row.id.clone();
                                    move |_| on_edit.call(id.clone())
                                },
                                Icon { icon: FaPen, width: 12, height: 12 }
                                span { "Edit" }
                            }
                            button {
                                class: "btn btn-danger",
                                title: "Delete",
                                onclick: {
                                    let id = row.id.clone();
                                    move |_| on_delete.call(id.clone())
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
                                span { "Delete" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CellView(cell: Cell) -> Element {
    match cell {
        Cell::Text(text) => rsx! { "{text}" },
        Cell::Image(src) if src.is_empty() => rsx! {},
        Cell::Image(src) => rsx! {
            img {
                class: "record-thumb",
                src: "{src}",
                height: "50",
                alt: "",
                "loading": "lazy",
            }
        },
    }
}
