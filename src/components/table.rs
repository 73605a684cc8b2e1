//! Results table component.

use leptos::*;

use crate::state::UiState;
use crate::types::BookRecord;

/// Cells of one rendered row: 1-based position, hover hint, then the record
/// fields in column order.
#[derive(Clone, Debug, PartialEq)]
struct BookRow {
    position: usize,
    hover: String,
    title: String,
    price: String,
    availability: String,
    rating: String,
}

/// Project the dataset into rows, in input order.
fn project_rows(books: &[BookRecord]) -> Vec<BookRow> {
    books
        .iter()
        .enumerate()
        .map(|(idx, book)| BookRow {
            position: idx + 1,
            hover: book.title.clone(),
            title: book.title.clone(),
            price: book.price.clone(),
            availability: book.availability.clone(),
            rating: book.rating.clone(),
        })
        .collect()
}

/// The scraped-books table.
///
/// The body is rebuilt from scratch on every dataset change — no keyed
/// reconciliation, so a replacement dataset can never leave stale rows
/// behind. An empty dataset collapses to a single notice row.
#[component]
pub fn BookTable(state: RwSignal<UiState>) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="books-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Title"</th>
                        <th>"Price"</th>
                        <th>"Availability"</th>
                        <th>"Rating"</th>
                    </tr>
                </thead>
                <tbody id="tableBody">
                    {move || {
                        let books = state.get().books;
                        if books.is_empty() {
                            view! {
                                <tr class="empty-row">
                                    <td colspan="5">"No data available."</td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            project_rows(&books)
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.position}</td>
                                        <td title=row.hover>{row.title}</td>
                                        <td>{row.price}</td>
                                        <td>{row.availability}</td>
                                        <td><span class="rating">{row.rating}</span></td>
                                    </tr>
                                })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
