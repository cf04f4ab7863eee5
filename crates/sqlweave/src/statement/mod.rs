//! Statement descriptors and the builder that turns them into SQL.
//!
//! Each statement is assembled from its clauses in a fixed order. Empty
//! clauses are dropped, the rest are joined with a single space, and the
//! result is terminated with exactly one `;`.

pub mod delete;
pub mod insert;
pub mod select;
pub mod traits;
pub mod update;

pub use delete::Delete;
pub use insert::{Insert, Row};
pub use select::Select;
pub use traits::StatementBuilder;
pub use update::Update;

/// Join the non-empty parts with a space and terminate with `;`.
pub(crate) fn assemble(parts: &[&str]) -> String {
    let body = parts
        .iter()
        .copied()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{};", body.trim())
}

#[cfg(test)]
mod tests;
