// Survey intake: validation, threshold scoring, insert-only persistence.
// Handlers only glue these together; all decisions live in `scoring`.

pub mod fixture;
pub mod handlers;
pub mod models;
pub mod scoring;
pub mod store;
