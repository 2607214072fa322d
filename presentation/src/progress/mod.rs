//! Progress reporting implementations of
//! [`ProgressNotifier`](subquery_application::ProgressNotifier)

pub mod reporter;
