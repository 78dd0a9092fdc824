//! Progress reporters implementing the application's `ProgressNotifier`

pub mod reporter;
