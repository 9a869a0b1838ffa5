//! Integration tests

mod e2e_test;
mod history_test;
mod stats_test;
