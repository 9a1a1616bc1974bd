// dyndesk-cli/src/commands/mod.rs
//
// Command implementations for the dyndesk CLI.

pub mod schedule;
