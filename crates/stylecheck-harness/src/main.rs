//! `stylecheck-harness`: verify every style check against its fixtures.
//!
//! Exit status: 0 when every case passes, 1 when any case fails, 2 when the
//! harness cannot start.

fn main() -> std::process::ExitCode {
    stylecheck_harness::cli::main_entry()
}
