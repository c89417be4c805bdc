//! Extraction fuzzer.
//!
//! Feeds arbitrary UTF-8 text through the extractor and checks the shared
//! extraction invariants. Crash inputs belong in
//! `tests/crash_inputs/extract/`, where the regression tests replay them.

use create_table_analyzer::testing::check_extraction;
use honggfuzz::fuzz;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(sql) = std::str::from_utf8(data) {
                check_extraction(sql);
            }
        });
    }
}
