#![no_main]

use libfuzzer_sys::fuzz_target;
use navmetrics_core::{NavGraph, parse_edge_list};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Any accepted record list must also build a graph.
    if let Ok(records) = parse_edge_list(text) {
        let count = records.len();
        let graph = NavGraph::from_records(records).expect("parsed records are valid");
        assert!(graph.edge_count() <= count);
    }
});
