#![no_main]

use libfuzzer_sys::fuzz_target;
use navmetrics_analysis::MetricsSnapshot;
use navmetrics_core::{EdgeRecord, NavGraph};

// Each byte triple is one edge between up to 16 pages. The third byte picks
// a weight at either end of the `u64` range so large totals are exercised.
fuzz_target!(|data: &[u8]| {
    let records = data.chunks_exact(3).map(|edge| {
        EdgeRecord::new(
            format!("p{}", edge[0] & 0x0f),
            format!("p{}", edge[1] & 0x0f),
            weight_from(edge[2]),
        )
    });
    let Ok(graph) = NavGraph::from_records(records) else {
        return;
    };

    let snap = MetricsSnapshot::compute(&graph);
    assert_eq!(snap.graph_info.total_weight, graph.total_weight());
    for c in snap.closeness_centrality.values() {
        assert!((0.0..=1.0).contains(c));
    }
    for c in snap.clustering_coefficient.values() {
        assert!((0.0..=1.0).contains(c));
    }
    let json = snap.to_json_pretty().expect("encode");
    assert_eq!(MetricsSnapshot::from_json(&json).expect("decode"), snap);
});

fn weight_from(byte: u8) -> u64 {
    if byte & 0x80 == 0 {
        u64::from(byte) + 1
    } else {
        u64::MAX - u64::from(byte & 0x7f)
    }
}
