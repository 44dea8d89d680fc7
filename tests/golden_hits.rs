#[path = "common/mod.rs"]
mod common;
use asoscreen::io::render_hits;
use asoscreen::screening::scan_all;
use common::{assert_snapshot, panel_queries, panel_targets};

#[test]
fn panel_hits_match_golden() {
    let hits = scan_all(&panel_queries(), &panel_targets(), 1);
    let actual = render_hits(&hits).expect("CSV rendering should succeed");
    assert_snapshot("hits/panel.csv", &actual);
}
