// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use reward_watch::project::{self, Project};

/// A page shaped like a live description page: lots of unrelated scripts,
/// one of which carries the escaped project.
fn synthetic_page(rewards: usize) -> String {
    let mut json = String::from(r#"{"name":"Bench","currency_symbol":"$","rewards":["#);
    for id in 0..rewards {
        if id > 0 { json.push(','); }
        json.push_str(&format!(
            r#"{{"id":{id},"title":"Tier {id}","title_for_backing_tier":"${p} Tier {id}","minimum":{p},"limit":100,"remaining":{r}}}"#,
            p = 10 + id,
            r = id % 3,
        ));
    }
    json.push_str("]}");
    let escaped = json.replace('&', "&amp;").replace('"', "&quot;");

    let mut page = String::from("<html><head>");
    for i in 0..200 {
        page.push_str(&format!("<script>window.chunk_{i} = \"{}\";</script>\n", "x".repeat(512)));
    }
    page.push_str(&format!("<script>window.current_project = \"{escaped}\";</script></head></html>"));
    page
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(60);

    c.bench_function("extract_project_json", |b| {
        b.iter(|| project::extract_project_json(black_box(&page)).map(|s| s.len()))
    });

    c.bench_function("parse_and_seed", |b| {
        b.iter(|| {
            let raw = project::parse_page(black_box(&page)).unwrap();
            Project::from_first(&raw).map(|p| p.len()).unwrap()
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
