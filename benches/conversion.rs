//! Benchmarks for story conversion.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use storyweave::export::{HtmlExporter, JsonExporter};
use storyweave::import::{parse_json, parse_twine};
use storyweave::{Passage, Story};

const CAVE_HTML: &str = include_str!("../tests/fixtures/cave.html");

/// A story with enough passages to make per-passage costs visible.
fn large_story(passages: usize) -> Story {
    let mut story = Story::new("Large").with_start_passage("P0");
    for i in 0..passages {
        let content = format!(
            "Passage {i} text.\n\nSome more text here.\n[[Next|P{}]] or [[Back|P{}]]",
            i + 1,
            i.saturating_sub(1)
        );
        story.add_passage(Passage::new(format!("P{i}"), content).at(i as f64, 0.0));
    }
    story
}

fn large_twine(passages: usize) -> String {
    let mut html = String::from(r#"<tw-storydata name="Large" startnode="0">"#);
    for i in 0..passages {
        html.push_str(&format!(
            r#"<tw-passagedata pid="{i}" name="P{i}" position="{},{}">Text [[P{}]]</tw-passagedata>"#,
            i * 10,
            i * 5,
            i + 1
        ));
    }
    html.push_str("</tw-storydata>");
    html
}

fn bench_import(c: &mut Criterion) {
    c.bench_function("parse_twine_fixture", |b| {
        b.iter(|| parse_twine(CAVE_HTML).unwrap());
    });

    let html = large_twine(500);
    c.bench_function("parse_twine_500", |b| {
        b.iter(|| parse_twine(&html).unwrap());
    });

    let json = JsonExporter::new().render(&large_story(500)).unwrap();
    c.bench_function("parse_json_500", |b| {
        b.iter(|| parse_json(&json).unwrap());
    });
}

fn bench_export(c: &mut Criterion) {
    let story = large_story(500);

    c.bench_function("render_html_500", |b| {
        b.iter(|| HtmlExporter::new().render(&story).unwrap());
    });

    c.bench_function("render_json_500", |b| {
        b.iter(|| JsonExporter::new().render(&story).unwrap());
    });

    c.bench_function("render_passage", |b| {
        b.iter(|| story.render("P250"));
    });
}

criterion_group!(benches, bench_import, bench_export);
criterion_main!(benches);
