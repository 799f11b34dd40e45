use criterion::{Criterion, criterion_group, criterion_main};
use newsdesk_engine::{BlockType, EditorSession, RenderContext, StoredContent, render_content};
use serde_json::json;
use std::hint::black_box;

fn session_with_blocks(count: usize) -> EditorSession {
    let mut session = EditorSession::new();
    for i in 0..count {
        let ty = BlockType::ALL[i % BlockType::ALL.len()];
        session.add_block(ty, Some(&json!({ "content": format!("<p>Paragraph {i}</p>"), "imageUrl": "a.jpg", "text": "q", "url": "https://youtu.be/abc" })));
    }
    session
}

fn bench_session_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_operations");
    group.sample_size(20);

    let session = session_with_blocks(200);

    group.bench_function("reorder_first_to_last", |b| {
        b.iter(|| {
            let mut session = session.clone();
            session.reorder_blocks(0, black_box(199));
            black_box(session);
        });
    });

    group.bench_function("delete_middle", |b| {
        let id = session.blocks()[100].id.clone();
        b.iter(|| {
            let mut session = session.clone();
            session.delete_block(black_box(&id));
            black_box(session);
        });
    });

    group.bench_function("update_data", |b| {
        let id = session.blocks()[50].id.clone();
        let updates = json!({ "data": { "caption": "Updated" } });
        b.iter(|| {
            let mut session = session.clone();
            let _ = session.update_block(black_box(&id), &updates);
            black_box(session);
        });
    });

    group.finish();
}

fn bench_rendering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rendering");
    group.sample_size(20);

    let content = StoredContent::from(session_with_blocks(200).get_content());
    let ctx = RenderContext::default();

    group.bench_function("render_content_to_html", |b| {
        b.iter(|| {
            let html = render_content(black_box(&content), &ctx).to_html();
            black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_session_operations, bench_rendering);
criterion_main!(benches);
