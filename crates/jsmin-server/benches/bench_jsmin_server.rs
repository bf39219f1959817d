use axum::body::Body;
use axum::http::Request;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use jsmin_server::{app_with_state, config::JsminConfig, state::AppState};
use tokio::runtime::Runtime;
use tower::ServiceExt;

fn bench_serve_minified(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let tmp = tempfile::tempdir().unwrap();
    let source = "var view = {\n  // handlers\n  init: function() { log('ready'); }\n};\n".repeat(100);
    std::fs::write(tmp.path().join("app.min.js"), source).unwrap();

    let mut config = JsminConfig::default();
    config.server.root = tmp.path().to_path_buf();
    config.quiet = true;
    let state = AppState::new(config);

    c.bench_function("http_serve_minified_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                for _ in 0..100 {
                    let req = Request::builder().uri("/app.js").body(Body::empty()).unwrap();
                    let resp = app_with_state(state.clone()).oneshot(req).await.unwrap();
                    black_box(resp.status());
                }
            })
        })
    });
}

criterion_group!(benches, bench_serve_minified);
criterion_main!(benches);
