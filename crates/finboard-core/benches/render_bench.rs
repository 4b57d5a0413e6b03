use criterion::{black_box, criterion_group, criterion_main, Criterion};
use finboard_core::{render_page, render_page_png_bytes, DashboardConfig, DashboardData, Highlights, Page, RenderOptions};

fn bench_render(c: &mut Criterion) {
    let cfg = DashboardConfig::default();
    let data = DashboardData::default();
    let mut group = c.benchmark_group("render_page");
    for page in Page::ALL {
        group.bench_function(format!("svg_{}", page.slug()), |b| {
            b.iter(|| black_box(render_page(page, &data, &cfg, &Highlights::default())));
        });
        group.bench_function(format!("png_{}", page.slug()), |b| {
            let mut opts = RenderOptions::from_config(&cfg);
            opts.draw_labels = false;
            b.iter(|| -> finboard_core::Result<()> {
                let bytes = render_page_png_bytes(page, &data, &cfg, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
