use criterion::{criterion_group, criterion_main, Criterion};
use geowkt::geometry::{LineString, MultiPolygon, Polygon};
use geowkt::{read_wkt, to_wkt};

fn create_data() -> MultiPolygon {
    // An L shape
    let exterior = LineString::from(vec![
        (0.0, 0.0),
        (4.0, 0.0),
        (4.0, 1.0),
        (1.0, 1.0),
        (1.0, 4.0),
        (0.0, 4.0),
        (0.0, 0.0),
    ]);
    let poly = Polygon::new(exterior, vec![]);
    MultiPolygon::new(vec![poly; 1000])
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = create_data();
    let wkt = to_wkt(&data).unwrap();

    c.bench_function("write MultiPolygon to WKT", |b| {
        b.iter(|| {
            let _wkt = to_wkt(&data).unwrap();
        })
    });

    c.bench_function("read WKT to MultiPolygon", |b| {
        b.iter(|| {
            let _geometry = read_wkt(&wkt).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
