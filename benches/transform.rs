use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nds_path::{invert, map, nds, path, InverterConfig, MapperConfig, Value};

fn records(size: usize) -> Value {
    Value::Array(
        (0..size)
            .map(|i| {
                nds!({
                    "id": i,
                    "name": (format!("item{}", i)),
                    "m1": {"value": (i * 2)},
                    "tags": ["a", "b"]
                })
            })
            .collect(),
    )
}

fn mapper_config(map_to_objects: bool, map_to_tuples: bool) -> MapperConfig {
    let (id, name, value) = if map_to_objects {
        (nds!("id"), nds!("name"), nds!("value"))
    } else {
        (nds!(0), nds!(1), nds!(2))
    };
    MapperConfig::from_value(&nds!({
        "mapToObjects": map_to_objects,
        "mapToTuples": map_to_tuples,
        "mappings": [
            {"src": "/id", "target": id},
            {"src": {"path": ["name"], "parse": "string"}, "target": name},
            {"src": ["/^m\\d$/", "value"], "target": value}
        ]
    }))
    .unwrap()
}

fn benchmark_resolve(c: &mut Criterion) {
    let data = nds!({"a": {"b": [{"c": "12"}]}});
    let pointer = path::create(&nds!("/a/b/0/c")).unwrap();
    let parsed = path::create(&nds!({"path": ["a", "b", 0, "c"], "parse": "number"})).unwrap();
    let regex = path::create(&nds!(["/^a$/", "b", 0, "/^c/"])).unwrap();

    let mut group = c.benchmark_group("resolve");
    group.bench_function("pointer", |b| b.iter(|| pointer.resolve(black_box(&data))));
    group.bench_function("tokens_parse", |b| b.iter(|| parsed.resolve(black_box(&data))));
    group.bench_function("regex", |b| b.iter(|| regex.resolve(black_box(&data))));
    group.finish();
}

fn benchmark_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    for size in [10, 100, 1000].iter() {
        let data = records(*size);
        for (label, objects, tuples) in [
            ("object_tuples", true, true),
            ("object_series", true, false),
            ("array_tuples", false, true),
            ("array_series", false, false),
        ] {
            let config = mapper_config(objects, tuples);
            group.bench_with_input(BenchmarkId::new(label, size), &data, |b, data| {
                b.iter(|| map(black_box(data), &config))
            });
        }
    }

    group.finish();
}

fn benchmark_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");

    for size in [10, 100, 1000].iter() {
        let tuples = Value::Array(
            (0..*size)
                .map(|i| nds!([i, (i + 1), (i + 2), (i + 3)]))
                .collect(),
        );
        let objects = map(&records(*size), &mapper_config(true, true)).unwrap();

        group.bench_with_input(BenchmarkId::new("array_tuples", size), &tuples, |b, data| {
            b.iter(|| invert(black_box(data), &InverterConfig::new(false, true)))
        });
        group.bench_with_input(BenchmarkId::new("object_tuples", size), &objects, |b, data| {
            b.iter(|| invert(black_box(data), &InverterConfig::new(true, true)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_resolve, benchmark_map, benchmark_invert);
criterion_main!(benches);
