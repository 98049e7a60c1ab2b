mod parse_time;

criterion::criterion_group!(benches, parse_time::bench, validate_case::bench);
criterion::criterion_main!(benches);
