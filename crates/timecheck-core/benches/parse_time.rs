use chrono::NaiveTime;
use timecheck_core::datetime::Time;

pub(crate) fn bench(c: &mut criterion::Criterion) {
    c.bench_function("parse_time_strict", |b| {
        b.iter(|| "11:45:23".parse::<Time>())
    });
    c.bench_function("parse_time_chrono_format", |b| {
        b.iter(|| NaiveTime::parse_from_str("11:45:23", "%H:%M:%S"))
    });
    c.bench_function("parse_time_rejected", |b| {
        b.iter(|| "14-30-00".parse::<Time>())
    });
}
