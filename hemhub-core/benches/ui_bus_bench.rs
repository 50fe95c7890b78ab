#[macro_use]
extern crate criterion;

use criterion::Criterion;

use hemhub_core::events::{IndicatorState, UiEvent, UiEventBus, UiEventKind};

fn bench_ui_bus_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("ui_bus_throughput");

    for capacity in [128, 1024, 16384] {
        group.throughput(criterion::Throughput::Elements(capacity as u64));
        group.bench_function(format!("capacity_{}", capacity), |b| {
            let bus = UiEventBus::with_capacity(capacity);
            let event = UiEvent::new(
                0,
                UiEventKind::ConnectionIndicator {
                    state: IndicatorState::Neutral,
                },
            );
            b.iter(|| {
                bus.push(event.clone()).unwrap();
                bus.pop().unwrap();
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_ui_bus_push_pop);
criterion_main!(benches);
