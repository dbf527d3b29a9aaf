use blockdeque::Deque;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmarks(c: &mut Criterion) {
    c.bench_function("bench_new", |b| {
        b.iter(|| {
            let ring: Deque<i32> = Deque::new();
            black_box(ring);
        })
    });

    c.bench_function("bench_grow_1025", |b| {
        b.iter(|| {
            let mut deq = Deque::new();
            for i in 0..1025 {
                let _ = deq.push_front(i);
            }
            black_box(deq);
        })
    });

    c.bench_function("bench_push_pop_back_1025", |b| {
        let mut deq = Deque::new();
        b.iter(|| {
            for i in 0..1025 {
                let _ = deq.push_back(i);
            }
            while let Some(i) = deq.pop_back() {
                black_box(i);
            }
        })
    });

    // a queue sliding across block boundaries
    c.bench_function("bench_fifo_4096", |b| {
        let mut deq = Deque::with_max_len(100);
        b.iter(|| {
            for i in 0..4096 {
                if deq.push_back(i).is_err() {
                    black_box(deq.pop_front());
                    let _ = deq.push_back(i);
                }
            }
        })
    });

    let ring: Deque<_> = (0..1000).collect();
    c.bench_function("bench_iter_1000", |b| {
        b.iter(|| {
            let mut sum = 0;
            for &i in &ring {
                sum += i;
            }
            black_box(sum);
        })
    });

    c.bench_function("bench_get_1000", |b| {
        b.iter(|| {
            let mut sum = 0;
            for i in 0..ring.len() {
                sum += ring[i];
            }
            black_box(sum);
        })
    });

    c.bench_function("bench_clone_1000", |b| b.iter(|| black_box(ring.clone())));

    let mut ring: Deque<u16> = Deque::new();
    c.bench_function("bench_rotate_1000", |b| {
        ring.extend_back(0..1000).unwrap();
        b.iter(|| {
            ring.rotate(black_box(333));
            ring.rotate(black_box(-250));
        })
    });

    let mut ring: Deque<u8> = Deque::new();
    let input: &[u8] = &[128; 512];
    c.bench_function("bench_extend_bytes", |b| {
        b.iter(|| {
            ring.clear();
            let _ = ring.extend_back(black_box(input).iter().copied());
        })
    });

    let mut ring: Deque<u16> = Deque::new();
    c.bench_function("bench_extend_chained", |b| {
        b.iter(|| {
            ring.clear();
            let _ = ring.extend_back(black_box((0..256).chain(768..1024)));
        })
    });

    let mut ring: Deque<u16> = Deque::new();
    c.bench_function("bench_extend_front_chained", |b| {
        b.iter(|| {
            ring.clear();
            let _ = ring.extend_front(black_box((0..256).chain(768..1024)));
        })
    });
}

criterion_group!(benches, criterion_benchmarks);
criterion_main!(benches);
