// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Size, Vec2};
use understory_zoom::{UnitPoint, ZoomConfig, ZoomController, ZoomGesture, clamp_transform};

const SIZE: Size = Size::new(1920.0, 1080.0);

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform in `[lo, hi)`.
    fn next_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * (f64::from(self.next_u32()) / f64::from(u32::MAX))
    }
}

fn config() -> ZoomConfig {
    ZoomConfig::new().with_max_zoom_scale(Some(8.0))
}

fn random_transforms(n: usize, seed: u64) -> Vec<Affine> {
    let mut rng = Lcg::new(seed);
    (0..n)
        .map(|_| {
            let s = rng.next_f64(0.5, 12.0);
            let tx = rng.next_f64(-20_000.0, 2_000.0);
            let ty = rng.next_f64(-20_000.0, 2_000.0);
            Affine::translate((tx, ty)) * Affine::scale(s)
        })
        .collect()
}

fn random_gestures(n: usize, seed: u64) -> Vec<ZoomGesture> {
    let mut rng = Lcg::new(seed);
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        match rng.next_u32() % 4 {
            0 => {
                for _ in 0..8 {
                    out.push(ZoomGesture::MagnifyChanged {
                        magnification: rng.next_f64(0.6, 3.0),
                        focal_point: UnitPoint::new(rng.next_f64(0.0, 1.0), rng.next_f64(0.0, 1.0)),
                    });
                }
                out.push(ZoomGesture::MagnifyEnded);
            }
            1 => {
                for _ in 0..8 {
                    out.push(ZoomGesture::DragChanged {
                        translation: Vec2::new(
                            rng.next_f64(-800.0, 800.0),
                            rng.next_f64(-800.0, 800.0),
                        ),
                    });
                }
                out.push(ZoomGesture::DragEnded);
            }
            2 => out.push(ZoomGesture::DoubleTap {
                location: Point::new(
                    rng.next_f64(0.0, SIZE.width),
                    rng.next_f64(0.0, SIZE.height),
                ),
            }),
            _ => out.push(ZoomGesture::Cancelled),
        }
    }
    out
}

fn bench_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/clamp_transform");
    let config = config();
    let transforms = random_transforms(4_096, 0x5eed);

    group.bench_function("random_4096", |b| {
        b.iter(|| {
            for t in &transforms {
                black_box(clamp_transform(black_box(*t), SIZE, &config));
            }
        });
    });

    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom/handle");
    let gestures = random_gestures(4_096, 0xface);

    group.bench_function("mixed_4096", |b| {
        b.iter_batched(
            || {
                let mut zoom = ZoomController::new(config()).expect("valid config");
                zoom.set_content_size(SIZE);
                zoom
            },
            |mut zoom| {
                for g in &gestures {
                    black_box(zoom.handle(*g));
                }
                black_box(zoom);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_clamp, bench_gestures);
criterion_main!(benches);
