//! Benchmark for relayout, animator ticking and input routing.
//!
//! TARGET: a full relayout of 1,000 widgets well under one frame (16 ms)
//!
//! Run with: cargo bench --package ember_ui --bench ui_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ember_ui::animation::{AnimationKind, Animator, Transition, TransitionGroup, Tween};
use ember_ui::{Constraint, ConstraintSet, InputEvent, Widget, WidgetKind, WidgetTree};

const PANELS: usize = 100;
const BUTTONS_PER_PANEL: usize = 9;

fn hover_animator() -> Animator {
    let grow = TransitionGroup::new()
        .with(Transition::new(
            Tween::Scale {
                from: [1.0, 1.0],
                to: [1.1, 1.1],
            },
            0.15,
        ))
        .expect("single transition");
    Animator::new().with(AnimationKind::MouseEnter, grow)
}

fn build_tree() -> WidgetTree {
    let mut tree = WidgetTree::default();
    let root = tree.add_layer("hud");
    for p in 0..PANELS {
        let ratio = (p % 10) as f32 / 10.0;
        let panel = tree.insert(
            Widget::new("panel", WidgetKind::Container).with_constraints(
                ConstraintSet::new()
                    .with(Constraint::fill_horizontal(0.1))
                    .with(Constraint::fill_vertical(0.1))
                    .with(Constraint::relative_horizontal(ratio))
                    .with(Constraint::relative_vertical((p / 10) as f32 / 10.0)),
            ),
        );
        tree.attach(root, panel).expect("fresh panel");
        for b in 0..BUTTONS_PER_PANEL {
            let button = tree.insert(
                Widget::new("button", WidgetKind::Button)
                    .with_animator(hover_animator())
                    .with_constraints(
                        ConstraintSet::new()
                            .with(Constraint::fill_horizontal(0.3))
                            .with(Constraint::fill_vertical(0.3))
                            .with(Constraint::relative_horizontal((b % 3) as f32 / 3.0))
                            .with(Constraint::relative_vertical((b / 3) as f32 / 3.0))
                            .with_post(Constraint::padding(0.01, 0.01, 0.01, 0.01)),
                    ),
            );
            tree.attach(panel, button).expect("fresh button");
        }
    }
    tree
}

fn benchmark_relayout(c: &mut Criterion) {
    let mut tree = build_tree();
    let mut group = c.benchmark_group("relayout");
    group.throughput(Throughput::Elements((PANELS * (BUTTONS_PER_PANEL + 1)) as u64));
    group.bench_function("resize_1000_widgets", |b| {
        let mut width = 1280.0;
        b.iter(|| {
            width = if width > 1900.0 { 1280.0 } else { width + 1.0 };
            tree.resize(black_box(width), black_box(720.0));
        });
    });
    group.finish();
}

fn benchmark_update(c: &mut Criterion) {
    let mut tree = build_tree();
    c.bench_function("update_1000_widgets", |b| {
        b.iter(|| tree.update(black_box(1.0 / 60.0)));
    });
}

fn benchmark_hover_sweep(c: &mut Criterion) {
    let mut tree = build_tree();
    c.bench_function("mouse_move_routing", |b| {
        let mut x = -1.0_f32;
        b.iter(|| {
            x = if x > 1.0 { -1.0 } else { x + 0.01 };
            black_box(tree.handle_input(InputEvent::MouseMove { x, y: 0.0 }));
            tree.update(1.0 / 60.0);
        });
    });
}

criterion_group!(benches, benchmark_relayout, benchmark_update, benchmark_hover_sweep);
criterion_main!(benches);
