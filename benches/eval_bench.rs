use criterion::{criterion_group, criterion_main, Criterion, black_box};
use loabot::board::{Board, GameBoard, Side};

fn bench_eval(c: &mut Criterion) {
    let b = Board::startpos();
    c.bench_function("evaluate_startpos", |ben| {
        ben.iter(|| {
            let v = loabot::search::eval::evaluate(black_box(&b), Side::White);
            black_box(v)
        })
    });
    c.bench_function("legal_moves_startpos", |ben| {
        ben.iter(|| black_box(black_box(&b).legal_moves().len()))
    });
}

criterion_group!(benches, bench_eval);
criterion_main!(benches);
