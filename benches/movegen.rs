use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hopper::game::{colour::Colour, piece::Piece, position::Position, square::Square};

fn bench_moves(c: &mut Criterion) {
    let initial = Position::initial();
    c.bench_function("moves_initial", |b| b.iter(|| black_box(&initial).moves()));

    // Mid-game skirmish with jumps available for the side to move.
    let men = [
        ((2, 5), Colour::Red),
        ((4, 5), Colour::Red),
        ((6, 5), Colour::Red),
        ((3, 4), Colour::Red),
        ((5, 4), Colour::Red),
        ((2, 3), Colour::White),
        ((4, 3), Colour::White),
        ((6, 3), Colour::White),
        ((3, 2), Colour::White),
        ((5, 2), Colour::White),
    ];
    let skirmish = Position::from_pieces(
        Colour::Red,
        men.iter().filter_map(|&((x, y), colour)| {
            Square::at(x, y).map(|sq| (sq, Piece::new(colour)))
        }),
    );
    c.bench_function("moves_skirmish", |b| b.iter(|| black_box(&skirmish).moves()));
}

criterion_group!(benches, bench_moves);
criterion_main!(benches);
