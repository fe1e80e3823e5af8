use blast_core::{Board, Piece};
use blast_search::{PlacementSearch, SearchConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn pieces() -> Vec<Piece> {
    ["###\n#..\n#..", "##\n##", "####"]
        .iter()
        .map(|text| text.parse().expect("bench piece"))
        .collect()
}

fn half_full_board() -> Board {
    let mut board = Board::new();
    for y in 4..Board::SIZE {
        for x in 0..Board::SIZE - 1 {
            board.set(x, y, true);
        }
    }
    board
}

fn bench_solve(c: &mut Criterion) {
    let pieces = pieces();
    let boards = [("empty", Board::new()), ("half_full", half_full_board())];

    for (name, board) in boards {
        let sequential = PlacementSearch::new(SearchConfig::sequential());
        c.bench_function(&format!("solve_sequential_{}", name), |b| {
            b.iter(|| sequential.solve(black_box(&board), black_box(&pieces)))
        });

        let parallel = PlacementSearch::new(SearchConfig::parallel());
        c.bench_function(&format!("solve_parallel_{}", name), |b| {
            b.iter(|| parallel.solve(black_box(&board), black_box(&pieces)))
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
