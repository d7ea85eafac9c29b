use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use quince_chess::board::coords::coords_from_file_rank;
use quince_chess::board::piece::{Color, PieceKind, PieceRecord};
use quince_chess::board::register::PieceRegister;
use quince_chess::game_state::game_state::GameState;

fn lone_king_state() -> Arc<GameState> {
    let mut register = PieceRegister::default();
    register
        .add_piece_record(
            PieceRecord::new(Color::Light, PieceKind::King),
            coords_from_file_rank(4, 3),
        )
        .expect("empty board placement");
    GameState::from_register(register, Color::Light)
}

/// A chain of `depth` delta states layered over the starting snapshot, built
/// by repeatedly applying the first available move.
fn chain_of_depth(depth: usize) -> Arc<GameState> {
    let mut state = GameState::new_game();
    for _ in 0..depth {
        let moves = state.available_moves();
        let Some(&first) = moves.first() else {
            break;
        };
        state = state.with_move(first);
    }
    state
}

fn bench_available_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("available_moves");

    let cases: [(&str, Arc<GameState>); 2] = [
        ("starting_position", GameState::new_game()),
        ("lone_king", lone_king_state()),
    ];

    for (name, state) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &state, |b, state| {
            b.iter(|| black_box(state.available_moves()));
        });
    }

    group.finish();
}

fn bench_cell_on_delta_chains(c: &mut Criterion) {
    let mut group = c.benchmark_group("cell_on_delta_chains");

    for depth in [0usize, 8, 32, 128] {
        let state = chain_of_depth(depth);
        group.throughput(Throughput::Elements(64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &state, |b, state| {
            b.iter(|| {
                let mut occupied = 0usize;
                for index in 0..64u8 {
                    let coords = quince_chess::board::coords::coords_from_8x8(index);
                    if black_box(state.cell(coords)).is_some() {
                        occupied += 1;
                    }
                }
                occupied
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_available_moves, bench_cell_on_delta_chains);
criterion_main!(benches);
