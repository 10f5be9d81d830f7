use std::time::Duration;

use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};

use common::game::{Board, BotInput, Difficulty, Mark, SessionRng, calculate_move};

fn bot_input(board: Board, bot_mark: Mark) -> BotInput {
    let opponent_mark = bot_mark.opponent().unwrap();
    BotInput {
        board,
        bot_mark,
        opponent_mark,
    }
}

fn bench_minimax_single_move_empty_board() {
    let mut rng = SessionRng::new(0);
    calculate_move(Difficulty::Hard, bot_input(Board::new(), Mark::X), &mut rng);
}

fn bench_minimax_single_move_mid_game() {
    let mut board = Board::new();
    for (row, col, mark) in [
        (1, 1, Mark::X),
        (0, 0, Mark::O),
        (0, 2, Mark::X),
        (2, 0, Mark::O),
    ] {
        board.apply_move(row, col, mark).unwrap();
    }

    let mut rng = SessionRng::new(0);
    calculate_move(Difficulty::Hard, bot_input(board, Mark::X), &mut rng);
}

fn bench_minimax_full_game() {
    let mut board = Board::new();
    let mut mark = Mark::X;
    let mut rng = SessionRng::new(0);

    loop {
        let Some(pos) = calculate_move(Difficulty::Hard, bot_input(board.clone(), mark), &mut rng)
        else {
            break;
        };
        board.apply_move(pos.row, pos.col, mark).unwrap();
        if board.has_winner(mark) || board.is_full() {
            break;
        }
        mark = mark.opponent().unwrap();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_minimax_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_minimax_single_move_mid_game)
    });

    group.bench_function("full_game_self_play", |b| b.iter(bench_minimax_full_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
