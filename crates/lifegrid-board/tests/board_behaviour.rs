//! Behaviour tests shared by both board strategies: seeding, rule
//! correctness on known patterns, bounds handling, and render cadence.

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lifegrid_board::{
    Board, BoardError, BoardState, DenseBoard, DenseSeed, NoOpRender, RenderError, SPARSE_SEED,
    SparseBoard, render_fn,
};
use lifegrid_types::{BoardKind, BoardSnapshot, Coord};

fn dense(width: u32, height: u32, live: &[(i32, i32)]) -> DenseBoard {
    let mut board = DenseBoard::new(width, height, DenseSeed::Empty).unwrap();
    for (x, y) in live {
        board.set_cell_by_cardinal(*x, *y, true).unwrap();
    }
    board
}

fn sparse(live: &[(i32, i32)]) -> SparseBoard {
    SparseBoard::from_cells(live.iter().copied().map(Coord::from))
}

fn live_set(board: &dyn Board) -> Vec<Coord> {
    board.snapshot().live_coords()
}

fn counting_callback(counter: &Arc<AtomicUsize>) -> impl lifegrid_board::RenderCallback + use<> {
    let counter = Arc::clone(counter);
    render_fn(move |_state: &BoardState<'_>| {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    })
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

#[test]
fn sparse_seed_reports_exactly_four_cells() {
    let board = SparseBoard::new();
    assert_eq!(board.live_count(), 4);
    assert_eq!(live_set(&board).len(), 4);
    for c in SPARSE_SEED {
        assert!(board.is_alive(c.x, c.y));
    }
    for y in -2..8 {
        for x in -2..8 {
            let seeded = SPARSE_SEED.contains(&Coord::new(x, y));
            assert_eq!(board.get_cell(x, y), seeded, "cell ({x}, {y})");
        }
    }
}

#[test]
fn dense_all_alive_seed_fills_the_grid() {
    let board = DenseBoard::new(7, 4, DenseSeed::AllAlive).unwrap();
    assert_eq!(board.live_count(), 28);
    for y in 0..4 {
        for x in 0..7 {
            assert_eq!(board.get_cell(x, y), Some(true));
        }
    }
    assert_eq!(board.get_cell(7, 0), None);
    assert_eq!(board.get_cell(0, -1), None);
}

// ---------------------------------------------------------------------------
// Known patterns
// ---------------------------------------------------------------------------

#[test]
fn dense_blinker_has_period_two() {
    let horizontal = [(1, 2), (2, 2), (3, 2)];
    let vertical = [(2, 1), (2, 2), (2, 3)];
    let mut board = dense(5, 5, &horizontal);

    board.tick().unwrap();
    assert_eq!(board.live_count(), 3);
    for (x, y) in vertical {
        assert_eq!(board.get_cell(x, y), Some(true), "vertical ({x}, {y})");
    }

    board.tick().unwrap();
    assert_eq!(board.live_count(), 3);
    for (x, y) in horizontal {
        assert_eq!(board.get_cell(x, y), Some(true), "horizontal ({x}, {y})");
    }
    assert_eq!(board.generation(), 2);
}

#[test]
fn sparse_blinker_has_period_two() {
    let mut board = sparse(&[(-1, 0), (0, 0), (1, 0)]);
    let start = live_set(&board);
    board.tick().unwrap();
    assert_eq!(
        live_set(&board),
        vec![Coord::new(0, -1), Coord::new(0, 0), Coord::new(0, 1)]
    );
    board.tick().unwrap();
    assert_eq!(live_set(&board), start);
}

#[test]
fn block_is_a_still_life_on_both_boards() {
    let block = [(1, 1), (2, 1), (1, 2), (2, 2)];
    let mut boards: Vec<Box<dyn Board>> = vec![
        Box::new(sparse(&block)) as Box<dyn Board>,
        Box::new(dense(4, 4, &block)),
    ];
    for board in &mut boards {
        let before = live_set(board.as_ref());
        for _ in 0..10 {
            board.tick().unwrap();
        }
        assert_eq!(live_set(board.as_ref()), before, "{} block moved", board.kind());
        assert_eq!(board.generation(), 10);
    }
}

#[test]
fn dense_edge_is_hard_not_toroidal() {
    // On a torus the blinker would keep three cells; at a hard edge the
    // cell that would be born above row 0 does not exist.
    let mut board = dense(5, 5, &[(1, 0), (2, 0), (3, 0)]);
    board.tick().unwrap();
    assert_eq!(live_set(&board), vec![Coord::new(2, 0), Coord::new(2, 1)]);
    assert_eq!(board.get_cell(2, 4), Some(false));
    board.tick().unwrap();
    assert_eq!(board.live_count(), 0);
}

#[test]
fn sparse_board_grows_far_from_origin() {
    let mut board = sparse(&[(999, 999), (1000, 999), (1001, 999)]);
    assert!(!board.get_cell(1000, 1000));
    board.tick().unwrap();
    assert!(board.get_cell(1000, 1000));
    assert!(board.get_cell(1000, 998));

    let mut negative = sparse(&[(-1001, -1000), (-1000, -1000), (-999, -1000)]);
    negative.tick().unwrap();
    assert!(negative.get_cell(-1000, -1001));
    assert!(negative.get_cell(-1000, -999));
    assert_eq!(negative.live_count(), 3);
}

#[test]
fn boards_agree_away_from_the_edge() {
    // R-pentomino placed in the middle of a large grid.
    let seed = [(21, 20), (22, 20), (20, 21), (21, 21), (21, 22)];
    let mut s = sparse(&seed);
    let mut d = dense(48, 48, &seed);
    for _ in 0..8 {
        s.tick().unwrap();
        d.tick().unwrap();
        assert_eq!(live_set(&s), live_set(&d), "generation {}", s.generation());
    }
}

// ---------------------------------------------------------------------------
// Dense indexing and bounds
// ---------------------------------------------------------------------------

#[test]
fn dense_index_round_trip() {
    let board = DenseBoard::new(6, 4, DenseSeed::Empty).unwrap();
    for y in 0..4 {
        for x in 0..6 {
            let index = board.cardinal_to_index(x, y).unwrap();
            assert_eq!(board.index_to_cardinal(index), Some(Coord::new(x, y)));
        }
    }
    for index in 0..24 {
        let c = board.index_to_cardinal(index).unwrap();
        assert_eq!(board.cardinal_to_index(c.x, c.y), Some(index));
    }
    assert_eq!(board.index_to_cardinal(24), None);
}

#[test]
fn dense_out_of_bounds_writes_are_no_ops() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut board = dense(6, 4, &[(2, 2)]).with_render_callback(counting_callback(&counter));
    let before = board.snapshot();

    for (x, y) in [(-1, 0), (0, -1), (6, 0), (0, 4), (i32::MAX, i32::MIN)] {
        assert!(board.set_cell_by_cardinal(x, y, true).is_ok());
    }
    assert!(board.set_cell(24, true).is_ok());
    assert!(board.set_cell(usize::MAX, false).is_ok());

    assert_eq!(board.snapshot(), before);
    assert_eq!(counter.load(Ordering::SeqCst), 0);
}

#[test]
fn dense_checked_write_reports_out_of_bounds() {
    let mut board = dense(3, 3, &[]);
    let err = board.try_set_cell_by_cardinal(3, 1, true);
    assert!(matches!(
        err,
        Err(BoardError::OutOfBounds { coord, width: 3, height: 3 }) if coord == Coord::new(3, 1)
    ));
    assert!(board.try_set_cell_by_cardinal(2, 1, true).is_ok());
    assert_eq!(board.get_cell(2, 1), Some(true));
}

// ---------------------------------------------------------------------------
// Render cadence and views
// ---------------------------------------------------------------------------

#[test]
fn sparse_render_fires_once_per_write_and_tick() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut board = SparseBoard::new().with_render_callback(counting_callback(&counter));
    assert_eq!(counter.load(Ordering::SeqCst), 0, "construction must not render");

    board.set_cell_by_cardinal(10, 10, true).unwrap();
    board.set_cell_by_cardinal(10, 10, true).unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 2);

    for _ in 0..3 {
        board.tick().unwrap();
    }
    assert_eq!(counter.load(Ordering::SeqCst), 5);
}

#[test]
fn dense_render_fires_once_per_write_and_tick() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut board = DenseBoard::new(4, 4, DenseSeed::AllAlive)
        .unwrap()
        .with_render_callback(counting_callback(&counter));
    assert_eq!(counter.load(Ordering::SeqCst), 0);

    board.set_cell_by_cardinal(1, 1, false).unwrap();
    board.set_cell(0, false).unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 2);

    board.tick().unwrap();
    assert_eq!(counter.load(Ordering::SeqCst), 3);
}

#[test]
fn render_error_propagates_after_state_changes() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let mut board = SparseBoard::new().with_render_callback(render_fn(
        move |_state: &BoardState<'_>| {
            if seen.fetch_add(1, Ordering::SeqCst) == 1 {
                return Err(RenderError::new("canvas lost"));
            }
            Ok(())
        },
    ));

    assert!(board.tick().is_ok());
    let err = board.tick();
    assert!(
        matches!(&err, Err(BoardError::Render { source }) if source.message() == "canvas lost"),
        "expected render error, got {err:?}"
    );
    assert_eq!(board.generation(), 2);
    assert!(board.tick().is_ok());
}

#[test]
fn dense_render_error_propagates_from_setter() {
    let mut board = dense(3, 3, &[]).with_render_callback(render_fn(|_state: &BoardState<'_>| {
        Err(RenderError::new("refused"))
    }));
    assert!(matches!(
        board.set_cell_by_cardinal(1, 1, true),
        Err(BoardError::Render { .. })
    ));
    assert_eq!(board.get_cell(1, 1), Some(true));
}

#[test]
fn views_expose_generation_and_changes() {
    let frames: Arc<Mutex<Vec<(BoardSnapshot, Vec<Coord>)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&frames);
    let mut board = sparse(&[(0, 0), (1, 0), (2, 0)]).with_render_callback(render_fn(
        move |state: &BoardState<'_>| {
            assert_eq!(state.kind(), BoardKind::Sparse);
            if let BoardState::Sparse(view) = state {
                for (key, alive) in view.cells() {
                    assert!(alive);
                    let c = view.index_to_cardinal(key);
                    assert!(view.get_cell(c.x, c.y));
                }
                let keys: Vec<_> = view.live_cells().collect();
                assert_eq!(keys.len(), view.live_count());
                assert!(keys.windows(2).all(|w| w.first() < w.get(1)));
            }
            sink.lock()
                .map_err(|_| RenderError::new("poisoned"))?
                .push((state.to_snapshot(), state.changed_coords()));
            Ok(())
        },
    ));

    board.tick().unwrap();
    board.set_cell_by_cardinal(5, 5, true).unwrap();

    let frames = frames.lock().unwrap();
    assert_eq!(frames.len(), 2);

    let (first, first_changed) = frames.first().unwrap();
    assert_eq!(first.generation, 1);
    assert_eq!(first.live_count, 3);
    assert_eq!(
        first_changed,
        &vec![Coord::new(1, -1), Coord::new(0, 0), Coord::new(2, 0), Coord::new(1, 1)]
    );

    let (second, second_changed) = frames.get(1).unwrap();
    assert_eq!(second.generation, 1);
    assert_eq!(second.live_count, 4);
    assert_eq!(second_changed, &vec![Coord::new(5, 5)]);
}

#[test]
fn dense_view_reports_dimensions_and_cells() {
    let mut board = dense(3, 2, &[(0, 0)]);
    let got: Arc<Mutex<Option<(u32, u32, Vec<bool>, Vec<usize>)>>> = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&got);
    board.set_render_callback(Some(Box::new(render_fn(move |state: &BoardState<'_>| {
        if let BoardState::Dense(view) = state {
            assert_eq!(view.get_cell(3, 0), None);
            *sink.lock().map_err(|_| RenderError::new("poisoned"))? = Some((
                view.width(),
                view.height(),
                view.cells().to_vec(),
                view.changed_indices().to_vec(),
            ));
        }
        Ok(())
    }))));

    board.set_cell_by_cardinal(2, 1, true).unwrap();
    let got = got.lock().unwrap().clone().unwrap();
    assert_eq!(got.0, 3);
    assert_eq!(got.1, 2);
    assert_eq!(got.2, vec![true, false, false, false, false, true]);
    assert_eq!(got.3, vec![5]);
}

#[test]
fn fingerprint_ignores_generation() {
    let mut a = sparse(&[(0, 0), (1, 0), (2, 0)]);
    let b = sparse(&[(0, 0), (1, 0), (2, 0)]);
    a.tick().unwrap();
    assert_ne!(a.fingerprint(), b.fingerprint());
    a.tick().unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn render_callback_can_be_swapped_and_removed() {
    let mut boards: Vec<Box<dyn Board>> = vec![
        Box::new(SparseBoard::new()) as Box<dyn Board>,
        Box::new(dense(5, 5, &[(1, 2), (2, 2), (3, 2)])),
    ];
    for board in &mut boards {
        board.set_render_callback(Some(Box::new(render_fn(|_state: &BoardState<'_>| {
            Err(RenderError::new("detached display"))
        }))));
        assert!(board.tick().is_err());

        board.set_render_callback(Some(Box::new(NoOpRender)));
        assert!(board.tick().is_ok());
        assert!(board.set_cell_by_cardinal(0, 0, true).is_ok());

        board.set_render_callback(None);
        assert!(board.tick().is_ok());
        assert_eq!(board.generation(), 3);
    }
}
