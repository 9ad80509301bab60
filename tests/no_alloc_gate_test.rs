use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_blockfall::core::{GameSnapshot, GameState};
use tui_blockfall::term::{FrameBuffer, GameView, Viewport};
use tui_blockfall::types::{GameAction, GameStatus};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Both gates live in one test: the counter is global and tests run in parallel.
#[test]
fn hot_paths_do_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let mut gs = GameState::new(1);
    gs.start();
    let view = GameView::default();
    let viewport = Viewport::new(80, 30);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    // Warm-up.
    let _ = gs.tick(16);
    let _ = gs.apply_action(GameAction::MoveLeft);
    gs.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let allocs = with_alloc_counting(|| {
        for _ in 0..200 {
            let _ = gs.tick(16);
        }

        for _ in 0..50 {
            let _ = gs.apply_action(GameAction::MoveLeft);
            let _ = gs.apply_action(GameAction::MoveRight);
            let _ = gs.apply_action(GameAction::Rotate);
            let _ = gs.apply_action(GameAction::SoftDrop);
        }

        // Hard drop drives lock, line-clear and spawn paths.
        for _ in 0..60 {
            let _ = gs.apply_action(GameAction::HardDrop);
            let _ = gs.take_last_event();
            if gs.status() == GameStatus::GameOver {
                let _ = gs.apply_action(GameAction::Start);
            }
        }

        for _ in 0..20 {
            gs.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
