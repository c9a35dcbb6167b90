//! The birth/survival rule and the Moore neighborhood shared by both boards.
//!
//! | Current | Live neighbors | Next  |
//! |---------|----------------|-------|
//! | alive   | 0-1            | dead (underpopulation) |
//! | alive   | 2-3            | alive (survival)       |
//! | alive   | 4-8            | dead (overpopulation)  |
//! | dead    | 3              | alive (birth)          |
//! | dead    | anything else  | dead                   |

/// `(dx, dy)` offsets of the 8 Moore neighbors, row by row starting top-left.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Compute a cell's next state from its current state and live-neighbor count.
pub const fn next_state(alive: bool, live_neighbors: usize) -> bool {
    matches!((alive, live_neighbors), (true, 2 | 3) | (false, 3))
}
