//! Cell coordinates and their packed 64-bit key encoding.
//!
//! A [`Coord`] is a plain `(x, y)` pair on the `i32` plane. A [`CoordKey`]
//! packs the same pair into a single `u64` so sparse boards can index live
//! cells without allocating a string per cell.
//!
//! # Encoding
//!
//! Each component is biased by flipping its sign bit (offset binary), then
//! `y` is stored in the high 32 bits and `x` in the low 32 bits. The
//! encoding is a bijection over all `i32` pairs, and unsigned key order
//! matches row-major `(y, x)` order, so iterating a `BTreeSet<CoordKey>`
//! visits cells top-to-bottom, left-to-right.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An integer cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Coord {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downward.
    pub y: i32,
}

impl Coord {
    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the coordinate shifted by `(dx, dy)`.
    ///
    /// Arithmetic wraps at the `i32` extremes.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Pack this coordinate into a [`CoordKey`].
    pub const fn key(self) -> CoordKey {
        CoordKey::from_cardinal(self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Coord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A coordinate packed into 64 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoordKey(u64);

impl CoordKey {
    /// Encode `(x, y)` into a key.
    pub const fn from_cardinal(x: i32, y: i32) -> Self {
        let [y0, y1, y2, y3] = (y ^ i32::MIN).to_be_bytes();
        let [x0, x1, x2, x3] = (x ^ i32::MIN).to_be_bytes();
        Self(u64::from_be_bytes([y0, y1, y2, y3, x0, x1, x2, x3]))
    }

    /// Decode the key back into its coordinate.
    pub const fn to_cardinal(self) -> Coord {
        let [y0, y1, y2, y3, x0, x1, x2, x3] = self.0.to_be_bytes();
        Coord {
            x: i32::from_be_bytes([x0, x1, x2, x3]) ^ i32::MIN,
            y: i32::from_be_bytes([y0, y1, y2, y3]) ^ i32::MIN,
        }
    }

    /// Return the raw packed value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Rebuild a key from a raw packed value.
    ///
    /// Every `u64` is a valid key.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<Coord> for CoordKey {
    fn from(coord: Coord) -> Self {
        coord.key()
    }
}

impl From<CoordKey> for Coord {
    fn from(key: CoordKey) -> Self {
        key.to_cardinal()
    }
}

impl core::fmt::Display for CoordKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_cardinal())
    }
}

/// Map `(x, y)` to its row-major index in a `width x height` grid.
///
/// Returns `None` when the coordinate lies outside the grid.
pub fn row_major_index(width: u32, height: u32, x: i32, y: i32) -> Option<usize> {
    let col = u32::try_from(x).ok().filter(|c| *c < width)?;
    let row = u32::try_from(y).ok().filter(|r| *r < height)?;
    usize::try_from(row)
        .ok()?
        .checked_mul(usize::try_from(width).ok()?)?
        .checked_add(usize::try_from(col).ok()?)
}

/// Map a row-major index back to its coordinate in a `width x height` grid.
///
/// Returns `None` when `index >= width * height`.
pub fn row_major_coord(width: u32, height: u32, index: usize) -> Option<Coord> {
    let w = usize::try_from(width).ok()?;
    let total = w.checked_mul(usize::try_from(height).ok()?)?;
    if index >= total {
        return None;
    }
    let row = index.checked_div(w)?;
    let col = index.checked_rem(w)?;
    Some(Coord::new(i32::try_from(col).ok()?, i32::try_from(row).ok()?))
}
