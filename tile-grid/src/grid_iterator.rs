//
// Copyright (c) Jérôme Villafruela. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid iterators

use crate::coord::BoundingBox;
use crate::error::Result;
use crate::grid::{max_tile_number, tile_limits, validate_zoom, ExtentInt, Tile, MAX_ZOOM};

/// Level-by-level iterator over inclusive tile number limits
pub struct GridIterator {
    z: u8,
    x: u32,
    y: u32,
    level: usize,
    levels: Vec<(u8, ExtentInt)>,
    finished: bool,
}

impl GridIterator {
    /// Iterate over `(zoom, limits)` pairs in the given order
    pub fn new(levels: Vec<(u8, ExtentInt)>) -> GridIterator {
        let valid = levels
            .iter()
            .all(|(_, l)| l.minx <= l.maxx && l.miny <= l.maxy);
        let start = levels.first().map(|(z, l)| (*z, l.minx, l.miny));
        match start {
            Some((z, x, y)) if valid => GridIterator {
                z,
                x,
                y,
                level: 0,
                levels,
                finished: false,
            },
            _ => {
                // Return "empty" iterator for invalid parameters
                GridIterator {
                    z: 0,
                    x: 0,
                    y: 0,
                    level: 0,
                    levels: Vec::new(),
                    finished: true,
                }
            }
        }
    }

    /// All tiles of the zoom levels `minz..=maxz`, empty beyond `MAX_ZOOM`
    pub fn full_levels(minz: u8, maxz: u8) -> GridIterator {
        if maxz > MAX_ZOOM {
            return GridIterator::new(Vec::new());
        }
        let levels = (minz..=maxz)
            .map(|z| {
                let max = max_tile_number(z);
                (
                    z,
                    ExtentInt {
                        minx: 0,
                        miny: 0,
                        maxx: max,
                        maxy: max,
                    },
                )
            })
            .collect();
        GridIterator::new(levels)
    }

    /// Tiles covering a bounding box for each zoom level, in the given order
    pub fn covering(bbox: &BoundingBox, zooms: &[u8]) -> Result<GridIterator> {
        let levels = zooms
            .iter()
            .map(|&z| tile_limits(bbox, z).map(|limits| (z, limits)))
            .collect::<Result<Vec<_>>>()?;
        Ok(GridIterator::new(levels))
    }

    /// Yield tiles instead of cell indices
    pub fn tiles(self) -> impl Iterator<Item = Tile> {
        self.map(|(z, x, y)| Tile::from_grid(x, y, z))
    }

    fn remaining(&self) -> u64 {
        if self.finished {
            return 0;
        }
        let limit = &self.levels[self.level].1;
        let current_column = (limit.maxy - self.y + 1) as u64;
        let next_columns = (limit.maxx - self.x) as u64 * limit.height() as u64;
        let next_levels: u64 = self.levels[self.level + 1..]
            .iter()
            .map(|(_, l)| l.len())
            .sum();
        current_column + next_columns + next_levels
    }
}

impl Iterator for GridIterator {
    /// Current cell index `(z, x, y)`
    type Item = (u8, u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let current = (self.z, self.x, self.y);
        let limit = &self.levels[self.level].1;
        if self.y < limit.maxy {
            self.y += 1;
        } else if self.x < limit.maxx {
            self.x += 1;
            self.y = limit.miny;
        } else if self.level + 1 < self.levels.len() {
            self.level += 1;
            let (z, limit) = &self.levels[self.level];
            self.z = *z;
            self.x = limit.minx;
            self.y = limit.miny;
        } else {
            self.finished = true;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining() as usize;
        (remaining, Some(remaining))
    }
}

/// Tiles covering a bounding box at one zoom level, column by column
pub fn tiles_covering(bbox: &BoundingBox, zoom: u8) -> Result<Vec<Tile>> {
    tiles_covering_zooms(bbox, &[zoom])
}

/// Tiles covering a bounding box for each zoom level, concatenated in the given order.
///
/// Levels are independent, no tile is dropped when zoom levels repeat.
pub fn tiles_covering_zooms(bbox: &BoundingBox, zooms: &[u8]) -> Result<Vec<Tile>> {
    let tiles = GridIterator::covering(bbox, zooms)?
        .tiles()
        .collect::<Vec<_>>();
    debug!("{} tiles covering {:?} at zoom {:?}", tiles.len(), bbox, zooms);
    Ok(tiles)
}

/// Every tile of a zoom level
pub fn tiles_for_zoom(zoom: u8) -> Result<Vec<Tile>> {
    let zoom = validate_zoom(zoom)?;
    Ok(GridIterator::full_levels(zoom, zoom).tiles().collect())
}

#[test]
fn test_full_levels_iter() {
    let griditer = GridIterator::full_levels(0, 2);
    assert_eq!(griditer.size_hint(), (21, Some(21)));
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (0, 0, 0),
            (1, 0, 0),
            (1, 0, 1),
            (1, 1, 0),
            (1, 1, 1),
            (2, 0, 0),
            (2, 0, 1),
            (2, 0, 2),
            (2, 0, 3),
            (2, 1, 0),
            (2, 1, 1),
            (2, 1, 2),
            (2, 1, 3),
            (2, 2, 0),
            (2, 2, 1),
            (2, 2, 2),
            (2, 2, 3),
            (2, 3, 0),
            (2, 3, 1),
            (2, 3, 2),
            (2, 3, 3)
        ]
    );

    let cells = GridIterator::full_levels(0, 0).collect::<Vec<_>>();
    assert_eq!(cells, vec![(0, 0, 0)]);
}

#[test]
fn test_size_hint_while_iterating() {
    let mut griditer = GridIterator::full_levels(1, 2);
    assert_eq!(griditer.size_hint(), (20, Some(20)));
    griditer.next();
    griditer.next();
    griditer.next();
    assert_eq!(griditer.size_hint(), (17, Some(17)));
    assert_eq!(griditer.count(), 17);
}

#[test]
fn test_bad_params() {
    // no levels
    let griditer = GridIterator::new(Vec::new());
    assert_eq!(griditer.size_hint(), (0, Some(0)));
    assert_eq!(griditer.collect::<Vec<_>>(), vec![]);

    // minz > maxz
    let cells = GridIterator::full_levels(3, 2).collect::<Vec<_>>();
    assert_eq!(cells, vec![]);

    // zoom beyond MAX_ZOOM
    assert_eq!(GridIterator::full_levels(0, 20).count(), 0);
    assert_eq!(GridIterator::full_levels(32, 32).count(), 0);

    // min > max
    let griditer = GridIterator::new(vec![(
        1,
        ExtentInt {
            minx: 1,
            miny: 0,
            maxx: 0,
            maxy: 1,
        },
    )]);
    assert_eq!(griditer.collect::<Vec<_>>(), vec![]);
}

#[test]
fn test_unordered_levels() {
    let limit = ExtentInt {
        minx: 2,
        miny: 5,
        maxx: 3,
        maxy: 5,
    };
    let griditer = GridIterator::new(vec![(5, limit.clone()), (4, limit.clone()), (5, limit)]);
    let cells = griditer.collect::<Vec<_>>();
    assert_eq!(
        cells,
        vec![
            (5, 2, 5),
            (5, 3, 5),
            (4, 2, 5),
            (4, 3, 5),
            (5, 2, 5),
            (5, 3, 5)
        ]
    );
}
