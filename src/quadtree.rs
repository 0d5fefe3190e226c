// Quadtree region partition and outline rendering
use bevy::prelude::*;
use thiserror::Error;

use crate::constants::*;

/// Error for the index-based child rect API. Internal callers go through
/// [`Quadrant`] directly, so this only fires for out-of-range indices
/// supplied by external callers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum QuadtreeError {
    #[error("invalid quadrant index {0}, expected 0..=3")]
    InvalidQuadrant(usize),
}

/// Fixed quadrant ordering: top-left, top-right, bottom-left, bottom-right.
/// World space is y-up (Bevy convention), so "top" is the +y half of the
/// parent rect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    #[allow(dead_code)]
    pub fn from_index(index: usize) -> Result<Quadrant, QuadtreeError> {
        match index {
            0 => Ok(Quadrant::TopLeft),
            1 => Ok(Quadrant::TopRight),
            2 => Ok(Quadrant::BottomLeft),
            3 => Ok(Quadrant::BottomRight),
            _ => Err(QuadtreeError::InvalidQuadrant(index)),
        }
    }
}

/// A rectangular region recursively split into four equal quadrants down to
/// a fixed depth.
///
/// Each node owns its children by value; the whole tree is materialized once
/// by [`Quadtree::subdivide`] and never mutated afterward.
#[derive(Debug)]
pub struct Quadtree {
    pub bounds: Rect,
    pub depth: u32,
    children: Option<Box<[Quadtree; 4]>>,
}

impl Quadtree {
    pub fn new(bounds: Rect, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            children: None,
        }
    }

    /// Rect of one child quadrant by index (0..=3, quadrant order).
    #[allow(dead_code)]
    pub fn child_rect(&self, index: usize) -> Result<Rect, QuadtreeError> {
        Ok(self.quadrant_rect(Quadrant::from_index(index)?))
    }

    fn quadrant_rect(&self, quadrant: Quadrant) -> Rect {
        let Rect { min, max } = self.bounds;
        let half = self.bounds.half_size();
        match quadrant {
            Quadrant::TopLeft => Rect::from_corners(
                Vec2::new(min.x, min.y + half.y),
                Vec2::new(min.x + half.x, max.y),
            ),
            Quadrant::TopRight => Rect::from_corners(min + half, max),
            Quadrant::BottomLeft => Rect::from_corners(min, min + half),
            Quadrant::BottomRight => Rect::from_corners(
                Vec2::new(min.x + half.x, min.y),
                Vec2::new(max.x, min.y + half.y),
            ),
        }
    }

    /// Eagerly materializes the entire subtree down to depth 0. No-op when
    /// this node already has children or sits at depth 0.
    pub fn subdivide(&mut self) {
        if self.children.is_some() || self.depth == 0 {
            return;
        }
        let children = Quadrant::ALL.map(|quadrant| {
            let mut child = Quadtree::new(self.quadrant_rect(quadrant), self.depth - 1);
            child.subdivide();
            child
        });
        self.children = Some(Box::new(children));
    }

    #[allow(dead_code)]
    pub fn children(&self) -> Option<&[Quadtree; 4]> {
        self.children.as_deref()
    }

    /// Total node count including self.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |children| children.iter().map(Quadtree::node_count).sum())
    }

    /// Depth-first outline pass: children first, own rect on top, so deeper
    /// outlines layer under shallower ones.
    fn draw(&self, gizmos: &mut Gizmos) {
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.draw(gizmos);
            }
        }
        gizmos.rect_2d(
            Isometry2d::from_translation(self.bounds.center()),
            self.bounds.size(),
            self.outline_color(),
        );
    }

    fn outline_color(&self) -> Color {
        if self.depth == 0 {
            QUADTREE_LEAF_COLOR
        } else if self.depth % 2 == 0 {
            QUADTREE_EVEN_COLOR
        } else {
            QUADTREE_ODD_COLOR
        }
    }
}

/// Resource owning the fully subdivided region tree for the session.
#[derive(Resource)]
pub struct WorldPartition {
    pub root: Quadtree,
}

/// System: draw the region tree outlines every frame.
pub fn draw_quadtree_system(partition: Res<WorldPartition>, mut gizmos: Gizmos) {
    partition.root.draw(&mut gizmos);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> Rect {
        Rect::new(x0, y0, x1, y1)
    }

    #[test]
    fn children_tile_the_parent() {
        let mut tree = Quadtree::new(rect(0.0, 0.0, 800.0, 600.0), 1);
        tree.subdivide();
        let children = tree.children().expect("depth 1 node should subdivide");

        for child in children {
            assert_eq!(child.bounds.size(), Vec2::new(400.0, 300.0));
            assert_eq!(child.depth, 0);
        }

        // Fixed quadrant order: top-left, top-right, bottom-left, bottom-right.
        assert_eq!(children[0].bounds, rect(0.0, 300.0, 400.0, 600.0));
        assert_eq!(children[1].bounds, rect(400.0, 300.0, 800.0, 600.0));
        assert_eq!(children[2].bounds, rect(0.0, 0.0, 400.0, 300.0));
        assert_eq!(children[3].bounds, rect(400.0, 0.0, 800.0, 300.0));

        // No gap: the union of the four children is exactly the parent.
        let union = children
            .iter()
            .map(|child| child.bounds)
            .reduce(|a, b| a.union(b))
            .unwrap();
        assert_eq!(union, tree.bounds);
    }

    #[test]
    fn child_rects_do_not_overlap() {
        let tree = Quadtree::new(rect(10.0, 20.0, 110.0, 220.0), 2);
        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    continue;
                }
                let a = tree.child_rect(i).unwrap();
                let b = tree.child_rect(j).unwrap();
                let overlap = a.intersect(b);
                assert!(
                    overlap.width() * overlap.height() == 0.0,
                    "quadrants {i} and {j} overlap: {overlap:?}"
                );
            }
        }
    }

    #[test]
    fn subdivide_is_idempotent() {
        let mut tree = Quadtree::new(rect(0.0, 0.0, 256.0, 256.0), 2);
        tree.subdivide();
        let count = tree.node_count();
        tree.subdivide();
        assert_eq!(tree.node_count(), count);
    }

    #[test]
    fn subdivide_stops_at_depth_zero() {
        let mut tree = Quadtree::new(rect(0.0, 0.0, 64.0, 64.0), 0);
        tree.subdivide();
        assert!(tree.children().is_none());
    }

    #[test]
    fn full_subdivision_node_count() {
        // (4^(d+1) - 1) / 3 nodes for initial depth d.
        let mut tree = Quadtree::new(rect(0.0, 0.0, 512.0, 512.0), 3);
        tree.subdivide();
        assert_eq!(tree.node_count(), 85);

        let mut shallow = Quadtree::new(rect(0.0, 0.0, 512.0, 512.0), 1);
        shallow.subdivide();
        assert_eq!(shallow.node_count(), 5);
    }

    #[test]
    fn depth_decreases_per_level() {
        let mut tree = Quadtree::new(rect(0.0, 0.0, 400.0, 400.0), 3);
        tree.subdivide();
        let mut node = &tree;
        let mut expected = 3;
        while let Some(children) = node.children() {
            expected -= 1;
            for child in children {
                assert_eq!(child.depth, expected);
            }
            node = &children[0];
        }
        assert_eq!(expected, 0);
    }

    #[test]
    fn child_rect_rejects_out_of_range_index() {
        let tree = Quadtree::new(rect(0.0, 0.0, 100.0, 100.0), 1);
        assert!(tree.child_rect(3).is_ok());
        assert_eq!(tree.child_rect(4), Err(QuadtreeError::InvalidQuadrant(4)));
        assert_eq!(
            tree.child_rect(usize::MAX),
            Err(QuadtreeError::InvalidQuadrant(usize::MAX))
        );
    }
}
