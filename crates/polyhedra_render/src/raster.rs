//! Depth-buffered ASCII rasterizer
//!
//! Lines are drawn into a supersampled canvas that stores a depth and the
//! kind of primitive for every sample. [`DepthCanvas::resolve`] then reduces
//! each `s × s` block to one character by taking the block's nearest sample
//! and mapping its depth through a [`GlyphRamp`].
//!
//! Larger depth means nearer. A sample is only replaced by a strictly
//! greater depth, and the empty sentinel is 0.

use polyhedra_core::Shape;

use crate::projection::ProjectedVertex;

/// Depth of a sample nothing has been drawn into
pub const EMPTY_DEPTH: f32 = 0.0;

/// Default ramp, sparse to solid
pub const DEFAULT_RAMP: &str = ".:-=+*x#%@";

/// What won a canvas sample
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sample {
    #[default]
    Empty,
    Edge,
    Vertex,
}

/// Maps depth in [0, 1] to a glyph
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Vec<char>,
}

impl GlyphRamp {
    /// Build a ramp from its glyphs, sparse first. Returns `None` when empty.
    pub fn new(glyphs: &str) -> Option<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            None
        } else {
            Some(Self { glyphs })
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// `floor(depth * (len - 1))`, clamped into the ramp
    pub fn index(&self, depth: f32) -> usize {
        let last = self.glyphs.len() - 1;
        let scaled = (depth * last as f32).floor();
        if scaled <= 0.0 {
            0
        } else {
            (scaled as usize).min(last)
        }
    }

    #[inline]
    pub fn glyph(&self, depth: f32) -> char {
        self.glyphs[self.index(depth)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_RAMP.chars().collect(),
        }
    }
}

/// A canvas boundary a clipped segment crosses
#[derive(Clone, Copy)]
enum Boundary {
    X(f64),
    Y(f64),
}

fn is_finite(v: &ProjectedVertex) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.depth.is_finite()
}

/// A grid of output characters, row-major
#[derive(Clone, Debug, PartialEq)]
pub struct CharGrid {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl CharGrid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![' '; cols * rows],
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        if col < self.cols && row < self.rows {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// One row of characters
    pub fn row(&self, row: usize) -> &[char] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate the rows top to bottom
    pub fn lines(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    fn set(&mut self, col: usize, row: usize, c: char) {
        self.cells[row * self.cols + col] = c;
    }
}

/// Supersampled depth and value buffers
///
/// Allocated once for a display size and cleared in place every frame.
#[derive(Clone, Debug)]
pub struct DepthCanvas {
    cols: usize,
    rows: usize,
    supersample: usize,
    width: usize,
    height: usize,
    depth: Vec<f32>,
    value: Vec<Sample>,
}

impl DepthCanvas {
    /// A canvas for a `cols × rows` character grid at `supersample` samples
    /// per cell edge
    pub fn new(cols: usize, rows: usize, supersample: usize) -> Self {
        let supersample = supersample.max(1);
        let width = cols * supersample;
        let height = rows * supersample;
        Self {
            cols,
            rows,
            supersample,
            width,
            height,
            depth: vec![EMPTY_DEPTH; width * height],
            value: vec![Sample::Empty; width * height],
        }
    }

    /// Width in samples
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in samples
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn supersample(&self) -> usize {
        self.supersample
    }

    /// Reset every sample to the empty sentinel
    pub fn clear(&mut self) {
        self.depth.fill(EMPTY_DEPTH);
        self.value.fill(Sample::Empty);
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        (x < self.width && y < self.height).then(|| self.depth[y * self.width + x])
    }

    pub fn sample_at(&self, x: usize, y: usize) -> Option<Sample> {
        (x < self.width && y < self.height).then(|| self.value[y * self.width + x])
    }

    /// Write one sample if it is inside the canvas and nearer than what is
    /// stored. Returns whether it was written.
    pub fn plot(&mut self, x: i32, y: i32, depth: f32, sample: Sample) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return false;
        }
        let i = y * self.width + x;
        if depth > self.depth[i] {
            self.depth[i] = depth;
            self.value[i] = sample;
            true
        } else {
            false
        }
    }

    /// Draw a vertex marker at a projected vertex
    ///
    /// Markers are plotted before edges so an edge ending at the same sample
    /// with the same depth does not cover them.
    pub fn plot_vertex(&mut self, v: &ProjectedVertex) {
        if !is_finite(v) {
            return;
        }
        self.plot(v.x.round() as i32, v.y.round() as i32, v.depth, Sample::Vertex);
    }

    /// Clip a segment to the sample area (Liang-Barsky)
    ///
    /// Clipped ends take the depth interpolated at the cut. Returns `None`
    /// when the segment misses the canvas or has a non-finite end.
    fn clip(&self, a: &ProjectedVertex, b: &ProjectedVertex) -> Option<(ProjectedVertex, ProjectedVertex)> {
        if !is_finite(a) || !is_finite(b) {
            return None;
        }

        // f64 so that a difference of two large f32 ends cannot overflow
        let (ax, ay) = (a.x as f64, a.y as f64);
        let (min_x, min_y) = (-0.5f64, -0.5f64);
        let max_x = self.width as f64 - 0.5;
        let max_y = self.height as f64 - 0.5;
        let dx = b.x as f64 - ax;
        let dy = b.y as f64 - ay;

        let boundaries = [
            (-dx, ax - min_x, Boundary::X(min_x)),
            (dx, max_x - ax, Boundary::X(max_x)),
            (-dy, ay - min_y, Boundary::Y(min_y)),
            (dy, max_y - ay, Boundary::Y(max_y)),
        ];
        let (mut t0, mut enter) = (0.0f64, None);
        let (mut t1, mut exit) = (1.0f64, None);
        for (p, q, edge) in boundaries {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return None;
                    }
                    if r > t0 {
                        t0 = r;
                        enter = Some(edge);
                    }
                } else {
                    if r < t0 {
                        return None;
                    }
                    if r < t1 {
                        t1 = r;
                        exit = Some(edge);
                    }
                }
            }
        }

        // The crossed edge is placed exactly; the other axis is clamped
        // because `a + d * t` loses precision for very distant ends
        let at = |t: f64, edge: Boundary| {
            let (mut x, mut y) = ((ax + dx * t).clamp(min_x, max_x), (ay + dy * t).clamp(min_y, max_y));
            match edge {
                Boundary::X(bound) => x = bound,
                Boundary::Y(bound) => y = bound,
            }
            ProjectedVertex {
                x: x as f32,
                y: y as f32,
                depth: (a.depth as f64 + (b.depth as f64 - a.depth as f64) * t) as f32,
            }
        };
        let start = enter.map_or(*a, |edge| at(t0, edge));
        let end = exit.map_or(*b, |edge| at(t1, edge));
        Some((start, end))
    }

    /// Draw a depth-interpolated line between two projected vertices
    ///
    /// The segment is clipped to the canvas first, so the walk never leaves
    /// the sample area by more than a rounding step.
    pub fn draw_line(&mut self, a: &ProjectedVertex, b: &ProjectedVertex) {
        let Some((a, b)) = self.clip(a, b) else {
            return;
        };
        let (a, b) = (&a, &b);
        let (mut x, mut y) = (a.x.round() as i32, a.y.round() as i32);
        let (x1, y1) = (b.x.round() as i32, b.y.round() as i32);

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let steps = dx.max(-dy);
        let mut step = 0;
        loop {
            let depth = if steps == 0 {
                a.depth
            } else {
                a.depth + (b.depth - a.depth) * step as f32 / steps as f32
            };
            self.plot(x, y, depth, Sample::Edge);

            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            step += 1;
        }
    }

    /// Clear the canvas and draw a whole projected shape
    ///
    /// `projected` must hold one entry per shape vertex.
    pub fn draw_wireframe(&mut self, shape: &Shape, projected: &[ProjectedVertex], mark_vertices: bool) {
        self.clear();
        if mark_vertices {
            for v in projected {
                self.plot_vertex(v);
            }
        }
        for edge in shape.edges() {
            if let (Some(a), Some(b)) = (projected.get(edge.start), projected.get(edge.end)) {
                self.draw_line(a, b);
            }
        }
    }

    /// Downsample into `grid`
    ///
    /// Each cell shows the glyph for the largest depth in its block, or the
    /// marker glyph when that sample is a vertex and `vertex_glyph` is set.
    pub fn resolve(&self, grid: &mut CharGrid, ramp: &GlyphRamp, vertex_glyph: Option<char>) {
        if grid.cols != self.cols || grid.rows != self.rows {
            *grid = CharGrid::new(self.cols, self.rows);
        }

        let s = self.supersample;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let mut best = EMPTY_DEPTH;
                let mut best_sample = Sample::Empty;
                for sy in row * s..(row + 1) * s {
                    let line = sy * self.width;
                    for sx in col * s..(col + 1) * s {
                        let d = self.depth[line + sx];
                        let sample = self.value[line + sx];
                        // Ties go to vertex markers
                        if d > best || (d == best && sample == Sample::Vertex) {
                            best = d;
                            best_sample = sample;
                        }
                    }
                }

                let c = match (best_sample, vertex_glyph) {
                    (Sample::Empty, _) => ' ',
                    (Sample::Vertex, Some(marker)) => marker,
                    _ => ramp.glyph(best),
                };
                grid.set(col, row, c);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pv(x: f32, y: f32, depth: f32) -> ProjectedVertex {
        ProjectedVertex { x, y, depth }
    }

    #[test]
    fn test_nearest_wins_regardless_of_order() {
        let near_first = {
            let mut canvas = DepthCanvas::new(10, 10, 1);
            canvas.draw_line(&pv(0.0, 5.0, 0.8), &pv(9.0, 5.0, 0.8));
            canvas.draw_line(&pv(5.0, 0.0, 0.2), &pv(5.0, 9.0, 0.2));
            canvas.depth_at(5, 5).unwrap()
        };
        let far_first = {
            let mut canvas = DepthCanvas::new(10, 10, 1);
            canvas.draw_line(&pv(5.0, 0.0, 0.2), &pv(5.0, 9.0, 0.2));
            canvas.draw_line(&pv(0.0, 5.0, 0.8), &pv(9.0, 5.0, 0.8));
            canvas.depth_at(5, 5).unwrap()
        };
        assert_eq!(near_first, 0.8);
        assert_eq!(far_first, 0.8);
    }

    #[test]
    fn test_equal_depth_does_not_overwrite() {
        let mut canvas = DepthCanvas::new(4, 4, 1);
        assert!(canvas.plot(1, 1, 0.5, Sample::Vertex));
        assert!(!canvas.plot(1, 1, 0.5, Sample::Edge));
        assert_eq!(canvas.sample_at(1, 1), Some(Sample::Vertex));
    }

    #[test]
    fn test_out_of_bounds_is_ignored() {
        let mut canvas = DepthCanvas::new(4, 4, 2);
        assert!(!canvas.plot(-1, 0, 1.0, Sample::Edge));
        assert!(!canvas.plot(0, 8, 1.0, Sample::Edge));
        canvas.draw_line(&pv(-20.0, -20.0, 1.0), &pv(20.0, 20.0, 1.0));
        // The diagonal crosses the canvas
        assert_eq!(canvas.depth_at(3, 3), Some(1.0));
    }

    #[test]
    fn test_line_depth_interpolates() {
        let mut canvas = DepthCanvas::new(5, 1, 1);
        canvas.draw_line(&pv(0.0, 0.0, 0.2), &pv(4.0, 0.0, 1.0));
        assert_eq!(canvas.depth_at(0, 0), Some(0.2));
        assert!((canvas.depth_at(2, 0).unwrap() - 0.6).abs() < 1e-6);
        assert!((canvas.depth_at(4, 0).unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_line_covers_every_step() {
        let mut canvas = DepthCanvas::new(8, 8, 1);
        canvas.draw_line(&pv(7.0, 1.0, 0.5), &pv(0.0, 4.0, 0.5));
        let drawn = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.sample_at(x, y) == Some(Sample::Edge))
            .count();
        assert_eq!(drawn, 8);
    }

    #[test]
    fn test_zero_length_line_plots_once() {
        let mut canvas = DepthCanvas::new(4, 4, 1);
        canvas.draw_line(&pv(2.2, 1.8, 0.4), &pv(1.9, 2.1, 0.9));
        assert_eq!(canvas.depth_at(2, 2), Some(0.4));
    }

    #[test]
    fn test_far_endpoint_is_clipped() {
        let mut canvas = DepthCanvas::new(10, 10, 1);
        canvas.draw_line(&pv(5.0, 5.0, 0.5), &pv(2.0e10, 5.0, 0.5));
        for x in 5..10 {
            assert_eq!(canvas.depth_at(x, 5), Some(0.5));
        }
        assert_eq!(canvas.depth_at(4, 5), Some(0.0));

        let mut canvas = DepthCanvas::new(10, 10, 1);
        canvas.draw_line(&pv(-f32::MAX, 3.0, 0.5), &pv(f32::MAX, 3.0, 0.5));
        for x in 0..10 {
            assert_eq!(canvas.depth_at(x, 3), Some(0.5));
        }
    }

    #[test]
    fn test_clipped_end_keeps_interpolated_depth() {
        let mut canvas = DepthCanvas::new(10, 10, 1);
        canvas.draw_line(&pv(-10.0, 2.0, 0.0), &pv(10.0, 2.0, 1.0));
        let left = canvas.depth_at(0, 2).unwrap();
        assert!((left - 0.5).abs() < 0.05);
        assert!(canvas.depth_at(9, 2).unwrap() > left);
    }

    #[test]
    fn test_line_outside_canvas_draws_nothing() {
        let mut canvas = DepthCanvas::new(10, 10, 1);
        canvas.draw_line(&pv(-1.0e12, -1.0e12, 0.5), &pv(-1.0e12, 1.0e12, 0.5));
        canvas.draw_line(&pv(-5.0, -5.0, 0.5), &pv(20.0, -3.0, 0.5));
        canvas.draw_line(&pv(-f32::MAX, 20.0, 0.5), &pv(f32::MAX, 20.0, 0.5));
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(canvas.depth_at(x, y), Some(0.0));
            }
        }
    }

    #[test]
    fn test_non_finite_endpoints_draw_nothing() {
        let mut canvas = DepthCanvas::new(10, 10, 1);
        canvas.draw_line(&pv(1.0, 1.0, 0.5), &pv(f32::NAN, 4.0, 0.5));
        canvas.draw_line(&pv(f32::INFINITY, 1.0, 0.5), &pv(4.0, 4.0, 0.5));
        canvas.draw_line(&pv(1.0, 1.0, f32::NAN), &pv(4.0, 4.0, 0.5));
        canvas.plot_vertex(&pv(f32::NAN, f32::NAN, 0.5));
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(canvas.depth_at(x, y), Some(0.0));
            }
        }
    }

    #[test]
    fn test_clear_resets() {
        let mut canvas = DepthCanvas::new(4, 4, 2);
        canvas.draw_line(&pv(0.0, 0.0, 0.5), &pv(7.0, 7.0, 0.5));
        canvas.clear();
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                assert_eq!(canvas.depth_at(x, y), Some(EMPTY_DEPTH));
                assert_eq!(canvas.sample_at(x, y), Some(Sample::Empty));
            }
        }
    }

    #[test]
    fn test_ramp_boundaries() {
        let ramp = GlyphRamp::default();
        assert_eq!(ramp.len(), 10);
        assert_eq!(ramp.index(0.0), 0);
        assert_eq!(ramp.index(0.11), 0);
        assert_eq!(ramp.index(0.5), 4);
        assert_eq!(ramp.index(1.0), 9);
        assert_eq!(ramp.index(1.5), 9);
        assert_eq!(ramp.index(-0.5), 0);
        assert_eq!(ramp.glyph(1.0), '@');
        assert_eq!(ramp.glyph(0.05), '.');
    }

    #[test]
    fn test_empty_ramp_rejected() {
        assert!(GlyphRamp::new("").is_none());
        assert_eq!(GlyphRamp::new("ab").unwrap().glyph(1.0), 'b');
    }

    #[test]
    fn test_resolve_uses_block_max() {
        let mut canvas = DepthCanvas::new(2, 1, 2);
        canvas.plot(0, 0, 0.05, Sample::Edge);
        canvas.plot(1, 1, 1.0, Sample::Edge);
        canvas.plot(3, 0, 0.05, Sample::Edge);

        let mut grid = CharGrid::new(2, 1);
        canvas.resolve(&mut grid, &GlyphRamp::default(), None);
        assert_eq!(grid.row(0), &['@', '.']);
    }

    #[test]
    fn test_resolve_blank_and_markers() {
        let mut canvas = DepthCanvas::new(3, 1, 1);
        canvas.plot(0, 0, 0.9, Sample::Vertex);
        canvas.plot(1, 0, 0.9, Sample::Edge);

        let mut grid = CharGrid::new(3, 1);
        canvas.resolve(&mut grid, &GlyphRamp::default(), Some('O'));
        assert_eq!(grid.row(0), &['O', '%', ' ']);

        canvas.resolve(&mut grid, &GlyphRamp::default(), None);
        assert_eq!(grid.get(0, 0), Some('%'));
    }

    #[test]
    fn test_vertex_marker_survives_its_edges() {
        let mut canvas = DepthCanvas::new(6, 1, 1);
        let a = pv(0.0, 0.0, 0.7);
        let b = pv(5.0, 0.0, 0.7);
        canvas.plot_vertex(&a);
        canvas.plot_vertex(&b);
        canvas.draw_line(&a, &b);
        assert_eq!(canvas.sample_at(0, 0), Some(Sample::Vertex));
        assert_eq!(canvas.sample_at(5, 0), Some(Sample::Vertex));
        assert_eq!(canvas.sample_at(2, 0), Some(Sample::Edge));
    }

    #[test]
    fn test_draw_wireframe_cube() {
        use crate::projection::{project_shape, ProjectionParams};
        use polyhedra_core::ShapeKind;
        use polyhedra_input::InteractionState;

        let cube = ShapeKind::Cube.build();
        let state = InteractionState::new();
        let params = ProjectionParams::terminal(40, 20, 2);
        let mut projected = Vec::new();
        project_shape(&cube, &state, &params, &mut projected);

        let mut canvas = DepthCanvas::new(40, 20, 2);
        canvas.draw_wireframe(&cube, &projected, true);
        let mut grid = CharGrid::new(40, 20);
        canvas.resolve(&mut grid, &GlyphRamp::default(), Some('O'));

        let drawn = grid.lines().flatten().filter(|c| **c != ' ').count();
        let markers = grid.lines().flatten().filter(|c| **c == 'O').count();
        assert!(drawn > 20);
        assert!(markers >= 4);
    }

    #[test]
    fn test_grid_lines() {
        let grid = CharGrid::new(3, 2);
        let lines: Vec<&[char]> = grid.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 3);
    }
}
