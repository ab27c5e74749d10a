//! Raster rendering of walks and PNG snapshot export

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::io::colormap::Colormap;
use crate::io::configuration::{
    BACKGROUND_COLOR, CELL_PIXELS, HEX_PIXELS_PER_UNIT, IMAGE_MARGIN, LATTICE_COLOR,
    MAX_CANVAS_PIXELS,
};
use crate::io::error::{Result, WalkError, create_dir_error, invalid_configuration};
use crate::lattice::position::Position;
use crate::lattice::topology::Lattice;
use crate::walk::growth::GrownWalk;
use crate::walk::occupancy::Occupancy;

/// Maps lattice positions to pixels
#[derive(Debug, Clone, Copy)]
enum Layout {
    /// One `CELL_PIXELS` block per cell
    Grid,
    /// Vertex coordinates scaled by pixels per radius, y flipped
    Hex {
        min_x: f64,
        max_y: f64,
        pixels_per_unit: f64,
    },
}

/// Image a walk is painted onto incrementally
///
/// A new canvas shows the bare lattice; visits and steps are painted on top in
/// walk order, so animation frames can be taken between paints.
pub struct Canvas {
    image: RgbaImage,
    layout: Layout,
}

impl Canvas {
    /// Blank canvas sized for `lattice`, hex lattice edges already drawn
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the image would exceed
    /// [`MAX_CANVAS_PIXELS`]
    pub fn new(lattice: &Lattice) -> Result<Self> {
        let (width, height, layout) = plan_layout(lattice)?;
        let mut canvas = Self {
            image: ImageBuffer::from_pixel(width, height, Rgba(BACKGROUND_COLOR)),
            layout,
        };

        if let Lattice::Hex(graph) = lattice {
            for (a, b) in graph.edges() {
                canvas.paint_step(
                    lattice,
                    Position::Vertex(a),
                    Position::Vertex(b),
                    LATTICE_COLOR,
                    0,
                );
            }
        }
        Ok(canvas)
    }

    /// Paint a visited position with the given color
    pub fn paint_visit(&mut self, lattice: &Lattice, position: Position, color: [u8; 4]) {
        match (self.layout, position) {
            (Layout::Grid, Position::Cell { row, col }) => {
                let left = IMAGE_MARGIN + col as u32 * CELL_PIXELS;
                let top = IMAGE_MARGIN + row as u32 * CELL_PIXELS;
                for y in top..top + CELL_PIXELS {
                    for x in left..left + CELL_PIXELS {
                        self.put(x as i64, y as i64, color);
                    }
                }
            }
            (Layout::Hex { .. }, Position::Vertex(_)) => {
                if let Some(center) = self.pixel_of(lattice, position) {
                    self.brush(center, 1, color);
                }
            }
            _ => {}
        }
    }

    /// Paint the step between two adjacent positions
    ///
    /// Grid cells touch already, so only hex edges produce pixels. `radius`
    /// is the brush half-width.
    pub fn paint_step(
        &mut self,
        lattice: &Lattice,
        from: Position,
        to: Position,
        color: [u8; 4],
        radius: i64,
    ) {
        if !matches!(self.layout, Layout::Hex { .. }) {
            return;
        }
        let (Some(a), Some(b)) = (self.pixel_of(lattice, from), self.pixel_of(lattice, to)) else {
            return;
        };

        let delta = [b[0] - a[0], b[1] - a[1]];
        let steps = delta[0].abs().max(delta[1].abs()).max(1);
        for i in 0..=steps {
            let x = a[0] + delta[0] * i / steps;
            let y = a[1] + delta[1] * i / steps;
            self.brush([x, y], radius, color);
        }
    }

    /// Current pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Finish painting and take the image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn pixel_of(&self, lattice: &Lattice, position: Position) -> Option<[i64; 2]> {
        match (self.layout, lattice, position) {
            (
                Layout::Hex {
                    min_x,
                    max_y,
                    pixels_per_unit,
                },
                Lattice::Hex(graph),
                Position::Vertex(id),
            ) => {
                let [x, y] = graph.coordinates(id)?;
                Some([
                    i64::from(IMAGE_MARGIN) + ((x - min_x) * pixels_per_unit).round() as i64,
                    i64::from(IMAGE_MARGIN) + ((max_y - y) * pixels_per_unit).round() as i64,
                ])
            }
            _ => None,
        }
    }

    fn brush(&mut self, center: [i64; 2], radius: i64, color: [u8; 4]) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                self.put(center[0] + dx, center[1] + dy, color);
            }
        }
    }

    fn put(&mut self, x: i64, y: i64, color: [u8; 4]) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = Rgba(color);
        }
    }
}

/// Pixel size a rendering of `lattice` would have
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the image would exceed
/// [`MAX_CANVAS_PIXELS`]
pub fn canvas_dimensions(lattice: &Lattice) -> Result<(u32, u32)> {
    plan_layout(lattice).map(|(width, height, _)| (width, height))
}

fn plan_layout(lattice: &Lattice) -> Result<(u32, u32, Layout)> {
    let margins = 2 * u64::from(IMAGE_MARGIN);
    match lattice {
        Lattice::Grid(grid) => {
            let side =
                |cells: usize| (cells as u64).saturating_mul(u64::from(CELL_PIXELS)) + margins;
            let (width, height) = within_budget(side(grid.cols()), side(grid.rows()))?;
            Ok((width, height, Layout::Grid))
        }
        Lattice::Hex(graph) => {
            let mut min = [f64::INFINITY; 2];
            let mut max = [f64::NEG_INFINITY; 2];
            for [x, y] in graph.vertices().filter_map(|id| graph.coordinates(id)) {
                min = [min[0].min(x), min[1].min(y)];
                max = [max[0].max(x), max[1].max(y)];
            }
            let pixels_per_unit = HEX_PIXELS_PER_UNIT / graph.radius();
            // Float to int casts saturate
            let side = |low: f64, high: f64| {
                ((high - low) * pixels_per_unit).ceil() as u64 + margins + 1
            };
            let (width, height) = within_budget(side(min[0], max[0]), side(min[1], max[1]))?;
            let layout = Layout::Hex {
                min_x: min[0],
                max_y: max[1],
                pixels_per_unit,
            };
            Ok((width, height, layout))
        }
    }
}

fn within_budget(width: u64, height: u64) -> Result<(u32, u32)> {
    let over_budget = || {
        invalid_configuration(
            "size",
            &format!("{width}x{height} pixels"),
            &format!("rendered image would exceed {MAX_CANVAS_PIXELS} pixels"),
        )
    };
    if width.saturating_mul(height) > MAX_CANVAS_PIXELS {
        return Err(over_budget());
    }
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(over_budget()),
    }
}

/// Paint `positions` onto `canvas` as consecutive walk steps
///
/// Colors run along the colormap over `length` positions, so prefixes of one
/// walk share a palette.
pub fn paint_walk(
    canvas: &mut Canvas,
    lattice: &Lattice,
    positions: &[Position],
    length: usize,
    colormap: Colormap,
) {
    let mut previous: Option<Position> = None;
    for (index, &position) in positions.iter().enumerate() {
        let order = u32::try_from(index + 1).unwrap_or(u32::MAX);
        let color = colormap.color_for_order(order, length);
        if let Some(from) = previous {
            canvas.paint_step(lattice, from, position, color, 1);
        }
        canvas.paint_visit(lattice, position, color);
        previous = Some(position);
    }
}

/// Render the final state of a grown walk
///
/// Grid lattices are filled from the occupancy snapshot; the hex vertex graph
/// highlights the walked subgraph over the full tiling.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the image would exceed
/// [`MAX_CANVAS_PIXELS`]
pub fn render_walk(lattice: &Lattice, walk: &GrownWalk, colormap: Colormap) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(lattice)?;
    let length = walk.len();

    match walk.occupancy.as_grid() {
        Some(grid) => {
            for &[row, col] in grid.visited() {
                if let Some(order) = grid.visit_order([row, col]) {
                    let color = colormap.color_for_order(order, length);
                    canvas.paint_visit(lattice, Position::cell(row, col), color);
                }
            }
        }
        None => paint_walk(&mut canvas, lattice, &walk.path, length, colormap),
    }

    Ok(canvas.into_image())
}

/// Export the final state of a walk as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The image would exceed [`MAX_CANVAS_PIXELS`]
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_walk_as_png(
    lattice: &Lattice,
    walk: &GrownWalk,
    colormap: Colormap,
    output_path: &Path,
) -> Result<()> {
    let image = render_walk(lattice, walk, colormap)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| create_dir_error(parent.to_path_buf(), e))?;
    }

    image
        .save(output_path)
        .map_err(|e| WalkError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
