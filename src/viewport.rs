/// Mapping between the logical playfield and the terminal cell grid.
///
/// The simulation runs in a fixed logical space; the terminal it is drawn
/// on can be any size.  Drawing scales field coordinates down to cells,
/// and mouse clicks are translated back up to field coordinates through
/// the inverse mapping.

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    pub field_w: f32,
    pub field_h: f32,
}

impl Viewport {
    /// A zero-sized terminal can occur mid-resize; dimensions are kept at
    /// one cell minimum so the mapping never divides by zero.
    pub fn new(cols: u16, rows: u16, field_w: f32, field_h: f32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            field_w,
            field_h,
        }
    }

    /// Width and height of one cell in playfield units.
    pub fn cell_size(&self) -> (f32, f32) {
        (
            self.field_w / self.cols as f32,
            self.field_h / self.rows as f32,
        )
    }

    /// Cell containing the playfield point, or `None` when it lies
    /// outside the visible grid (entities may leave the playfield).
    pub fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let (cw, ch) = self.cell_size();
        let col = (x / cw).floor();
        let row = (y / ch).floor();
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Playfield coordinates of a cell's center; this is the click
    /// translation used by the fire action.
    pub fn to_field(&self, col: u16, row: u16) -> (f32, f32) {
        let (cw, ch) = self.cell_size();
        ((col as f32 + 0.5) * cw, (row as f32 + 0.5) * ch)
    }
}
