use crate::error::ChartResult;
use crate::render::{Primitive, RenderFrame, Renderer};

/// No-op renderer used by tests and headless plot usage.
///
/// It still validates frame content so tests can catch invalid geometry.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_primitive_count: usize,
    pub last_grid_cell_count: usize,
    pub last_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_primitive_count = frame.primitives.len();
        self.last_grid_cell_count = frame
            .primitives
            .iter()
            .filter(|primitive| matches!(primitive, Primitive::GridCell(_)))
            .count();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
