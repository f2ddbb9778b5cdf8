use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Primitive;

/// Backend-agnostic scene for one plot draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub primitives: Vec<Primitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn extend<I>(&mut self, primitives: I)
    where
        I: IntoIterator<Item = Primitive>,
    {
        self.primitives.extend(primitives);
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for primitive in &self.primitives {
            primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Serializes the frame for snapshot comparisons and external tooling.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render frame: {e}"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RenderFrame;
    use crate::core::Viewport;
    use crate::render::{CirclePrimitive, Primitive};

    #[test]
    fn frame_rejects_invalid_geometry() {
        let frame = RenderFrame::new(Viewport::new(10, 10))
            .with_primitive(Primitive::Circle(CirclePrimitive::new(1.0, 1.0, -1.0, "")));
        assert!(frame.validate().is_err());
    }

    #[test]
    fn frame_rejects_zero_viewport() {
        assert!(RenderFrame::new(Viewport::new(0, 10)).validate().is_err());
    }
}
