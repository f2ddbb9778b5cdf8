use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataGroup, DataGroupKind};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::PlotConfig;

/// Handle to a data group owned by a [`Plot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DataGroupId(u32);

impl DataGroupId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Main orchestration facade consumed by host applications.
///
/// Groups draw in creation order; removing a group keeps the order of the rest.
pub struct Plot<R: Renderer> {
    renderer: R,
    config: PlotConfig,
    groups: IndexMap<DataGroupId, DataGroup>,
    next_group_id: u32,
}

impl<R: Renderer> Plot<R> {
    pub fn new(renderer: R, config: PlotConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            "plot created"
        );
        Ok(Self {
            renderer,
            config,
            groups: IndexMap::new(),
            next_group_id: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Creates an empty group using the plot viewport, tuning and options.
    pub fn create_group(&mut self, kind: DataGroupKind) -> ChartResult<DataGroupId> {
        let group = DataGroup::with_options(
            kind,
            self.config.viewport,
            self.config.group_options.clone(),
            self.config.fit_tuning,
        )?
        .with_color_scale(Arc::new(self.config.color_scale));
        self.insert_group(group)
    }

    /// Adopts an externally built group. Its viewport must match the plot's.
    pub fn insert_group(&mut self, group: DataGroup) -> ChartResult<DataGroupId> {
        if group.viewport() != self.config.viewport {
            return Err(ChartError::InvalidData(format!(
                "group viewport {}x{} does not match plot viewport {}x{}",
                group.viewport().width,
                group.viewport().height,
                self.config.viewport.width,
                self.config.viewport.height
            )));
        }
        let id = DataGroupId::new(self.next_group_id);
        self.next_group_id = self.next_group_id.checked_add(1).ok_or_else(|| {
            ChartError::InvalidData("data group id space exhausted".to_owned())
        })?;
        debug!(id = id.raw(), kind = group.kind().name(), "data group added");
        self.groups.insert(id, group);
        Ok(id)
    }

    #[must_use]
    pub fn group(&self, id: DataGroupId) -> Option<&DataGroup> {
        self.groups.get(&id)
    }

    #[must_use]
    pub fn group_mut(&mut self, id: DataGroupId) -> Option<&mut DataGroup> {
        self.groups.get_mut(&id)
    }

    /// Looks up a group or fails with `InvalidData`.
    pub fn require_group_mut(&mut self, id: DataGroupId) -> ChartResult<&mut DataGroup> {
        self.groups
            .get_mut(&id)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown data group {}", id.raw())))
    }

    pub fn remove_group(&mut self, id: DataGroupId) -> Option<DataGroup> {
        let removed = self.groups.shift_remove(&id);
        if removed.is_some() {
            debug!(id = id.raw(), "data group removed");
        }
        removed
    }

    pub fn group_ids(&self) -> impl Iterator<Item = DataGroupId> + '_ {
        self.groups.keys().copied()
    }

    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Concatenates the primitives of every group in creation order.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        let mut frame = RenderFrame::new(self.config.viewport);
        for group in self.groups.values() {
            frame.extend(group.primitives().iter().cloned());
        }
        frame
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        self.renderer.render(&frame)?;
        debug!(
            groups = self.groups.len(),
            primitives = frame.primitives.len(),
            "plot rendered"
        );
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
