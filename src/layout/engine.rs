//! Layout engine facade
//!
//! `LayoutEngine` owns the margin configuration and is the single entry
//! point the scene calls on every viewport change. It dispatches on
//! `LayoutMode` to one of the two layout calculators and feeds the
//! resulting capacity into the pagination planner.

use crate::error::LayoutError;
use crate::models::{Classification, LayoutMode, LayoutResult, Viewport};
use super::breakpoint::classify;
use super::grid::compute_mixed_layout;
use super::margins::{MarginConfig, Margins};
use super::pagination::PaginationPlan;
use super::separated::compute_separated_layout;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutEngine {
    config: MarginConfig,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MarginConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MarginConfig {
        &self.config
    }

    pub fn classify(&self, viewport: &Viewport) -> Classification {
        classify(viewport)
    }

    /// Layout for `viewport` in `mode`.
    ///
    /// `visible_items` is the number of pairs on the active page; only the
    /// separated layout uses it to centre its frames.
    pub fn compute(&self, viewport: &Viewport, mode: LayoutMode, visible_items: usize) -> LayoutResult {
        match mode {
            LayoutMode::Mixed => LayoutResult::Mixed(compute_mixed_layout(viewport, &self.config)),
            LayoutMode::Separated => {
                LayoutResult::Separated(compute_separated_layout(viewport, &self.config, visible_items))
            }
        }
    }

    /// Cards per page for `viewport` in `mode`; always at least 1
    pub fn capacity(&self, viewport: &Viewport, mode: LayoutMode) -> usize {
        self.compute(viewport, mode, 0).capacity()
    }

    pub fn plan_pagination(&self, total_items: usize, viewport: &Viewport, mode: LayoutMode) -> PaginationPlan {
        self.plan_pagination_with_override(total_items, viewport, mode, None)
    }

    pub fn plan_pagination_with_override(
        &self,
        total_items: usize,
        viewport: &Viewport,
        mode: LayoutMode,
        items_per_page: Option<usize>,
    ) -> PaginationPlan {
        let capacity = self.capacity(viewport, mode);
        let plan = PaginationPlan::with_override(total_items, capacity, items_per_page);

        log::debug!(
            "pagination {:?} {}x{}: {} items, capacity {}, {} per page, {} pages",
            mode, viewport.width, viewport.height, total_items, capacity,
            plan.items_per_page, plan.total_pages
        );

        plan
    }

    /// Pixel margins for a container of `container_height`
    pub fn margins(&self, container_height: f32) -> Margins {
        self.config.margins(container_height)
    }

    /// Patch one configuration value by dotted key path
    pub fn update_margin(&mut self, path: &str, value: f64) -> Result<(), LayoutError> {
        self.config.set_by_path(path, value)?;
        log::info!("margin config {} = {}", path, value);
        Ok(())
    }

    /// Swap in a whole configuration; rejected configs leave the current one
    pub fn replace_config(&mut self, config: MarginConfig) -> Result<(), LayoutError> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn reset_config(&mut self) {
        self.config = MarginConfig::default();
    }

    /// Pretty JSON of the current configuration for log-only debugging
    pub fn config_debug(&self) -> String {
        self.config.to_json_pretty()
    }
}
