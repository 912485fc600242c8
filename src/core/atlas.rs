use crate::adapters::surface::SurfaceSlot;
use crate::core::filter::FilterEngine;
use crate::core::indices::Indices;
use crate::core::interaction::{self, Activation};
use crate::domain::model::{Dataset, FilterSelection, RoleDetail, VisibilitySets};
use crate::domain::ports::MapSurface;
use crate::domain::render::{SurfaceUpdate, ZoneStyle};
use crate::utils::error::Result;

/// Owns the loaded data, its indices and the map surface. The filter selection stays
/// with the caller and is only ever read here.
pub struct AtlasEngine<S: MapSurface> {
    dataset: Dataset,
    indices: Indices,
    surface: SurfaceSlot<S>,
    selected: Option<Activation>,
}

impl<S: MapSurface> AtlasEngine<S> {
    pub fn new(dataset: Dataset) -> Result<Self> {
        let indices = Indices::build(&dataset)?;
        Ok(Self {
            dataset,
            indices,
            surface: SurfaceSlot::new(),
            selected: None,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn indices(&self) -> &Indices {
        &self.indices
    }

    pub fn initial_selection(&self) -> FilterSelection {
        FilterSelection::initial(self.indices.year_range)
    }

    /// Creates the surface on first call only. Returns whether a surface was created.
    pub fn attach_surface<F>(&mut self, create: F) -> Result<bool>
    where
        F: FnOnce() -> Result<S>,
    {
        let zones = ZoneStyle::for_zones(&self.dataset.features);
        self.surface.acquire(create, &zones)
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_acquired()
    }

    pub fn detach_surface(&mut self) {
        self.surface.release();
    }

    /// Recomputes the visibility sets and pushes them to the surface, if one is attached.
    pub fn recompute(&mut self, selection: &FilterSelection) -> Result<VisibilitySets> {
        let sets =
            FilterEngine::compute_visibility(&self.dataset.features, &self.dataset.roles, selection);

        if let Some(surface) = self.surface.get_mut() {
            let update = SurfaceUpdate::from_sets(&self.dataset.features, &sets);
            surface.apply(&update)?;
        }

        Ok(sets)
    }

    /// Replaces the dataset and rebuilds every derived structure. On error nothing changes.
    pub fn reload(&mut self, dataset: Dataset) -> Result<()> {
        let indices = Indices::build(&dataset)?;
        self.dataset = dataset;
        self.indices = indices;
        self.selected = None;

        if let Some(surface) = self.surface.get_mut() {
            surface.mount(&ZoneStyle::for_zones(&self.dataset.features))?;
        }
        Ok(())
    }

    pub fn activate(&mut self, feature_id: &str) -> Option<&Activation> {
        let activation = interaction::activate(feature_id, &self.dataset, &self.indices)?;
        self.selected = Some(activation);
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&Activation> {
        self.selected.as_ref()
    }

    pub fn clear_selected_role(&mut self) {
        self.selected = None;
    }

    pub fn full_experience(&self, role_id: &str) -> Option<&RoleDetail> {
        self.indices.detail_for(role_id)
    }
}
