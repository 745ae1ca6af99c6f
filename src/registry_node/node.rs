use std::sync::Arc;

use log::info;

use crate::datasets::{DatasetStore, FileDatasetStore, Table};
use crate::error::RegistryResult;
use crate::query::registry::{
    self, ActiveAircraftFilter, AGGREGATE_DIMENSIONS, DATASET_AIRCRAFT, DATASET_AIRCRAFT_MODELS,
};
use crate::query::{self, AggregateTree, PivotMatrix};
use crate::registry_node::config::NodeConfig;
use crate::registry_node::responses::{
    ActiveAircraft, ActiveAircraftCount, AircraftModel, DatasetSummary, ListResponse,
};

/// A node serving read-only queries over the aircraft-registry datasets.
///
/// RegistryNode combines the dataset store with the query pipelines behind
/// one method per endpoint. The store is populated before the node starts
/// answering queries and never mutated afterwards, so the node is shared
/// across requests without locking; every method computes a fresh response
/// from the stored tables.
pub struct RegistryNode {
    /// The dataset store backend
    store: Arc<dyn DatasetStore>,
    /// Configuration settings for this node
    config: NodeConfig,
}

impl RegistryNode {
    /// Creates a new RegistryNode over an already-populated store.
    pub fn new(store: Arc<dyn DatasetStore>, config: NodeConfig) -> Self {
        Self { store, config }
    }

    /// Loads the file-backed store described by the configuration.
    pub fn from_config(config: NodeConfig) -> RegistryResult<Self> {
        info!("Loading datasets from {}", config.data_dir.display());
        let store = FileDatasetStore::load(&config.data_dir)?;
        Ok(Self::new(Arc::new(store), config))
    }

    pub fn store(&self) -> &dyn DatasetStore {
        self.store.as_ref()
    }

    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Summaries of every dataset in the store, in listing order.
    pub fn loaded_data(&self) -> RegistryResult<ListResponse<Vec<DatasetSummary>>> {
        let mut summaries = Vec::new();
        for name in self.store.list_datasets() {
            let table = self.store.get_dataset(&name)?;
            summaries.push(DatasetSummary {
                name,
                columns: table.columns().to_vec(),
                rows_count: table.len(),
            });
        }
        Ok(ListResponse::from(summaries))
    }

    /// Distinct aircraft models, offset-sliced.
    ///
    /// `count` reflects the total number of distinct models; only
    /// `loaded_data` is sliced. An out-of-range `skip` yields an empty
    /// slice.
    pub fn aircraft_models(
        &self,
        skip: usize,
        limit: usize,
    ) -> RegistryResult<ListResponse<Vec<AircraftModel>>> {
        let models = self.store.get_dataset(DATASET_AIRCRAFT_MODELS)?;
        let distinct = registry::list_models(models)?;

        let records = distinct
            .rows()
            .iter()
            .skip(skip)
            .take(limit)
            .map(|row| AircraftModel::from_row(row))
            .collect::<RegistryResult<Vec<_>>>()?;

        Ok(ListResponse::new(distinct.len(), records))
    }

    /// Active aircraft joined to their models, optionally filtered.
    pub fn active_aircraft(
        &self,
        filter: &ActiveAircraftFilter,
    ) -> RegistryResult<ListResponse<Vec<ActiveAircraft>>> {
        let models = self.store.get_dataset(DATASET_AIRCRAFT_MODELS)?;
        let aircraft = self.store.get_dataset(DATASET_AIRCRAFT)?;

        let active = registry::filter_active(aircraft)?;
        let joined = registry::join_active_to_models(models, &active, filter)?;

        let records = joined
            .rows()
            .iter()
            .map(|row| ActiveAircraft::from_row(row))
            .collect::<RegistryResult<Vec<_>>>()?;

        Ok(ListResponse::from(records))
    }

    /// Nested aggregate tree, manufacturer → model → county → count.
    pub fn aggregated_active_aircraft(&self) -> RegistryResult<ListResponse<AggregateTree>> {
        let relation = self.active_relation()?;
        let tree = query::nest(&relation, &AGGREGATE_DIMENSIONS)?;
        Ok(ListResponse::new(tree.len(), tree))
    }

    /// Flat (manufacturer, model, county, count) rows.
    pub fn aggregated_active_aircraft_flat(
        &self,
    ) -> RegistryResult<ListResponse<Vec<ActiveAircraftCount>>> {
        let relation = self.active_relation()?;
        let counts = query::group_and_count(&relation, &AGGREGATE_DIMENSIONS)?;

        let records = counts
            .rows()
            .iter()
            .map(|row| ActiveAircraftCount::from_row(row))
            .collect::<RegistryResult<Vec<_>>>()?;

        Ok(ListResponse::from(records))
    }

    /// Pivot matrix: (manufacturer, model) rows against county columns.
    pub fn active_aircraft_pivot(&self) -> RegistryResult<ListResponse<PivotMatrix>> {
        let relation = self.active_relation()?;
        let matrix = query::pivot(&relation, &["manufacturer", "model"], "county")?;
        Ok(ListResponse::new(matrix.len(), matrix))
    }

    /// The canonical relation shared by the three aggregate presentations.
    fn active_relation(&self) -> RegistryResult<Table> {
        let models = self.store.get_dataset(DATASET_AIRCRAFT_MODELS)?;
        let aircraft = self.store.get_dataset(DATASET_AIRCRAFT)?;
        registry::active_relation(models, aircraft)
    }
}
