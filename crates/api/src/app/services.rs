use std::sync::Arc;

use gudang_inventory::{Part, PartCategory, PartInput};
use gudang_store::{
    InMemoryWarehouseStore, InventoryStore, JsonFileWarehouseStore, WarehouseStore,
};
use gudang_warehouse::WarehouseService;

/// Services shared by every handler.
pub struct AppServices {
    warehouse: WarehouseService,
}

impl AppServices {
    pub fn warehouse(&self) -> &WarehouseService {
        &self.warehouse
    }

    pub fn store(&self) -> &Arc<dyn WarehouseStore> {
        self.warehouse.store()
    }
}

/// Select the backing store from the environment and wire the service.
///
/// `GUDANG_DATA_FILE=<path>` persists to a JSON document; otherwise the
/// store is in-memory (dev/test). `GUDANG_SEED_DEMO=1` loads the demo
/// catalog into an empty store.
pub fn build_services() -> anyhow::Result<AppServices> {
    let store: Arc<dyn WarehouseStore> = match std::env::var("GUDANG_DATA_FILE") {
        Ok(path) => {
            tracing::info!(path = %path, "using json file store");
            Arc::new(JsonFileWarehouseStore::open(path)?)
        }
        Err(_) => {
            tracing::info!("using in-memory store");
            Arc::new(InMemoryWarehouseStore::new())
        }
    };

    let seed = std::env::var("GUDANG_SEED_DEMO")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);
    if seed && store.list()?.is_empty() {
        seed_demo_catalog(store.as_ref())?;
    }

    Ok(AppServices {
        warehouse: WarehouseService::new(store),
    })
}

/// Starter inventory for demos: seeded directly into the part collection,
/// so no ledger entries are produced.
fn seed_demo_catalog(store: &dyn WarehouseStore) -> anyhow::Result<()> {
    for input in demo_catalog() {
        store.put(Part::create(input)?)?;
    }
    tracing::info!("seeded demo catalog");
    Ok(())
}

fn demo_catalog() -> Vec<PartInput> {
    let entry = |name: &str, quantity, price, location: &str, category, min_stock| PartInput {
        name: name.to_string(),
        quantity,
        price,
        storage_location: location.to_string(),
        category,
        min_stock,
        barcode: None,
    };

    vec![
        entry("Spark Plug NGK CR7HSA", 50, 52_500, "Shelf A-1", PartCategory::EngineParts, 10),
        entry("Oil Filter Honda OEM", 30, 134_850, "Shelf B-2", PartCategory::EngineParts, 8),
        entry("Brake Pads Front Set", 25, 375_000, "Shelf C-5", PartCategory::BrakingSystem, 5),
        entry("LED Headlight Bulb H4", 15, 299_250, "Electrical A-1", PartCategory::ElectricalComponents, 4),
        entry("Chain Lube Motul C2+", 40, 187_500, "Fluids Rack 1", PartCategory::FluidsAndChemicals, 10),
        entry("Tire Pirelli Diablo Rosso III", 5, 2_250_000, "Tire Rack 2", PartCategory::WheelsAndTires, 2),
        entry("Battery Yuasa YTZ10S", 12, 1_432_500, "Electrical B-4", PartCategory::ElectricalComponents, 3),
        entry("Kampas Kopling Set", 10, 250_000, "Kotak Kopling", PartCategory::EngineParts, 3),
    ]
}
