use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::json;

use stockreport_core::{LocationId, PartId, ReportError, StockItemId};
use stockreport_infra::{InMemoryInventory, InventorySnapshot};
use stockreport_inventory::{Deltas, Location, Part, StockItem, TrackingEntry};
use stockreport_plugin::{FilterRegistry, InMemorySettings, ReportTarget, StockSummaryReport};
use stockreport_summary::{DateRange, InventorySource};

struct Warehouse {
    inventory: InMemoryInventory,
    root: Location,
    empty_shelf: Location,
    bolts: StockItem,
    nuts: StockItem,
}

fn warehouse() -> Warehouse {
    let inventory = InMemoryInventory::new();

    let root = Location::new(LocationId::new(), "Main warehouse");
    let rack = Location::new(LocationId::new(), "Rack 1").with_parent(root.id);
    let bin = Location::new(LocationId::new(), "Bin 4").with_parent(rack.id);
    let empty_shelf = Location::new(LocationId::new(), "Empty shelf").with_parent(root.id);
    for l in [&root, &rack, &bin, &empty_shelf] {
        inventory.insert_location(l.clone());
    }

    let bolts = StockItem::new(
        StockItemId::new(),
        Part::new(PartId::new(), "Bolt M8"),
        rack.id,
        Decimal::from(100),
    )
    .with_purchase_price(Decimal::new(250, 2));
    let nuts = StockItem::new(
        StockItemId::new(),
        Part::new(PartId::new(), "Nut M8"),
        bin.id,
        Decimal::from(40),
    );
    inventory.upsert_item(bolts.clone());
    inventory.upsert_item(nuts.clone());

    let day = |m: u32, d: u32| Utc.with_ymd_and_hms(2024, m, d, 12, 0, 0).unwrap();
    inventory.record_tracking(
        TrackingEntry::new(bolts.id, day(2, 1))
            .with_deltas(Deltas::new().with("added", 20).with("quantity", 120))
            .with_notes("Received goods"),
    );
    inventory.record_tracking(
        TrackingEntry::new(bolts.id, day(3, 1))
            .with_deltas(Deltas::new().with("removed", 5))
            .with_notes("Allocated to build"),
    );
    // Before the window: must not count.
    inventory.record_tracking(
        TrackingEntry::new(nuts.id, Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap())
            .with_deltas(Deltas::new().with("added", 1000)),
    );
    inventory.record_tracking(
        TrackingEntry::new(nuts.id, day(6, 15)).with_deltas(Deltas::new().with("removed", 8)),
    );

    Warehouse {
        inventory,
        root,
        empty_shelf,
        bolts,
        nuts,
    }
}

#[test]
fn report_context_covers_whole_subtree() {
    let w = warehouse();
    let plugin = StockSummaryReport::new(&w.inventory, InMemorySettings::new());

    let ctx = plugin
        .add_report_context(&ReportTarget::StockLocation(w.root.id))
        .unwrap()
        .unwrap();

    assert_eq!(ctx.location.name, "Main warehouse");
    assert_eq!(ctx.date_range.start, "01/01/2024");
    assert_eq!(ctx.date_range.end, "31/12/2024");
    assert_eq!(ctx.stock_summary.len(), 2);

    let bolts = &ctx.stock_summary[0];
    assert_eq!(bolts.stock_item.id, w.bolts.id);
    assert_eq!(bolts.location, "Rack 1");
    assert_eq!(bolts.sum_added, Decimal::from(20));
    assert_eq!(bolts.sum_removed, Decimal::from(5));
    assert_eq!(bolts.start_quantity, Decimal::from(85));
    assert_eq!(bolts.start_quantity_value, Decimal::new(21250, 2));
    assert_eq!(bolts.quantity_value, Decimal::new(25000, 2));

    let nuts = &ctx.stock_summary[1];
    assert_eq!(nuts.stock_item.id, w.nuts.id);
    assert_eq!(nuts.location, "Bin 4");
    assert_eq!(nuts.sum_added, Decimal::ZERO);
    assert_eq!(nuts.start_quantity, Decimal::from(48));
    assert_eq!(nuts.start_quantity_value, Decimal::ZERO);
    assert_eq!(nuts.tracking_entries.len(), 1);

    for row in &ctx.stock_summary {
        assert_eq!(row.start_quantity + row.sum_added - row.sum_removed, row.quantity);
    }
}

#[test]
fn empty_subtree_renders_empty_summary() {
    let w = warehouse();
    let plugin = StockSummaryReport::new(&w.inventory, InMemorySettings::new());

    let ctx = plugin
        .add_report_context(&ReportTarget::StockLocation(w.empty_shelf.id))
        .unwrap()
        .unwrap();
    assert!(ctx.stock_summary.is_empty());
    assert_eq!(ctx.location.id, w.empty_shelf.id);
}

#[test]
fn unknown_location_is_not_found() {
    let w = warehouse();
    let plugin = StockSummaryReport::new(&w.inventory, InMemorySettings::new());

    let err = plugin
        .add_report_context(&ReportTarget::StockLocation(LocationId::new()))
        .unwrap_err();
    assert!(matches!(err, ReportError::NotFound { .. }));
}

#[test]
fn malformed_end_date_names_the_end_field() {
    let w = warehouse();
    let settings = InMemorySettings::new();
    settings.set("END_DATE", "2024/12/31");
    let plugin = StockSummaryReport::new(&w.inventory, settings);

    let err = plugin
        .add_report_context(&ReportTarget::StockLocation(w.root.id))
        .unwrap_err();
    assert_eq!(err.config_field(), Some("END_DATE"));
    assert!(err.to_string().contains("2024/12/31"));
}

#[test]
fn template_filter_resums_serialised_entries() {
    let w = warehouse();
    let plugin = StockSummaryReport::new(&w.inventory, InMemorySettings::new());
    let json = plugin
        .add_report_context(&ReportTarget::StockLocation(w.root.id))
        .unwrap()
        .unwrap()
        .to_json()
        .unwrap();

    let filters = FilterRegistry::with_defaults();
    let entries = &json["stock_summary"][0]["tracking_entries"];
    assert_eq!(filters.apply("sum_deltas", entries, "added").unwrap(), json!("20"));
    assert_eq!(filters.apply("sum_deltas", entries, "removed").unwrap(), json!("5"));
    assert_eq!(json["stock_summary"][0]["sum_added"], json!("20"));
}

#[test]
fn snapshot_round_trip_produces_same_report() {
    let w = warehouse();
    let plugin = StockSummaryReport::new(&w.inventory, InMemorySettings::new());
    let target = ReportTarget::StockLocation(w.root.id);
    let direct = plugin.add_report_context(&target).unwrap().unwrap();

    let everything = DateRange::parse("01/01/2000", "01/01/2100").unwrap();
    let snapshot = InventorySnapshot {
        locations: w.inventory.location_subtree(&w.root.id).unwrap().unwrap(),
        items: vec![w.bolts.clone(), w.nuts.clone()],
        tracking: [w.bolts.id, w.nuts.id]
            .iter()
            .flat_map(|id| w.inventory.tracking_entries(id, &everything).unwrap())
            .collect(),
    };

    let json = serde_json::to_string(&snapshot).unwrap();
    let reloaded = InventorySnapshot::from_json_str(&json).unwrap().into_inventory();
    let plugin = StockSummaryReport::new(&reloaded, InMemorySettings::new());
    let via_snapshot = plugin.add_report_context(&target).unwrap().unwrap();

    assert_eq!(direct, via_snapshot);
}
