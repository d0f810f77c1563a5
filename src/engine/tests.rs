use proptest::prelude::*;

use super::*;
use crate::availability::{
    AvailabilityMap, AvailabilitySet, DatacenterAvailability, PlanAvailability, StockStatus,
};
use crate::catalog::{Pricing, VpsPlan};

#[derive(Debug, Clone)]
struct TestPlan {
    code: String,
    category: String,
    pricings: Vec<Pricing>,
}

impl Offering for TestPlan {
    fn plan_code(&self) -> &str {
        &self.code
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn invoice_name(&self) -> &str {
        &self.code
    }

    fn pricings(&self) -> &[Pricing] {
        &self.pricings
    }
}

fn monthly(price: i64) -> Pricing {
    Pricing {
        interval_unit: "month".to_string(),
        interval: 1,
        pricing_type: "rental".to_string(),
        price,
        ..Default::default()
    }
}

fn plan(code: &str, category: &str, price: i64) -> TestPlan {
    TestPlan {
        code: code.to_string(),
        category: category.to_string(),
        pricings: vec![monthly(price)],
    }
}

fn known(records: &[(&str, &str)]) -> PlanAvailability {
    PlanAvailability::Known(
        records
            .iter()
            .map(|(dc, status)| DatacenterAvailability::new(*dc, *status))
            .collect(),
    )
}

fn map(entries: Vec<(&str, PlanAvailability)>) -> AvailabilityMap {
    entries
        .into_iter()
        .map(|(code, availability)| (code.to_string(), availability))
        .collect()
}

fn dcs(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

#[test]
fn test_available_plan_lists_available_datacenters() {
    let plans = vec![plan("24ska01", "kimsufi", 1_099_000_000)];
    let availability = map(vec![(
        "24ska01",
        known(&[("gra", "available"), ("rbx", "out-of-stock"), ("sbg", "available")]),
    )]);

    let report = build_report(&plans, &availability, &FilterCriteria::new(), "EUR");

    assert!(!report.nothing_available);
    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.status, StockStatus::Available);
    assert_eq!(row.datacenters, dcs(&["gra", "sbg"]));
    assert_eq!(row.category_display, "Kimsufi");
    assert_eq!(format!("{:.2} {}", row.price, row.currency), "10.99 EUR");
}

#[test]
fn test_out_of_stock_plan_lists_all_datacenters() {
    let plans = vec![plan("24ska01", "kimsufi", 1_099_000_000)];
    let availability = map(vec![(
        "24ska01",
        known(&[("gra", "out-of-stock"), ("rbx", "out-of-stock")]),
    )]);

    let report = build_report(&plans, &availability, &FilterCriteria::new(), "EUR");

    assert!(report.nothing_available);
    assert_eq!(report.rows[0].status, StockStatus::OutOfStock);
    assert_eq!(report.rows[0].datacenters, dcs(&["gra", "rbx"]));
}

#[test]
fn test_datacenter_filter_forces_out_of_stock() {
    let plans = vec![plan("vps-le-2-2-40", "vps", 300_000_000)];
    let availability = map(vec![(
        "vps-le-2-2-40",
        known(&[("GRA", "available"), ("BHS", "out-of-stock")]),
    )]);
    let criteria = FilterCriteria::new().with_datacenters(dcs(&["bhs"]));

    let report = build_report(&plans, &availability, &criteria, "EUR");

    assert!(report.nothing_available);
    assert_eq!(report.rows[0].status, StockStatus::OutOfStock);
    assert_eq!(report.rows[0].datacenters, dcs(&["BHS"]));
}

#[test]
fn test_datacenter_filter_is_case_insensitive() {
    let plans = vec![plan("vps-le-2-2-40", "vps", 300_000_000)];
    let availability = map(vec![(
        "vps-le-2-2-40",
        known(&[("GRA", "available"), ("BHS", "available")]),
    )]);
    let criteria = FilterCriteria::new().with_datacenters(dcs(&["gra"]));

    let report = build_report(&plans, &availability, &criteria, "EUR");

    assert!(!report.nothing_available);
    assert_eq!(report.rows[0].status, StockStatus::Available);
    // Stored case is kept
    assert_eq!(report.rows[0].datacenters, dcs(&["GRA"]));
}

#[test]
fn test_unmatched_datacenter_filter_shows_all_codes() {
    let set: AvailabilitySet = vec![
        DatacenterAvailability::new("GRA", "available"),
        DatacenterAvailability::new("BHS", "out-of-stock"),
    ]
    .into_iter()
    .collect();

    let (status, shown) = datacenter_view(&set, &dcs(&["waw"]));

    assert_eq!(status, StockStatus::OutOfStock);
    assert_eq!(shown, dcs(&["GRA", "BHS"]));
}

#[test]
fn test_filter_keeps_requested_order() {
    let set: AvailabilitySet = vec![
        DatacenterAvailability::new("GRA", "available"),
        DatacenterAvailability::new("SBG", "available"),
    ]
    .into_iter()
    .collect();

    let (status, shown) = datacenter_view(&set, &dcs(&["sbg", "gra"]));

    assert_eq!(status, StockStatus::Available);
    assert_eq!(shown, dcs(&["SBG", "GRA"]));
}

#[test]
fn test_repeated_datacenter_is_shown_once() {
    let set: AvailabilitySet = vec![
        DatacenterAvailability::new("GRA", "available"),
        DatacenterAvailability::new("BHS", "out-of-stock"),
    ]
    .into_iter()
    .collect();

    let (status, shown) = datacenter_view(&set, &dcs(&["gra", "GRA"]));
    assert_eq!(status, StockStatus::Available);
    assert_eq!(shown, dcs(&["GRA"]));

    let (status, shown) = datacenter_view(&set, &dcs(&["bhs", "BHS", "bhs"]));
    assert_eq!(status, StockStatus::OutOfStock);
    assert_eq!(shown, dcs(&["BHS"]));
}

#[test]
fn test_empty_set_is_out_of_stock_with_no_datacenters() {
    let plans = vec![plan("24ska01", "kimsufi", 1_099_000_000)];
    let availability = map(vec![("24ska01", PlanAvailability::Known(AvailabilitySet::default()))]);

    let report = build_report(&plans, &availability, &FilterCriteria::new(), "EUR");

    assert_eq!(report.rows[0].status, StockStatus::OutOfStock);
    assert!(report.rows[0].datacenters.is_empty());
}

#[test]
fn test_failed_lookup_is_unknown_not_out_of_stock() {
    let plans = vec![
        plan("vps-1", "vps", 300_000_000),
        plan("vps-2", "vps", 600_000_000),
    ];
    let availability = map(vec![(
        "vps-1",
        PlanAvailability::Unknown("HTTP 503".to_string()),
    )]);

    let report = build_report(&plans, &availability, &FilterCriteria::new(), "EUR");

    assert!(report.nothing_available);
    for row in &report.rows {
        assert_eq!(row.status, StockStatus::Unknown);
        assert_eq!(row.datacenters, dcs(&["various"]));
    }
}

#[test]
fn test_unknown_vps_row_uses_catalog_location() {
    let plans: Vec<VpsPlan> = vec![serde_json::from_str(
        r#"{"planCode": "vps-le-2-2-40",
            "pricings": [{"interval": 1, "intervalUnit": "month", "type": "rental", "price": 300000000}],
            "blobs": {"technical": {"datacenter": {"name": "gra", "countryCode": "fr"}}}}"#,
    )
    .expect("valid plan")];

    let report = build_report(&plans, &AvailabilityMap::new(), &FilterCriteria::new(), "EUR");

    assert_eq!(report.rows[0].status, StockStatus::Unknown);
    assert_eq!(report.rows[0].datacenters, dcs(&["gra"]));
    assert_eq!(report.rows[0].category_display, "VPS");
}

#[test]
fn test_plan_code_and_category_filters() {
    let plans = vec![
        plan("24ska01", "kimsufi", 1_099_000_000),
        plan("24sk10", "kimsufi", 1_599_000_000),
        plan("24sys011", "soyoustart", 2_999_000_000),
    ];
    let availability = map(vec![
        ("24ska01", known(&[("gra", "available")])),
        ("24sk10", known(&[("gra", "out-of-stock")])),
        ("24sys011", known(&[("rbx", "available")])),
    ]);

    let by_category = FilterCriteria::new().with_category(Some("kimsufi".to_string()));
    let report = build_report(&plans, &availability, &by_category, "EUR");
    let codes: Vec<_> = report.rows.iter().map(|r| r.plan_code.as_str()).collect();
    assert_eq!(codes, vec!["24ska01", "24sk10"]);

    // The display name is not a valid filter value
    let by_display = FilterCriteria::new().with_category(Some("Kimsufi".to_string()));
    assert!(build_report(&plans, &availability, &by_display, "EUR").rows.is_empty());

    let by_code = FilterCriteria::new().with_plan_code(Some("24sk10".to_string()));
    let report = build_report(&plans, &availability, &by_code, "EUR");
    assert_eq!(report.rows.len(), 1);
    assert!(report.nothing_available);
}

#[test]
fn test_empty_filter_values_mean_any() {
    let criteria = FilterCriteria::new()
        .with_category(Some(String::new()))
        .with_plan_code(Some(String::new()))
        .with_datacenters(dcs(&["", "  "]));
    assert_eq!(criteria, FilterCriteria::new());
}

#[test]
fn test_no_rows_means_nothing_available() {
    let plans: Vec<TestPlan> = Vec::new();
    let report = build_report(&plans, &AvailabilityMap::new(), &FilterCriteria::new(), "EUR");
    assert!(report.rows.is_empty());
    assert!(report.nothing_available);
    assert_eq!(report.available_count(), 0);
}

#[test]
fn test_rows_sorted_by_category_then_price() {
    let plans = vec![
        plan("sys-2", "soyoustart", 4_000_000_000),
        plan("ks-2", "kimsufi", 2_000_000_000),
        plan("sys-1", "soyoustart", 3_000_000_000),
        plan("ks-1", "kimsufi", 1_000_000_000),
    ];

    let report = build_report(&plans, &AvailabilityMap::new(), &FilterCriteria::new(), "EUR");

    let codes: Vec<_> = report.rows.iter().map(|r| r.plan_code.as_str()).collect();
    assert_eq!(codes, vec!["ks-1", "ks-2", "sys-1", "sys-2"]);
}

#[test]
fn test_sort_is_stable_for_duplicate_keys() {
    let plans = vec![
        plan("c", "kimsufi", 1_000_000_000),
        plan("a", "kimsufi", 1_000_000_000),
        plan("b", "kimsufi", 1_000_000_000),
    ];

    let report = build_report(&plans, &AvailabilityMap::new(), &FilterCriteria::new(), "EUR");

    let codes: Vec<_> = report.rows.iter().map(|r| r.plan_code.as_str()).collect();
    assert_eq!(codes, vec!["c", "a", "b"]);
}

#[test]
fn test_correlate_keeps_catalog_order() {
    let plans = vec![
        plan("b", "soyoustart", 2_000_000_000),
        plan("a", "kimsufi", 1_000_000_000),
    ];
    let report = correlate(&plans, &AvailabilityMap::new(), &FilterCriteria::new(), "EUR");
    let codes: Vec<_> = report.rows.iter().map(|r| r.plan_code.as_str()).collect();
    assert_eq!(codes, vec!["b", "a"]);
}

#[test]
fn test_check_plan_narrows_records() {
    let set: AvailabilitySet = vec![
        DatacenterAvailability::new("GRA", "out-of-stock")
            .with_sub_status("linuxStatus", "available"),
        DatacenterAvailability::new("BHS", "out-of-stock"),
    ]
    .into_iter()
    .collect();

    let all = check_plan("vps-1", &set, &[]);
    assert_eq!(all.records.len(), 2);
    assert!(!all.nothing_available);
    assert_eq!(all.sub_status_names(), vec!["linuxStatus"]);

    let bhs = check_plan("vps-1", &set, &dcs(&["bhs"]));
    assert_eq!(bhs.records.len(), 1);
    assert_eq!(bhs.records[0].datacenter, "BHS");
    assert!(bhs.nothing_available);
}

#[test]
fn test_datacenters_label() {
    assert_eq!(datacenters_label(&[]), "any datacenter");
    assert_eq!(datacenters_label(&dcs(&["gra", "rbx"])), "gra, rbx");
}

fn arb_plans() -> impl Strategy<Value = Vec<TestPlan>> {
    prop::collection::vec(
        (
            prop::sample::select(vec!["kimsufi", "soyoustart", "rise", "vps-2025"]),
            0i64..5,
        ),
        0..12,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (category, price))| plan(&format!("plan-{}", i), category, price * 100_000_000))
            .collect()
    })
}

fn arb_availability(plans: &[TestPlan]) -> AvailabilityMap {
    plans
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 != 2)
        .map(|(i, p)| {
            let status = if i % 2 == 0 { "available" } else { "out-of-stock" };
            (p.code.clone(), known(&[("GRA", status), ("bhs", "out-of-stock")]))
        })
        .collect()
}

proptest! {
    #[test]
    fn test_report_is_idempotent(plans in arb_plans()) {
        let availability = arb_availability(&plans);
        let criteria = FilterCriteria::new().with_datacenters(dcs(&["gra"]));
        let first = build_report(&plans, &availability, &criteria, "EUR");
        let second = build_report(&plans, &availability, &criteria, "EUR");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_sorted_rows_respect_keys(plans in arb_plans()) {
        let report = build_report(&plans, &AvailabilityMap::new(), &FilterCriteria::new(), "EUR");
        for pair in report.rows.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.category_display <= b.category_display);
            if a.category_display == b.category_display {
                prop_assert!(a.price <= b.price);
                if a.price == b.price {
                    // Codes are numbered in catalog order
                    let index = |code: &str| code.trim_start_matches("plan-").parse::<usize>().unwrap();
                    prop_assert!(index(&a.plan_code) < index(&b.plan_code));
                }
            }
        }
    }

    #[test]
    fn test_verdict_matches_rows(plans in arb_plans()) {
        let availability = arb_availability(&plans);
        let report = build_report(&plans, &availability, &FilterCriteria::new(), "EUR");
        prop_assert_eq!(report.nothing_available, report.available_count() == 0);
    }
}
