//! Integration tests: fleet fixture -> repository -> dispatch service

use std::path::PathBuf;

use dispatch_app::app::DispatchService;
use dispatch_app::config::Config;
use dispatch_app::repository::{open_configured_fleet_repo, open_fleet_repo};
use dispatch_domain::model::TripParameters;
use dispatch_domain::service::{generate_assignment_report, FleetQuery, Violation};
use dispatch_infra::persistence::FileFleetRepository;
use dispatch_types::{LicenseLevel, RouteType, SpeedModel, TruckClass};
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("fixtures")
        .join("fleet.toml")
}

fn service(config: &Config) -> DispatchService<FileFleetRepository> {
    let repo = open_fleet_repo(fixture_path()).expect("fixture fleet should load");
    DispatchService::from_config(repo, config)
}

#[test]
fn test_check_planned_assignments() {
    let svc = service(&Config::default());
    let results = svc.check_planned().unwrap();
    assert_eq!(results.len(), 5);

    let valid: Vec<bool> = results.iter().map(|r| r.is_valid).collect();
    assert_eq!(valid, vec![true, false, true, false, false]);

    let kinds: Vec<&str> = results[1].violations.iter().map(Violation::kind).collect();
    assert_eq!(kinds, vec!["license_below_truck_class", "hazmat_requires_class_a"]);

    let kinds: Vec<&str> = results[3].violations.iter().map(Violation::kind).collect();
    assert_eq!(
        kinds,
        vec!["driver_unavailable", "truck_in_maintenance", "insufficient_experience"]
    );

    assert_eq!(results[4].violations, vec![Violation::TruckRequired]);

    let report = generate_assignment_report(&results);
    assert!(report.contains("Invalid:             3"));
    assert!(report.contains("Invalid rate:        60.0%"));
}

#[test]
fn test_demo_thresholds_from_config() {
    let config = Config {
        long_haul_min_years: Some(1),
        hazmat_min_years: Some(2),
        ..Config::default()
    };
    let svc = service(&config);
    // d-001 has 7 years, so the stricter thresholds change nothing for it
    assert!(svc
        .validate_by_ids(Some("d-001"), Some("T-104"), Some("r-40"))
        .unwrap()
        .is_empty());

    let strict = Config {
        long_haul_min_years: Some(10),
        ..Config::default()
    };
    let violations = service(&strict)
        .validate_by_ids(Some("d-001"), Some("T-104"), Some("r-40"))
        .unwrap();
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].to_string(),
        "Long Haul routes require at least 10 years of experience (Maria Lopez has 7)"
    );
}

#[test]
fn test_quote_route_matches_direct_calculation() {
    let svc = service(&Config::default());
    let quote = svc.quote_route("r-10", "d-001", 28.0).unwrap();
    let direct = svc
        .quote(&TripParameters::new(500.0, 28.0, 7.0, RouteType::Standard))
        .unwrap();
    assert_eq!(quote.breakdown, direct);
    assert_eq!(quote.route_name, "Depot loop");
}

#[test]
fn test_whole_hour_config() {
    let config = Config {
        speed_model: SpeedModel::WholeHours,
        average_speed_mph: 50.0,
        ..Config::default()
    };
    let quote = service(&config).quote_route("r-30", "d-002", 30.0).unwrap();
    // 260 mi / 50 mph = 5.2h -> 6 billed hours
    assert_eq!(quote.breakdown.drive_time_hours, 6.0);
    assert!((quote.breakdown.base_pay - 180.0).abs() < 1e-9);
    assert_eq!(quote.breakdown.route_bonus, 300.0);
}

#[test]
fn test_listings() {
    let svc = service(&Config::default());

    let page = svc
        .list_drivers(&FleetQuery::default().available_only(), Some(LicenseLevel::ClassA))
        .unwrap();
    let ids: Vec<&str> = page.items.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["d-001"]);

    let page = svc
        .list_trucks(&FleetQuery::default().available_only(), Some(TruckClass::Heavy))
        .unwrap();
    assert_eq!(page.total, 1);

    let page = svc.list_routes(&FleetQuery::default().page(2, 3)).unwrap();
    assert_eq!(page.total, 4);
    assert_eq!(page.total_pages, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "r-40");
}

#[test]
fn test_fleet_path_from_config_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let config = Config {
        fleet_path: Some(fixture_path()),
        ..Config::default()
    };
    config.save_to(&config_path).unwrap();

    let loaded = Config::load_from(&config_path).unwrap();
    let repo = open_configured_fleet_repo(&loaded, None).unwrap();
    let svc = DispatchService::from_config(repo, &loaded);
    assert_eq!(svc.list_drivers(&FleetQuery::default(), None).unwrap().total, 4);
}
