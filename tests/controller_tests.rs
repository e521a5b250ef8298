use std::sync::Arc;
use parking_lot::Mutex;
use tempfile::TempDir;
use dock_checkin::auth::{AuthProvider, SessionWatchdog, StaticCredentialProvider};
use dock_checkin::config::{DelaySettings, ExportSettings, Settings, UserCredential};
use dock_checkin::controllers::{CheckInController, ConsoleCommand, ControllerResponse};
use dock_checkin::errors::CheckInError;
use dock_checkin::models::{CheckInStatus, DockStatus, FormField};
use dock_checkin::state_management::{AppState, CheckInStateManager};
use dock_checkin::views::ActiveView;

fn test_settings(export_dir: &TempDir) -> Settings {
    Settings {
        delays: DelaySettings { login_ms: 0, submit_ms: 0 },
        users: vec![UserCredential::new("admin", "shamrock2025")],
        export: ExportSettings {
            path: export_dir.path().to_path_buf(),
            file_name: "checkin-data-export.json".to_string(),
        },
        ..Settings::default()
    }
}

fn setup(settings: &Settings) -> (CheckInController, CheckInStateManager) {
    let manager = CheckInStateManager::spawn(AppState::from_settings(settings));
    let auth: Arc<dyn AuthProvider> = Arc::new(StaticCredentialProvider::from_settings(settings));
    let watchdog = Arc::new(Mutex::new(SessionWatchdog::new(&settings.session)));
    let controller = CheckInController::new(settings, manager.clone(), auth, watchdog);
    (controller, manager)
}

fn screen(response: ControllerResponse) -> String {
    match response {
        ControllerResponse::Render(text) => text,
        ControllerResponse::Quit => panic!("unexpected quit"),
    }
}

async fn logged_in(settings: &Settings) -> (CheckInController, CheckInStateManager) {
    let (mut controller, manager) = setup(settings);
    controller.handle_line("login admin shamrock2025").await.unwrap();
    (controller, manager)
}

async fn fill_form(controller: &mut CheckInController, dock: &str) {
    for line in [
        "set driverName Jane Doe".to_string(),
        "set trailerNumber TRL-88".to_string(),
        "set company North Freight".to_string(),
        format!("set assignedDock {}", dock),
    ] {
        controller.handle_line(&line).await.unwrap();
    }
}

#[tokio::test]
async fn test_login_rejects_bad_password() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _) = setup(&test_settings(&dir));

    let err = controller.handle_line("login admin wrong").await.unwrap_err();

    assert_eq!(err.to_string(), "Invalid username or password");
    assert!(controller.operator().is_none());
}

#[tokio::test]
async fn test_commands_require_login() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _) = setup(&test_settings(&dir));

    let err = controller.handle_line("view dashboard").await.unwrap_err();
    assert!(matches!(err, CheckInError::NotAuthenticated));

    assert!(screen(controller.handle_line("help").await.unwrap()).contains("Commands:"));
    assert_eq!(controller.handle_line("quit").await.unwrap(), ControllerResponse::Quit);
}

#[tokio::test]
async fn test_login_shows_operator() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _) = setup(&test_settings(&dir));

    let text = screen(controller.handle_line("login admin shamrock2025").await.unwrap());

    assert!(text.starts_with("Logged in as: admin"));
    assert!(text.contains("== Driver Check-In =="));
    assert_eq!(controller.operator().unwrap().as_str(), "admin");
}

#[tokio::test]
async fn test_submit_commits_and_resets_form() {
    let dir = TempDir::new().unwrap();
    let (mut controller, manager) = logged_in(&test_settings(&dir)).await;
    fill_form(&mut controller, "Dock 205").await;
    assert_eq!(controller.form().get(FormField::DriverName), "Jane Doe");

    let text = screen(controller.handle_line("submit").await.unwrap());

    assert!(text.contains("Welcome, Jane Doe! You've been assigned to Dock 205"));
    assert!(text.contains("Processed by: admin"));
    assert!(controller.form().driver_name.is_empty());
    assert!(!controller.form().arrival_time.is_empty());

    let state = manager.snapshot().await.unwrap();
    assert_eq!(state.registry().find("Dock 205").unwrap().status, DockStatus::Occupied);
    let record = state.ledger().find_active_by_dock("Dock 205").unwrap();
    assert_eq!(record.truck_number, "N/A");
    assert_eq!(record.checked_in_by.as_deref(), Some("admin"));
}

#[tokio::test]
async fn test_submit_refused_while_incomplete() {
    let dir = TempDir::new().unwrap();
    let (mut controller, manager) = logged_in(&test_settings(&dir)).await;
    fill_form(&mut controller, "Dock 205").await;
    controller.handle_line("set company").await.unwrap();

    let err = controller.handle_line("submit").await.unwrap_err();

    assert!(matches!(err, CheckInError::ValidationError(_)));
    assert_eq!(controller.form().driver_name, "Jane Doe");
    assert!(manager.snapshot().await.unwrap().ledger().is_empty());
}

#[tokio::test]
async fn test_dashboard_actions_and_views() {
    let dir = TempDir::new().unwrap();
    let (mut controller, manager) = logged_in(&test_settings(&dir)).await;
    fill_form(&mut controller, "Dock 210").await;
    controller.handle_line("submit").await.unwrap();
    let id = manager.snapshot().await.unwrap().ledger().records()[0].id;

    let text = screen(controller.handle_line("view dashboard").await.unwrap());
    assert_eq!(controller.active_view(), ActiveView::Dashboard);
    assert!(text.contains("Active check-ins: 1"));

    controller.handle_line(&format!("reassign {} Dock 220", id)).await.unwrap();
    controller.handle_line(&format!("checkout {}", id)).await.unwrap();

    let state = manager.snapshot().await.unwrap();
    let record = state.ledger().find_by_id(id).unwrap();
    assert_eq!(record.status, CheckInStatus::CheckedOut);
    assert_eq!(record.dock, "Dock 220");
    assert_eq!(state.registry().count_by_status(DockStatus::Occupied), 0);

    let admin = screen(controller.handle_line("view admin").await.unwrap());
    assert!(admin.contains("Jane Doe checked out from Dock 220 by admin"));
}

#[tokio::test]
async fn test_maintenance_on_occupied_dock_is_refused() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _) = logged_in(&test_settings(&dir)).await;
    fill_form(&mut controller, "Dock 201").await;
    controller.handle_line("submit").await.unwrap();

    let err = controller.handle_line("maintenance Dock 201").await.unwrap_err();

    assert!(matches!(err, CheckInError::DockOccupied(ref dock) if dock == "Dock 201"));
}

#[tokio::test]
async fn test_export_writes_snapshot() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _) = logged_in(&test_settings(&dir)).await;
    fill_form(&mut controller, "Dock 230").await;
    controller.handle_line("submit").await.unwrap();

    let text = screen(controller.handle_line("export").await.unwrap());
    assert!(text.starts_with("Data exported to"));

    let raw = std::fs::read_to_string(dir.path().join("checkin-data-export.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["docks"].as_array().unwrap().len(), 43);
    assert_eq!(json["checkIns"][0]["status"], "Checked In");
    assert_eq!(json["checkIns"][0]["driverName"], "Jane Doe");
    assert_eq!(json["notifications"].as_array().unwrap().len(), 1);
    let dock = json["docks"].as_array().unwrap().iter()
        .find(|dock| dock["name"] == "Dock 230")
        .unwrap();
    assert_eq!(dock["status"], "occupied");
    assert_eq!(dock["currentDriver"], "Jane Doe");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let dir = TempDir::new().unwrap();
    let (mut controller, _) = logged_in(&test_settings(&dir)).await;

    assert_eq!(screen(controller.handle_line("logout").await.unwrap()), "Logged out");
    assert!(matches!(controller.handle_line("submit").await, Err(CheckInError::NotAuthenticated)));
}

#[test]
fn test_console_parsing() {
    assert_eq!(
        "login admin shamrock2025".parse::<ConsoleCommand>().unwrap(),
        ConsoleCommand::Login { username: "admin".to_string(), password: "shamrock2025".to_string() }
    );
    assert_eq!(
        "set driver_name  Mary Ann Smith ".parse::<ConsoleCommand>().unwrap(),
        ConsoleCommand::Set(FormField::DriverName, "Mary Ann Smith".to_string())
    );
    assert_eq!(
        "reassign 3 Dock 240".parse::<ConsoleCommand>().unwrap(),
        ConsoleCommand::Reassign(3, "Dock 240".to_string())
    );
    assert_eq!("VIEW Admin".parse::<ConsoleCommand>().unwrap(), ConsoleCommand::View(ActiveView::Admin));
    assert_eq!("?".parse::<ConsoleCommand>().unwrap(), ConsoleCommand::Help);

    for bad in ["checkout abc", "dance", "maintenance", "login", "set color red"] {
        assert!(bad.parse::<ConsoleCommand>().is_err(), "{} should not parse", bad);
    }
}
