use dock_checkin::errors::CheckInError;
use dock_checkin::models::{CheckInForm, CheckInStatus, DockStatus, Operator, DEFAULT_SECTIONS};
use dock_checkin::state_management::{AppState, CheckInStateManager};

fn form(driver: &str, dock: &str) -> CheckInForm {
    CheckInForm {
        driver_name: driver.to_string(),
        trailer_number: "TRL-77".to_string(),
        company: "North Freight".to_string(),
        assigned_dock: dock.to_string(),
        arrival_time: "07:45".to_string(),
        ..CheckInForm::default()
    }
}

#[tokio::test]
async fn test_operations_round_trip_through_processor() {
    let manager = CheckInStateManager::spawn(AppState::new(&DEFAULT_SECTIONS));
    let admin = Operator::new("admin");

    let id = manager.check_in(form("Jane Doe", "Dock 215"), admin.clone()).await.unwrap();
    manager.reassign(id, "Dock 220".to_string(), admin.clone()).await.unwrap();
    manager.toggle_maintenance("Dock 215".to_string()).await.unwrap();

    let state = manager.snapshot().await.unwrap();
    assert_eq!(state.registry().find("Dock 215").unwrap().status, DockStatus::Maintenance);
    assert_eq!(state.registry().find("Dock 220").unwrap().current_driver, "Jane Doe");
    assert_eq!(state.feed().len(), 2);

    manager.check_out(id, admin).await.unwrap();
    let state = manager.snapshot().await.unwrap();
    assert_eq!(state.ledger().find_by_id(id).unwrap().status, CheckInStatus::CheckedOut);
    assert_eq!(state.registry().find("Dock 220").unwrap().status, DockStatus::Available);
}

#[tokio::test]
async fn test_rejections_reach_the_caller() {
    let manager = CheckInStateManager::spawn(AppState::new(&DEFAULT_SECTIONS));
    let admin = Operator::new("admin");
    manager.check_in(form("Jane Doe", "Dock 201"), admin.clone()).await.unwrap();

    let duplicate = manager.check_in(form("Bob Ray", "Dock 201"), admin.clone()).await;
    assert!(matches!(duplicate, Err(CheckInError::DockUnavailable { .. })));

    let occupied = manager.toggle_maintenance("Dock 201".to_string()).await;
    assert!(matches!(occupied, Err(CheckInError::DockOccupied(_))));

    manager.check_out(404, admin).await.unwrap();
    assert_eq!(manager.snapshot().await.unwrap().ledger().len(), 1);
}

#[tokio::test]
async fn test_clones_share_one_state() {
    let manager = CheckInStateManager::spawn(AppState::new(&DEFAULT_SECTIONS));
    let other = manager.clone();

    let handles: Vec<_> = (0..5u32)
        .map(|i| {
            let manager = manager.clone();
            tokio::spawn(async move {
                manager.check_in(form(&format!("Driver {}", i), "Dock 233"), Operator::new("admin")).await
            })
        })
        .collect();
    let mut accepted = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 1);
    let state = other.snapshot().await.unwrap();
    assert_eq!(state.ledger().active().count(), 1);
    assert_eq!(state.registry().count_by_status(DockStatus::Occupied), 1);
}

#[tokio::test]
async fn test_admin_operations() {
    let manager = CheckInStateManager::spawn(AppState::new(&DEFAULT_SECTIONS));
    let admin = Operator::new("admin");
    manager.check_in(form("Jane Doe", "Dock 236"), admin.clone()).await.unwrap();
    manager.toggle_maintenance("Dock 237".to_string()).await.unwrap();

    manager.clear_maintenance().await.unwrap();
    let state = manager.snapshot().await.unwrap();
    assert_eq!(state.registry().count_by_status(DockStatus::Maintenance), 0);

    manager.clear_all_docks(admin).await.unwrap();
    manager.clear_history().await.unwrap();
    let state = manager.snapshot().await.unwrap();
    assert!(state.ledger().is_empty());
    assert!(state.feed().is_empty());
    assert_eq!(state.registry().available_docks().len(), 43);
}
