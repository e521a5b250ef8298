use std::sync::Arc;
use std::time::{Duration, Instant};
use parking_lot::Mutex;
use tokio::sync::mpsc;
use dock_checkin::auth::{AuthProvider, SessionWatchdog, StaticCredentialProvider, WatchdogStatus};
use dock_checkin::config::{SessionSettings, UserCredential};
use dock_checkin::errors::CheckInError;
use dock_checkin::models::Operator;
use dock_checkin::monitoring::{inactivity_prompt, SessionMonitor};

fn demo_users() -> Vec<UserCredential> {
    vec![
        UserCredential::new("admin", "shamrock2025"),
        UserCredential::new("supervisor", "foods123"),
        UserCredential::new("manager", "driver456"),
    ]
}

fn session_settings() -> SessionSettings {
    SessionSettings { timeout_secs: 1800, warning_lead_secs: 60, check_interval_secs: 10 }
}

#[tokio::test]
async fn test_known_users_authenticate() {
    let provider = StaticCredentialProvider::new(&demo_users());

    assert_eq!(provider.verify("admin", "shamrock2025").await.unwrap(), Operator::new("admin"));
    assert_eq!(provider.verify("manager", "driver456").await.unwrap().as_str(), "manager");
}

#[tokio::test]
async fn test_bad_credentials_are_rejected() {
    let provider = StaticCredentialProvider::new(&demo_users());

    for (username, password) in [("admin", "foods123"), ("ADMIN", "shamrock2025"), ("ghost", ""), ("admin", "")] {
        let err = provider.verify(username, password).await.unwrap_err();
        assert!(matches!(err, CheckInError::AuthenticationFailed));
        assert_eq!(err.to_string(), "Invalid username or password");
    }
}

#[tokio::test]
async fn test_login_delay_is_applied() {
    let provider = StaticCredentialProvider::new(&demo_users()).with_delay(Duration::from_millis(50));
    let started = Instant::now();

    provider.verify("supervisor", "foods123").await.unwrap();

    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[test]
fn test_watchdog_without_session() {
    let mut watchdog = SessionWatchdog::new(&session_settings());
    assert_eq!(watchdog.check(Instant::now()), WatchdogStatus::NoSession);
    assert!(watchdog.operator().is_none());
    assert!(watchdog.logout().is_none());
}

#[test]
fn test_watchdog_warns_one_minute_before_timeout() {
    let mut watchdog = SessionWatchdog::new(&session_settings());
    watchdog.login(Operator::new("admin"));
    let now = Instant::now();

    assert_eq!(watchdog.check(now + Duration::from_secs(28 * 60)), WatchdogStatus::Active);
    assert_eq!(watchdog.check(now + Duration::from_secs(29 * 60 + 5)), WatchdogStatus::ShowWarning);
    assert!(watchdog.is_warning_shown());
    assert_eq!(watchdog.check(now + Duration::from_secs(40 * 60)), WatchdogStatus::WarningShown);
    assert_eq!(watchdog.operator(), Some(&Operator::new("admin")));
}

#[test]
fn test_continue_dismisses_warning_and_logout_clears_session() {
    let mut watchdog = SessionWatchdog::new(&session_settings());
    watchdog.login(Operator::new("supervisor"));
    let later = Instant::now() + Duration::from_secs(30 * 60);
    assert_eq!(watchdog.check(later), WatchdogStatus::ShowWarning);

    watchdog.continue_session();
    assert!(!watchdog.is_warning_shown());
    assert_eq!(watchdog.check(Instant::now()), WatchdogStatus::Active);

    assert_eq!(watchdog.logout(), Some(Operator::new("supervisor")));
    assert_eq!(watchdog.check(later), WatchdogStatus::NoSession);
}

#[tokio::test]
async fn test_session_monitor_sends_prompt_once() {
    let watchdog = Arc::new(Mutex::new(SessionWatchdog::new(&session_settings())));
    watchdog.lock().login(Operator::new("admin"));
    let (tx, mut rx) = mpsc::channel(4);
    let monitor = SessionMonitor::new(Arc::clone(&watchdog), &session_settings(), tx);
    let idle = Instant::now() + Duration::from_secs(31 * 60);

    assert!(monitor.check_once(Instant::now()).await);
    assert!(rx.try_recv().is_err());

    assert!(monitor.check_once(idle).await);
    assert!(monitor.check_once(idle).await);
    assert!(rx.try_recv().unwrap().contains("expire in 1 minute"));
    assert!(rx.try_recv().is_err());
    assert!(watchdog.lock().operator().is_some());
}

#[tokio::test]
async fn test_prompt_follows_configured_warning_lead() {
    let settings = SessionSettings { timeout_secs: 600, warning_lead_secs: 300, check_interval_secs: 5 };
    let watchdog = Arc::new(Mutex::new(SessionWatchdog::new(&settings)));
    watchdog.lock().login(Operator::new("manager"));
    let (tx, mut rx) = mpsc::channel(4);
    let monitor = SessionMonitor::new(Arc::clone(&watchdog), &settings, tx);

    assert!(monitor.check_once(Instant::now() + Duration::from_secs(301)).await);

    let prompt = rx.try_recv().unwrap();
    assert!(prompt.starts_with("Your session will expire in 5 minutes due to inactivity."));
}

#[test]
fn test_inactivity_prompt_wording() {
    assert!(inactivity_prompt(Duration::from_secs(60)).contains("in 1 minute due"));
    assert!(inactivity_prompt(Duration::from_secs(120)).contains("in 2 minutes due"));
    assert!(inactivity_prompt(Duration::from_secs(90)).contains("in 90 seconds due"));
    assert!(inactivity_prompt(Duration::from_secs(1)).contains("in 1 second due"));
}
