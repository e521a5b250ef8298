use anyhow::Result;
use tracing::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal::ctrl_c;
use dock_checkin::config::Settings;
use dock_checkin::controllers::ControllerResponse;
use dock_checkin::init::{initialize, AppContext};
use dock_checkin::utils::logging;

/// The main entry point of the dock check-in console
#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Application error: {}", e);
        std::process::exit(1);
    }
}


/// The core logic of the dock check-in console
///
/// This asynchronous function performs the following steps:
/// 1. Loads application settings from configuration files
/// 2. Initializes the logging system
/// 3. Builds the state manager, controller and session monitor
/// 4. Spawns the command processor and the session monitor
/// 5. Reads operator commands from stdin until `quit`, end of input or Ctrl-C
///
/// # Returns
///
/// * `Ok(())` if the application runs successfully and shuts down gracefully
/// * `Err(anyhow::Error)` if any errors occur during initialization
async fn run() -> Result<()> {
    let settings = Settings::new()?;
    let _guard = logging::init_logger(&settings.logging)?;

    let AppContext {
        settings,
        state_manager,
        command_processor,
        mut controller,
        session_monitor,
        mut prompt_receiver,
    } = initialize(settings)?;
    info!("Starting dock check-in with {} sections", settings.section_definitions().len());

    let processor_handle = tokio::spawn(async move {
        if let Err(e) = command_processor.run().await {
            error!("Command processor error: {:?}", e);
        }
    });
    let monitor_handle = tokio::spawn(async move {
        session_monitor.run().await;
    });

    println!("Dock Check-In System. Type 'help' for commands.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    info!("End of input");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match controller.handle_line(&line).await {
                    Ok(ControllerResponse::Render(screen)) => println!("{}", screen),
                    Ok(ControllerResponse::Quit) => break,
                    Err(e) => println!("{}", e),
                }
            }
            Some(prompt) = prompt_receiver.recv() => {
                println!("{}", prompt);
            }
            _ = ctrl_c() => {
                info!("Received shutdown signal. Shutting down gracefully...");
                break;
            }
        }
    }

    monitor_handle.abort();
    drop(controller);
    drop(state_manager);
    if let Err(e) = processor_handle.await {
        error!("Command processor task failed: {:?}", e);
    }
    Ok(())
}
