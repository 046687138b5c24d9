use anyhow::{Context, Result};
use botstat::api::StatsClient;
use botstat::ui::{run_tui, AppState};
use clap::Parser;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "botstat")]
#[command(about = "Bot activity dashboard - terminal client for speak/sign-in statistics")]
#[command(version)]
struct Args {
    /// Statistics endpoint URL
    #[arg(short, long)]
    url: String,

    /// Bot identifier to query
    #[arg(short, long)]
    botid: String,

    /// Chat/channel scope, e.g. "g#220100"
    #[arg(short, long)]
    target: String,

    /// Refresh interval in seconds
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(u64).range(5..=600))]
    refresh: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let client = StatsClient::new(&args.url, &args.botid, &args.target)
        .context("Failed to initialize statistics client")?;

    // Create shared application state; its queue is seeded with the first
    // round of fetches.
    let app_state = Arc::new(Mutex::new(AppState::new(
        args.botid.clone(),
        args.target.clone(),
    )));

    // Run TUI in a separate thread; fetching stays on the main thread
    let tui_state = Arc::clone(&app_state);
    let tui_handle = std::thread::spawn(move || run_tui(tui_state));

    let mut last_refresh = std::time::Instant::now();

    loop {
        // Check if TUI thread has finished (user quit)
        if tui_handle.is_finished() {
            break;
        }

        // Periodic refresh: counters, recompute, then the chart for
        // whichever range is currently selected
        if last_refresh.elapsed() >= Duration::from_secs(args.refresh) {
            last_refresh = std::time::Instant::now();
            let mut state = app_state.lock().unwrap();
            let range = state.selected_range;
            state.queue.schedule_refresh(range);
        }

        // Drain one job per pass. This thread is the only request issuer,
        // so fetches never overlap.
        let job = { app_state.lock().unwrap().queue.pop() };
        if let Some(job) = job {
            match client.fetch(job) {
                Ok(data) => {
                    app_state.lock().unwrap().apply(data);
                }
                Err(e) => {
                    if e.is_unsuccessful() {
                        log::debug!("Server declined {:?}", job);
                    } else {
                        log::warn!("Fetch {:?} failed: {}", job, e);
                    }
                    app_state.lock().unwrap().record_failure(job, &e);
                }
            }
        }

        // Small sleep to avoid busy waiting
        std::thread::sleep(Duration::from_millis(50));
    }

    // Wait for TUI thread to finish
    tui_handle.join().expect("TUI thread panicked")?;

    Ok(())
}
