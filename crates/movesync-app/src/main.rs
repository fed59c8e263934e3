use anyhow::Result;
use movesync_app::{Dashboard, ForecastSlot, SettingsField};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    movesync_core::init()?;
    let (config, _validation) = movesync_core::Config::load_validated()?;

    let dashboard = Dashboard::new(&config)?;
    tracing::info!("MoveSync dashboard started");

    // Route from CLI args: current destination boarding arrival.
    // Entered through the dialog flow so committed settings stay the single
    // write path.
    let mut args = std::env::args().skip(1);
    let current = args.next().unwrap_or_else(|| "Funabashi".to_string());
    let destination = args.next().unwrap_or_else(|| "Tokyo".to_string());
    let boarding = args.next().unwrap_or_else(|| "西船橋".to_string());
    let arrival = args.next().unwrap_or_else(|| "大手町".to_string());

    dashboard.open_settings();
    dashboard.edit_setting(SettingsField::CurrentLocation, current);
    dashboard.edit_setting(SettingsField::Destination, destination);
    dashboard.edit_setting(SettingsField::BoardingStation, boarding);
    dashboard.edit_setting(SettingsField::ArrivalStation, arrival);
    dashboard.save_settings();

    // Schedule loads on mount; weather needs an explicit refresh
    dashboard.start().await;
    dashboard.refresh_weather().await;

    render(&dashboard);
    Ok(())
}

/// Stand-in rendering surface: print the dashboard to stdout.
fn render(dashboard: &Dashboard) {
    let settings = dashboard.committed_settings();
    let state = dashboard.display();

    println!("Move Sync\n");

    println!("天気情報");
    render_slot(
        &format!("現在地の天気: {}", settings.current_location),
        &state.current_weather,
    );
    render_slot(
        &format!("目的地の天気: {}", settings.destination),
        &state.destination_weather,
    );

    println!("\n電車情報");
    println!("乗車駅: {}", settings.boarding_station);
    println!("降車駅: {}", settings.arrival_station);
    println!("{}", settings.route_label());

    if state.departures.is_empty() {
        println!("  データがありません。");
    }
    for train in &state.departures {
        println!(
            "  {} → {}  {}方面  [{}] {}",
            train.departure_time,
            train.arrival_time,
            train.destination,
            train.delay_category().style_name(),
            train.delay_status,
        );
    }
}

fn render_slot(heading: &str, slot: &ForecastSlot) {
    println!("{heading}");
    match slot {
        ForecastSlot::Error(message) => println!("  {message}"),
        ForecastSlot::Forecast(entries) if !entries.is_empty() => {
            for entry in entries {
                let description = entry
                    .condition()
                    .map(|c| c.description.as_str())
                    .unwrap_or("-");
                println!(
                    "  {}  {}  {}℃  湿度: {}%",
                    entry.time_of_day(),
                    description,
                    entry.rounded_temp(),
                    entry.main.humidity,
                );
            }
        }
        _ => println!("  データがありません。"),
    }
}
