//! List every thermostat, camera and smoke/CO alarm on an account
//!
//! Needs `NEST_ACCESS_TOKEN`; set `NEST_API_URL` to point at another server
//! and `NEST_LOG_MODE=development` to see request logs.
//!
//! Run with: cargo run -p nest-api --example list_devices

use nest_api::logging::init_logging_from_env;
use nest_api::{Config, NestClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging_from_env()?;

    let config = Config::from_env()?;
    let client = NestClient::from_config(&config);
    println!("Using {}", client.base_url());

    println!("\nThermostats");
    println!("===========");
    let thermostats = client.thermostats()?;
    if thermostats.is_empty() {
        println!("   (none)");
    }
    for thermostat in &thermostats {
        println!(
            "   {} [{}] {} {}{} ({})",
            thermostat.name_long,
            thermostat.device_id,
            thermostat.hvac_mode,
            if thermostat.temperature_scale == "C" {
                thermostat.target_temperature_c.to_string()
            } else {
                thermostat.target_temperature_f.to_string()
            },
            thermostat.temperature_scale,
            if thermostat.is_online { "online" } else { "offline" },
        );
    }

    println!("\nCameras");
    println!("=======");
    let cameras = client.cameras()?;
    if cameras.is_empty() {
        println!("   (none)");
    }
    for camera in &cameras {
        println!(
            "   {} [{}] streaming: {}",
            camera.name_long, camera.device_id, camera.is_streaming
        );
    }

    println!("\nSmoke/CO Alarms");
    println!("===============");
    let alarms = client.smoke_co_alarms()?;
    if alarms.is_empty() {
        println!("   (none)");
    }
    for alarm in &alarms {
        println!(
            "   {} [{}] battery: {}, smoke: {}, co: {}",
            alarm.name_long,
            alarm.device_id,
            alarm.battery_health,
            alarm.smoke_alarm_state,
            alarm.co_alarm_state
        );
    }

    Ok(())
}
