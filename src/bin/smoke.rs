//! External smoke test for a running airpulse gateway.
//!
//! Exercises the HTTP surface the way a post-deploy check would: health, the
//! city and coordinate flows, and the two client-error paths. Exits non-zero
//! if any check fails.

use clap::Parser;
use serde_json::Value;
use std::time::Duration;

use airpulse::location::CUSTOM_LOCATION;
use airpulse::upstream::urlencode;

/// Smoke-test a running airpulse gateway over HTTP.
///
/// Examples:
///   smoke
///   smoke --base-url http://localhost:8001/api
///   smoke --city London --city Tokyo
#[derive(Parser)]
#[command(name = "smoke", version, about, long_about = None)]
struct Cli {
    /// API base URL of the gateway under test.
    #[arg(long, default_value = "http://localhost:8001/api")]
    base_url: String,

    /// City to query (repeatable). Defaults to a small world tour.
    #[arg(long = "city")]
    cities: Vec<String>,

    /// Seconds to pause between city queries (upstream rate limits).
    #[arg(long, default_value_t = 1)]
    pause_secs: u64,
}

const DEFAULT_CITIES: &[&str] = &["New York", "London", "Tokyo", "Sydney", "Paris"];

struct Tally {
    run: u32,
    passed: u32,
}

impl Tally {
    fn record(&mut self, name: &str, passed: bool, note: &str) {
        self.run += 1;
        if passed {
            self.passed += 1;
            eprintln!("  ok   {} {}", name, note);
        } else {
            eprintln!("  FAIL {} {}", name, note);
        }
    }
}

/// GET a URL, returning (status, parsed body) even for error statuses.
fn get(url: &str) -> Result<(u16, Value), String> {
    match ureq::get(url).call() {
        Ok(res) => {
            let status = res.status();
            let body = res.into_json().unwrap_or(Value::Null);
            Ok((status, body))
        }
        Err(ureq::Error::Status(code, res)) => Ok((code, res.into_json().unwrap_or(Value::Null))),
        Err(e) => Err(e.to_string()),
    }
}

fn check_health(base: &str, tally: &mut Tally) {
    match get(&format!("{}/health", base)) {
        Ok((200, body)) if body["status"] == "ok" => tally.record("health", true, ""),
        Ok((status, _)) => tally.record("health", false, &format!("(status {})", status)),
        Err(e) => tally.record("health", false, &format!("({})", e)),
    }
}

/// A 200 report must carry the location metadata and at least one pollution
/// sample with numeric components.
fn verify_report(body: &Value) -> Result<String, String> {
    let city = body["city"].as_str().ok_or("missing city")?;
    body["coordinates"]["lat"].as_f64().ok_or("missing coordinates.lat")?;
    body["coordinates"]["lon"].as_f64().ok_or("missing coordinates.lon")?;

    let sample = &body["current"]["list"][0];
    let pm2_5 = sample["components"]["pm2_5"].as_f64().ok_or("missing pm2_5")?;
    let pm10 = sample["components"]["pm10"].as_f64().ok_or("missing pm10")?;
    let aqi = sample["main"]["aqi"].as_i64().ok_or("missing aqi")?;

    if !body["forecast"].is_object() {
        return Err("missing forecast".into());
    }

    Ok(format!(
        "({}: AQI {}, PM2.5 {} ug/m3, PM10 {} ug/m3)",
        city, aqi, pm2_5, pm10
    ))
}

fn check_city(base: &str, city: &str, tally: &mut Tally) {
    let name = format!("air-quality city={}", city);
    let url = format!("{}/air-quality?city={}", base, urlencode(city));
    match get(&url) {
        Ok((200, body)) => match verify_report(&body) {
            Ok(note) => tally.record(&name, true, &note),
            Err(why) => tally.record(&name, false, &format!("(bad report: {})", why)),
        },
        Ok((status, body)) => {
            tally.record(&name, false, &format!("(status {}, detail {})", status, body["detail"]))
        }
        Err(e) => tally.record(&name, false, &format!("({})", e)),
    }
}

fn check_coordinates(base: &str, tally: &mut Tally) {
    let url = format!("{}/air-quality?lat=40.7128&lon=-74.0060", base);
    match get(&url) {
        Ok((200, body)) if body["city"] == CUSTOM_LOCATION => match verify_report(&body) {
            Ok(note) => tally.record("air-quality coords", true, &note),
            Err(why) => tally.record("air-quality coords", false, &format!("(bad report: {})", why)),
        },
        Ok((status, body)) => tally.record(
            "air-quality coords",
            false,
            &format!("(status {}, city {})", status, body["city"]),
        ),
        Err(e) => tally.record("air-quality coords", false, &format!("({})", e)),
    }
}

fn check_invalid_city(base: &str, tally: &mut Tally) {
    let city = "ThisCityDoesNotExist12345";
    let url = format!("{}/air-quality?city={}", base, city);
    match get(&url) {
        Ok((404, body)) if body["detail"] == format!("City not found: {}", city) => {
            tally.record("invalid city -> 404", true, "")
        }
        Ok((status, body)) => tally.record(
            "invalid city -> 404",
            false,
            &format!("(status {}, detail {})", status, body["detail"]),
        ),
        Err(e) => tally.record("invalid city -> 404", false, &format!("({})", e)),
    }
}

fn check_missing_params(base: &str, tally: &mut Tally) {
    match get(&format!("{}/air-quality", base)) {
        Ok((400, _)) => tally.record("missing params -> 400", true, ""),
        Ok((status, _)) => {
            tally.record("missing params -> 400", false, &format!("(status {})", status))
        }
        Err(e) => tally.record("missing params -> 400", false, &format!("({})", e)),
    }
}

fn main() {
    let cli = Cli::parse();
    let base = cli.base_url.trim_end_matches('/');

    let cities: Vec<String> = if cli.cities.is_empty() {
        DEFAULT_CITIES.iter().map(|c| c.to_string()).collect()
    } else {
        cli.cities
    };

    let mut tally = Tally { run: 0, passed: 0 };

    eprintln!("Smoke-testing {}", base);

    check_health(base, &mut tally);
    for city in &cities {
        check_city(base, city, &mut tally);
        std::thread::sleep(Duration::from_secs(cli.pause_secs));
    }
    check_coordinates(base, &mut tally);
    check_invalid_city(base, &mut tally);
    check_missing_params(base, &mut tally);

    eprintln!("Checks passed: {}/{}", tally.passed, tally.run);
    if tally.passed != tally.run {
        std::process::exit(1);
    }
}
