use std::process::{Child, Command};
use std::thread;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde_json::Value;

struct TestBackend {
    process: Child,
    port: u16,
}

impl TestBackend {
    // Each test gets its own port so the tests can run in parallel.
    fn spawn(port: u16) -> Self {
        let backend_executable = env!("CARGO_BIN_EXE_weather-backend");
        let backend = TestBackend {
            process: Command::new(backend_executable)
                .args(["--port", &port.to_string()])
                .spawn()
                .expect("Could not start backend"),
            port,
        };
        let client = Client::new();
        while client
            .get(backend.url("/api/v1/weatherforecast"))
            .send()
            .is_err()
        {
            thread::sleep(Duration::from_millis(1));
        }
        backend
    }

    fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }
}

impl Drop for TestBackend {
    fn drop(&mut self) {
        self.process
            .kill()
            .expect("Failed to send kill signal to backend");
        self.process.wait().expect("Backend failed to stop");
    }
}

#[test]
fn can_start_and_stop_backend() {
    TestBackend::spawn(3101);
}

#[test]
fn default_request_returns_five_records() {
    let backend = TestBackend::spawn(3102);

    let response = reqwest::blocking::get(backend.url("/api/v1/weatherforecast"))
        .expect("Could not send request");
    assert_eq!(response.status(), StatusCode::OK);

    let forecasts: Vec<Value> = response.json().expect("Body should be a JSON array");
    assert_eq!(forecasts.len(), 5);
    for forecast in &forecasts {
        assert!(forecast["date"].is_string());
        assert!(forecast["temperatureC"].is_i64());
        assert!(forecast["summary"].is_string());
    }
}

#[test]
fn explicit_day_count_is_honored() {
    let backend = TestBackend::spawn(3103);

    let response = reqwest::blocking::get(backend.url("/api/v1/weatherforecast/3"))
        .expect("Could not send request");
    assert_eq!(response.status(), StatusCode::OK);

    let forecasts: Vec<Value> = response.json().expect("Body should be a JSON array");
    assert_eq!(forecasts.len(), 3);
}

#[test]
fn out_of_range_day_count_is_rejected() {
    let backend = TestBackend::spawn(3104);

    let response = reqwest::blocking::get(backend.url("/api/v1/weatherforecast/20"))
        .expect("Could not send request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = response.json().expect("Body should be a JSON object");
    assert_eq!(error["type"], "InvalidWeatherForecastRequestException");
    assert_eq!(error["detail"], Value::Null);
}
