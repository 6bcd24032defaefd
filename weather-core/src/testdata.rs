//! Fixtures and helpers shared by the in-crate tests.

/// Sample weatherstack success body for `Barcelona, Spain`, metric units.
pub(crate) const BARCELONA_SUCCESS: &str = r#"{
  "request": {
    "type": "City",
    "query": "Barcelona, Spain",
    "language": "en",
    "unit": "m"
  },
  "location": {
    "name": "Barcelona",
    "country": "Spain",
    "region": "Catalonia",
    "lat": "41.383",
    "lon": "2.183",
    "timezone_id": "Europe/Madrid",
    "localtime": "2023-11-17 07:46",
    "localtime_epoch": 1700207160,
    "utc_offset": "1.0"
  },
  "current": {
    "observation_time": "06:46 AM",
    "temperature": 13,
    "weather_code": 116,
    "weather_icons": [
      "https://cdn.worldweatheronline.com/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png"
    ],
    "weather_descriptions": ["Partly cloudy"],
    "wind_speed": 15,
    "wind_degree": 320,
    "wind_dir": "NW",
    "pressure": 1022,
    "precip": 0.1,
    "humidity": 88,
    "cloudcover": 25,
    "feelslike": 11,
    "uv_index": 1,
    "visibility": 10,
    "is_day": "yes"
  }
}"#;

/// Same observation as [`BARCELONA_SUCCESS`] in imperial units.
pub(crate) const BARCELONA_SUCCESS_IMPERIAL: &str = r#"{
  "request": {
    "type": "City",
    "query": "Barcelona, Spain",
    "language": "en",
    "unit": "f"
  },
  "location": {
    "name": "Barcelona",
    "country": "Spain",
    "region": "Catalonia",
    "lat": "41.383",
    "lon": "2.183",
    "timezone_id": "Europe/Madrid",
    "localtime": "2023-11-17 07:46",
    "localtime_epoch": 1700207160,
    "utc_offset": "1.0"
  },
  "current": {
    "observation_time": "06:46 AM",
    "temperature": 55,
    "weather_code": 116,
    "weather_icons": [
      "https://cdn.worldweatheronline.com/images/wsymbols01_png_64/wsymbol_0002_sunny_intervals.png"
    ],
    "weather_descriptions": ["Partly cloudy"],
    "wind_speed": 9,
    "wind_degree": 320,
    "wind_dir": "NW",
    "pressure": 1022,
    "precip": 0.1,
    "humidity": 88,
    "cloudcover": 25,
    "feelslike": 52,
    "uv_index": 1,
    "visibility": 6,
    "is_day": "yes"
  }
}"#;

/// Sample weatherstack logical-failure body, delivered with HTTP 200.
pub(crate) const BAD_REQUEST_FAILURE: &str = r#"{
  "success": false,
  "error": {
    "code": 123,
    "type": "Bad request",
    "info": "Error: mocked error for a bad request"
  }
}"#;

/// Minimal canned HTTP/1.1 servers for exercising real fetch cycles.
pub(crate) mod http {
    use reqwest::Url;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    /// Route: respond with (status, body) when the request line contains
    /// `needle`.
    pub(crate) type Route = (&'static str, u16, String);

    /// Serve `body` with `status` for every request.
    pub(crate) async fn json_server(status: u16, body: &str) -> Url {
        serve(vec![("", status, body.to_string())], Duration::ZERO).await
    }

    /// Like [`json_server`] but sleeps before responding, to let tests
    /// observe in-flight state and force overlapping cycles.
    pub(crate) async fn slow_json_server(status: u16, body: &str, delay: Duration) -> Url {
        serve(vec![("", status, body.to_string())], delay).await
    }

    /// Serve different bodies depending on the request line. Routes are
    /// matched in order; unmatched requests get a 404.
    pub(crate) async fn routed_json_server(routes: Vec<Route>) -> Url {
        serve(routes, Duration::ZERO).await
    }

    async fn serve(routes: Vec<Route>, delay: Duration) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                tokio::spawn(async move {
                    handle(stream, routes, delay).await;
                });
            }
        });

        format!("http://{addr}/").parse().unwrap()
    }

    async fn handle(mut stream: TcpStream, routes: Vec<Route>, delay: Duration) {
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            match stream.read(&mut buf).await {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
            }
        }

        let request_line = String::from_utf8_lossy(&request);
        let request_line = request_line.lines().next().unwrap_or_default().to_string();

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let (status, body) = routes
            .iter()
            .find(|(needle, _, _)| request_line.contains(needle))
            .map(|(_, status, body)| (*status, body.clone()))
            .unwrap_or((404, r#"{"error": "no route"}"#.to_string()));

        let response = format!(
            "HTTP/1.1 {status} Canned\r\n\
             content-type: application/json\r\n\
             content-length: {len}\r\n\
             connection: close\r\n\
             \r\n\
             {body}",
            len = body.len(),
        );
        let _ = stream.write_all(response.as_bytes()).await;
        let _ = stream.shutdown().await;
    }
}
