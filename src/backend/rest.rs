use crate::{
    api::{
        error::{ApiError, Error, Result},
        request::{Executor, Payload, Request},
    },
    config::{Config, Token},
};
use anyhow::Context;
use std::{
    error::Error as StdError,
    fmt, io,
    time::{Duration, Instant},
};

const UNPARSABLE_ERROR_BODY: &str = "Unable to parse error response";

/// The Optimizely REST API, reached over HTTPS.
pub struct Server {
    agent: ureq::Agent,
    token: Token,
    base_url: String,
    timeout: Duration,
}

impl fmt::Debug for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Server")
            .field("token", &self.token)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn is_json(response: &ureq::Response) -> bool {
    response
        .header("content-type")
        .map_or(false, |content_type| content_type.contains("application/json"))
}

fn is_timeout(error: &io::Error) -> bool {
    matches!(error.kind(), io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock)
}

fn caused_by_timeout(error: &ureq::Transport) -> bool {
    let mut source = error.source();
    while let Some(cause) = source {
        if let Some(io_error) = cause.downcast_ref::<io::Error>() {
            if is_timeout(io_error) {
                return true;
            }
        }
        source = cause.source();
    }
    false
}

fn parse_error(response: ureq::Response, endpoint: &str) -> ApiError {
    let status = response.status();
    let body = if is_json(&response) {
        response
            .into_string()
            .ok()
            .and_then(|body| serde_json::from_str(&body).ok())
            .map(Payload::Json)
    } else {
        response.into_string().ok().map(Payload::Text)
    };
    let body = body.unwrap_or_else(|| Payload::Text(UNPARSABLE_ERROR_BODY.to_string()));
    ApiError::from_response(status, body, endpoint)
}

impl Server {
    pub fn new(config: &Config) -> Result<Self> {
        let token = Token::parse(&config.token)?;
        let timeout = config.timeout()?;
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Ok(Server {
            agent,
            token,
            base_url: config.base_url().to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub(crate) fn url(&self, request: &Request<'_>) -> String {
        format!("{}{}", self.base_url, request.path_and_query())
    }

    /// Default headers overlaid by the caller's; names compare case-insensitively.
    pub(crate) fn headers(&self, request: &Request<'_>) -> Vec<(String, String)> {
        let mut headers = vec![
            ("Authorization".to_string(), format!("Bearer {}", self.token.as_str())),
            ("Content-Type".to_string(), "application/json".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        for (name, value) in &request.headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }
        headers
    }

    fn timed_out(&self, endpoint: &str) -> ApiError {
        ApiError::network(
            format!("Request to {} timed out after {}ms", endpoint, self.timeout.as_millis()),
            endpoint,
            Some(self.timeout),
        )
    }

    fn transport_failed(
        &self,
        error: &ureq::Transport,
        endpoint: &str,
        started: Instant,
    ) -> ApiError {
        if caused_by_timeout(error) || started.elapsed() >= self.timeout {
            self.timed_out(endpoint)
        } else {
            let message = format!("Network request to {} failed: {}", endpoint, error);
            ApiError::network(message, endpoint, None)
        }
    }

    fn read_success(&self, response: ureq::Response, endpoint: &str) -> Result<Payload> {
        if response.status() == 204 {
            return Ok(Payload::empty());
        }
        let json = is_json(&response);
        let body = response.into_string().map_err(|err| {
            if is_timeout(&err) {
                self.timed_out(endpoint)
            } else {
                let message = format!("Reading the response of {} failed: {}", endpoint, err);
                ApiError::network(message, endpoint, None)
            }
        })?;
        if json {
            let value = serde_json::from_str(&body)
                .with_context(|| format!("deserializing response failed:\n{}", &body))
                .map_err(|source| Error::Decode {
                    endpoint: endpoint.to_string(),
                    source,
                })?;
            Ok(Payload::Json(value))
        } else {
            Ok(Payload::Text(body))
        }
    }
}

impl Executor for Server {
    fn execute(&self, request: Request<'_>) -> Result<Payload> {
        let endpoint = request.endpoint.as_ref();
        let method = request.method;
        let mut http_request = self.agent.request(method.as_str(), &self.url(&request));
        for (name, value) in self.headers(&request) {
            http_request = http_request.set(&name, &value);
        }

        tracing::debug!(%method, endpoint, query = ?request.query, "sending request");
        let started = Instant::now();
        let http_response = match &request.body {
            Some(body) => http_request.send_string(&body.to_string()),
            None => http_request.call(),
        };

        let error = match http_response {
            Ok(response) if (200..300).contains(&response.status()) => {
                tracing::debug!(%method, endpoint, status = response.status(), "request succeeded");
                return self.read_success(response, endpoint);
            }
            Ok(response) | Err(ureq::Error::Status(_, response)) => parse_error(response, endpoint),
            Err(ureq::Error::Transport(transport)) => {
                self.transport_failed(&transport, endpoint, started)
            }
        };
        tracing::warn!(
            %method,
            endpoint,
            status = ?error.status(),
            code = error.code(),
            "request failed: {}",
            error
        );
        Err(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Server;
    use crate::{api::request::Request, config::Config};
    use std::time::Duration;

    fn server() -> Server {
        Server::new(&Config::new("secret").with_base_url("https://api.example.com/v2")).unwrap()
    }

    #[test]
    fn url_is_base_url_plus_endpoint_and_query() {
        let mut request = Request::get("/audiences");
        request.query = Some("project_id=42&archived=false".to_string());
        assert_eq!(
            server().url(&request),
            "https://api.example.com/v2/audiences?project_id=42&archived=false"
        );
        assert_eq!(server().url(&Request::get("/projects")), "https://api.example.com/v2/projects");
    }

    #[test]
    fn default_headers_carry_the_bearer_token() {
        let headers = server().headers(&Request::get("/projects"));
        assert_eq!(
            headers,
            vec![
                ("Authorization".to_string(), "Bearer secret".to_string()),
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn caller_headers_win() {
        let request = Request::get("/campaigns/1/results.csv")
            .header("accept", "text/csv")
            .header("X-Trace", "abc");
        let headers = server().headers(&request);
        assert_eq!(headers.len(), 4);
        assert!(headers.contains(&("accept".to_string(), "text/csv".to_string())));
        assert!(!headers.contains(&("Accept".to_string(), "application/json".to_string())));
        assert!(headers.contains(&("X-Trace".to_string(), "abc".to_string())));
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let server = Server::new(&Config::new("secret")).unwrap();
        assert_eq!(server.base_url(), "https://api.optimizely.com/v2");
        assert_eq!(server.timeout(), Duration::from_millis(30_000));
    }

    #[test]
    fn debug_output_hides_the_token() {
        let debug = format!("{:?}", server());
        assert!(!debug.contains("secret"), "{}", debug);
    }
}
