//! Parser for the hiscores `index_lite` payload.
//!
//! The payload is one `rank,level,xp` row per line. The first row is the
//! overall total, followed by each skill in [`content::SKILLS`] order, then
//! activity rows which are ignored. [`HiscoresClient`] fetches the payload
//! for a player name from the live hiscores.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use super::content;
use super::domain::MIN_LEVEL;

/// Public `index_lite` endpoint for Old School accounts.
pub const HISCORES_URL: &str =
    "https://secure.runescape.com/m=hiscore_oldschool/index_lite.ws";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum HiscoresError {
    #[error("player not found on the hiscores")]
    PlayerNotFound,
    #[error("a player name is required to look up hiscores")]
    MissingPlayerName,
    #[error("malformed hiscores payload: {0}")]
    Malformed(String),
    #[error("invalid hiscores url: {0}")]
    InvalidUrl(String),
    #[error("hiscores request failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// HTTP client for the hiscores `index_lite` endpoint.
#[derive(Debug, Clone)]
pub struct HiscoresClient {
    http: Client,
    url: Url,
}

impl HiscoresClient {
    /// Client for the public endpoint with the default timeout.
    pub fn new() -> Result<Self, HiscoresError> {
        Self::with_url(HISCORES_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_url(url: &str, timeout: Duration) -> Result<Self, HiscoresError> {
        let url = Url::parse(url).map_err(|error| HiscoresError::InvalidUrl(error.to_string()))?;
        let http = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, url })
    }

    /// Request URL for a player, with the name query-encoded.
    pub fn lookup_url(&self, player_name: &str) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair("player", player_name);
        url
    }

    /// Raw `index_lite` text for the player. Feed it to [`parse_hiscores`].
    pub async fn fetch(&self, player_name: &str) -> Result<String, HiscoresError> {
        let player_name = player_name.trim();
        if player_name.is_empty() {
            return Err(HiscoresError::MissingPlayerName);
        }

        let url = self.lookup_url(player_name);
        tracing::debug!(player = player_name, url = %url, "fetching hiscores");
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(HiscoresError::PlayerNotFound);
        }
        let payload = response.error_for_status()?.text().await?;
        tracing::info!(player = player_name, bytes = payload.len(), "fetched hiscores");
        Ok(payload)
    }
}

/// Fetch the live hiscores payload for `player_name`.
pub async fn fetch_hiscores(player_name: &str) -> Result<String, HiscoresError> {
    HiscoresClient::new()?.fetch(player_name).await
}

/// Parse raw hiscores text into levels keyed by skill name.
///
/// Levels come back unclamped; unranked skills (`-1`) and unparseable values
/// are left for [`SkillLevels`](super::domain::SkillLevels) to correct.
pub fn parse_hiscores(payload: &str) -> Result<BTreeMap<String, i64>, HiscoresError> {
    let trimmed = payload.trim();
    let first_line = trimmed.lines().next().unwrap_or_default().trim();
    if is_not_found_page(first_line) {
        return Err(HiscoresError::PlayerNotFound);
    }
    if !first_line.contains(',') {
        return Err(HiscoresError::Malformed(format!(
            "expected `rank,level,xp` rows, got {first_line:?}"
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(trimmed.as_bytes());

    let mut rows = reader.records();
    match rows.next() {
        Some(overall) => {
            overall?;
        }
        None => return Err(HiscoresError::PlayerNotFound),
    }

    let mut levels = BTreeMap::new();
    for info in content::SKILLS.iter() {
        let row = rows.next().ok_or_else(|| {
            HiscoresError::Malformed(format!("missing row for {}", info.label))
        })??;
        let raw = row.get(1).unwrap_or_default();
        let level = raw.parse::<i64>().unwrap_or_else(|_| {
            tracing::warn!(skill = info.key, value = raw, "unparseable hiscores level");
            i64::from(MIN_LEVEL)
        });
        levels.insert(info.key.to_string(), level);
    }

    tracing::debug!(skills = levels.len(), "parsed hiscores payload");
    Ok(levels)
}

/// The not-found page is a bare status line rather than a row of fields.
fn is_not_found_page(first_line: &str) -> bool {
    first_line.is_empty() || first_line == "404" || first_line.starts_with("404 -")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::Uri, routing::get, Router};

    fn payload(levels: &[&str]) -> String {
        let mut lines = vec!["1000,500,1000000".to_string()];
        lines.extend(
            levels
                .iter()
                .enumerate()
                .map(|(index, level)| format!("{},{level},{}", index + 10, index * 100)),
        );
        // activity rows
        lines.push("-1,-1".to_string());
        lines.push("25,300".to_string());
        lines.join("\n")
    }

    #[test]
    fn maps_rows_to_skills_in_hiscores_order() {
        let mut raw = vec!["1"; 23];
        raw[0] = "60";
        raw[4] = "45";
        raw[22] = "12";

        let levels = parse_hiscores(&payload(&raw)).expect("valid payload");

        assert_eq!(levels.len(), 23);
        assert_eq!(levels["attack"], 60);
        assert_eq!(levels["ranged"], 45);
        assert_eq!(levels["construction"], 12);
        assert_eq!(levels["magic"], 1);
    }

    #[test]
    fn unranked_and_garbled_levels_fall_back() {
        let mut raw = vec!["10"; 23];
        raw[1] = "-1";
        raw[2] = "lots";

        let levels = parse_hiscores(&payload(&raw)).expect("valid payload");

        assert_eq!(levels["defence"], -1);
        assert_eq!(levels["strength"], 1);
    }

    #[test]
    fn not_found_payloads_are_reported() {
        for body in ["", "   \n", "404", "404 - Page not found", "404 - Page not found\n"] {
            assert!(matches!(
                parse_hiscores(body),
                Err(HiscoresError::PlayerNotFound)
            ));
        }
    }

    #[test]
    fn overall_rank_starting_with_404_is_a_real_player() {
        let mut lines = vec!["40412,1500,50000000".to_string()];
        lines.extend((0..23).map(|index| format!("{},70,{}", index + 404, 737_627)));
        let body = lines.join("\n");

        let levels = parse_hiscores(&body).expect("valid payload");

        assert_eq!(levels.len(), 23);
        assert!(levels.values().all(|level| *level == 70));
    }

    #[test]
    fn status_text_without_fields_is_malformed() {
        match parse_hiscores("<html>Service unavailable</html>") {
            Err(HiscoresError::Malformed(message)) => assert!(message.contains("rank,level,xp")),
            other => panic!("expected malformed payload, got {other:?}"),
        }
    }

    #[test]
    fn truncated_payload_is_malformed() {
        let body = "1,100,100\n5,40,4000\n6,30,3000";
        match parse_hiscores(body) {
            Err(HiscoresError::Malformed(message)) => assert!(message.contains("Strength")),
            other => panic!("expected malformed payload, got {other:?}"),
        }
    }

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve hiscores stub");
        });
        format!("http://{addr}/index_lite.ws")
    }

    fn hiscores_stub() -> Router {
        Router::new().route(
            "/index_lite.ws",
            get(|uri: Uri| async move {
                match uri.query() {
                    Some("player=Iron+Bob") => {
                        let mut lines = vec!["40412,1500,50000000".to_string()];
                        lines.extend((0..23).map(|index| format!("{index},50,101333")));
                        (axum::http::StatusCode::OK, lines.join("\n"))
                    }
                    _ => (
                        axum::http::StatusCode::NOT_FOUND,
                        "404 - Page not found".to_string(),
                    ),
                }
            }),
        )
    }

    #[test]
    fn lookup_url_encodes_the_player_name() {
        let client = HiscoresClient::new().expect("client builds");
        let url = client.lookup_url("Iron Bob&co");

        assert_eq!(url.host_str(), Some("secure.runescape.com"));
        assert_eq!(url.query(), Some("player=Iron+Bob%26co"));
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(matches!(
            HiscoresClient::with_url("not a url", Duration::from_secs(1)),
            Err(HiscoresError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn fetch_returns_payload_for_known_player() {
        let url = serve(hiscores_stub()).await;
        let client = HiscoresClient::with_url(&url, Duration::from_secs(5)).expect("client");

        let payload = client.fetch("  Iron Bob ").await.expect("player exists");
        let levels = parse_hiscores(&payload).expect("valid payload");

        assert_eq!(levels["attack"], 50);
        assert_eq!(levels["construction"], 50);
    }

    #[tokio::test]
    async fn fetch_maps_missing_player_to_not_found() {
        let url = serve(hiscores_stub()).await;
        let client = HiscoresClient::with_url(&url, Duration::from_secs(5)).expect("client");

        assert!(matches!(
            client.fetch("Nobody").await,
            Err(HiscoresError::PlayerNotFound)
        ));
    }

    #[tokio::test]
    async fn fetch_requires_a_player_name() {
        let client = HiscoresClient::new().expect("client");
        assert!(matches!(
            client.fetch("   ").await,
            Err(HiscoresError::MissingPlayerName)
        ));
    }

    #[tokio::test]
    async fn slow_hiscores_time_out() {
        let app = Router::new().route(
            "/index_lite.ws",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "too late"
            }),
        );
        let url = serve(app).await;
        let client = HiscoresClient::with_url(&url, Duration::from_millis(200)).expect("client");

        match client.fetch("Iron Bob").await {
            Err(HiscoresError::Fetch(error)) => assert!(error.is_timeout()),
            other => panic!("expected a timeout, got {other:?}"),
        }
    }
}
