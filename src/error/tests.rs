//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod football_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_from_refused_connection() {
        // Port is free again once the listener is dropped
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let reqwest_error = reqwest::Client::new()
            .get(format!("http://{addr}/leagues"))
            .send()
            .await
            .unwrap_err();

        match FootballError::from(reqwest_error) {
            FootballError::Http(e) => assert!(e.is_connect()),
            other => panic!("Expected Http error variant, got {other:?}"),
        }
    }

    #[test]
    fn test_csv_error_from_bad_team_row() {
        let mut rdr = csv::Reader::from_reader("Team ID,Team,League\nforty-two,Arsenal,EPL\n".as_bytes());
        let csv_error = rdr
            .deserialize::<crate::models::TeamRow>()
            .next()
            .unwrap()
            .unwrap_err();

        assert!(matches!(FootballError::from(csv_error), FootballError::Csv(_)));
    }

    #[test]
    fn test_id_parse_error_conversion() {
        let err = "Arsenal".parse::<TeamId>().unwrap_err();
        assert!(matches!(err, FootballError::InvalidId(_)));
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let error = FootballError::from(header_error);

        match error {
            FootballError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_missing_api_key_error() {
        let error = FootballError::MissingApiKey {
            env_var: "API_FOOTBALL_KEY".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("API key not provided"));
        assert!(error_string.contains("API_FOOTBALL_KEY"));
    }

    #[test]
    fn test_status_error_names_endpoint_and_code() {
        let error = FootballError::Status {
            endpoint: Endpoint::Teams,
            status: StatusCode::FORBIDDEN,
        };

        assert_eq!(error.to_string(), "teams request failed with status 403 Forbidden");
    }

    #[test]
    fn test_malformed_response_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = FootballError::MalformedResponse {
            endpoint: Endpoint::Players,
            source,
        };

        assert!(error.to_string().starts_with("Malformed players response"));
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_player_not_found_error() {
        let error = FootballError::PlayerNotFound {
            name: "Bukayo Saka".to_string(),
            team_id: TeamId::new(42),
        };

        assert_eq!(
            error.to_string(),
            "No player found with name 'Bukayo Saka' in team 42"
        );
    }

    #[test]
    fn test_nothing_to_aggregate_error() {
        let error = FootballError::NothingToAggregate { leagues: 12 };
        assert!(error.to_string().contains("none of the 12 leagues"));
    }

    #[test]
    fn test_upstream_error_joins_messages() {
        let error = FootballError::Upstream {
            endpoint: Endpoint::Players,
            messages: vec![
                "token: Error/Missing application key.".to_string(),
                "season: Invalid season".to_string(),
            ],
        };

        assert_eq!(
            error.to_string(),
            "players request rejected upstream: token: Error/Missing application key.; season: Invalid season"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = FootballError::from(io_error);

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(FootballError::TeamNotFound {
                name: "Nowhere FC".to_string(),
            })
        }

        match test_function().unwrap_err() {
            FootballError::TeamNotFound { name } => assert_eq!(name, "Nowhere FC"),
            _ => panic!("Expected TeamNotFound error"),
        }
    }
}
