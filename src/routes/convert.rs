use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::models::{AppState, ErrorBody};

/// Raw query shape. Everything is optional text so the handler can report
/// the exact legacy messages instead of the framework's rejection.
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    amount: Option<String>,
    input_currency: Option<String>,
    output_currency: Option<String>,
}

pub async fn convert(
    State(state): State<AppState>,
    Query(query): Query<ConvertQuery>,
) -> impl IntoResponse {
    let Some(amount) = query.amount else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Amount was not specified in parameters.")),
        )
            .into_response();
    };
    let Some(input_currency) = query.input_currency else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Input argument was not set.")),
        )
            .into_response();
    };
    let amount = match amount.parse::<f64>() {
        Ok(amount) => amount,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorBody::new(e.to_string()))).into_response()
        }
    };
    match state
        .converter
        .convert(amount, &input_currency, query.output_currency.as_deref())
        .await
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => (StatusCode::BAD_REQUEST, Json(ErrorBody::new(err.to_string()))).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use crate::converter::Converter;
    use crate::models::{AppState, RateMap};
    use crate::rates::RateSource;
    use crate::Result;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct StubRates;

    #[async_trait]
    impl RateSource for StubRates {
        async fn get_rates(&self, _base: &str, targets: Option<&[String]>) -> Result<RateMap> {
            let mut rates = RateMap::new();
            match targets {
                Some(targets) => {
                    for target in targets {
                        rates.insert(target.clone(), 2.5);
                    }
                }
                None => {
                    rates.insert("CZK".to_string(), 2.5);
                    rates.insert("USD".to_string(), 2.5);
                }
            }
            Ok(rates)
        }
    }

    fn router() -> Router {
        let converter = Converter::new(Arc::new(StubRates));
        crate::routes::init(AppState::new(converter))
    }

    async fn get(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_amount_is_reported() {
        let (status, body) = get("/currency_converter?input_currency=EUR").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Amount was not specified in parameters.");
    }

    #[tokio::test]
    async fn missing_input_currency_is_reported() {
        let (status, body) = get("/currency_converter?amount=10").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Input argument was not set.");
    }

    #[tokio::test]
    async fn malformed_amount_is_reported() {
        let (status, body) = get("/currency_converter?amount=ten&input_currency=EUR").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("invalid float"));
    }

    #[tokio::test]
    async fn successful_conversion_returns_the_result_body() {
        let (status, body) =
            get("/currency_converter?amount=10&input_currency=EUR&output_currency=CZK").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["input"]["amount"], 10.0);
        assert_eq!(body["input"]["currency"], "EUR");
        assert_eq!(body["output"]["CZK"], 25.0);
    }

    #[tokio::test]
    async fn omitted_output_currency_converts_against_all_rates() {
        let (status, body) = get("/currency_converter?amount=2&input_currency=EUR").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["output"]["CZK"], 5.0);
        assert_eq!(body["output"]["USD"], 5.0);
    }

    #[tokio::test]
    async fn ambiguous_input_symbol_is_a_bad_request() {
        let (status, body) =
            get("/currency_converter?amount=10&input_currency=%C2%A3&output_currency=CZK").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("multiple currencies"));
        assert!(message.contains("GBP"));
    }
}
