//! Language-basics demo handlers.
//!
//! Each endpoint computes a fixed payload in `primer_core::basics` and
//! returns it through the response wrapper. Query parameters are
//! parsed leniently: an unparsable value falls back to the default
//! rather than failing the request.

use axum::extract::Query;
use axum::http::StatusCode;
use serde::Deserialize;

use primer_core::basics;

use crate::envelope::Reply;
use crate::wrap::wrap;

#[derive(Debug, Default, Deserialize)]
pub struct ConditionalParams {
    score: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FunctionParams {
    name: Option<String>,
    x: Option<String>,
    y: Option<String>,
}

fn lenient_i64(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// `GET /api/basics/variables`
pub async fn variables_handler() -> Reply {
    wrap(
        "Variables and types retrieved successfully",
        StatusCode::OK,
        async { Ok(Some(basics::variables_and_types())) },
    )
    .await
}

/// `GET /api/basics/operators`
pub async fn operators_handler() -> Reply {
    wrap("Operators result retrieved successfully", StatusCode::OK, async {
        Ok(Some(basics::operator_results()))
    })
    .await
}

/// `GET /api/basics/conditional?score=85`
pub async fn conditional_handler(Query(params): Query<ConditionalParams>) -> Reply {
    wrap(
        "Conditional result retrieved successfully",
        StatusCode::OK,
        async {
            let score = lenient_i64(params.score.as_deref(), 85);
            Ok(Some(basics::conditional_result(score)))
        },
    )
    .await
}

/// `GET /api/basics/loops`
pub async fn loops_handler() -> Reply {
    wrap("Loops result retrieved successfully", StatusCode::OK, async {
        Ok(Some(basics::loop_results()))
    })
    .await
}

/// `GET /api/basics/functions?name=Bobs&x=5&y=3`
pub async fn functions_handler(Query(params): Query<FunctionParams>) -> Reply {
    wrap("Functions result retrieved successfully", StatusCode::OK, async {
        let name = params.name.as_deref().unwrap_or("Bobs");
        let x = lenient_i64(params.x.as_deref(), 5);
        let y = lenient_i64(params.y.as_deref(), 3);
        Ok(Some(basics::function_results(name, x, y)))
    })
    .await
}

/// `GET /api/basics/lists`
pub async fn lists_handler() -> Reply {
    wrap("Lists result retrieved successfully", StatusCode::OK, async {
        Ok(Some(basics::list_results()))
    })
    .await
}

/// `GET /api/basics/tuples`
pub async fn tuples_handler() -> Reply {
    wrap("Tuples result retrieved successfully", StatusCode::OK, async {
        Ok(Some(basics::tuple_results()))
    })
    .await
}

/// `GET /api/basics/dictionaries`
pub async fn dictionaries_handler() -> Reply {
    wrap(
        "Dictionaries result retrieved successfully",
        StatusCode::OK,
        async { Ok(Some(basics::dictionary_results())) },
    )
    .await
}

/// `GET /api/basics/sets`
pub async fn sets_handler() -> Reply {
    wrap("Sets result retrieved successfully", StatusCode::OK, async {
        Ok(Some(basics::set_results()))
    })
    .await
}
