//! Imaging calculation endpoint
use actix_web::{post, web::Json};
use log::debug;
use serde::{Deserialize, Serialize};
use thinlens::{error::ThinLensError, optics::compute_cm};
use uom::si::length::centimeter;
use utoipa::ToSchema;
use utoipa_actix_web::service_config::ServiceConfig;

use crate::error::ErrorResponse;

/// A numeric value given either as JSON number or as string (e.g. `"6.5"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Numeric {
    /// plain JSON number
    Number(f64),
    /// number encoded as string. Leading and trailing whitespace is ignored.
    Text(String),
}
impl Numeric {
    fn value(&self, name: &str) -> Result<f64, ErrorResponse> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                ErrorResponse::new(
                    400,
                    "Parameter",
                    &format!("{name} is not a number: '{text}'"),
                )
            }),
        }
    }
}
impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}
impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Parameters of an imaging calculation. All values in cm.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateRequest {
    /// focal length f
    #[schema(example = 6.0)]
    focal_length: Numeric,
    /// object distance u
    #[schema(example = 15.0)]
    object_distance: Numeric,
    /// object height h
    #[schema(example = 5.0)]
    object_height: Numeric,
}
impl CalculateRequest {
    #[must_use]
    pub fn new(
        focal_length: impl Into<Numeric>,
        object_distance: impl Into<Numeric>,
        object_height: impl Into<Numeric>,
    ) -> Self {
        Self {
            focal_length: focal_length.into(),
            object_distance: object_distance.into(),
            object_height: object_height.into(),
        }
    }
}

/// Result of an imaging calculation
///
/// If the object sits in the focal point, `success` is `false` and only a `message` is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CalculateResponse {
    /// `true` if a finite image is formed
    success: bool,
    /// signed image distance v in cm. Negative values denote a virtual image.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    #[schema(example = 10.0)]
    image_distance: Option<f64>,
    /// signed image height h' in cm. Negative values denote an inverted image.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    image_height: Option<f64>,
    /// `true` if the image is virtual
    #[serde(skip_serializing_if = "Option::is_none", default)]
    is_virtual: Option<bool>,
    /// reason why no image is formed
    #[serde(skip_serializing_if = "Option::is_none", default)]
    message: Option<String>,
}
impl CalculateResponse {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.success
    }
    #[must_use]
    pub const fn image_distance(&self) -> Option<f64> {
        self.image_distance
    }
    #[must_use]
    pub const fn image_height(&self) -> Option<f64> {
        self.image_height
    }
    #[must_use]
    pub const fn is_virtual(&self) -> Option<bool> {
        self.is_virtual
    }
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Calculate the image of a thin lens
///
/// Calculate image distance and image height of an object in front of a thin lens. The values may
/// be given as numbers or numeric strings. No range check is performed.
/// - **Note**: If the object distance equals the focal length, the image is formed at infinity. In this
///   case `success` is `false` and a message is returned.
#[utoipa::path(tag = "calculation",
    request_body(content = CalculateRequest,
        description = "focal length, object distance and object height in cm",
        content_type = "application/json",
        example = "{\"focal_length\": 6, \"object_distance\": \"15\", \"object_height\": 5}"
    ),
    responses(
        (status = OK, body = CalculateResponse, description = "calculation done (check the success flag)", content_type = "application/json"),
        (status = BAD_REQUEST, body = ErrorResponse, description = "missing or non-numeric parameter, zero object distance", content_type = "application/json")
    )
)]
#[post("/calculate")]
async fn post_calculate(
    request: Json<CalculateRequest>,
) -> Result<Json<CalculateResponse>, ErrorResponse> {
    let request = request.into_inner();
    let focal_length = request.focal_length.value("focal_length")?;
    let object_distance = request.object_distance.value("object_distance")?;
    let object_height = request.object_height.value("object_height")?;
    debug!("calculate f={focal_length}, u={object_distance}, h={object_height}");
    match compute_cm(focal_length, object_distance, object_height) {
        Ok(image) => Ok(Json(CalculateResponse {
            success: true,
            image_distance: Some(image.image_distance().get::<centimeter>()),
            image_height: Some(image.image_height().get::<centimeter>()),
            is_virtual: Some(image.is_virtual()),
            message: None,
        })),
        Err(ThinLensError::DegenerateInput(message)) => Ok(Json(CalculateResponse {
            success: false,
            image_distance: None,
            image_height: None,
            is_virtual: None,
            message: Some(message),
        })),
        Err(e) => Err(e.into()),
    }
}
pub fn config(cfg: &mut ServiceConfig<'_>) {
    cfg.service(post_calculate);
}
#[cfg(test)]
mod test {
    use super::*;
    use crate::error::json_config;
    use actix_web::{dev::Service, http::StatusCode, test, App};
    use approx::assert_abs_diff_eq;
    use serde_json::json;
    use thinlens::optics::IMAGE_AT_INFINITY;

    async fn call(body: serde_json::Value) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(json_config())
                .service(super::post_calculate),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/calculate")
            .set_json(body)
            .to_request();
        app.call(req).await.unwrap()
    }
    #[actix_web::test]
    async fn numeric() {
        assert_eq!(Numeric::from(2.0).value("x").unwrap(), 2.0);
        assert_eq!(Numeric::from(" 6.5 ").value("x").unwrap(), 6.5);
        let e = Numeric::from("six").value("focal_length").unwrap_err();
        assert_eq!(e.category(), "Parameter");
        assert_eq!(e.message(), "focal_length is not a number: 'six'");
    }
    #[actix_web::test]
    async fn deserialize_request() {
        let request: CalculateRequest = serde_json::from_value(json!({
            "focal_length": 6, "object_distance": "15", "object_height": 5.5
        }))
        .unwrap();
        assert_eq!(request.focal_length, Numeric::Number(6.0));
        assert_eq!(request.object_distance, Numeric::Text("15".into()));
        assert!(serde_json::from_value::<CalculateRequest>(json!({"focal_length": 6})).is_err());
    }
    #[actix_web::test]
    async fn serialize_response() {
        let response = CalculateResponse {
            success: false,
            image_distance: None,
            image_height: None,
            is_virtual: None,
            message: Some("test".into()),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"success": false, "message": "test"})
        );
    }
    #[actix_web::test]
    async fn real_image() {
        let request = CalculateRequest::new(6.0, "15", 5.0);
        let resp = call(serde_json::to_value(request).unwrap()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let result: CalculateResponse = test::read_body_json(resp).await;
        assert!(result.success());
        assert_abs_diff_eq!(result.image_distance().unwrap(), 10.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.image_height().unwrap(), -10.0 / 3.0, epsilon = 1e-9);
        assert_eq!(result.is_virtual(), Some(false));
        assert!(result.message().is_none());
    }
    #[actix_web::test]
    async fn virtual_image_from_strings() {
        let resp = call(json!({"focal_length": "6", "object_distance": " 3 ", "object_height": "5.0"})).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let result: CalculateResponse = test::read_body_json(resp).await;
        assert!(result.success());
        assert_abs_diff_eq!(result.image_distance().unwrap(), -6.0, epsilon = 1e-9);
        assert_abs_diff_eq!(result.image_height().unwrap(), 10.0, epsilon = 1e-9);
        assert_eq!(result.is_virtual(), Some(true));
    }
    #[actix_web::test]
    async fn image_at_infinity() {
        let resp = call(json!({"focal_length": 6, "object_distance": 6, "object_height": 5})).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"success": false, "message": IMAGE_AT_INFINITY}));
    }
    #[actix_web::test]
    async fn no_range_check() {
        let resp = call(json!({"focal_length": 50, "object_distance": 100, "object_height": 20})).await;
        let result: CalculateResponse = test::read_body_json(resp).await;
        assert_abs_diff_eq!(result.image_distance().unwrap(), 100.0, epsilon = 1e-9);
    }
    #[actix_web::test]
    async fn non_numeric_value() {
        let resp = call(json!({"focal_length": "abc", "object_distance": 6, "object_height": 5})).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let e: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(e.status(), 400);
        assert_eq!(e.category(), "Parameter");
    }
    #[actix_web::test]
    async fn missing_value() {
        let resp = call(json!({"focal_length": 6, "object_height": 5})).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let e: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(e.category(), "Deserialization");
    }
    #[actix_web::test]
    async fn zero_object_distance() {
        let resp = call(json!({"focal_length": 6, "object_distance": "0", "object_height": 5})).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let e: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(e.category(), "Parameter");
    }
}
