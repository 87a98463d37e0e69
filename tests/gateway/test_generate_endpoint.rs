// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /generate-image behavior in local stub mode

use axum::http::{header, StatusCode};
use tower::util::ServiceExt;

use super::common::{
    error_message, multipart_body, multipart_request, response_bytes, stub_gateway, FormPart,
};

#[tokio::test]
async fn test_missing_prompt_is_400() {
    let gateway = stub_gateway();

    let body = multipart_body(&[FormPart::Text {
        name: "size",
        value: "1024x1024",
    }]);
    let response = gateway
        .app
        .oneshot(multipart_request("/generate-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "no prompt provided");
}

#[tokio::test]
async fn test_empty_prompt_is_400() {
    let gateway = stub_gateway();

    let body = multipart_body(&[FormPart::Text {
        name: "prompt",
        value: "   ",
    }]);
    let response = gateway
        .app
        .oneshot(multipart_request("/generate-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_size_is_400() {
    let gateway = stub_gateway();

    let body = multipart_body(&[
        FormPart::Text {
            name: "prompt",
            value: "a lighthouse at dusk",
        },
        FormPart::Text {
            name: "size",
            value: "640x480",
        },
    ]);
    let response = gateway
        .app
        .oneshot(multipart_request("/generate-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("invalid size"));
}

#[tokio::test]
async fn test_invalid_quality_is_400() {
    let gateway = stub_gateway();

    let body = multipart_body(&[
        FormPart::Text {
            name: "prompt",
            value: "a lighthouse at dusk",
        },
        FormPart::Text {
            name: "quality",
            value: "ultra",
        },
    ]);
    let response = gateway
        .app
        .oneshot(multipart_request("/generate-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response).await.contains("invalid quality"));
}

#[tokio::test]
async fn test_stub_generate_returns_solid_color_png() {
    let gateway = stub_gateway();

    let body = multipart_body(&[FormPart::Text {
        name: "prompt",
        value: "a lighthouse at dusk",
    }]);
    let response = gateway
        .app
        .oneshot(multipart_request("/generate-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );

    let bytes = response_bytes(response).await;
    let img = image::load_from_memory(&bytes).unwrap().to_rgb8();
    assert_eq!(img.dimensions(), (1024, 1024));
    assert_eq!(*img.get_pixel(0, 0), image::Rgb([73, 109, 137]));
    assert_eq!(*img.get_pixel(1023, 1023), image::Rgb([73, 109, 137]));
}

#[tokio::test]
async fn test_auto_size_and_quality_accepted() {
    let gateway = stub_gateway();

    let body = multipart_body(&[
        FormPart::Text {
            name: "prompt",
            value: "a lighthouse at dusk",
        },
        FormPart::Text {
            name: "size",
            value: "auto",
        },
        FormPart::Text {
            name: "quality",
            value: "auto",
        },
    ]);
    let response = gateway
        .app
        .oneshot(multipart_request("/generate-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_generated_file_removed_after_response() {
    let gateway = stub_gateway();
    let generated_root = gateway.generated_root();

    let body = multipart_body(&[FormPart::Text {
        name: "prompt",
        value: "a lighthouse at dusk",
    }]);
    let response = gateway
        .app
        .oneshot(multipart_request("/generate-image", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let _ = response_bytes(response).await;

    let leftover: Vec<_> = std::fs::read_dir(&generated_root)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(leftover.is_empty(), "generated dir should be cleaned up");
}
