// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /edit-image behavior in local stub mode

use axum::http::{header, StatusCode};
use tower::util::ServiceExt;

use super::common::{
    error_message, multipart_body, multipart_request, response_bytes, stub_gateway, FormPart,
};

// Tiny but real PNG so the stub's copy is a valid image: 1x1 white pixel.
const PNG_1X1: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
    0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
    0xFF, 0xFF, 0x3F, 0x00, 0x05, 0xFE, 0x02, 0xFE, 0xDC, 0xCC, 0x59, 0xE7, 0x00, 0x00, 0x00,
    0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[tokio::test]
async fn test_no_image_part_is_400() {
    let gateway = stub_gateway();

    let body = multipart_body(&[FormPart::Text {
        name: "prompt",
        value: "make it watercolor",
    }]);
    let response = gateway
        .app
        .oneshot(multipart_request("/edit-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "no image file attached");
}

#[tokio::test]
async fn test_empty_filename_is_400() {
    let gateway = stub_gateway();

    let body = multipart_body(&[
        FormPart::File {
            file_name: "",
            data: PNG_1X1,
        },
        FormPart::Text {
            name: "prompt",
            value: "make it watercolor",
        },
    ]);
    let response = gateway
        .app
        .oneshot(multipart_request("/edit-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "no selected files");
}

#[tokio::test]
async fn test_missing_prompt_is_400() {
    let gateway = stub_gateway();

    let body = multipart_body(&[FormPart::File {
        file_name: "photo.png",
        data: PNG_1X1,
    }]);
    let response = gateway
        .app
        .oneshot(multipart_request("/edit-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_message(response).await, "no prompt provided");
}

#[tokio::test]
async fn test_disallowed_extension_is_400() {
    let gateway = stub_gateway();

    let body = multipart_body(&[
        FormPart::File {
            file_name: "photo.gif",
            data: PNG_1X1,
        },
        FormPart::Text {
            name: "prompt",
            value: "make it watercolor",
        },
    ]);
    let response = gateway
        .app
        .oneshot(multipart_request("/edit-image", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(error_message(response)
        .await
        .contains("unsupported image format"));
}

#[tokio::test]
async fn test_stub_edit_returns_copy_of_first_upload() {
    let gateway = stub_gateway();

    let body = multipart_body(&[
        FormPart::File {
            file_name: "first.png",
            data: PNG_1X1,
        },
        FormPart::File {
            file_name: "second.png",
            data: b"not-the-first",
        },
        FormPart::Text {
            name: "prompt",
            value: "make it watercolor",
        },
    ]);
    let response = gateway
        .app
        .oneshot(multipart_request("/edit-image", body))
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
    assert_eq!(&bytes[..], PNG_1X1);
}

#[tokio::test]
async fn test_uploads_cleaned_up_after_response() {
    let gateway = stub_gateway();
    let upload_root = gateway.upload_root();

    let body = multipart_body(&[
        FormPart::File {
            file_name: "photo.png",
            data: PNG_1X1,
        },
        FormPart::Text {
            name: "prompt",
            value: "make it watercolor",
        },
    ]);
    let response = gateway
        .app
        .oneshot(multipart_request("/edit-image", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let _ = response_bytes(response).await;

    let leftover: Vec<_> = std::fs::read_dir(&upload_root)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert!(leftover.is_empty(), "upload scope should be cleaned up");
}

#[tokio::test]
async fn test_concurrent_edits_do_not_collide() {
    let gateway = stub_gateway();

    let first_payload = PNG_1X1.to_vec();
    let mut second_payload = PNG_1X1.to_vec();
    second_payload.extend_from_slice(b"trailer-bytes-second");

    let first_body = multipart_body(&[
        FormPart::File {
            file_name: "same-name.png",
            data: &first_payload,
        },
        FormPart::Text {
            name: "prompt",
            value: "first edit",
        },
    ]);
    let second_body = multipart_body(&[
        FormPart::File {
            file_name: "same-name.png",
            data: &second_payload,
        },
        FormPart::Text {
            name: "prompt",
            value: "second edit",
        },
    ]);

    let (first, second) = tokio::join!(
        gateway
            .app
            .clone()
            .oneshot(multipart_request("/edit-image", first_body)),
        gateway
            .app
            .clone()
            .oneshot(multipart_request("/edit-image", second_body)),
    );

    let first = first.unwrap();
    let second = second.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);

    assert_eq!(&response_bytes(first).await[..], &first_payload[..]);
    assert_eq!(&response_bytes(second).await[..], &second_payload[..]);
}
