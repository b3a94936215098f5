use super::*;
use axum::{extract::Path, http::StatusCode as HttpStatus, response::IntoResponse, routing::get, Json, Router};
use shared::error::ErrorCode;
use tokio::net::TcpListener;

fn record(id: i64, gender: &str, status: &str) -> PatientRecord {
    PatientRecord {
        id: PatientId(id),
        name: "margaret chen".to_string(),
        status: status.to_string(),
        dob: "1948-02-11".to_string(),
        mrn: format!("MRN-{id:04}"),
        gender: gender.to_string(),
        last_updated: Some("2024-05-01T09:30:00Z".parse().expect("timestamp")),
    }
}

async fn patient_handler(Path(id): Path<i64>) -> axum::response::Response {
    if id == 404 {
        return (
            HttpStatus::NOT_FOUND,
            Json(ApiError::new(ErrorCode::NotFound, "patient not found")),
        )
            .into_response();
    }
    if id == 500 {
        return (HttpStatus::INTERNAL_SERVER_ERROR, "database offline").into_response();
    }
    if id == 422 {
        return (HttpStatus::OK, "{\"id\":\"not-a-number\"}").into_response();
    }
    Json(record(id, "Female", "Stable")).into_response()
}

async fn spawn_patient_api() -> String {
    let app = Router::new().route("/api/patients/:id", get(patient_handler));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn fetches_and_decodes_patient_record() {
    let base = spawn_patient_api().await;
    let directory = HttpPatientDirectory::new(&base).expect("directory");
    let patient = directory.fetch_patient(PatientId(3)).await.expect("patient");
    assert_eq!(patient.id, PatientId(3));
    assert_eq!(patient.mrn, "MRN-0003");
}

#[tokio::test]
async fn maps_api_error_body_into_status_error() {
    let base = spawn_patient_api().await;
    let directory = HttpPatientDirectory::new(&base).expect("directory");
    let err = directory
        .fetch_patient(PatientId(404))
        .await
        .expect_err("missing patient");
    match err {
        PatientLookupError::Status { status, message } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "patient not found");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn plain_text_error_bodies_are_kept_verbatim() {
    let base = spawn_patient_api().await;
    let directory = HttpPatientDirectory::new(&base).expect("directory");
    let err = directory
        .fetch_patient(PatientId(500))
        .await
        .expect_err("server error");
    assert!(matches!(
        err,
        PatientLookupError::Status { ref message, .. } if message == "database offline"
    ));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error_and_fails_the_header() {
    let base = spawn_patient_api().await;
    let directory = HttpPatientDirectory::new(&base).expect("directory");
    let state = load_header(&directory, PatientId(422)).await;
    assert!(matches!(state, PatientHeaderState::Failed(ref reason) if reason.contains("malformed")));
    assert_eq!(state.banner(), Some("Error loading patient information"));
}

#[tokio::test]
async fn unreachable_api_yields_failed_header_state() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let directory = HttpPatientDirectory::new(&format!("http://{addr}")).expect("directory");
    let state = load_header(&directory, PatientId(1)).await;
    assert!(matches!(state, PatientHeaderState::Failed(_)));
}

#[test]
fn base_url_prefix_is_preserved() {
    let directory = HttpPatientDirectory::new("http://clinic.local/companion").expect("directory");
    assert_eq!(
        directory.patient_url(PatientId(7)).expect("url").as_str(),
        "http://clinic.local/companion/api/patients/7"
    );
}

#[test]
fn rejects_unparseable_base_url() {
    assert!(matches!(
        HttpPatientDirectory::new("not a url"),
        Err(PatientLookupError::InvalidBaseUrl { .. })
    ));
}

#[test]
fn header_presentation_helpers() {
    let female = record(3, "Female", "Discharge Ready");
    assert_eq!(initials(&female.name), "MA");
    assert_eq!(avatar_url(&female), "https://randomuser.me/api/portraits/women/23.jpg");
    assert_eq!(status_tone(&female.status), StatusTone::Positive);
    assert_eq!(last_updated_label(female.last_updated), "May 1, 2024, 9:30:00 AM");

    let male = record(1, "Male", "Critical");
    assert_eq!(avatar_url(&male), "https://randomuser.me/api/portraits/men/21.jpg");
    assert_eq!(status_tone(&male.status), StatusTone::Critical);
    assert_eq!(status_tone("Stable"), StatusTone::Neutral);
    assert_eq!(last_updated_label(None), "N/A");
}

#[test]
fn avatar_index_saturates_for_extreme_ids() {
    let extreme = record(i64::MAX, "Male", "Stable");
    assert_eq!(
        avatar_url(&extreme),
        format!("https://randomuser.me/api/portraits/men/{}.jpg", i64::MAX)
    );
}
