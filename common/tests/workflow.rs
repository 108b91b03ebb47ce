use futures::executor::block_on;
use snapshop_common::config::WorkflowConfig;
use snapshop_common::error::WorkflowError;
use snapshop_common::model::form::UploadForm;
use snapshop_common::workflow::{ResultBlock, Status, Workflow, submit};

mod common;

use common::{FakeBackend, Recorded, flat_body, grouped_body};

const UPLOAD_URL: &str = "https://blobstore/upload/session-1";

fn form() -> UploadForm<String> {
    UploadForm::new("shopping-list", "list.jpg".to_string())
}

fn initialized(backend: &FakeBackend) -> Workflow {
    backend.push_reply(200, UPLOAD_URL);
    let mut workflow = Workflow::default();
    block_on(workflow.initialize_with(backend)).expect("session should initialize");
    workflow
}

fn titles(cards: &[snapshop_common::workflow::ProductCard]) -> Vec<&str> {
    cards.iter().map(|c| c.title.as_str()).collect()
}

#[test]
fn initialization_stores_url_and_reveals_form() {
    let backend = FakeBackend::new();
    let workflow = initialized(&backend);

    assert!(workflow.is_modal_open());
    assert!(workflow.is_form_revealed());
    assert_eq!(workflow.session().url(), Some(UPLOAD_URL));
    assert_eq!(
        backend.requests(),
        vec![Recorded::GetText("/blobstore-upload-url".to_string())]
    );
}

#[test]
fn failed_url_issuance_propagates_and_keeps_form_hidden() {
    let backend = FakeBackend::new();
    backend.push_reply(500, "internal error");
    let mut workflow = Workflow::default();

    let err = block_on(workflow.initialize_with(&backend)).unwrap_err();

    assert_eq!(
        err,
        WorkflowError::RequestFailed {
            endpoint: "/blobstore-upload-url".to_string(),
            status: 500,
        }
    );
    assert!(!workflow.is_form_revealed());
    assert!(!workflow.session().is_initialized());
    assert!(matches!(workflow.status(), Status::Failed(_)));
}

#[test]
fn submitting_before_initialization_issues_no_request() {
    let backend = FakeBackend::new();
    let mut workflow = Workflow::default();

    let err = block_on(workflow.submit_with(&backend, &form())).unwrap_err();

    assert_eq!(err, WorkflowError::SessionNotInitialized);
    assert!(backend.requests().is_empty());
    assert!(!workflow.is_submitting());
}

#[test]
fn missing_photo_fails_fast_and_keeps_session() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);

    assert_eq!(
        workflow.begin_submission(None::<UploadForm<String>>),
        Err(WorkflowError::MissingPhoto)
    );
    assert!(workflow.session().is_initialized());
    assert!(workflow.is_form_revealed());
}

#[test]
fn begin_submission_clears_hides_and_shows_loading() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    backend.push_reply(200, &flat_body(&["old"]));
    block_on(workflow.submit_with(&backend, &form())).unwrap();
    backend.push_reply(200, "https://blobstore/upload/session-2");
    block_on(workflow.initialize_with(&backend)).unwrap();

    let (url, posted) = workflow.begin_submission(Some(form())).unwrap();

    assert_eq!(url, "https://blobstore/upload/session-2");
    assert_eq!(posted, form());
    assert!(workflow.results().is_empty());
    assert!(!workflow.is_modal_open());
    assert!(!workflow.is_form_revealed());
    assert_eq!(
        workflow.status(),
        &Status::Loading(WorkflowConfig::default().loading_message)
    );
    assert!(workflow.is_submitting());
}

#[test]
fn flat_reply_renders_one_card_per_record_in_order() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    backend.push_reply(200, &flat_body(&["camera", "tripod", "camera"]));

    let appended = block_on(workflow.submit_with(&backend, &form())).unwrap();

    assert_eq!(appended, 3);
    let cards: Vec<_> = workflow
        .results()
        .blocks
        .iter()
        .map(|block| match block {
            ResultBlock::Card(card) => card.clone(),
            ResultBlock::Row(_) => panic!("flat reply rendered as a row"),
        })
        .collect();
    assert_eq!(titles(&cards), ["camera", "tripod", "camera"]);
    assert_eq!(cards[0].view_href, "https://store/camera");
    assert!(cards[0].open_in_new_tab);
    assert_eq!(workflow.status(), &Status::Idle);
    assert_eq!(
        backend.requests()[1],
        Recorded::PostForm {
            url: UPLOAD_URL.to_string(),
            category: "shopping-list".to_string(),
            photo: "list.jpg".to_string(),
        }
    );
}

#[test]
fn grouped_reply_preserves_both_levels_of_order() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    backend.push_reply(
        200,
        &grouped_body(&[
            ("canon camera", vec!["eos", "powershot"]),
            ("pink shoes", vec!["pumps"]),
            ("tea", vec![]),
        ]),
    );

    let appended = block_on(workflow.submit_with(&backend, &form())).unwrap();

    assert_eq!(appended, 3);
    let results = workflow.results();
    assert_eq!(results.query_labels, ["canon camera", "pink shoes", "tea"]);
    let rows: Vec<Vec<&str>> = results
        .blocks
        .iter()
        .map(|block| match block {
            ResultBlock::Row(cards) => titles(cards),
            ResultBlock::Card(_) => panic!("grouped reply rendered as a flat card"),
        })
        .collect();
    assert_eq!(rows, vec![vec!["eos", "powershot"], vec!["pumps"], vec![]]);
}

#[test]
fn resubmission_replaces_previous_results() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    backend.push_reply(200, &grouped_body(&[("first", vec!["a", "b"]), ("second", vec!["c"])]));
    block_on(workflow.submit_with(&backend, &form())).unwrap();

    backend.push_reply(200, "https://blobstore/upload/session-2");
    block_on(workflow.initialize_with(&backend)).unwrap();
    backend.push_reply(200, &grouped_body(&[("third", vec!["d"])]));
    block_on(workflow.submit_with(&backend, &form())).unwrap();

    assert_eq!(workflow.results().query_labels, ["third"]);
    assert_eq!(workflow.results().blocks.len(), 1);
    assert_eq!(workflow.results().card_count(), 1);
}

#[test]
fn session_url_is_single_use() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    backend.push_reply(200, &flat_body(&["a"]));
    block_on(workflow.submit_with(&backend, &form())).unwrap();

    let err = block_on(workflow.submit_with(&backend, &form())).unwrap_err();

    assert_eq!(err, WorkflowError::SessionNotInitialized);
    assert_eq!(backend.requests().len(), 2);
    assert_eq!(workflow.results().card_count(), 1);
}

#[test]
fn error_status_replaces_loading_with_failure() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    backend.push_reply(413, "too large");

    let err = block_on(workflow.submit_with(&backend, &form())).unwrap_err();

    assert_eq!(
        err,
        WorkflowError::ResponseFailed {
            status: 413,
            body: "too large".to_string(),
        }
    );
    assert!(matches!(workflow.status(), Status::Failed(msg) if msg.contains("413")));
    assert!(!workflow.is_submitting());
    assert!(workflow.results().is_empty());
}

#[test]
fn transport_failure_is_normalized_into_a_failed_reply() {
    let backend = FakeBackend::new();
    backend.push_transport_error("network down");

    let outcome = block_on(submit(&backend, UPLOAD_URL, &form()));

    assert_eq!(
        outcome.unwrap_err(),
        WorkflowError::TransportFailed {
            reason: "network down".to_string()
        }
    );
}

#[test]
fn second_submission_while_pending_is_rejected() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    workflow.begin_submission(Some(form())).unwrap();

    assert_eq!(
        workflow.begin_submission(Some(form())),
        Err(WorkflowError::SubmissionInFlight)
    );
    assert_eq!(
        workflow.status(),
        &Status::Loading(WorkflowConfig::default().loading_message)
    );
}

#[test]
fn links_follow_the_new_tab_setting() {
    let backend = FakeBackend::new();
    backend.push_reply(200, UPLOAD_URL);
    let mut workflow = Workflow::new(WorkflowConfig {
        open_links_in_new_tab: false,
        ..WorkflowConfig::default()
    });
    block_on(workflow.initialize_with(&backend)).unwrap();
    backend.push_reply(200, &flat_body(&["a"]));

    block_on(workflow.submit_with(&backend, &form())).unwrap();

    match &workflow.results().blocks[0] {
        ResultBlock::Card(card) => assert!(!card.open_in_new_tab),
        ResultBlock::Row(_) => panic!("expected a card"),
    }
}

#[test]
fn successful_retry_clears_a_previous_failure() {
    let backend = FakeBackend::new();
    backend.push_reply(503, "");
    backend.push_reply(200, UPLOAD_URL);
    let mut workflow = Workflow::default();

    assert!(block_on(workflow.initialize_with(&backend)).is_err());
    block_on(workflow.initialize_with(&backend)).unwrap();

    assert_eq!(workflow.status(), &Status::Idle);
    assert!(workflow.is_form_revealed());
}

#[test]
fn upload_trigger_is_ignored_while_submitting() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    workflow.begin_submission(Some(form())).unwrap();

    assert!(!workflow.open_upload_dialog());
    let late = workflow.session_issued(Err(WorkflowError::RequestFailed {
        endpoint: "/blobstore-upload-url".to_string(),
        status: 500,
    }));

    assert!(late.is_err());
    assert!(workflow.is_submitting());
    assert!(!workflow.is_modal_open());
    assert_eq!(
        workflow.status(),
        &Status::Loading(WorkflowConfig::default().loading_message)
    );
}

#[test]
fn initializing_while_submitting_issues_no_request() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    workflow.begin_submission(Some(form())).unwrap();

    let err = block_on(workflow.initialize_with(&backend)).unwrap_err();

    assert_eq!(err, WorkflowError::SubmissionInFlight);
    assert_eq!(backend.requests().len(), 1);
    assert!(workflow.is_submitting());
}

#[test]
fn closing_the_dialog_keeps_the_session() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);

    workflow.close_upload_dialog();

    assert!(!workflow.is_modal_open());
    assert!(workflow.session().is_initialized());
    assert_eq!(workflow.session().url(), Some(UPLOAD_URL));
}

#[test]
fn transport_failure_during_upload_fails_the_workflow() {
    let backend = FakeBackend::new();
    let mut workflow = initialized(&backend);
    backend.push_transport_error("down");

    let err = block_on(workflow.submit_with(&backend, &form())).unwrap_err();

    assert_eq!(
        err,
        WorkflowError::TransportFailed {
            reason: "down".to_string()
        }
    );
    assert!(matches!(workflow.status(), Status::Failed(_)));
    assert!(!workflow.is_submitting());
    assert!(workflow.results().is_empty());
}

#[test]
fn blank_upload_url_keeps_form_hidden() {
    let backend = FakeBackend::new();
    backend.push_reply(200, "  ");
    let mut workflow = Workflow::default();

    let err = block_on(workflow.initialize_with(&backend)).unwrap_err();

    assert!(matches!(err, WorkflowError::MalformedResponse(_)));
    assert!(!workflow.is_form_revealed());
    assert!(!workflow.session().is_initialized());
}

#[test]
fn unfilled_form_without_session_reports_the_session() {
    let backend = FakeBackend::new();
    let mut workflow = Workflow::default();

    assert_eq!(
        workflow.begin_submission(None::<UploadForm<String>>),
        Err(WorkflowError::SessionNotInitialized)
    );
    assert!(backend.requests().is_empty());
}
