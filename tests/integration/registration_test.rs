use person_registry::form::{
    Field, RegistrationForm, RegistrationView, StatusMessage, SubmitOutcome,
};
use person_registry::{Gender, GovtIdKind, PersonApi};

use crate::utils::{FakePersonApi, valid_form};

#[tokio::test]
async fn test_valid_submission_resets_form() {
    let api = FakePersonApi::empty();
    let mut view = RegistrationView::new(valid_form());

    let outcome = view.submit(&api).await;

    assert!(outcome.is_submitted());
    assert_eq!(
        view.status(),
        Some(&StatusMessage::Success("Successfully submitted".to_string()))
    );
    assert!(!view.is_pending());
    assert_eq!(view.form, RegistrationForm::default());

    let created = api.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].name, "Asha Rao");
    assert_eq!(created[0].age, 30);
    assert_eq!(created[0].gender, Gender::Female);
}

#[tokio::test]
async fn test_underage_is_rejected_without_request() {
    let api = FakePersonApi::empty();
    let mut view = RegistrationView::new(valid_form().with(Field::Age, "15"));

    let outcome = view.submit(&api).await;

    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    assert_eq!(api.create_count(), 0);
    assert_eq!(
        view.status().map(StatusMessage::text),
        Some("You must be at least 18 years old")
    );
    // Input is kept so it can be corrected.
    assert_eq!(view.form.value(Field::Age), "15");
}

#[tokio::test]
async fn test_short_mobile_is_rejected() {
    let api = FakePersonApi::empty();
    let mut view = RegistrationView::new(valid_form().with(Field::MobileNumber, "12345"));

    let outcome = view.submit(&api).await;

    match outcome {
        SubmitOutcome::Rejected(errors) => {
            assert_eq!(
                errors.for_field(Field::MobileNumber).unwrap().message,
                "Number must contain 10 digits"
            );
        }
        other => panic!("expected rejection, got {other:?}"),
    }
    assert_eq!(api.create_count(), 0);
}

#[tokio::test]
async fn test_server_message_is_shown_on_failure() {
    let api = FakePersonApi::empty().failing_create(409, "Mobile number already registered");
    let mut view = RegistrationView::new(valid_form());

    let outcome = view.submit(&api).await;

    assert!(matches!(outcome, SubmitOutcome::Failed(_)));
    assert!(!view.is_pending());
    assert_eq!(
        view.status(),
        Some(&StatusMessage::Failure(
            "Mobile number already registered".to_string()
        ))
    );
    // Nothing is lost on failure.
    assert_eq!(view.form.value(Field::Name), "Asha Rao");
    assert_eq!(api.create_count(), 1);
}

#[tokio::test]
async fn test_empty_error_body_falls_back_to_network_message() {
    let api = FakePersonApi::empty().failing_create(500, "");
    let mut view = RegistrationView::new(valid_form());

    view.submit(&api).await;

    assert_eq!(
        view.status().map(StatusMessage::text),
        Some("Register failed due to network issue")
    );
}

#[tokio::test]
async fn test_full_form_sends_active_id_only() {
    let api = FakePersonApi::empty();
    let mut form = valid_form()
        .with(Field::MobileNumber, "9876543210")
        .with(Field::Email, "asha@example.com")
        .with(Field::Pincode, "560001")
        .with(Field::Religion, "Hinduism")
        .with(Field::BloodGroup, "O+");
    form.set_id_kind(Some(GovtIdKind::Aadhaar));
    form.set(Field::AadhaarNumber, "1234-5678-90");
    form.select_state("Karnataka");
    form.set(Field::City, "Bengaluru");

    let mut view = RegistrationView::new(form);
    assert!(view.submit(&api).await.is_submitted());

    let created = api.created.lock().unwrap();
    let sent = serde_json::to_value(&created[0]).unwrap();
    assert_eq!(sent["govtId"], "AADHAR");
    assert_eq!(sent["aadhaarNumber"], "1234-5678-90");
    assert!(sent.get("panNumber").is_none());
    assert_eq!(sent["state"], "Karnataka");
    assert_eq!(sent["city"], "Bengaluru");
    assert_eq!(sent["nationality"], "India");
}

#[tokio::test]
async fn test_pending_while_create_is_in_flight() {
    let api = FakePersonApi::empty();
    let mut view = RegistrationView::new(valid_form());

    let person = view.begin_submit().unwrap();
    let request = api.create_person(&person);
    assert!(view.is_pending());
    assert_eq!(api.create_count(), 0);

    let result = request.await;
    assert_eq!(api.create_count(), 1);
    assert!(view.is_pending());

    let outcome = view.finish_submit(&person, result);
    assert!(outcome.is_submitted());
    assert!(!view.is_pending());
    assert_eq!(view.form, RegistrationForm::default());
}
